//! Fetch-cycle bookkeeping
//!
//! Every cycle gets a generation number. Only the result for the newest
//! generation is accepted; anything older arrived too late and is dropped.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Default)]
pub struct LoadState {
    /// Last generation handed out
    latest: u64,
    /// Generation still waiting for a result
    pending: Option<u64>,
    /// When the series currently on screen arrived
    pub last_loaded: Option<DateTime<Local>>,
}

impl LoadState {
    /// Start a new cycle and return its generation
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.pending = Some(self.latest);
        self.latest
    }

    /// Accept the result for `generation` if it is the one being waited on
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.pending != Some(generation) {
            return false;
        }
        self.pending = None;
        self.last_loaded = Some(Local::now());
        true
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
