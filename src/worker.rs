//! Background worker for fetch cycles
//!
//! Keeps the UI responsive while the network call is in flight. Requests are
//! handled one at a time; when several are queued only the newest runs.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread::{self, JoinHandle};

use crate::data::Window;
use crate::fetch::{FetchOutcome, Fetcher};

/// Requests that can be sent to the background worker
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerRequest {
    /// Resolve the series for a window
    Fetch { generation: u64, window: Window },
    /// Shutdown the worker
    Shutdown,
}

/// Results returned from the background worker
#[derive(Debug)]
pub enum WorkerResult {
    Loaded { generation: u64, outcome: FetchOutcome },
}

/// Background worker that owns the fetcher and its cache
pub struct FetchWorker {
    tx: Sender<WorkerRequest>,
    rx: Receiver<WorkerResult>,
    handle: Option<JoinHandle<()>>,
}

impl FetchWorker {
    /// Spawn the worker thread.
    ///
    /// `notify` runs after each result is queued, typically to wake the UI.
    pub fn spawn<N>(fetcher: Fetcher, notify: N) -> Self
    where
        N: Fn() + Send + 'static,
    {
        let (req_tx, req_rx) = channel::<WorkerRequest>();
        let (res_tx, res_rx) = channel::<WorkerResult>();

        let handle = thread::spawn(move || {
            Self::worker_loop(fetcher, req_rx, res_tx, notify);
        });

        Self {
            tx: req_tx,
            rx: res_rx,
            handle: Some(handle),
        }
    }

    fn worker_loop<N: Fn()>(
        fetcher: Fetcher,
        rx: Receiver<WorkerRequest>,
        tx: Sender<WorkerResult>,
        notify: N,
    ) {
        while let Ok(first) = rx.recv() {
            match coalesce(first, &rx) {
                WorkerRequest::Fetch { generation, window } => {
                    tracing::debug!(generation, %window, "worker running fetch");
                    let outcome = fetcher.fetch(window);
                    if tx.send(WorkerResult::Loaded { generation, outcome }).is_err() {
                        break;
                    }
                    notify();
                }
                WorkerRequest::Shutdown => break,
            }
        }
        tracing::debug!("fetch worker stopped");
    }

    /// Send a request to the worker (non-blocking)
    pub fn request(&self, req: WorkerRequest) {
        if self.tx.send(req).is_err() {
            tracing::error!("fetch worker is gone, request dropped");
        }
    }

    /// Poll for completed work (non-blocking)
    pub fn poll(&self) -> Option<WorkerResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    #[cfg(test)]
    fn wait(&self, timeout: std::time::Duration) -> Option<WorkerResult> {
        self.rx.recv_timeout(timeout).ok()
    }
}

/// Newest request among `first` and everything already queued behind it.
///
/// Superseded fetches are dropped unrun. A queued shutdown always wins.
fn coalesce(first: WorkerRequest, rx: &Receiver<WorkerRequest>) -> WorkerRequest {
    let mut latest = first;
    while let Ok(next) = rx.try_recv() {
        if let WorkerRequest::Fetch { generation, .. } = &latest {
            tracing::debug!(generation, "skipping superseded fetch");
        }
        latest = next;
        if latest == WorkerRequest::Shutdown {
            break;
        }
    }
    latest
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(WorkerRequest::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SeriesCache;
    use crate::fetch::Origin;
    use crate::fetch::tests::{FakeSource, hourly};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_coalesce_keeps_newest() {
        let (tx, rx) = channel();
        tx.send(WorkerRequest::Fetch { generation: 2, window: Window::days(7) }).unwrap();
        tx.send(WorkerRequest::Fetch { generation: 3, window: Window::days(90) }).unwrap();

        let first = WorkerRequest::Fetch { generation: 1, window: Window::days(30) };
        assert_eq!(
            coalesce(first, &rx),
            WorkerRequest::Fetch { generation: 3, window: Window::days(90) }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_coalesce_stops_at_shutdown() {
        let (tx, rx) = channel();
        tx.send(WorkerRequest::Shutdown).unwrap();

        let first = WorkerRequest::Fetch { generation: 1, window: Window::days(30) };
        assert_eq!(coalesce(first, &rx), WorkerRequest::Shutdown);
    }

    #[test]
    fn test_worker_round_trip() {
        let (source, calls) = FakeSource::ok(hourly(100));
        let fetcher = Fetcher::new(source, SeriesCache::in_memory(), "xrp", 30);
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = notified.clone();

        let worker = FetchWorker::spawn(fetcher, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        worker.request(WorkerRequest::Fetch { generation: 1, window: Window::days(30) });

        match worker.wait(Duration::from_secs(5)) {
            Some(WorkerResult::Loaded { generation, outcome }) => {
                assert_eq!(generation, 1);
                assert_eq!(outcome.origin, Origin::Network);
                assert_eq!(outcome.series.len(), 34);
            }
            None => panic!("Expected Loaded result"),
        }
        // Dropping joins the thread, so the notification has run
        drop(worker);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }
}
