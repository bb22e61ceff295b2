//! User-facing controls that drive fetch cycles

use crate::data::Window;

/// What started a fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    InitialLoad,
    Refresh,
    WindowChanged,
    InvertToggled,
}

/// Current values of the time-range selector and invert checkbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsState {
    pub window: Window,
    pub invert: bool,
}

impl ControlsState {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            invert: false,
        }
    }

    /// Select `window`; returns the trigger if it changed
    pub fn set_window(&mut self, window: Window) -> Option<Trigger> {
        if self.window == window {
            return None;
        }
        self.window = window;
        Some(Trigger::WindowChanged)
    }

    pub fn toggle_invert(&mut self) -> Trigger {
        self.invert = !self.invert;
        Trigger::InvertToggled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_change_triggers_once() {
        let mut controls = ControlsState::new(Window::days(30));
        assert_eq!(controls.set_window(Window::days(30)), None);
        assert_eq!(controls.set_window(Window::days(7)), Some(Trigger::WindowChanged));
        assert_eq!(controls.window, Window::days(7));
    }

    #[test]
    fn test_invert_toggle() {
        let mut controls = ControlsState::new(Window::days(30));
        assert!(!controls.invert);
        assert_eq!(controls.toggle_invert(), Trigger::InvertToggled);
        assert!(controls.invert);
    }
}
