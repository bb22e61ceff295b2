//! Time-range selector

use egui::{ComboBox, Ui};

use crate::constants::fetch::WINDOW_CHOICES;
use crate::data::Window;

/// Combo box over the supported history windows
pub struct WindowSelector<'a> {
    window: &'a mut Window,
    choices: &'a [u32],
}

impl<'a> WindowSelector<'a> {
    pub fn new(window: &'a mut Window) -> Self {
        Self {
            window,
            choices: &WINDOW_CHOICES,
        }
    }

    /// Show the widget; returns true when the selection changed
    pub fn show(self, ui: &mut Ui) -> bool {
        let before = *self.window;
        ComboBox::from_label("Time range")
            .selected_text(self.window.label())
            .show_ui(ui, |ui| {
                for &days in self.choices {
                    let choice = Window::days(days);
                    ui.selectable_value(&mut *self.window, choice, choice.label());
                }
            });
        *self.window != before
    }
}
