use eframe::egui::{self, Color32, color_picker};

/// Picks a color with live preview; cancelling puts the original back
pub struct ColorDialog {
    original: Color32,
    color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted,
    Rejected,
}

impl ColorDialog {
    pub fn open(current: Color32) -> Self {
        Self {
            original: current,
            color: current,
        }
    }

    #[inline]
    pub fn original(&self) -> Color32 {
        self.original
    }

    /// Applies `color` to `target` right away
    pub fn edit(&mut self, color: Color32, target: &mut Color32) {
        self.color = color;
        *target = color;
    }

    pub fn finish(&self, outcome: DialogOutcome, target: &mut Color32) {
        match outcome {
            DialogOutcome::Accepted => *target = self.color,
            DialogOutcome::Rejected => *target = self.original,
        }
    }

    /// Returns the outcome once the user is done, `target` is already final by then
    pub fn show(&mut self, ctx: &egui::Context, target: &mut Color32) -> Option<DialogOutcome> {
        let mut open = true;
        let mut outcome = None;

        egui::Window::new("Select Color")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let mut color = self.color;
                if color_picker::color_picker_color32(ui, &mut color, color_picker::Alpha::Opaque) {
                    self.edit(color, target);
                }

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = Some(DialogOutcome::Accepted);
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(DialogOutcome::Rejected);
                    }
                });
            });

        if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = Some(DialogOutcome::Rejected);
        }

        if let Some(outcome) = outcome {
            self.finish(outcome, target);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_apply_live() {
        let mut label = Color32::WHITE;
        let mut dialog = ColorDialog::open(label);
        dialog.edit(Color32::RED, &mut label);
        assert_eq!(label, Color32::RED);
    }

    #[test]
    fn reject_restores_original() {
        let mut label = Color32::WHITE;
        let mut dialog = ColorDialog::open(label);
        dialog.edit(Color32::RED, &mut label);
        dialog.edit(Color32::BLUE, &mut label);
        dialog.finish(DialogOutcome::Rejected, &mut label);
        assert_eq!(label, Color32::WHITE);
    }

    #[test]
    fn accept_keeps_last_edit() {
        let mut label = Color32::WHITE;
        let mut dialog = ColorDialog::open(label);
        dialog.edit(Color32::GREEN, &mut label);
        dialog.finish(DialogOutcome::Accepted, &mut label);
        assert_eq!(label, Color32::GREEN);
        assert_eq!(dialog.original(), Color32::WHITE);
    }
}
