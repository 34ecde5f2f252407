//! Small general purpose widgets

use crate::animation::color_lerp;
use eframe::egui::{self, Align2, CornerRadius, Sense, Stroke, Vec2, Widget, WidgetText};

/// A fixed size button with a flat fill that fades to the hover fill under the pointer
pub struct PlainButton {
    text: WidgetText,
    size: Vec2,
    font_size: Option<f32>,
    corner_radius: CornerRadius,
    stroke: Stroke,
}

impl PlainButton {
    pub fn new(size: Vec2, text: impl Into<WidgetText>) -> Self {
        Self {
            text: text.into(),
            size,
            font_size: None,
            corner_radius: CornerRadius::same(4),
            stroke: Stroke::NONE,
        }
    }

    #[inline]
    pub fn corner_radius(mut self, corner_radius: impl Into<CornerRadius>) -> Self {
        self.corner_radius = corner_radius.into();
        self
    }

    #[inline]
    pub fn stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.stroke = stroke.into();
        self
    }

    #[inline]
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }
}

impl Widget for PlainButton {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());
        let text = self.text.text().to_owned();
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, ui.is_enabled(), &text)
        });

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let visuals = ui.visuals();
        let factor = ui.ctx().animate_bool(response.id, response.hovered());
        let fill = visuals.widgets.inactive.weak_bg_fill;
        let hover = visuals.widgets.hovered.weak_bg_fill;

        ui.painter().rect(
            rect,
            self.corner_radius,
            color_lerp(fill, hover, factor),
            self.stroke,
            egui::StrokeKind::Inside,
        );

        let mut font_id = crate::get_body_font_id(ui);
        if let Some(font_size) = self.font_size {
            font_id.size = font_size;
        }

        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            text,
            font_id,
            color_lerp(visuals.text_color(), visuals.strong_text_color(), factor),
        );

        response
    }
}

pub fn get_theme_button_icon(ui: &egui::Ui) -> &'static str {
    if ui.visuals().dark_mode {
        "☀"
    } else {
        "🌙"
    }
}

pub fn get_theme_button(ui: &egui::Ui) -> egui::Button<'static> {
    egui::Button::new(get_theme_button_icon(ui)).frame(false)
}

pub fn theme_button<Btn: Widget>(ui: &mut egui::Ui, btn: Btn) -> egui::Response {
    let response = ui.add(btn);
    if response.clicked() {
        ui.ctx()
            .set_theme(egui::Theme::from_dark_mode(!ui.visuals().dark_mode));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, pos2, vec2};

    fn run_frame(ctx: &egui::Context, events: Vec<Event>) -> egui::Response {
        let mut response = None;
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(200.0, 200.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::Area::new(egui::Id::new("plain_button_test"))
                .fixed_pos(Pos2::ZERO)
                .show(ctx, |ui| {
                    let button = PlainButton::new(vec2(80.0, 36.0), "+1")
                        .stroke(Stroke::new(1.0, egui::Color32::GRAY))
                        .corner_radius(CornerRadius::same(6))
                        .font_size(18.0);
                    response = Some(ui.add(button));
                });
        });
        response.expect("button was shown")
    }

    fn pointer_button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn plain_button_takes_its_size_and_clicks() {
        let ctx = egui::Context::default();
        for _ in 0..3 {
            run_frame(&ctx, vec![]);
        }

        let pos = pos2(40.0, 18.0);
        let pressed = run_frame(&ctx, vec![Event::PointerMoved(pos), pointer_button(pos, true)]);
        assert_eq!(pressed.rect.size(), vec2(80.0, 36.0));
        assert!(!pressed.clicked());

        let released = run_frame(&ctx, vec![pointer_button(pos, false)]);
        assert!(released.clicked());
    }
}
