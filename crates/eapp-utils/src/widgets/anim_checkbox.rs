//! AnimCheckBox widget impl
//!
//! A switch drawn as a rounded bar with a sliding handle. Flipping it slides
//! the handle over, then shows a short expanding pulse behind the handle.

use crate::{
    animation::{Easing, Tween},
    color::{ColorError, lighter, parse_color},
};
use eframe::egui::{
    Color32, Margin, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, Widget, WidgetInfo,
    WidgetType, epaint::CircleShape, pos2, vec2,
};
use serde::{Deserialize, Serialize};

/// Seconds the handle takes to slide across
pub const POSITION_DURATION: f64 = 0.2;

/// Seconds the pulse takes to expand
pub const PULSE_DURATION: f64 = 0.25;

pub const PULSE_START_RADIUS: f32 = 10.0;
pub const PULSE_END_RADIUS: f32 = 20.0;

const OUTLINE_COLOR: Color32 = Color32::from_rgb(192, 192, 192);

/// Textual color configuration, as stored in settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimCheckBoxStyle {
    pub bar_color: String,
    pub checked_color: String,
    pub handle_color: String,
    pub pulse_unchecked_color: String,
    pub pulse_checked_color: String,
}

impl Default for AnimCheckBoxStyle {
    fn default() -> Self {
        Self {
            bar_color: "gray".to_owned(),
            checked_color: "#23d18b".to_owned(),
            handle_color: "white".to_owned(),
            pulse_unchecked_color: "#44999999".to_owned(),
            pulse_checked_color: "#4400B0EE".to_owned(),
        }
    }
}

/// Names the style field that failed to parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid `{field}`: {source}")]
pub struct ToggleColorError {
    pub field: &'static str,
    pub source: ColorError,
}

/// Resolved colors, fixed once the widget is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleColors {
    pub bar: Color32,
    pub bar_checked: Color32,
    pub handle: Color32,
    pub handle_checked: Color32,
    pub pulse_unchecked: Color32,
    pub pulse_checked: Color32,
}

impl ToggleColors {
    pub fn from_style(style: &AnimCheckBoxStyle) -> Result<Self, ToggleColorError> {
        let parse = |field: &'static str, text: &str| {
            parse_color(text).map_err(|source| ToggleColorError { field, source })
        };

        let checked = parse("checked_color", &style.checked_color)?;

        Ok(Self {
            bar: parse("bar_color", &style.bar_color)?,
            bar_checked: lighter(checked, 150),
            handle: parse("handle_color", &style.handle_color)?,
            handle_checked: checked,
            pulse_unchecked: parse("pulse_unchecked_color", &style.pulse_unchecked_color)?,
            pulse_checked: parse("pulse_checked_color", &style.pulse_checked_color)?,
        })
    }
}

/// Where the transition sequence currently is
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Requested, starts on the next tick once the clock is known
    Pending,
    Position(Tween),
    Pulse(Tween),
}

/// Clock driven state of the switch, no egui context needed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToggleState {
    checked: bool,
    handle_position: f32,
    pulse_radius: f32,
    phase: Phase,
}

impl ToggleState {
    /// A settled switch, no animation pending
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            handle_position: if checked { 1.0 } else { 0.0 },
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    #[inline]
    pub fn handle_position(&self) -> f32 {
        self.handle_position
    }

    #[inline]
    pub fn pulse_radius(&self) -> f32 {
        self.pulse_radius
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    #[inline]
    pub fn is_pulsing(&self) -> bool {
        matches!(self.phase, Phase::Pulse(_))
    }

    /// Returns `true` when the state actually changed
    pub fn set_checked(&mut self, checked: bool, now: f64) -> bool {
        if self.checked == checked {
            return false;
        }

        self.checked = checked;
        self.start_transition(now);
        true
    }

    /// Like [`Self::set_checked`], for callers without a clock: `checked`
    /// changes now, the animation starts on the next [`Self::tick`]
    pub fn request_checked(&mut self, checked: bool) -> bool {
        if self.checked == checked {
            return false;
        }

        self.checked = checked;
        self.phase = Phase::Pending;
        true
    }

    pub fn toggle(&mut self, now: f64) {
        self.set_checked(!self.checked, now);
    }

    fn start_transition(&mut self, now: f64) {
        let target = if self.checked { 1.0 } else { 0.0 };
        // replaces a running sequence, never queued
        self.phase = Phase::Position(
            Tween::new(self.handle_position, target, now, POSITION_DURATION)
                .easing(Easing::InOutCubic),
        );
    }

    /// Advances the sequence to `now`, returns `true` while still animating
    pub fn tick(&mut self, now: f64) -> bool {
        loop {
            match self.phase {
                Phase::Idle => return false,
                Phase::Pending => self.start_transition(now),
                Phase::Position(tween) => {
                    self.handle_position = tween.value_at(now).clamp(0.0, 1.0);
                    if !tween.is_finished(now) {
                        return true;
                    }

                    self.phase = Phase::Pulse(Tween::new(
                        PULSE_START_RADIUS,
                        PULSE_END_RADIUS,
                        tween.end_time(),
                        PULSE_DURATION,
                    ));
                }
                Phase::Pulse(tween) => {
                    self.pulse_radius = tween.value_at(now);
                    if !tween.is_finished(now) {
                        return true;
                    }

                    self.phase = Phase::Idle;
                }
            }
        }
    }

    /// Draw commands for the switch inside `rect`
    pub fn shapes(&self, rect: Rect, colors: &ToggleColors) -> Vec<Shape> {
        let handle_r = (0.3 * rect.height()).round();
        let trail_len = rect.width() - 2.0 * handle_r;
        let bar_rect = Rect::from_center_size(rect.center(), vec2(trail_len, 0.4 * rect.height()));
        let rounding = bar_rect.height() / 2.0;

        let center = pos2(
            rect.left() + handle_r + trail_len * self.handle_position,
            bar_rect.center().y,
        );

        let mut shapes = Vec::with_capacity(3);

        if self.is_pulsing() {
            let fill = if self.checked {
                colors.pulse_checked
            } else {
                colors.pulse_unchecked
            };
            shapes.push(Shape::circle_filled(center, self.pulse_radius, fill));
        }

        let (bar_fill, handle_fill, handle_stroke) = if self.checked {
            (colors.bar_checked, colors.handle_checked, Stroke::NONE)
        } else {
            (
                colors.bar,
                colors.handle,
                Stroke::new(1.0, OUTLINE_COLOR),
            )
        };

        shapes.push(Shape::rect_filled(bar_rect, rounding, bar_fill));
        shapes.push(Shape::Circle(CircleShape {
            center,
            radius: handle_r,
            fill: handle_fill,
            stroke: handle_stroke,
        }));

        shapes
    }
}

/// An animated on/off switch
///
/// The widget owns its state, keep it alive across frames and add it by
/// mutable reference:
/// ```ignore
/// let response = ui.add(&mut self.switch);
/// if response.changed() {
///     log::info!("switched to {}", self.switch.is_checked());
/// }
/// ```
pub struct AnimCheckBox {
    state: ToggleState,
    colors: ToggleColors,
    size: Vec2,
    margin: Margin,
    label: String,
    notify_change: bool,
}

impl AnimCheckBox {
    /// Fails when any style color can not be parsed
    pub fn new(style: &AnimCheckBoxStyle) -> Result<Self, ToggleColorError> {
        Ok(Self::with_colors(ToggleColors::from_style(style)?))
    }

    pub fn with_colors(colors: ToggleColors) -> Self {
        Self {
            state: ToggleState::default(),
            colors,
            size: vec2(58.0, 45.0),
            margin: Margin {
                left: 8,
                right: 8,
                top: 0,
                bottom: 0,
            },
            label: String::new(),
            notify_change: false,
        }
    }

    /// Starts in `checked` without animating
    #[inline]
    pub fn checked(mut self, checked: bool) -> Self {
        self.state = ToggleState::new(checked);
        self
    }

    #[inline]
    pub fn margin(mut self, margin: impl Into<Margin>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Name reported to screen readers
    #[inline]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// Changes the state right away, the animation runs once the widget is shown
    pub fn set_checked(&mut self, checked: bool) {
        if self.state.request_checked(checked) {
            self.notify_change = true;
        }
    }

    #[inline]
    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    #[inline]
    pub fn colors(&self) -> &ToggleColors {
        &self.colors
    }

    #[inline]
    pub fn size_hint(&self) -> Vec2 {
        self.size
    }

    /// The clickable and painted part of the allocated `rect`
    pub fn contents_rect(&self, rect: Rect) -> Rect {
        Rect::from_min_max(
            rect.min + vec2(self.margin.left as f32, self.margin.top as f32),
            rect.max - vec2(self.margin.right as f32, self.margin.bottom as f32),
        )
    }

    pub fn hit(&self, rect: Rect, pos: Pos2) -> bool {
        self.contents_rect(rect).contains(pos)
    }

    pub fn widget_info(&self, enabled: bool) -> WidgetInfo {
        WidgetInfo::selected(WidgetType::Checkbox, enabled, self.is_checked(), &self.label)
    }
}

impl Default for AnimCheckBox {
    fn default() -> Self {
        let colors = ToggleColors::from_style(&AnimCheckBoxStyle::default())
            .unwrap_or_else(|err| unreachable!("default style is valid: {err}"));
        Self::with_colors(colors)
    }
}

impl Widget for &mut AnimCheckBox {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, outer) = ui.allocate_exact_size(self.size, Sense::hover());
        let contents = self.contents_rect(rect);
        let mut response = ui.interact(contents, outer.id.with("contents"), Sense::click());

        let now = ui.input(|i| i.time);
        let mut changed = std::mem::take(&mut self.notify_change);

        if response.clicked() {
            self.state.toggle(now);
            changed = true;
        }

        if changed {
            log::debug!("anim checkbox switched to {}", self.state.is_checked());
            response.mark_changed();
        }

        if self.state.tick(now) {
            ui.ctx().request_repaint();
        }

        response.widget_info(|| self.widget_info(ui.is_enabled()));

        if ui.is_rect_visible(rect) {
            ui.painter().extend(self.state.shapes(contents, &self.colors));
        }

        response
    }
}
