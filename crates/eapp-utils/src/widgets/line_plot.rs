//! LinePlot widget impl

use eframe::egui::{
    Align2, Color32, CornerRadius, Pos2, Rect, Response, Sense, Shape, Stroke, StrokeKind, Ui,
    Widget, pos2, vec2,
};

/// Plots a series of integers against their index
///
/// # Example
/// ```ignore
/// LinePlot::new(&history)
///     .height(180.0)
///     .line_color(Color32::LIGHT_BLUE)
///     .ui(ui);
/// ```
pub struct LinePlot<'a> {
    values: &'a [i64],
    height: f32,
    line_color: Color32,
}

impl<'a> LinePlot<'a> {
    pub fn new(values: &'a [i64]) -> Self {
        Self {
            values,
            height: 160.0,
            line_color: Color32::LIGHT_BLUE,
        }
    }

    #[inline]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    #[inline]
    pub fn line_color(mut self, color: impl Into<Color32>) -> Self {
        self.line_color = color.into();
        self
    }
}

impl Widget for LinePlot<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let visuals = ui.visuals();
        let painter = ui.painter();

        painter.rect(
            rect,
            CornerRadius::same(4),
            visuals.extreme_bg_color,
            visuals.widgets.noninteractive.bg_stroke,
            StrokeKind::Inside,
        );

        let plot_rect = rect.shrink(8.0);

        if let Some((min, max)) = value_range(self.values) {
            if min < 0 && max > 0 {
                let y = value_to_y(0, min, max, plot_rect);
                painter.line_segment(
                    [pos2(plot_rect.left(), y), pos2(plot_rect.right(), y)],
                    Stroke::new(1.0, visuals.weak_text_color()),
                );
            }

            let font_id = crate::get_small_font_id(ui);
            let text_color = visuals.weak_text_color();
            painter.text(
                rect.left_top() + vec2(4.0, 2.0),
                Align2::LEFT_TOP,
                max.to_string(),
                font_id.clone(),
                text_color,
            );
            painter.text(
                rect.left_bottom() + vec2(4.0, -2.0),
                Align2::LEFT_BOTTOM,
                min.to_string(),
                font_id,
                text_color,
            );
        }

        let points = plot_points(self.values, plot_rect);
        match points.len() {
            0 => {}
            1 => {
                painter.circle_filled(points[0], 2.5, self.line_color);
            }
            _ => {
                painter.add(Shape::line(points, Stroke::new(2.0, self.line_color)));
            }
        }

        response
    }
}

fn value_range(values: &[i64]) -> Option<(i64, i64)> {
    let min = *values.iter().min()?;
    let max = *values.iter().max()?;
    Some((min, max))
}

fn value_to_y(value: i64, min: i64, max: i64, rect: Rect) -> f32 {
    if max == min {
        return rect.center().y;
    }

    let fraction = (value - min) as f32 / (max - min) as f32;
    rect.bottom() - fraction * rect.height()
}

/// Screen positions of `values` inside `rect`
///
/// Samples are spread evenly over the width, a lone sample sits on the left
/// edge. The series min maps to the bottom and max to the top, a flat series
/// runs through the vertical center.
pub fn plot_points(values: &[i64], rect: Rect) -> Vec<Pos2> {
    let Some((min, max)) = value_range(values) else {
        return Vec::new();
    };

    let step = if values.len() > 1 {
        rect.width() / (values.len() - 1) as f32
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| pos2(rect.left() + step * i as f32, value_to_y(v, min, max, rect)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::from_min_size(pos2(10.0, 20.0), vec2(100.0, 50.0))
    }

    #[test]
    fn empty_series_has_no_points() {
        assert!(plot_points(&[], rect()).is_empty());
    }

    #[test]
    fn single_sample_sits_left_center() {
        assert_eq!(plot_points(&[7], rect()), vec![pos2(10.0, 45.0)]);
    }

    #[test]
    fn series_spans_the_rect() {
        let points = plot_points(&[0, 1, -1, 2, 3], rect());
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].x, 10.0);
        assert_eq!(points[1].x, 35.0);
        assert_eq!(points[4].x, 110.0);
        // max at the top, min at the bottom
        assert_eq!(points[4].y, 20.0);
        assert_eq!(points[2].y, 70.0);
        assert!(points[0].y > points[1].y);
    }

    #[test]
    fn flat_series_runs_through_center() {
        let points = plot_points(&[0, 0, 0], rect());
        assert!(points.iter().all(|p| p.y == 45.0));
    }
}
