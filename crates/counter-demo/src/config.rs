use eapp_utils::{
    color::{parse_color, to_hex},
    widgets::anim_checkbox::{AnimCheckBox, AnimCheckBoxStyle},
};
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL_COLOR: Color32 = Color32::from_rgb(0x23, 0xd1, 0x8b);

/// User settings kept in eframe's storage between runs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub label_color: String,
    pub show_plot: bool,
    pub toggle_style: AnimCheckBoxStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label_color: to_hex(DEFAULT_LABEL_COLOR),
            show_plot: true,
            toggle_style: AnimCheckBoxStyle::default(),
        }
    }
}

impl Settings {
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default()
    }

    pub fn label_color(&self) -> Color32 {
        parse_color(&self.label_color).unwrap_or_else(|err| {
            log::error!("invalid label color in settings: {err}");
            DEFAULT_LABEL_COLOR
        })
    }

    pub fn set_label_color(&mut self, color: Color32) {
        self.label_color = to_hex(color);
    }

    /// Builds the plot switch, a broken style falls back to the default colors
    pub fn plot_toggle(&self) -> AnimCheckBox {
        let toggle = AnimCheckBox::new(&self.toggle_style).unwrap_or_else(|err| {
            log::error!("invalid toggle style in settings: {err}");
            AnimCheckBox::default()
        });
        toggle.checked(self.show_plot).label("Show plot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.label_color(), DEFAULT_LABEL_COLOR);

        let toggle = settings.plot_toggle();
        assert!(toggle.is_checked());
        assert_eq!(toggle.widget_info(true).label.as_deref(), Some("Show plot"));
    }

    #[test]
    fn broken_values_fall_back() {
        let settings = Settings {
            label_color: "not a color".to_owned(),
            show_plot: false,
            toggle_style: AnimCheckBoxStyle {
                bar_color: "#12".to_owned(),
                ..Default::default()
            },
        };
        assert_eq!(settings.label_color(), DEFAULT_LABEL_COLOR);

        let toggle = settings.plot_toggle();
        assert!(!toggle.is_checked());
        assert_eq!(toggle.colors(), AnimCheckBox::default().colors());
    }

    #[test]
    fn label_color_round_trips() {
        let mut settings = Settings::default();
        settings.set_label_color(Color32::from_rgb(1, 2, 3));
        assert_eq!(settings.label_color, "#010203");
        assert_eq!(settings.label_color(), Color32::from_rgb(1, 2, 3));
    }
}
