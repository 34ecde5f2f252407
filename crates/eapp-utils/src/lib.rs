use eframe::egui;

pub mod animation;
pub mod color;
pub mod platform;
pub mod widgets;

/// Setup fonts for application
///
/// Uses the fonts bundled with egui and only adjusts the text sizes.
pub fn setup_fonts(ctx: &egui::Context) {
    ctx.set_fonts(egui::FontDefinitions::default());
    ctx.style_mut(setup_text_size);
}

pub fn setup_text_size(style: &mut egui::Style) {
    use crate::egui::FontFamily::Proportional;
    use crate::egui::TextStyle::*;
    use crate::egui::{FontFamily, FontId};
    style.text_styles = [
        (Heading, FontId::new(28.0, Proportional)),
        (Body, FontId::new(16.0, Proportional)),
        (Monospace, FontId::new(15.0, FontFamily::Monospace)),
        (Button, FontId::new(16.0, Proportional)),
        (Small, FontId::new(12.0, Proportional)),
    ]
    .into();
}

pub fn get_font_id(ui: &egui::Ui, text_style: &egui::TextStyle) -> Option<egui::FontId> {
    ui.style().text_styles.get(text_style).cloned()
}

pub fn get_body_font_id(ui: &egui::Ui) -> egui::FontId {
    get_font_id(ui, &egui::TextStyle::Body).unwrap_or_default()
}

pub fn get_small_font_id(ui: &egui::Ui) -> egui::FontId {
    get_font_id(ui, &egui::TextStyle::Small).unwrap_or_else(|| egui::FontId::proportional(12.0))
}

pub fn setup_loggers(log_filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    use simplelog::{Config, LevelFilter, WriteLogger};
    use std::fs::File;

    let log_path = std::env::current_exe()?
        .parent()
        .ok_or("executable has no parent directory")?
        .join(log_filename);

    #[cfg(debug_assertions)]
    {
        use simplelog::{CombinedLogger, SimpleLogger};
        CombinedLogger::init(vec![
            SimpleLogger::new(LevelFilter::Info, Config::default()),
            WriteLogger::new(LevelFilter::Warn, Config::default(), File::create(log_path)?),
        ])?;
    }

    #[cfg(not(debug_assertions))]
    WriteLogger::init(LevelFilter::Warn, Config::default(), File::create(log_path)?)?;

    Ok(())
}
