#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

pub mod app;
pub mod color_dialog;
pub mod config;
pub mod counter;
pub mod icon;
pub mod tray;

pub const APP_NAME: &str = "counter-demo";
pub const TITLE: &str = "Rust ♥ egui";

fn main() {
    eapp_utils::setup_loggers("counter-demo.log").unwrap();
    eapp_utils::platform::set_app_user_model_id("rust_demo_app");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([360.0, 320.0])
            .with_icon(icon::window_icon()),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    ) {
        log::error!("run native fails: {err}");
    }
}
