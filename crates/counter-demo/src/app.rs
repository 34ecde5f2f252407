use crate::{
    TITLE,
    color_dialog::ColorDialog,
    config::Settings,
    counter::Counter,
    tray::{Tray, TrayAction},
};
use eapp_utils::widgets::{
    anim_checkbox::AnimCheckBox,
    line_plot::LinePlot,
    simple_widgets::{PlainButton, get_theme_button, theme_button},
};
use eframe::egui::{self, Color32, RichText, vec2};

pub struct App {
    settings: Settings,
    counter: Counter,
    label_color: Color32,
    plot_toggle: AnimCheckBox,
    color_dialog: Option<ColorDialog>,
    tray: Option<Tray>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        eapp_utils::setup_fonts(&cc.egui_ctx);

        let settings = Settings::load(cc.storage);

        let tray = match Tray::new(cc.egui_ctx.clone(), TITLE) {
            Ok(tray) => Some(tray),
            Err(err) => {
                log::warn!("tray icon unavailable: {err:#}");
                None
            }
        };

        Self {
            counter: Counter::default(),
            label_color: settings.label_color(),
            plot_toggle: settings.plot_toggle(),
            color_dialog: None,
            tray,
            settings,
        }
    }
}

impl App {
    fn open_color_dialog(&mut self) {
        if self.color_dialog.is_none() {
            self.color_dialog = Some(ColorDialog::open(self.label_color));
        }
    }

    fn handle_tray(&mut self, ctx: &egui::Context) {
        let Some(tray) = &self.tray else {
            return;
        };

        let actions: Vec<_> = std::iter::from_fn(|| tray.poll()).collect();
        for action in actions {
            log::info!("tray action: {action:?}");
            match action {
                TrayAction::ChangeColor => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
                    self.open_color_dialog();
                }
                TrayAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            }
        }
    }

    fn ui_counter(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(self.counter.value().to_string())
                    .size(64.0)
                    .strong()
                    .color(self.label_color),
            );
        });

        ui.add_space(8.0);

        let spacing = ui.spacing().item_spacing.x;
        let size = vec2((ui.available_width() - 2.0 * spacing) / 3.0, 36.0);
        let stroke = ui.visuals().widgets.inactive.bg_stroke;

        let button = |text: &str| {
            PlainButton::new(size, text)
                .stroke(stroke)
                .corner_radius(egui::CornerRadius::same(6))
                .font_size(18.0)
        };

        ui.horizontal(|ui| {
            if ui.add(button("+1")).clicked() {
                self.counter.increment();
            }
            if ui.add(button("-1")).clicked() {
                self.counter.decrement();
            }
            if ui.add(button("Reset")).clicked() {
                self.counter.reset();
            }
        });
    }

    fn ui_plot(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.add(&mut self.plot_toggle).changed() {
                log::info!("plot shown: {}", self.plot_toggle.is_checked());
            }
            ui.label("Show plot");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Change Color").clicked() {
                    self.open_color_dialog();
                }
            });
        });

        if self.plot_toggle.is_checked() {
            ui.add(
                LinePlot::new(self.counter.history())
                    .height(ui.available_height().max(80.0))
                    .line_color(self.label_color),
            );
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_tray(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button = get_theme_button(ui);
                theme_button(ui, button);
                ui.label(TITLE);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_counter(ui);
            ui.separator();
            self.ui_plot(ui);
        });

        if let Some(dialog) = &mut self.color_dialog {
            if let Some(outcome) = dialog.show(ctx, &mut self.label_color) {
                log::info!("color dialog closed: {outcome:?}");
                self.color_dialog = None;
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // a dialog still open counts as cancelled
        let label_color = self
            .color_dialog
            .as_ref()
            .map_or(self.label_color, ColorDialog::original);

        self.settings.set_label_color(label_color);
        self.settings.show_plot = self.plot_toggle.is_checked();
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }
}
