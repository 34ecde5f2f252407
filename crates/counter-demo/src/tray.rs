//! Tray icon with a small menu
//!
//! Menu clicks arrive on the tray's own callback, they are forwarded over a
//! channel and wake the egui loop so [`Tray::poll`] sees them next frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    ChangeColor,
    Exit,
}

pub use imp::Tray;

#[cfg(any(windows, target_os = "macos"))]
mod imp {
    use super::TrayAction;
    use crate::icon::{ICON_SIZE, box_icon_rgba};
    use anyhow::Context as _;
    use eframe::egui;
    use std::sync::mpsc::{self, Receiver};
    use tray_icon::{
        Icon, TrayIcon, TrayIconBuilder,
        menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem},
    };

    pub struct Tray {
        _tray_icon: TrayIcon,
        receiver: Receiver<TrayAction>,
    }

    impl Tray {
        pub fn new(ctx: egui::Context, tooltip: &str) -> anyhow::Result<Self> {
            let change_color = MenuItem::new("Change Color", true, None);
            let exit = MenuItem::new("Exit", true, None);

            let menu = Menu::new();
            menu.append(&change_color).context("append tray menu item")?;
            menu.append(&PredefinedMenuItem::separator())
                .context("append tray menu separator")?;
            menu.append(&exit).context("append tray menu item")?;

            let change_color_id = change_color.id().clone();
            let exit_id = exit.id().clone();
            let (sender, receiver) = mpsc::channel();

            MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
                let action = if event.id == change_color_id {
                    TrayAction::ChangeColor
                } else if event.id == exit_id {
                    TrayAction::Exit
                } else {
                    return;
                };

                if sender.send(action).is_ok() {
                    ctx.request_repaint();
                }
            }));

            let icon = Icon::from_rgba(box_icon_rgba(ICON_SIZE), ICON_SIZE, ICON_SIZE)
                .context("build tray icon image")?;

            let tray_icon = TrayIconBuilder::new()
                .with_menu(Box::new(menu))
                .with_tooltip(tooltip)
                .with_icon(icon)
                .build()
                .context("create tray icon")?;

            Ok(Self {
                _tray_icon: tray_icon,
                receiver,
            })
        }

        pub fn poll(&self) -> Option<TrayAction> {
            self.receiver.try_recv().ok()
        }
    }
}

#[cfg(not(any(windows, target_os = "macos")))]
mod imp {
    use super::TrayAction;
    use eframe::egui;

    pub struct Tray;

    impl Tray {
        pub fn new(_ctx: egui::Context, _tooltip: &str) -> anyhow::Result<Self> {
            anyhow::bail!("system tray is not supported on this platform")
        }

        pub fn poll(&self) -> Option<TrayAction> {
            None
        }
    }
}
