mod app;
mod cell_view;
mod dialogs;
mod layout;
mod textures;

#[cfg(test)]
mod tests;

use eframe::egui;

use crate::config::AppConfig;
use crate::runtime::AppContext;

pub use app::NineGridApp;
pub use textures::TextureCache;

/// Bootstraps the option list and opens the grid window.
pub fn run() -> Result<(), String> {
    let config = AppConfig::default();
    let title = config.window_title.clone();
    let window = layout::window_size(config.cell_size);

    let mut context = AppContext::new(config);
    if let Err(error) = context.bootstrap() {
        log::error!("{error}");
        dialogs::show_error(error.title(), &error.to_string());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size(window)
            .with_min_inner_size(window),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(NineGridApp::new(context)))),
    )
    .map_err(|error| error.to_string())
}
