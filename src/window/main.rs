use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};

use crate::assets::MAIN_STYLE;
use crate::config::WindowConfig;

use super::index::build_custom_index;

/// Create the desktop config for the main window
pub fn create_main_window_config(window: WindowConfig, title: &str) -> Config {
    let window = window.clamped();
    Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(LogicalSize::new(window.width, window.height)),
        )
        // Link the stylesheet in the head so the first paint is already styled
        .with_custom_head(indoc::formatdoc! {r#"<link rel="stylesheet" href="{MAIN_STYLE}">"#})
        .with_custom_index(build_custom_index(title))
}
