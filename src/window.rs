pub mod index;
pub mod main;
pub mod settings;

pub use main::create_main_window_config;
