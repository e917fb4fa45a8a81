pub mod app;
pub mod drawer;
pub mod layout;
pub mod main_app;
