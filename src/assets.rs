use dioxus::prelude::*;

pub const MAIN_STYLE: Asset = asset!("/assets/main.css");

/// Placeholder client list shown when no data file is configured
pub const SAMPLE_CLIENTS: &str = include_str!("../assets/sample_clients.json");
