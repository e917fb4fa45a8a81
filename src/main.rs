use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use client_drawer::config::CONFIG;
use client_drawer::{components, dataset, store, window};

const VERSION: &str = concat!(
    env!("CLIENT_DRAWER_BUILD_VERSION"),
    " (",
    compile_time::datetime_str!(),
    ")",
);

/// Client Drawer — pick a client from a searchable, indexed list
#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about,
    after_long_help = "Examples:\n\
        \x20 client-drawer                        Show the bundled sample clients\n\
        \x20 client-drawer clients.json           Show clients from a JSON file\n\
        \x20 client-drawer --title \"Accounts\"     Override the drawer title\n\
        \x20 client-drawer --closed               Start with the drawer closed"
)]
struct Cli {
    /// JSON file with an array of { \"id\", \"name\" } objects
    #[arg()]
    data: Option<PathBuf>,

    /// Title shown in the drawer header
    #[arg(long)]
    title: Option<String>,

    /// Placeholder of the search input
    #[arg(long)]
    placeholder: Option<String>,

    /// Start with the drawer closed
    #[arg(long)]
    closed: bool,
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    if let Ok(dotenv) = dotenvy::dotenv() {
        println!("Loaded .env file from: {}", dotenv.display());
    }
    init_tracing();

    let cfg = CONFIG.read().clone();

    // Data resolution: CLI path → config path → bundled sample clients
    let items = match cli.data.or(cfg.data.path) {
        Some(path) => dataset::load_items(&path)
            .with_context(|| format!("Failed to load clients from {}", path.display()))?,
        None => {
            tracing::info!("No data file given, using sample clients");
            dataset::sample_items()
        }
    };
    store::set_data(items);
    store::set_drawer_title(cli.title.unwrap_or(cfg.drawer.title));
    store::set_search_placeholder(cli.placeholder.unwrap_or(cfg.drawer.search_placeholder));

    window::settings::set_start_closed(cli.closed);

    let title = store::STORE.read().title.clone();
    let config = window::create_main_window_config(cfg.window, &title);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(components::main_app::MainApp);

    Ok(())
}

fn init_tracing() {
    let silence_filter = tracing_subscriber::filter::filter_fn(|metadata| {
        // Known issue: https://github.com/DioxusLabs/dioxus/issues/3872
        metadata.target() != "dioxus_core::properties::__component_called_as_function"
    });

    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(silence_filter);

    tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer)
        .init();
}
