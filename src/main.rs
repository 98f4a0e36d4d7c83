#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod gui;

use tabstrip::{config, core};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = config::load_config();
    gui::run(config)
}

/// `RUST_LOG` wins; otherwise the crate logs at info.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tabstrip=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
