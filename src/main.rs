use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use registro_tui::api::RestBackend;
use registro_tui::app::App;
use registro_tui::config::Config;
use registro_tui::theme;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate().map_err(anyhow::Error::msg)?;

    // Stdout belongs to the terminal UI; diagnostics go to a file.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    let theme = theme::get_preset(&config.theme)
        .with_context(|| format!("unknown theme '{}'", config.theme))?;
    let backend = Arc::new(
        RestBackend::new(&config.base_url, config.insecure)
            .context("cannot build the HTTP client")?,
    );

    tracing::info!(base_url = %config.base_url, "starting registro-tui");
    let mut app = App::new(backend.clone(), backend, theme);
    app.run().context("terminal session failed")?;
    Ok(())
}
