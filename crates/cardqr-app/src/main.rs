use std::io::Read;

use cardqr_app::render::render;
use cardqr_app::request::{OutputDefaults, RequestDocument};
use cardqr_core::config::load_config;
use cardqr_service::payload::Dispatcher;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let defaults = OutputDefaults::from_config(&config.output)?;

    let input = match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            tracing::debug!(%path, "Reading request document");
            std::fs::read_to_string(path)?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let document = RequestDocument::parse(&input)?;
    let rendered = render(&Dispatcher::new(), document, &defaults);

    tracing::info!(
        bytes = rendered.payload.byte_len(),
        level = %rendered.payload.error_correction.as_char(),
        "Payload rendered"
    );

    println!("{}", rendered.payload.text);

    Ok(())
}
