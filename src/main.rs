//! Entry point for the PDF viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments (document path and optional marker kind).
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application; the document itself loads asynchronously so
//!   failures surface inside the window rather than on stderr alone.

mod app;
mod config;
mod markers;
mod pdf_loader;
mod scrollmap;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use crate::markers::MarkerKind;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let (pdf_path, marker_override) = parse_args()?;
    let mut config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    if let Some(kind) = marker_override {
        config.marker_kind = kind;
    }
    info!(
        path = %pdf_path.display(),
        markers = %config.marker_kind,
        level = %config.log_level,
        "Starting PDF viewer"
    );
    run_app(pdf_path, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<(PathBuf, Option<MarkerKind>)> {
    let mut args = env::args().skip(1);
    let path = args.next().ok_or_else(|| {
        anyhow!("Usage: scrollmark <path-to-pdf> [numbers|letters|icons|color-icons|none]")
    })?;

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.as_path().display()));
    }

    let marker_kind = match args.next() {
        Some(raw) => {
            Some(MarkerKind::from_arg(&raw).ok_or_else(|| anyhow!("Unknown marker kind: {raw}"))?)
        }
        None => None,
    };
    Ok((path, marker_kind))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
