//! Orbit Cafe Storefront - headless host for the ordering core.
//!
//! Stands in for the browser UI runtime: reads one JSON [`Intent`] per line
//! on stdin, applies it, and writes the resulting view [`Snapshot`] as one
//! JSON line on stdout. An initial snapshot is written before the first
//! intent is read.
//!
//! ```text
//! {"type":"menu","payload":{"action":"add_to_cart","id":1}}
//! {"type":"cart","payload":{"action":"decrement","id":1}}
//! {"type":"checkout","payload":{"full_name":"Ada","payment":"card"}}
//! ```
//!
//! Logs go to stderr so stdout stays a clean snapshot stream.
//!
//! [`Intent`]: orbit_cafe_storefront::state::Intent
//! [`Snapshot`]: orbit_cafe_storefront::state::Snapshot

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{BufRead, Write};

use orbit_cafe_storefront::config::{LogFormat, StorefrontConfig};
use orbit_cafe_storefront::error::Result;
use orbit_cafe_storefront::state::{AppState, Intent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with `EnvFilter`, writing to stderr.
///
/// Defaults to info level for our crate if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "orbit_cafe_storefront=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() {
    // Load configuration from environment (needed for the log format)
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt().with_writer(std::io::stderr).init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if let Err(e) = run(&config) {
        tracing::error!("Storefront failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: &StorefrontConfig) -> Result<()> {
    let mut state = AppState::from_config(config)?;
    tracing::info!(
        storage = %config.storage_path.display(),
        items = state.catalog().len(),
        "Storefront ready"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_snapshot(&mut out, &state)?;

    serve(std::io::stdin().lock(), &mut out, &mut state)?;

    tracing::info!("Intent stream closed, shutting down");
    Ok(())
}

/// Apply each intent line from `input`, writing a snapshot after every one
/// applied. Lines that are not a valid intent, including invalid UTF-8, are
/// logged and skipped.
fn serve(mut input: impl BufRead, out: &mut impl Write, state: &mut AppState) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_slice::<Intent>(line) {
            Ok(intent) => state.handle(intent),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed intent");
                continue;
            }
        }
        write_snapshot(out, state)?;
    }
}

fn write_snapshot(out: &mut impl Write, state: &AppState) -> Result<()> {
    serde_json::to_writer(&mut *out, &state.snapshot())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
