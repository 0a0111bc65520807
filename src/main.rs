//! Entry point for the ChipIQ landing page.
//!
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml` (or `--config <path>`).
//! - Launch the page window with the loaded config, or print the effective
//!   config with `--print-config`.

mod app;
mod config;
mod page;
mod particles;
mod sync;

use crate::app::run_app;
use crate::config::{load_config, serialize_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

struct Args {
    config_path: PathBuf,
    print_config: bool,
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let Args {
        config_path,
        print_config,
    } = parse_args()?;
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    if print_config {
        print!("{}", serialize_config(&config)?);
        return Ok(());
    }
    info!(
        path = %config_path.display(),
        level = %config.log_level,
        theme = %config.theme,
        particles = config.particles,
        reveal_animations = config.reveal_animations,
        "Starting landing page"
    );
    run_app(config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);
    let mut parsed = Args {
        config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        print_config: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("Usage: chipiq-site [--config <path>] [--print-config]"))?;
                parsed.config_path = PathBuf::from(path);
            }
            "--print-config" => parsed.print_config = true,
            other => return Err(anyhow!("Unexpected argument: {other}")),
        }
    }
    Ok(parsed)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
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
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
