// marquee/common
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ffi::OsStr;
use std::path::PathBuf;
use std::{env, fs};

use anyhow::{format_err, Context, Result};
use tracing::metadata::LevelFilter;
pub use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

/// Writes JSON logs to `demos/<executable>/logs/<executable>.log` and warnings to stderr.
pub fn enable_debug_logging(max_level: Level) -> Result<()> {
    let exe_path = env::current_exe().context("Failed to get the current executable path")?;
    let exe_stem = exe_path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| format_err!("Failed to extract file stem from executable name"))?
        .to_string();

    let log_dir = demos_dir()?.join(&exe_stem).join("logs");
    let log_filename = format!("{}.log", exe_stem);

    let log_file_path = log_dir.join(&log_filename);
    if log_file_path.exists() {
        _ = fs::remove_file(log_file_path);
    }

    let appender = tracing_appender::rolling::never(log_dir, log_filename);

    let json_layer = tracing_subscriber::fmt::Layer::new()
        .json()
        .with_writer(appender)
        .with_ansi(false)
        .with_filter(LevelFilter::from_level(max_level));

    let stderr_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(LevelFilter::WARN);

    Registry::default()
        .with(json_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

pub struct TmdbCredentials {
    pub api_key: String,
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Reads `TMDB_API_KEY` (required), `TMDB_BASE_URL`, `TMDB_USERNAME` and `TMDB_PASSWORD`
/// from the environment, falling back to `demos/.env`.
pub fn load_credentials() -> Result<TmdbCredentials> {
    let path = demos_dir()?.join(".env");
    if path.exists() {
        dotenvy::from_path(&path).with_context(|| format!("Invalid .env file at {:?}.", path))?;
    }

    let api_key = env::var("TMDB_API_KEY")
        .with_context(|| format!("Missing 'TMDB_API_KEY' in environment or {:?}.", path))?;

    Ok(TmdbCredentials {
        api_key,
        base_url: env::var("TMDB_BASE_URL").ok(),
        username: env::var("TMDB_USERNAME").ok(),
        password: env::var("TMDB_PASSWORD").ok(),
    })
}

pub fn demos_dir() -> Result<PathBuf> {
    Ok(env::current_dir()
        .context("Cannot determine current directory")?
        .join("demos"))
}
