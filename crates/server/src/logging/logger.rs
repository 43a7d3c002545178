// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Name attached to every log line shipped to Loki.
pub const SERVICE_LABEL: &str = "swapservice-rest";

const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse Loki URL '{url}': {source}")]
    InvalidLokiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to configure Loki integration: {0}")]
    LokiError(#[from] tracing_loki::Error),

    #[error("Failed to install global subscriber: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
    pub loki_url: Option<&'a str>,
}

impl<'a> LoggingConfig<'a> {
    pub fn from_config(log: &'a config::LogConfig, loki_url: Option<&'a str>) -> Self {
        Self {
            level: &log.level,
            json_format: log.json,
            strip_ansi: log.strip_ansi,
            write_to_file: log.write,
            write_path: &log.write_path,
            write_max_file_size: log.write_max_file_size,
            write_max_files: log.write_max_files,
            loki_url,
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Build the filter directive for a configured level.
///
/// `http` is not a tracing level: it keeps the service at `info` and turns on
/// the per-request lines emitted under the `http` target.
pub fn filter_directive(level: &str) -> &str {
    if level == "http" { "info,http=debug" } else { level }
}

fn console_layer(json_format: bool, strip_ansi: bool) -> BoxedLayer {
    if json_format {
        fmt::layer().json().boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!strip_ansi)
            .boxed()
    }
}

/// Initialize tracing with console output, plus optional rotating file and
/// Loki sinks.
///
/// Returns the guard of the non-blocking file writer when file output is
/// enabled; it must be held for as long as logs should be flushed.
///
/// # Log Rotation
/// When `logs.log` reaches `write_max_file_size` it is rotated to
/// `logs.log.1`, `logs.log.2`, ... keeping `write_max_files` files in total.
pub fn init_with_config(config: LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = EnvFilter::try_new(filter_directive(config.level)).map_err(|source| {
        LoggingError::InvalidLogLevel {
            level: config.level.to_string(),
            source,
        }
    })?;

    let mut layers: Vec<BoxedLayer> = vec![console_layer(config.json_format, config.strip_ansi)];
    let mut guard = None;

    if config.write_to_file {
        std::fs::create_dir_all(config.write_path)?;

        // write_max_files counts the live file too
        let file_appender = BasicRollingFileAppender::new(
            PathBuf::from(config.write_path).join(LOG_FILE_NAME),
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            config.write_max_files.saturating_sub(1),
        )?;
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);

        let file_layer = if config.json_format {
            fmt::layer().json().with_writer(non_blocking).boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed()
        };
        layers.push(file_layer);
    }

    if let Some(url) = config.loki_url {
        let parsed_url = url::Url::parse(url).map_err(|source| LoggingError::InvalidLokiUrl {
            url: url.to_string(),
            source,
        })?;

        let (loki_layer, task) = tracing_loki::builder()
            .label("service", SERVICE_LABEL)?
            .extra_field("pid", format!("{}", std::process::id()))?
            .build_url(parsed_url)?;

        tokio::spawn(task);
        layers.push(loki_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(guard)
}
