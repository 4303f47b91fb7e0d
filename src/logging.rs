//! Diagnostic logging: a daily rolling file under `<config dir>/logs`,
//! plus stderr with `--verbose`. User-facing output goes through
//! `ui::messages` instead.

use crate::config::Config;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over the config level.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive until the command finishes. When the log directory cannot be
/// created, file logging is skipped.
pub fn init(cfg: &Config, verbose: bool) -> Option<WorkerGuard> {
    let level = if verbose { "debug" } else { cfg.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let dir = cfg.log_dir();
    let (file_layer, guard) = match fs::create_dir_all(&dir) {
        Ok(()) => {
            let appender = rolling::daily(&dir, "rgiras.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_level(true);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    // a second init (tests calling run twice) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}
