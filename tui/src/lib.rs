//! Terminal front end for the contract editor.
//!
//! [`run_main`] loads configuration, routes `tracing` into the in-memory
//! log buffer (and optionally a log file), then drives the UI until the user
//! exits.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::io;
use std::path::Path;
use std::rc::Rc;

use contract_core::EditorState;
use contract_core::TracingSaveSink;
use contract_core::config::ConfigLoader;
use contract_core::config::EditorConfig;
use contract_feedback::LogBuffer;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod app_event;
mod app_event_sender;
mod cli;
mod editor_view;
mod footer;
mod key_hint;
mod landing;
mod log_pane;
mod section_view;
#[cfg(test)]
mod test_support;
mod toast;
mod tui;

pub use app_event::Route;
pub use cli::Cli;
pub use cli::FieldAssignment;
pub use cli::StartView;

use crate::app::App;

/// File name used under `log_dir` when file logging is enabled.
pub const LOG_FILE_NAME: &str = "contract-editor.log";

pub fn run_main(cli: Cli) -> color_eyre::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_file(path);
    }
    let config = loader.load()?;

    let log = LogBuffer::with_capacity(config.log_capacity_bytes);
    let _guard = init_tracing(&config, &log)?;
    tracing::info!(start = ?cli.start, "contract editor starting");

    let mut terminal = tui::init()?;
    let mut app = App::new(
        cli.start.into(),
        &config,
        log.clone(),
        Rc::new(TracingSaveSink),
    );
    let result = app.run(&mut terminal);
    let restored = tui::restore();
    finish_session(result, restored, &log, cli.dump_log.as_deref())
}

/// Settle a session after the terminal is handed back. The log is dumped
/// even when the run or the restore failed; the run's error takes
/// precedence, then the restore's, then the dump's.
fn finish_session(
    result: color_eyre::Result<()>,
    restored: io::Result<()>,
    log: &LogBuffer,
    dump_to: Option<&Path>,
) -> color_eyre::Result<()> {
    if let Err(e) = &restored {
        tracing::error!("failed to restore terminal: {e}");
    }
    let dumped = match dump_to {
        Some(path) => log.snapshot().save_to_path(path),
        None => Ok(()),
    };
    result?;
    restored?;
    dumped?;
    Ok(())
}

/// Install the subscriber built by [`build_subscriber`] as the global
/// default. `RUST_LOG` wins over the configured filter.
fn init_tracing(
    config: &EditorConfig,
    log: &LogBuffer,
) -> color_eyre::Result<Option<WorkerGuard>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (subscriber, guard) = build_subscriber(rust_log.as_deref(), config, log)?;
    subscriber.try_init()?;
    Ok(guard)
}

/// Everything goes to the in-memory buffer; a file layer is added when a
/// log directory is configured. Invalid directives fall back to the
/// configured filter, then to `info`.
fn build_subscriber(
    rust_log: Option<&str>,
    config: &EditorConfig,
    log: &LogBuffer,
) -> io::Result<(impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>)> {
    let filter = || {
        rust_log
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .or_else(|| EnvFilter::try_new(&config.log_filter).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    };

    let buffer_layer = tracing_subscriber::fmt::layer()
        .with_writer(log.make_writer())
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter());

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(buffer_layer)
        .with(file_layer);
    Ok((subscriber, guard))
}

/// The seed record with `sets` applied, as pretty JSON.
pub fn record_json(sets: &[FieldAssignment]) -> Result<String, serde_json::Error> {
    let mut state = EditorState::new();
    for set in sets {
        state.update_field(set.field, set.value.clone());
    }
    serde_json::to_string_pretty(state.record())
}
