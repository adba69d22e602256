//! Archive GUI - Main Entry Point
//!
//! Counter, sample table and archive submission demo built on GPUI.

use archive_gui::app::application::run_app;
use archive_gui::constants::LOG_FILE_PREFIX;
use archive_gui::utils::config_store::log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Console plus daily rolling file. The guard flushes the file writer on drop.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_timer(LocalTime::rfc_3339());

    match log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file)
                .init();
            tracing::info!(dir = %dir.display(), "Writing logs");
            Some(guard)
        }
        Err(err) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            tracing::warn!("File logging disabled: {:#}", err);
            None
        }
    }
}

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting Archive GUI...");

    // Run the GPUI application
    run_app();
}
