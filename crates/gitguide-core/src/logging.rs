//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "GITGUIDE_LOG";

/// Log file name prefix inside the log directory
pub const LOG_FILE_NAME: &str = "gitguide.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/git-guide/logs/` because the
/// terminal itself is owned by the UI.
/// Log level is controlled by `GITGUIDE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GITGUIDE_LOG=debug gitguide
/// GITGUIDE_LOG=gitguide_app=trace gitguide
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("git_guide=info,gitguide_app=info,gitguide_tui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("git-guide starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Base directory for everything the app writes outside the config dir
pub fn data_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("git-guide")
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    data_directory().join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_data_directory() {
        let file = get_current_log_file();
        assert!(file.starts_with(data_directory()));
        assert!(file.ends_with(PathBuf::from("logs").join(LOG_FILE_NAME)));
    }
}
