use std::path::Path;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding a log file path. When unset, logs go to stderr.
pub const LOG_FILE_ENV: &str = "MINIDUX_LOG";

/// Initialize tracing.
///
/// `RUST_LOG` wins over `level`. If `MINIDUX_LOG` is set, logs are written to
/// `{path}.{timestamp}.{pid}` so concurrent runs never share a file.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Ok(log_path) = std::env::var(LOG_FILE_ENV) {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let unique_path = unique_log_path(Path::new(&log_path), timestamp, std::process::id());

        match std::fs::File::create(&unique_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_timer(UtcTime::rfc_3339())
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .init();
                return;
            }
            Err(_) => {
                eprintln!(
                    "Warning: Failed to create log file: {}",
                    unique_path.display()
                );
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> std::path::PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    name.into()
}
