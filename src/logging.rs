use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "SIGNUP_FORM_LOG";

/// Initialize tracing with file output.
///
/// Logging stays off unless a path is given explicitly or through
/// `SIGNUP_FORM_LOG`: stdout belongs to the TUI. `RUST_LOG` filters
/// (default `info`).
///
/// The file is created as `{path}.{timestamp}.{pid}` so that concurrent
/// instances never share a file.
pub fn init_tracing(explicit_path: Option<&Path>) {
    let log_path = match explicit_path {
        Some(path) => path.display().to_string(),
        None => match std::env::var(LOG_ENV_VAR) {
            Ok(path) if !path.is_empty() => path,
            _ => return,
        },
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
