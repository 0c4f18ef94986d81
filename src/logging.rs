use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file prefix.
pub const LOG_ENV: &str = "LAUNCHPAD_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: the TUI owns stdout and stderr.
/// Set `LAUNCHPAD_LOG` to a file path to enable it; the filter comes from
/// `RUST_LOG` (default `info`).
///
/// Log files get unique names so concurrent runs do not clobber each other:
/// `{path}.{timestamp}.{pid}`
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_keeps_prefix_and_pid() {
        let path = unique_log_path("/tmp/launchpad.log");
        assert!(path.starts_with("/tmp/launchpad.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
