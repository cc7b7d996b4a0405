use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Send logs to a file so they do not tear up the terminal UI.
/// `RUST_LOG` overrides the default `info` level.
pub fn init(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("cannot create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("cannot install the log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn test_second_init_reports_an_error() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("eclipsed_sun_log_{}_a.log", std::process::id()));
        let second = dir.join(format!("eclipsed_sun_log_{}_b.log", std::process::id()));

        assert!(init(&first).is_ok());
        assert!(init(&second).is_err());

        let _ = std::fs::remove_file(first);
        let _ = std::fs::remove_file(second);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let missing = std::env::temp_dir().join("eclipsed_sun_no_such_dir").join("x.log");
        assert!(init(&missing).is_err());
    }
}
