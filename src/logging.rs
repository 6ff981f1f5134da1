//! Log bridge for the keycapture binary.
//!
//! Routes `log::info!()` and friends to stderr. The level comes from the
//! `--log-level` flag, then `RUST_LOG`, and is `Off` when neither is set so
//! replay output stays clean.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

struct StderrLogger {
    sink: Mutex<io::Stderr>,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut sink = self.sink.lock();
        let _ = writeln!(
            sink,
            "[{}] [{:<5}] [{}] {}",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Resolve the effective level: explicit flag, then `RUST_LOG`, then `Off`.
pub fn resolve_level(flag: Option<LevelFilter>, env: Option<&str>) -> LevelFilter {
    flag.or_else(|| env.and_then(|v| v.trim().parse().ok()))
        .unwrap_or(LevelFilter::Off)
}

/// Install the stderr logger. Later calls only adjust the level.
pub fn init_log_bridge(flag: Option<LevelFilter>) {
    let env = std::env::var("RUST_LOG").ok();
    let level = resolve_level(flag, env.as_deref());

    let logger = LOGGER.get_or_init(|| StderrLogger {
        sink: Mutex::new(io::stderr()),
    });
    if log::set_logger(logger).is_err() {
        log::debug!("Logger already installed, updating level only");
    }
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Warn), Some("trace")),
            LevelFilter::Warn
        );
    }

    #[test]
    fn test_env_fallback() {
        assert_eq!(resolve_level(None, Some("debug")), LevelFilter::Debug);
        assert_eq!(resolve_level(None, Some(" INFO ")), LevelFilter::Info);
    }

    #[test]
    fn test_default_off() {
        assert_eq!(resolve_level(None, None), LevelFilter::Off);
        assert_eq!(resolve_level(None, Some("verbose")), LevelFilter::Off);
    }
}
