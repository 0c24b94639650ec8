use log::{LevelFilter, Log, Metadata, Record};
use std::str::FromStr;

pub const ENV_VAR: &str = "GRAFICAS_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Each `-v` raises the level one step from `warn`. Without any, the
/// environment value is used when it names a level.
pub fn level(verbose: u8, env: Option<&str>) -> LevelFilter {
    match verbose {
        0 => env.and_then(|v| LevelFilter::from_str(v.trim()).ok()).unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(level: LevelFilter) -> Result<(), String> {
    log::set_logger(&LOGGER).map_err(|e| e.to_string())?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_wins_over_env() {
        assert_eq!(level(0, None), LevelFilter::Warn);
        assert_eq!(level(0, Some("debug")), LevelFilter::Debug);
        assert_eq!(level(0, Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(level(0, Some("loud")), LevelFilter::Warn);
        assert_eq!(level(1, Some("error")), LevelFilter::Info);
        assert_eq!(level(2, None), LevelFilter::Debug);
        assert_eq!(level(7, None), LevelFilter::Trace);
    }
}
