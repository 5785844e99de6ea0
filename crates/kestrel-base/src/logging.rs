//! Console logging setup shared by engine binaries.
//!
//! Thin wrapper over `env_logger` with the engine's line format and
//! `KESTREL_LOG*` environment switches.

use std::io::Write;

use env_logger::fmt::WriteStyle;
use env_logger::Builder;
use log::LevelFilter;

/// Console logger configuration.
///
/// Environment switches:
/// - `KESTREL_LOG`: level filter (`error`..`trace`, `off`); default `info`
/// - `KESTREL_LOG_COLORS`: `0` disables colors
/// - `KESTREL_LOG_MODULE`: `0` drops the module column
#[derive(Debug, Clone)]
pub struct ConsoleLoggerConfig {
    pub level: LevelFilter,
    pub colors: bool,
    pub include_module: bool,
}

impl ConsoleLoggerConfig {
    pub fn from_env() -> Self {
        let level = std::env::var("KESTREL_LOG")
            .ok()
            .and_then(|v| parse_level(&v))
            .unwrap_or(LevelFilter::Info);
        let colors = std::env::var("KESTREL_LOG_COLORS")
            .map(|v| flag_enabled(&v))
            .unwrap_or(true);
        let include_module = std::env::var("KESTREL_LOG_MODULE")
            .map(|v| flag_enabled(&v))
            .unwrap_or(true);

        Self {
            level,
            colors,
            include_module,
        }
    }
}

impl Default for ConsoleLoggerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

fn flag_enabled(raw: &str) -> bool {
    raw != "0"
}

/// Installs the process-wide console logger.
///
/// Fails only when a logger is already installed; binaries that do not
/// care use [`init`].
pub fn install(config: &ConsoleLoggerConfig) -> Result<(), log::SetLoggerError> {
    let mut builder = Builder::new();
    builder.filter_level(config.level);
    builder.write_style(if config.colors {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    });

    let include_module = config.include_module;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        if include_module {
            writeln!(
                buf,
                "[{style}{:<5}{style:#}] {:<25} {}",
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            writeln!(
                buf,
                "[{style}{:<5}{style:#}] {}",
                record.level(),
                record.args()
            )
        }
    });

    builder.try_init()
}

/// Best-effort setup from the environment. The already-installed case is
/// ignored so embedding hosts and tests can bring their own logger.
pub fn init() {
    let _ = install(&ConsoleLoggerConfig::from_env());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_accepts_the_usual_spellings() {
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("TRACE"), Some(LevelFilter::Trace));
        assert_eq!(parse_level(" off "), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn switches_treat_only_zero_as_off() {
        assert!(!flag_enabled("0"));
        assert!(flag_enabled("1"));
        assert!(flag_enabled("true"));
        assert!(flag_enabled(""));
    }

    #[test]
    fn init_tolerates_repeat_calls() {
        init();
        init();
    }
}
