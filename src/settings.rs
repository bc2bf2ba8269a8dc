use parking_lot::{RwLock, const_rwlock};
use serde::Deserialize;
use trisect_logging::{get_logger, log_error, log_info, LogLevel};
use trisect_math::{Error, Result};

use crate::LOG_CAT;

static ACTIVE_SETTINGS : RwLock<Settings> = const_rwlock(Settings::DEFAULT);

/// Kernel settings
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settings {
    /// Maximum level of messages that get logged
    pub log_level          : LogLevel,
    /// Write log output to stderr
    pub log_to_console     : bool,
    /// Flush the log after every message
    pub always_flush       : bool,
    /// Reject degenerate triangles when they are created over the host boundary
    pub validate_triangles : bool,
}

// Layout of the settings json, every field is optional
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    log_level          : Option<String>,
    log_to_console     : Option<bool>,
    always_flush       : Option<bool>,
    validate_triangles : Option<bool>,
}

impl Settings {
    pub const DEFAULT : Settings = Settings {
        log_level: LogLevel::Warning,
        log_to_console: true,
        always_flush: false,
        validate_triangles: true,
    };

    /// Parse settings from json, fields that are not present keep their default value
    pub fn parse(json: &str) -> Result<Settings> {
        let file : SettingsFile = serde_json::from_str(json).map_err(|err| Error::InvalidSettings(err.to_string()))?;
        let mut settings = Settings::default();

        if let Some(level) = file.log_level {
            settings.log_level = match LogLevel::from_name(&level.to_ascii_lowercase()) {
                Some(level) => level,
                None => return Err(Error::InvalidSettings(format!("unknown log level '{level}'"))),
            };
        }
        if let Some(log_to_console) = file.log_to_console {
            settings.log_to_console = log_to_console;
        }
        if let Some(always_flush) = file.always_flush {
            settings.always_flush = always_flush;
        }
        if let Some(validate_triangles) = file.validate_triangles {
            settings.validate_triangles = validate_triangles;
        }
        Ok(settings)
    }

    /// Load settings from json, logging why they could not be loaded
    pub fn load(json: &str) -> Option<Settings> {
        match Self::parse(json) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log_error!(LOG_CAT, Self::load, "Failed to load settings, err: {err}");
                None
            },
        }
    }

    /// Make these the active settings and push the logging settings to the logger
    pub fn apply(self) {
        let logger = get_logger();
        logger.set_max_level(self.log_level);
        logger.set_log_to_console(self.log_to_console);
        logger.set_always_flush(self.always_flush);
        *ACTIVE_SETTINGS.write() = self;

        log_info!(LOG_CAT, "Applied settings: {:?}, SIMD backend: {:?}", self, trisect_simd::DEF_BACKEND_TYPE);
    }

    /// Get the active settings
    pub fn current() -> Settings {
        *ACTIVE_SETTINGS.read()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        assert_eq!(Settings::parse("{}"), Ok(Settings::DEFAULT));
    }

    #[test]
    fn parse_fields() {
        let settings = Settings::parse(r#"{ "log_level": "Debug", "log_to_console": false, "validate_triangles": false }"#);
        assert_eq!(settings, Ok(Settings {
            log_level: LogLevel::Debug,
            log_to_console: false,
            always_flush: false,
            validate_triangles: false,
        }));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(Settings::parse(r#"{ "log_level": "loud" }"#), Err(Error::InvalidSettings(_))));
        assert!(matches!(Settings::parse(r#"{ "unknown": 1 }"#), Err(Error::InvalidSettings(_))));
        assert!(matches!(Settings::parse(r#"{ "always_flush": "yes" }"#), Err(Error::InvalidSettings(_))));
        assert!(matches!(Settings::parse("not json"), Err(Error::InvalidSettings(_))));
        assert_eq!(Settings::load("not json"), None);
    }
}
