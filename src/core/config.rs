//! Process-wide defaults
//!
//! The defaults answer the questions a context leaves open: which level
//! applies when none is attached, which appender receives entries from a
//! context without one, and which context stands in for a missing one.
//!
//! They are installed once, at process start, before concurrent logging
//! begins:
//!
//! ```no_run
//! use context_journal::prelude::*;
//!
//! Config::builder()
//!     .level(LogLevel::Info)
//!     .appender(WriterAppender::stderr())
//!     .install()
//!     .expect("journal configured twice");
//! ```
//!
//! Until then a built-in configuration applies, read from the environment
//! (see [`Settings::from_env`]) and without an appender.

use super::{
    appender::Appender,
    context::Context,
    error::{LoggerError, Result},
    log_level::LogLevel,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Environment variable holding the default level name
pub const LEVEL_ENV: &str = "CONTEXT_JOURNAL_LEVEL";

/// Environment variable that turns on append tracing
pub const DEBUG_ENV: &str = "CONTEXT_JOURNAL_DEBUG";

static INSTALLED: OnceLock<Config> = OnceLock::new();
static BUILTIN: OnceLock<Config> = OnceLock::new();

/// Serializable part of the defaults
///
/// # Example
///
/// ```
/// use context_journal::{LogLevel, Settings};
///
/// let settings: Settings = serde_json::from_str(r#"{"level": "warning"}"#).unwrap();
/// assert_eq!(settings.level, LogLevel::Warn);
/// assert!(!settings.trace_appends);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Threshold for contexts without a level
    pub level: LogLevel,
    /// Print every append to stderr before it happens
    pub trace_appends: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: LogLevel::Error,
            trace_appends: false,
        }
    }
}

impl Settings {
    /// Read settings from `CONTEXT_JOURNAL_LEVEL` and `CONTEXT_JOURNAL_DEBUG`.
    ///
    /// Unset variables keep their defaults; an unrecognized level name is
    /// an `InvalidLevel` error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(level) = lookup(LEVEL_ENV) {
            settings.level = level.trim().parse()?;
        }
        if let Some(debug) = lookup(DEBUG_ENV) {
            settings.trace_appends = parse_flag(&debug).ok_or_else(|| {
                LoggerError::config(DEBUG_ENV, format!("expected a boolean, got '{}'", debug))
            })?;
        }
        Ok(settings)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "f" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// The process defaults
#[derive(Clone)]
pub struct Config {
    level: LogLevel,
    appender: Option<Arc<dyn Appender>>,
    context: Context,
    trace_appends: bool,
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Level used when a context has none
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Appender used when a context has none
    pub fn appender(&self) -> Option<&Arc<dyn Appender>> {
        self.appender.as_ref()
    }

    /// Context used when a log call is given none
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn trace_appends(&self) -> bool {
        self.trace_appends
    }

    /// Make this the process configuration. Only the first call succeeds.
    pub fn install(self) -> Result<()> {
        INSTALLED
            .set(self)
            .map_err(|_| LoggerError::AlreadyInitialized)
    }

    fn builtin() -> Self {
        let settings = Settings::from_env().unwrap_or_else(|e| {
            eprintln!("[JOURNAL WARNING] Ignoring environment configuration: {}", e);
            Settings::default()
        });
        ConfigBuilder::new().settings(settings).build()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("level", &self.level)
            .field("appender", &self.appender.as_ref().map(|a| a.name().to_string()))
            .field("context", &self.context)
            .field("trace_appends", &self.trace_appends)
            .finish()
    }
}

/// The configuration in effect: the installed one, or the built-in one if
/// nothing was installed yet.
pub fn current() -> &'static Config {
    match INSTALLED.get() {
        Some(config) => config,
        None => BUILTIN.get_or_init(Config::builtin),
    }
}

/// Builder for constructing a `Config` with a fluent API
///
/// # Example
/// ```
/// use context_journal::prelude::*;
///
/// let config = Config::builder()
///     .level(LogLevel::Debug)
///     .appender(MemoryAppender::new())
///     .trace_appends(false)
///     .build();
/// assert_eq!(config.level(), LogLevel::Debug);
/// ```
pub struct ConfigBuilder {
    level: LogLevel,
    appender: Option<Arc<dyn Appender>>,
    context: Context,
    trace_appends: bool,
}

impl ConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        let settings = Settings::default();
        Self {
            level: settings.level,
            appender: None,
            context: Context::background(),
            trace_appends: settings.trace_appends,
        }
    }

    /// Set the default level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the default appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(self, appender: A) -> Self {
        self.shared_appender(Arc::new(appender))
    }

    /// Set a default appender that is also used elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appender = Some(appender);
        self
    }

    /// Set the context used for calls made without one
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn trace_appends(mut self, enabled: bool) -> Self {
        self.trace_appends = enabled;
        self
    }

    /// Apply serializable settings
    #[must_use = "builder methods return a new value"]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.level = settings.level;
        self.trace_appends = settings.trace_appends;
        self
    }

    /// Build the Config
    pub fn build(self) -> Config {
        Config {
            level: self.level,
            appender: self.appender,
            context: self.context,
            trace_appends: self.trace_appends,
        }
    }

    /// Build and install as the process configuration
    pub fn install(self) -> Result<()> {
        self.build().install()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.level, LogLevel::Error);
        assert!(!settings.trace_appends);
    }

    #[test]
    fn test_settings_from_lookup() {
        let settings =
            Settings::from_lookup(lookup(&[(LEVEL_ENV, " Warning "), (DEBUG_ENV, "on")])).unwrap();
        assert_eq!(settings.level, LogLevel::Warn);
        assert!(settings.trace_appends);

        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_invalid_level() {
        let err = Settings::from_lookup(lookup(&[(LEVEL_ENV, "chatty")])).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    }

    #[test]
    fn test_settings_invalid_flag() {
        let err = Settings::from_lookup(lookup(&[(DEBUG_ENV, "maybe")])).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_settings_serde() {
        let settings = Settings {
            level: LogLevel::Debug,
            trace_appends: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"level":"DEBUG","trace_appends":true}"#);

        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .settings(Settings {
                level: LogLevel::Info,
                trace_appends: true,
            })
            .context(Context::background().with_level(LogLevel::Warn))
            .build();

        assert_eq!(config.level(), LogLevel::Info);
        assert!(config.trace_appends());
        assert!(config.appender().is_none());
        assert_eq!(config.context().level(), Some(LogLevel::Warn));
    }
}
