use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggingError {
    #[error("Invalid logging level: {0}. Use DEBUG, INFO, WARNING, or ERROR")]
    InvalidLevel(String),
    #[error("Failed to apply logging level: {0}")]
    Apply(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.to_uppercase();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == upper)
            .ok_or_else(|| LoggingError::InvalidLevel(value.to_string()))
    }
}

/// Receives level changes, e.g. a reload handle on the live subscriber.
pub trait LevelSink: Send + Sync {
    fn apply(&self, level: LogLevel) -> Result<(), String>;
}

/// Verbosity owned by one [`Inspector`](super::Inspector) rather than the process.
#[derive(Clone)]
pub struct LoggingContext {
    level: LogLevel,
    sink: Option<Arc<dyn LevelSink>>,
}

impl LoggingContext {
    pub fn new(level: LogLevel) -> Self {
        Self { level, sink: None }
    }

    pub fn with_sink(mut self, sink: Arc<dyn LevelSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, raw: &str) -> Result<LogLevel, LoggingError> {
        let level: LogLevel = raw.parse()?;
        if let Some(sink) = &self.sink {
            sink.apply(level).map_err(LoggingError::Apply)?;
        }
        self.level = level;
        info!(level = %level, "Logging level updated");
        Ok(level)
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingContext")
            .field("level", &self.level)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
