//! Process-wide verbosity for native code.
//!
//! Levels keep htslib's numeric values so raw integers coming from callers
//! (or older configs) map one-to-one. Native modules check [`enabled`]
//! before emitting chatter; the CLI also uses the level as its default
//! log filter.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::Deserialize;
use strand_types::{Status, StatusOr};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum HtsLogLevel {
    Off = 0,
    Error = 1,
    #[default]
    Warning = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
}

static LEVEL: AtomicU8 = AtomicU8::new(HtsLogLevel::Warning as u8);

impl HtsLogLevel {
    pub const ALL: [HtsLogLevel; 6] = [
        HtsLogLevel::Off,
        HtsLogLevel::Error,
        HtsLogLevel::Warning,
        HtsLogLevel::Info,
        HtsLogLevel::Debug,
        HtsLogLevel::Trace,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HtsLogLevel::Off => "off",
            HtsLogLevel::Error => "error",
            HtsLogLevel::Warning => "warning",
            HtsLogLevel::Info => "info",
            HtsLogLevel::Debug => "debug",
            HtsLogLevel::Trace => "trace",
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(HtsLogLevel::Off),
            1 => Some(HtsLogLevel::Error),
            3 => Some(HtsLogLevel::Warning),
            4 => Some(HtsLogLevel::Info),
            5 => Some(HtsLogLevel::Debug),
            6 => Some(HtsLogLevel::Trace),
            _ => None,
        }
    }

    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            HtsLogLevel::Off => LevelFilter::OFF,
            HtsLogLevel::Error => LevelFilter::ERROR,
            HtsLogLevel::Warning => LevelFilter::WARN,
            HtsLogLevel::Info => LevelFilter::INFO,
            HtsLogLevel::Debug => LevelFilter::DEBUG,
            HtsLogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for HtsLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HtsLogLevel {
    type Err = Status;

    /// Accepts `warning`, `WARNING`, `HTS_LOG_WARNING`, and `warn`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lower = raw.trim().to_ascii_lowercase();
        let name = lower.strip_prefix("hts_log_").unwrap_or(&lower);
        match name {
            "off" => Ok(HtsLogLevel::Off),
            "error" => Ok(HtsLogLevel::Error),
            "warning" | "warn" => Ok(HtsLogLevel::Warning),
            "info" => Ok(HtsLogLevel::Info),
            "debug" => Ok(HtsLogLevel::Debug),
            "trace" => Ok(HtsLogLevel::Trace),
            _ => Err(Status::invalid_argument(format!(
                "unknown log level '{raw}'; expected one of: off, error, warning, info, debug, trace"
            ))),
        }
    }
}

impl TryFrom<String> for HtsLogLevel {
    type Error = Status;

    // `Self::Error` would be ambiguous with the `Error` variant.
    fn try_from(value: String) -> Result<Self, Status> {
        value.parse()
    }
}

#[must_use]
pub fn get() -> HtsLogLevel {
    HtsLogLevel::from_value(LEVEL.load(Ordering::Relaxed)).unwrap_or_default()
}

pub fn set(level: HtsLogLevel) {
    let previous = LEVEL.swap(level.value(), Ordering::Relaxed);
    if previous != level.value() {
        tracing::debug!(level = %level, "Native verbosity changed");
    }
}

/// Set the level from its raw numeric value.
pub fn set_from_raw(value: i32) -> StatusOr<()> {
    let level = u8::try_from(value)
        .ok()
        .and_then(HtsLogLevel::from_value)
        .ok_or_else(|| Status::invalid_argument(format!("unknown log level value {value}")))?;
    set(level);
    Ok(())
}

/// Whether native code should emit a message at `level`.
#[must_use]
pub fn enabled(level: HtsLogLevel) -> bool {
    level != HtsLogLevel::Off && level <= get()
}
