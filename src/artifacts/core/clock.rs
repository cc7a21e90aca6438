//! Commit timestamps
//!
//! Commits are stamped with the local wall clock unless `TWIG_COMMIT_DATE`
//! holds an RFC 2822 or `%Y-%m-%d %H:%M:%S %z` timestamp.

use chrono::{DateTime, FixedOffset};

/// Environment variable overriding the commit timestamp
pub const COMMIT_DATE_ENV: &str = "TWIG_COMMIT_DATE";

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    /// The override from the environment, or the system clock
    ///
    /// An unparsable override is reported and ignored.
    pub fn from_env() -> Self {
        match std::env::var(COMMIT_DATE_ENV) {
            Ok(date_str) => match Self::parse(&date_str) {
                Some(timestamp) => Clock::Fixed(timestamp),
                None => {
                    tracing::warn!(value = %date_str, "ignoring unparsable {COMMIT_DATE_ENV}");
                    Clock::System
                }
            },
            Err(_) => Clock::System,
        }
    }

    pub fn parse(date_str: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date_str)
            .or_else(|_| DateTime::parse_from_str(date_str, FALLBACK_DATE_FORMAT))
            .ok()
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Clock::System => chrono::Local::now().fixed_offset(),
            Clock::Fixed(timestamp) => *timestamp,
        }
    }
}
