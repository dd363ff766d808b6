//! Time source for the `date` header.
//!
//! Atmos expects an RFC 1123 HTTP-date (`Tue, 01 Jan 2030 00:00:00 GMT`)
//! and echoes it into the string to sign, so the filter must read the date
//! back from the same place it wrote it. The [`Clock`] trait keeps that
//! source swappable; tests pin it with [`FixedClock`].

use chrono::Utc;

/// The RFC 1123 format Atmos expects in the `date` header.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Source of the timestamp stamped into the `date` header.
pub trait Clock: Send + Sync {
    /// Returns the current time formatted as an RFC 1123 HTTP-date.
    fn timestamp(&self) -> String;
}

/// [`Clock`] backed by the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Utc::now().format(HTTP_DATE_FORMAT).to_string()
    }
}

/// [`Clock`] that always returns the same timestamp.
///
/// Useful in tests, where a fixed date makes signatures reproducible.
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: String,
}

impl FixedClock {
    /// Create a clock pinned to the given HTTP-date string.
    #[must_use]
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.timestamp.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_system_time_as_http_date() {
        let timestamp = SystemClock.timestamp();
        // "Tue, 01 Jan 2030 00:00:00 GMT" is 29 characters.
        assert_eq!(timestamp.len(), 29);
        assert!(timestamp.ends_with(" GMT"));
        assert_eq!(&timestamp[3..5], ", ");
    }

    #[test]
    fn test_should_return_fixed_timestamp() {
        let clock = FixedClock::new("Tue, 01 Jan 2030 00:00:00 GMT");
        assert_eq!(clock.timestamp(), "Tue, 01 Jan 2030 00:00:00 GMT");
        assert_eq!(clock.timestamp(), clock.timestamp());
    }
}
