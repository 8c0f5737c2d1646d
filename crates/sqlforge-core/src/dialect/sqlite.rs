//! `SQLite` dialect.

use chrono::{DateTime, Utc};

use super::Dialect;

/// `SQLite` has no boolean or timestamp storage class: booleans render as
/// `1`/`0` and timestamps as quoted text that the date functions understand.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new `SQLite` dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn format_bool(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    fn format_timestamp(&self, value: &DateTime<Utc>) -> String {
        self.quote_string(&value.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
    }
}
