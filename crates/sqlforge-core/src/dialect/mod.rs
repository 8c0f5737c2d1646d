//! SQL dialect support.
//!
//! Databases disagree on how literals are spelled. A [`Dialect`] decides how
//! values and parameter placeholders are rendered; the statement structure
//! itself is the same for every dialect.

mod generic;
mod sqlite;

pub use generic::GenericDialect;
pub use sqlite::SqliteDialect;

use chrono::{DateTime, SecondsFormat, Utc};

/// Trait for dialect-specific rendering of literals.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the marker rendered for an unbound parameter.
    fn parameter_placeholder(&self) -> &'static str {
        "?"
    }

    /// Returns the sequence a single quote is escaped to inside a string literal.
    fn string_escape(&self) -> &'static str {
        "''"
    }

    /// Renders a string literal.
    fn quote_string(&self, value: &str) -> String {
        let escaped = value.replace('\'', self.string_escape());
        format!("'{escaped}'")
    }

    /// Renders a boolean literal.
    fn format_bool(&self, value: bool) -> &'static str {
        if value {
            "true"
        } else {
            "false"
        }
    }

    /// Renders a timestamp literal.
    ///
    /// The default is ISO-8601 extended format in UTC with millisecond
    /// precision, written without quotes.
    fn format_timestamp(&self, value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
