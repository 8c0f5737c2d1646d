//! Generic SQL dialect.

use super::Dialect;

/// The default dialect: `?` placeholders, `true`/`false` booleans and
/// ISO-8601 timestamps.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}
