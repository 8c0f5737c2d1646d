//! Identifier validation.
//!
//! Every raw name that ends up in a statement (tables, columns, schema
//! qualifiers, alias names, function names) goes through [`validate`]
//! before it is stored. Names are never quoted when rendered, so the accepted
//! syntax is deliberately narrow: an ASCII letter followed by ASCII letters,
//! digits or underscores.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{BuilderError, Result};

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").expect("invalid identifier regex"));

/// Validates a raw name and returns it with surrounding whitespace removed.
///
/// The whole trimmed string must match; trailing characters outside the
/// identifier alphabet (`"field!"`) are rejected.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] when the trimmed input is
/// empty or does not match the identifier pattern.
pub fn validate(raw: &str) -> Result<&str> {
    let ident = raw.trim();
    if ident.is_empty() {
        debug!(ident = raw, "rejected empty identifier");
        return Err(BuilderError::InvalidIdentifier {
            ident: String::from(raw),
            reason: "empty identifier",
        });
    }
    if !IDENT_RE.is_match(ident) {
        debug!(ident = raw, "rejected malformed identifier");
        return Err(BuilderError::InvalidIdentifier {
            ident: String::from(raw),
            reason: "expected a letter followed by letters, digits or underscores",
        });
    }
    Ok(ident)
}

/// A name that passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

impl Ident {
    /// Validates `raw` and wraps the trimmed name.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if `raw` is not a valid identifier.
    pub fn new(raw: &str) -> Result<Self> {
        validate(raw).map(|ident| Self(String::from(ident)))
    }

    /// Returns the validated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for name in [
            "f", "F", "field", "field1", "field_1", "FIELD", "FIELD1", "FIELD_1",
        ] {
            assert_eq!(validate(name), Ok(name));
        }
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(validate("  employees\t"), Ok("employees"));
        assert_eq!(Ident::new(" dept ").unwrap().as_str(), "dept");
    }

    #[test]
    fn test_empty_identifier() {
        for name in ["", "   ", "\n"] {
            assert!(matches!(
                validate(name),
                Err(BuilderError::InvalidIdentifier { reason: "empty identifier", .. })
            ));
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in ["_", "1f", "_field", "field!", "first name", "e.name", "drop;--"] {
            assert!(
                matches!(validate(name), Err(BuilderError::InvalidIdentifier { .. })),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_keeps_raw_input() {
        let err = Ident::new(" 1f ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid identifier \" 1f \": expected a letter followed by letters, digits or underscores"
        );
    }
}
