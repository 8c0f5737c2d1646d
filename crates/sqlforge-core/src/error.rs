//! Error types for statement building.

use thiserror::Error;

/// Errors raised while constructing nodes or configuring a statement.
///
/// Every error is reported by the call that caused it. A builder whose
/// configuration call failed keeps the state it had before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// A raw name is empty or is not a bare SQL identifier.
    #[error("invalid identifier {ident:?}: {reason}")]
    InvalidIdentifier {
        /// The rejected input, as supplied.
        ident: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A node that is neither a scalar value nor the placeholder was used as a value.
    #[error("invalid value type: {kind} cannot be used as a literal value")]
    InvalidValueType {
        /// Kind of the offending node.
        kind: &'static str,
    },

    /// An alias was requested for a literal value.
    #[error("a literal value can not be aliased")]
    CannotAliasLiteral,

    /// An insert was given both explicit values and a source query.
    #[error("insert takes either explicit values or a source query, not both")]
    ModeConflict,

    /// A set operation member projects a different number of columns than the first member.
    #[error("{op} members must project the same number of columns: expected {expected}, found {found}")]
    SetOperationArityMismatch {
        /// The set operation keyword.
        op: &'static str,
        /// Column count of the first member.
        expected: usize,
        /// Column count of the rejected member.
        found: usize,
    },

    /// A set operation member is not a select statement.
    #[error("{op} members must be select statements, found {found}")]
    SetOperationTypeMismatch {
        /// The set operation keyword.
        op: &'static str,
        /// Kind of the rejected node.
        found: &'static str,
    },

    /// An `in` predicate was given no values.
    #[error("in list for {field} must contain at least one value")]
    EmptyInList {
        /// Rendered field the list applies to.
        field: String,
    },
}

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, BuilderError>;
