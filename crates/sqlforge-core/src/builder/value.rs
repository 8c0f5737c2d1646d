//! Literal values and the unbound-parameter placeholder.

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use super::node::{Node, Render};
use crate::dialect::Dialect;
use crate::error::{BuilderError, Result};

/// Marker for a parameter whose value is bound later by the execution layer.
///
/// Renders as the dialect placeholder (`?`). It carries no data, so every
/// `Placeholder` is the same value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder;

impl Render for Placeholder {
    fn render(&self, dialect: &dyn Dialect) -> String {
        String::from(dialect.parameter_placeholder())
    }
}

/// A scalar literal rendered inline into the statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, rendered single-quoted with embedded quotes doubled.
    Text(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    ///
    /// `NaN` and the infinities have no SQL literal; [`value`] rejects them.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Point in time, normalized to UTC.
    Timestamp(DateTime<Utc>),
}

impl Render for Value {
    fn render(&self, dialect: &dyn Dialect) -> String {
        match self {
            Self::Text(s) => dialect.quote_string(s),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => String::from(dialect.format_bool(*b)),
            Self::Timestamp(ts) => dialect.format_timestamp(ts),
        }
    }
}

/// Builds a value node.
///
/// Scalars become [`Value`]s and the [`Placeholder`] is passed through
/// unchanged.
///
/// ```rust
/// use sqlforge_core::{value, Placeholder, Render};
///
/// assert_eq!(value("O'Brien").unwrap().to_sql(), "'O''Brien'");
/// assert_eq!(value(42).unwrap().to_sql(), "42");
/// assert_eq!(value(Placeholder).unwrap().to_sql(), "?");
/// ```
///
/// # Errors
///
/// Returns [`BuilderError::InvalidValueType`] when given any other node,
/// such as a column or a subquery, or a non-finite float.
pub fn value(raw: impl Into<Node>) -> Result<Node> {
    match raw.into() {
        Node::Value(Value::Float(f)) if !f.is_finite() => {
            debug!(value = f, "rejected non-finite float");
            Err(BuilderError::InvalidValueType {
                kind: "non-finite float",
            })
        }
        node @ (Node::Value(_) | Node::Placeholder) => Ok(node),
        other => {
            debug!(kind = other.kind(), "rejected non-scalar value");
            Err(BuilderError::InvalidValueType { kind: other.kind() })
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(String::from(v))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Timestamp(v.with_timezone(&Utc))
    }
}
