//! The rendering protocol and the node union every builder stores.

use chrono::{DateTime, TimeZone};

use super::expr::{Alias, Between, Column, Comparison, Function, In};
use super::select::Select;
use super::set_op::SetOperation;
use super::value::{Placeholder, Value};
use crate::dialect::{Dialect, GenericDialect};
use crate::error::Result;

/// Anything that renders itself to a SQL fragment.
///
/// Composite nodes render their children recursively and concatenate the
/// fragments. Rendering never mutates the node, so it can be repeated.
pub trait Render {
    /// Renders the node for the given dialect.
    fn render(&self, dialect: &dyn Dialect) -> String;

    /// Renders the node with the [`GenericDialect`].
    fn to_sql(&self) -> String {
        self.render(&GenericDialect)
    }
}

/// A renderable expression or statement.
#[derive(Debug, Clone)]
pub enum Node {
    /// Unbound parameter, rendered as `?`.
    Placeholder,
    /// Inline literal.
    Value(Value),
    /// Column or table reference.
    Column(Column),
    /// Aliased node.
    Alias(Box<Alias>),
    /// Function call.
    Function(Function),
    /// Binary comparison.
    Comparison(Box<Comparison>),
    /// `between` predicate.
    Between(Box<Between>),
    /// `in` predicate.
    In(Box<In>),
    /// Select statement, used as a subquery.
    Select(Box<Select>),
    /// Union, intersect or except.
    SetOperation(Box<SetOperation>),
}

impl Node {
    /// Returns a short name for the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Value(_) => "value",
            Self::Column(_) => "column",
            Self::Alias(_) => "alias",
            Self::Function(_) => "function",
            Self::Comparison(_) => "comparison",
            Self::Between(_) => "between",
            Self::In(_) => "in",
            Self::Select(_) => "select",
            Self::SetOperation(_) => "set operation",
        }
    }

    /// Returns true for nodes that render a complete query.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Select(_) | Self::SetOperation(_))
    }
}

impl Render for Node {
    fn render(&self, dialect: &dyn Dialect) -> String {
        match self {
            Self::Placeholder => Placeholder.render(dialect),
            Self::Value(v) => v.render(dialect),
            Self::Column(c) => c.render(dialect),
            Self::Alias(a) => a.render(dialect),
            Self::Function(f) => f.render(dialect),
            Self::Comparison(c) => c.render(dialect),
            Self::Between(b) => b.render(dialect),
            Self::In(i) => i.render(dialect),
            Self::Select(s) => s.render_sql(dialect),
            Self::SetOperation(s) => s.render_sql(dialect),
        }
    }
}

/// Renders every item and joins the fragments with `sep`.
pub fn render_joined<T: Render>(items: &[T], dialect: &dyn Dialect, sep: &str) -> String {
    items
        .iter()
        .map(|item| item.render(dialect))
        .collect::<Vec<_>>()
        .join(sep)
}

impl From<Placeholder> for Node {
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

impl From<Value> for Node {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<Column> for Node {
    fn from(c: Column) -> Self {
        Self::Column(c)
    }
}

impl From<Alias> for Node {
    fn from(a: Alias) -> Self {
        Self::Alias(Box::new(a))
    }
}

impl From<Function> for Node {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl From<Comparison> for Node {
    fn from(c: Comparison) -> Self {
        Self::Comparison(Box::new(c))
    }
}

impl From<Between> for Node {
    fn from(b: Between) -> Self {
        Self::Between(Box::new(b))
    }
}

impl From<In> for Node {
    fn from(i: In) -> Self {
        Self::In(Box::new(i))
    }
}

impl From<Select> for Node {
    fn from(s: Select) -> Self {
        Self::Select(Box::new(s))
    }
}

impl From<SetOperation> for Node {
    fn from(s: SetOperation) -> Self {
        Self::SetOperation(Box::new(s))
    }
}

// In value positions scalars are literals.
macro_rules! scalar_into_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(v: $ty) -> Self {
                    Self::Value(Value::from(v))
                }
            }
        )*
    };
}

scalar_into_node!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, &str);

impl<Tz: TimeZone> From<DateTime<Tz>> for Node {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Value(Value::from(v))
    }
}

/// Conversion for name positions: tables, fields, projected columns and
/// grouping or ordering targets.
///
/// Strings are validated as identifiers and become bare [`Column`]s rather
/// than text literals. Pre-built nodes are taken as they are.
pub trait IntoRef {
    /// Converts `self` into a node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for a string that
    /// is not a valid identifier.
    fn into_ref(self) -> Result<Node>;
}

impl IntoRef for &str {
    fn into_ref(self) -> Result<Node> {
        Column::new(self).map(Node::Column)
    }
}

impl IntoRef for String {
    fn into_ref(self) -> Result<Node> {
        self.as_str().into_ref()
    }
}

impl IntoRef for &String {
    fn into_ref(self) -> Result<Node> {
        self.as_str().into_ref()
    }
}

impl IntoRef for Node {
    fn into_ref(self) -> Result<Node> {
        Ok(self)
    }
}

impl IntoRef for Value {
    fn into_ref(self) -> Result<Node> {
        Ok(Node::Value(self))
    }
}

impl IntoRef for Column {
    fn into_ref(self) -> Result<Node> {
        Ok(Node::Column(self))
    }
}

impl IntoRef for Alias {
    fn into_ref(self) -> Result<Node> {
        Ok(self.into())
    }
}

impl IntoRef for Function {
    fn into_ref(self) -> Result<Node> {
        Ok(Node::Function(self))
    }
}

impl IntoRef for Select {
    fn into_ref(self) -> Result<Node> {
        Ok(self.into())
    }
}

impl IntoRef for SetOperation {
    fn into_ref(self) -> Result<Node> {
        Ok(self.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{column, select};
    use crate::error::BuilderError;

    #[test]
    fn test_scalars_are_literals() {
        assert_eq!(Node::from("dept").to_sql(), "'dept'");
        assert_eq!(Node::from(3_i32).to_sql(), "3");
        assert_eq!(Node::from(Placeholder).to_sql(), "?");
    }

    #[test]
    fn test_strings_are_names_in_ref_position() {
        assert_eq!("dept".into_ref().unwrap().to_sql(), "dept");
        assert_eq!(String::from(" dept ").into_ref().unwrap().to_sql(), "dept");
        assert!(matches!(
            "1dept".into_ref(),
            Err(BuilderError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Node::Placeholder.kind(), "placeholder");
        assert_eq!(Node::from(column("a").unwrap()).kind(), "column");
        let query = Node::from(select("employees").unwrap());
        assert_eq!(query.kind(), "select");
        assert!(query.is_query());
    }
}
