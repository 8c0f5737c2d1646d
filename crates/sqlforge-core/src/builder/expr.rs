//! Reference and predicate nodes.
//!
//! Field positions go through [`IntoRef`], so a string there names a column.
//! Value positions go through `Into<Node>`, so a string there is a text
//! literal.

use std::fmt;

use super::node::{render_joined, IntoRef, Node, Render};
use crate::dialect::Dialect;
use crate::error::{BuilderError, Result};
use crate::ident::Ident;

/// Creates a bare column reference.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `name` is not a valid identifier.
pub fn column(name: &str) -> Result<Column> {
    Column::new(name)
}

/// A column reference, optionally qualified by a schema or table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    schema: Option<Ident>,
    name: Ident,
}

impl Column {
    /// Creates a bare column reference.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if `name` is not a valid identifier.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            schema: None,
            name: Ident::new(name)?,
        })
    }

    /// Creates a qualified column reference (`schema.name`).
    ///
    /// A blank qualifier yields a bare column.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if either part is not a
    /// valid identifier.
    pub fn qualified(schema: &str, name: &str) -> Result<Self> {
        let schema = if schema.trim().is_empty() {
            None
        } else {
            Some(Ident::new(schema)?)
        };
        Ok(Self {
            schema,
            name: Ident::new(name)?,
        })
    }

    /// Returns the column name.
    #[must_use]
    pub const fn name(&self) -> &Ident {
        &self.name
    }

    /// Returns the qualifier, if any.
    #[must_use]
    pub const fn schema(&self) -> Option<&Ident> {
        self.schema.as_ref()
    }

    /// Aliases this column.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if `name` is not a valid identifier.
    pub fn alias(self, name: &str) -> Result<Alias> {
        Alias::new(self, name)
    }
}

impl Render for Column {
    fn render(&self, _dialect: &dyn Dialect) -> String {
        self.schema.as_ref().map_or_else(
            || self.name.to_string(),
            |schema| format!("{schema}.{}", self.name),
        )
    }
}

/// Aliases a node: `alias("employees", "e")` renders `employees e`.
///
/// # Errors
///
/// Returns [`BuilderError::CannotAliasLiteral`] for a value target, and
/// [`BuilderError::InvalidIdentifier`] for an invalid target or alias name.
pub fn alias(target: impl IntoRef, name: &str) -> Result<Alias> {
    Alias::new(target, name)
}

/// A node rendered under another name.
#[derive(Debug, Clone)]
pub struct Alias {
    target: Node,
    name: Option<Ident>,
}

impl Alias {
    /// Creates an alias. A blank `name` renders the target unaliased.
    ///
    /// Pre-built targets are trusted as constructed and not validated again.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::CannotAliasLiteral`] for a value target, and
    /// [`BuilderError::InvalidIdentifier`] for an invalid target or alias name.
    pub fn new(target: impl IntoRef, name: &str) -> Result<Self> {
        let target = target.into_ref()?;
        if matches!(target, Node::Value(_)) {
            return Err(BuilderError::CannotAliasLiteral);
        }
        let name = if name.trim().is_empty() {
            None
        } else {
            Some(Ident::new(name)?)
        };
        Ok(Self { target, name })
    }

    /// Returns the aliased node.
    #[must_use]
    pub const fn target(&self) -> &Node {
        &self.target
    }

    /// Returns the alias name, if any.
    #[must_use]
    pub const fn name(&self) -> Option<&Ident> {
        self.name.as_ref()
    }
}

impl Render for Alias {
    fn render(&self, dialect: &dyn Dialect) -> String {
        let target = self.target.render(dialect);
        match &self.name {
            None => target,
            Some(name) if self.target.is_query() => format!("({target}) {name}"),
            Some(name) => format!("{target} {name}"),
        }
    }
}

/// Creates a function call: `exec("lower", ["name"])` renders `lower('name')`.
///
/// Arguments are in value position; pass a [`Column`] to reference a column.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `name` is not a valid identifier.
pub fn exec<I>(name: &str, args: I) -> Result<Function>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Ok(Function {
        name: Ident::new(name)?,
        args: args.into_iter().map(Into::into).collect(),
    })
}

/// A function call.
#[derive(Debug, Clone)]
pub struct Function {
    name: Ident,
    args: Vec<Node>,
}

impl Function {
    /// Returns the function name.
    #[must_use]
    pub const fn name(&self) -> &Ident {
        &self.name
    }

    /// Returns the arguments.
    #[must_use]
    pub fn args(&self) -> &[Node] {
        &self.args
    }

    /// Aliases the call.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if `name` is not a valid identifier.
    pub fn alias(self, name: &str) -> Result<Alias> {
        Alias::new(self, name)
    }
}

impl Render for Function {
    fn render(&self, dialect: &dyn Dialect) -> String {
        format!("{}({})", self.name, render_joined(&self.args, dialect, ", "))
    }
}

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<>`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
}

impl CompareOp {
    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary comparison, rendered without spaces: `dept=?`.
#[derive(Debug, Clone)]
pub struct Comparison {
    field: Node,
    op: CompareOp,
    value: Node,
}

impl Comparison {
    /// Creates a comparison between a field and a value.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name.
    pub fn new(field: impl IntoRef, op: CompareOp, value: impl Into<Node>) -> Result<Self> {
        Ok(Self {
            field: field.into_ref()?,
            op,
            value: value.into(),
        })
    }

    /// Returns the operator.
    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }
}

impl Render for Comparison {
    fn render(&self, dialect: &dyn Dialect) -> String {
        format!(
            "{}{}{}",
            self.field.render(dialect),
            self.op,
            self.value.render(dialect)
        )
    }
}

/// Creates `field=value`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name.
pub fn eq(field: impl IntoRef, value: impl Into<Node>) -> Result<Comparison> {
    Comparison::new(field, CompareOp::Eq, value)
}

/// Creates `field<>value`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name.
pub fn ne(field: impl IntoRef, value: impl Into<Node>) -> Result<Comparison> {
    Comparison::new(field, CompareOp::NotEq, value)
}

/// Creates `field<value`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name.
pub fn lt(field: impl IntoRef, value: impl Into<Node>) -> Result<Comparison> {
    Comparison::new(field, CompareOp::Lt, value)
}

/// Creates `field<=value`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name.
pub fn le(field: impl IntoRef, value: impl Into<Node>) -> Result<Comparison> {
    Comparison::new(field, CompareOp::LtEq, value)
}

/// Creates `field>value`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name.
pub fn gt(field: impl IntoRef, value: impl Into<Node>) -> Result<Comparison> {
    Comparison::new(field, CompareOp::Gt, value)
}

/// Creates `field>=value`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name.
pub fn ge(field: impl IntoRef, value: impl Into<Node>) -> Result<Comparison> {
    Comparison::new(field, CompareOp::GtEq, value)
}

/// Creates `field between lower and upper`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name.
pub fn between(
    field: impl IntoRef,
    lower: impl Into<Node>,
    upper: impl Into<Node>,
) -> Result<Between> {
    Ok(Between {
        field: field.into_ref()?,
        lower: lower.into(),
        upper: upper.into(),
    })
}

/// A `between` predicate.
#[derive(Debug, Clone)]
pub struct Between {
    field: Node,
    lower: Node,
    upper: Node,
}

impl Render for Between {
    fn render(&self, dialect: &dyn Dialect) -> String {
        format!(
            "{} between {} and {}",
            self.field.render(dialect),
            self.lower.render(dialect),
            self.upper.render(dialect)
        )
    }
}

/// Creates `field in (v1, v2, ...)`.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `field` is an invalid name
/// and [`BuilderError::EmptyInList`] if `values` is empty.
pub fn in_list<I>(field: impl IntoRef, values: I) -> Result<In>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    let field = field.into_ref()?;
    let values: Vec<Node> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Err(BuilderError::EmptyInList {
            field: field.to_sql(),
        });
    }
    Ok(In { field, values })
}

/// An `in` predicate over a non-empty list.
#[derive(Debug, Clone)]
pub struct In {
    field: Node,
    values: Vec<Node>,
}

impl Render for In {
    fn render(&self, dialect: &dyn Dialect) -> String {
        format!(
            "{} in ({})",
            self.field.render(dialect),
            render_joined(&self.values, dialect, ", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::value::Placeholder;
    use crate::builder::{select, value};

    #[test]
    fn test_column() {
        assert_eq!(column("firstname").unwrap().to_sql(), "firstname");
        assert_eq!(
            Column::qualified("e", "firstname").unwrap().to_sql(),
            "e.firstname"
        );
        assert_eq!(Column::qualified("", "firstname").unwrap().to_sql(), "firstname");
    }

    #[test]
    fn test_column_invalid_names() {
        assert!(column("1st").is_err());
        assert!(Column::qualified("e!", "firstname").is_err());
    }

    #[test]
    fn test_alias() {
        assert_eq!(alias("firstname", "first").unwrap().to_sql(), "firstname first");
        assert_eq!(
            Column::qualified("e", "lastname")
                .unwrap()
                .alias("last")
                .unwrap()
                .to_sql(),
            "e.lastname last"
        );
    }

    #[test]
    fn test_alias_empty_name_is_unaliased() {
        assert_eq!(alias("employees", "").unwrap().to_sql(), "employees");
        assert_eq!(alias("employees", "  ").unwrap().to_sql(), "employees");
    }

    #[test]
    fn test_alias_subquery() {
        let mut inner = select("employees").unwrap();
        inner.column("dept").unwrap();
        assert_eq!(
            alias(inner, "d").unwrap().to_sql(),
            "(select dept from employees) d"
        );
    }

    #[test]
    fn test_alias_literal_fails() {
        let err = alias(value(1).unwrap(), "one").unwrap_err();
        assert_eq!(err, BuilderError::CannotAliasLiteral);
    }

    #[test]
    fn test_alias_invalid_name() {
        assert!(matches!(
            alias("employees", "1e"),
            Err(BuilderError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(eq("dept", Placeholder).unwrap().to_sql(), "dept=?");
        assert_eq!(ne("hired", "0001-01-01").unwrap().to_sql(), "hired<>'0001-01-01'");
        assert_eq!(lt("age", 65).unwrap().to_sql(), "age<65");
        assert_eq!(le("age", 65).unwrap().to_sql(), "age<=65");
        assert_eq!(gt("salary", 2000.5).unwrap().to_sql(), "salary>2000.5");
        assert_eq!(ge("active", true).unwrap().to_sql(), "active>=true");
    }

    #[test]
    fn test_comparison_between_columns() {
        let cmp = eq(
            Column::qualified("e", "dept").unwrap(),
            Column::qualified("d", "id").unwrap(),
        )
        .unwrap();
        assert_eq!(cmp.to_sql(), "e.dept=d.id");
        assert_eq!(cmp.op(), CompareOp::Eq);
    }

    #[test]
    fn test_comparison_field_is_validated() {
        assert!(matches!(
            eq("dept name", 1),
            Err(BuilderError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_between() {
        assert_eq!(
            between("salary", Placeholder, Placeholder).unwrap().to_sql(),
            "salary between ? and ?"
        );
        assert_eq!(
            between(Column::qualified("e", "salary").unwrap(), 2000, 3000)
                .unwrap()
                .to_sql(),
            "e.salary between 2000 and 3000"
        );
        assert_eq!(
            between("hired", "2020-01-01", Placeholder).unwrap().to_sql(),
            "hired between '2020-01-01' and ?"
        );
    }

    #[test]
    fn test_in_list() {
        assert_eq!(
            in_list("dept", ["sales", "it"]).unwrap().to_sql(),
            "dept in ('sales', 'it')"
        );
        assert_eq!(
            in_list("id", [Placeholder, Placeholder]).unwrap().to_sql(),
            "id in (?, ?)"
        );
    }

    #[test]
    fn test_in_list_empty() {
        let err = in_list("dept", Vec::<Node>::new()).unwrap_err();
        assert_eq!(
            err,
            BuilderError::EmptyInList {
                field: String::from("dept")
            }
        );
    }

    #[test]
    fn test_function() {
        assert_eq!(exec("now", Vec::<Node>::new()).unwrap().to_sql(), "now()");
        assert_eq!(
            exec("coalesce", [Node::from(column("bonus").unwrap()), Node::from(0)])
                .unwrap()
                .to_sql(),
            "coalesce(bonus, 0)"
        );
        assert_eq!(
            exec("count", [column("id").unwrap()])
                .unwrap()
                .alias("total")
                .unwrap()
                .to_sql(),
            "count(id) total"
        );
    }

    #[test]
    fn test_function_invalid_name() {
        assert!(exec("drop table", [1]).is_err());
    }
}
