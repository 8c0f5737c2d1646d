//! SELECT statement builder.
//!
//! Unlike a typestate builder, `Select` is a plain accumulator: it always has
//! a source (given at construction) and every other clause is optional, so
//! any sequence of configuration calls yields a renderable statement.
//! Configuration methods mutate the builder in place and return it for
//! chaining.

use std::fmt::{self, Write};

use tracing::debug;

use super::expr::{CompareOp, Comparison};
use super::filter::Filter;
use super::node::{render_joined, IntoRef, Node, Render};
use super::set_op::{SetOpKind, SetOperation};
use crate::dialect::{Dialect, GenericDialect};
use crate::error::Result;

/// Join flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinKind {
    /// Inner join, rendered with the bare `join` keyword.
    #[default]
    Inner,
    /// `left join`
    Left,
    /// `right join`
    Right,
}

impl JoinKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "join",
            Self::Left => "left join",
            Self::Right => "right join",
        }
    }
}

/// A join against another table, with AND-combined conditions.
#[derive(Debug, Clone)]
pub struct Join {
    kind: JoinKind,
    table: Node,
    conditions: Vec<Comparison>,
}

impl Join {
    /// Creates a join.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `table` is an invalid name.
    pub fn new<I>(kind: JoinKind, table: impl IntoRef, conditions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Comparison>,
    {
        Ok(Self {
            kind,
            table: table.into_ref()?,
            conditions: conditions.into_iter().collect(),
        })
    }

    /// Adds another condition.
    #[must_use]
    pub fn and(mut self, condition: Comparison) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Adds `column=value`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `column` is an invalid name.
    pub fn eq(self, column: impl IntoRef, value: impl Into<Node>) -> Result<Self> {
        Ok(self.and(Comparison::new(column, CompareOp::Eq, value)?))
    }

    /// Adds `column<>value`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `column` is an invalid name.
    pub fn ne(self, column: impl IntoRef, value: impl Into<Node>) -> Result<Self> {
        Ok(self.and(Comparison::new(column, CompareOp::NotEq, value)?))
    }

    /// Returns the join kind.
    #[must_use]
    pub const fn kind(&self) -> JoinKind {
        self.kind
    }
}

impl Render for Join {
    fn render(&self, dialect: &dyn Dialect) -> String {
        let mut sql = format!("{} {}", self.kind.as_str(), self.table.render(dialect));
        if !self.conditions.is_empty() {
            sql.push_str(" on ");
            sql.push_str(&render_joined(&self.conditions, dialect, " and "));
        }
        sql
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Direction {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone)]
pub struct Order {
    target: Node,
    direction: Direction,
}

impl Order {
    /// Creates an ORDER BY entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `target` is an invalid name.
    pub fn new(target: impl IntoRef, direction: Direction) -> Result<Self> {
        Ok(Self {
            target: target.into_ref()?,
            direction,
        })
    }
}

impl Render for Order {
    fn render(&self, dialect: &dyn Dialect) -> String {
        format!("{} {}", self.target.render(dialect), self.direction.as_str())
    }
}

/// Creates a SELECT builder reading from `source`.
///
/// ```rust
/// use sqlforge_core::prelude::*;
///
/// let mut q = select("employees")?;
/// q.columns(["firstname", "lastname"])?.eq("dept")?;
/// assert_eq!(
///     q.to_sql(),
///     "select firstname, lastname from employees where dept=?"
/// );
/// # Ok::<(), sqlforge_core::BuilderError>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::BuilderError::InvalidIdentifier`] if `source` is an invalid name.
pub fn select(source: impl IntoRef) -> Result<Select> {
    Select::new(source)
}

/// A SELECT statement builder.
#[derive(Debug, Clone)]
pub struct Select {
    distinct: bool,
    sources: Vec<Node>,
    joins: Vec<Join>,
    columns: Vec<Node>,
    predicates: Vec<Node>,
    group_by: Vec<Node>,
    order_by: Vec<Order>,
    limit: u64,
    offset: u64,
}

impl Select {
    /// Creates a SELECT builder reading from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `source` is an invalid name.
    pub fn new(source: impl IntoRef) -> Result<Self> {
        Ok(Self {
            distinct: false,
            sources: vec![source.into_ref()?],
            joins: vec![],
            columns: vec![],
            predicates: vec![],
            group_by: vec![],
            order_by: vec![],
            limit: 0,
            offset: 0,
        })
    }

    /// Adds another comma-separated source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `source` is an invalid name.
    pub fn from(&mut self, source: impl IntoRef) -> Result<&mut Self> {
        self.sources.push(source.into_ref()?);
        Ok(self)
    }

    /// Adds an inner join.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `table` is an invalid name.
    pub fn join<I>(&mut self, table: impl IntoRef, conditions: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Comparison>,
    {
        let join = Join::new(JoinKind::Inner, table, conditions)?;
        Ok(self.add_join(join))
    }

    /// Adds a left join.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `table` is an invalid name.
    pub fn left_join<I>(&mut self, table: impl IntoRef, conditions: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Comparison>,
    {
        let join = Join::new(JoinKind::Left, table, conditions)?;
        Ok(self.add_join(join))
    }

    /// Adds a right join.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `table` is an invalid name.
    pub fn right_join<I>(&mut self, table: impl IntoRef, conditions: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Comparison>,
    {
        let join = Join::new(JoinKind::Right, table, conditions)?;
        Ok(self.add_join(join))
    }

    /// Adds a pre-built join.
    pub fn add_join(&mut self, join: Join) -> &mut Self {
        self.joins.push(join);
        self
    }

    /// Adds a projected column.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `column` is an invalid name.
    pub fn column(&mut self, column: impl IntoRef) -> Result<&mut Self> {
        self.columns.push(column.into_ref()?);
        Ok(self)
    }

    /// Adds several projected columns.
    ///
    /// Nothing is added unless every column is valid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if any column is an invalid name.
    pub fn columns<I>(&mut self, columns: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: IntoRef,
    {
        let nodes = columns
            .into_iter()
            .map(IntoRef::into_ref)
            .collect::<Result<Vec<_>>>()?;
        self.columns.extend(nodes);
        Ok(self)
    }

    /// Sets DISTINCT.
    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    /// Adds a GROUP BY target.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `target` is an invalid name.
    pub fn group_by(&mut self, target: impl IntoRef) -> Result<&mut Self> {
        self.group_by.push(target.into_ref()?);
        Ok(self)
    }

    /// Adds an ORDER BY target.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `target` is an invalid name.
    pub fn order_by(&mut self, target: impl IntoRef, direction: Direction) -> Result<&mut Self> {
        self.order_by.push(Order::new(target, direction)?);
        Ok(self)
    }

    /// Sets LIMIT. Zero means no limit.
    pub fn limit(&mut self, n: u64) -> &mut Self {
        self.limit = n;
        self
    }

    /// Sets OFFSET. Zero means no offset.
    pub fn offset(&mut self, n: u64) -> &mut Self {
        self.offset = n;
        self
    }

    /// Returns the number of explicitly projected columns (zero for `*`).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Combines this statement with `others` using UNION.
    ///
    /// The builder moves into the set operation as its first member, which
    /// ends its own configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::SetOperationTypeMismatch`] if a member
    /// is not a select, and [`crate::BuilderError::SetOperationArityMismatch`]
    /// if it projects a different number of columns.
    pub fn union<I>(self, others: I, all: bool) -> Result<SetOperation>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.combine(SetOpKind::Union, others, all)
    }

    /// Combines this statement with `others` using INTERSECT.
    ///
    /// # Errors
    ///
    /// Same as [`Select::union`].
    pub fn intersect<I>(self, others: I, all: bool) -> Result<SetOperation>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.combine(SetOpKind::Intersect, others, all)
    }

    /// Combines this statement with `others` using EXCEPT.
    ///
    /// # Errors
    ///
    /// Same as [`Select::union`].
    pub fn except<I>(self, others: I, all: bool) -> Result<SetOperation>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.combine(SetOpKind::Except, others, all)
    }

    fn combine<I>(self, kind: SetOpKind, others: I, all: bool) -> Result<SetOperation>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let mut op = SetOperation::new(kind, self, all);
        for other in others {
            op.append(other)?;
        }
        Ok(op)
    }

    /// Renders the statement without emitting a log event, for use as a nested query.
    pub(crate) fn render_sql(&self, dialect: &dyn Dialect) -> String {
        let mut sql = String::from("select ");

        if self.distinct {
            sql.push_str("distinct ");
        }

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&render_joined(&self.columns, dialect, ", "));
        }

        sql.push_str(" from ");
        sql.push_str(&render_joined(&self.sources, dialect, ", "));

        if !self.joins.is_empty() {
            sql.push(' ');
            sql.push_str(&render_joined(&self.joins, dialect, " "));
        }

        if !self.predicates.is_empty() {
            sql.push_str(" where ");
            sql.push_str(&render_joined(&self.predicates, dialect, " and "));
        }

        if !self.group_by.is_empty() {
            sql.push_str(" group by ");
            sql.push_str(&render_joined(&self.group_by, dialect, ", "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(" order by ");
            sql.push_str(&render_joined(&self.order_by, dialect, ", "));
        }

        if self.limit > 0 {
            let _ = write!(sql, " limit {}", self.limit);
        }

        if self.offset > 0 {
            let _ = write!(sql, " offset {}", self.offset);
        }

        sql
    }
}

impl Render for Select {
    fn render(&self, dialect: &dyn Dialect) -> String {
        let sql = self.render_sql(dialect);
        debug!(dialect = dialect.name(), sql = %sql, "rendered select");
        sql
    }
}

impl Filter for Select {
    fn predicates_mut(&mut self) -> &mut Vec<Node> {
        &mut self.predicates
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&GenericDialect))
    }
}
