//! INSERT statement builder.
//!
//! An insert takes its rows either from explicit values or from a source
//! query. The two modes are exclusive: once one is chosen the other is
//! rejected with [`BuilderError::ModeConflict`].

use std::fmt;

use tracing::debug;

use super::node::{render_joined, IntoRef, Node, Render};
use super::select::Select;
use super::value::Placeholder;
use crate::dialect::{Dialect, GenericDialect};
use crate::error::{BuilderError, Result};

/// Creates an INSERT builder for `table`.
///
/// ```rust
/// use sqlforge_core::prelude::*;
///
/// let mut q = insert("employees")?;
/// q.columns(["first", "last", "dept"])?;
/// assert_eq!(
///     q.to_sql(),
///     "insert into employees (first, last, dept) values (?, ?, ?)"
/// );
/// # Ok::<(), sqlforge_core::BuilderError>(())
/// ```
///
/// # Errors
///
/// Returns [`BuilderError::InvalidIdentifier`] if `table` is an invalid name.
pub fn insert(table: impl IntoRef) -> Result<Insert> {
    Insert::new(table)
}

/// An INSERT statement builder.
#[derive(Debug, Clone)]
pub struct Insert {
    table: Node,
    columns: Vec<Node>,
    values: Vec<Node>,
    source: Option<Box<Select>>,
}

impl Insert {
    /// Creates an INSERT builder for `table`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if `table` is an invalid name.
    pub fn new(table: impl IntoRef) -> Result<Self> {
        Ok(Self {
            table: table.into_ref()?,
            columns: vec![],
            values: vec![],
            source: None,
        })
    }

    /// Adds a target column.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if `name` is an invalid name.
    pub fn column(&mut self, name: impl IntoRef) -> Result<&mut Self> {
        self.columns.push(name.into_ref()?);
        Ok(self)
    }

    /// Adds several target columns. Nothing is added unless all are valid.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidIdentifier`] if any name is invalid.
    pub fn columns<I>(&mut self, names: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: IntoRef,
    {
        let nodes = names
            .into_iter()
            .map(IntoRef::into_ref)
            .collect::<Result<Vec<_>>>()?;
        self.columns.extend(nodes);
        Ok(self)
    }

    /// Appends an explicit value. Pass [`Placeholder`] for an unbound one.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ModeConflict`] if a source query is attached.
    pub fn value(&mut self, value: impl Into<Node>) -> Result<&mut Self> {
        if self.source.is_some() {
            return Err(BuilderError::ModeConflict);
        }
        self.values.push(value.into());
        Ok(self)
    }

    /// Takes the inserted rows from `query`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ModeConflict`] if explicit values were added.
    pub fn select(&mut self, query: Select) -> Result<&mut Self> {
        if !self.values.is_empty() {
            return Err(BuilderError::ModeConflict);
        }
        self.source = Some(Box::new(query));
        Ok(self)
    }

    fn render_sql(&self, dialect: &dyn Dialect) -> String {
        let mut sql = format!("insert into {}", self.table.render(dialect));

        if !self.columns.is_empty() {
            sql.push_str(" (");
            sql.push_str(&render_joined(&self.columns, dialect, ", "));
            sql.push(')');
        }

        if let Some(query) = &self.source {
            sql.push(' ');
            sql.push_str(&query.render_sql(dialect));
            return sql;
        }

        let values = if self.values.is_empty() {
            vec![Placeholder.render(dialect); self.columns.len()].join(", ")
        } else {
            render_joined(&self.values, dialect, ", ")
        };
        sql.push_str(" values (");
        sql.push_str(&values);
        sql.push(')');
        sql
    }
}

impl Render for Insert {
    fn render(&self, dialect: &dyn Dialect) -> String {
        let sql = self.render_sql(dialect);
        debug!(dialect = dialect.name(), sql = %sql, "rendered insert");
        sql
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&GenericDialect))
    }
}
