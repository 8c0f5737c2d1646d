//! UPDATE statement builder.

use std::fmt;

use tracing::debug;

use super::filter::Filter;
use super::node::{render_joined, IntoRef, Node, Render};
use super::value::Placeholder;
use crate::dialect::{Dialect, GenericDialect};
use crate::error::Result;

/// Creates an UPDATE builder for `table`.
///
/// ```rust
/// use sqlforge_core::prelude::*;
///
/// let mut q = update("employees")?;
/// q.column("firstname")?.column("lastname")?;
/// assert_eq!(q.to_sql(), "update employees set firstname=?, lastname=?");
/// # Ok::<(), sqlforge_core::BuilderError>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::BuilderError::InvalidIdentifier`] if `table` is an invalid name.
pub fn update(table: impl IntoRef) -> Result<Update> {
    Update::new(table)
}

/// An assignment in the SET clause.
#[derive(Debug, Clone)]
struct Assignment {
    column: Node,
    value: Node,
}

impl Render for Assignment {
    fn render(&self, dialect: &dyn Dialect) -> String {
        format!("{}={}", self.column.render(dialect), self.value.render(dialect))
    }
}

/// An UPDATE statement builder.
#[derive(Debug, Clone)]
pub struct Update {
    table: Node,
    assignments: Vec<Assignment>,
    predicates: Vec<Node>,
}

impl Update {
    /// Creates an UPDATE builder for `table`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `table` is an invalid name.
    pub fn new(table: impl IntoRef) -> Result<Self> {
        Ok(Self {
            table: table.into_ref()?,
            assignments: vec![],
            predicates: vec![],
        })
    }

    /// Assigns a placeholder to `name`: `name=?`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `name` is an invalid name.
    pub fn column(&mut self, name: impl IntoRef) -> Result<&mut Self> {
        self.set(name, Placeholder)
    }

    /// Assigns `value` to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] if `name` is an invalid name.
    pub fn set(&mut self, name: impl IntoRef, value: impl Into<Node>) -> Result<&mut Self> {
        self.assignments.push(Assignment {
            column: name.into_ref()?,
            value: value.into(),
        });
        Ok(self)
    }

    fn render_sql(&self, dialect: &dyn Dialect) -> String {
        let mut sql = format!(
            "update {} set {}",
            self.table.render(dialect),
            render_joined(&self.assignments, dialect, ", ")
        );

        if !self.predicates.is_empty() {
            sql.push_str(" where ");
            sql.push_str(&render_joined(&self.predicates, dialect, " and "));
        }

        sql
    }
}

impl Render for Update {
    fn render(&self, dialect: &dyn Dialect) -> String {
        let sql = self.render_sql(dialect);
        debug!(dialect = dialect.name(), sql = %sql, "rendered update");
        sql
    }
}

impl Filter for Update {
    fn predicates_mut(&mut self) -> &mut Vec<Node> {
        &mut self.predicates
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&GenericDialect))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::builder::{gt, Column};
    use crate::dialect::SqliteDialect;
    use crate::error::BuilderError;

    #[test]
    fn test_update_placeholders() {
        let mut q = update("employees").unwrap();
        q.column("firstname").unwrap().column("lastname").unwrap();
        assert_eq!(q.to_sql(), "update employees set firstname=?, lastname=?");
    }

    #[test]
    fn test_update_with_values_and_where() {
        let mut q = update("employees").unwrap();
        q.set("lastname", "O'Brien")
            .unwrap()
            .set("salary", 3000)
            .unwrap()
            .eq("id")
            .unwrap()
            .filter(gt("age", 30).unwrap());
        assert_eq!(
            q.to_sql(),
            "update employees set lastname='O''Brien', salary=3000 where id=? and age>30"
        );
    }

    #[test]
    fn test_update_timestamp_per_dialect() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut q = update("employees").unwrap();
        q.set(Column::qualified("e", "hired").unwrap(), ts).unwrap();
        assert_eq!(q.to_sql(), "update employees set e.hired=2024-01-02T03:04:05.000Z");
        assert_eq!(
            q.render(&SqliteDialect),
            "update employees set e.hired='2024-01-02 03:04:05.000'"
        );
    }

    #[test]
    fn test_update_between_and_in() {
        let mut q = update("employees").unwrap();
        q.column("bonus")
            .unwrap()
            .between("salary")
            .unwrap()
            .in_list("dept", ["it", "sales"])
            .unwrap();
        assert_eq!(
            q.to_sql(),
            "update employees set bonus=? where salary between ? and ? and dept in ('it', 'sales')"
        );
    }

    #[test]
    fn test_update_invalid_column() {
        let mut q = update("employees").unwrap();
        assert!(matches!(
            q.column("first name"),
            Err(BuilderError::InvalidIdentifier { .. })
        ));
        q.column("first").unwrap();
        assert_eq!(q.to_sql(), "update employees set first=?");
    }

    #[test]
    fn test_update_without_assignments_keeps_empty_set_clause() {
        let mut q = update("employees").unwrap();
        assert_eq!(q.to_sql(), "update employees set ");
        q.eq("id").unwrap();
        assert_eq!(q.to_sql(), "update employees set  where id=?");
    }

    #[test]
    fn test_update_render_is_idempotent() {
        let mut q = update("employees").unwrap();
        q.column("a").unwrap().ne("b").unwrap();
        assert_eq!(q.to_sql(), q.to_sql());
        assert_eq!(q.to_string(), "update employees set a=? where b<>?");
    }
}
