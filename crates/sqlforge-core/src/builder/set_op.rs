//! UNION, INTERSECT and EXCEPT over select statements.
//!
//! Members are chained flat: `a union b union c`. Every member must be a
//! select projecting as many columns as the first one.

use std::fmt;

use tracing::debug;

use super::node::{Node, Render};
use super::select::Select;
use crate::dialect::{Dialect, GenericDialect};
use crate::error::{BuilderError, Result};

/// The set operator combining the members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOpKind {
    /// `union`
    Union,
    /// `intersect`
    Intersect,
    /// `except`
    Except,
}

impl SetOpKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersect => "intersect",
            Self::Except => "except",
        }
    }
}

/// A set operation over one or more select statements.
#[derive(Debug, Clone)]
pub struct SetOperation {
    kind: SetOpKind,
    all: bool,
    members: Vec<Select>,
}

impl SetOperation {
    /// Creates a set operation whose first member is `first`.
    #[must_use]
    pub fn new(kind: SetOpKind, first: Select, all: bool) -> Self {
        Self {
            kind,
            all,
            members: vec![first],
        }
    }

    /// Appends a member.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::SetOperationTypeMismatch`] if `member` is not a
    /// select, and [`BuilderError::SetOperationArityMismatch`] if its column
    /// count differs from the first member's.
    pub fn append(&mut self, member: impl Into<Node>) -> Result<&mut Self> {
        let select = match member.into() {
            Node::Select(select) => select,
            other => {
                return Err(BuilderError::SetOperationTypeMismatch {
                    op: self.kind.as_str(),
                    found: other.kind(),
                })
            }
        };
        let expected = self.members[0].column_count();
        let found = select.column_count();
        if found != expected {
            return Err(BuilderError::SetOperationArityMismatch {
                op: self.kind.as_str(),
                expected,
                found,
            });
        }
        self.members.push(*select);
        Ok(self)
    }

    /// Returns the operator.
    #[must_use]
    pub const fn kind(&self) -> SetOpKind {
        self.kind
    }

    /// Returns true when duplicates are kept (`all`).
    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.all
    }

    /// Returns the members in order.
    #[must_use]
    pub fn members(&self) -> &[Select] {
        &self.members
    }

    pub(crate) fn render_sql(&self, dialect: &dyn Dialect) -> String {
        let sep = if self.all {
            format!(" {} all ", self.kind.as_str())
        } else {
            format!(" {} ", self.kind.as_str())
        };
        self.members
            .iter()
            .map(|member| member.render_sql(dialect))
            .collect::<Vec<_>>()
            .join(&sep)
    }
}

impl Render for SetOperation {
    fn render(&self, dialect: &dyn Dialect) -> String {
        let sql = self.render_sql(dialect);
        debug!(dialect = dialect.name(), sql = %sql, "rendered {}", self.kind.as_str());
        sql
    }
}

impl fmt::Display for SetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&GenericDialect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{alias, column, select, Filter};

    fn employees(cols: &[&str]) -> Select {
        let mut q = select("employees").unwrap();
        q.columns(cols.iter().copied()).unwrap();
        q
    }

    fn contractors(cols: &[&str]) -> Select {
        let mut q = select("contractors").unwrap();
        q.columns(cols.iter().copied()).unwrap();
        q
    }

    #[test]
    fn test_union() {
        let u = employees(&["name"]).union([contractors(&["name"])], false).unwrap();
        assert_eq!(
            u.to_sql(),
            "select name from employees union select name from contractors"
        );
        assert_eq!(u.kind(), SetOpKind::Union);
        assert!(!u.is_all());
    }

    #[test]
    fn test_union_all() {
        let u = employees(&["name"]).union([contractors(&["name"])], true).unwrap();
        assert_eq!(
            u.to_sql(),
            "select name from employees union all select name from contractors"
        );
        assert!(u.is_all());
    }

    #[test]
    fn test_intersect_and_except() {
        let i = employees(&["id"]).intersect([contractors(&["id"])], false).unwrap();
        assert_eq!(
            i.to_sql(),
            "select id from employees intersect select id from contractors"
        );
        let e = employees(&["id"]).except([contractors(&["id"])], true).unwrap();
        assert_eq!(
            e.to_sql(),
            "select id from employees except all select id from contractors"
        );
    }

    #[test]
    fn test_flat_chain() {
        let mut interns = select("interns").unwrap();
        interns.column("name").unwrap();
        let u = employees(&["name"])
            .union([contractors(&["name"]), interns], false)
            .unwrap();
        assert_eq!(u.members().len(), 3);
        assert_eq!(
            u.to_sql(),
            "select name from employees union select name from contractors \
             union select name from interns"
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let err = employees(&["first", "last"])
            .union([contractors(&["name"])], false)
            .unwrap_err();
        assert_eq!(
            err,
            BuilderError::SetOperationArityMismatch {
                op: "union",
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = employees(&["name"])
            .except([column("name").unwrap()], false)
            .unwrap_err();
        assert_eq!(
            err,
            BuilderError::SetOperationTypeMismatch {
                op: "except",
                found: "column",
            }
        );
    }

    #[test]
    fn test_append_failure_keeps_members() {
        let mut u = employees(&["name"]).union([contractors(&["name"])], false).unwrap();
        assert!(u.append(contractors(&["a", "b"])).is_err());
        assert_eq!(u.members().len(), 2);
    }

    #[test]
    fn test_first_member_keeps_its_configuration() {
        let mut q = employees(&["name"]);
        q.eq("dept").unwrap();
        let u = q.union([contractors(&["name"])], false).unwrap();
        assert_eq!(u.members()[0].column_count(), 1);
        assert_eq!(
            u.to_sql(),
            "select name from employees where dept=? union select name from contractors"
        );
    }

    #[test]
    fn test_set_operation_as_source() {
        let u = employees(&["name"]).union([contractors(&["name"])], false).unwrap();
        let q = select(alias(u, "people").unwrap()).unwrap();
        assert_eq!(
            q.to_sql(),
            "select * from (select name from employees union select name from contractors) people"
        );
    }
}
