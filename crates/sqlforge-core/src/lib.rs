//! # sqlforge-core
//!
//! A builder for SQL statements assembled from composable expression nodes.
//!
//! Statements are built from nodes (columns, literals, comparisons, joins,
//! function calls, set operations) and rendered to lowercase SQL text.
//! Nothing is executed and nothing is bound: unbound parameters render as
//! `?` and are left to the execution layer.
//!
//! ```rust
//! use sqlforge_core::prelude::*;
//!
//! let mut q = select("employees")?;
//! q.columns(["firstname", "lastname"])?;
//! assert_eq!(q.to_sql(), "select firstname, lastname from employees");
//!
//! let mut u = update("employees")?;
//! u.set("lastname", "O'Brien")?.eq("id")?;
//! assert_eq!(u.to_sql(), "update employees set lastname='O''Brien' where id=?");
//! # Ok::<(), sqlforge_core::BuilderError>(())
//! ```
//!
//! ## Names and literals
//!
//! Strings passed where a name is expected (tables, fields, projected
//! columns) are validated identifiers: an ASCII letter followed by letters,
//! digits or underscores. Strings passed where a value is expected are text
//! literals, quoted with embedded quotes doubled. Name validation guards
//! against accidental breakage only; it is not a security boundary.
//!
//! ## Dialects
//!
//! [`Render::render`] takes a [`Dialect`] that decides how literals are
//! spelled. [`Render::to_sql`] uses [`GenericDialect`].

pub mod builder;
pub mod dialect;
pub mod error;
pub mod ident;

pub use builder::{
    alias, between, column, eq, exec, ge, gt, in_list, insert, le, lt, ne, select, update, value,
    Filter, Insert, Node, Placeholder, Render, Select, SetOperation, Update, Value,
};
pub use dialect::{Dialect, GenericDialect, SqliteDialect};
pub use error::{BuilderError, Result};
pub use ident::Ident;

/// Everything needed to build and render statements.
pub mod prelude {
    pub use crate::builder::{
        alias, between, column, eq, exec, ge, gt, in_list, insert, le, lt, ne, select, update,
        value, Column, Direction, Filter, Insert, IntoRef, JoinKind, Node, Placeholder, Render,
        Select, SetOperation, Update, Value,
    };
    pub use crate::dialect::{Dialect, GenericDialect, SqliteDialect};
    pub use crate::error::{BuilderError, Result};
}
