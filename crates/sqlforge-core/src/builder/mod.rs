//! Statement and expression builders.
//!
//! Nodes are assembled from validated names and literal values, and every
//! node renders itself through the [`Render`] trait.
//!
//! # Example
//!
//! ```rust
//! use sqlforge_core::prelude::*;
//!
//! let mut q = select(alias("employees", "e")?)?;
//! q.column(Column::qualified("e", "firstname")?.alias("first")?)?
//!     .join(
//!         alias("departments", "d")?,
//!         [eq(Column::qualified("e", "dept")?, Column::qualified("d", "id")?)?],
//!     )?
//!     .eq(Column::qualified("d", "name")?)?
//!     .order_by("first", Direction::Asc)?
//!     .limit(10);
//!
//! assert_eq!(
//!     q.to_sql(),
//!     "select e.firstname first from employees e \
//!      join departments d on e.dept=d.id where d.name=? order by first asc limit 10"
//! );
//! # Ok::<(), sqlforge_core::BuilderError>(())
//! ```

mod expr;
mod filter;
mod insert;
mod node;
mod select;
mod set_op;
mod update;
mod value;

pub use expr::{
    alias, between, column, eq, exec, ge, gt, in_list, le, lt, ne, Alias, Between, Column,
    CompareOp, Comparison, Function, In,
};
pub use filter::{Filter, IntoPredicate, Predicate, PredicateShape};
pub use insert::{insert, Insert};
pub use node::{IntoRef, Node, Render};
pub use select::{select, Direction, Join, JoinKind, Order, Select};
pub use set_op::{SetOpKind, SetOperation};
pub use update::{update, Update};
pub use value::{value, Placeholder, Value};
