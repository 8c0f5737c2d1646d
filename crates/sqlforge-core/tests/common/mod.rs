#![allow(dead_code)]

use sqlforge_core::builder::Column;
use sqlforge_core::prelude::*;

/// Builds `schema.name`, panicking on invalid names.
pub fn qcol(schema: &str, name: &str) -> Column {
    Column::qualified(schema, name)
        .unwrap_or_else(|e| panic!("Invalid column {schema}.{name}: {e}"))
}

/// Builds a select over `table` projecting `columns`.
pub fn select_cols(table: &str, columns: &[&str]) -> Select {
    let mut q = select(table).unwrap_or_else(|e| panic!("Invalid table {table}: {e}"));
    q.columns(columns.iter().copied())
        .unwrap_or_else(|e| panic!("Invalid columns {columns:?}: {e}"));
    q
}

/// Asserts that rendering twice yields `expected` both times.
pub fn assert_sql(node: &impl Render, expected: &str) {
    let first = node.to_sql();
    assert_eq!(first, expected);
    assert_eq!(node.to_sql(), first, "render is not idempotent");
}
