//! Where-clause accumulation shared by `Select` and `Update`.

use super::expr::{between, in_list, Between, Column, CompareOp, Comparison, In};
use super::node::{IntoRef, Node};
use super::value::Placeholder;
use crate::error::Result;

/// The predicate a bare field name expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateShape {
    /// `field<op>?`
    Compare(CompareOp),
    /// `field between ? and ?`
    Between,
}

impl PredicateShape {
    fn build(self, field: Node) -> Result<Node> {
        Ok(match self {
            Self::Compare(op) => Comparison::new(field, op, Placeholder)?.into(),
            Self::Between => between(field, Placeholder, Placeholder)?.into(),
        })
    }
}

/// Argument accepted by the [`Filter`] predicate methods.
///
/// A field (a name or a [`Column`]) expands to a predicate with placeholder
/// operands. A pre-built predicate is appended as it is.
pub trait IntoPredicate {
    /// Converts `self` into a predicate node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn into_predicate(self, shape: PredicateShape) -> Result<Node>;
}

impl IntoPredicate for &str {
    fn into_predicate(self, shape: PredicateShape) -> Result<Node> {
        shape.build(self.into_ref()?)
    }
}

impl IntoPredicate for String {
    fn into_predicate(self, shape: PredicateShape) -> Result<Node> {
        self.as_str().into_predicate(shape)
    }
}

impl IntoPredicate for Column {
    fn into_predicate(self, shape: PredicateShape) -> Result<Node> {
        shape.build(self.into())
    }
}

impl IntoPredicate for Comparison {
    fn into_predicate(self, _shape: PredicateShape) -> Result<Node> {
        Ok(self.into())
    }
}

impl IntoPredicate for Between {
    fn into_predicate(self, _shape: PredicateShape) -> Result<Node> {
        Ok(self.into())
    }
}

impl IntoPredicate for In {
    fn into_predicate(self, _shape: PredicateShape) -> Result<Node> {
        Ok(self.into())
    }
}

/// A complete predicate node, accepted by [`Filter::filter`].
pub trait Predicate: Into<Node> {}

impl Predicate for Comparison {}

impl Predicate for Between {}

impl Predicate for In {}

/// Builders with an AND-combined where clause.
///
/// Every method appends one predicate in place and returns the builder for
/// chaining. A failing call appends nothing.
pub trait Filter: Sized {
    /// Returns the predicate list.
    fn predicates_mut(&mut self) -> &mut Vec<Node>;

    /// Appends a pre-built predicate.
    ///
    /// Bare names and literals are not predicates:
    ///
    /// ```compile_fail
    /// use sqlforge_core::prelude::*;
    ///
    /// let mut q = select("employees").unwrap();
    /// q.filter("dept");
    /// ```
    fn filter(&mut self, predicate: impl Predicate) -> &mut Self {
        self.predicates_mut().push(predicate.into());
        self
    }

    /// Appends a predicate built from `predicate` with the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn push_predicate(
        &mut self,
        predicate: impl IntoPredicate,
        shape: PredicateShape,
    ) -> Result<&mut Self> {
        let node = predicate.into_predicate(shape)?;
        self.predicates_mut().push(node);
        Ok(self)
    }

    /// Appends `field=?`, or the given predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn eq(&mut self, predicate: impl IntoPredicate) -> Result<&mut Self> {
        self.push_predicate(predicate, PredicateShape::Compare(CompareOp::Eq))
    }

    /// Appends `field<>?`, or the given predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn ne(&mut self, predicate: impl IntoPredicate) -> Result<&mut Self> {
        self.push_predicate(predicate, PredicateShape::Compare(CompareOp::NotEq))
    }

    /// Appends `field<?`, or the given predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn lt(&mut self, predicate: impl IntoPredicate) -> Result<&mut Self> {
        self.push_predicate(predicate, PredicateShape::Compare(CompareOp::Lt))
    }

    /// Appends `field<=?`, or the given predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn le(&mut self, predicate: impl IntoPredicate) -> Result<&mut Self> {
        self.push_predicate(predicate, PredicateShape::Compare(CompareOp::LtEq))
    }

    /// Appends `field>?`, or the given predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn gt(&mut self, predicate: impl IntoPredicate) -> Result<&mut Self> {
        self.push_predicate(predicate, PredicateShape::Compare(CompareOp::Gt))
    }

    /// Appends `field>=?`, or the given predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn ge(&mut self, predicate: impl IntoPredicate) -> Result<&mut Self> {
        self.push_predicate(predicate, PredicateShape::Compare(CompareOp::GtEq))
    }

    /// Appends `field between ? and ?`, or the given predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field name.
    fn between(&mut self, predicate: impl IntoPredicate) -> Result<&mut Self> {
        self.push_predicate(predicate, PredicateShape::Between)
    }

    /// Appends `field in (...)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::InvalidIdentifier`] for an invalid field
    /// name and [`crate::BuilderError::EmptyInList`] for an empty list.
    fn in_list<I>(&mut self, field: impl IntoRef, values: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let node = in_list(field, values)?;
        self.predicates_mut().push(node.into());
        Ok(self)
    }
}
