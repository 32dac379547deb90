//! Expression node algebra
//!
//! Every node is an immutable value that owns its children. The result
//! type of a node is part of its Rust type, so the composition rules in
//! [`compose`] reject mismatched operands at compile time.

pub mod binary;
pub mod column;
pub mod compose;
pub mod literal;

use std::fmt;

use crate::render::Nesting;
use crate::SqlType;

pub use binary::{And, Equality, Or};
pub use column::{Attribute, Column};
pub use compose::{and, equals, or, ExpressionExt, IntoOperand};
pub use literal::{lit, Literal};

/// A node that may appear in a query tree
///
/// Object safe, so heterogeneous projections can be held as
/// `Box<dyn Expression>`.
pub trait Expression {
    /// Append this node's SQL text to `out`
    fn write_sql(&self, out: &mut dyn fmt::Write, nesting: Nesting) -> fmt::Result;

    /// True only for the empty expression
    fn is_empty(&self) -> bool {
        false
    }
}

/// An expression yielding a value of a known result type
pub trait TypedExpression: Expression {
    type Type: SqlType;
}

/// Boolean-valued expression, usable as a filter root
pub trait Condition: TypedExpression<Type = bool> {}

impl<E: TypedExpression<Type = bool>> Condition for E {}

/// The empty expression: no predicate, renders nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Expression for Empty {
    fn write_sql(&self, _out: &mut dyn fmt::Write, _nesting: Nesting) -> fmt::Result {
        Ok(())
    }

    fn is_empty(&self) -> bool {
        true
    }
}

impl<E: Expression + ?Sized> Expression for &E {
    fn write_sql(&self, out: &mut dyn fmt::Write, nesting: Nesting) -> fmt::Result {
        (**self).write_sql(out, nesting)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<E: Expression + ?Sized> Expression for Box<E> {
    fn write_sql(&self, out: &mut dyn fmt::Write, nesting: Nesting) -> fmt::Result {
        (**self).write_sql(out, nesting)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
