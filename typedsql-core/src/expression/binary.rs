//! Binary boolean nodes: equality, conjunction and disjunction

use std::fmt;

use super::{Condition, Expression, TypedExpression};
use crate::render::{display_via_sql, write_binary, Nesting};
use crate::Operator;

/// `lhs = rhs` over operands of identical result type
#[derive(Debug, Clone, PartialEq)]
pub struct Equality<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Equality<L, R>
where
    L: TypedExpression,
    R: TypedExpression<Type = L::Type>,
{
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<L, R> Equality<L, R> {
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    pub fn into_parts(self) -> (L, R) {
        (self.lhs, self.rhs)
    }
}

impl<L, R> Expression for Equality<L, R>
where
    L: TypedExpression,
    R: TypedExpression<Type = L::Type>,
{
    fn write_sql(&self, out: &mut dyn fmt::Write, nesting: Nesting) -> fmt::Result {
        write_binary(out, nesting, &self.lhs, Operator::EQ, &self.rhs)
    }
}

impl<L, R> TypedExpression for Equality<L, R>
where
    L: TypedExpression,
    R: TypedExpression<Type = L::Type>,
{
    type Type = bool;
}

display_via_sql!(Equality<L, R> where L: TypedExpression, R: TypedExpression<Type = L::Type>);

macro_rules! logical_node {
    ($(#[$doc:meta])* $name:ident => $operator:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name<L, R> {
            lhs: L,
            rhs: R,
        }

        impl<L: Condition, R: Condition> $name<L, R> {
            pub fn new(lhs: L, rhs: R) -> Self {
                Self { lhs, rhs }
            }
        }

        impl<L, R> $name<L, R> {
            pub fn lhs(&self) -> &L {
                &self.lhs
            }

            pub fn rhs(&self) -> &R {
                &self.rhs
            }

            pub fn into_parts(self) -> (L, R) {
                (self.lhs, self.rhs)
            }
        }

        impl<L: Condition, R: Condition> Expression for $name<L, R> {
            fn write_sql(&self, out: &mut dyn fmt::Write, nesting: Nesting) -> fmt::Result {
                write_binary(out, nesting, &self.lhs, $operator, &self.rhs)
            }
        }

        impl<L: Condition, R: Condition> TypedExpression for $name<L, R> {
            type Type = bool;
        }

        display_via_sql!($name<L, R> where L: Condition, R: Condition);
    };
}

logical_node! {
    /// `lhs AND rhs` over boolean operands
    And => Operator::AND
}

logical_node! {
    /// `lhs OR rhs` over boolean operands
    Or => Operator::OR
}
