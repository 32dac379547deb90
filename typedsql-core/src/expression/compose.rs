//! Composition rules
//!
//! Operands are moved into the node they compose. Type rules:
//!
//! - equality needs operands of identical result type
//! - conjunction and disjunction need boolean operands
//!
//! Both are enforced by trait bounds, so a mismatch is a compile error:
//!
//! ```compile_fail
//! use typedsql_core::{attribute, ExpressionExt};
//!
//! attribute! { Name: String = "name"; }
//!
//! // a TEXT column cannot equal an integer
//! let _ = Name::COLUMN.equals(18);
//! ```
//!
//! ```compile_fail
//! use typedsql_core::{attribute, ExpressionExt};
//!
//! attribute! { Age: i32 = "age"; Active: bool = "active"; }
//!
//! // AND needs a boolean left operand
//! let _ = Age::COLUMN.and(Active::COLUMN);
//! ```
//!
//! Columns themselves need a key:
//!
//! ```compile_fail
//! use typedsql_core::{attribute, ExpressionExt};
//!
//! attribute! { Blank: String = ""; }
//!
//! let _ = Blank::COLUMN.equals("x");
//! ```

use std::ops::{BitAnd, BitOr};

use super::{And, Column, Condition, Equality, Literal, Or, TypedExpression};
use crate::SqlType;

/// Anything usable as an operand of result type `T`
///
/// Every typed expression is an operand of its own result type. Plain
/// values are lifted into a [`Literal`]; `&str` lifts to `Literal<String>`.
pub trait IntoOperand<T: SqlType> {
    type Expr: TypedExpression<Type = T>;

    fn into_operand(self) -> Self::Expr;
}

impl<E: TypedExpression> IntoOperand<E::Type> for E {
    type Expr = E;

    fn into_operand(self) -> E {
        self
    }
}

macro_rules! literal_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoOperand<$ty> for $ty {
                type Expr = Literal<$ty>;

                fn into_operand(self) -> Literal<$ty> {
                    Literal::new(self)
                }
            }
        )*
    };
}

literal_operand!(bool, i32, i64, f32, f64, String, serde_json::Value);

#[cfg(feature = "uuid-support")]
literal_operand!(uuid::Uuid);

#[cfg(feature = "datetime-support")]
literal_operand!(chrono::NaiveDateTime);

#[cfg(feature = "decimal-support")]
literal_operand!(rust_decimal::Decimal);

impl IntoOperand<String> for &str {
    type Expr = Literal<String>;

    fn into_operand(self) -> Literal<String> {
        Literal::new(self.to_string())
    }
}

/// Composition methods available on every typed expression
///
/// # Examples
/// ```
/// use typedsql_core::{attribute, ExpressionExt, ToSql};
///
/// attribute! {
///     Age: i32 = "age";
///     Active: bool = "active";
/// }
///
/// let filter = Age::COLUMN.equals(18).and(Active::COLUMN.equals(true));
/// assert_eq!(filter.to_sql(), "( age = 18 ) AND ( active = true )");
/// ```
pub trait ExpressionExt: TypedExpression + Sized {
    /// `self = rhs`
    fn equals<R>(self, rhs: R) -> Equality<Self, R::Expr>
    where
        R: IntoOperand<Self::Type>,
    {
        Equality::new(self, rhs.into_operand())
    }

    /// `self AND rhs`
    fn and<R>(self, rhs: R) -> And<Self, R::Expr>
    where
        Self: Condition,
        R: IntoOperand<bool>,
    {
        And::new(self, rhs.into_operand())
    }

    /// `self OR rhs`
    fn or<R>(self, rhs: R) -> Or<Self, R::Expr>
    where
        Self: Condition,
        R: IntoOperand<bool>,
    {
        Or::new(self, rhs.into_operand())
    }
}

impl<E: TypedExpression> ExpressionExt for E {}

/// `lhs = rhs`
pub fn equals<L, R>(lhs: L, rhs: R) -> Equality<L, R::Expr>
where
    L: TypedExpression,
    R: IntoOperand<L::Type>,
{
    lhs.equals(rhs)
}

/// `lhs AND rhs`
pub fn and<L: Condition, R: Condition>(lhs: L, rhs: R) -> And<L, R> {
    And::new(lhs, rhs)
}

/// `lhs OR rhs`
pub fn or<L: Condition, R: Condition>(lhs: L, rhs: R) -> Or<L, R> {
    Or::new(lhs, rhs)
}

// `&` and `|` as AND/OR on boolean nodes
macro_rules! logical_ops {
    ($ty:ident < $($param:ident),* >) => {
        impl<$($param,)* Rhs> BitAnd<Rhs> for $ty<$($param),*>
        where
            Self: Condition,
            Rhs: IntoOperand<bool>,
        {
            type Output = And<Self, Rhs::Expr>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                And::new(self, rhs.into_operand())
            }
        }

        impl<$($param,)* Rhs> BitOr<Rhs> for $ty<$($param),*>
        where
            Self: Condition,
            Rhs: IntoOperand<bool>,
        {
            type Output = Or<Self, Rhs::Expr>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                Or::new(self, rhs.into_operand())
            }
        }
    };
}

logical_ops!(Equality<L, R>);
logical_ops!(And<L, R>);
logical_ops!(Or<L, R>);
logical_ops!(Column<A>);
