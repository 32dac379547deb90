//! typedsql core - a type-safe SQL expression builder
//!
//! Expressions carry their result type in their Rust type, so comparing a
//! text column with an integer, or AND-ing a non-boolean, fails to compile.
//! Trees and statements render to SQL text; nothing here talks to a
//! database.

pub mod dynamic;
pub mod error;
pub mod expression;
pub mod operator;
pub mod render;
pub mod row;
pub mod statement;
pub mod types;
pub mod util;
pub mod value;

// Re-export main types
pub use dynamic::{DynAttribute, DynCondition, DynExpr, IntoDyn};
pub use error::{Error, Result};
pub use expression::{
    and, equals, lit, or, And, Attribute, Column, Condition, Empty, Equality, Expression,
    ExpressionExt, IntoOperand, Literal, Or, TypedExpression,
};
pub use operator::{IntoOperator, Operator};
pub use render::{Nesting, ToSql};
pub use row::Row;
pub use statement::{Filter, IntoFields, Select};
pub use types::{SqlType, SqlTypeTag};
pub use value::Value;

/// Create a SELECT statement over `fields` with no WHERE clause
///
/// # Examples
/// ```
/// use typedsql_core::{attribute, select, ToSql};
///
/// attribute! {
///     Name: String = "name";
///     Age: i32 = "age";
/// }
///
/// assert_eq!(select((Name::COLUMN, Age::COLUMN)).to_sql(), "SELECT (name, age);");
/// ```
pub fn select<F: IntoFields>(fields: F) -> Select {
    Select::unfiltered(fields)
}
