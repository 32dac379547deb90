//! typedsql - a type-safe SQL expression builder for Rust
//!
//! Declare columns once with [`attribute!`], compose them with
//! [`ExpressionExt`] methods or the `&`/`|` operators, and render the
//! result. Ill-typed comparisons are rejected by the compiler.
//!
//! ```
//! use typedsql::prelude::*;
//!
//! attribute! {
//!     pub Id: i64 = "id";
//!     pub Age: i32 = "age";
//!     pub Active: bool = "active";
//! }
//!
//! let query = Select::new(
//!     Age::COLUMN.equals(18) & Active::COLUMN.equals(true),
//!     Id::COLUMN,
//! );
//! assert_eq!(
//!     query.to_sql(),
//!     "SELECT (id) WHERE ( age = 18 ) AND ( active = true );"
//! );
//! ```

pub use typedsql_core::*;

/// Everything needed to declare columns and build statements
pub mod prelude {
    pub use typedsql_core::{
        and, attribute, equals, lit, or, select, Attribute, Column, DynAttribute, DynExpr,
        Error, Expression, ExpressionExt, IntoDyn, Literal, Result, Select, SqlTypeTag, ToSql,
        TypedExpression,
    };
}
