//! Column references

use std::fmt;
use std::marker::PhantomData;

use super::{Expression, TypedExpression};
use crate::render::{display_via_sql, Nesting};
use crate::SqlType;

/// Describes a column: a stable key and a result type
///
/// Usually declared with the [`attribute!`](crate::attribute) macro.
pub trait Attribute: 'static {
    type Type: SqlType;

    /// The column key as it appears in SQL
    fn key() -> &'static str;
}

/// Reference to the column described by `A`
///
/// Zero sized: the key and result type live in the attribute type.
pub struct Column<A> {
    attribute: PhantomData<fn() -> A>,
}

impl<A: Attribute> Column<A> {
    pub const fn new() -> Self {
        Self {
            attribute: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        A::key()
    }
}

impl<A: Attribute> Default for Column<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Column<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Column<A> {}

impl<A: Attribute> fmt::Debug for Column<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Column").field(&A::key()).finish()
    }
}

impl<A> PartialEq for Column<A> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<A> Eq for Column<A> {}

impl<A: Attribute> Expression for Column<A> {
    fn write_sql(&self, out: &mut dyn fmt::Write, _nesting: Nesting) -> fmt::Result {
        out.write_str(A::key())
    }
}

impl<A: Attribute> TypedExpression for Column<A> {
    type Type = A::Type;
}

display_via_sql!(Column<A> where A: Attribute);

/// Declare attribute types and their column constants
///
/// ```
/// use typedsql_core::{attribute, ToSql};
///
/// attribute! {
///     pub Name: String = "name";
///     pub Age: i32 = "age";
/// }
///
/// assert_eq!(Name::COLUMN.to_sql(), "name");
/// assert_eq!(Age::COLUMN.key(), "age");
/// ```
///
/// An empty key is rejected at compile time.
#[macro_export]
macro_rules! attribute {
    ($($vis:vis $name:ident : $ty:ty = $key:literal;)*) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            $vis struct $name;

            const _: () = assert!(!$key.is_empty(), "attribute key must not be empty");

            impl $crate::Attribute for $name {
                type Type = $ty;

                fn key() -> &'static str {
                    $key
                }
            }

            impl $name {
                #[allow(dead_code)]
                pub const COLUMN: $crate::Column<$name> = $crate::Column::new();
            }
        )*
    };
}
