//! Result types of expressions
//!
//! A result type is the static type the database yields when it evaluates
//! an expression. On the typed API it is a Rust type implementing
//! [`SqlType`]; the [`SqlTypeTag`] is its runtime name, used by the dynamic
//! layer and in error messages.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Runtime tag naming a result type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlTypeTag {
    Boolean,
    Integer,
    BigInt,
    Real,
    Double,
    Text,
    Json,
    Uuid,
    Timestamp,
    Decimal,
}

impl SqlTypeTag {
    /// Get the SQL type name
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlTypeTag::Boolean => "BOOLEAN",
            SqlTypeTag::Integer => "INTEGER",
            SqlTypeTag::BigInt => "BIGINT",
            SqlTypeTag::Real => "REAL",
            SqlTypeTag::Double => "DOUBLE PRECISION",
            SqlTypeTag::Text => "TEXT",
            SqlTypeTag::Json => "JSON",
            SqlTypeTag::Uuid => "UUID",
            SqlTypeTag::Timestamp => "TIMESTAMP",
            SqlTypeTag::Decimal => "DECIMAL",
        }
    }
}

impl Display for SqlTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rust types usable as an expression's result type
///
/// The `Display` bound is the textual form a [`Literal`](crate::Literal) of
/// this type renders as.
pub trait SqlType: Display + 'static {
    const TAG: SqlTypeTag;
}

macro_rules! sql_type {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl SqlType for $ty {
                const TAG: SqlTypeTag = SqlTypeTag::$tag;
            }
        )*
    };
}

sql_type! {
    bool => Boolean,
    i32 => Integer,
    i64 => BigInt,
    f32 => Real,
    f64 => Double,
    String => Text,
    serde_json::Value => Json,
}

#[cfg(feature = "uuid-support")]
sql_type! { uuid::Uuid => Uuid }

#[cfg(feature = "datetime-support")]
sql_type! { chrono::NaiveDateTime => Timestamp }

#[cfg(feature = "decimal-support")]
sql_type! { rust_decimal::Decimal => Decimal }
