//! Runtime values for dynamically built literals

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::SqlTypeTag;

/// A literal value whose result type is only known at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 32-bit integer
    I32(i32),
    /// 64-bit integer
    I64(i64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// String value
    String(String),
    /// JSON value
    Json(serde_json::Value),
    /// UUID value
    #[cfg(feature = "uuid-support")]
    Uuid(uuid::Uuid),
    /// Timestamp without time zone
    #[cfg(feature = "datetime-support")]
    Timestamp(chrono::NaiveDateTime),
    /// Arbitrary precision decimal
    #[cfg(feature = "decimal-support")]
    Decimal(rust_decimal::Decimal),
}

impl Value {
    /// Get the result type of this value
    pub fn sql_type(&self) -> SqlTypeTag {
        match self {
            Value::Bool(_) => SqlTypeTag::Boolean,
            Value::I32(_) => SqlTypeTag::Integer,
            Value::I64(_) => SqlTypeTag::BigInt,
            Value::F32(_) => SqlTypeTag::Real,
            Value::F64(_) => SqlTypeTag::Double,
            Value::String(_) => SqlTypeTag::Text,
            Value::Json(_) => SqlTypeTag::Json,
            #[cfg(feature = "uuid-support")]
            Value::Uuid(_) => SqlTypeTag::Uuid,
            #[cfg(feature = "datetime-support")]
            Value::Timestamp(_) => SqlTypeTag::Timestamp,
            #[cfg(feature = "decimal-support")]
            Value::Decimal(_) => SqlTypeTag::Decimal,
        }
    }
}

/// Same text a typed [`Literal`](crate::Literal) of the inner value renders
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(val) => write!(f, "{}", val),
            Value::I32(val) => write!(f, "{}", val),
            Value::I64(val) => write!(f, "{}", val),
            Value::F32(val) => write!(f, "{}", val),
            Value::F64(val) => write!(f, "{}", val),
            Value::String(val) => f.write_str(val),
            Value::Json(val) => write!(f, "{}", val),
            #[cfg(feature = "uuid-support")]
            Value::Uuid(val) => write!(f, "{}", val),
            #[cfg(feature = "datetime-support")]
            Value::Timestamp(val) => write!(f, "{}", val),
            #[cfg(feature = "decimal-support")]
            Value::Decimal(val) => write!(f, "{}", val),
        }
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::I32(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::I64(val)
    }
}

impl From<f32> for Value {
    fn from(val: f32) -> Self {
        Value::F32(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::F64(val)
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::String(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::String(val.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(val: serde_json::Value) -> Self {
        Value::Json(val)
    }
}

#[cfg(feature = "uuid-support")]
impl From<uuid::Uuid> for Value {
    fn from(val: uuid::Uuid) -> Self {
        Value::Uuid(val)
    }
}

#[cfg(feature = "datetime-support")]
impl From<chrono::NaiveDateTime> for Value {
    fn from(val: chrono::NaiveDateTime) -> Self {
        Value::Timestamp(val)
    }
}

#[cfg(feature = "decimal-support")]
impl From<rust_decimal::Decimal> for Value {
    fn from(val: rust_decimal::Decimal) -> Self {
        Value::Decimal(val)
    }
}
