//! Error types for typedsql

use std::fmt;

use thiserror::Error;

use crate::{Operator, SqlTypeTag};

/// The main error type for typedsql operations
///
/// The statically typed API never produces these: ill-typed trees are
/// rejected by the compiler. They surface from the runtime-checked
/// [`dynamic`](crate::dynamic) layer and from writing to a failing sink.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operands of a composition rule have incompatible result types
    #[error("Type mismatch in '{operator}': {lhs} vs {rhs}")]
    TypeMismatch {
        operator: Operator,
        lhs: SqlTypeTag,
        rhs: SqlTypeTag,
    },

    /// A filter root must be boolean
    #[error("Filter must be BOOLEAN, found {found}")]
    NonBooleanFilter { found: SqlTypeTag },

    /// Attribute descriptor is missing its key
    #[error("Malformed attribute descriptor: {message}")]
    MalformedDescriptor { message: String },

    /// Operator token not understood by the expression algebra
    #[error("Unknown operator '{token}'")]
    UnknownOperator { token: String },

    /// The output sink refused a write
    #[error("Rendering error: {0}")]
    Render(#[from] fmt::Error),
}

/// Convenience Result type for typedsql operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new type mismatch error
    pub fn type_mismatch(operator: Operator, lhs: SqlTypeTag, rhs: SqlTypeTag) -> Self {
        Self::TypeMismatch { operator, lhs, rhs }
    }

    /// Create a new non-boolean filter error
    pub fn non_boolean_filter(found: SqlTypeTag) -> Self {
        Self::NonBooleanFilter { found }
    }

    /// Create a new malformed descriptor error
    pub fn malformed_descriptor(message: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            message: message.into(),
        }
    }

    /// Create a new unknown operator error
    pub fn unknown_operator(token: impl Into<String>) -> Self {
        Self::UnknownOperator {
            token: token.into(),
        }
    }
}
