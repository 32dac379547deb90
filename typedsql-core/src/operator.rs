//! Infix operators of the expression algebra

use std::fmt::{self, Display};

use crate::{Error, Result};

/// Infix operator of a binary expression node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator(&'static str);

impl Operator {
    pub const EQ: Self = Operator("=");
    pub const AND: Self = Operator("AND");
    pub const OR: Self = Operator("OR");

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether both operands and the result are boolean
    pub fn is_logical(&self) -> bool {
        *self == Self::AND || *self == Self::OR
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Trait for types that can be converted to operators
pub trait IntoOperator {
    fn into_operator(self) -> Result<Operator>;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> Result<Operator> {
        Ok(self)
    }
}

impl IntoOperator for &str {
    fn into_operator(self) -> Result<Operator> {
        match self {
            "=" => Ok(Operator::EQ),
            "AND" | "and" => Ok(Operator::AND),
            "OR" | "or" => Ok(Operator::OR),
            _ => Err(Error::unknown_operator(self)),
        }
    }
}
