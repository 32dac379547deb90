//! Literal values

use std::fmt;

use super::{Expression, TypedExpression};
use crate::render::{display_via_sql, Nesting};
use crate::SqlType;

/// A concrete value embedded in the query
///
/// Renders through the value's `Display` form. Nothing is quoted or
/// escaped; callers encode untrusted input before it gets here.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal<T> {
    value: T,
}

impl<T: SqlType> Literal<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: SqlType> Expression for Literal<T> {
    fn write_sql(&self, out: &mut dyn fmt::Write, _nesting: Nesting) -> fmt::Result {
        write!(out, "{}", self.value)
    }
}

impl<T: SqlType> TypedExpression for Literal<T> {
    type Type = T;
}

display_via_sql!(Literal<T> where T: SqlType);

/// Shorthand for [`Literal::new`]
pub fn lit<T: SqlType>(value: T) -> Literal<T> {
    Literal::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToSql;

    #[test]
    fn test_literal_uses_display_form() {
        assert_eq!(Literal::new(18).to_sql(), "18");
        assert_eq!(Literal::new(true).to_sql(), "true");
        assert_eq!(Literal::new(2.5f64).to_sql(), "2.5");
        assert_eq!(Literal::new(-7i64).to_sql(), "-7");
    }

    #[test]
    fn test_text_is_not_quoted() {
        assert_eq!(lit("O'Brien".to_string()).to_sql(), "O'Brien");
    }

    #[test]
    fn test_json_literal() {
        let value = serde_json::json!({"k": 1});
        assert_eq!(Literal::new(value).to_sql(), "{\"k\":1}");
    }

    #[test]
    fn test_value_access() {
        let literal = Literal::new(42);
        assert_eq!(*literal.value(), 42);
        assert_eq!(literal.into_inner(), 42);
    }
}
