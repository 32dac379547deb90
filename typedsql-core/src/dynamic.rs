//! Runtime-checked expressions
//!
//! For trees whose columns are only known at runtime, e.g. read from a
//! schema. Each node carries its result type as a [`SqlTypeTag`] and the
//! composition rules are checked when a node is built, never at render
//! time. A statically typed tree converts losslessly through [`IntoDyn`].

use std::fmt;

use tracing::debug;

use crate::expression::{And, Attribute, Column, Equality, Expression, Literal, Or};
use crate::render::{display_via_sql, write_binary, Nesting};
use crate::statement::Filter;
use crate::{Error, IntoOperator, Operator, Result, SqlType, SqlTypeTag, Value};

/// Column descriptor known only at runtime
#[derive(Debug, Clone, PartialEq)]
pub struct DynAttribute {
    key: String,
    sql_type: SqlTypeTag,
}

impl DynAttribute {
    /// Create a descriptor, rejecting a missing key
    pub fn new(key: impl Into<String>, sql_type: SqlTypeTag) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::malformed_descriptor(format!(
                "{} column has an empty key",
                sql_type
            )));
        }
        Ok(Self { key, sql_type })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn sql_type(&self) -> SqlTypeTag {
        self.sql_type
    }
}

/// Expression node with a runtime result type
#[derive(Debug, Clone, PartialEq)]
pub enum DynExpr {
    Column(DynAttribute),
    Literal(Value),
    Binary {
        operator: Operator,
        lhs: Box<DynExpr>,
        rhs: Box<DynExpr>,
    },
}

impl DynExpr {
    pub fn column(attribute: DynAttribute) -> Self {
        DynExpr::Column(attribute)
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        DynExpr::Literal(value.into())
    }

    /// Get the result type of this node
    pub fn result_type(&self) -> SqlTypeTag {
        match self {
            DynExpr::Column(attribute) => attribute.sql_type(),
            DynExpr::Literal(value) => value.sql_type(),
            DynExpr::Binary { .. } => SqlTypeTag::Boolean,
        }
    }

    /// Compose `lhs <operator> rhs`, checking operand result types
    ///
    /// # Examples
    /// ```
    /// use typedsql_core::{DynAttribute, DynExpr, SqlTypeTag};
    ///
    /// let age = DynAttribute::new("age", SqlTypeTag::Integer).unwrap();
    /// let err = DynExpr::binary("=", DynExpr::column(age), DynExpr::literal("x"));
    /// assert!(err.is_err());
    /// ```
    pub fn binary<O: IntoOperator>(operator: O, lhs: DynExpr, rhs: DynExpr) -> Result<Self> {
        let operator = operator.into_operator()?;
        let (lhs_type, rhs_type) = (lhs.result_type(), rhs.result_type());

        let well_typed = if operator.is_logical() {
            lhs_type == SqlTypeTag::Boolean && rhs_type == SqlTypeTag::Boolean
        } else {
            lhs_type == rhs_type
        };

        if !well_typed {
            debug!(%operator, lhs = %lhs_type, rhs = %rhs_type, "rejected ill-typed expression");
            return Err(Error::type_mismatch(operator, lhs_type, rhs_type));
        }

        Ok(DynExpr::Binary {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    /// `self = rhs`
    pub fn equals(self, rhs: DynExpr) -> Result<Self> {
        Self::binary(Operator::EQ, self, rhs)
    }

    /// `self AND rhs`
    pub fn and(self, rhs: DynExpr) -> Result<Self> {
        Self::binary(Operator::AND, self, rhs)
    }

    /// `self OR rhs`
    pub fn or(self, rhs: DynExpr) -> Result<Self> {
        Self::binary(Operator::OR, self, rhs)
    }

    /// Check this node is boolean so it can serve as a filter root
    pub fn into_condition(self) -> Result<DynCondition> {
        match self.result_type() {
            SqlTypeTag::Boolean => Ok(DynCondition(self)),
            found => {
                debug!(%found, "rejected non-boolean filter");
                Err(Error::non_boolean_filter(found))
            }
        }
    }
}

impl Expression for DynExpr {
    fn write_sql(&self, out: &mut dyn fmt::Write, nesting: Nesting) -> fmt::Result {
        match self {
            DynExpr::Column(attribute) => out.write_str(attribute.key()),
            DynExpr::Literal(value) => write!(out, "{}", value),
            DynExpr::Binary { operator, lhs, rhs } => {
                write_binary(out, nesting, &**lhs, *operator, &**rhs)
            }
        }
    }
}

display_via_sql!(DynExpr);

/// A [`DynExpr`] verified to be boolean
#[derive(Debug, Clone, PartialEq)]
pub struct DynCondition(DynExpr);

impl DynCondition {
    pub fn into_inner(self) -> DynExpr {
        self.0
    }
}

impl Expression for DynCondition {
    fn write_sql(&self, out: &mut dyn fmt::Write, nesting: Nesting) -> fmt::Result {
        self.0.write_sql(out, nesting)
    }
}

display_via_sql!(DynCondition);

impl Filter for DynCondition {}

/// Conversion of statically typed trees into [`DynExpr`]
///
/// Infallible: the static tree is already well typed.
pub trait IntoDyn {
    fn into_dyn(self) -> DynExpr;
}

impl IntoDyn for DynExpr {
    fn into_dyn(self) -> DynExpr {
        self
    }
}

impl<A: Attribute> IntoDyn for Column<A> {
    fn into_dyn(self) -> DynExpr {
        DynExpr::Column(DynAttribute {
            key: A::key().to_string(),
            sql_type: <A::Type as SqlType>::TAG,
        })
    }
}

impl<T: SqlType + Into<Value>> IntoDyn for Literal<T> {
    fn into_dyn(self) -> DynExpr {
        DynExpr::Literal(self.into_inner().into())
    }
}

macro_rules! binary_into_dyn {
    ($($ty:ident => $operator:expr),*) => {
        $(
            impl<L: IntoDyn, R: IntoDyn> IntoDyn for $ty<L, R> {
                fn into_dyn(self) -> DynExpr {
                    let (lhs, rhs) = self.into_parts();
                    DynExpr::Binary {
                        operator: $operator,
                        lhs: Box::new(lhs.into_dyn()),
                        rhs: Box::new(rhs.into_dyn()),
                    }
                }
            }
        )*
    };
}

binary_into_dyn!(Equality => Operator::EQ, And => Operator::AND, Or => Operator::OR);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExpressionExt, Select, ToSql};
    use pretty_assertions::assert_eq;

    crate::attribute! {
        Age: i32 = "age";
        Active: bool = "active";
    }

    fn column(key: &str, sql_type: SqlTypeTag) -> DynExpr {
        DynExpr::column(DynAttribute::new(key, sql_type).unwrap())
    }

    #[test]
    fn test_empty_key_is_malformed() {
        let err = DynAttribute::new("  ", SqlTypeTag::Text).unwrap_err();
        assert!(matches!(err, Error::MalformedDescriptor { .. }));
    }

    #[test]
    fn test_equality_requires_identical_types() {
        let err = column("age", SqlTypeTag::Integer)
            .equals(DynExpr::literal("eighteen"))
            .unwrap_err();
        assert_eq!(
            err,
            Error::type_mismatch(Operator::EQ, SqlTypeTag::Integer, SqlTypeTag::Text)
        );
    }

    #[test]
    fn test_integer_widths_do_not_mix() {
        let err = column("id", SqlTypeTag::BigInt).equals(DynExpr::literal(1)).unwrap_err();
        assert_eq!(err.to_string(), "Type mismatch in '=': BIGINT vs INTEGER");
    }

    #[test]
    fn test_logical_requires_booleans() {
        let err = column("active", SqlTypeTag::Boolean)
            .and(DynExpr::literal(1))
            .unwrap_err();
        assert_eq!(
            err,
            Error::type_mismatch(Operator::AND, SqlTypeTag::Boolean, SqlTypeTag::Integer)
        );
    }

    #[test]
    fn test_unknown_operator_token() {
        let err = DynExpr::binary("<>", DynExpr::literal(1), DynExpr::literal(2)).unwrap_err();
        assert_eq!(err, Error::unknown_operator("<>"));
    }

    #[test]
    fn test_renders_like_static_tree() -> Result<()> {
        let dynamic = column("age", SqlTypeTag::Integer)
            .equals(DynExpr::literal(18))?
            .and(column("active", SqlTypeTag::Boolean).equals(DynExpr::literal(true))?)?;
        let typed = Age::COLUMN.equals(18).and(Active::COLUMN.equals(true));
        assert_eq!(dynamic.to_sql(), typed.to_sql());
        Ok(())
    }

    #[test]
    fn test_into_dyn_preserves_types() {
        let dynamic = Age::COLUMN.equals(18).or(Active::COLUMN).into_dyn();
        assert_eq!(dynamic.result_type(), SqlTypeTag::Boolean);
        assert_eq!(dynamic.to_sql(), "( age = 18 ) OR active");
        assert_eq!(Age::COLUMN.into_dyn().result_type(), SqlTypeTag::Integer);
    }

    #[test]
    fn test_string_operator_tokens() -> Result<()> {
        let expr = DynExpr::binary("or", DynExpr::literal(true), DynExpr::literal(false))?;
        assert_eq!(expr.to_sql(), "true OR false");
        Ok(())
    }

    #[test]
    fn test_condition_in_select() -> Result<()> {
        let filter = column("age", SqlTypeTag::Integer)
            .equals(DynExpr::literal(18))?
            .into_condition()?;
        let query = Select::new(filter, column("name", SqlTypeTag::Text));
        assert_eq!(query.to_sql(), "SELECT (name) WHERE age = 18;");
        Ok(())
    }

    #[test]
    fn test_non_boolean_filter_is_rejected() {
        let err = column("age", SqlTypeTag::Integer).into_condition().unwrap_err();
        assert_eq!(err, Error::non_boolean_filter(SqlTypeTag::Integer));
    }

    #[test]
    fn test_display_matches_to_sql() -> Result<()> {
        let expr = column("active", SqlTypeTag::Boolean).or(DynExpr::literal(false))?;
        assert_eq!(format!("{}", expr), expr.to_sql());

        let condition = expr.into_condition()?;
        assert_eq!(format!("{}", condition), "active OR false");
        Ok(())
    }

    #[cfg(feature = "uuid-support")]
    #[test]
    fn test_uuid_literal_converts_to_dyn() {
        crate::attribute! {
            Uid: uuid::Uuid = "uid";
        }

        let dynamic = Uid::COLUMN.equals(uuid::Uuid::nil()).into_dyn();
        assert_eq!(dynamic.to_sql(), "uid = 00000000-0000-0000-0000-000000000000");

        let rebuilt = column("uid", SqlTypeTag::Uuid).equals(DynExpr::literal(uuid::Uuid::nil()));
        assert_eq!(rebuilt, Ok(dynamic));
    }

    #[cfg(feature = "datetime-support")]
    #[test]
    fn test_timestamp_literal_converts_to_dyn() {
        crate::attribute! {
            CreatedAt: chrono::NaiveDateTime = "created_at";
        }

        let at = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap();
        let dynamic = CreatedAt::COLUMN.equals(at).into_dyn();
        assert_eq!(dynamic.to_sql(), "created_at = 2024-01-15 00:00:00");
    }

    #[cfg(feature = "decimal-support")]
    #[test]
    fn test_decimal_literal_converts_to_dyn() {
        crate::attribute! {
            Price: rust_decimal::Decimal = "price";
        }

        let dynamic = Price::COLUMN.equals(rust_decimal::Decimal::new(999, 2)).into_dyn();
        assert_eq!(dynamic.result_type(), SqlTypeTag::Boolean);
        assert_eq!(dynamic.to_sql(), "price = 9.99");
    }
}
