//! SELECT statement representation

use std::fmt;

use crate::expression::{Condition, Empty, Expression};
use crate::render::{display_via_sql, Nesting, ToSql};
use crate::util::join;

/// Expressions allowed as a statement's filter root
///
/// Boolean expressions, plus [`Empty`] for "no WHERE clause".
pub trait Filter: Expression {}

impl Filter for Empty {}

impl<E: Condition> Filter for E {}

/// Trait for types that can be converted to a projection list
pub trait IntoFields {
    fn into_fields(self) -> Vec<Box<dyn Expression>>;
}

impl IntoFields for Vec<Box<dyn Expression>> {
    fn into_fields(self) -> Vec<Box<dyn Expression>> {
        self
    }
}

impl<E: Expression + 'static> IntoFields for E {
    fn into_fields(self) -> Vec<Box<dyn Expression>> {
        vec![Box::new(self)]
    }
}

impl IntoFields for () {
    fn into_fields(self) -> Vec<Box<dyn Expression>> {
        Vec::new()
    }
}

// Tuples of up to 8 fields, in declaration order
macro_rules! tuple_fields {
    ($($name:ident),+) => {
        impl<$($name),+> IntoFields for ($($name,)+)
        where
            $($name: Expression + 'static,)+
        {
            #[allow(non_snake_case)]
            fn into_fields(self) -> Vec<Box<dyn Expression>> {
                let ($($name,)+) = self;
                vec![$(Box::new($name) as Box<dyn Expression>),+]
            }
        }
    };
}

tuple_fields!(A);
tuple_fields!(A, B);
tuple_fields!(A, B, C);
tuple_fields!(A, B, C, D);
tuple_fields!(A, B, C, D, E);
tuple_fields!(A, B, C, D, E, F);
tuple_fields!(A, B, C, D, E, F, G);
tuple_fields!(A, B, C, D, E, F, G, H);

/// A SELECT statement: an ordered projection list and one filter root
///
/// Immutable once built. Use the [`select`](crate::select) factory for an
/// unfiltered statement, or [`Select::new`] to supply a filter.
pub struct Select<W = Empty> {
    filter: W,
    fields: Vec<Box<dyn Expression>>,
}

impl Select<Empty> {
    /// Create a statement with no WHERE clause
    pub fn unfiltered<F: IntoFields>(fields: F) -> Self {
        Self::new(Empty, fields)
    }
}

impl<W: Filter> Select<W> {
    /// Create a statement with an explicit filter root
    ///
    /// Fields that render nothing, such as [`Empty`], are dropped from the
    /// projection list.
    ///
    /// # Examples
    /// ```
    /// use typedsql_core::{attribute, ExpressionExt, Select, ToSql};
    ///
    /// attribute! {
    ///     Name: String = "name";
    ///     Age: i32 = "age";
    /// }
    ///
    /// let query = Select::new(Age::COLUMN.equals(18), Name::COLUMN);
    /// assert_eq!(query.to_sql(), "SELECT (name) WHERE age = 18;");
    /// ```
    pub fn new<F: IntoFields>(filter: W, fields: F) -> Self {
        Self {
            filter,
            fields: fields
                .into_fields()
                .into_iter()
                .filter(|field| !field.is_empty())
                .collect(),
        }
    }

    /// Get the condition for the rows to select
    pub fn condition(&self) -> &W {
        &self.filter
    }

    /// Get the projection list, in output column order
    pub fn fields(&self) -> &[Box<dyn Expression>] {
        &self.fields
    }

    pub fn into_parts(self) -> (W, Vec<Box<dyn Expression>>) {
        (self.filter, self.fields)
    }
}

impl<W: Filter> ToSql for Select<W> {
    fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        tracing::trace!(
            fields = self.fields.len(),
            filtered = !self.filter.is_empty(),
            "rendering select statement"
        );

        out.write_str("SELECT (")?;
        join(out, ", ", &self.fields)?;
        out.write_str(")")?;

        if !self.filter.is_empty() {
            out.write_str(" WHERE ")?;
            self.filter.write_sql(out, Nesting::Root)?;
        }

        out.write_str(";")
    }
}

display_via_sql!(Select<W> where W: Filter);

impl<W: Filter> fmt::Debug for Select<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self.fields.iter().map(|field| field.to_sql()).collect();
        f.debug_struct("Select")
            .field("fields", &fields)
            .field("filter", &self.filter.to_sql())
            .finish()
    }
}
