//! Serializer turning expression trees and statements into SQL text
//!
//! Rendering is a single depth-first pass. It performs no validation:
//! trees are well typed by construction, so the only failure is the sink
//! refusing a write.

use std::fmt;

use crate::{Expression, Operator};

/// Position of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// Statement-level: a projection field or the filter root
    Root,
    /// Operand of a binary expression
    Operand,
}

/// Anything that renders to SQL text
pub trait ToSql {
    /// Append the SQL text to `out`
    fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Render into a fresh string
    fn to_sql(&self) -> String {
        let mut sql = String::new();
        // Writing into a String cannot fail
        let _ = self.write_to(&mut sql);
        sql
    }
}

impl<E: Expression + ?Sized> ToSql for E {
    fn write_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.write_sql(out, Nesting::Root)
    }
}

/// Write `lhs <op> rhs`, parenthesized when the node is itself an operand
pub(crate) fn write_binary<L, R>(
    out: &mut dyn fmt::Write,
    nesting: Nesting,
    lhs: &L,
    operator: Operator,
    rhs: &R,
) -> fmt::Result
where
    L: Expression + ?Sized,
    R: Expression + ?Sized,
{
    if nesting == Nesting::Operand {
        out.write_str("( ")?;
    }
    lhs.write_sql(out, Nesting::Operand)?;
    write!(out, " {} ", operator)?;
    rhs.write_sql(out, Nesting::Operand)?;
    if nesting == Nesting::Operand {
        out.write_str(" )")?;
    }
    Ok(())
}

/// Implement `Display` through [`ToSql`] so `write!` works on any sink
macro_rules! display_via_sql {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::render::ToSql::write_to(self, f)
            }
        }
    };
    ($ty:ident < $($param:ident),* > where $($bound:tt)*) => {
        impl<$($param),*> std::fmt::Display for $ty<$($param),*>
        where
            $($bound)*
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::render::ToSql::write_to(self, f)
            }
        }
    };
}

pub(crate) use display_via_sql;
