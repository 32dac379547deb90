//! Rendering helpers

use std::fmt;

use crate::render::ToSql;

/// Write `items` to `out`, separated by `separator`
///
/// No separator follows the last item. An empty sequence writes nothing;
/// callers own any surrounding delimiters.
pub fn join<I>(out: &mut dyn fmt::Write, separator: &str, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: ToSql,
{
    let mut items = items.into_iter();
    if let Some(first) = items.next() {
        first.write_to(out)?;
        for item in items {
            out.write_str(separator)?;
            item.write_to(out)?;
        }
    }
    Ok(())
}
