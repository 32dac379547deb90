//! Row wrapper pairing a stored value with its surrogate id

/// A value together with the id a storage adapter assigned to it
///
/// Keeps primary keys out of user types. Adapters set the id once the row
/// is persisted; until then it holds `Id::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row<V, Id = i64> {
    value: V,
    id: Id,
}

impl<V, Id: Default> Row<V, Id> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            id: Id::default(),
        }
    }
}

impl<V, Id: Copy> Row<V, Id> {
    pub fn with_id(value: V, id: Id) -> Self {
        Self { value, id }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn set_id(&mut self, id: Id) {
        self.id = id;
    }

    pub fn get(&self) -> &V {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_inner(self) -> V {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_has_default_id() {
        let row: Row<&str> = Row::new("alice");
        assert_eq!(row.id(), 0);
        assert_eq!(*row.get(), "alice");
    }

    #[test]
    fn test_set_id() {
        let mut row: Row<String, u32> = Row::new("bob".to_string());
        row.set_id(7);
        assert_eq!(row.id(), 7);
        row.get_mut().push('!');
        assert_eq!(row.into_inner(), "bob!");
    }

    #[test]
    fn test_with_id() {
        let row = Row::with_id(1.5f64, 42u64);
        assert_eq!(row.id(), 42);
    }
}
