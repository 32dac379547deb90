use proptest::prelude::*;
use typedsql_core::{
    select, DynAttribute, DynExpr, Literal, Select, SqlTypeTag, ToSql, Value,
};

/// Boolean trees of AND/OR over boolean literals and columns
fn boolean_tree() -> impl Strategy<Value = (DynExpr, usize)> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(|b| (DynExpr::literal(b), 0)),
        "[a-z][a-z_]{0,8}".prop_map(|key| {
            let attribute = DynAttribute::new(key, SqlTypeTag::Boolean).unwrap();
            (DynExpr::column(attribute), 0)
        }),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), inner, any::<bool>()).prop_map(|((lhs, l), (rhs, r), conjunction)| {
            let node = if conjunction { lhs.and(rhs) } else { lhs.or(rhs) };
            (node.unwrap(), l + r + 1)
        })
    })
}

proptest! {
    #[test]
    fn rendering_is_deterministic((tree, _) in boolean_tree()) {
        prop_assert_eq!(tree.to_sql(), tree.to_sql());
    }

    #[test]
    fn only_nested_binaries_are_parenthesized((tree, binaries) in boolean_tree()) {
        let sql = tree.to_sql();
        let opened = sql.matches("( ").count();
        let closed = sql.matches(" )").count();
        prop_assert_eq!(opened, closed);
        prop_assert_eq!(opened, binaries.saturating_sub(1));
    }

    #[test]
    fn column_renders_its_key(key in "[A-Za-z_][A-Za-z0-9_.]{0,20}") {
        let attribute = DynAttribute::new(key.clone(), SqlTypeTag::Text).unwrap();
        prop_assert_eq!(DynExpr::column(attribute).to_sql(), key);
    }

    #[test]
    fn integer_literal_renders_display_form(value in any::<i64>()) {
        prop_assert_eq!(Literal::new(value).to_sql(), value.to_string());
        prop_assert_eq!(DynExpr::literal(value).to_sql(), value.to_string());
    }

    #[test]
    fn text_literal_is_verbatim(value in ".*") {
        prop_assert_eq!(Literal::new(value.clone()).to_sql(), value.clone());
        prop_assert_eq!(Value::from(value.clone()).to_string(), value);
    }

    #[test]
    fn filter_root_is_never_wrapped((tree, _) in boolean_tree()) {
        let expected = format!("SELECT (x) WHERE {};", tree.to_sql());
        let filter = tree.into_condition().unwrap();
        let column = DynExpr::column(DynAttribute::new("x", SqlTypeTag::Integer).unwrap());
        let sql = Select::new(filter, column).to_sql();
        prop_assert_eq!(sql, expected);
    }

    #[test]
    fn projection_keeps_declaration_order(keys in prop::collection::vec("[a-z]{1,6}", 0..6)) {
        let fields: Vec<Box<dyn typedsql_core::Expression>> = keys
            .iter()
            .map(|key| {
                let attribute = DynAttribute::new(key.clone(), SqlTypeTag::Text).unwrap();
                Box::new(DynExpr::column(attribute)) as Box<dyn typedsql_core::Expression>
            })
            .collect();
        prop_assert_eq!(select(fields).to_sql(), format!("SELECT ({});", keys.join(", ")));
    }
}
