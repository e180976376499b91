//! Property-based tests for equality and the render/re-parse round trip.

use proptest::prelude::*;

use interchange_value::prelude::*;

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::null()),
        any::<bool>().prop_map(Value::boolean),
        any::<i32>().prop_map(|n| Value::int(n as i64)),
        prop::num::f64::NORMAL.prop_map(Value::number),
        "[a-z \\\\\"\t\n]{0,12}".prop_map(|s| Value::text(s)),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    scalar_value().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|elements| Value::array(elements)),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|entries| Value::object(entries)),
        ]
    })
}

proptest! {
    #[test]
    fn equality_is_reflexive(value in any_value()) {
        prop_assert_eq!(value.clone(), value);
    }

    #[test]
    fn cross_variant_comparison_is_false(a in any_value(), b in any_value()) {
        if a.kind() != b.kind() {
            prop_assert_ne!(a, b);
        }
    }

    #[test]
    fn render_reparse_round_trips(value in any_value()) {
        let rendered = value.to_string();
        let reparsed: Value = rendered.parse().expect("rendered text must re-parse");
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn kind_matches_variant_checks(value in any_value()) {
        let kind = value.kind();
        prop_assert_eq!(kind == ValueKind::Null, value.is_null());
        prop_assert_eq!(kind == ValueKind::Array, value.is_array());
        prop_assert_eq!(kind == ValueKind::Object, value.is_object());
    }
}
