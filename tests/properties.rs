use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use function_affinity::{
    structural_schema, NodeSelectorRequirement, Preference, PreferredSchedulingTerm,
};
use proptest::prelude::*;
use serde_json::json;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn any_requirement() -> impl Strategy<Value = NodeSelectorRequirement> {
    (
        proptest::option::of("[a-z./-]{1,20}"),
        proptest::option::of(prop_oneof![
            Just("In".to_owned()),
            Just("NotIn".to_owned()),
            Just("Exists".to_owned()),
            Just("DoesNotExist".to_owned()),
            Just("Gt".to_owned()),
            Just("Lt".to_owned()),
        ]),
        proptest::option::of(proptest::collection::vec("[a-z0-9]{0,8}", 0..4)),
    )
        .prop_map(|(key, operator, values)| {
            let mut requirement = NodeSelectorRequirement::new();
            requirement.set_key(key);
            requirement.set_operator(operator);
            requirement.set_values(values);
            requirement
        })
}

fn any_preference() -> impl Strategy<Value = Preference> {
    (
        proptest::option::of(proptest::collection::vec(any_requirement(), 0..3)),
        proptest::option::of(proptest::collection::vec(any_requirement(), 0..3)),
    )
        .prop_map(|(expressions, fields)| {
            let mut preference = Preference::new();
            preference.set_match_expressions(expressions);
            preference.set_match_fields(fields);
            preference
        })
}

fn any_term() -> impl Strategy<Value = PreferredSchedulingTerm> {
    (proptest::option::of(any_preference()), proptest::option::of(any::<i32>())).prop_map(
        |(preference, weight)| {
            let mut term = PreferredSchedulingTerm::new();
            term.set_preference(preference);
            term.set_weight(weight);
            term
        },
    )
}

proptest! {
    #[test]
    fn clones_are_equal_and_hash_alike(term in any_term()) {
        let copy = term.clone();
        prop_assert_eq!(&copy, &term);
        prop_assert_eq!(hash_of(&copy), hash_of(&term));
        prop_assert_eq!(copy.to_string(), term.to_string());
    }

    #[test]
    fn json_round_trip_preserves_term(term in any_term()) {
        let encoded = serde_json::to_string(&term).unwrap();
        let decoded: PreferredSchedulingTerm = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, term);
    }

    #[test]
    fn any_weight_is_accepted(weight in any::<i32>()) {
        let mut term = PreferredSchedulingTerm::new();
        term.set_weight(Some(weight));
        prop_assert_eq!(term.weight(), Some(weight));
    }
}

#[test]
fn weight_fifty_scenario() {
    let preference = Preference::new().add_match_expression(
        NodeSelectorRequirement::new()
            .with_key("kubernetes.io/os")
            .with_operator("In")
            .with_values(["linux"]),
    );
    let term = PreferredSchedulingTerm::new()
        .with_preference(preference.clone())
        .with_weight(50);

    let payload = serde_json::to_value(&term).unwrap();
    assert_eq!(
        payload,
        json!({
            "preference": serde_json::to_value(&preference).unwrap(),
            "weight": 50,
        })
    );

    let decoded: PreferredSchedulingTerm = serde_json::from_value(payload).unwrap();
    assert_eq!(decoded, term);
    assert_eq!(decoded.to_string(), term.to_string());
}

#[test]
fn yaml_round_trip_preserves_term() {
    let term = PreferredSchedulingTerm::new()
        .with_preference(
            Preference::new()
                .add_match_field(
                    NodeSelectorRequirement::new()
                        .with_key("metadata.name")
                        .with_operator("NotIn")
                        .with_values(["node-a", "node-b"]),
                )
                .with_match_expressions(vec![]),
        )
        .with_weight(101);
    let encoded = serde_yaml::to_string(&term).unwrap();
    let decoded: PreferredSchedulingTerm = serde_yaml::from_str(&encoded).unwrap();
    assert_eq!(decoded, term);
}

#[test]
fn equal_terms_render_identically() {
    let a = PreferredSchedulingTerm::new().with_weight(3);
    let mut b = PreferredSchedulingTerm::new();
    b.set_weight(Some(3));
    assert_eq!(a.to_string(), b.to_string());
    assert!(a.to_string().contains("preference: null"));
}

#[test]
fn schema_is_structural_and_requires_both_keys() {
    let schema = serde_json::to_value(structural_schema()).unwrap();
    let properties = &schema["properties"];
    assert!(properties.get(PreferredSchedulingTerm::SERIALIZED_NAME_PREFERENCE).is_some());
    assert!(properties.get(PreferredSchedulingTerm::SERIALIZED_NAME_WEIGHT).is_some());
    assert_eq!(schema["required"], json!(["preference", "weight"]));
    assert!(schema.get("definitions").is_none());
    assert!(!schema.to_string().contains("$ref"));

    let yaml = serde_yaml::to_string(&structural_schema()).unwrap();
    assert!(!yaml.contains("definitions"));
}
