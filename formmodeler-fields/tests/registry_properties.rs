//! Behavioural properties of the field registry, exercised through the
//! public API only.

use std::collections::BTreeSet;

use formmodeler_fields::builtin::{MULTIPLE_SUB_FORM, SUB_FORM};
use formmodeler_fields::{
    BasicFieldProvider, EntityFieldProvider, FieldDefinition, FieldRegistry, FieldTypeInfo,
    FieldsError, ProviderRegistration,
};
use proptest::prelude::*;

fn basic(code: &str, priority: i32, types: &[&str]) -> ProviderRegistration {
    ProviderRegistration::basic(BasicFieldProvider::new(code, priority, types.iter().copied()))
}

proptest! {
    #[test]
    fn base_field_types_follow_ascending_priority(
        priorities in prop::collection::hash_set(-1000i32..1000, 1..24)
    ) {
        let mut registry = FieldRegistry::new();
        for priority in &priorities {
            registry
                .register(basic(&format!("p{priority}"), *priority, &["int"]))
                .unwrap();
        }

        let mut sorted: Vec<i32> = priorities.into_iter().collect();
        sorted.sort_unstable();
        let expected: Vec<String> = sorted.iter().map(|p| format!("p{p}")).collect();

        prop_assert_eq!(registry.base_field_types(), expected.clone());
        prop_assert_eq!(registry.compatible_types("int"), expected);
    }

    #[test]
    fn equal_priorities_leave_one_survivor(priority in any::<i32>(), extra in 1usize..6) {
        let mut registry = FieldRegistry::new();
        registry.register(basic("keeper", priority, &["int"])).unwrap();
        for i in 0..extra {
            let result = registry.register(basic(&format!("dup{i}"), priority, &["int"]));
            let rejected = matches!(result, Err(FieldsError::DuplicatePriority { .. }));
            prop_assert!(rejected);
        }
        prop_assert_eq!(registry.base_field_types(), vec!["keeper".to_string()]);
    }

    #[test]
    fn unregistered_codes_have_no_definition(code in "[A-Za-z]{1,12}") {
        let registry = FieldRegistry::builder().with_builtin_providers().build().unwrap();
        prop_assume!(!registry.contains(&code));
        prop_assert!(registry.definition_by_type_code(&code).is_none());
    }
}

#[test]
fn registered_code_round_trips_to_default_field() {
    let provider = BasicFieldProvider::new("Slider", 42, ["int", "long"]).with_label("Slider");
    let expected = formmodeler_fields::FieldProvider::default_field(&provider);

    let mut registry = FieldRegistry::new();
    registry
        .register(ProviderRegistration::basic(provider))
        .unwrap();

    let field = registry.definition_by_type_code("Slider").unwrap();
    assert_eq!(field, expected);
    assert_eq!(field.code, "Slider");
}

#[test]
fn lower_priority_provider_wins_value_type_resolution() {
    let mut registry = FieldRegistry::new();
    registry.register(basic("Spinner", 5, &["int"])).unwrap();
    registry.register(basic("IntegerBox", 1, &["int"])).unwrap();

    let field = registry
        .definition_by_value_type(&FieldTypeInfo::scalar("int"))
        .unwrap();
    assert_eq!(field.code, "IntegerBox");
    assert_eq!(field.standalone_class_name.as_deref(), Some("int"));
}

#[test]
fn unmatched_list_type_uses_default_multiple_entity() {
    let mut registry = FieldRegistry::new();
    registry.register(basic("IntegerBox", 1, &["int"])).unwrap();
    registry
        .register(EntityFieldProvider::single(SUB_FORM).into_registration())
        .unwrap();
    registry
        .register(EntityFieldProvider::multiple(MULTIPLE_SUB_FORM).into_registration())
        .unwrap();

    let field = registry
        .definition_by_value_type(&FieldTypeInfo::list("com.acme.Order"))
        .unwrap();
    assert_eq!(field.code, MULTIPLE_SUB_FORM);
    assert!(field.is_list_relation());
}

#[test]
fn standalone_relation_compatibility_ignores_list_flag() {
    let mut registry = FieldRegistry::new();
    registry
        .register(EntityFieldProvider::single(SUB_FORM).into_registration())
        .unwrap();
    registry
        .register(EntityFieldProvider::multiple(MULTIPLE_SUB_FORM).into_registration())
        .unwrap();

    let single = FieldDefinition::entity_relation(SUB_FORM, FieldTypeInfo::scalar("Order"))
        .with_standalone_class_name("Order");
    let list = FieldDefinition::entity_relation(MULTIPLE_SUB_FORM, FieldTypeInfo::list("Order"))
        .with_standalone_class_name("Order");

    let from_single = registry.compatible_fields(&single).unwrap();
    let from_list = registry.compatible_fields(&list).unwrap();
    assert_eq!(from_single, from_list);
    assert_eq!(from_single, BTreeSet::from([MULTIPLE_SUB_FORM.to_string()]));
}

#[test]
fn with_type_prefers_entity_provider_over_same_named_basic() {
    let mut registry = FieldRegistry::new();
    registry.register(basic("Address", 1, &["java.lang.String"])).unwrap();
    registry
        .register(EntityFieldProvider::single("Address").into_registration())
        .unwrap();

    let info = FieldTypeInfo::scalar("java.lang.String");
    let field = registry
        .field_from_provider_with_type(Some("Address"), Some(&info))
        .unwrap()
        .unwrap();
    assert!(field.is_entity_relation());
}
