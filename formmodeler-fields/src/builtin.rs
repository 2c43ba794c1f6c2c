//! Built-in field providers.
//!
//! The stock field kinds a form modeler ships with: text, numeric, boolean
//! and date editors for scalar values, plus sub-form relations for entities.

use crate::provider::{BasicTypeFieldProvider, FieldProvider, ProviderRegistration};
use crate::types::{FieldDefinition, FieldTypeInfo};

pub const TEXT_BOX: &str = "TextBox";
pub const TEXT_AREA: &str = "TextArea";
pub const INTEGER_BOX: &str = "IntegerBox";
pub const DECIMAL_BOX: &str = "DecimalBox";
pub const CHECK_BOX: &str = "CheckBox";
pub const DATE_PICKER: &str = "DatePicker";
pub const SUB_FORM: &str = "SubForm";
pub const MULTIPLE_SUB_FORM: &str = "MultipleSubForm";

/// A data-driven basic provider: a code, a priority and the value types it
/// renders.
#[derive(Debug, Clone)]
pub struct BasicFieldProvider {
    code: String,
    priority: i32,
    supported_types: Vec<String>,
    label: Option<String>,
}

impl BasicFieldProvider {
    pub fn new<I, S>(code: impl Into<String>, priority: i32, supported_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: code.into(),
            priority,
            supported_types: supported_types.into_iter().map(Into::into).collect(),
            label: None,
        }
    }

    /// Label given to every field this provider builds.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn build(&self, type_info: &FieldTypeInfo) -> FieldDefinition {
        let field = FieldDefinition::basic(&self.code, type_info.clone());
        match &self.label {
            Some(label) => field.with_label(label),
            None => field,
        }
    }
}

impl FieldProvider for BasicFieldProvider {
    fn provider_code(&self) -> &str {
        &self.code
    }

    /// Lists are never rendered by a scalar editor.
    fn get_field_by_type(&self, type_info: &FieldTypeInfo) -> Option<FieldDefinition> {
        if type_info.is_list || !self.supports(&type_info.type_name) {
            return None;
        }
        Some(self.build(type_info))
    }

    fn create_field_by_type(&self, type_info: &FieldTypeInfo) -> FieldDefinition {
        self.build(type_info)
    }

    fn default_field(&self) -> FieldDefinition {
        let type_name = self.supported_types.first().cloned().unwrap_or_default();
        self.build(&FieldTypeInfo::scalar(type_name))
    }
}

impl BasicTypeFieldProvider for BasicFieldProvider {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn supported_types(&self) -> &[String] {
        &self.supported_types
    }
}

/// Provider of sub-form relation fields.
#[derive(Debug, Clone)]
pub struct EntityFieldProvider {
    code: String,
    multiple: bool,
}

impl EntityFieldProvider {
    /// A provider of single-entity relations.
    pub fn single(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            multiple: false,
        }
    }

    /// A provider of list-valued relations.
    pub fn multiple(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            multiple: true,
        }
    }

    /// Wrap this provider in the registration bucket matching its arity.
    pub fn into_registration(self) -> ProviderRegistration {
        if self.multiple {
            ProviderRegistration::multiple_entity(self)
        } else {
            ProviderRegistration::single_entity(self)
        }
    }
}

impl FieldProvider for EntityFieldProvider {
    fn provider_code(&self) -> &str {
        &self.code
    }

    fn get_field_by_type(&self, type_info: &FieldTypeInfo) -> Option<FieldDefinition> {
        Some(self.create_field_by_type(type_info))
    }

    fn create_field_by_type(&self, type_info: &FieldTypeInfo) -> FieldDefinition {
        let info = FieldTypeInfo::new(&type_info.type_name, type_info.is_list || self.multiple);
        FieldDefinition::entity_relation(&self.code, info)
    }

    fn default_field(&self) -> FieldDefinition {
        FieldDefinition::entity_relation(&self.code, FieldTypeInfo::new("", self.multiple))
    }
}

/// The stock providers, in registration order.
pub fn builtin_providers() -> Vec<ProviderRegistration> {
    vec![
        ProviderRegistration::basic(
            BasicFieldProvider::new(
                TEXT_BOX,
                1,
                ["java.lang.String", "java.lang.Character", "char"],
            )
            .with_label("Text Box"),
        ),
        ProviderRegistration::basic(
            BasicFieldProvider::new(TEXT_AREA, 2, ["java.lang.String"]).with_label("Text Area"),
        ),
        ProviderRegistration::basic(
            BasicFieldProvider::new(
                INTEGER_BOX,
                3,
                [
                    "java.lang.Integer",
                    "int",
                    "java.lang.Long",
                    "long",
                    "java.lang.Short",
                    "short",
                    "java.lang.Byte",
                    "byte",
                    "java.math.BigInteger",
                ],
            )
            .with_label("Integer Box"),
        ),
        ProviderRegistration::basic(
            BasicFieldProvider::new(
                DECIMAL_BOX,
                4,
                [
                    "java.lang.Double",
                    "double",
                    "java.lang.Float",
                    "float",
                    "java.math.BigDecimal",
                ],
            )
            .with_label("Decimal Box"),
        ),
        ProviderRegistration::basic(
            BasicFieldProvider::new(CHECK_BOX, 5, ["java.lang.Boolean", "boolean"])
                .with_label("Check Box"),
        ),
        ProviderRegistration::basic(
            BasicFieldProvider::new(
                DATE_PICKER,
                6,
                [
                    "java.util.Date",
                    "java.time.LocalDate",
                    "java.time.LocalDateTime",
                ],
            )
            .with_label("Date Picker"),
        ),
        EntityFieldProvider::single(SUB_FORM).into_registration(),
        EntityFieldProvider::multiple(MULTIPLE_SUB_FORM).into_registration(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_provider_skips_lists_and_unknown_types() {
        let p = BasicFieldProvider::new(INTEGER_BOX, 3, ["int"]);
        assert!(p.get_field_by_type(&FieldTypeInfo::scalar("int")).is_some());
        assert!(p.get_field_by_type(&FieldTypeInfo::list("int")).is_none());
        assert!(p
            .get_field_by_type(&FieldTypeInfo::scalar("boolean"))
            .is_none());
    }

    #[test]
    fn create_field_by_type_always_builds() {
        let p = BasicFieldProvider::new(TEXT_AREA, 2, ["java.lang.String"]);
        let field = p.create_field_by_type(&FieldTypeInfo::scalar("int"));
        assert_eq!(field.code, TEXT_AREA);
        assert_eq!(field.field_type_info.type_name, "int");
    }

    #[test]
    fn default_field_uses_first_supported_type() {
        let p = BasicFieldProvider::new(CHECK_BOX, 5, ["java.lang.Boolean", "boolean"])
            .with_label("Check Box");
        let field = p.default_field();
        assert_eq!(field.code, CHECK_BOX);
        assert_eq!(field.label.as_deref(), Some("Check Box"));
        assert_eq!(field.field_type_info, FieldTypeInfo::scalar("java.lang.Boolean"));
    }

    #[test]
    fn multiple_entity_provider_forces_list() {
        let p = EntityFieldProvider::multiple(MULTIPLE_SUB_FORM);
        let field = p
            .get_field_by_type(&FieldTypeInfo::scalar("com.acme.Address"))
            .unwrap();
        assert!(field.is_list_relation());
        assert_eq!(field.field_type_info.type_name, "com.acme.Address");
    }

    #[test]
    fn single_entity_provider_keeps_arity() {
        let p = EntityFieldProvider::single(SUB_FORM);
        let field = p
            .get_field_by_type(&FieldTypeInfo::scalar("com.acme.Address"))
            .unwrap();
        assert!(field.is_entity_relation());
        assert!(!field.is_list_relation());
    }

    #[test]
    fn entity_providers_land_in_matching_bucket() {
        assert!(matches!(
            EntityFieldProvider::single(SUB_FORM).into_registration(),
            ProviderRegistration::SingleEntity(_)
        ));
        assert!(matches!(
            EntityFieldProvider::multiple(MULTIPLE_SUB_FORM).into_registration(),
            ProviderRegistration::MultipleEntity(_)
        ));
    }

    #[test]
    fn builtin_priorities_are_distinct() {
        let mut priorities: Vec<i32> = builtin_providers()
            .iter()
            .filter_map(|r| r.as_basic().map(|p| p.priority()))
            .collect();
        let count = priorities.len();
        priorities.dedup();
        assert_eq!(count, 6);
        assert_eq!(priorities.len(), count);
    }
}
