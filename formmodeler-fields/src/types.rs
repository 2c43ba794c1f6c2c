//! Core field types for the provider registry.
//!
//! A [`FieldTypeInfo`] describes the value a field edits. A
//! [`FieldDefinition`] is the field instance a provider builds for it. Both
//! serialize to/from JSON via serde.

use serde::{Deserialize, Serialize};

/// The value type a field is mapped from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FieldTypeInfo {
    /// Identifier of the underlying value type, e.g. `java.lang.String`.
    #[serde(rename = "type")]
    pub type_name: String,
    /// True when the value is a collection of `type_name`.
    #[serde(default)]
    pub is_list: bool,
}

impl FieldTypeInfo {
    pub fn new(type_name: impl Into<String>, is_list: bool) -> Self {
        Self {
            type_name: type_name.into(),
            is_list,
        }
    }

    /// A single value of `type_name`.
    pub fn scalar(type_name: impl Into<String>) -> Self {
        Self::new(type_name, false)
    }

    /// A collection of `type_name`.
    pub fn list(type_name: impl Into<String>) -> Self {
        Self::new(type_name, true)
    }
}

/// What shape of field a definition is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Primitive or scalar value editor.
    #[default]
    Basic,
    /// Reference to another entity. Whether the relation holds one entity
    /// or many is carried by the field's `FieldTypeInfo::is_list`.
    EntityRelation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nested_form: Option<String>,
    },
}

/// A UI field instance produced by a field provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Code of the provider that produced this field.
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Model property the field is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub read_only: bool,
    /// Set when the field was derived straight from a type rather than from
    /// a bound model property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standalone_class_name: Option<String>,
    pub field_type_info: FieldTypeInfo,
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// Create a basic field for `type_info`, named after the provider code.
    pub fn basic(code: impl Into<String>, type_info: FieldTypeInfo) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            label: None,
            binding: None,
            required: false,
            read_only: false,
            standalone_class_name: None,
            field_type_info: type_info,
            kind: FieldKind::Basic,
        }
    }

    /// Create an entity relation field for `type_info`.
    pub fn entity_relation(code: impl Into<String>, type_info: FieldTypeInfo) -> Self {
        Self {
            kind: FieldKind::EntityRelation { nested_form: None },
            ..Self::basic(code, type_info)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_standalone_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.standalone_class_name = Some(class_name.into());
        self
    }

    /// Set the nested form of a relation field. No-op on basic fields.
    pub fn with_nested_form(mut self, form: impl Into<String>) -> Self {
        if let FieldKind::EntityRelation { nested_form } = &mut self.kind {
            *nested_form = Some(form.into());
        }
        self
    }

    /// True when this field references another entity.
    pub fn is_entity_relation(&self) -> bool {
        matches!(self.kind, FieldKind::EntityRelation { .. })
    }

    /// True when this field is detached from a model property.
    pub fn is_standalone(&self) -> bool {
        self.standalone_class_name.is_some()
    }

    /// True for relations holding a list of entities.
    pub fn is_list_relation(&self) -> bool {
        self.is_entity_relation() && self.field_type_info.is_list
    }

    /// The type used when checking which providers can render this field:
    /// the standalone class name if set, else the bound value type.
    pub fn effective_type(&self) -> &str {
        self.standalone_class_name
            .as_deref()
            .unwrap_or(&self.field_type_info.type_name)
    }
}
