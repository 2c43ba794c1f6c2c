//! Field provider capabilities.
//!
//! A provider knows how to build a [`FieldDefinition`] for some class of
//! value types. Basic providers handle scalar types and are ordered by
//! priority; entity providers build relation fields. Which of the two a
//! provider is gets decided when it is registered, through
//! [`ProviderRegistration`], never by inspecting the provider at runtime.

use std::fmt;
use std::sync::Arc;

use crate::types::{FieldDefinition, FieldTypeInfo};

/// A strategy that produces field definitions.
pub trait FieldProvider: Send + Sync {
    /// Stable, unique code naming this provider and the field kind it builds.
    fn provider_code(&self) -> &str;

    /// Return a field for `type_info`, or `None` if this provider does not
    /// handle that type.
    fn get_field_by_type(&self, type_info: &FieldTypeInfo) -> Option<FieldDefinition>;

    /// Build a new field for `type_info` regardless of whether the type is
    /// one this provider would pick by itself.
    fn create_field_by_type(&self, type_info: &FieldTypeInfo) -> FieldDefinition;

    /// The field this provider builds when nothing is known about the type.
    fn default_field(&self) -> FieldDefinition;
}

/// A provider for primitive and scalar value types.
pub trait BasicTypeFieldProvider: FieldProvider {
    /// Evaluation order; lower values are consulted first.
    fn priority(&self) -> i32;

    /// Value type identifiers this provider can render.
    fn supported_types(&self) -> &[String];

    fn supports(&self, type_name: &str) -> bool {
        self.supported_types().iter().any(|t| t == type_name)
    }

    /// Whether an existing field could be switched to this provider's kind.
    fn is_compatible(&self, field: &FieldDefinition) -> bool {
        !field.is_entity_relation() && self.supports(field.effective_type())
    }
}

/// A provider tagged with the bucket it is filed into.
#[derive(Clone)]
pub enum ProviderRegistration {
    /// Scalar provider, ordered by priority.
    Basic(Arc<dyn BasicTypeFieldProvider>),
    /// Provider of single-entity relation fields.
    SingleEntity(Arc<dyn FieldProvider>),
    /// Provider of list-valued relation fields.
    MultipleEntity(Arc<dyn FieldProvider>),
}

impl ProviderRegistration {
    pub fn basic(provider: impl BasicTypeFieldProvider + 'static) -> Self {
        Self::Basic(Arc::new(provider))
    }

    pub fn single_entity(provider: impl FieldProvider + 'static) -> Self {
        Self::SingleEntity(Arc::new(provider))
    }

    pub fn multiple_entity(provider: impl FieldProvider + 'static) -> Self {
        Self::MultipleEntity(Arc::new(provider))
    }

    pub fn provider_code(&self) -> &str {
        match self {
            Self::Basic(p) => p.provider_code(),
            Self::SingleEntity(p) | Self::MultipleEntity(p) => p.provider_code(),
        }
    }

    pub fn get_field_by_type(&self, type_info: &FieldTypeInfo) -> Option<FieldDefinition> {
        match self {
            Self::Basic(p) => p.get_field_by_type(type_info),
            Self::SingleEntity(p) | Self::MultipleEntity(p) => p.get_field_by_type(type_info),
        }
    }

    pub fn default_field(&self) -> FieldDefinition {
        match self {
            Self::Basic(p) => p.default_field(),
            Self::SingleEntity(p) | Self::MultipleEntity(p) => p.default_field(),
        }
    }

    /// The basic provider behind this registration, if it is one.
    pub fn as_basic(&self) -> Option<&Arc<dyn BasicTypeFieldProvider>> {
        match self {
            Self::Basic(p) => Some(p),
            _ => None,
        }
    }

    fn bucket(&self) -> &'static str {
        match self {
            Self::Basic(_) => "basic",
            Self::SingleEntity(_) => "single-entity",
            Self::MultipleEntity(_) => "multiple-entity",
        }
    }
}

impl fmt::Debug for ProviderRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ProviderRegistration");
        s.field("bucket", &self.bucket())
            .field("code", &self.provider_code());
        if let Self::Basic(p) = self {
            s.field("priority", &p.priority());
        }
        s.finish()
    }
}
