//! The field registry: type resolution and compatibility queries.
//!
//! Providers are filed into one of three buckets when registered:
//!
//! ```text
//! basic            ← scalar providers, ascending priority
//! single-entity    ← relation providers, keyed by code
//! multiple-entity  ← list relation providers, keyed by code
//! ```
//!
//! Every provider is also indexed by code in a flat lookup map. After the
//! registration phase the registry is only read; every query is a pure
//! function of the registered providers and its arguments.

use std::collections::BTreeSet;
use std::sync::Arc;

use formmodeler_config::FieldsConfig;
use indexmap::IndexMap;
use tracing::{debug, error, trace, warn};

use crate::builtin::builtin_providers;
use crate::error::{FieldsError, Result};
use crate::provider::{BasicTypeFieldProvider, FieldProvider, ProviderRegistration};
use crate::types::{FieldDefinition, FieldTypeInfo};

/// Builder for `FieldRegistry`. Created by `FieldRegistry::builder()`.
pub struct FieldRegistryBuilder {
    config: FieldsConfig,
    include_builtins: bool,
    providers: Vec<ProviderRegistration>,
}

impl FieldRegistryBuilder {
    /// Take fallback codes and the builtin toggle from `config`.
    ///
    /// The toggle can only turn builtins on; an earlier
    /// `with_builtin_providers()` is kept.
    pub fn with_config(mut self, config: FieldsConfig) -> Self {
        self.include_builtins |= config.builtin_providers;
        self.config = config;
        self
    }

    /// Register the stock providers ahead of any added with `provider()`.
    pub fn with_builtin_providers(mut self) -> Self {
        self.include_builtins = true;
        self
    }

    /// Queue a provider for registration.
    pub fn provider(mut self, registration: ProviderRegistration) -> Self {
        self.providers.push(registration);
        self
    }

    /// Validate the configuration and register everything queued. Fails on
    /// an invalid configuration or the first rejected provider.
    pub fn build(self) -> Result<FieldRegistry> {
        self.config.validate()?;
        let mut registry = FieldRegistry::from_config(&self.config);

        if self.include_builtins {
            for registration in builtin_providers() {
                registry.register(registration)?;
            }
        }
        for registration in self.providers {
            registry.register(registration)?;
        }

        debug!(
            basic = registry.basic_providers.len(),
            single_entity = registry.single_entity.len(),
            multiple_entity = registry.multiple_entity.len(),
            "field registry built"
        );

        Ok(registry)
    }
}

/// Registry of field providers.
///
/// Registration takes `&mut self` and queries take `&self`, so a registry
/// shared by reference after setup cannot be written to while it is read.
pub struct FieldRegistry {
    /// Sorted by ascending priority; priorities are unique.
    basic_providers: Vec<Arc<dyn BasicTypeFieldProvider>>,
    single_entity: IndexMap<String, Arc<dyn FieldProvider>>,
    multiple_entity: IndexMap<String, Arc<dyn FieldProvider>>,
    by_code: IndexMap<String, ProviderRegistration>,
    default_single_entity: String,
    default_multiple_entity: String,
}

impl FieldRegistry {
    /// An empty registry with the default fallback codes.
    pub fn new() -> Self {
        Self::from_config(&FieldsConfig::default())
    }

    /// An empty registry using the fallback codes from `config`.
    ///
    /// `config.builtin_providers` is ignored here; use
    /// [`FieldRegistry::builder`] to have builtins registered.
    pub fn from_config(config: &FieldsConfig) -> Self {
        Self {
            basic_providers: Vec::new(),
            single_entity: IndexMap::new(),
            multiple_entity: IndexMap::new(),
            by_code: IndexMap::new(),
            default_single_entity: config.default_single_entity.clone(),
            default_multiple_entity: config.default_multiple_entity.clone(),
        }
    }

    /// Start building a registry.
    ///
    /// ```rust,ignore
    /// let registry = FieldRegistry::builder()
    ///     .with_config(load_configuration()?)
    ///     .provider(ProviderRegistration::basic(my_slider()))
    ///     .build()?;
    /// ```
    pub fn builder() -> FieldRegistryBuilder {
        FieldRegistryBuilder {
            config: FieldsConfig::default(),
            include_builtins: false,
            providers: Vec::new(),
        }
    }

    // --- Registration ---

    /// Classify and index a provider.
    ///
    /// A basic provider whose priority is already taken is rejected with
    /// [`FieldsError::DuplicatePriority`] and is not indexed anywhere; the
    /// provider registered first keeps the slot. A code registered twice
    /// resolves to the last registration in the flat code index.
    pub fn register(&mut self, registration: ProviderRegistration) -> Result<()> {
        let code = registration.provider_code().to_string();

        match &registration {
            ProviderRegistration::Basic(provider) => {
                let priority = provider.priority();
                match self
                    .basic_providers
                    .binary_search_by_key(&priority, |p| p.priority())
                {
                    Ok(idx) => {
                        let existing = self.basic_providers[idx].provider_code().to_string();
                        warn!(
                            priority,
                            existing = %existing,
                            rejected = %code,
                            "basic provider priority already taken"
                        );
                        return Err(FieldsError::DuplicatePriority {
                            priority,
                            existing,
                            rejected: code,
                        });
                    }
                    Err(idx) => self.basic_providers.insert(idx, Arc::clone(provider)),
                }
            }
            ProviderRegistration::SingleEntity(provider) => {
                self.single_entity.insert(code.clone(), Arc::clone(provider));
            }
            ProviderRegistration::MultipleEntity(provider) => {
                self.multiple_entity
                    .insert(code.clone(), Arc::clone(provider));
            }
        }

        debug!(registration = ?registration, "registered field provider");

        if let Some(previous) = self.by_code.insert(code.clone(), registration) {
            warn!(
                code = %code,
                replaced = ?previous,
                "provider code registered twice, last registration wins"
            );
        }

        Ok(())
    }

    pub fn set_default_single_entity(&mut self, code: impl Into<String>) {
        self.default_single_entity = code.into();
    }

    pub fn set_default_multiple_entity(&mut self, code: impl Into<String>) {
        self.default_multiple_entity = code.into();
    }

    // --- Queries ---

    /// All provider codes: basic by ascending priority, then single-entity,
    /// then multiple-entity, each entity group in registration order.
    pub fn base_field_types(&self) -> Vec<String> {
        self.basic_provider_codes()
            .into_iter()
            .chain(self.single_entity_codes())
            .chain(self.multiple_entity_codes())
            .collect()
    }

    /// The default field of the provider registered under `code`.
    pub fn definition_by_type_code(&self, code: &str) -> Option<FieldDefinition> {
        self.by_code.get(code).map(ProviderRegistration::default_field)
    }

    /// Pick a field for a value type.
    ///
    /// The first basic provider, in priority order, that accepts the type
    /// wins. Otherwise the default single- or multiple-entity provider is
    /// used depending on `type_info.is_list`. The returned field is marked
    /// standalone with `type_info.type_name`.
    pub fn definition_by_value_type(&self, type_info: &FieldTypeInfo) -> Option<FieldDefinition> {
        for provider in &self.basic_providers {
            if let Some(field) = provider.get_field_by_type(type_info) {
                trace!(
                    type_name = %type_info.type_name,
                    code = provider.provider_code(),
                    "resolved value type to basic provider"
                );
                return Some(field.with_standalone_class_name(&type_info.type_name));
            }
        }

        let fallback = if type_info.is_list {
            self.multiple_entity.get(&self.default_multiple_entity)
        } else {
            self.single_entity.get(&self.default_single_entity)
        };

        let Some(provider) = fallback else {
            trace!(
                type_name = %type_info.type_name,
                is_list = type_info.is_list,
                "no provider for value type"
            );
            return None;
        };

        trace!(
            type_name = %type_info.type_name,
            code = provider.provider_code(),
            "resolved value type to entity fallback"
        );
        provider
            .get_field_by_type(type_info)
            .map(|field| field.with_standalone_class_name(&type_info.type_name))
    }

    /// Codes of the field kinds `field` could be switched to.
    ///
    /// Fails with [`FieldsError::BasicProviderNotFound`] when a bound basic
    /// field carries a code no basic provider is registered under.
    pub fn compatible_fields(&self, field: &FieldDefinition) -> Result<BTreeSet<String>> {
        if field.is_standalone() {
            if field.is_entity_relation() {
                // Single and list relations alike get the multiple-entity codes.
                return Ok(self.multiple_entity.keys().cloned().collect());
            }

            return Ok(self
                .basic_providers
                .iter()
                .filter(|p| p.is_compatible(field))
                .map(|p| p.provider_code().to_string())
                .collect());
        }

        if field.is_entity_relation() {
            let providers = if field.field_type_info.is_list {
                &self.multiple_entity
            } else {
                &self.single_entity
            };
            return Ok(providers.keys().cloned().collect());
        }

        let Some(provider) = self.basic_provider(&field.code) else {
            error!(code = %field.code, "bound field has no basic provider");
            return Err(FieldsError::BasicProviderNotFound {
                code: field.code.clone(),
            });
        };

        Ok(provider
            .supported_types()
            .iter()
            .flat_map(|type_name| self.compatible_types(type_name))
            .collect())
    }

    /// Build a field with the provider named `type_code`, or resolve one
    /// from the value type when no code is given.
    pub fn field_from_provider(
        &self,
        type_code: Option<&str>,
        type_info: Option<&FieldTypeInfo>,
    ) -> Result<Option<FieldDefinition>> {
        let type_info = type_info.ok_or(FieldsError::InvalidArgument {
            argument: "type_info",
        })?;

        let Some(type_code) = type_code else {
            return Ok(self.definition_by_value_type(type_info));
        };

        if let Some(provider) = self.basic_provider(type_code) {
            return Ok(provider.get_field_by_type(type_info));
        }

        Ok(self
            .entity_provider(type_code)
            .and_then(|p| p.get_field_by_type(type_info)))
    }

    /// Build a field with the provider named `type_code`.
    ///
    /// Entity providers are consulted first. A basic provider is asked to
    /// create a new field rather than pick one, so the result exists even for
    /// a type the provider would not select on its own.
    pub fn field_from_provider_with_type(
        &self,
        type_code: Option<&str>,
        type_info: Option<&FieldTypeInfo>,
    ) -> Result<Option<FieldDefinition>> {
        let type_code = type_code.ok_or(FieldsError::InvalidArgument {
            argument: "type_code",
        })?;
        let type_info = type_info.ok_or(FieldsError::InvalidArgument {
            argument: "type_info",
        })?;

        if let Some(provider) = self.entity_provider(type_code) {
            return Ok(provider.get_field_by_type(type_info));
        }

        Ok(self
            .basic_provider(type_code)
            .map(|p| p.create_field_by_type(type_info)))
    }

    /// Codes of basic providers supporting `type_name`, by ascending priority.
    pub fn compatible_types(&self, type_name: &str) -> Vec<String> {
        self.basic_providers
            .iter()
            .filter(|p| p.supports(type_name))
            .map(|p| p.provider_code().to_string())
            .collect()
    }

    // --- Introspection ---

    /// The registration currently indexed under `code`.
    pub fn provider(&self, code: &str) -> Option<&ProviderRegistration> {
        self.by_code.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Number of distinct provider codes.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Basic provider codes by ascending priority.
    pub fn basic_provider_codes(&self) -> Vec<String> {
        self.basic_providers
            .iter()
            .map(|p| p.provider_code().to_string())
            .collect()
    }

    pub fn single_entity_codes(&self) -> Vec<String> {
        self.single_entity.keys().cloned().collect()
    }

    pub fn multiple_entity_codes(&self) -> Vec<String> {
        self.multiple_entity.keys().cloned().collect()
    }

    pub fn default_single_entity(&self) -> &str {
        &self.default_single_entity
    }

    pub fn default_multiple_entity(&self) -> &str {
        &self.default_multiple_entity
    }

    fn basic_provider(&self, code: &str) -> Option<&Arc<dyn BasicTypeFieldProvider>> {
        self.basic_providers
            .iter()
            .find(|p| p.provider_code() == code)
    }

    fn entity_provider(&self, code: &str) -> Option<&Arc<dyn FieldProvider>> {
        self.single_entity
            .get(code)
            .or_else(|| self.multiple_entity.get(code))
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
