//! Field provider registry and type resolution
//!
//! `formmodeler-fields` decides which UI field kind edits a given value type.
//! Pluggable providers are registered once; afterwards the registry answers
//! lookups by code, picks the best field for a type, and lists the field
//! kinds an existing field could be switched to.
//!
//! # Architecture
//!
//! - **Tagged registration**: each provider is filed as basic, single-entity
//!   or multiple-entity through [`ProviderRegistration`]
//! - **Priority dispatch**: basic providers are tried in ascending priority,
//!   the first one accepting a type wins
//! - **Entity fallback**: types no basic provider takes become sub-form
//!   relations, using the configured default codes
//! - **Read-only after setup**: queries borrow the registry immutably

pub mod builtin;
pub mod error;
pub mod provider;
pub mod registry;
pub mod types;

pub use builtin::{builtin_providers, BasicFieldProvider, EntityFieldProvider};
pub use error::{FieldsError, Result};
pub use formmodeler_config::FieldsConfig;
pub use provider::{BasicTypeFieldProvider, FieldProvider, ProviderRegistration};
pub use registry::{FieldRegistry, FieldRegistryBuilder};
pub use types::{FieldDefinition, FieldKind, FieldTypeInfo};
