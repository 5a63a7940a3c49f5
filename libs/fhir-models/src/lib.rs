//! FHIR R5 data models
//!
//! This crate provides strongly-typed Rust structures for FHIR R5 resources.
//!
//! # Module Organization
//!
//! - `datatypes`: shared element types (Identifier, CodeableConcept,
//!   Reference, ...), choice-type support and closed code enums
//! - `resources`: one module per concrete resource (Patient, Account,
//!   Observation, ...)
//! - `resource`: the [`Resource`] wrapper dispatching on `resourceType`
//!
//! # Design Philosophy
//!
//! - **Declarative**: resource structs mirror the official element names and
//!   cardinalities; JSON bindings are camelCase per the FHIR wire format
//! - **Choice types as enums**: every `value[x]` group is a tagged enum, so
//!   at most one alternative can be populated, while the wire format keeps
//!   the flat `<name><Type>` key convention
//! - **Closed code enums**: status and code elements with a required binding
//!   reject literals outside their value set at decode time
//! - **Round-trip friendly**: content beyond the modeled schema (custom
//!   properties, `_field` primitive extensions) is retained in a trailing
//!   flatten map and written back on encode
//!
//! # Example
//!
//! ```rust
//! use argent_models::{Patient, Resource};
//! use serde_json::json;
//!
//! let patient_json = json!({
//!     "resourceType": "Patient",
//!     "id": "example",
//!     "name": [{"use": "official", "family": "Chalmers", "given": ["Peter"]}],
//!     "gender": "male",
//!     "birthDate": "1974-12-25"
//! });
//!
//! let patient: Patient = serde_json::from_value(patient_json.clone()).unwrap();
//! assert_eq!(patient.resource_type, "Patient");
//! assert_eq!(patient.birth_date.as_deref(), Some("1974-12-25"));
//!
//! let dispatched = Resource::from_value(&patient_json).unwrap();
//! assert_eq!(dispatched.resource_type(), "Patient");
//! ```

pub mod datatypes;
pub mod error;
pub mod resource;
pub mod resources;

// Re-export commonly used types
pub use datatypes::*;
pub use error::{Error, Result};
pub use resource::Resource;
pub use resources::*;
