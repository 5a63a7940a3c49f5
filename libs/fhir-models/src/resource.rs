//! Top-level resource dispatch
//!
//! Every top-level FHIR JSON object carries its concrete type in the
//! `resourceType` discriminator. [`Resource`] wraps the resources modeled by
//! this crate and dispatches on that discriminator explicitly - selecting
//! the struct to decode into is a caller concern in FHIR, so it lives here
//! in one place rather than in the type definitions.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::resources::{
    Account, AllergyIntolerance, Appointment, Bundle, Claim, Condition, Consent, Device,
    Encounter, Observation, OperationOutcome, Organization, Patient, Practitioner,
};

macro_rules! resource_enum {
    (
        $(#[$meta:meta])*
        pub enum Resource {
            $( $name:literal => $variant:ident, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $( $variant($variant), )+
        }

        impl Resource {
            /// The `resourceType` discriminator values of every supported resource.
            pub const TYPES: &'static [&'static str] = &[$($name),+];

            /// The `resourceType` discriminator of the wrapped resource.
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $name, )+
                }
            }

            /// Decode any supported resource from a JSON value, dispatching on
            /// the `resourceType` property.
            pub fn from_value(value: &Value) -> Result<Self> {
                let object = value
                    .as_object()
                    .ok_or_else(|| Error::InvalidResource("expected a JSON object".to_string()))?;
                let resource_type = object
                    .get("resourceType")
                    .and_then(Value::as_str)
                    .ok_or(Error::MissingResourceType)?;
                match resource_type {
                    $( $name => Ok(Self::$variant(serde_json::from_value(value.clone())?)), )+
                    other => Err(Error::UnknownResourceType(other.to_string())),
                }
            }

            /// Decode any supported resource from raw JSON bytes.
            pub fn from_slice(bytes: &[u8]) -> Result<Self> {
                let value: Value = serde_json::from_slice(bytes)?;
                Self::from_value(&value)
            }

            /// Re-encode the wrapped resource to a JSON value.
            pub fn to_value(&self) -> Result<Value> {
                match self {
                    $( Self::$variant(resource) => Ok(serde_json::to_value(resource)?), )+
                }
            }

            /// Logical id of the wrapped resource.
            pub fn id(&self) -> Option<&str> {
                match self {
                    $( Self::$variant(resource) => resource.id.as_deref(), )+
                }
            }
        }

        $(
            impl From<$variant> for Resource {
                fn from(resource: $variant) -> Self {
                    Self::$variant(resource)
                }
            }
        )+
    };
}

resource_enum! {
    /// Any resource modeled by this crate
    pub enum Resource {
        "Account" => Account,
        "AllergyIntolerance" => AllergyIntolerance,
        "Appointment" => Appointment,
        "Bundle" => Bundle,
        "Claim" => Claim,
        "Condition" => Condition,
        "Consent" => Consent,
        "Device" => Device,
        "Encounter" => Encounter,
        "Observation" => Observation,
        "OperationOutcome" => OperationOutcome,
        "Organization" => Organization,
        "Patient" => Patient,
        "Practitioner" => Practitioner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_on_resource_type() {
        let resource = Resource::from_value(&json!({
            "resourceType": "Patient",
            "id": "example"
        }))
        .unwrap();

        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(resource.id(), Some("example"));
        assert!(matches!(resource, Resource::Patient(_)));
    }

    #[test]
    fn test_missing_discriminator() {
        let err = Resource::from_value(&json!({"id": "example"})).unwrap_err();
        assert!(matches!(err, Error::MissingResourceType));
    }

    #[test]
    fn test_unknown_discriminator() {
        let err = Resource::from_value(&json!({
            "resourceType": "Basic",
            "id": "example"
        }))
        .unwrap_err();
        assert!(matches!(err, Error::UnknownResourceType(name) if name == "Basic"));
    }

    #[test]
    fn test_non_object_input() {
        let err = Resource::from_value(&json!(["Patient"])).unwrap_err();
        assert!(matches!(err, Error::InvalidResource(_)));
    }

    #[test]
    fn test_to_value_round_trip() {
        let original = json!({
            "resourceType": "Organization",
            "id": "hl7",
            "name": "Health Level Seven International"
        });

        let resource = Resource::from_value(&original).unwrap();
        let encoded = resource.to_value().unwrap();
        assert_eq!(encoded, original);
    }
}
