//! Metadata and special-purpose datatypes
//!
//! Resource metadata (Meta, Narrative) and the metadata datatypes used by
//! administrative resources (ContactDetail, UsageContext, Availability, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::choice::{choice_type, Choice};
use super::code::{code_enum, DaysOfWeek};
use super::complex::{
    Address, CodeableConcept, Coding, ContactPoint, HumanName, Period, Quantity, Range, Reference,
};
use super::extension::Extension;

/// Metadata about a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Version specific identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,

    /// When the resource version last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Identifies where the resource comes from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Profiles this resource claims to conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<String>>,

    /// Security labels applied to this resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<Coding>>,

    /// Tags applied to this resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<Coding>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

code_enum! {
    /// The status of a narrative
    pub enum NarrativeStatus {
        "generated" => Generated,
        "extensions" => Extensions,
        "additional" => Additional,
        "empty" => Empty,
    }
}

/// Human-readable summary of the resource (essential clinical and business information)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// generated | extensions | additional | empty
    pub status: NarrativeStatus,

    /// Limited xhtml content
    pub div: String,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Contact information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Name of an individual to contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact details for individual or organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

choice_type! {
    /// UsageContext.value[x]
    pub enum UsageContextValue {
        "valueCodeableConcept" => CodeableConcept(CodeableConcept),
        "valueQuantity" => Quantity(Quantity),
        "valueRange" => Range(Range),
        "valueReference" => Reference(Reference),
    }
}

/// Describes the context of use for a conformance or knowledge resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageContext {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Type of context being specified
    pub code: Coding,

    /// Value that defines the context
    #[serde(flatten)]
    pub value: Choice<UsageContextValue>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Contact information with availability and organizational scope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedContactDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// The type of contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<CodeableConcept>,

    /// Name of an individual to contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<HumanName>>,

    /// Contact details (e.g. phone/fax/url)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Address for the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// This contact detail is handled/monitored by a specific organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// Period that this contact was valid for usage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Times the item is available
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityAvailableTime {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// mon | tue | wed | thu | fri | sat | sun
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<DaysOfWeek>>,

    /// Always available? i.e. 24 hour service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,

    /// Opening time of day (ignored if allDay = true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_start_time: Option<String>,

    /// Closing time of day (ignored if allDay = true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_end_time: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Not available during this time due to provided reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityNotAvailableTime {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Reason presented to the user explaining why time not available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Service not available during this period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub during: Option<Period>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Availability data for an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Times the item is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_time: Option<Vec<AvailabilityAvailableTime>>,

    /// Not available during this time due to provided reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_available_time: Option<Vec<AvailabilityNotAvailableTime>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

choice_type! {
    /// VirtualServiceDetail.address[x]
    pub enum VirtualServiceDetailAddress {
        "addressUrl" => Url(String),
        "addressString" => String(String),
        "addressContactPoint" => ContactPoint(ContactPoint),
        "addressExtendedContactDetail" => ExtendedContactDetail(ExtendedContactDetail),
    }
}

/// Virtual Service Contact Details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Channel Type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<Coding>,

    /// Contact address/number
    #[serde(flatten)]
    pub address: Choice<VirtualServiceDetailAddress>,

    /// Address to see alternative connection details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Vec<String>>,

    /// Maximum number of participants supported by the virtual service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,

    /// Session Key required by the virtual service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_meta() {
        let meta: Meta = serde_json::from_value(json!({
            "versionId": "2",
            "lastUpdated": "2024-03-07T13:28:17.239+02:00",
            "profile": ["http://hl7.org/fhir/StructureDefinition/vitalsigns"]
        }))
        .unwrap();

        assert_eq!(meta.version_id.as_deref(), Some("2"));
        assert_eq!(meta.profile.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_narrative_requires_known_status() {
        let result: Result<Narrative, _> = serde_json::from_value(json!({
            "status": "handwritten",
            "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">text</div>"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_context_value_choice() {
        let context: UsageContext = serde_json::from_value(json!({
            "code": {
                "system": "http://terminology.hl7.org/CodeSystem/usage-context-type",
                "code": "focus"
            },
            "valueCodeableConcept": {"text": "Venous Thromboembolism"}
        }))
        .unwrap();

        assert!(matches!(
            context.value.get(),
            Some(UsageContextValue::CodeableConcept(_))
        ));
    }
}
