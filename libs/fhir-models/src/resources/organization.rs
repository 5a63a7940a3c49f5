//! FHIR Organization resource

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    CodeableConcept, Extension, ExtendedContactDetail, Identifier, Meta, Narrative, Period,
    Reference,
};

/// A grouping of people or organizations with a common purpose
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Resource type - always "Organization"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Metadata about the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// A set of rules under which this content was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    /// Language of the resource content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Text summary of the resource, for human interpretation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    /// Contained, inline Resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Value>>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifies this organization across multiple systems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether the organization's record is still in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Kind of organization
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub organization_type: Option<Vec<CodeableConcept>>,

    /// Name used for the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A list of alternate names that the organization is known as,
    /// or was known as in the past
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,

    /// Additional details about the Organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Official contact details for the Organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ExtendedContactDetail>>,

    /// The organization of which this organization forms a part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Reference>,

    /// Technical endpoints providing access to services operated for the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,

    /// Qualifications, certifications, accreditations, licenses, training, etc.
    /// pertaining to the provision of care
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<Vec<OrganizationQualification>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Organization".to_string()
}

/// Qualifications, certifications, accreditations, licenses, training, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationQualification {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// An identifier for this qualification for the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Coded representation of the qualification
    pub code: CodeableConcept,

    /// Period during which the qualification is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Organization that regulates and issues the qualification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_organization() {
        let organization: Organization = serde_json::from_value(json!({
            "resourceType": "Organization",
            "id": "hl7",
            "name": "Health Level Seven International",
            "alias": ["HL7 International"],
            "contact": [{
                "telecom": [{"system": "phone", "value": "(+1) 734-677-7777"}],
                "address": {"city": "Ann Arbor", "state": "MI", "country": "USA"}
            }]
        }))
        .unwrap();

        assert_eq!(
            organization.name.as_deref(),
            Some("Health Level Seven International")
        );
        let contact = &organization.contact.as_ref().unwrap()[0];
        assert_eq!(
            contact.address.as_ref().unwrap().city.as_deref(),
            Some("Ann Arbor")
        );
    }
}
