//! FHIR Practitioner resource

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    choice_type, Address, AdministrativeGender, Attachment, Choice, CodeableConcept,
    ContactPoint, Extension, HumanName, Identifier, Meta, Narrative, Period, Reference,
};

choice_type! {
    /// Practitioner.deceased[x]
    pub enum PractitionerDeceased {
        "deceasedBoolean" => Boolean(bool),
        "deceasedDateTime" => DateTime(String),
    }
}

/// A person with a formal responsibility in the provisioning of healthcare or
/// related services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    /// Resource type - always "Practitioner"
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

    /// An identifier for the person as this agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this practitioner's record is in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// The name(s) associated with the practitioner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<HumanName>>,

    /// A contact detail for the practitioner (that apply to all roles)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// male | female | other | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// The date on which the practitioner was born
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Indicates if the practitioner is deceased or not
    #[serde(flatten)]
    pub deceased: Choice<PractitionerDeceased>,

    /// Address(es) of the practitioner that are not role specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Vec<Address>>,

    /// Image of the person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<Attachment>>,

    /// Qualifications, certifications, accreditations, licenses, training, etc.
    /// pertaining to the provision of care
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<Vec<PractitionerQualification>>,

    /// A language which may be used to communicate with the practitioner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication: Option<Vec<PractitionerCommunication>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Practitioner".to_string()
}

/// Qualifications obtained by training and certification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerQualification {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// An identifier for this qualification for the practitioner
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

/// A language which may be used to communicate with the practitioner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerCommunication {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The language code used to communicate with the practitioner
    pub language: CodeableConcept,

    /// Language preference indicator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_practitioner() {
        let practitioner: Practitioner = serde_json::from_value(json!({
            "resourceType": "Practitioner",
            "id": "example",
            "active": true,
            "name": [{"family": "Careful", "given": ["Adam"], "prefix": ["Dr"]}],
            "gender": "male",
            "qualification": [{
                "code": {
                    "coding": [{
                        "system": "http://terminology.hl7.org/CodeSystem/v2-0360",
                        "code": "BS",
                        "display": "Bachelor of Science"
                    }]
                },
                "period": {"start": "1995"}
            }]
        }))
        .unwrap();

        assert_eq!(practitioner.active, Some(true));
        assert_eq!(
            practitioner.qualification.as_ref().unwrap()[0]
                .code
                .first_code(),
            Some("BS")
        );
        assert!(practitioner.deceased.is_none());
    }
}
