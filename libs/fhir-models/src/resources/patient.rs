//! FHIR Patient resource
//!
//! Demographics and other administrative information about an individual
//! receiving care or other health-related services.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    choice_type, code_enum, Address, AdministrativeGender, Attachment, Choice, CodeableConcept,
    ContactPoint, Extension, HumanName, Identifier, Meta, Narrative, NameUse, Period, Reference,
};

choice_type! {
    /// Patient.deceased[x]
    pub enum PatientDeceased {
        "deceasedBoolean" => Boolean(bool),
        "deceasedDateTime" => DateTime(String),
    }
}

choice_type! {
    /// Patient.multipleBirth[x]
    pub enum PatientMultipleBirth {
        "multipleBirthBoolean" => Boolean(bool),
        "multipleBirthInteger" => Integer(i32),
    }
}

code_enum! {
    /// The type of link between this patient resource and another patient resource
    pub enum PatientLinkType {
        "replaced-by" => ReplacedBy,
        "replaces" => Replaces,
        "refer" => Refer,
        "seealso" => SeeAlso,
    }
}

/// Information about an individual receiving health care services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Resource type - always "Patient"
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

    /// An identifier for this patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this patient's record is in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// A name associated with the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<HumanName>>,

    /// A contact detail for the individual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// male | female | other | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// The date of birth for the individual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Indicates if the individual is deceased or not
    #[serde(flatten)]
    pub deceased: Choice<PatientDeceased>,

    /// An address for the individual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Vec<Address>>,

    /// Marital (civil) status of a patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<CodeableConcept>,

    /// Whether patient is part of a multiple birth
    #[serde(flatten)]
    pub multiple_birth: Choice<PatientMultipleBirth>,

    /// Image of the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<Attachment>>,

    /// A contact party (e.g. guardian, partner, friend) for the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<PatientContact>>,

    /// A language which may be used to communicate with the patient about his or her health
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication: Option<Vec<PatientCommunication>>,

    /// Patient's nominated primary care provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_practitioner: Option<Vec<Reference>>,

    /// Organization that is the custodian of the patient record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    /// Link to a Patient or RelatedPerson resource that concerns the same actual individual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<PatientLink>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Patient".to_string()
}

/// A contact party (e.g. guardian, partner, friend) for the patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientContact {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The kind of relationship
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Vec<CodeableConcept>>,

    /// A name associated with the contact person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,

    /// A contact detail for the person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Address for the contact person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// male | female | other | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// Organization that is associated with the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// The period during which this contact person or organization is valid to be contacted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// A language which may be used to communicate with the patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientCommunication {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The language which can be used to communicate with the patient
    pub language: CodeableConcept,

    /// Language preference indicator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Link to another patient resource that concerns the same actual person
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientLink {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The other patient or related person resource that the link refers to
    pub other: Reference,

    /// replaced-by | replaces | refer | seealso
    #[serde(rename = "type")]
    pub link_type: PatientLinkType,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Patient {
    /// The official name, falling back to the first listed name.
    pub fn preferred_name(&self) -> Option<&HumanName> {
        let names = self.name.as_deref()?;
        names
            .iter()
            .find(|n| n.name_use == Some(NameUse::Official))
            .or_else(|| names.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_patient() {
        let patient: Patient = serde_json::from_value(json!({
            "resourceType": "Patient",
            "id": "example",
            "active": true,
            "name": [
                {"use": "official", "family": "Chalmers", "given": ["Peter", "James"]},
                {"use": "usual", "given": ["Jim"]}
            ],
            "gender": "male",
            "birthDate": "1974-12-25",
            "deceasedBoolean": false
        }))
        .unwrap();

        assert_eq!(patient.resource_type, "Patient");
        assert_eq!(patient.gender, Some(AdministrativeGender::Male));
        assert_eq!(
            patient.preferred_name().unwrap().family.as_deref(),
            Some("Chalmers")
        );
        assert_eq!(
            patient.deceased.get(),
            Some(&PatientDeceased::Boolean(false))
        );
    }

    #[test]
    fn test_deceased_choice_is_exclusive() {
        let result: Result<Patient, _> = serde_json::from_value(json!({
            "resourceType": "Patient",
            "deceasedBoolean": true,
            "deceasedDateTime": "2024-01-01T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_link_type_is_closed() {
        let result: Result<Patient, _> = serde_json::from_value(json!({
            "resourceType": "Patient",
            "link": [{"other": {"reference": "Patient/pat2"}, "type": "sibling"}]
        }));
        assert!(result.is_err());
    }
}
