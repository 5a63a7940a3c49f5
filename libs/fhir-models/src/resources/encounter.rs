//! FHIR Encounter resource
//!
//! An interaction between a patient and healthcare provider(s) for the
//! purpose of providing healthcare service(s) or assessing the health
//! status of a patient.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    code_enum, CodeableConcept, CodeableReference, Duration, Extension, Identifier, Meta,
    Narrative, Period, Reference, VirtualServiceDetail,
};

code_enum! {
    /// Current state of the encounter
    pub enum EncounterStatus {
        "planned" => Planned,
        "in-progress" => InProgress,
        "on-hold" => OnHold,
        "discharged" => Discharged,
        "completed" => Completed,
        "cancelled" => Cancelled,
        "discontinued" => Discontinued,
        "entered-in-error" => EnteredInError,
        "unknown" => Unknown,
    }
}

code_enum! {
    /// The status of the location within the encounter
    pub enum EncounterLocationStatus {
        "planned" => Planned,
        "active" => Active,
        "reserved" => Reserved,
        "completed" => Completed,
    }
}

/// An interaction during which services are provided to the patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    /// Resource type - always "Encounter"
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

    /// Identifier(s) by which this encounter is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// planned | in-progress | on-hold | discharged | completed | cancelled |
    /// discontinued | entered-in-error | unknown
    pub status: EncounterStatus,

    /// Classification of patient encounter context - e.g. Inpatient, outpatient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Vec<CodeableConcept>>,

    /// Indicates the urgency of the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// Specific type of encounter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub encounter_type: Option<Vec<CodeableConcept>>,

    /// Specific type of service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<Vec<CodeableReference>>,

    /// The patient or group related to this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// The current status of the subject in relation to the Encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_status: Option<CodeableConcept>,

    /// Episode(s) of care that this encounter should be recorded against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_of_care: Option<Vec<Reference>>,

    /// The request that initiated this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// The group(s) that are allocated to participate in this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team: Option<Vec<Reference>>,

    /// Another Encounter this encounter is part of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Reference>,

    /// The organization (facility) responsible for this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<Reference>,

    /// List of participants involved in the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<EncounterParticipant>>,

    /// The appointment that scheduled this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Vec<Reference>>,

    /// Connection details of a virtual service (e.g. conference call)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_service: Option<Vec<VirtualServiceDetail>>,

    /// The actual start and end time of the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_period: Option<Period>,

    /// The planned start date/time (or admission date) of the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<String>,

    /// The planned end date/time (or discharge date) of the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_end_date: Option<String>,

    /// Actual quantity of time the encounter lasted (less time absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Duration>,

    /// The list of medical reasons that are expected to be addressed during the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<EncounterReason>>,

    /// The list of diagnosis relevant to this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<EncounterDiagnosis>>,

    /// The set of accounts that may be used for billing for this Encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<Reference>>,

    /// Diet preferences reported by the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_preference: Option<Vec<CodeableConcept>>,

    /// Wheelchair, translator, stretcher, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_arrangement: Option<Vec<CodeableConcept>>,

    /// Special courtesies (VIP, board member)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_courtesy: Option<Vec<CodeableConcept>>,

    /// Details about the admission to a healthcare service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission: Option<EncounterAdmission>,

    /// List of locations where the patient has been
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<EncounterLocation>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Encounter".to_string()
}

/// List of participants involved in the encounter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncounterParticipant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Role of participant in encounter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub participant_type: Option<Vec<CodeableConcept>>,

    /// Period of time during the encounter that the participant participated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// The individual, device, or service participating in the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// The list of medical reasons that are expected to be addressed during the encounter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncounterReason {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What the reason value should be used for/as
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub reason_use: Option<Vec<CodeableConcept>>,

    /// Reason the encounter takes place (core or reference)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<CodeableReference>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// The list of diagnosis relevant to this encounter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncounterDiagnosis {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The diagnosis relevant to the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<CodeableReference>>,

    /// Role that this diagnosis has within the encounter (e.g. admission, billing, discharge)
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub diagnosis_use: Option<Vec<CodeableConcept>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Details about the admission to a healthcare service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncounterAdmission {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Pre-admission identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_admission_identifier: Option<Identifier>,

    /// The location/organization from which the patient came before admission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Reference>,

    /// From where patient was admitted (physician referral, transfer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admit_source: Option<CodeableConcept>,

    /// Indicates that the patient is being re-admitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_admission: Option<CodeableConcept>,

    /// Location/organization to which the patient is discharged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Reference>,

    /// Category or kind of location after discharge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_disposition: Option<CodeableConcept>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// List of locations where the patient has been
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncounterLocation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Location the encounter takes place
    pub location: Reference,

    /// planned | active | reserved | completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EncounterLocationStatus>,

    /// The physical type of the location (usually the level in the location hierarchy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CodeableConcept>,

    /// Time period during which the patient was present at the location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_encounter() {
        let encounter: Encounter = serde_json::from_value(json!({
            "resourceType": "Encounter",
            "id": "example",
            "status": "in-progress",
            "class": [{
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/v3-ActCode",
                    "code": "IMP",
                    "display": "inpatient encounter"
                }]
            }],
            "subject": {"reference": "Patient/example"}
        }))
        .unwrap();

        assert_eq!(encounter.status, EncounterStatus::InProgress);
        assert_eq!(
            encounter.subject.as_ref().unwrap().reference.as_deref(),
            Some("Patient/example")
        );
    }

    #[test]
    fn test_location_status_is_closed() {
        let result: Result<Encounter, _> = serde_json::from_value(json!({
            "resourceType": "Encounter",
            "status": "completed",
            "location": [{
                "location": {"reference": "Location/ward-2"},
                "status": "occupied"
            }]
        }));
        assert!(result.is_err());
    }
}
