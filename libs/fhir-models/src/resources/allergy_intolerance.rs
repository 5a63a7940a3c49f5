//! FHIR AllergyIntolerance resource
//!
//! Risk of harmful or undesirable physiological response which is specific
//! to an individual and associated with exposure to a substance.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    choice_type, code_enum, Age, Annotation, Choice, CodeableConcept, CodeableReference,
    Extension, Identifier, Meta, Narrative, Period, Range, Reference,
};

code_enum! {
    /// Category of an identified substance associated with allergies or intolerances
    pub enum AllergyIntoleranceCategory {
        "food" => Food,
        "medication" => Medication,
        "environment" => Environment,
        "biologic" => Biologic,
    }
}

code_enum! {
    /// Estimate of the potential clinical harm of a reaction to an identified substance
    pub enum AllergyIntoleranceCriticality {
        "low" => Low,
        "high" => High,
        "unable-to-assess" => UnableToAssess,
    }
}

code_enum! {
    /// Clinical assessment of the severity of a reaction event as a whole
    pub enum AllergyIntoleranceSeverity {
        "mild" => Mild,
        "moderate" => Moderate,
        "severe" => Severe,
    }
}

choice_type! {
    /// AllergyIntolerance.onset[x]
    pub enum AllergyIntoleranceOnset {
        "onsetDateTime" => DateTime(String),
        "onsetAge" => Age(Age),
        "onsetPeriod" => Period(Period),
        "onsetRange" => Range(Range),
        "onsetString" => String(String),
    }
}

/// Allergy or Intolerance (generally: Risk of adverse reaction to a substance)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntolerance {
    /// Resource type - always "AllergyIntolerance"
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

    /// External ids for this item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | inactive | resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_status: Option<CodeableConcept>,

    /// unconfirmed | presumed | confirmed | refuted | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<CodeableConcept>,

    /// allergy | intolerance - Underlying mechanism (if known)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub allergy_type: Option<CodeableConcept>,

    /// food | medication | environment | biologic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<AllergyIntoleranceCategory>>,

    /// low | high | unable-to-assess
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criticality: Option<AllergyIntoleranceCriticality>,

    /// Code that identifies the allergy or intolerance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Who the allergy or intolerance is for
    pub patient: Reference,

    /// Encounter when the allergy or intolerance was asserted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// When allergy or intolerance was identified
    #[serde(flatten)]
    pub onset: Choice<AllergyIntoleranceOnset>,

    /// Date allergy or intolerance was first recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<String>,

    /// Who or what participated in the activities related to the allergy or intolerance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<AllergyIntoleranceParticipant>>,

    /// Date(/time) of last known occurrence of a reaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_occurrence: Option<String>,

    /// Additional text not captured in other fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Adverse Reaction Events linked to exposure to substance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Vec<AllergyIntoleranceReaction>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "AllergyIntolerance".to_string()
}

/// Who or what participated in the activities related to the allergy or intolerance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntoleranceParticipant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of involvement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<CodeableConcept>,

    /// Who or what participated in the activities related to the allergy or intolerance
    pub actor: Reference,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Adverse Reaction Events linked to exposure to substance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntoleranceReaction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Specific substance or pharmaceutical product considered to be responsible for event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substance: Option<CodeableConcept>,

    /// Clinical symptoms/signs associated with the Event
    pub manifestation: Vec<CodeableReference>,

    /// Description of the event as a whole
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date(/time) when manifestations showed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<String>,

    /// mild | moderate | severe (of event as a whole)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AllergyIntoleranceSeverity>,

    /// How the subject was exposed to the substance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_route: Option<CodeableConcept>,

    /// Text about event not captured in other fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_allergy_intolerance() {
        let allergy: AllergyIntolerance = serde_json::from_value(json!({
            "resourceType": "AllergyIntolerance",
            "id": "example",
            "clinicalStatus": {
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/allergyintolerance-clinical",
                    "code": "active"
                }]
            },
            "category": ["food"],
            "criticality": "high",
            "code": {
                "coding": [{
                    "system": "http://snomed.info/sct",
                    "code": "227493005",
                    "display": "Cashew nuts"
                }]
            },
            "patient": {"reference": "Patient/example"},
            "onsetDateTime": "2004"
        }))
        .unwrap();

        assert_eq!(allergy.patient.reference.as_deref(), Some("Patient/example"));
        assert_eq!(
            allergy.criticality,
            Some(AllergyIntoleranceCriticality::High)
        );
        assert_eq!(
            allergy.onset.get(),
            Some(&AllergyIntoleranceOnset::DateTime("2004".to_string()))
        );
    }

    #[test]
    fn test_patient_is_required() {
        let result: Result<AllergyIntolerance, _> = serde_json::from_value(json!({
            "resourceType": "AllergyIntolerance",
            "code": {"text": "Penicillin"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_reaction_severity_is_closed() {
        let result: Result<AllergyIntolerance, _> = serde_json::from_value(json!({
            "resourceType": "AllergyIntolerance",
            "patient": {"reference": "Patient/example"},
            "reaction": [{
                "manifestation": [{"concept": {"text": "Anaphylaxis"}}],
                "severity": "catastrophic"
            }]
        }));
        assert!(result.is_err());
    }
}
