//! FHIR Condition resource
//!
//! A clinical condition, problem, diagnosis, or other event, situation,
//! issue, or clinical concept that has risen to a level of concern.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    choice_type, Age, Annotation, Choice, CodeableConcept, CodeableReference, Extension,
    Identifier, Meta, Narrative, Period, Range, Reference,
};

choice_type! {
    /// Condition.onset[x]
    pub enum ConditionOnset {
        "onsetDateTime" => DateTime(String),
        "onsetAge" => Age(Age),
        "onsetPeriod" => Period(Period),
        "onsetRange" => Range(Range),
        "onsetString" => String(String),
    }
}

choice_type! {
    /// Condition.abatement[x]
    pub enum ConditionAbatement {
        "abatementDateTime" => DateTime(String),
        "abatementAge" => Age(Age),
        "abatementPeriod" => Period(Period),
        "abatementRange" => Range(Range),
        "abatementString" => String(String),
    }
}

/// Detailed information about conditions, problems or diagnoses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Resource type - always "Condition"
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

    /// External Ids for this condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | recurrence | relapse | inactive | remission | resolved | unknown
    pub clinical_status: CodeableConcept,

    /// unconfirmed | provisional | differential | confirmed | refuted | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<CodeableConcept>,

    /// problem-list-item | encounter-diagnosis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Subjective severity of condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<CodeableConcept>,

    /// Identification of the condition, problem or diagnosis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Anatomical location, if relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<Vec<CodeableConcept>>,

    /// Anatomical body structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_structure: Option<Reference>,

    /// Who has the condition?
    pub subject: Reference,

    /// The Encounter during which this Condition was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// Estimated or actual date, date-time, or age
    #[serde(flatten)]
    pub onset: Choice<ConditionOnset>,

    /// When in resolution/remission
    #[serde(flatten)]
    pub abatement: Choice<ConditionAbatement>,

    /// Date condition was first recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<String>,

    /// Who or what participated in the activities related to the condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<ConditionParticipant>>,

    /// Stage/grade, usually assessed formally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Vec<ConditionStage>>,

    /// Supporting evidence for the verification status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<CodeableReference>>,

    /// Additional information about the Condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Condition".to_string()
}

/// Who or what participated in the activities related to the condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionParticipant {
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

    /// Who or what participated in the activities related to the condition
    pub actor: Reference,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Stage/grade, usually assessed formally
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionStage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Simple summary (disease specific)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CodeableConcept>,

    /// Formal record of assessment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Vec<Reference>>,

    /// Kind of staging
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub stage_type: Option<CodeableConcept>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_condition() {
        let condition: Condition = serde_json::from_value(json!({
            "resourceType": "Condition",
            "id": "example",
            "clinicalStatus": {
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/condition-clinical",
                    "code": "active"
                }]
            },
            "code": {
                "coding": [{
                    "system": "http://snomed.info/sct",
                    "code": "39065001",
                    "display": "Burn of ear"
                }],
                "text": "Burnt Ear"
            },
            "subject": {"reference": "Patient/example"},
            "onsetDateTime": "2012-05-24"
        }))
        .unwrap();

        assert_eq!(condition.clinical_status.first_code(), Some("active"));
        assert_eq!(
            condition.onset.get(),
            Some(&ConditionOnset::DateTime("2012-05-24".to_string()))
        );
        assert!(condition.abatement.is_none());
    }

    #[test]
    fn test_onset_and_abatement_are_independent_groups() {
        let condition: Condition = serde_json::from_value(json!({
            "resourceType": "Condition",
            "clinicalStatus": {"coding": [{"code": "resolved"}]},
            "subject": {"reference": "Patient/example"},
            "onsetAge": {"value": 54, "unit": "yr"},
            "abatementAge": {"value": 56, "unit": "yr"}
        }))
        .unwrap();

        assert!(matches!(condition.onset.get(), Some(ConditionOnset::Age(_))));
        assert!(matches!(
            condition.abatement.get(),
            Some(ConditionAbatement::Age(_))
        ));
    }
}
