//! FHIR Observation resource
//!
//! Measurements and simple assertions made about a patient, device or other
//! subject.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    choice_type, code_enum, Annotation, Attachment, Choice, CodeableConcept, Extension,
    Identifier, Meta, Narrative, Period, Quantity, Range, Ratio, Reference, SampledData, Timing,
};

code_enum! {
    /// Codes providing the status of an observation
    pub enum ObservationStatus {
        "registered" => Registered,
        "preliminary" => Preliminary,
        "final" => Final,
        "amended" => Amended,
        "corrected" => Corrected,
        "cancelled" => Cancelled,
        "entered-in-error" => EnteredInError,
        "unknown" => Unknown,
    }
}

code_enum! {
    /// The type of trigger relationship to the parent observation
    pub enum TriggeredByType {
        "reflex" => Reflex,
        "repeat" => Repeat,
        "re-run" => ReRun,
    }
}

choice_type! {
    /// Observation.instantiates[x]
    pub enum ObservationInstantiates {
        "instantiatesCanonical" => Canonical(String),
        "instantiatesReference" => Reference(Reference),
    }
}

choice_type! {
    /// Observation.effective[x]
    pub enum ObservationEffective {
        "effectiveDateTime" => DateTime(String),
        "effectivePeriod" => Period(Period),
        "effectiveTiming" => Timing(Timing),
        "effectiveInstant" => Instant(String),
    }
}

choice_type! {
    /// Observation.value[x] (also used by Observation.component.value[x])
    pub enum ObservationValue {
        "valueQuantity" => Quantity(Quantity),
        "valueCodeableConcept" => CodeableConcept(CodeableConcept),
        "valueString" => String(String),
        "valueBoolean" => Boolean(bool),
        "valueInteger" => Integer(i32),
        "valueRange" => Range(Range),
        "valueRatio" => Ratio(Ratio),
        "valueSampledData" => SampledData(SampledData),
        "valueTime" => Time(String),
        "valueDateTime" => DateTime(String),
        "valuePeriod" => Period(Period),
        "valueAttachment" => Attachment(Attachment),
        "valueReference" => Reference(Reference),
    }
}

/// Measurements and simple assertions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Resource type - always "Observation"
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

    /// Business Identifier for observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Instantiates FHIR ObservationDefinition
    #[serde(flatten)]
    pub instantiates: Choice<ObservationInstantiates>,

    /// Fulfills plan, proposal or order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Triggering observation(s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<Vec<ObservationTriggeredBy>>,

    /// Part of referenced event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// registered | preliminary | final | amended | corrected | cancelled |
    /// entered-in-error | unknown
    pub status: ObservationStatus,

    /// Classification of type of observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Type of observation (code / type)
    pub code: CodeableConcept,

    /// Who and/or what the observation is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// What the observation is about, when it is not about the subject of record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Vec<Reference>>,

    /// Healthcare event during which this observation is made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// Clinically relevant time/time-period for observation
    #[serde(flatten)]
    pub effective: Choice<ObservationEffective>,

    /// Date/Time this version was made available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,

    /// Who is responsible for the observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<Reference>>,

    /// Actual result
    #[serde(flatten)]
    pub value: Choice<ObservationValue>,

    /// Why the result is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,

    /// High, low, normal, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<Vec<CodeableConcept>>,

    /// Comments about the observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Observed body part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<CodeableConcept>,

    /// Observed body structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_structure: Option<Reference>,

    /// How it was done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Specimen used for this observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Reference>,

    /// A reference to the device that generates the measurements or the device settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Reference>,

    /// Provides guide for interpretation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,

    /// Related resource that belongs to the Observation group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_member: Option<Vec<Reference>>,

    /// Related resource from which the observation is made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<Vec<Reference>>,

    /// Component results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Vec<ObservationComponent>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Observation".to_string()
}

/// Triggering observation(s)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationTriggeredBy {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Triggering observation
    pub observation: Reference,

    /// reflex | repeat | re-run
    #[serde(rename = "type")]
    pub trigger_type: TriggeredByType,

    /// Reason that the observation was triggered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Provides guide for interpretation of component result value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationReferenceRange {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Low Range, if relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Quantity>,

    /// High Range, if relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Quantity>,

    /// Normal value, if relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_value: Option<CodeableConcept>,

    /// Reference range qualifier
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub range_type: Option<CodeableConcept>,

    /// Reference range population
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<Vec<CodeableConcept>>,

    /// Applicable age range, if relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Range>,

    /// Text based reference range in an observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Component results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of component observation (code / type)
    pub code: CodeableConcept,

    /// Actual component result
    #[serde(flatten)]
    pub value: Choice<ObservationValue>,

    /// Why the component result is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,

    /// High, low, normal, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<Vec<CodeableConcept>>,

    /// Provides guide for interpretation of component result value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Observation {
    /// The measured quantity, when the result is a Quantity.
    pub fn value_quantity(&self) -> Option<&Quantity> {
        match self.value.get() {
            Some(ObservationValue::Quantity(quantity)) => Some(quantity),
            _ => None,
        }
    }

    /// Whether the observation carries a result or documents its absence.
    pub fn has_result(&self) -> bool {
        self.value.is_some() || self.data_absent_reason.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_observation_with_quantity() {
        let observation: Observation = serde_json::from_value(json!({
            "resourceType": "Observation",
            "id": "f001",
            "status": "final",
            "code": {
                "coding": [{
                    "system": "http://loinc.org",
                    "code": "15074-8",
                    "display": "Glucose [Moles/volume] in Blood"
                }]
            },
            "subject": {"reference": "Patient/f001"},
            "effectivePeriod": {"start": "2013-04-02T09:30:10+01:00"},
            "valueQuantity": {
                "value": 6.3,
                "unit": "mmol/l",
                "system": "http://unitsofmeasure.org",
                "code": "mmol/L"
            }
        }))
        .unwrap();

        assert_eq!(observation.status, ObservationStatus::Final);
        assert_eq!(observation.value_quantity().unwrap().value, Some(6.3));
        assert!(observation.has_result());
        assert!(matches!(
            observation.effective.get(),
            Some(ObservationEffective::Period(_))
        ));
    }

    #[test]
    fn test_value_choice_is_exclusive() {
        let result: Result<Observation, _> = serde_json::from_value(json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "Glucose"},
            "valueQuantity": {"value": 6.3},
            "valueString": "6.3 mmol/l"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_component_values() {
        let observation: Observation = serde_json::from_value(json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {
                "coding": [{"system": "http://loinc.org", "code": "85354-9"}],
                "text": "Blood pressure systolic & diastolic"
            },
            "component": [
                {
                    "code": {"coding": [{"system": "http://loinc.org", "code": "8480-6"}]},
                    "valueQuantity": {"value": 107, "unit": "mmHg", "code": "mm[Hg]"}
                },
                {
                    "code": {"coding": [{"system": "http://loinc.org", "code": "8462-4"}]},
                    "valueQuantity": {"value": 60, "unit": "mmHg", "code": "mm[Hg]"}
                }
            ]
        }))
        .unwrap();

        let components = observation.component.as_ref().unwrap();
        assert_eq!(components.len(), 2);
        assert!(components
            .iter()
            .all(|c| matches!(c.value.get(), Some(ObservationValue::Quantity(_)))));
    }

    #[test]
    fn test_data_absent_reason_without_value() {
        let observation: Observation = serde_json::from_value(json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "Haemoglobin"},
            "dataAbsentReason": {
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/data-absent-reason",
                    "code": "error"
                }]
            }
        }))
        .unwrap();

        assert!(observation.value.is_none());
        assert!(observation.has_result());
    }
}
