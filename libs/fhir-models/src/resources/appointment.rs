//! FHIR Appointment resource
//!
//! A booking of a healthcare event among patient(s), practitioner(s),
//! related person(s) and/or device(s) for a specific date/time.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    code_enum, Annotation, CodeableConcept, CodeableReference, Extension, Identifier, Meta,
    Narrative, Period, Reference, VirtualServiceDetail,
};

code_enum! {
    /// The overall status of the appointment
    pub enum AppointmentStatus {
        "proposed" => Proposed,
        "pending" => Pending,
        "booked" => Booked,
        "arrived" => Arrived,
        "fulfilled" => Fulfilled,
        "cancelled" => Cancelled,
        "noshow" => NoShow,
        "entered-in-error" => EnteredInError,
        "checked-in" => CheckedIn,
        "waitlist" => Waitlist,
    }
}

code_enum! {
    /// The participation status of an actor
    pub enum ParticipationStatus {
        "accepted" => Accepted,
        "declined" => Declined,
        "tentative" => Tentative,
        "needs-action" => NeedsAction,
    }
}

/// A booking of a healthcare event among patient(s), practitioner(s), related person(s)
/// and/or device(s) for a specific date/time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Resource type - always "Appointment"
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

    /// proposed | pending | booked | arrived | fulfilled | cancelled | noshow |
    /// entered-in-error | checked-in | waitlist
    pub status: AppointmentStatus,

    /// The coded reason for the appointment being cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<CodeableConcept>,

    /// Classification when becoming an encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Vec<CodeableConcept>>,

    /// A broad categorization of the service that is to be performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_category: Option<Vec<CodeableConcept>>,

    /// The specific service that is to be performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<Vec<CodeableReference>>,

    /// The specialty of a practitioner that would be required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Vec<CodeableConcept>>,

    /// The style of appointment or patient that has been booked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<CodeableConcept>,

    /// Reason this appointment is scheduled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeableReference>>,

    /// Used to make informed decisions if needing to re-prioritize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// Shown on a subject line in a meeting request, or appointment list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Appointment replaced by this Appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<Vec<Reference>>,

    /// Connection details of a virtual service (e.g. conference call)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_service: Option<Vec<VirtualServiceDetail>>,

    /// Additional information to support the appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_information: Option<Vec<Reference>>,

    /// The previous appointment in a series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_appointment: Option<Reference>,

    /// The originating appointment in a recurring set of appointments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originating_appointment: Option<Reference>,

    /// When appointment is to take place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// When appointment is to conclude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    /// Can be less than start/end (e.g. estimate)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_duration: Option<u32>,

    /// Potential date/time interval(s) requested to allocate the appointment within
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_period: Option<Vec<Period>>,

    /// The slots that this appointment is filling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<Vec<Reference>>,

    /// The set of accounts that may be used for billing for this Appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<Reference>>,

    /// The date that this appointment was initially created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// When the appointment was cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<String>,

    /// Additional comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Detailed information and instructions for the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_instruction: Option<Vec<CodeableReference>>,

    /// The request this appointment is allocated to assess
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// The patient or group associated with the appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Participants involved in appointment
    pub participant: Vec<AppointmentParticipant>,

    /// The sequence number in the recurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_id: Option<u32>,

    /// Indicates that this appointment varies from a recurrence pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence_changed: Option<bool>,

    /// Details of the recurrence pattern/template used to generate occurrences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_template: Option<Vec<Value>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Appointment".to_string()
}

/// Participants involved in appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentParticipant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Role of participant in the appointment
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub participant_type: Option<Vec<CodeableConcept>>,

    /// Participation period of the actor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// The individual, device, location, or service participating in the appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Reference>,

    /// The participant is required to attend (optional when false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// accepted | declined | tentative | needs-action
    pub status: ParticipationStatus,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Appointment {
    /// Participants as a slice.
    pub fn participants(&self) -> &[AppointmentParticipant] {
        &self.participant
    }

    /// Actors that have accepted the appointment.
    pub fn accepted_actors(&self) -> impl Iterator<Item = &Reference> {
        self.participant
            .iter()
            .filter(|p| p.status == ParticipationStatus::Accepted)
            .filter_map(|p| p.actor.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_appointment() {
        let appointment: Appointment = serde_json::from_value(json!({
            "resourceType": "Appointment",
            "id": "example",
            "status": "booked",
            "description": "Discussion on the results of your recent MRI",
            "start": "2013-12-10T09:00:00Z",
            "end": "2013-12-10T11:00:00Z",
            "participant": [
                {
                    "actor": {"reference": "Patient/example", "display": "Peter James Chalmers"},
                    "required": true,
                    "status": "accepted"
                },
                {
                    "actor": {"reference": "Practitioner/example", "display": "Dr Adam Careful"},
                    "required": true,
                    "status": "accepted"
                }
            ]
        }))
        .unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Booked);
        assert_eq!(appointment.participants().len(), 2);
        assert_eq!(appointment.accepted_actors().count(), 2);
    }

    #[test]
    fn test_participant_status_required() {
        let result: Result<Appointment, _> = serde_json::from_value(json!({
            "resourceType": "Appointment",
            "status": "proposed",
            "participant": [
                {"actor": {"reference": "Patient/example"}}
            ]
        }));
        assert!(result.is_err());
    }
}
