//! FHIR Claim resource
//!
//! A provider issued list of professional services and products which have
//! been provided, or are to be provided, to a patient which is sent to an
//! insurer for reimbursement.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    choice_type, code_enum, Address, Attachment, Choice, CodeableConcept, CodeableReference,
    Extension, Identifier, Meta, Money, Narrative, Period, Quantity, Reference,
};

code_enum! {
    /// The lifecycle status of a financial resource
    pub enum ClaimStatus {
        "active" => Active,
        "cancelled" => Cancelled,
        "draft" => Draft,
        "entered-in-error" => EnteredInError,
    }
}

code_enum! {
    /// The purpose of the Claim
    pub enum ClaimUse {
        "claim" => Claim,
        "preauthorization" => Preauthorization,
        "predetermination" => Predetermination,
    }
}

choice_type! {
    /// Claim.event.when[x]
    pub enum ClaimEventWhen {
        "whenDateTime" => DateTime(String),
        "whenPeriod" => Period(Period),
    }
}

choice_type! {
    /// Claim.supportingInfo.timing[x]
    pub enum ClaimSupportingInfoTiming {
        "timingDate" => Date(String),
        "timingPeriod" => Period(Period),
    }
}

choice_type! {
    /// Claim.supportingInfo.value[x]
    pub enum ClaimSupportingInfoValue {
        "valueBoolean" => Boolean(bool),
        "valueString" => String(String),
        "valueQuantity" => Quantity(Quantity),
        "valueAttachment" => Attachment(Attachment),
        "valueReference" => Reference(Reference),
        "valueIdentifier" => Identifier(Identifier),
    }
}

choice_type! {
    /// Claim.diagnosis.diagnosis[x]
    pub enum ClaimDiagnosisDiagnosis {
        "diagnosisCodeableConcept" => CodeableConcept(CodeableConcept),
        "diagnosisReference" => Reference(Reference),
    }
}

choice_type! {
    /// Claim.procedure.procedure[x]
    pub enum ClaimProcedureProcedure {
        "procedureCodeableConcept" => CodeableConcept(CodeableConcept),
        "procedureReference" => Reference(Reference),
    }
}

choice_type! {
    /// Claim.accident.location[x]
    pub enum ClaimAccidentLocation {
        "locationAddress" => Address(Address),
        "locationReference" => Reference(Reference),
    }
}

choice_type! {
    /// Claim.item.serviced[x]
    pub enum ClaimItemServiced {
        "servicedDate" => Date(String),
        "servicedPeriod" => Period(Period),
    }
}

choice_type! {
    /// Claim.item.location[x]
    pub enum ClaimItemLocation {
        "locationCodeableConcept" => CodeableConcept(CodeableConcept),
        "locationAddress" => Address(Address),
        "locationReference" => Reference(Reference),
    }
}

/// Claim, Pre-determination or Pre-authorization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Resource type - always "Claim"
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

    /// Business Identifier for claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Number for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_number: Option<Vec<Identifier>>,

    /// active | cancelled | draft | entered-in-error
    pub status: ClaimStatus,

    /// Category or discipline
    #[serde(rename = "type")]
    pub claim_type: CodeableConcept,

    /// More granular claim type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<CodeableConcept>,

    /// claim | preauthorization | predetermination
    #[serde(rename = "use")]
    pub claim_use: ClaimUse,

    /// The recipient of the products and services
    pub patient: Reference,

    /// Relevant time frame for the claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_period: Option<Period>,

    /// Resource creation date
    pub created: String,

    /// Author of the claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterer: Option<Reference>,

    /// Target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurer: Option<Reference>,

    /// Party responsible for the claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Reference>,

    /// Desired processing urgency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// For whom to reserve funds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds_reserve: Option<CodeableConcept>,

    /// Prior or corollary claims
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<ClaimRelated>>,

    /// Prescription authorizing services and products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Reference>,

    /// Original prescription if superseded by fulfiller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_prescription: Option<Reference>,

    /// Recipient of benefits payable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<ClaimPayee>,

    /// Treatment referral
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<Reference>,

    /// Encounters associated with the listed treatments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Vec<Reference>>,

    /// Servicing facility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,

    /// Package billing code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_related_group: Option<CodeableConcept>,

    /// Event information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<ClaimEvent>>,

    /// Members of the care team
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team: Option<Vec<ClaimCareTeam>>,

    /// Supporting information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_info: Option<Vec<ClaimSupportingInfo>>,

    /// Pertinent diagnosis information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<ClaimDiagnosis>>,

    /// Clinical procedures performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Vec<ClaimProcedure>>,

    /// Patient insurance information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Vec<ClaimInsurance>>,

    /// Details of the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accident: Option<ClaimAccident>,

    /// Paid by the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_paid: Option<Money>,

    /// Product or service provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<ClaimItem>>,

    /// Total claim cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Claim".to_string()
}

/// Prior or corollary claims
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRelated {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reference to the related claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim: Option<Reference>,

    /// How the reference claim is related
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<CodeableConcept>,

    /// File or case reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Identifier>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Recipient of benefits payable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPayee {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Category of recipient
    #[serde(rename = "type")]
    pub payee_type: CodeableConcept,

    /// Recipient reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Event information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEvent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Specific event
    #[serde(rename = "type")]
    pub event_type: CodeableConcept,

    /// Occurrence date or period
    #[serde(flatten)]
    pub when: Choice<ClaimEventWhen>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Members of the care team
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimCareTeam {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Order of care team
    pub sequence: u32,

    /// Practitioner or organization
    pub provider: Reference,

    /// Indicator of the lead practitioner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible: Option<bool>,

    /// Function within the team
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Practitioner or provider specialization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<CodeableConcept>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Supporting information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSupportingInfo {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Information instance identifier
    pub sequence: u32,

    /// Classification of the supplied information
    pub category: CodeableConcept,

    /// Type of information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// When it occurred
    #[serde(flatten)]
    pub timing: Choice<ClaimSupportingInfoTiming>,

    /// Data to be provided
    #[serde(flatten)]
    pub value: Choice<ClaimSupportingInfoValue>,

    /// Explanation for the information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Pertinent diagnosis information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDiagnosis {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Diagnosis instance identifier
    pub sequence: u32,

    /// Nature of illness or problem
    #[serde(flatten)]
    pub diagnosis: Choice<ClaimDiagnosisDiagnosis>,

    /// Timing or nature of the diagnosis
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub diagnosis_type: Option<Vec<CodeableConcept>>,

    /// Present on admission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_admission: Option<CodeableConcept>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Clinical procedures performed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimProcedure {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Procedure instance identifier
    pub sequence: u32,

    /// Category of Procedure
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub procedure_type: Option<Vec<CodeableConcept>>,

    /// When the procedure was performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Specific clinical procedure
    #[serde(flatten)]
    pub procedure: Choice<ClaimProcedureProcedure>,

    /// Unique device identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Patient insurance information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimInsurance {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Insurance instance identifier
    pub sequence: u32,

    /// Coverage to be used for adjudication
    pub focal: bool,

    /// Pre-assigned Claim number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Insurance information
    pub coverage: Reference,

    /// Additional provider contract number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_arrangement: Option<String>,

    /// Prior authorization reference number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref: Option<Vec<String>>,

    /// Adjudication results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_response: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Details of the event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAccident {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// When the incident occurred
    pub date: String,

    /// The nature of the accident
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub accident_type: Option<CodeableConcept>,

    /// Where the event occurred
    #[serde(flatten)]
    pub location: Choice<ClaimAccidentLocation>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Product or service provided
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Item instance identifier
    pub sequence: u32,

    /// Number for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_number: Option<Vec<Identifier>>,

    /// Applicable careTeam members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team_sequence: Option<Vec<u32>>,

    /// Applicable diagnoses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_sequence: Option<Vec<u32>>,

    /// Applicable procedures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_sequence: Option<Vec<u32>>,

    /// Applicable exception and supporting information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_sequence: Option<Vec<u32>>,

    /// Revenue or cost center code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,

    /// Benefit classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Billing, service, product, or drug code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_or_service: Option<CodeableConcept>,

    /// End of a range of codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_or_service_end: Option<CodeableConcept>,

    /// Request or Referral for Service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Vec<Reference>>,

    /// Product or service billing modifiers
    #[serde(rename = "modifier", skip_serializing_if = "Option::is_none")]
    pub modifier_code: Option<Vec<CodeableConcept>>,

    /// Program the product or service is provided under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,

    /// Date or dates of service or product delivery
    #[serde(flatten)]
    pub serviced: Choice<ClaimItemServiced>,

    /// Place of service or where product was supplied
    #[serde(flatten)]
    pub location: Choice<ClaimItemLocation>,

    /// Paid by the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_paid: Option<Money>,

    /// Count of products or services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Fee, charge or cost per item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    /// Price scaling factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,

    /// Total tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,

    /// Total item cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,

    /// Unique device identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,

    /// Anatomical location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<Vec<ClaimItemBodySite>>,

    /// Encounters associated with the listed treatments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Vec<Reference>>,

    /// Product or service provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ClaimItemDetail>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Anatomical location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItemBodySite {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Location
    pub site: Vec<CodeableReference>,

    /// Sub-location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_site: Option<Vec<CodeableConcept>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Product or service provided
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItemDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Item instance identifier
    pub sequence: u32,

    /// Number for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_number: Option<Vec<Identifier>>,

    /// Revenue or cost center code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,

    /// Benefit classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Billing, service, product, or drug code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_or_service: Option<CodeableConcept>,

    /// End of a range of codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_or_service_end: Option<CodeableConcept>,

    /// Service/Product billing modifiers
    #[serde(rename = "modifier", skip_serializing_if = "Option::is_none")]
    pub modifier_code: Option<Vec<CodeableConcept>>,

    /// Program the product or service is provided under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,

    /// Paid by the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_paid: Option<Money>,

    /// Count of products or services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Fee, charge or cost per item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    /// Price scaling factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,

    /// Total tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,

    /// Total item cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,

    /// Unique device identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,

    /// Product or service provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ClaimItemSubDetail>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Product or service provided
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItemSubDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Item instance identifier
    pub sequence: u32,

    /// Number for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_number: Option<Vec<Identifier>>,

    /// Revenue or cost center code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,

    /// Benefit classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Billing, service, product, or drug code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_or_service: Option<CodeableConcept>,

    /// End of a range of codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_or_service_end: Option<CodeableConcept>,

    /// Service/Product billing modifiers
    #[serde(rename = "modifier", skip_serializing_if = "Option::is_none")]
    pub modifier_code: Option<Vec<CodeableConcept>>,

    /// Program the product or service is provided under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,

    /// Paid by the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_paid: Option<Money>,

    /// Count of products or services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Fee, charge or cost per item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    /// Price scaling factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,

    /// Total tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,

    /// Total item cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,

    /// Unique device identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Claim {
    /// Line items as a slice.
    pub fn items(&self) -> &[ClaimItem] {
        self.item.as_deref().unwrap_or(&[])
    }

    /// Sum of the net amounts of all line items, when any carry one.
    pub fn items_net_total(&self) -> Option<f64> {
        let mut total = None;
        for item in self.items() {
            if let Some(net) = item.net.as_ref().and_then(|n| n.value) {
                *total.get_or_insert(0.0) += net;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_claim() {
        let claim: Claim = serde_json::from_value(json!({
            "resourceType": "Claim",
            "id": "100150",
            "status": "active",
            "type": {
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/claim-type",
                    "code": "oral"
                }]
            },
            "use": "claim",
            "patient": {"reference": "Patient/1"},
            "created": "2014-08-16",
            "insurer": {"reference": "Organization/2"},
            "priority": {"coding": [{"code": "normal"}]},
            "diagnosis": [{
                "sequence": 1,
                "diagnosisCodeableConcept": {"coding": [{"code": "123456"}]}
            }],
            "insurance": [{
                "sequence": 1,
                "focal": true,
                "coverage": {"reference": "Coverage/9876B1"}
            }],
            "item": [{
                "sequence": 1,
                "careTeamSequence": [1],
                "productOrService": {"coding": [{"code": "1200"}]},
                "servicedDate": "2014-08-16",
                "unitPrice": {"value": 135.57, "currency": "USD"},
                "net": {"value": 135.57, "currency": "USD"}
            }]
        }))
        .unwrap();

        assert_eq!(claim.status, ClaimStatus::Active);
        assert_eq!(claim.claim_use, ClaimUse::Claim);
        assert_eq!(claim.items().len(), 1);
        assert_eq!(claim.items_net_total(), Some(135.57));
        assert!(matches!(
            claim.diagnosis.as_ref().unwrap()[0].diagnosis.get(),
            Some(ClaimDiagnosisDiagnosis::CodeableConcept(_))
        ));
    }

    #[test]
    fn test_supporting_info_carries_two_choice_groups() {
        let claim: Claim = serde_json::from_value(json!({
            "resourceType": "Claim",
            "status": "active",
            "type": {"coding": [{"code": "oral"}]},
            "use": "claim",
            "patient": {"reference": "Patient/1"},
            "created": "2014-08-16",
            "supportingInfo": [{
                "sequence": 1,
                "category": {"coding": [{"code": "employmentimpacted"}]},
                "timingPeriod": {"start": "2014-08-16", "end": "2014-08-22"},
                "valueBoolean": true
            }]
        }))
        .unwrap();

        let info = &claim.supporting_info.as_ref().unwrap()[0];
        assert!(matches!(
            info.timing.get(),
            Some(ClaimSupportingInfoTiming::Period(_))
        ));
        assert_eq!(
            info.value.get(),
            Some(&ClaimSupportingInfoValue::Boolean(true))
        );
    }

    #[test]
    fn test_use_code_is_closed() {
        let result: Result<Claim, _> = serde_json::from_value(json!({
            "resourceType": "Claim",
            "status": "active",
            "type": {"coding": [{"code": "oral"}]},
            "use": "estimate",
            "patient": {"reference": "Patient/1"},
            "created": "2014-08-16"
        }));
        assert!(result.is_err());
    }
}
