//! FHIR Consent resource
//!
//! A record of a healthcare consumer's choices or choices made on their
//! behalf by a third party.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    code_enum, Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Narrative,
    Period, Reference,
};

code_enum! {
    /// Indicates the state of the consent
    pub enum ConsentState {
        "draft" => Draft,
        "active" => Active,
        "inactive" => Inactive,
        "not-done" => NotDone,
        "entered-in-error" => EnteredInError,
        "unknown" => Unknown,
    }
}

code_enum! {
    /// How a rule statement is applied
    pub enum ConsentProvisionType {
        "deny" => Deny,
        "permit" => Permit,
    }
}

code_enum! {
    /// How a resource reference is interpreted when testing consent restrictions
    pub enum ConsentDataMeaning {
        "instance" => Instance,
        "related" => Related,
        "dependents" => Dependents,
        "authoredby" => AuthoredBy,
    }
}

/// A healthcare consumer's choices to permit or deny recipients or roles to
/// perform actions for specific purposes and periods of time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    /// Resource type - always "Consent"
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

    /// Identifier for this record (external references)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// draft | active | inactive | not-done | entered-in-error | unknown
    pub status: ConsentState,

    /// Classification of the consent statement - for indexing/retrieval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Who the consent applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Fully executed date of the consent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Effective period for this Consent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Who is granting rights according to the policy and rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grantor: Option<Vec<Reference>>,

    /// Who is agreeing to the policy and rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grantee: Option<Vec<Reference>>,

    /// Consent workflow management
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<Vec<Reference>>,

    /// Consent Enforcer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<Vec<Reference>>,

    /// Source from which this consent is taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_attachment: Option<Vec<Attachment>>,

    /// Source from which this consent is taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<Vec<Reference>>,

    /// Regulations establishing base Consent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory_basis: Option<Vec<CodeableConcept>>,

    /// Computable version of the backing policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_basis: Option<ConsentPolicyBasis>,

    /// Human Readable Policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_text: Option<Vec<Reference>>,

    /// Consent Verified by patient or family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Vec<ConsentVerification>>,

    /// deny | permit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<ConsentProvisionType>,

    /// Constraints to the base Consent.policyRule/Consent.policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision: Option<Vec<ConsentProvision>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Consent".to_string()
}

/// Computable version of the backing policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentPolicyBasis {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reference backing policy resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    /// URL to a computable backing policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Consent Verified by patient or family
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentVerification {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Has been verified
    pub verified: bool,

    /// Business case of verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_type: Option<CodeableConcept>,

    /// Person conducting verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<Reference>,

    /// Person who verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_with: Option<Reference>,

    /// When consent verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_date: Option<Vec<String>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Constraints to the base Consent.policyRule/Consent.policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentProvision {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Timeframe for this provision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Who|what controlled by this provision (or group, by role)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Vec<ConsentProvisionActor>>,

    /// Actions controlled by this provision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<CodeableConcept>>,

    /// Security Labels that define affected resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_label: Option<Vec<Coding>>,

    /// Context of activities covered by this provision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Vec<Coding>>,

    /// e.g. Resource Type, Profile, CDA, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<Vec<Coding>>,

    /// e.g. Resource Type, Profile, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<Vec<Coding>>,

    /// e.g. LOINC or SNOMED CT code, etc. in the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<CodeableConcept>>,

    /// Timeframe for data controlled by this provision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_period: Option<Period>,

    /// Data controlled by this provision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ConsentProvisionData>>,

    /// Nested Exception Provisions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision: Option<Vec<ConsentProvision>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Who|what controlled by this provision (or group, by role)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentProvisionActor {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// How the actor is involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Resource for the actor (or group, by role)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Data controlled by this provision
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentProvisionData {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// instance | related | dependents | authoredby
    pub meaning: ConsentDataMeaning,

    /// The actual data reference
    pub reference: Reference,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_consent() {
        let consent: Consent = serde_json::from_value(json!({
            "resourceType": "Consent",
            "id": "consent-example-basic",
            "status": "active",
            "category": [{
                "coding": [{
                    "system": "http://loinc.org",
                    "code": "59284-0",
                    "display": "Patient Consent"
                }]
            }],
            "subject": {"reference": "Patient/f001", "display": "P. van de Heuvel"},
            "date": "2016-05-11",
            "decision": "permit",
            "provision": [{
                "period": {"start": "1964-01-01", "end": "2016-06-10"}
            }]
        }))
        .unwrap();

        assert_eq!(consent.status, ConsentState::Active);
        assert_eq!(consent.decision, Some(ConsentProvisionType::Permit));
        assert_eq!(consent.provision.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_nested_provisions() {
        let consent: Consent = serde_json::from_value(json!({
            "resourceType": "Consent",
            "status": "active",
            "decision": "deny",
            "provision": [{
                "actor": [{
                    "role": {"coding": [{"code": "PRCP"}]},
                    "reference": {"reference": "Practitioner/f001"}
                }],
                "provision": [{
                    "data": [{
                        "meaning": "related",
                        "reference": {"reference": "Task/example3"}
                    }]
                }]
            }]
        }))
        .unwrap();

        let outer = &consent.provision.as_ref().unwrap()[0];
        let inner = &outer.provision.as_ref().unwrap()[0];
        let data = &inner.data.as_ref().unwrap()[0];
        assert_eq!(data.meaning, ConsentDataMeaning::Related);
    }

    #[test]
    fn test_verification_requires_verified_flag() {
        let result: Result<Consent, _> = serde_json::from_value(json!({
            "resourceType": "Consent",
            "status": "active",
            "verification": [{"verifiedBy": {"reference": "Patient/example"}}]
        }));
        assert!(result.is_err());
    }
}
