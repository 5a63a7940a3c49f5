//! FHIR Account resource
//!
//! A financial tool for tracking value accrued for a particular purpose.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    code_enum, CodeableConcept, CodeableReference, Extension, Identifier, Meta, Money, Narrative,
    Period, Reference,
};

code_enum! {
    /// Indicates whether the account is available to be used
    pub enum AccountStatus {
        "active" => Active,
        "inactive" => Inactive,
        "entered-in-error" => EnteredInError,
        "on-hold" => OnHold,
        "unknown" => Unknown,
    }
}

/// Tracks balance, charges, for patient or cost center
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Resource type - always "Account"
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

    /// Account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | inactive | entered-in-error | on-hold | unknown
    pub status: AccountStatus,

    /// Tracks the lifecycle of the account through the billing process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_status: Option<CodeableConcept>,

    /// E.g. patient, expense, depreciation
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<CodeableConcept>,

    /// Human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The entity that caused the expenses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Vec<Reference>>,

    /// Transaction window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_period: Option<Period>,

    /// The party(s) that are responsible for covering the payment of this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Vec<AccountCoverage>>,

    /// Entity managing the Account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,

    /// Explanation of purpose/use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The parties ultimately responsible for balancing the Account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantor: Option<Vec<AccountGuarantor>>,

    /// The list of diagnoses relevant to this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<AccountDiagnosis>>,

    /// The list of procedures relevant to this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Vec<AccountProcedure>>,

    /// Other associated accounts related to this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_account: Option<Vec<AccountRelatedAccount>>,

    /// The base or default currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<CodeableConcept>,

    /// Calculated account balance(s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Vec<AccountBalance>>,

    /// Time the balance amount was calculated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Account".to_string()
}

/// The party(s) that are responsible for covering the payment of this account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountCoverage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The party(s), such as insurances, that may contribute to the payment of this account
    pub coverage: Reference,

    /// The priority of the coverage in the context of this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// The parties ultimately responsible for balancing the Account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountGuarantor {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Responsible entity
    pub party: Reference,

    /// Credit or other hold applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_hold: Option<bool>,

    /// Guarantee account during
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// The list of diagnoses relevant to this account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDiagnosis {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Ranking of the diagnosis (for each type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,

    /// The diagnosis relevant to the account
    pub condition: CodeableReference,

    /// Date of the diagnosis (when coded diagnosis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_diagnosis: Option<String>,

    /// Type that this diagnosis has relevant to the account
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub diagnosis_type: Option<Vec<CodeableConcept>>,

    /// Diagnosis present on Admission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_admission: Option<bool>,

    /// Package Code specific for billing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<Vec<CodeableConcept>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// The list of procedures relevant to this account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountProcedure {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Ranking of the procedure (for each type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,

    /// The procedure relevant to the account
    pub code: CodeableReference,

    /// Date of the procedure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_service: Option<String>,

    /// How this procedure value should be used in charging the account
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub procedure_type: Option<Vec<CodeableConcept>>,

    /// Package Code specific for billing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<Vec<CodeableConcept>>,

    /// Any devices that were associated with the procedure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Vec<Reference>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Other associated accounts related to this account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRelatedAccount {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Relationship of the associated Account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<CodeableConcept>,

    /// Reference to an associated Account
    pub account: Reference,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Calculated account balance(s)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Who is expected to pay this part of the balance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<CodeableConcept>,

    /// current | 30 | 60 | 90 | 120
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<CodeableConcept>,

    /// Estimated balance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<bool>,

    /// Calculated amount
    pub amount: Money,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Account {
    /// Whether the account is currently available for use.
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Guarantors as a slice.
    pub fn guarantors(&self) -> &[AccountGuarantor] {
        self.guarantor.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_account() {
        let account: Account = serde_json::from_value(json!({
            "resourceType": "Account",
            "id": "example",
            "status": "active",
            "name": "HACC Funded Billing for Peter James Chalmers",
            "subject": [{"reference": "Patient/example", "display": "Peter James Chalmers"}],
            "servicePeriod": {"start": "2016-01-01", "end": "2016-06-30"}
        }))
        .unwrap();

        assert_eq!(account.resource_type, "Account");
        assert_eq!(account.status, AccountStatus::Active);
        assert!(account.is_active());
        assert_eq!(
            account.subject.as_ref().unwrap()[0].reference.as_deref(),
            Some("Patient/example")
        );
    }

    #[test]
    fn test_guarantor_party() {
        let account: Account = serde_json::from_value(json!({
            "resourceType": "Account",
            "status": "on-hold",
            "guarantor": [{
                "party": {"reference": "RelatedPerson/peter", "display": "Peter James Chalmers"},
                "onHold": false
            }]
        }))
        .unwrap();

        assert_eq!(account.status, AccountStatus::OnHold);
        let guarantors = account.guarantors();
        assert_eq!(guarantors.len(), 1);
        assert_eq!(
            guarantors[0].party.reference.as_deref(),
            Some("RelatedPerson/peter")
        );
    }

    #[test]
    fn test_status_is_closed() {
        let result: Result<Account, _> = serde_json::from_value(json!({
            "resourceType": "Account",
            "status": "frozen"
        }));
        assert!(result.is_err());
    }
}
