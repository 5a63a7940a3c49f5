//! FHIR OperationOutcome resource
//!
//! A collection of error, warning, or information messages that result from
//! a system action.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{code_enum, CodeableConcept, Extension, Meta, Narrative};

code_enum! {
    /// How the issue affects the success of the action
    pub enum IssueSeverity {
        "fatal" => Fatal,
        "error" => Error,
        "warning" => Warning,
        "information" => Information,
        "success" => Success,
    }
}

/// Information about the success/failure of an action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    /// Resource type - always "OperationOutcome"
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

    /// A single issue associated with the action
    pub issue: Vec<OperationOutcomeIssue>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "OperationOutcome".to_string()
}

/// A single issue associated with the action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcomeIssue {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// fatal | error | warning | information | success
    pub severity: IssueSeverity,

    /// Error or warning code, from the IssueType value set
    pub code: String,

    /// Additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CodeableConcept>,

    /// Additional diagnostic information about the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,

    /// Deprecated: path of element(s) related to issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<String>>,

    /// FHIRPath of element(s) related to issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Vec<String>>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl OperationOutcome {
    /// Whether any issue is an error or worse.
    pub fn has_errors(&self) -> bool {
        self.issue
            .iter()
            .any(|i| matches!(i.severity, IssueSeverity::Fatal | IssueSeverity::Error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_operation_outcome() {
        let outcome: OperationOutcome = serde_json::from_value(json!({
            "resourceType": "OperationOutcome",
            "id": "101",
            "issue": [{
                "severity": "error",
                "code": "code-invalid",
                "details": {"text": "The code 'W' is not known and not legal in this context"},
                "expression": ["Person.gender"]
            }]
        }))
        .unwrap();

        assert_eq!(outcome.issue.len(), 1);
        assert_eq!(outcome.issue[0].severity, IssueSeverity::Error);
        assert!(outcome.has_errors());
    }

    #[test]
    fn test_success_is_not_an_error() {
        let outcome: OperationOutcome = serde_json::from_value(json!({
            "resourceType": "OperationOutcome",
            "issue": [{"severity": "success", "code": "informational"}]
        }))
        .unwrap();
        assert!(!outcome.has_errors());
    }
}
