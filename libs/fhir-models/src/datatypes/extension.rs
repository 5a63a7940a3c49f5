//! Optional Extensions Element
//!
//! The open-ended extension mechanism: ordered `(url, value[x])` pairs
//! carried by nearly every element and resource. The value slot is the full
//! FHIR open type, modeled as one choice enum.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::choice::{choice_type, Choice};
use super::complex::{
    Address, Age, Annotation, Attachment, CodeableConcept, CodeableReference, Coding,
    ContactPoint, Count, Distance, Duration, HumanName, Identifier, Money, Period, Quantity,
    Range, Ratio, Reference, SampledData, Signature, Timing,
};
use super::metadata::{Availability, ContactDetail, ExtendedContactDetail, Meta, UsageContext};

choice_type! {
    /// Extension.value[x] - the full open type
    pub enum ExtensionValue {
        "valueBase64Binary" => Base64Binary(String),
        "valueBoolean" => Boolean(bool),
        "valueCanonical" => Canonical(String),
        "valueCode" => Code(String),
        "valueDate" => Date(String),
        "valueDateTime" => DateTime(String),
        "valueDecimal" => Decimal(f64),
        "valueId" => Id(String),
        "valueInstant" => Instant(String),
        "valueInteger" => Integer(i32),
        "valueInteger64" => Integer64(String),
        "valueMarkdown" => Markdown(String),
        "valueOid" => Oid(String),
        "valuePositiveInt" => PositiveInt(u32),
        "valueString" => String(String),
        "valueTime" => Time(String),
        "valueUnsignedInt" => UnsignedInt(u32),
        "valueUri" => Uri(String),
        "valueUrl" => Url(String),
        "valueUuid" => Uuid(String),
        "valueAddress" => Address(Address),
        "valueAge" => Age(Age),
        "valueAnnotation" => Annotation(Annotation),
        "valueAttachment" => Attachment(Attachment),
        "valueCodeableConcept" => CodeableConcept(CodeableConcept),
        "valueCodeableReference" => CodeableReference(CodeableReference),
        "valueCoding" => Coding(Coding),
        "valueContactPoint" => ContactPoint(ContactPoint),
        "valueCount" => Count(Count),
        "valueDistance" => Distance(Distance),
        "valueDuration" => Duration(Duration),
        "valueHumanName" => HumanName(HumanName),
        "valueIdentifier" => Identifier(Identifier),
        "valueMoney" => Money(Money),
        "valuePeriod" => Period(Period),
        "valueQuantity" => Quantity(Quantity),
        "valueRange" => Range(Range),
        "valueRatio" => Ratio(Ratio),
        "valueReference" => Reference(Reference),
        "valueSampledData" => SampledData(SampledData),
        "valueSignature" => Signature(Signature),
        "valueTiming" => Timing(Timing),
        "valueContactDetail" => ContactDetail(ContactDetail),
        "valueUsageContext" => UsageContext(UsageContext),
        "valueAvailability" => Availability(Availability),
        "valueExtendedContactDetail" => ExtendedContactDetail(ExtendedContactDetail),
        "valueMeta" => Meta(Meta),
    }
}

/// Optional Extensions Element - found in all resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Identifies the meaning of the extension
    pub url: String,

    /// Value of extension
    #[serde(flatten)]
    pub value: Choice<ExtensionValue>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Extension {
    /// Create an extension carrying the given value.
    pub fn new(url: impl Into<String>, value: ExtensionValue) -> Self {
        Self {
            id: None,
            extension: None,
            url: url.into(),
            value: Choice::new(value),
            extensions: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extension_round_trips_typed_value() {
        let extension: Extension = serde_json::from_value(json!({
            "url": "http://hl7.org/fhir/StructureDefinition/patient-birthPlace",
            "valueAddress": {"city": "Amsterdam", "country": "NL"}
        }))
        .unwrap();

        match extension.value.get() {
            Some(ExtensionValue::Address(address)) => {
                assert_eq!(address.city.as_deref(), Some("Amsterdam"));
            }
            other => panic!("expected address value, got {other:?}"),
        }

        let json = serde_json::to_value(&extension).unwrap();
        assert_eq!(json["valueAddress"]["country"], json!("NL"));
    }

    #[test]
    fn test_complex_extension_without_value() {
        let extension: Extension = serde_json::from_value(json!({
            "url": "http://hl7.org/fhir/StructureDefinition/patient-citizenship",
            "extension": [
                {"url": "code", "valueCodeableConcept": {"text": "Dutch"}}
            ]
        }))
        .unwrap();

        assert!(extension.value.is_none());
        let nested = extension.extension.as_ref().unwrap();
        assert_eq!(nested.len(), 1);
        match nested[0].value.get() {
            Some(ExtensionValue::CodeableConcept(concept)) => {
                assert_eq!(concept.text.as_deref(), Some("Dutch"));
            }
            other => panic!("expected codeable concept, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_rejects_two_values() {
        let result: Result<Extension, _> = serde_json::from_value(json!({
            "url": "http://example.org/fhir/StructureDefinition/conflicting",
            "valueBoolean": true,
            "valueString": "also"
        }));
        assert!(result.is_err());
    }
}
