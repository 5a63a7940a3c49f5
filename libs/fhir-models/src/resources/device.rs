//! FHIR Device resource
//!
//! A type of a manufactured item that is used in the provision of
//! healthcare without being substantially changed through that activity.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::datatypes::{
    choice_type, code_enum, Annotation, Attachment, Choice, CodeableConcept, CodeableReference,
    ContactPoint, Count, Duration, Extension, Identifier, Meta, Narrative, Quantity, Range,
    Reference,
};

code_enum! {
    /// The record status of the device
    pub enum DeviceStatus {
        "active" => Active,
        "inactive" => Inactive,
        "entered-in-error" => EnteredInError,
    }
}

code_enum! {
    /// The type of name the device is referred by
    pub enum DeviceNameType {
        "registered-name" => RegisteredName,
        "user-friendly-name" => UserFriendlyName,
        "patient-reported-name" => PatientReportedName,
    }
}

code_enum! {
    /// Codes to identify how UDI data was entered
    pub enum UdiEntryType {
        "barcode" => Barcode,
        "rfid" => Rfid,
        "manual" => Manual,
        "card" => Card,
        "self-reported" => SelfReported,
        "electronic-transmission" => ElectronicTransmission,
        "unknown" => Unknown,
    }
}

choice_type! {
    /// Device.property.value[x]
    pub enum DevicePropertyValue {
        "valueQuantity" => Quantity(Quantity),
        "valueCodeableConcept" => CodeableConcept(CodeableConcept),
        "valueString" => String(String),
        "valueBoolean" => Boolean(bool),
        "valueInteger" => Integer(i32),
        "valueRange" => Range(Range),
        "valueAttachment" => Attachment(Attachment),
    }
}

/// Item used in healthcare
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Resource type - always "Device"
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

    /// Instance identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// The name used to display by default when the device is referenced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The reference to the definition for the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<CodeableReference>,

    /// Unique Device Identifier (UDI) Barcode string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi_carrier: Option<Vec<DeviceUdiCarrier>>,

    /// active | inactive | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,

    /// lost | damaged | destroyed | available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<CodeableConcept>,

    /// An identifier that supports traceability to the event during which material
    /// in this product from one or more biological entities was obtained or pooled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biological_source_event: Option<Identifier>,

    /// Name of device manufacturer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// Date when the device was made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_date: Option<String>,

    /// Date and time of expiry of this device (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Lot number of manufacture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,

    /// Serial number assigned by the manufacturer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// The name or names of the device as known to the manufacturer and/or patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<DeviceName>>,

    /// The manufacturer's model number for the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,

    /// The part number or catalog number of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,

    /// Indicates a high-level grouping of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// The kind or type of device
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<Vec<CodeableConcept>>,

    /// The actual design of the device or software version running on the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Vec<DeviceVersion>>,

    /// Identifies the standards, specifications, or formal guidances for the
    /// capabilities supported by the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conforms_to: Option<Vec<DeviceConformsTo>>,

    /// Inherent, essentially fixed, characteristics of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Vec<DeviceProperty>>,

    /// The designated condition for performing a task with the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CodeableConcept>,

    /// The series of occurrences that repeats during the operation of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Count>,

    /// A measurement of time during the device's operation (e.g. days, hours, mins)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,

    /// Organization responsible for device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,

    /// Details for human/organization for support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactPoint>>,

    /// Where the device is found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    /// Network address to contact device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Technical endpoints providing access to electronic services provided by the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,

    /// Linked device acting as a communication/data collector, translator or controller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Vec<CodeableReference>>,

    /// Device notes and comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Safety Characteristics of Device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<Vec<CodeableConcept>>,

    /// The higher level or encompassing device that this device is a logical part of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Device".to_string()
}

/// Unique Device Identifier (UDI) Barcode string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUdiCarrier {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Mandatory fixed portion of UDI
    pub device_identifier: String,

    /// UDI Issuing Organization
    pub issuer: String,

    /// Regional UDI authority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    /// UDI Machine Readable Barcode String
    #[serde(rename = "carrierAIDC", skip_serializing_if = "Option::is_none")]
    pub carrier_aidc: Option<String>,

    /// UDI Human Readable Barcode String
    #[serde(rename = "carrierHRF", skip_serializing_if = "Option::is_none")]
    pub carrier_hrf: Option<String>,

    /// barcode | rfid | manual | card | self-reported | electronic-transmission | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<UdiEntryType>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// The name or names of the device as known to the manufacturer and/or patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceName {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The term that names the device
    pub value: String,

    /// registered-name | user-friendly-name | patient-reported-name
    #[serde(rename = "type")]
    pub name_type: DeviceNameType,

    /// The preferred device name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// The actual design of the device or software version running on the device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceVersion {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The type of the device version, e.g. manufacturer, approved, internal
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub version_type: Option<CodeableConcept>,

    /// The hardware or software module of the device to which the version applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Identifier>,

    /// The date the version was installed on the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_date: Option<String>,

    /// The version text
    pub value: String,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Identifies the standards, specifications, or formal guidances
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConformsTo {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Describes the common type of the standard, specification, or formal guidance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Identifies the standard, specification, or formal guidance that the device adheres to
    pub specification: CodeableConcept,

    /// Specific form or variant of the standard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Inherent, essentially fixed, characteristics of the device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProperty {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Code that specifies the property being represented
    #[serde(rename = "type")]
    pub property_type: CodeableConcept,

    /// Value of the property
    #[serde(flatten)]
    pub value: Choice<DevicePropertyValue>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_device() {
        let device: Device = serde_json::from_value(json!({
            "resourceType": "Device",
            "id": "example",
            "identifier": [{"system": "http://goodcare.org/devices/id", "value": "345675"}],
            "status": "active",
            "manufacturer": "Acme Devices, Inc",
            "name": [{"value": "PM/Acme Patient Monitor", "type": "user-friendly-name"}],
            "serialNumber": "AMID-342135-8464"
        }))
        .unwrap();

        assert_eq!(device.status, Some(DeviceStatus::Active));
        let names = device.name.as_ref().unwrap();
        assert_eq!(names[0].name_type, DeviceNameType::UserFriendlyName);
    }

    #[test]
    fn test_udi_carrier() {
        let device: Device = serde_json::from_value(json!({
            "resourceType": "Device",
            "udiCarrier": [{
                "deviceIdentifier": "09504000059118",
                "issuer": "http://hl7.org/fhir/NamingSystem/gs1-di",
                "carrierHRF": "(01)09504000059118(17)141120(10)7654321D(21)10987654d321",
                "entryType": "barcode"
            }]
        }))
        .unwrap();

        let udi = &device.udi_carrier.as_ref().unwrap()[0];
        assert_eq!(udi.entry_type, Some(UdiEntryType::Barcode));
        assert_eq!(udi.device_identifier, "09504000059118");
    }

    #[test]
    fn test_property_value_choice() {
        let device: Device = serde_json::from_value(json!({
            "resourceType": "Device",
            "property": [{
                "type": {"coding": [{"code": "530"}], "text": "Number of channels"},
                "valueQuantity": {"value": 8}
            }]
        }))
        .unwrap();

        let property = &device.property.as_ref().unwrap()[0];
        assert!(matches!(
            property.value.get(),
            Some(DevicePropertyValue::Quantity(_))
        ));
    }
}
