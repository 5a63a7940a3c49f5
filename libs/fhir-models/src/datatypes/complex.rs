//! General-purpose FHIR R5 datatypes
//!
//! The complex value types reused by composition across resource
//! definitions. These are plain data carriers: every element-level field is
//! optional unless the specification requires it, and content beyond the
//! modeled schema (including `_field` primitive extensions) is retained in
//! the trailing flatten map.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::choice::{choice_type, Choice};
use super::code::{code_enum, DaysOfWeek};
use super::extension::Extension;

/// A reference to a code defined by a terminology system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Identity of the terminology system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Version of the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Symbol in syntax defined by the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Representation defined by the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// If this coding was chosen directly by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Coding {
    /// Create a coding from a system and a code.
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            system: Some(system.into()),
            version: None,
            code: Some(code.into()),
            display: None,
            user_selected: None,
            extensions: HashMap::new(),
        }
    }
}

/// Concept - reference to a terminology or just text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Code defined by a terminology system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<Vec<Coding>>,

    /// Plain text representation of the concept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl CodeableConcept {
    /// Get the first coded value, if any.
    pub fn first_code(&self) -> Option<&str> {
        self.coding
            .as_ref()
            .and_then(|codings| codings.iter().find_map(|c| c.code.as_deref()))
    }
}

/// Reference to a resource or a concept
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeableReference {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Reference to a concept (by class)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<CodeableConcept>,

    /// Reference to a resource (by instance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

code_enum! {
    /// Identifies the purpose for this identifier
    pub enum IdentifierUse {
        "usual" => Usual,
        "official" => Official,
        "temp" => Temp,
        "secondary" => Secondary,
        "old" => Old,
    }
}

/// An identifier intended for computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// usual | official | temp | secondary | old
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub identifier_use: Option<IdentifierUse>,

    /// Description of identifier
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<CodeableConcept>,

    /// The namespace for the identifier value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// The value that is unique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Time period when id is/was valid for use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Organization that issued id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Reference>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// A reference from one resource to another
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Literal reference, relative, internal or absolute URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Type the reference refers to (e.g. "Patient")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,

    /// Logical reference, when literal reference is not known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Box<Identifier>>,

    /// Text alternative for the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Reference {
    /// Create a literal reference such as `Patient/example`.
    pub fn literal(reference: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            reference: Some(reference.into()),
            reference_type: None,
            identifier: None,
            display: None,
            extensions: HashMap::new(),
        }
    }
}

/// Time range defined by start and end date/time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Starting time with inclusive boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// End time with inclusive boundary, if not ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

code_enum! {
    /// How the Quantity should be understood and represented
    pub enum QuantityComparator {
        "<" => LessThan,
        "<=" => LessOrEqual,
        ">=" => GreaterOrEqual,
        ">" => GreaterThan,
        "ad" => SufficientToAchieve,
    }
}

/// A measured or measurable amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Numerical value (with implicit precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// < | <= | >= | > | ad - how to understand the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<QuantityComparator>,

    /// Unit representation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// System that defines coded unit form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Coded form of the unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// A duration of time during which an organism (or a process) has existed
pub type Age = Quantity;

/// A measured or counted amount of discrete items
pub type Count = Quantity;

/// A length - a value with a unit that is a physical distance
pub type Distance = Quantity;

/// A length of time
pub type Duration = Quantity;

/// Set of values bounded by low and high
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Low limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Quantity>,

    /// High limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Quantity>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// A ratio of two Quantity values - a numerator and a denominator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Numerator value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Quantity>,

    /// Denominator value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Quantity>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// An amount of economic utility in some recognized currency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Numerical value (with implicit precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// ISO 4217 currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Content in a format defined elsewhere
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Mime type of the content, with charset etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Human language of the content (BCP-47)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Data inline, base64ed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Uri where the data can be found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of bytes of content, serialized as a JSON string (integer64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Hash of the data (sha-1, base64ed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Label to display in place of the data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Date attachment was first created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<String>,

    /// Height of the image in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Width of the image in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Number of frames if > 1 (photo)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<u32>,

    /// Length in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Number of printed pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

choice_type! {
    /// Annotation.author[x]
    pub enum AnnotationAuthor {
        "authorReference" => Reference(Reference),
        "authorString" => String(String),
    }
}

/// Text node with attribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Individual responsible for the annotation
    #[serde(flatten)]
    pub author: Choice<AnnotationAuthor>,

    /// When the annotation was made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// The annotation - text content (markdown)
    pub text: String,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

code_enum! {
    /// The use of a human name
    pub enum NameUse {
        "usual" => Usual,
        "official" => Official,
        "temp" => Temp,
        "nickname" => Nickname,
        "anonymous" => Anonymous,
        "old" => Old,
        "maiden" => Maiden,
    }
}

/// Name of a human or other living entity - parts and usage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// usual | official | temp | nickname | anonymous | old | maiden
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub name_use: Option<NameUse>,

    /// Text representation of the full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Family name (often called 'Surname')
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Given names (not always 'first'), includes middle names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<Vec<String>>,

    /// Parts that come before the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<String>>,

    /// Parts that come after the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<String>>,

    /// Time period when name was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

code_enum! {
    /// The use of an address
    pub enum AddressUse {
        "home" => Home,
        "work" => Work,
        "temp" => Temp,
        "old" => Old,
        "billing" => Billing,
    }
}

code_enum! {
    /// The type of an address (physical / postal)
    pub enum AddressType {
        "postal" => Postal,
        "physical" => Physical,
        "both" => Both,
    }
}

/// An address expressed using postal conventions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// home | work | temp | old | billing
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub address_use: Option<AddressUse>,

    /// postal | physical | both
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,

    /// Text representation of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Street name, number, direction & P.O. Box etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<String>>,

    /// Name of city, town etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// District name (aka county)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Sub-unit of country (abbreviations ok)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code for area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Country (e.g. may be ISO 3166 2 or 3 letter code)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Time period when address was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

code_enum! {
    /// Telecommunications form for contact point
    pub enum ContactPointSystem {
        "phone" => Phone,
        "fax" => Fax,
        "email" => Email,
        "pager" => Pager,
        "url" => Url,
        "sms" => Sms,
        "other" => Other,
    }
}

code_enum! {
    /// Use of contact point
    pub enum ContactPointUse {
        "home" => Home,
        "work" => Work,
        "temp" => Temp,
        "old" => Old,
        "mobile" => Mobile,
    }
}

/// Details of a technology mediated contact point (phone, fax, email, etc.)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// phone | fax | email | pager | url | sms | other
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ContactPointSystem>,

    /// The actual contact point details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// home | work | temp | old | mobile - purpose of this contact point
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub contact_point_use: Option<ContactPointUse>,

    /// Specify preferred order of use (1 = highest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    /// Time period when the contact point was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// A series of measurements taken by a device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SampledData {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Zero value and units
    pub origin: Quantity,

    /// Number of intervalUnits between samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,

    /// The measurement unit of the interval between samples
    pub interval_unit: String,

    /// Multiply data by this before adding to origin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,

    /// Lower limit of detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<f64>,

    /// Upper limit of detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<f64>,

    /// Number of sample points at each time point
    pub dimensions: u32,

    /// Decimal values with spaces, or "E" | "U" | "L", or another code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// A digital signature along with supporting context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Indication of the reason the entity signed the object(s)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub signature_type: Option<Vec<Coding>>,

    /// When the signature was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// Who signed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who: Option<Reference>,

    /// The party represented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,

    /// The technical format of the signed resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_format: Option<String>,

    /// The technical format of the signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig_format: Option<String>,

    /// The actual signature content (XML DigSig, JWS, picture, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

code_enum! {
    /// Units of time (UCUM)
    pub enum UnitsOfTime {
        "s" => Second,
        "min" => Minute,
        "h" => Hour,
        "d" => Day,
        "wk" => Week,
        "mo" => Month,
        "a" => Year,
    }
}

choice_type! {
    /// Timing.repeat.bounds[x]
    pub enum TimingRepeatBounds {
        "boundsDuration" => Duration(Duration),
        "boundsRange" => Range(Range),
        "boundsPeriod" => Period(Period),
    }
}

/// When the event is to occur
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimingRepeat {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Length/Range of lengths, or (Start and/or end) limits
    #[serde(flatten)]
    pub bounds: Choice<TimingRepeatBounds>,

    /// Number of times to repeat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// Maximum number of times to repeat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_max: Option<u32>,

    /// How long when it happens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// How long when it happens (Max)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<f64>,

    /// s | min | h | d | wk | mo | a - unit of time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<UnitsOfTime>,

    /// Indicates the number of repetitions that should occur within a period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,

    /// Event occurs up to frequencyMax times per period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<u32>,

    /// The duration to which the frequency applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<f64>,

    /// Upper limit of period (3-4 hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_max: Option<f64>,

    /// s | min | h | d | wk | mo | a - unit of time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<UnitsOfTime>,

    /// mon | tue | wed | thu | fri | sat | sun
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Vec<DaysOfWeek>>,

    /// Time of day for action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<Vec<String>>,

    /// Code for time period of occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<Vec<String>>,

    /// Minutes from event (before or after)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// A timing schedule that specifies an event that may occur multiple times
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored even if unrecognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// When the event occurs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<String>>,

    /// When the event is to occur
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<TimingRepeat>,

    /// C | BID | TID | QID | AM | PM | QD | QOD | +
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_codeable_concept() {
        let concept: CodeableConcept = serde_json::from_value(json!({
            "coding": [{
                "system": "http://loinc.org",
                "code": "15074-8",
                "display": "Glucose [Moles/volume] in Blood"
            }],
            "text": "Glucose"
        }))
        .unwrap();

        assert_eq!(concept.first_code(), Some("15074-8"));
        assert_eq!(concept.text.as_deref(), Some("Glucose"));
    }

    #[test]
    fn test_identifier_use_is_closed() {
        let result: Result<Identifier, _> = serde_json::from_value(json!({
            "use": "casual",
            "system": "urn:oid:2.16.840.1.113883.4.1",
            "value": "444222222"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_quantity_comparator_symbols() {
        let quantity: Quantity = serde_json::from_value(json!({
            "value": 5.4,
            "comparator": "<",
            "unit": "mg",
            "system": "http://unitsofmeasure.org",
            "code": "mg"
        }))
        .unwrap();
        assert_eq!(quantity.comparator, Some(QuantityComparator::LessThan));

        let json = serde_json::to_value(&quantity).unwrap();
        assert_eq!(json["comparator"], json!("<"));
    }

    #[test]
    fn test_annotation_author_choice() {
        let annotation: Annotation = serde_json::from_value(json!({
            "authorReference": {"reference": "Practitioner/example"},
            "time": "2024-02-14T09:30:00Z",
            "text": "Stable on current dose."
        }))
        .unwrap();

        match annotation.author.get() {
            Some(AnnotationAuthor::Reference(who)) => {
                assert_eq!(who.reference.as_deref(), Some("Practitioner/example"));
            }
            other => panic!("expected author reference, got {other:?}"),
        }

        let json = serde_json::to_value(&annotation).unwrap();
        assert!(json.get("authorReference").is_some());
        assert!(json.get("authorString").is_none());
    }

    #[test]
    fn test_unknown_keys_are_retained() {
        let period: Period = serde_json::from_value(json!({
            "start": "2023-01-01",
            "_start": {"id": "s1"}
        }))
        .unwrap();
        assert_eq!(period.extensions.get("_start"), Some(&json!({"id": "s1"})));

        let json = serde_json::to_value(&period).unwrap();
        assert_eq!(json["_start"], json!({"id": "s1"}));
    }
}
