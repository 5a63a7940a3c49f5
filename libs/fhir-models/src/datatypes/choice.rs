//! Choice-type (`value[x]`) element support
//!
//! A FHIR choice element is a single logical field whose JSON key carries the
//! selected type name (`valueString`, `valueQuantity`, `onsetDateTime`, ...).
//! Each group is modeled as an enum with one variant per legal type, held in a
//! [`Choice`] slot that is `#[serde(flatten)]`-ed into its parent struct so
//! the wire format keeps the flat key convention while the model guarantees
//! at most one variant is populated.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A choice-type group: one enum variant per legal element type.
///
/// Implementations are generated by the [`choice_type!`](crate::choice_type)
/// macro; the trait maps variants to and from single `(key, value)` wire
/// entries.
pub trait ChoiceType: Sized {
    /// Wire keys of every variant, e.g. `["valueQuantity", "valueString"]`.
    const KEYS: &'static [&'static str];

    /// The wire key of the populated variant.
    fn key(&self) -> &'static str;

    /// Decode a single wire entry, or `None` if the key does not belong to
    /// this group.
    fn decode_entry(key: &str, value: Value) -> Option<serde_json::Result<Self>>;

    /// Write the populated variant as a single map entry.
    fn encode_entry<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error>;
}

/// Slot holding at most one variant of a choice-type group.
///
/// Always used flattened into the parent object: an empty slot writes
/// nothing, a populated slot writes exactly one `<name><Type>` key.
/// Decoding rejects input that populates more than one key of the group.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T>(Option<T>);

impl<T> Choice<T> {
    /// An empty slot (element absent).
    pub const fn none() -> Self {
        Choice(None)
    }

    /// A slot populated with the given variant.
    pub fn new(value: T) -> Self {
        Choice(Some(value))
    }

    /// Whether the element is absent.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Whether the element is populated.
    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    /// Borrow the populated variant, if any.
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Replace the slot content, returning the previous variant.
    pub fn set(&mut self, value: T) -> Option<T> {
        self.0.replace(value)
    }

    /// Empty the slot, returning the previous variant.
    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    /// Unwrap into a plain `Option`.
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice(None)
    }
}

impl<T> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Choice(Some(value))
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        Choice(value)
    }
}

impl<T: ChoiceType> Serialize for Choice<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            None => serializer.serialize_map(Some(0))?.end(),
            Some(value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                value.encode_entry(&mut map)?;
                map.end()
            }
        }
    }
}

impl<'de, T: ChoiceType> Deserialize<'de> for Choice<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChoiceVisitor<T>(PhantomData<T>);

        impl<'de, T: ChoiceType> Visitor<'de> for ChoiceVisitor<T> {
            type Value = Choice<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an object with at most one of {:?}", T::KEYS)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut found: Option<T> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if !T::KEYS.contains(&key.as_str()) {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    }
                    if let Some(previous) = &found {
                        return Err(de::Error::custom(format_args!(
                            "choice element already populated by {}, cannot also accept {}",
                            previous.key(),
                            key
                        )));
                    }
                    let value: Value = map.next_value()?;
                    match T::decode_entry(&key, value) {
                        Some(Ok(decoded)) => found = Some(decoded),
                        Some(Err(err)) => return Err(de::Error::custom(err)),
                        None => return Err(de::Error::custom(format_args!(
                            "unhandled choice element key {key}"
                        ))),
                    }
                }
                Ok(Choice(found))
            }
        }

        // deserialize_struct lets the slot pick its keys out of a flattened
        // parent object without consuming unrelated entries.
        deserializer.deserialize_struct("Choice", T::KEYS, ChoiceVisitor(PhantomData))
    }
}

/// Define a choice-type enum and its wire mapping.
///
/// ```ignore
/// choice_type! {
///     /// Observation.value[x]
///     pub enum ObservationValue {
///         "valueQuantity" => Quantity(Quantity),
///         "valueString" => String(String),
///     }
/// }
/// ```
macro_rules! choice_type {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $key:literal => $variant:ident($ty:ty), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant($ty), )+
        }

        impl $crate::datatypes::choice::ChoiceType for $name {
            const KEYS: &'static [&'static str] = &[$($key),+];

            fn key(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $key, )+
                }
            }

            fn decode_entry(
                key: &str,
                value: serde_json::Value,
            ) -> Option<serde_json::Result<Self>> {
                match key {
                    $( $key => Some(serde_json::from_value(value).map(Self::$variant)), )+
                    _ => None,
                }
            }

            fn encode_entry<M: serde::ser::SerializeMap>(
                &self,
                map: &mut M,
            ) -> Result<(), M::Error> {
                match self {
                    $( Self::$variant(value) => map.serialize_entry($key, value), )+
                }
            }
        }
    };
}

pub(crate) use choice_type;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::collections::HashMap;

    choice_type! {
        pub enum TestValue {
            "valueString" => String(String),
            "valueBoolean" => Boolean(bool),
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,

        #[serde(flatten)]
        value: Choice<TestValue>,

        #[serde(flatten)]
        extensions: HashMap<String, Value>,
    }

    #[test]
    fn test_decode_populated_choice() {
        let holder: Holder =
            serde_json::from_value(json!({"name": "x", "valueString": "hello"})).unwrap();
        assert_eq!(
            holder.value.get(),
            Some(&TestValue::String("hello".to_string()))
        );
        assert!(holder.extensions.is_empty());
    }

    #[test]
    fn test_decode_absent_choice() {
        let holder: Holder = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert!(holder.value.is_none());
    }

    #[test]
    fn test_decode_rejects_double_population() {
        let result: Result<Holder, _> =
            serde_json::from_value(json!({"valueString": "a", "valueBoolean": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_choice_keys_do_not_leak_into_catch_all() {
        let holder: Holder =
            serde_json::from_value(json!({"valueBoolean": true, "other": 1})).unwrap();
        assert_eq!(holder.value.get(), Some(&TestValue::Boolean(true)));
        assert_eq!(holder.extensions.get("other"), Some(&json!(1)));
        assert!(!holder.extensions.contains_key("valueBoolean"));
    }

    #[test]
    fn test_encode_uses_wire_key() {
        let holder = Holder {
            name: None,
            value: Choice::new(TestValue::Boolean(false)),
            extensions: HashMap::new(),
        };
        let json = serde_json::to_value(&holder).unwrap();
        assert_eq!(json, json!({"valueBoolean": false}));
    }

    #[test]
    fn test_encode_empty_choice_writes_nothing() {
        let holder = Holder {
            name: Some("x".to_string()),
            value: Choice::none(),
            extensions: HashMap::new(),
        };
        let json = serde_json::to_value(&holder).unwrap();
        assert_eq!(json, json!({"name": "x"}));
    }
}
