//! Closed code types
//!
//! Status and code elements with a required binding are modeled as closed
//! enums: decoding rejects literals outside the value set, and `FromStr`
//! gives the same validation for manually constructed values.

/// Define a closed code enum with its wire literals.
///
/// Generates `as_str`, `Display`, a validated `FromStr` returning
/// [`Error::InvalidCode`](crate::error::Error::InvalidCode), and serde
/// implementations that serialize the wire literal and reject anything
/// outside the declared set.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $literal:literal => $variant:ident, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every legal code of this type.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// The wire literal for this code.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $literal, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $literal => Ok(Self::$variant), )+
                    other => Err($crate::error::Error::InvalidCode {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use code_enum;

code_enum! {
    /// The gender of a person used for administrative purposes
    pub enum AdministrativeGender {
        "male" => Male,
        "female" => Female,
        "other" => Other,
        "unknown" => Unknown,
    }
}

code_enum! {
    /// Days of the week
    pub enum DaysOfWeek {
        "mon" => Monday,
        "tue" => Tuesday,
        "wed" => Wednesday,
        "thu" => Thursday,
        "fri" => Friday,
        "sat" => Saturday,
        "sun" => Sunday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_round_trips_through_str() {
        for gender in AdministrativeGender::ALL {
            assert_eq!(gender.as_str().parse::<AdministrativeGender>().unwrap(), *gender);
        }
    }

    #[test]
    fn test_rejects_unknown_literal() {
        let err = "both".parse::<AdministrativeGender>().unwrap_err();
        assert!(matches!(err, Error::InvalidCode { kind: "AdministrativeGender", .. }));
    }

    #[test]
    fn test_serde_uses_wire_literal() {
        let json = serde_json::to_value(DaysOfWeek::Wednesday).unwrap();
        assert_eq!(json, serde_json::json!("wed"));

        let day: DaysOfWeek = serde_json::from_value(serde_json::json!("sun")).unwrap();
        assert_eq!(day, DaysOfWeek::Sunday);
    }

    #[test]
    fn test_serde_rejects_out_of_value_set_literal() {
        let result: Result<DaysOfWeek, _> = serde_json::from_value(serde_json::json!("monday"));
        assert!(result.is_err());
    }
}
