//! Declarative macros for response models
//!
//! `open_enum!` declares a string enumeration that keeps unrecognized
//! values instead of failing. `resource!` declares a response model, its
//! decode metadata sidecar, and the field table the shared decoder walks.

/// Declare a string-backed enumeration with an `Unknown(String)` fallback.
///
/// Each generated type:
/// - Serializes/deserializes as a plain string
/// - Never fails to decode: unlisted values land in `Unknown`
/// - Implements `From<&str>`, `Display`, `Default` and comparison with `&str`
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// A value this version of the crate does not know about.
            #[serde(untagged)]
            Unknown(String),
        }

        impl $name {
            /// Every named variant, in declaration order
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// The wire value
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Whether the value is one of the named variants
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unknown(String::new())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// JSON key for a declared field: the explicit tag, or the field name.
macro_rules! field_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident $key:literal) => {
        $key
    };
}

macro_rules! field_required {
    (required) => {
        true
    };
    (optional) => {
        false
    };
}

/// Declare a response model and its metadata sidecar.
///
/// ```text
/// resource! {
///     /// An account balance.
///     pub struct AccountBalance => AccountBalanceJson {
///         /// The account identifier.
///         required id: String,
///         required kind: AccountBalanceType as "type",
///     }
/// }
/// ```
///
/// `required` fields are expected in every payload; their absence is an
/// error only under [`RequiredFields::Strict`](crate::decode::RequiredFields).
macro_rules! resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $json:ident {
            $(
                $(#[$fmeta:meta])*
                $req:ident $field:ident : $ty:ty $(as $key:literal)?,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, serde::Serialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                $(#[serde(rename = $key)])?
                pub $field: $ty,
            )+
            /// Presence, raw bytes and unrecognized keys from the decoded payload.
            #[serde(skip)]
            pub json: $json,
        }

        #[doc = concat!("Decode metadata for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $json {
            $(
                #[doc = concat!("Metadata for `", stringify!($field), "`.")]
                pub $field: $crate::decode::Field,
            )+
            /// The complete payload, as received.
            pub raw: String,
            /// Keys present in the payload with no declared field.
            pub extras: $crate::decode::Extras,
        }

        // Equality covers declared fields only; two values decoded from
        // differently formatted payloads still compare equal.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)+
            }
        }

        impl $crate::decode::Resource for $name {
            type Json = $json;

            const NAME: &'static str = stringify!($name);

            const FIELDS: &'static [$crate::decode::FieldSpec] = &[
                $($crate::decode::FieldSpec::new(
                    field_key!($field $($key)?),
                    field_required!($req),
                ),)+
            ];

            fn from_reader(mut reader: $crate::decode::ObjectReader<'_>) -> $crate::Result<Self> {
                $(
                    let $field = reader.field::<$ty>(
                        field_key!($field $($key)?),
                        field_required!($req),
                    )?;
                )+
                let (raw, extras) = reader.finish()?;
                Ok(Self {
                    json: $json {
                        $($field: $field.1,)+
                        raw,
                        extras,
                    },
                    $($field: $field.0,)+
                })
            }

            fn json(&self) -> &$json {
                &self.json
            }
        }

        impl $crate::decode::ResourceJson for $json {
            fn field(&self, key: &str) -> Option<&$crate::decode::Field> {
                $(
                    if key == field_key!($field $($key)?) {
                        return Some(&self.$field);
                    }
                )+
                None
            }

            fn raw(&self) -> &str {
                &self.raw
            }

            fn extras(&self) -> &$crate::decode::Extras {
                &self.extras
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::decode::deserialize_resource(deserializer)
            }
        }
    };
}
