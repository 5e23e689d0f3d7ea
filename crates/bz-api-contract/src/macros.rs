// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Declarative helpers shared by the contract modules

/// Declares a string-valued API enumeration.
///
/// Every variant maps to its exact wire string. An extra `Unknown` variant
/// absorbs values added server-side after this client was built. It is the
/// `Default`, and serializing it is an error.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// A value not known to this client
            #[default]
            #[serde(other, skip_serializing)]
            Unknown,
        }

        impl $name {
            /// Wire representation of the value
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown => "Unknown",
                }
            }

            /// All known values in declaration order
            pub fn values() -> &'static [$name] {
                &[ $( Self::$variant, )+ ]
            }

            /// Whether the value is one this client knows about
            pub const fn is_valid(&self) -> bool {
                !matches!(self, Self::Unknown)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ApiContractError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::values()
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::error::ApiContractError::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use api_enum;
