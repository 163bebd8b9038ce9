use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_key {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Catalog keys
define_key!(ZoneId);

/// Remote location-area identifier.
///
/// The directory accepts either the numeric id or the slug, so the catalog
/// may carry both forms; both are kept as their path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLocationAreaId", into = "String")]
pub struct LocationAreaId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLocationAreaId {
    Number(u64),
    Text(String),
}

impl From<RawLocationAreaId> for LocationAreaId {
    fn from(raw: RawLocationAreaId) -> Self {
        match raw {
            RawLocationAreaId::Number(n) => Self(n.to_string()),
            RawLocationAreaId::Text(s) => Self(s),
        }
    }
}

impl LocationAreaId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Path segment used when addressing the location-area endpoint.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationAreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LocationAreaId> for String {
    fn from(value: LocationAreaId) -> Self {
        value.0
    }
}
