//! Game edition selection and version filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::CreatureRecord;
use crate::error::DomainError;

/// Edition names a roster entry may list.
pub const KNOWN_EDITIONS: [&str; 3] = ["ruby", "sapphire", "emerald"];

/// The version filter a user can select.
///
/// `All` is a sentinel meaning no filtering; every other key stands for a
/// single edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VersionKey {
    #[default]
    All,
    Ruby,
    Sapphire,
    Emerald,
}

impl VersionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Ruby => "ruby",
            Self::Sapphire => "sapphire",
            Self::Emerald => "emerald",
        }
    }

    /// Edition names selected by this key. Empty for `All`.
    pub fn editions(&self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::Ruby => &["ruby"],
            Self::Sapphire => &["sapphire"],
            Self::Emerald => &["emerald"],
        }
    }

    /// Whether a record listing `versions` is visible under this key.
    pub fn admits(&self, versions: &[String]) -> bool {
        match self {
            Self::All => true,
            _ => versions
                .iter()
                .any(|version| self.editions().contains(&version.as_str())),
        }
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "ruby" => Ok(Self::Ruby),
            "sapphire" => Ok(Self::Sapphire),
            "emerald" => Ok(Self::Emerald),
            other => Err(DomainError::parse(format!("unknown version key: {other}"))),
        }
    }
}

/// Narrow `records` to those available under `key`.
///
/// `VersionKey::All` hands the input back untouched.
pub fn filter_by_version(records: Vec<CreatureRecord>, key: VersionKey) -> Vec<CreatureRecord> {
    if key == VersionKey::All {
        return records;
    }

    records
        .into_iter()
        .filter(|record| key.admits(&record.entry.versions))
        .collect()
}
