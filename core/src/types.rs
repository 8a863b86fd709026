//! Shared primitive types used across the analytics core.
//!
//! RULE: Categorical fields are closed enums. Free-form strings only
//! exist at the parse boundary (FromStr / serde), never inside the core.

use crate::error::DashError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A transaction identifier. 1-based, unique within a dataset.
pub type TxnId = u32;

/// Whole currency units. Source amounts are integers, so every sum is too.
pub type Amount = u64;

/// Risk score at or above which a transaction is flagged.
pub const SUSPICIOUS_THRESHOLD: f64 = 0.70;

/// Calendar month abbreviations, indexed by `month0()`.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// Draw order. NEVER reorder: the generator indexes into this.
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East  => "East",
            Self::West  => "West",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxnType {
    Online,
    #[serde(rename = "POS")]
    Pos,
    Transfer,
}

impl TxnType {
    /// Draw order. NEVER reorder: the generator indexes into this.
    pub const ALL: [TxnType; 3] = [TxnType::Online, TxnType::Pos, TxnType::Transfer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online   => "Online",
            Self::Pos      => "POS",
            Self::Transfer => "Transfer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    Normal,
    Suspicious,
}

impl RiskStatus {
    pub const ALL: [RiskStatus; 2] = [RiskStatus::Normal, RiskStatus::Suspicious];

    /// Status is a pure function of the risk score.
    pub fn from_score(risk_score: f64) -> Self {
        if risk_score >= SUSPICIOUS_THRESHOLD {
            Self::Suspicious
        } else {
            Self::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal     => "Normal",
            Self::Suspicious => "Suspicious",
        }
    }
}

macro_rules! string_enum {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DashError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| DashError::UnknownVariant {
                        kind:  $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

string_enum!(Region, "region");
string_enum!(TxnType, "transaction type");
string_enum!(RiskStatus, "risk level");

/// A filter dimension: either unconstrained or pinned to one value.
/// Text form is `"All"` or the value's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

// No `T: Default` bound.
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All     => true,
            Self::Only(v) => v == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All     => f.write_str("All"),
            Self::Only(v) => v.fmt(f),
        }
    }
}

impl<T: FromStr<Err = DashError>> FromStr for Selection<T> {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr<Err = DashError>> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_threshold_is_inclusive() {
        assert_eq!(RiskStatus::from_score(0.69), RiskStatus::Normal);
        assert_eq!(RiskStatus::from_score(0.70), RiskStatus::Suspicious);
        assert_eq!(RiskStatus::from_score(1.0), RiskStatus::Suspicious);
    }

    #[test]
    fn enums_parse_display_names() {
        assert_eq!("POS".parse::<TxnType>().unwrap(), TxnType::Pos);
        assert_eq!("West".parse::<Region>().unwrap(), Region::West);
        assert!("NortH".parse::<Region>().is_err());
        assert!("Pos".parse::<TxnType>().is_err());
    }

    #[test]
    fn selection_round_trips_through_text() {
        let all: Selection<Region> = "All".parse().unwrap();
        assert_eq!(all, Selection::All);
        let south: Selection<Region> = "South".parse().unwrap();
        assert_eq!(south, Selection::Only(Region::South));
        assert_eq!(south.to_string(), "South");
        assert_eq!(
            serde_json::to_string(&Selection::Only(TxnType::Pos)).unwrap(),
            "\"POS\""
        );
    }

    #[test]
    fn selection_all_admits_everything() {
        let sel: Selection<Region> = Selection::All;
        assert!(Region::ALL.iter().all(|r| sel.admits(r)));
        let only = Selection::Only(Region::East);
        assert!(only.admits(&Region::East));
        assert!(!only.admits(&Region::North));
    }
}
