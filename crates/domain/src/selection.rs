use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Sentinel accepted by every categorical filter
pub const ALL: &str = "all";

/// A categorical filter choice: either the `"all"` sentinel or one value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// `All` passes everything; `Only(v)` requires an exact match on a present value
    pub fn matches(&self, value: Option<&T>) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => value == Some(expected),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Selection<String> {
    /// String selections compare against borrowed record fields
    pub fn matches_str(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

impl<T: FromStr> Selection<T> {
    /// Empty input and the `"all"` sentinel both mean no filtering
    pub fn parse(raw: &str) -> Result<Self, T::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL {
            Ok(Self::All)
        } else {
            raw.parse().map(Self::Only)
        }
    }
}

impl<T: Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(ALL),
            Self::Only(value) => serializer.collect_str(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
