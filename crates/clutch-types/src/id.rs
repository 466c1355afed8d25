use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Prefix carried by every minted id, kept from the seed ids (`b1`..`b4`).
const ID_PREFIX: char = 'b';

/// Identifier of a vehicle record.
///
/// Ids are opaque strings on the wire. The store mints new ids with
/// [`BikeId::mint`]; callers never choose one. Seed records use short ids
/// such as `b1`, which parse like any other id.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BikeId(String);

impl BikeId {
    /// Mint a new time-ordered id (`b` followed by a UUID v7 in simple form).
    pub fn mint() -> Self {
        Self(format!("{ID_PREFIX}{}", uuid::Uuid::now_v7().simple()))
    }

    /// Short sequential id (`b1`, `b2`, ...) used by the built-in records.
    pub fn numbered(n: u32) -> Self {
        Self(format!("{ID_PREFIX}{n}"))
    }

    /// Wrap an existing id string. Rejects empty or whitespace-bearing ids.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BikeId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for BikeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BikeId({})", self.0)
    }
}

impl fmt::Display for BikeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
