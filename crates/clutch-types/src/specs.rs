use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Shown in place of a missing or blank specification value.
pub const SPEC_PLACEHOLDER: &str = "—";

/// The fixed set of specification fields a record can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecKey {
    Engine,
    Displacement,
    Power,
    Torque,
    Mileage,
    FuelCapacity,
    KerbWeight,
}

impl SpecKey {
    /// All keys in display order.
    pub const ALL: [SpecKey; 7] = [
        SpecKey::Engine,
        SpecKey::Displacement,
        SpecKey::Power,
        SpecKey::Torque,
        SpecKey::Mileage,
        SpecKey::FuelCapacity,
        SpecKey::KerbWeight,
    ];

    /// Wire name of the key inside the persisted `specs` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Displacement => "displacement",
            Self::Power => "power",
            Self::Torque => "torque",
            Self::Mileage => "mileage",
            Self::FuelCapacity => "fuelCapacity",
            Self::KerbWeight => "kerbWeight",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Engine => "Engine",
            Self::Displacement => "Displacement",
            Self::Power => "Power",
            Self::Torque => "Torque",
            Self::Mileage => "Mileage",
            Self::FuelCapacity => "Fuel capacity",
            Self::KerbWeight => "Kerb weight",
        }
    }
}

impl fmt::Display for SpecKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecKey {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypeError::UnknownSpecKey(s.to_string()))
    }
}

/// Free-text specification values, one optional slot per [`SpecKey`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torque: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kerb_weight: Option<String>,
}

impl Specs {
    fn slot(&self, key: SpecKey) -> &Option<String> {
        match key {
            SpecKey::Engine => &self.engine,
            SpecKey::Displacement => &self.displacement,
            SpecKey::Power => &self.power,
            SpecKey::Torque => &self.torque,
            SpecKey::Mileage => &self.mileage,
            SpecKey::FuelCapacity => &self.fuel_capacity,
            SpecKey::KerbWeight => &self.kerb_weight,
        }
    }

    fn slot_mut(&mut self, key: SpecKey) -> &mut Option<String> {
        match key {
            SpecKey::Engine => &mut self.engine,
            SpecKey::Displacement => &mut self.displacement,
            SpecKey::Power => &mut self.power,
            SpecKey::Torque => &mut self.torque,
            SpecKey::Mileage => &mut self.mileage,
            SpecKey::FuelCapacity => &mut self.fuel_capacity,
            SpecKey::KerbWeight => &mut self.kerb_weight,
        }
    }

    /// The value for `key`, or `None` when missing or blank.
    pub fn get(&self, key: SpecKey) -> Option<&str> {
        self.slot(key)
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    /// The value for `key`, or [`SPEC_PLACEHOLDER`].
    pub fn display(&self, key: SpecKey) -> &str {
        self.get(key).unwrap_or(SPEC_PLACEHOLDER)
    }

    /// Set (or clear, with an empty string) the value for `key`.
    pub fn set(&mut self, key: SpecKey, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(key) = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
    }

    /// Builder-style [`Specs::set`].
    pub fn with(mut self, key: SpecKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Iterate `(key, display value)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (SpecKey, &str)> + '_ {
        SpecKey::ALL.into_iter().map(move |key| (key, self.display(key)))
    }
}
