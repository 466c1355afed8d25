use std::cmp::Ordering;

use clutch_store::KvStore;
use clutch_types::{BikeId, SpecKey, VehicleRecord};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{CompareError, CompareResult};

/// One side of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// One specification row of a comparison, placeholders already applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    pub key: SpecKey,
    pub left: String,
    pub right: String,
}

/// Which record costs more, and by how much.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum PriceDifference {
    LeftDearer(f64),
    RightDearer(f64),
    Same,
}

/// Side-by-side report of two records.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub left: VehicleRecord,
    pub right: VehicleRecord,
    pub specs: Vec<SpecRow>,
    /// Cheaper side; `None` on equal prices.
    pub cheaper: Option<Side>,
    /// Higher overall rating; `None` on a tie or when either is unrated.
    pub better_rated: Option<Side>,
    pub price_difference: PriceDifference,
}

impl Comparison {
    /// Build the report for `left` against `right`.
    pub fn between(left: VehicleRecord, right: VehicleRecord) -> Self {
        let specs = SpecKey::ALL
            .into_iter()
            .map(|key| SpecRow {
                key,
                left: left.specs.display(key).to_string(),
                right: right.specs.display(key).to_string(),
            })
            .collect();

        let diff = left.price - right.price;
        let price_difference = if diff > 0.0 {
            PriceDifference::LeftDearer(diff)
        } else if diff < 0.0 {
            PriceDifference::RightDearer(-diff)
        } else {
            PriceDifference::Same
        };
        let cheaper = match price_difference {
            PriceDifference::LeftDearer(_) => Some(Side::Right),
            PriceDifference::RightDearer(_) => Some(Side::Left),
            PriceDifference::Same => None,
        };

        let better_rated = match (left.ratings.overall, right.ratings.overall) {
            (Some(l), Some(r)) => match l.partial_cmp(&r) {
                Some(Ordering::Greater) => Some(Side::Left),
                Some(Ordering::Less) => Some(Side::Right),
                _ => None,
            },
            _ => None,
        };

        Self {
            left,
            right,
            specs,
            cheaper,
            better_rated,
            price_difference,
        }
    }

    /// The record on `side`.
    pub fn record(&self, side: Side) -> &VehicleRecord {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl<S: KvStore> Catalog<S> {
    /// Compare two distinct stored records.
    pub fn compare(&self, left: &BikeId, right: &BikeId) -> CompareResult<Comparison> {
        if left == right {
            return Err(CompareError::SameRecord(left.clone()));
        }
        let records = self.list_all();
        let find = |id: &BikeId| {
            records
                .iter()
                .find(|record| &record.id == id)
                .cloned()
                .ok_or_else(|| CompareError::NotFound(id.clone()))
        };
        Ok(Comparison::between(find(left)?, find(right)?))
    }
}
