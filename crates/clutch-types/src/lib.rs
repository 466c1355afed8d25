//! Foundation types for the BikeClutch catalog.
//!
//! Every other BikeClutch crate depends on `clutch-types`. The types here
//! define the persisted JSON layout of the catalog, so field names follow
//! the camelCase wire format rather than Rust naming.
//!
//! # Key Types
//!
//! - [`BikeId`]: store-minted record identifier
//! - [`VehicleRecord`]: one catalog entry as persisted
//! - [`NewRecord`]: input to an add, before an id exists
//! - [`RecordPatch`]: typed shallow-merge update
//! - [`Review`] / [`NewReview`]: stored review and review submission
//! - [`Specs`] / [`SpecKey`]: fixed set of specification fields
//! - [`Ratings`]: entered ratings plus the derived overall rating

pub mod error;
pub mod id;
pub mod patch;
pub mod ratings;
pub mod record;
pub mod review;
pub mod specs;

pub use error::TypeError;
pub use id::BikeId;
pub use patch::RecordPatch;
pub use ratings::{Ratings, RATING_MAX, RATING_MIN};
pub use record::{NewRecord, VehicleRecord};
pub use review::{NewReview, Review};
pub use specs::{SpecKey, Specs, SPEC_PLACEHOLDER};
