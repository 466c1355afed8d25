//! Record store for the BikeClutch catalog.
//!
//! [`Catalog`] keeps the whole vehicle list as one JSON array in a single
//! slot of a [`clutch_store::KvStore`]. Every operation re-reads the slot,
//! changes the list in memory and writes the whole list back. The store
//! holds no cache between calls.
//!
//! Storage trouble never surfaces as an error: an unreadable or corrupt
//! slot reads as an empty catalog, and a refused write is logged and
//! dropped. Missing records are reported as `None` / `false`.
//!
//! Beyond CRUD the crate provides:
//!
//! - [`RecordQuery`] -- name/brand text search and category filter
//! - [`Comparison`] -- side-by-side report of two records
//! - [`ComparisonSelection`] -- session-scoped pick of up to two records

pub mod catalog;
pub mod clock;
pub mod compare;
pub mod config;
pub mod error;
pub mod query;
pub mod seed;
pub mod selection;

pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::{Comparison, PriceDifference, Side, SpecRow};
pub use config::CatalogConfig;
pub use error::{CompareError, CompareResult};
pub use query::{featured, RecordQuery};
pub use seed::sample_records;
pub use selection::{ComparisonSelection, SelectionOutcome, SELECTION_CAPACITY};

pub use clutch_types::{
    BikeId, NewRecord, NewReview, Ratings, RecordPatch, Review, SpecKey, Specs, VehicleRecord,
};
