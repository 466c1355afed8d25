use clutch_store::KvStore;
use clutch_types::{BikeId, NewRecord, NewReview, RecordPatch, VehicleRecord};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::CatalogConfig;
use crate::seed::sample_records;

/// The persisted vehicle catalog.
///
/// Wraps a [`KvStore`] and treats one slot of it as the whole catalog.
/// Operations are synchronous read-modify-write cycles over that slot.
pub struct Catalog<S> {
    store: S,
    clock: Box<dyn Clock>,
    config: CatalogConfig,
}

impl<S: KvStore> Catalog<S> {
    /// Open a catalog over `store` with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, CatalogConfig::default())
    }

    /// Open a catalog over `store` with an explicit configuration.
    pub fn with_config(store: S, config: CatalogConfig) -> Self {
        Self {
            store,
            clock: Box::new(SystemClock),
            config,
        }
    }

    /// Replace the clock used to date reviews.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The underlying storage port.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ---- Reads ----

    /// Every record, in persisted order.
    ///
    /// Seeds an empty slot with the sample catalog first (when configured).
    /// Unreadable or corrupt storage yields an empty list.
    pub fn list_all(&self) -> Vec<VehicleRecord> {
        self.seed_if_empty();
        self.load()
    }

    /// The record with `id`, if any.
    pub fn get_by_id(&self, id: &BikeId) -> Option<VehicleRecord> {
        self.list_all().into_iter().find(|record| &record.id == id)
    }

    // ---- Mutations ----

    /// Store a new record under a freshly minted id and return it.
    pub fn add(&self, record: NewRecord) -> VehicleRecord {
        let mut records = self.list_all();
        let id = mint_unique(&records);
        let record = record.into_record(id);
        records.push(record.clone());
        self.save(&records);
        debug!(id = %record.id, "record added");
        record
    }

    /// Merge `patch` over the stored record with the same id.
    ///
    /// `overall` is recomputed from reviews only when the patch replaces
    /// the ratings block; other fields never touch it.
    ///
    /// Returns `false`, changing nothing, when no such record exists.
    pub fn update(&self, patch: RecordPatch) -> bool {
        let mut records = self.list_all();
        let Some(record) = records.iter_mut().find(|r| r.id == patch.id) else {
            debug!(id = %patch.id, "update target not found");
            return false;
        };
        let ratings_replaced = patch.ratings.is_some();
        patch.apply_to(record);
        // A replaced ratings block must not override the review mean.
        if ratings_replaced {
            record.refresh_overall();
        }
        let id = record.id.clone();
        self.save(&records);
        debug!(%id, "record updated");
        true
    }

    /// Remove the record with `id`. Absent ids are a no-op.
    pub fn delete(&self, id: &BikeId) {
        let mut records = self.list_all();
        let before = records.len();
        records.retain(|record| &record.id != id);
        self.save(&records);
        debug!(%id, removed = before - records.len(), "record delete");
    }

    /// Append a dated review to `bike_id` and recompute its overall rating.
    ///
    /// Returns `false` when the record does not exist.
    pub fn add_review(&self, bike_id: &BikeId, review: NewReview) -> bool {
        let mut records = self.list_all();
        let Some(record) = records.iter_mut().find(|r| &r.id == bike_id) else {
            debug!(id = %bike_id, "review target not found");
            return false;
        };
        record.reviews.push(review.dated(self.clock.today()));
        record.refresh_overall();
        debug!(
            id = %bike_id,
            reviews = record.reviews.len(),
            overall = ?record.ratings.overall,
            "review added"
        );
        self.save(&records);
        true
    }

    // ---- Persistence ----

    fn seed_if_empty(&self) {
        if !self.config.seed_on_first_read {
            return;
        }
        match self.store.get(&self.config.storage_key) {
            Ok(Some(bytes)) if !bytes.is_empty() => {}
            Ok(_) => {
                let seed = sample_records();
                debug!(count = seed.len(), key = %self.config.storage_key, "seeding catalog");
                self.save(&seed);
            }
            Err(e) => warn!(error = %e, "catalog storage unreadable; not seeding"),
        }
    }

    fn load(&self) -> Vec<VehicleRecord> {
        let bytes = match self.store.get(&self.config.storage_key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "catalog storage unreadable; treating as empty");
                return Vec::new();
            }
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(error = %e, "catalog data is corrupt; treating as empty");
            Vec::new()
        })
    }

    fn save(&self, records: &[VehicleRecord]) {
        let bytes = match serde_json::to_vec(records) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "failed to encode catalog; write discarded");
                return;
            }
        };
        match self.store.set(&self.config.storage_key, &bytes) {
            Ok(()) => debug!(count = records.len(), bytes = bytes.len(), "catalog persisted"),
            Err(e) => warn!(error = %e, "catalog write failed; write discarded"),
        }
    }
}

fn mint_unique(records: &[VehicleRecord]) -> BikeId {
    loop {
        let id = BikeId::mint();
        if records.iter().all(|record| record.id != id) {
            return id;
        }
    }
}

impl<S> std::fmt::Debug for Catalog<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use clutch_store::InMemoryKvStore;
    use clutch_types::{Ratings, SpecKey, Specs};
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    const KEY: &str = "bikeClutch_bikes";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> Catalog<Arc<InMemoryKvStore>> {
        Catalog::new(Arc::new(InMemoryKvStore::new())).with_clock(FixedClock(date(2026, 3, 1)))
    }

    fn empty() -> Catalog<Arc<InMemoryKvStore>> {
        Catalog::with_config(Arc::new(InMemoryKvStore::new()), CatalogConfig::unseeded())
            .with_clock(FixedClock(date(2026, 3, 1)))
    }

    fn new_bike(name: &str) -> NewRecord {
        let mut bike = NewRecord::new(name, "Bajaj", "Naked", 150_000.0, "ns200.png");
        bike.specs = Specs::default().with(SpecKey::Power, "24 bhp");
        bike.ratings = Ratings::new(4.0, 3.5, 3.5, Some(3.8));
        bike
    }

    fn id(s: &str) -> BikeId {
        BikeId::parse(s).unwrap()
    }

    // -----------------------------------------------------------------------
    // Seeding and reads
    // -----------------------------------------------------------------------

    #[test]
    fn first_list_seeds_sample_catalog() {
        let catalog = seeded();
        let records = catalog.list_all();
        assert_eq!(records.len(), 4);
        assert!(catalog.store().contains(KEY).unwrap());
    }

    #[test]
    fn seeding_happens_once() {
        let catalog = seeded();
        let first = catalog.list_all();
        let second = catalog.list_all();
        assert_eq!(first, second);
        assert_eq!(second.len(), 4);
    }

    #[test]
    fn seed_is_not_reapplied_after_deleting_everything() {
        let catalog = seeded();
        for record in catalog.list_all() {
            catalog.delete(&record.id);
        }
        assert!(catalog.list_all().is_empty());
    }

    #[test]
    fn empty_slot_value_is_reseeded() {
        let store = Arc::new(InMemoryKvStore::with_slot(KEY, Vec::<u8>::new()));
        let catalog = Catalog::new(store);
        assert_eq!(catalog.list_all().len(), 4);
    }

    #[test]
    fn corrupt_slot_reads_as_empty_without_reseeding() {
        let store = Arc::new(InMemoryKvStore::with_slot(KEY, "{not json"));
        let catalog = Catalog::new(Arc::clone(&store));
        assert!(catalog.list_all().is_empty());
        assert_eq!(store.get(KEY).unwrap().unwrap(), b"{not json");
    }

    #[test]
    fn unseeded_catalog_starts_empty() {
        assert!(empty().list_all().is_empty());
    }

    #[test]
    fn read_only_storage_serves_nothing_when_unseeded() {
        let store = Arc::new(InMemoryKvStore::new());
        store.set_read_only(true);
        let catalog = Catalog::new(Arc::clone(&store));
        assert!(catalog.list_all().is_empty());
    }

    #[test]
    fn get_by_id_finds_seed_record() {
        let catalog = seeded();
        let bike = catalog.get_by_id(&id("b3")).expect("seed record b3");
        assert_eq!(bike.name, "KTM 390 Duke");
        assert!(catalog.get_by_id(&id("b99")).is_none());
    }

    #[test]
    fn slot_holds_json_array() {
        let catalog = seeded();
        catalog.list_all();
        let bytes = catalog.store().get(KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(4));
        assert_eq!(value[0]["specs"]["fuelCapacity"], "11 L");
    }

    // -----------------------------------------------------------------------
    // Add
    // -----------------------------------------------------------------------

    #[test]
    fn add_appends_with_minted_id() {
        let catalog = seeded();
        let stored = catalog.add(new_bike("Pulsar NS200"));
        let records = catalog.list_all();
        assert_eq!(records.len(), 5);
        assert_eq!(records.last(), Some(&stored));
        assert!(!["b1", "b2", "b3", "b4"].contains(&stored.id.as_str()));
    }

    #[test]
    fn add_applies_defaults() {
        let catalog = empty();
        let stored = catalog.add(new_bike("Pulsar NS200"));
        assert_eq!(stored.gallery, vec!["ns200.png".to_string()]);
        assert!(stored.reviews.is_empty());
        assert_eq!(catalog.get_by_id(&stored.id), Some(stored));
    }

    #[test]
    fn add_on_read_only_storage_returns_record_but_does_not_persist() {
        let store = Arc::new(InMemoryKvStore::new());
        let catalog = Catalog::with_config(Arc::clone(&store), CatalogConfig::unseeded());
        store.set_read_only(true);
        let stored = catalog.add(new_bike("Ghost"));
        assert_eq!(stored.name, "Ghost");
        assert!(catalog.get_by_id(&stored.id).is_none());
    }

    proptest! {
        #[test]
        fn added_ids_are_pairwise_distinct(names in prop::collection::vec("[a-z]{1,8}", 1..12)) {
            let catalog = empty();
            let ids: Vec<BikeId> = names.iter().map(|n| catalog.add(new_bike(n)).id).collect();
            let unique: HashSet<&BikeId> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
            prop_assert_eq!(catalog.list_all().len(), names.len());
        }
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    #[test]
    fn update_price_leaves_everything_else() {
        let catalog = seeded();
        let before = catalog.get_by_id(&id("b2")).unwrap();
        assert!(catalog.update(RecordPatch::new(id("b2")).price(999.0)));

        let mut after = catalog.get_by_id(&id("b2")).unwrap();
        assert_eq!(after.price, 999.0);
        after.price = before.price;
        assert_eq!(after, before);
    }

    #[test]
    fn non_rating_update_keeps_stored_overall() {
        let mut stale = sample_records();
        stale[1].ratings.overall = Some(3.9);
        let store = Arc::new(InMemoryKvStore::new());
        store.set(KEY, &serde_json::to_vec(&stale).unwrap()).unwrap();
        let catalog = Catalog::new(Arc::clone(&store));

        assert!(catalog.update(RecordPatch::new(id("b2")).price(999.0).name("Classic")));
        let bike = catalog.get_by_id(&id("b2")).unwrap();
        assert_eq!(bike.price, 999.0);
        assert_eq!(bike.ratings.overall, Some(3.9));
    }

    #[test]
    fn update_missing_record_is_a_reported_no_op() {
        let catalog = seeded();
        let before = catalog.list_all();
        assert!(!catalog.update(RecordPatch::new(id("b404")).price(1.0)));
        assert_eq!(catalog.list_all(), before);
    }

    #[test]
    fn update_replaces_specs_wholesale() {
        let catalog = seeded();
        let specs = Specs::default().with(SpecKey::Engine, "400cc");
        assert!(catalog.update(RecordPatch::new(id("b3")).specs(specs)));
        let bike = catalog.get_by_id(&id("b3")).unwrap();
        assert_eq!(bike.specs.get(SpecKey::Engine), Some("400cc"));
        assert_eq!(bike.specs.get(SpecKey::Torque), None);
    }

    #[test]
    fn update_cannot_override_review_mean() {
        let catalog = seeded();
        let ratings = Ratings::new(1.0, 1.0, 1.0, Some(1.0));
        assert!(catalog.update(RecordPatch::new(id("b1")).ratings(ratings)));
        let bike = catalog.get_by_id(&id("b1")).unwrap();
        assert_eq!(bike.ratings.performance, 1.0);
        assert_eq!(bike.ratings.overall, Some(4.2));
    }

    #[test]
    fn update_without_reviews_keeps_given_overall() {
        let catalog = seeded();
        let ratings = Ratings::new(4.0, 4.0, 4.0, None);
        assert!(catalog.update(RecordPatch::new(id("b3")).ratings(ratings)));
        assert_eq!(catalog.get_by_id(&id("b3")).unwrap().ratings.overall, None);
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_removes_record() {
        let catalog = seeded();
        catalog.delete(&id("b2"));
        let ids: Vec<String> = catalog.list_all().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["b1", "b3", "b4"]);
    }

    #[test]
    fn delete_twice_is_harmless() {
        let catalog = seeded();
        catalog.delete(&id("b2"));
        let after_first = catalog.list_all();
        catalog.delete(&id("b2"));
        assert_eq!(catalog.list_all(), after_first);
    }

    // -----------------------------------------------------------------------
    // Reviews
    // -----------------------------------------------------------------------

    #[test]
    fn add_review_recomputes_mean() {
        let catalog = empty();
        let bike = catalog.add(new_bike("Mean Machine"));
        assert!(catalog.add_review(&bike.id, NewReview::new("a", 4.0, "")));
        assert!(catalog.add_review(&bike.id, NewReview::new("b", 5.0, "")));
        assert!(catalog.add_review(&bike.id, NewReview::new("c", 3.0, "ok")));

        let stored = catalog.get_by_id(&bike.id).unwrap();
        assert_eq!(stored.ratings.overall, Some(4.0));
        let users: Vec<&str> = stored.reviews.iter().map(|r| r.user.as_str()).collect();
        assert_eq!(users, vec!["a", "b", "c"]);
    }

    #[test]
    fn add_review_stamps_clock_date() {
        let catalog = seeded();
        assert!(catalog.add_review(&id("b3"), NewReview::new("Asha", 4.5, "Hooligan")));
        let bike = catalog.get_by_id(&id("b3")).unwrap();
        assert_eq!(bike.reviews.len(), 1);
        assert_eq!(bike.reviews[0].date, date(2026, 3, 1));
    }

    #[test]
    fn first_review_overwrites_entered_overall() {
        let catalog = seeded();
        assert_eq!(catalog.get_by_id(&id("b4")).unwrap().ratings.overall, Some(4.2));
        assert!(catalog.add_review(&id("b4"), NewReview::new("Kiran", 2.0, "Range anxiety")));
        assert_eq!(catalog.get_by_id(&id("b4")).unwrap().ratings.overall, Some(2.0));
    }

    #[test]
    fn add_review_to_missing_record_fails() {
        let catalog = seeded();
        let before = catalog.list_all();
        assert!(!catalog.add_review(&id("b404"), NewReview::new("x", 5.0, "")));
        assert_eq!(catalog.list_all(), before);
    }

    #[test]
    fn add_review_on_read_only_storage_is_not_reflected() {
        let catalog = seeded();
        catalog.list_all();
        catalog.store().set_read_only(true);
        assert!(catalog.add_review(&id("b1"), NewReview::new("x", 1.0, "")));
        assert_eq!(catalog.get_by_id(&id("b1")).unwrap().reviews.len(), 1);
    }

    #[test]
    fn custom_storage_key_is_used() {
        let store = Arc::new(InMemoryKvStore::new());
        let config = CatalogConfig {
            storage_key: "garage".into(),
            ..Default::default()
        };
        let catalog = Catalog::with_config(Arc::clone(&store), config);
        catalog.list_all();
        assert_eq!(store.keys(), vec!["garage".to_string()]);
    }

    #[test]
    fn file_backed_catalog_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let added = {
            let catalog = Catalog::new(clutch_store::FileKvStore::open(dir.path()).unwrap());
            let added = catalog.add(new_bike("NS200"));
            assert!(catalog.add_review(&added.id, NewReview::new("Asha", 4.0, "Punchy")));
            added
        };

        let reopened = Catalog::new(clutch_store::FileKvStore::open(dir.path()).unwrap());
        let records = reopened.list_all();
        assert_eq!(records.len(), 5);
        let stored = reopened.get_by_id(&added.id).unwrap();
        assert_eq!(stored.reviews.len(), 1);
        assert_eq!(stored.ratings.overall, Some(4.0));
        assert!(dir.path().join(format!("{KEY}.json")).exists());
    }
}
