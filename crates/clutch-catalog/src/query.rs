use clutch_store::KvStore;
use clutch_types::VehicleRecord;

use crate::catalog::Catalog;

/// Category filter value that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// Text search plus category filter over the catalog.
///
/// `text` matches case-insensitively anywhere in a record's name or brand.
/// `category` must match exactly; `None` or `"all"` disables the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub text: Option<String>,
    pub category: Option<String>,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether `record` passes both filters.
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        self.matches_text(record) && self.matches_category(record)
    }

    fn matches_text(&self, record: &VehicleRecord) -> bool {
        let Some(text) = self.text.as_deref().map(str::to_lowercase) else {
            return true;
        };
        record.name.to_lowercase().contains(&text) || record.brand.to_lowercase().contains(&text)
    }

    fn matches_category(&self, record: &VehicleRecord) -> bool {
        match self.category.as_deref() {
            None => true,
            Some(category) if category.eq_ignore_ascii_case(ALL_CATEGORIES) => true,
            Some(category) => record.category == category,
        }
    }

    /// Keep the matching records, preserving order.
    pub fn apply(&self, records: Vec<VehicleRecord>) -> Vec<VehicleRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// The first `n` records, as shown in the featured row.
pub fn featured(records: &[VehicleRecord], n: usize) -> &[VehicleRecord] {
    &records[..n.min(records.len())]
}

impl<S: KvStore> Catalog<S> {
    /// Records matching `query`, in persisted order.
    pub fn search(&self, query: &RecordQuery) -> Vec<VehicleRecord> {
        query.apply(self.list_all())
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for record in self.list_all() {
            if !categories.contains(&record.category) {
                categories.push(record.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clutch_store::InMemoryKvStore;

    fn catalog() -> Catalog<InMemoryKvStore> {
        Catalog::new(InMemoryKvStore::new())
    }

    fn names(records: &[VehicleRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(catalog().search(&RecordQuery::new()).len(), 4);
    }

    #[test]
    fn text_matches_name_case_insensitively() {
        let found = catalog().search(&RecordQuery::new().text("duke"));
        assert_eq!(names(&found), vec!["KTM 390 Duke"]);
    }

    #[test]
    fn text_matches_brand() {
        let found = catalog().search(&RecordQuery::new().text("royal"));
        assert_eq!(names(&found), vec!["Royal Enfield Classic 350"]);
    }

    #[test]
    fn empty_text_matches_everything() {
        assert_eq!(catalog().search(&RecordQuery::new().text("")).len(), 4);
    }

    #[test]
    fn category_filters_exactly() {
        let found = catalog().search(&RecordQuery::new().category("Electric"));
        assert_eq!(names(&found), vec!["Ola S1 Pro"]);
        assert!(catalog()
            .search(&RecordQuery::new().category("electric"))
            .is_empty());
    }

    #[test]
    fn all_category_disables_filter() {
        assert_eq!(catalog().search(&RecordQuery::new().category("All")).len(), 4);
    }

    #[test]
    fn text_and_category_combine() {
        let query = RecordQuery::new().text("a").category("Sports");
        assert_eq!(names(&catalog().search(&query)), vec!["Yamaha R15 V4"]);
    }

    #[test]
    fn featured_clamps_to_length() {
        let records = catalog().list_all();
        assert_eq!(featured(&records, 2).len(), 2);
        assert_eq!(featured(&records, 10).len(), 4);
    }

    #[test]
    fn categories_in_first_seen_order() {
        assert_eq!(
            catalog().categories(),
            vec!["Sports", "Cruiser", "Naked", "Electric"]
        );
    }
}
