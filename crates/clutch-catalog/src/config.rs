use serde::{Deserialize, Serialize};

/// Slot holding the persisted record list.
pub const DEFAULT_STORAGE_KEY: &str = "bikeClutch_bikes";
/// Slot holding the comparison selection in the session store.
pub const DEFAULT_SELECTION_KEY: &str = "compareList";

/// Configuration for the record store and comparison selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Slot holding the JSON array of records.
    pub storage_key: String,
    /// Slot holding the comparison selection.
    pub selection_key: String,
    /// Write the built-in sample records when the slot is empty.
    pub seed_on_first_read: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            selection_key: DEFAULT_SELECTION_KEY.to_string(),
            seed_on_first_read: true,
        }
    }
}

impl CatalogConfig {
    /// A configuration that starts from a genuinely empty catalog.
    pub fn unseeded() -> Self {
        Self {
            seed_on_first_read: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = CatalogConfig::default();
        assert_eq!(c.storage_key, "bikeClutch_bikes");
        assert_eq!(c.selection_key, "compareList");
        assert!(c.seed_on_first_read);
    }

    #[test]
    fn unseeded_keeps_keys() {
        let c = CatalogConfig::unseeded();
        assert!(!c.seed_on_first_read);
        assert_eq!(c.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let c: CatalogConfig = serde_json::from_str(r#"{"storage_key":"bikes"}"#).unwrap();
        assert_eq!(c.storage_key, "bikes");
        assert_eq!(c.selection_key, DEFAULT_SELECTION_KEY);
        assert!(c.seed_on_first_read);
    }
}
