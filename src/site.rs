use crate::domain::{ListingRecord, Property};
use crate::inventory::load_inventory;
use crate::scraper::ScraperError;
use std::path::Path;
use tracing::info;

/// What the catalog server holds in memory: the inventory as loaded, plus the card view of it.
pub struct Site {
    pub records: Vec<ListingRecord>,
    pub properties: Vec<Property>,
    pub placeholder: String,
}

impl Site {
    pub fn new(records: Vec<ListingRecord>, placeholder: impl Into<String>) -> Self {
        let properties = records
            .iter()
            .enumerate()
            .map(|(i, r)| Property::from_record(r, i))
            .collect();

        Self {
            records,
            properties,
            placeholder: placeholder.into(),
        }
    }

    pub fn load(path: &Path, placeholder: impl Into<String>) -> Result<Self, ScraperError> {
        let records = load_inventory(path)?;
        info!("loaded {} listings from {}", records.len(), path.display());
        Ok(Self::new(records, placeholder))
    }
}
