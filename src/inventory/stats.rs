use crate::domain::{ListingRecord, ScrapeStatus};
use tracing::info;

/// End-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryStats {
    pub total: usize,
    pub with_photos: usize,
    pub with_placeholder: usize,
    pub errors: usize,
}

impl InventoryStats {
    pub fn from_records(records: &[ListingRecord], placeholder: &str) -> Self {
        let with_photos = records
            .iter()
            .filter(|r| r.has_real_photos(placeholder))
            .count();
        let errors = records
            .iter()
            .filter(|r| r.scrape_status == Some(ScrapeStatus::Error))
            .count();

        Self {
            total: records.len(),
            with_photos,
            with_placeholder: records.len() - with_photos,
            errors,
        }
    }

    pub fn log(&self) {
        info!("Total listings    : {}", self.total);
        info!("With real photos  : {}", self.with_photos);
        info!("With placeholder  : {}", self.with_placeholder);
        info!("With fetch errors : {}", self.errors);
    }
}
