pub mod listing;
pub mod logic;
pub mod property;

pub use listing::{ListingRecord, ScrapeStatus};
pub use property::Property;
