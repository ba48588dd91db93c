mod enrich;
mod extract;
mod models;
mod scraper;
mod scraper_error;
mod urls;

pub use enrich::{enrich_records, EnrichOptions};
pub use extract::ImageExtractor;
pub use scraper::{http_client, ListingScraper};
pub use scraper_error::ScraperError;
