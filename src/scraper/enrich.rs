// enrich.rs
use crate::domain::{ListingRecord, ScrapeStatus};
use crate::scraper::extract::ImageExtractor;
use crate::scraper::scraper::{parse_listing_url, scrape_images, PageSource};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{info, warn};

pub struct EnrichOptions {
    /// Inserted when a listing ends up without photos.
    pub placeholder: String,
    /// Pause between consecutive page requests.
    pub delay: Duration,
    /// How the pause is taken; `std::thread::sleep` outside tests.
    pub pause: Box<dyn Fn(Duration)>,
    pub show_progress: bool,
}

/// Scrapes photos for every record, in order, one request at a time.
///
/// Every returned record has a non-empty `images` list, a status and a timestamp.
/// Failures never abort the run; they're recorded on the listing.
pub fn enrich_records<S: PageSource + ?Sized>(
    records: Vec<ListingRecord>,
    source: &S,
    extractor: &ImageExtractor,
    opts: &EnrichOptions,
) -> Vec<ListingRecord> {
    let total = records.len();
    let pb = progress_bar(total, opts.show_progress);
    let mut out = Vec::with_capacity(total);

    for (i, mut record) in records.into_iter().enumerate() {
        let label = record.label(i);
        let position = format!("[{:>3}/{total}]", i + 1);
        let mut requested = false;

        let (mut images, status) = match record.source_url() {
            None => {
                pb.suspend(|| warn!("{position} {label}: no URL, using placeholder"));
                (Vec::new(), ScrapeStatus::NoUrl)
            }
            Some(url) => match parse_listing_url(&url).and_then(|base| {
                requested = true;
                scrape_images(source, extractor, &base)
            }) {
                Ok(images) if !images.is_empty() => {
                    pb.suspend(|| info!("{position} {label}: {} photo(s)", images.len()));
                    (images, ScrapeStatus::Ok)
                }
                Ok(_) => {
                    pb.suspend(|| warn!("{position} {label}: 0 photos, using placeholder"));
                    (Vec::new(), ScrapeStatus::NoPhotos)
                }
                Err(e) => {
                    pb.suspend(|| {
                        warn!("{position} {label}: error ({}), using placeholder", e.short_reason())
                    });
                    (Vec::new(), ScrapeStatus::Error)
                }
            },
        };

        if images.is_empty() {
            images.push(opts.placeholder.clone());
        }

        record.images = images;
        record.scrape_status = Some(status);
        record.scraped_at = Some(Utc::now());
        out.push(record);
        pb.inc(1);

        // only after a real request, never after the last row
        if requested && i + 1 < total && !opts.delay.is_zero() {
            (opts.pause)(opts.delay);
        }
    }

    pb.finish_and_clear();
    out
}

fn progress_bar(total: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40} {pos}/{len} (eta {eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    pb.set_style(style);
    pb
}
