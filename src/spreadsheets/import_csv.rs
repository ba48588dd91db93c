use crate::domain::listing::{ListingRecord, URL_COLUMNS};
use crate::scraper::ScraperError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// `" Área M2 "` → `"área_m2"`.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('\u{feff}').trim().to_lowercase();
    WHITESPACE.replace_all(&trimmed, "_").into_owned()
}

/// Parses the spreadsheet export into listing records.
///
/// The first row is the header. Blank rows are skipped, cells are trimmed, and rows
/// with a different cell count than the header are kept (missing cells are left out,
/// extra cells dropped) with a warning.
pub fn parse_records(text: &str) -> Result<Vec<ListingRecord>, ScraperError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        // 1-based, counting the header line
        let line = i + 2;
        let row = row?;

        if row.iter().all(str::is_empty) {
            continue;
        }

        if row.len() != headers.len() {
            warn!(
                "CSV row {line}: expected {} fields, found {}",
                headers.len(),
                row.len()
            );
        }

        records.push(ListingRecord::from_pairs(
            headers.iter().map(String::as_str).zip(row.iter()),
        ));
    }

    info!("CSV parsed: {} listings found", records.len());

    if !URL_COLUMNS.iter().any(|c| headers.iter().any(|h| h == c)) {
        warn!(
            "no 'url' column in the CSV, photo scraping will not work. Available columns: {}",
            headers.join(", ")
        );
    }

    Ok(records)
}
