// update.rs
use crate::config::Config;
use crate::domain::ListingRecord;
use crate::inventory::{write_inventory, InventoryStats};
use crate::scraper::{enrich_records, http_client, EnrichOptions, ImageExtractor, ListingScraper};
use crate::spreadsheets::{download_csv, parse_records};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

pub struct UpdateArgs {
    pub dry_run: bool,
    /// Read the spreadsheet export from disk instead of Google Drive.
    pub csv: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Regenerates the inventory: CSV → records → photo scraping → JSON.
pub fn run_update(cfg: &Config, args: &UpdateArgs) -> Result<InventoryStats> {
    info!(
        "mode: {}",
        if args.dry_run { "DRY RUN" } else { "PRODUCTION" }
    );

    let client = http_client(&cfg.user_agent, cfg.request_timeout)?;

    // 1. Spreadsheet export
    let csv_text = match &args.csv {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => download_csv(&client, cfg.drive_file_id()?).context("downloading inventory CSV")?,
    };

    // 2. Rows
    let records = parse_records(&csv_text).context("parsing inventory CSV")?;
    if records.is_empty() {
        bail!("the CSV is empty or could not be parsed");
    }

    // 3. Photos
    info!("scraping {} listings", records.len());
    let extractor = ImageExtractor::new(cfg.max_images)?;
    let scraper = ListingScraper::new(client);
    let enriched = enrich_records(
        records,
        &scraper,
        &extractor,
        &EnrichOptions {
            placeholder: cfg.placeholder_image.clone(),
            delay: cfg.request_delay,
            pause: Box::new(std::thread::sleep),
            show_progress: true,
        },
    );

    // 4. Output
    let output = args.output.as_ref().unwrap_or(&cfg.inventory_path);
    if args.dry_run {
        warn!("--dry-run: {} was NOT written", output.display());
        print_sample(&enriched)?;
    } else {
        let meta = write_inventory(output, &enriched)
            .with_context(|| format!("writing {}", output.display()))?;
        info!("{} listings written at {}", meta.total_properties, meta.generated_at);
    }

    // 5. Stats
    let stats = InventoryStats::from_records(&enriched, &cfg.placeholder_image);
    stats.log();
    Ok(stats)
}

fn print_sample(records: &[ListingRecord]) -> Result<()> {
    if let Some(first) = records.first() {
        println!("\nFirst listing sample:");
        println!("{}", serde_json::to_string_pretty(first)?);
    }
    Ok(())
}
