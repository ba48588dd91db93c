use crate::domain::ListingRecord;
use crate::scraper::ScraperError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryMeta {
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    #[serde(rename = "totalProperties")]
    pub total_properties: usize,
    #[serde(rename = "scriptVersion")]
    pub script_version: String,
}

impl InventoryMeta {
    pub fn new(generated_at: DateTime<Utc>, total_properties: usize) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_properties,
            script_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Serialize)]
struct InventoryOut<'a> {
    #[serde(rename = "_meta")]
    meta: &'a InventoryMeta,
    properties: &'a [ListingRecord],
}

#[derive(Deserialize)]
struct InventoryIn {
    #[serde(rename = "_meta")]
    _meta: Option<InventoryMeta>,
    properties: Vec<ListingRecord>,
}

/// Writes the regenerated inventory, replacing the previous file in one rename.
pub fn write_inventory(path: &Path, records: &[ListingRecord]) -> Result<InventoryMeta, ScraperError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let meta = InventoryMeta::new(Utc::now(), records.len());
    let tmp = path.with_extension("json.tmp");

    {
        let mut writer = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer_pretty(
            &mut writer,
            &InventoryOut {
                meta: &meta,
                properties: records,
            },
        )?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    fs::rename(&tmp, path)?;

    info!("JSON written to {}", path.display());
    Ok(meta)
}

pub fn load_inventory(path: &Path) -> Result<Vec<ListingRecord>, ScraperError> {
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;

    // Older site builds imported a bare array; both layouts are accepted on read.
    let records = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => serde_json::from_value::<InventoryIn>(other)?.properties,
    };
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScrapeStatus;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("inventory_test_{nanos}"))
            .join(name)
    }

    #[test]
    fn writes_wrapped_document() {
        let path = temp_path("data/inventory.json");
        let mut record = ListingRecord::from_pairs([("nid", "BF-1"), ("url", "https://x.co/1")]);
        record.images = vec!["https://x.co/1.jpg".into()];
        record.scrape_status = Some(ScrapeStatus::Ok);
        record.scraped_at = Some(Utc::now());

        let meta = write_inventory(&path, &[record.clone()]).unwrap();
        assert_eq!(meta.total_properties, 1);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["_meta"]["totalProperties"], 1);
        assert_eq!(raw["_meta"]["scriptVersion"], env!("CARGO_PKG_VERSION"));
        assert_eq!(raw["properties"][0]["_scrapeStatus"], "ok");
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_inventory(&path).unwrap();
        assert_eq!(loaded[0].field("nid").as_deref(), Some("BF-1"));
        assert_eq!(loaded[0].images, record.images);
    }

    #[test]
    fn reads_bare_array_layout() {
        let path = temp_path("legacy.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"[{"nid": "BF-9", "barrio": "Suba", "precio": 210000000, "images": []}]"#,
        )
        .unwrap();

        let loaded = load_inventory(&path).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].field("precio").as_deref(), Some("210000000"));
    }

    #[test]
    fn reads_spanish_status_tags() {
        let path = temp_path("old_tags.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{
                "_meta": {"generatedAt": "2025-11-02T10:00:00.000Z", "totalProperties": 3, "scriptVersion": "1.0.0"},
                "properties": [
                    {"nid": "BF-1", "images": ["/p.svg"], "_scrapeStatus": "sin_url"},
                    {"nid": "BF-2", "images": ["/p.svg"], "_scrapeStatus": "sin_fotos"},
                    {"nid": "BF-3", "images": ["https://x.co/3.jpg"], "_scrapeStatus": "ok"}
                ]
            }"#,
        )
        .unwrap();

        let loaded = load_inventory(&path).unwrap();

        let statuses: Vec<_> = loaded.iter().map(|r| r.scrape_status).collect();
        assert_eq!(
            statuses,
            [
                Some(ScrapeStatus::NoUrl),
                Some(ScrapeStatus::NoPhotos),
                Some(ScrapeStatus::Ok)
            ]
        );
    }

    #[test]
    fn bad_record_reports_the_real_cause() {
        let path = temp_path("bad_tag.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{"properties": [{"nid": "BF-1", "_scrapeStatus": "pendiente"}]}"#,
        )
        .unwrap();

        let err = load_inventory(&path).unwrap_err().to_string();

        assert!(err.contains("pendiente"), "{err}");
        assert!(!err.contains("untagged"), "{err}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_inventory(&temp_path("nope.json")).unwrap_err();
        assert!(matches!(err, ScraperError::Io(_)));
    }
}
