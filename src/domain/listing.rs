// src/domain/listing.rs

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Keys the enrichment step owns. Spreadsheet columns with these names are dropped
/// so they can't shadow the enriched values.
pub const RESERVED_KEYS: [&str; 3] = ["images", "_scrapeStatus", "_scrapedAt"];

/// Column aliases tried in order when looking for a listing's label.
pub const LABEL_COLUMNS: [&str; 3] = ["nid", "id", "codigo"];

/// Column aliases tried in order when looking for a listing's source page.
pub const URL_COLUMNS: [&str; 3] = ["url", "link", "enlace"];

/// Outcome of scraping one listing, as written to the inventory file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrapeStatus {
    Ok,
    // older inventory files spell these in Spanish
    #[serde(alias = "sin_url")]
    NoUrl,
    #[serde(alias = "sin_fotos")]
    NoPhotos,
    Error,
}

/// One spreadsheet row plus whatever enrichment added to it.
///
/// The spreadsheet columns are open-ended, so they stay a plain ordered map and are
/// flattened back into the same JSON object as the enrichment fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(flatten)]
    pub fields: Map<String, Value>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(
        rename = "_scrapeStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub scrape_status: Option<ScrapeStatus>,

    #[serde(
        rename = "_scrapedAt",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_millis"
    )]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl ListingRecord {
    /// Builds a record from (column, cell) pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Map::new();
        for (key, value) in pairs {
            let key = key.into();
            if key.is_empty() || RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            fields.insert(key, Value::String(value.into()));
        }

        Self {
            fields,
            ..Self::default()
        }
    }

    /// Returns the trimmed text of a column, or `None` if it's missing or blank.
    /// Numbers are rendered as text so older inventories with numeric prices still read.
    pub fn field(&self, name: &str) -> Option<String> {
        let text = match self.fields.get(name)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn first_field(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.field(name))
    }

    /// Human label for logs: first of nid / id / codigo, else `#<position>`.
    pub fn label(&self, index: usize) -> String {
        self.first_field(&LABEL_COLUMNS)
            .unwrap_or_else(|| format!("#{}", index + 1))
    }

    /// The page to scrape photos from, if the row has one.
    pub fn source_url(&self) -> Option<String> {
        self.first_field(&URL_COLUMNS)
    }

    pub fn has_real_photos(&self, placeholder: &str) -> bool {
        self.images.first().is_some_and(|first| first != placeholder)
    }
}

fn serialize_millis<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}
