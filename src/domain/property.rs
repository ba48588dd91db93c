// src/domain/property.rs

use crate::domain::listing::ListingRecord;

/// A listing as the catalog page shows it.
/// Built from the loosely typed inventory record; anything unparseable is simply left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub nid: String,
    pub barrio: String,
    /// Price in Colombian pesos.
    pub precio: u64,
    pub area_m2: Option<f64>,
    pub habitaciones: Option<u32>,
    pub banos: Option<u32>,
    pub estrato: Option<u8>,
    pub url_360: Option<String>,
    pub descripcion: Option<String>,
    pub images: Vec<String>,
}

impl Property {
    pub fn from_record(record: &ListingRecord, index: usize) -> Self {
        Property {
            nid: record.label(index),
            barrio: record.field("barrio").unwrap_or_default(),
            precio: record.field("precio").map(|p| parse_price(&p)).unwrap_or(0),
            area_m2: record.field("area_m2").and_then(|a| parse_decimal(&a)),
            habitaciones: record.field("habitaciones").and_then(|h| h.parse().ok()),
            banos: record.field("banos").and_then(|b| b.parse().ok()),
            estrato: record.field("estrato").and_then(|e| e.parse().ok()),
            url_360: record.field("url_360"),
            descripcion: record.field("descripcion"),
            images: record.images.clone(),
        }
    }

    pub fn main_image<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.images.first().map(String::as_str).unwrap_or(placeholder)
    }
}

/// Spreadsheet prices come in as text like `$ 250.000.000`; only the digits count.
fn parse_price(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Accepts both `72.5` and `72,5`.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}
