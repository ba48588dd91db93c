// src/domain/logic.rs

use crate::domain::property::Property;

/// A half-open price band `[min, max)` in pesos. `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub label: &'static str,
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }
}

/// The catalog's price filter. Index 0 is "everything" and is the default.
pub const PRICE_RANGES: [PriceRange; 5] = [
    PriceRange { label: "Todos los precios", min: 0, max: None },
    PriceRange { label: "Menos de $150M", min: 0, max: Some(150_000_000) },
    PriceRange { label: "$150M – $300M", min: 150_000_000, max: Some(300_000_000) },
    PriceRange { label: "$300M – $500M", min: 300_000_000, max: Some(500_000_000) },
    PriceRange { label: "Más de $500M", min: 500_000_000, max: None },
];

/// Out-of-range indices fall back to "everything".
pub fn price_range(index: usize) -> &'static PriceRange {
    PRICE_RANGES.get(index).unwrap_or(&PRICE_RANGES[0])
}

/// What the visitor asked for on the catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    pub query: String,
    pub range_index: usize,
}

impl CatalogFilters {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.range_index != 0
    }

    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        filter_properties(properties, &self.query, self.range_index)
    }
}

/// Filters by a free-text query (matched against nid and barrio, case-insensitive)
/// and by one of the fixed price ranges. Order is preserved.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    query: &str,
    range_index: usize,
) -> Vec<&'a Property> {
    let query = query.trim().to_lowercase();
    let range = price_range(range_index);

    properties
        .iter()
        .filter(|p| {
            let matches_search = query.is_empty()
                || p.nid.to_lowercase().contains(&query)
                || p.barrio.to_lowercase().contains(&query);

            matches_search && range.contains(p.precio)
        })
        .collect()
}

/// Formats pesos the way es-CO does: `$ 250.000.000`.
pub fn format_cop(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    format!("$ {out}")
}

pub fn results_summary(count: usize) -> String {
    match count {
        0 => "Sin resultados".to_string(),
        1 => "1 inmueble encontrado".to_string(),
        n => format!("{n} inmuebles encontrados"),
    }
}
