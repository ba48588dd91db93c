use crate::domain::logic::{CatalogFilters, PRICE_RANGES};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::site::Site;
use crate::templates::pages::{home::HomeVm, home_page};
use astra::Request;
use chrono::{Datelike, Utc};
use std::collections::HashMap;

pub fn handle(req: Request, site: &Site) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let params = parse_query(&req);
            let filters = catalog_filters(&params)?;

            html_response(home_page(&HomeVm {
                properties: &site.properties,
                filters: &filters,
                placeholder: &site.placeholder,
                year: Utc::now().year(),
            }))
        }
        ("GET", "/inventory.json") => json_response(&site.records),
        _ => Err(ServerError::NotFound),
    }
}

fn catalog_filters(params: &HashMap<String, String>) -> Result<CatalogFilters, ServerError> {
    let range_index = match params.get("rango").map(|r| r.trim()).filter(|r| !r.is_empty()) {
        Some(raw) => {
            let n: i64 = raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid price range '{raw}'")))?;
            // numbers outside the known ranges mean "all"
            usize::try_from(n)
                .ok()
                .filter(|i| *i < PRICE_RANGES.len())
                .unwrap_or(0)
        }
        None => 0,
    };

    Ok(CatalogFilters {
        query: params.get("q").cloned().unwrap_or_default(),
        range_index,
    })
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
