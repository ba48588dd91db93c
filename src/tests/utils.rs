use crate::domain::ListingRecord;
use crate::router::handle;
use crate::site::Site;
use astra::{Body, Request};
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const PLACEHOLDER: &str = "/images/placeholder-property.svg";

fn listing(nid: &str, barrio: &str, precio: &str, images: &[&str]) -> ListingRecord {
    let mut record = ListingRecord::from_pairs([
        ("nid", nid),
        ("barrio", barrio),
        ("precio", precio),
        ("url", "https://portal.example.com/listing"),
    ]);
    record.images = images.iter().map(|s| s.to_string()).collect();
    record
}

/// Four listings spread over the price ranges.
pub fn sample_site() -> Site {
    Site::new(
        vec![
            listing("BF-101", "Cedritos", "$ 120.000.000", &["https://cdn.example.com/101.jpg"]),
            listing("BF-202", "Chapinero Alto", "250000000", &[PLACEHOLDER]),
            listing("BF-303", "Usaquén", "$ 420.000.000", &["https://cdn.example.com/303.jpg"]),
            listing("BF-404", "Cedritos", "$ 780.000.000", &[PLACEHOLDER]),
        ],
        PLACEHOLDER,
    )
}

/// Runs a GET through the router and returns (status, body), mapping errors to their page.
pub fn get(site: &Site, uri: &str) -> (u16, String) {
    let req: Request = http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let mut resp = match handle(req, site) {
        Ok(resp) => resp,
        Err(err) => crate::responses::html_error_response(err),
    };

    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    (resp.status().as_u16(), body)
}

/// Fresh directory under the system temp dir.
pub fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
