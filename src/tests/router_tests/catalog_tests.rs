// src/tests/router_tests/catalog_tests.rs

use crate::tests::utils::{get, sample_site};

fn card_count(body: &str) -> usize {
    body.matches("data-nid=").count()
}

#[test]
fn home_lists_every_property() {
    let site = sample_site();

    let (status, body) = get(&site, "/");

    assert_eq!(status, 200);
    assert_eq!(card_count(&body), 4);
    assert!(body.contains("4 inmuebles encontrados"));
    assert!(body.contains("Confianza Buen Futuro"), "testimonials section missing");
    assert!(body.contains("Bogotá, Colombia"), "footer missing");
    assert!(!body.contains("Limpiar filtros"));
}

#[test]
fn search_filters_by_barrio() {
    let site = sample_site();

    let (status, body) = get(&site, "/?q=cedritos");

    assert_eq!(status, 200);
    assert_eq!(card_count(&body), 2);
    assert!(body.contains(r#"data-nid="BF-101""#));
    assert!(body.contains(r#"data-nid="BF-404""#));
    assert!(body.contains("Limpiar filtros"));
}

#[test]
fn search_is_percent_decoded() {
    let site = sample_site();

    let (_, body) = get(&site, "/?q=Chapinero+Alto");
    assert_eq!(card_count(&body), 1);

    let (_, body) = get(&site, "/?q=Usaqu%C3%A9n");
    assert!(body.contains(r#"data-nid="BF-303""#));
    assert_eq!(card_count(&body), 1);
}

#[test]
fn price_range_filter() {
    let site = sample_site();

    let (_, body) = get(&site, "/?rango=3");

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("$ 420.000.000"));
    assert!(body.contains("1 inmueble encontrado"));
    assert!(body.contains(r#"<option value="3" selected>"#));
}

#[test]
fn no_matches_shows_empty_state() {
    let site = sample_site();

    let (status, body) = get(&site, "/?q=bosa&rango=1");

    assert_eq!(status, 200);
    assert_eq!(card_count(&body), 0);
    assert!(body.contains("Sin resultados"));
    assert!(body.contains("No encontramos inmuebles"));
}

#[test]
fn unknown_range_index_shows_everything() {
    let (status, body) = get(&sample_site(), "/?rango=42");

    assert_eq!(status, 200);
    assert_eq!(card_count(&body), 4);
}

#[test]
fn negative_range_index_shows_everything() {
    let (status, body) = get(&sample_site(), "/?rango=-1");

    assert_eq!(status, 200);
    assert_eq!(card_count(&body), 4);
}

#[test]
fn malformed_range_is_bad_request() {
    let (status, body) = get(&sample_site(), "/?rango=cheap");

    assert_eq!(status, 400);
    assert!(body.contains("invalid price range"));
}

#[test]
fn unknown_path_is_not_found() {
    let (status, body) = get(&sample_site(), "/admin");

    assert_eq!(status, 404);
    assert!(body.contains("Error 404"));
}
