// scraper.rs
use crate::scraper::extract::ImageExtractor;
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL};
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;
use url::Url;

const MAX_REDIRECTS: usize = 5;

/// Anything that can hand back the HTML of a listing page.
pub trait PageSource {
    fn fetch_page(&self, url: &str) -> Result<String, ScraperError>;
}

/// Shared blocking client: fixed UA, per-request timeout, bounded redirects.
pub fn http_client(user_agent: &str, timeout: Duration) -> Result<Client, ScraperError> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|e| ScraperError::Network(e.to_string()))
}

pub struct ListingScraper {
    client: Client,
}

impl ListingScraper {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn browser_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("es-CO,es;q=0.9,en;q=0.8"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers
    }
}

impl PageSource for ListingScraper {
    fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let start = std::time::Instant::now();

        let resp = self
            .client
            .get(url)
            .headers(Self::browser_headers())
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Http(status.as_u16()));
        }

        let html = resp.text()?;
        debug!(url, bytes = html.len(), elapsed = ?start.elapsed(), "fetched listing page");
        Ok(html)
    }
}

/// Validates a spreadsheet URL cell before anything is requested.
pub fn parse_listing_url(url: &str) -> Result<Url, ScraperError> {
    Url::parse(url).map_err(|e| ScraperError::InvalidUrl(format!("{url}: {e}")))
}

/// Fetches one listing page and runs the image heuristics on it.
pub fn scrape_images<S: PageSource + ?Sized>(
    source: &S,
    extractor: &ImageExtractor,
    base: &Url,
) -> Result<Vec<String>, ScraperError> {
    let html = source.fetch_page(base.as_str())?;
    Ok(extractor.extract(&html, base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        html: &'static str,
        requested: RefCell<Vec<String>>,
    }

    impl PageSource for Recorder {
        fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(self.html.to_string())
        }
    }

    #[test]
    fn url_cells_without_scheme_are_invalid() {
        for cell in ["not a url", "www.portal.co/a"] {
            let err = parse_listing_url(cell).unwrap_err();
            assert!(matches!(err, ScraperError::InvalidUrl(_)), "{cell}");
        }
        assert!(parse_listing_url("https://portal.co/apto/12").is_ok());
    }

    #[test]
    fn relative_images_resolve_against_listing_url() {
        let source = Recorder {
            html: r#"<img src="fotos/sala.jpg">"#,
            requested: RefCell::new(vec![]),
        };
        let extractor = ImageExtractor::new(12).unwrap();

        let base = parse_listing_url("https://portal.co/apto/12").unwrap();

        let images = scrape_images(&source, &extractor, &base).unwrap();

        assert_eq!(images, ["https://portal.co/apto/fotos/sala.jpg"]);
        assert_eq!(source.requested.borrow()[0], "https://portal.co/apto/12");
    }

    #[test]
    fn sends_colombian_browser_headers() {
        let headers = ListingScraper::browser_headers();

        assert_eq!(headers[ACCEPT_LANGUAGE], "es-CO,es;q=0.9,en;q=0.8");
        assert_eq!(headers[CACHE_CONTROL], "no-cache");
        assert!(headers[ACCEPT].to_str().unwrap().starts_with("text/html"));
    }

    #[test]
    fn builds_client() {
        assert!(http_client("TestBot/1.0", Duration::from_secs(1)).is_ok());
    }
}
