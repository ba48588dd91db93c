use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("timeout")]
    Timeout,
    #[error("HTTP {0}")]
    Http(u16),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("CSV parse error: {0}")]
    Csv(String),
    #[error("Empty download: {0}")]
    EmptyDownload(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScraperError::Timeout
        } else if let Some(status) = e.status() {
            ScraperError::Http(status.as_u16())
        } else {
            ScraperError::Network(e.to_string())
        }
    }
}

impl From<csv::Error> for ScraperError {
    fn from(e: csv::Error) -> Self {
        ScraperError::Csv(e.to_string())
    }
}

impl ScraperError {
    /// Short reason for the per-listing log line.
    pub fn short_reason(&self) -> String {
        let text = self.to_string();
        match text.char_indices().nth(60) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reason_truncates_on_char_boundary() {
        let long = ScraperError::Network("ñ".repeat(100));
        assert_eq!(long.short_reason().chars().count(), 60);

        assert_eq!(ScraperError::Http(404).short_reason(), "HTTP 404");
        assert_eq!(ScraperError::Timeout.short_reason(), "timeout");
    }
}
