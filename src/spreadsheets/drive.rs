use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use tracing::info;

/// Direct-download link for a publicly shared Google Drive file.
pub fn drive_download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={file_id}")
}

/// Downloads the inventory spreadsheet export as CSV text.
pub fn download_csv(client: &Client, file_id: &str) -> Result<String, ScraperError> {
    let url = drive_download_url(file_id);
    info!(%url, "downloading inventory CSV from Google Drive");

    let resp = client.get(&url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScraperError::Http(status.as_u16()));
    }

    let text = resp.text()?;
    ensure_csv_body(&text)?;

    info!("CSV downloaded ({:.1} KB)", text.len() as f64 / 1024.0);
    Ok(text)
}

fn ensure_csv_body(text: &str) -> Result<(), ScraperError> {
    if text.trim().is_empty() {
        return Err(ScraperError::EmptyDownload(
            "Google Drive returned no CSV text; check the file is shared as 'anyone with the link'"
                .into(),
        ));
    }
    Ok(())
}
