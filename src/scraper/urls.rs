// URL normalisation and the "does this look like a photo" test.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "webp", "avif", "gif", "svg"];

// Gallery-style path segments used by listing portals.
static IMAGE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/(photos?|images?|fotos?|gallery|galeria)/").unwrap());

// Image CDNs that serve photos without an extension.
static IMAGE_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(cloudinary|imgix|imagekit|cdn\.|photos\.)").unwrap());

/// Resolves `href` against the page it was found on.
///
/// Protocol-relative links get `https:`; anything already starting with `http` is kept as-is.
pub fn to_absolute(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if href.starts_with("http") {
        return Some(href.to_string());
    }

    base.join(href).ok().map(String::from)
}

pub fn is_image_url(candidate: &str) -> bool {
    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };

    let path = parsed.path();
    let ext = path.rsplit('.').next().unwrap_or_default().to_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return true;
    }

    IMAGE_PATH.is_match(path) || parsed.host_str().is_some_and(|h| IMAGE_HOST.is_match(h))
}

/// Keeps the first occurrence of each URL, in order, up to `max`.
pub fn dedupe_urls<I>(urls: I, max: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|u| !u.is_empty() && seen.insert(u.clone()))
        .take(max)
        .collect()
}
