// extract.rs
use crate::scraper::models::ld_image_sources;
use crate::scraper::urls::{dedupe_urls, is_image_url, to_absolute};
use crate::scraper::ScraperError;
use scraper::{Html, Selector};
use url::Url;

/// `<img>` attributes checked in order; the first usable one wins.
const IMG_SOURCE_ATTRS: [&str; 5] = ["src", "data-src", "data-lazy-src", "data-original", "data-image"];

/// Gallery attributes some portals put on non-img elements.
const GALLERY_ATTRS: [&str; 4] = ["data-photo-url", "data-image-url", "data-src-large", "data-full"];

/// Pulls candidate photo URLs out of a listing page.
///
/// Heuristics run from most to least reliable:
/// 1. Open Graph / Twitter card meta tags
/// 2. JSON-LD `photo` / `image`
/// 3. `<img>` sources (including lazy-load attributes) and `srcset`
/// 4. gallery `data-*` attributes
///
/// Candidates that don't look like images are dropped, then the list is deduplicated
/// and capped at `max_images`.
pub struct ImageExtractor {
    og_image: Selector,
    twitter_image: Selector,
    json_ld: Selector,
    img: Selector,
    gallery: Selector,
    max_images: usize,
}

impl ImageExtractor {
    pub fn new(max_images: usize) -> Result<Self, ScraperError> {
        let parse = |css: &str| {
            Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("{css}: {e}")))
        };

        let gallery_css = GALLERY_ATTRS
            .iter()
            .map(|a| format!("[{a}]"))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Self {
            og_image: parse(r#"meta[property="og:image"]"#)?,
            twitter_image: parse(r#"meta[name="twitter:image"]"#)?,
            json_ld: parse(r#"script[type="application/ld+json"]"#)?,
            img: parse("img")?,
            gallery: parse(&gallery_css)?,
            max_images,
        })
    }

    pub fn extract(&self, html: &str, base: &Url) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut candidates: Vec<String> = Vec::new();
        let mut push = |raw: &str| {
            if let Some(abs) = to_absolute(raw, base) {
                candidates.push(abs);
            }
        };

        // 1. meta tags: only the first of each counts
        for selector in [&self.og_image, &self.twitter_image] {
            if let Some(content) = document
                .select(selector)
                .next()
                .and_then(|el| el.value().attr("content"))
            {
                push(content);
            }
        }

        // 2. JSON-LD
        for script in document.select(&self.json_ld) {
            let body: String = script.text().collect();
            for src in ld_image_sources(&body) {
                push(&src);
            }
        }

        // 3. <img> and srcset
        for img in document.select(&self.img) {
            let el = img.value();

            if let Some(src) = IMG_SOURCE_ATTRS
                .iter()
                .filter_map(|attr| el.attr(attr))
                .find(|v| !v.is_empty() && !v.starts_with("data:"))
            {
                push(src);
            }

            if let Some(srcset) = el.attr("srcset").or_else(|| el.attr("data-srcset")) {
                for part in srcset.split(',') {
                    if let Some(u) = part.split_whitespace().next() {
                        push(u);
                    }
                }
            }
        }

        // 4. gallery data-* attributes
        for el in document.select(&self.gallery) {
            for attr in GALLERY_ATTRS {
                if let Some(v) = el.value().attr(attr).filter(|v| !v.is_empty()) {
                    push(v);
                }
            }
        }

        dedupe_urls(
            candidates.into_iter().filter(|u| is_image_url(u)),
            self.max_images,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<String> {
        let base = Url::parse("https://portal.example.com/inmueble/55").unwrap();
        ImageExtractor::new(12).unwrap().extract(html, &base)
    }

    #[test]
    fn heuristics_run_in_priority_order() {
        let html = r#"
            <html><head>
              <meta property="og:image" content="https://cdn.example.com/og.jpg">
              <meta name="twitter:image" content="/media/tw.png">
              <script type="application/ld+json">
                {"@type": "Apartment", "photo": [{"contentUrl": "https://x.co/ld.webp"}]}
              </script>
            </head><body>
              <img src="/fotos/1.jpg">
              <div data-photo-url="https://x.co/galeria/9"></div>
            </body></html>
        "#;

        assert_eq!(
            extract(html),
            [
                "https://cdn.example.com/og.jpg",
                "https://portal.example.com/media/tw.png",
                "https://x.co/ld.webp",
                "https://portal.example.com/fotos/1.jpg",
                "https://x.co/galeria/9",
            ]
        );
    }

    #[test]
    fn lazy_images_and_srcset() {
        let html = r#"
            <img src="data:image/gif;base64,R0lGOD" data-src="//img.example.com/lazy.jpg">
            <img data-lazy-src="/a.png" srcset="/a-480.png 480w, /a-960.png 960w">
            <img data-srcset="https://x.co/b.avif 1x,  https://x.co/b2.avif 2x">
        "#;

        assert_eq!(
            extract(html),
            [
                "https://img.example.com/lazy.jpg",
                "https://portal.example.com/a.png",
                "https://portal.example.com/a-480.png",
                "https://portal.example.com/a-960.png",
                "https://x.co/b.avif",
                "https://x.co/b2.avif",
            ]
        );
    }

    #[test]
    fn non_images_are_dropped_and_duplicates_collapse() {
        let html = r#"
            <meta property="og:image" content="https://x.co/house.jpg">
            <img src="https://x.co/house.jpg">
            <img src="/tracking/pixel">
            <img src="/logo.svg">
            <script type="application/ld+json">{ broken json</script>
        "#;

        assert_eq!(
            extract(html),
            ["https://x.co/house.jpg", "https://portal.example.com/logo.svg"]
        );
    }

    #[test]
    fn caps_at_max_images() {
        let html: String = (0..30).map(|i| format!(r#"<img src="/p/{i}.jpg">"#)).collect();
        let base = Url::parse("https://x.co/").unwrap();

        let found = ImageExtractor::new(12).unwrap().extract(&html, &base);

        assert_eq!(found.len(), 12);
        assert_eq!(found[0], "https://x.co/p/0.jpg");
        assert_eq!(found[11], "https://x.co/p/11.jpg");
    }

    #[test]
    fn page_without_photos() {
        assert!(extract("<html><body><p>Sin fotos</p></body></html>").is_empty());
    }
}
