use serde::de::IgnoredAny;
use serde::Deserialize;

// JSON-LD as listing portals emit it (schema.org RealEstateListing, Apartment, ...)
//
// script[type="application/ld+json"]
//  ├── { ... }            single node
//  └── [ { ... }, ... ]   list of nodes
//
// node
//  ├── photo   string | ImageObject | [string | ImageObject]
//  └── image   same shape, used only when `photo` is absent
//
// ImageObject
//  ├── url
//  └── contentUrl

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    // `Many` goes first: a short array could otherwise deserialize as a struct.
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LdNode {
    Item(LdItem),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
pub struct LdItem {
    pub photo: Option<OneOrMany<ImageRef>>,
    pub image: Option<OneOrMany<ImageRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Url(String),
    Object {
        url: Option<String>,
        #[serde(rename = "contentUrl")]
        content_url: Option<String>,
    },
    Other(IgnoredAny),
}

impl ImageRef {
    pub fn src(&self) -> Option<&str> {
        match self {
            ImageRef::Url(s) => Some(s.as_str()),
            ImageRef::Object { url, content_url } => url.as_deref().or(content_url.as_deref()),
            ImageRef::Other(_) => None,
        }
    }
}

impl LdItem {
    /// `photo` wins over `image`, matching how portals fill one or the other.
    pub fn image_refs(self) -> Vec<ImageRef> {
        self.photo
            .or(self.image)
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}

/// Parses one JSON-LD script body. Malformed JSON yields nothing.
pub fn ld_image_sources(json: &str) -> Vec<String> {
    let Ok(nodes) = serde_json::from_str::<OneOrMany<LdNode>>(json) else {
        return Vec::new();
    };

    nodes
        .into_vec()
        .into_iter()
        .filter_map(|node| match node {
            LdNode::Item(item) => Some(item),
            LdNode::Other(_) => None,
        })
        .flat_map(LdItem::image_refs)
        .filter_map(|r| r.src().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_list_of_objects() {
        let json = r#"{
            "@type": "RealEstateListing",
            "photo": [
                {"@type": "ImageObject", "contentUrl": "https://x.co/1.jpg"},
                {"url": "https://x.co/2.jpg"},
                "https://x.co/3.jpg"
            ],
            "image": "https://x.co/ignored.jpg"
        }"#;

        assert_eq!(
            ld_image_sources(json),
            ["https://x.co/1.jpg", "https://x.co/2.jpg", "https://x.co/3.jpg"]
        );
    }

    #[test]
    fn array_of_nodes_with_image_fallback() {
        let json = r#"[
            {"@type": "Organization", "name": "Inmobiliaria"},
            {"@type": "Apartment", "image": "https://x.co/a.jpg"},
            {"image": {"url": "https://x.co/b.jpg"}},
            "stray string"
        ]"#;

        assert_eq!(ld_image_sources(json), ["https://x.co/a.jpg", "https://x.co/b.jpg"]);
    }

    #[test]
    fn odd_shapes_are_skipped() {
        assert!(ld_image_sources("{not json").is_empty());
        assert!(ld_image_sources(r#"{"photo": 42}"#).is_empty());
        assert!(ld_image_sources(r#"{"photo": null, "image": [7, {"caption": "x"}]}"#).is_empty());
    }
}
