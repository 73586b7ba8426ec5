use super::kind::{AnnotationType, Attributes};

/// Identity of a layer inside a [`LayerSet`](super::LayerSet).
///
/// Links and embeds are keyed by type and url, so two links to different
/// urls land in different layers. Every other type is keyed by its name
/// alone. Attributes other than `url` never take part in the identity.
///
/// Keys order by type name first, then by url with the url-less key first,
/// the same order a `"type"` / `"type-url"` string key sorts in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerKey {
    name: &'static str,
    url: Option<String>,
}

impl LayerKey {
    pub fn new(annotation_type: AnnotationType, attributes: Option<&Attributes>) -> Self {
        let url = if annotation_type.carries_url() {
            attributes.map(|attrs| attrs.url.clone())
        } else {
            None
        };
        Self {
            name: annotation_type.as_str(),
            url,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl std::fmt::Display for LayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{}-{}", self.name, url),
            None => f.write_str(self.name),
        }
    }
}
