use serde::{Deserialize, Serialize};

use crate::model::Mark;

/// The closed set of annotation types a block may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationType {
    Strong,
    Emphasis,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
    Link,
    Embed,
}

impl AnnotationType {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationType::Strong => "strong",
            AnnotationType::Emphasis => "emphasis",
            AnnotationType::Underline => "underline",
            AnnotationType::Strikethrough => "strikethrough",
            AnnotationType::Superscript => "superscript",
            AnnotationType::Subscript => "subscript",
            AnnotationType::Link => "link",
            AnnotationType::Embed => "embed",
        }
    }

    /// The text format flag this annotation maps to, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            AnnotationType::Strong => Some(Mark::Strong),
            AnnotationType::Emphasis => Some(Mark::Emphasis),
            AnnotationType::Underline => Some(Mark::Underline),
            AnnotationType::Strikethrough => Some(Mark::Strikethrough),
            AnnotationType::Superscript => Some(Mark::Superscript),
            AnnotationType::Subscript => Some(Mark::Subscript),
            AnnotationType::Link | AnnotationType::Embed => None,
        }
    }

    /// Links and embeds carry a url and are told apart by it.
    pub fn carries_url(self) -> bool {
        matches!(self, AnnotationType::Link | AnnotationType::Embed)
    }
}

impl From<Mark> for AnnotationType {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Strong => AnnotationType::Strong,
            Mark::Emphasis => AnnotationType::Emphasis,
            Mark::Underline => AnnotationType::Underline,
            Mark::Strikethrough => AnnotationType::Strikethrough,
            Mark::Superscript => AnnotationType::Superscript,
            Mark::Subscript => AnnotationType::Subscript,
        }
    }
}

impl std::fmt::Display for AnnotationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes of a link or embed annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub url: String,
}

impl Attributes {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
