use crate::model::{Marks, Text};
use crate::text::is_object_replacement;

/// A text run with everything it inherited from its ancestors.
///
/// A leaf carries at most one url: links and embeds never nest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomicLeaf {
    pub value: String,
    pub marks: Marks,
    pub url: Option<String>,
}

impl AtomicLeaf {
    pub fn from_text(text: &Text, url: Option<&str>) -> Self {
        Self {
            value: text.value.clone(),
            marks: text.marks,
            url: url.map(str::to_owned),
        }
    }

    /// An embed leaf is a url-carrying leaf whose value is the single
    /// object replacement character.
    pub fn is_embed(&self) -> bool {
        self.url.is_some() && is_object_replacement(&self.value)
    }
}
