use serde::{Deserialize, Serialize};

use super::{
    key::LayerKey,
    kind::{AnnotationType, Attributes},
    span::{self, Span},
};

/// All spans of one annotation identity, stored column-wise.
///
/// `starts[i]` and `ends[i]` describe span `i`. Both vectors always have the
/// same length and the spans are sorted and non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(rename = "type")]
    pub annotation_type: AnnotationType,
    #[serde(default)]
    pub attributes: Option<Attributes>,
    #[serde(default)]
    pub starts: Vec<usize>,
    #[serde(default)]
    pub ends: Vec<usize>,
}

impl Layer {
    pub fn new(annotation_type: AnnotationType, attributes: Option<Attributes>) -> Self {
        Self {
            annotation_type,
            attributes,
            starts: Vec::new(),
            ends: Vec::new(),
        }
    }

    /// Builds a layer from explicit spans without merging them.
    pub fn with_spans(
        annotation_type: AnnotationType,
        attributes: Option<Attributes>,
        spans: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let (starts, ends) = spans.into_iter().unzip();
        Self {
            annotation_type,
            attributes,
            starts,
            ends,
        }
    }

    /// Records `[start, end)`, extending the last span when the new one
    /// begins exactly where it ends.
    ///
    /// Spans must arrive in non-decreasing position order.
    pub fn add_span(&mut self, start: usize, end: usize) {
        if let Some(last_end) = self.ends.last_mut()
            && *last_end == start
        {
            *last_end = end;
            return;
        }
        self.starts.push(start);
        self.ends.push(end);
    }

    /// Index of the span holding code point `pos`, in O(log n).
    pub fn contains(&self, pos: usize) -> Option<usize> {
        span::contains(&self.starts, &self.ends, pos)
    }

    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.starts
            .iter()
            .zip(&self.ends)
            .map(|(&start, &end)| Span::new(start, end))
    }

    pub fn first_start(&self) -> Option<usize> {
        self.starts.first().copied()
    }

    pub fn url(&self) -> Option<&str> {
        self.attributes.as_ref().map(|attrs| attrs.url.as_str())
    }

    pub fn key(&self) -> LayerKey {
        LayerKey::new(self.annotation_type, self.attributes.as_ref())
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}
