use crate::model::{FlowBlock, Inline};
use crate::text::OBJECT_REPLACEMENT;

use super::leaf::AtomicLeaf;

/// Flattens paragraph children into atomic leaves, depth-first and left to
/// right.
///
/// Link children inherit the link url. An embed becomes one leaf holding
/// U+FFFC with the embed url and the format flags of its first child.
pub fn flatten(children: &[Inline]) -> Vec<AtomicLeaf> {
    let mut leaves = Vec::with_capacity(children.len());

    for child in children {
        match child {
            Inline::Text(text) => leaves.push(AtomicLeaf::from_text(text, None)),
            Inline::Link(link) => leaves.extend(
                link.children
                    .iter()
                    .map(|text| AtomicLeaf::from_text(text, Some(&link.url))),
            ),
            Inline::Embed(embed) => {
                if embed.children.len() != 1 {
                    log::debug!(
                        "embed {} has {} children, expected one",
                        embed.url,
                        embed.children.len()
                    );
                }
                leaves.push(AtomicLeaf {
                    value: OBJECT_REPLACEMENT.to_string(),
                    marks: embed.children.first().map(|t| t.marks).unwrap_or_default(),
                    url: Some(embed.url.clone()),
                });
            }
        }
    }

    leaves
}

/// Flattens the content paragraph of `block`. Nested groups are not visited.
pub fn flatten_block(block: &FlowBlock) -> Vec<AtomicLeaf> {
    flatten(block.content.children())
}
