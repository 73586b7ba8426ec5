use crate::annotations::{AnnotationType, Attributes, LayerSet};
use crate::api::{Block, BlockNode};
use crate::model::{FlowBlock, Group};
use crate::text::{code_point_len, utf16_len};

use super::flatten::flatten_block;

/// Converts an editor block into its flat wire record.
///
/// Walks the flattened leaves keeping a running code-point position; every
/// active mark and every link/embed url turns into a span over the leaf.
/// Nested groups are ignored here, see [`group_to_block_nodes`].
pub fn block_to_api(block: &FlowBlock) -> Block {
    let leaves = flatten_block(block);

    let mut layers = LayerSet::new();
    let mut text = String::new();
    let mut pos = 0;

    for leaf in &leaves {
        let char_count = code_point_len(&leaf.value);
        let start = pos;
        let end = start + char_count;

        // A zero-width leaf covers no code point, so it has nothing to annotate.
        if char_count > 0 {
            for mark in leaf.marks.iter() {
                layers.add_span(mark.into(), None, start, end);
            }

            if let Some(url) = &leaf.url {
                let annotation_type = if leaf.is_embed() {
                    AnnotationType::Embed
                } else {
                    AnnotationType::Link
                };
                layers.add_span(annotation_type, Some(Attributes::new(url.clone())), start, end);
            }
        }

        text.push_str(&leaf.value);
        pos = end;
    }

    log::debug!(
        "block {} to api: {} leaves, {} code points ({} UTF-16 units), {} layers",
        block.id,
        leaves.len(),
        pos,
        utf16_len(&text),
        layers.len()
    );

    Block {
        id: block.id.clone(),
        block_type: block.kind.as_str().to_string(),
        text,
        annotations: layers.into_list(),
        attributes: Default::default(),
    }
}

/// Converts every block of `group`, keeping nested groups as node children.
pub fn group_to_block_nodes(group: &Group) -> Vec<BlockNode> {
    group
        .children
        .iter()
        .map(|block| BlockNode {
            block: block_to_api(block),
            children: block
                .group
                .as_ref()
                .map(group_to_block_nodes)
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::Layer;
    use crate::model::{Embed, Link, Mark, Text};
    use pretty_assertions::assert_eq;

    fn strong(value: &str) -> Text {
        Text::new(value).with_mark(Mark::Strong)
    }

    fn emphasis(value: &str) -> Text {
        Text::new(value).with_mark(Mark::Emphasis)
    }

    fn url(url: &str) -> Option<Attributes> {
        Some(Attributes::new(url))
    }

    #[test]
    fn plain_block_has_no_annotations() {
        let input = FlowBlock::statement("blockId", vec![Text::new("Hello world").into()]);
        assert_eq!(block_to_api(&input), Block::new("blockId", "statement", "Hello world"));
    }

    #[test]
    fn heading_keeps_its_type() {
        let input = FlowBlock::heading("blockId", vec![Text::new("Hello world").into()]);
        assert_eq!(block_to_api(&input), Block::new("blockId", "heading", "Hello world"));
    }

    #[test]
    fn every_mark_gets_a_layer() {
        let input = FlowBlock::statement(
            "blockId",
            vec![
                Text::new("A ").with_mark(Mark::Strong).into(),
                Text::new("B ").with_mark(Mark::Emphasis).into(),
                Text::new("C ").with_mark(Mark::Underline).into(),
                Text::new("D ").with_mark(Mark::Strikethrough).into(),
                Text::new("E ").with_mark(Mark::Superscript).into(),
                Text::new("F").with_mark(Mark::Subscript).into(),
            ],
        );

        let expected = Block::new("blockId", "statement", "A B C D E F").with_annotations(vec![
            Layer::with_spans(AnnotationType::Strong, None, [(0, 2)]),
            Layer::with_spans(AnnotationType::Emphasis, None, [(2, 4)]),
            Layer::with_spans(AnnotationType::Underline, None, [(4, 6)]),
            Layer::with_spans(AnnotationType::Strikethrough, None, [(6, 8)]),
            Layer::with_spans(AnnotationType::Superscript, None, [(8, 10)]),
            Layer::with_spans(AnnotationType::Subscript, None, [(10, 11)]),
        ]);
        assert_eq!(block_to_api(&input), expected);
    }

    #[test]
    fn overlapping_marks_live_in_separate_layers() {
        let input = FlowBlock::statement(
            "blockId",
            vec![
                strong("Mintter ").into(),
                Text::new("is")
                    .with_mark(Mark::Strong)
                    .with_mark(Mark::Emphasis)
                    .into(),
                emphasis(" Awesome").into(),
            ],
        );

        let expected = Block::new("blockId", "statement", "Mintter is Awesome").with_annotations(vec![
            Layer::with_spans(AnnotationType::Strong, None, [(0, 10)]),
            Layer::with_spans(AnnotationType::Emphasis, None, [(8, 18)]),
        ]);
        assert_eq!(block_to_api(&input), expected);
    }

    #[test]
    fn offsets_count_code_points() {
        let input = FlowBlock::statement(
            "blockId",
            vec![Text::new("hello ").into(), strong("from 👨‍👩‍👧‍👦 family").into()],
        );

        let expected = Block::new("blockId", "statement", "hello from 👨‍👩‍👧‍👦 family")
            .with_annotations(vec![Layer::with_spans(AnnotationType::Strong, None, [(6, 25)])]);
        assert_eq!(block_to_api(&input), expected);
    }

    #[test]
    fn emoji_offsets() {
        let input = FlowBlock::statement(
            "blockId",
            vec![Text::new("😀 😎 ").into(), emphasis("👨‍👩‍👧‍👦").into()],
        );

        let output = block_to_api(&input);
        assert_eq!(
            output.annotations,
            vec![Layer::with_spans(AnnotationType::Emphasis, None, [(4, 11)])]
        );
    }

    #[test]
    fn separated_spans_do_not_merge() {
        let input = FlowBlock::statement(
            "blockId",
            vec![strong("Alice").into(), Text::new(", Bob and ").into(), strong("Carol").into()],
        );

        let output = block_to_api(&input);
        assert_eq!(output.text, "Alice, Bob and Carol");
        assert_eq!(
            output.annotations,
            vec![Layer::with_spans(AnnotationType::Strong, None, [(0, 5), (15, 20)])]
        );
    }

    #[test]
    fn simple_link() {
        let input = FlowBlock::statement(
            "blockId",
            vec![
                Text::new("hello ").into(),
                Link::new("https://mintter.com", vec![Text::new("Mintter")]).into(),
            ],
        );

        let expected = Block::new("blockId", "statement", "hello Mintter").with_annotations(vec![
            Layer::with_spans(AnnotationType::Link, url("https://mintter.com"), [(6, 13)]),
        ]);
        assert_eq!(block_to_api(&input), expected);
    }

    #[test]
    fn adjacent_links_to_different_urls() {
        let input = FlowBlock::statement(
            "blockId",
            vec![
                Link::new("https://mintter.com", vec![Text::new("Mintter")]).into(),
                Link::new("https://demo.com", vec![Text::new("demo")]).into(),
            ],
        );

        let output = block_to_api(&input);
        assert_eq!(output.text, "Mintterdemo");
        assert_eq!(
            output.annotations,
            vec![
                Layer::with_spans(AnnotationType::Link, url("https://mintter.com"), [(0, 7)]),
                Layer::with_spans(AnnotationType::Link, url("https://demo.com"), [(7, 11)]),
            ]
        );
    }

    #[test]
    fn link_with_marks() {
        let input = FlowBlock::statement(
            "blockId",
            vec![
                Text::new("hello ").into(),
                Link::new("https://mintter.com", vec![Text::new("Mintter "), strong("team!")]).into(),
            ],
        );

        let output = block_to_api(&input);
        assert_eq!(output.text, "hello Mintter team!");
        assert_eq!(
            output.annotations,
            vec![
                Layer::with_spans(AnnotationType::Link, url("https://mintter.com"), [(6, 19)]),
                Layer::with_spans(AnnotationType::Strong, None, [(14, 19)]),
            ]
        );
    }

    #[test]
    fn single_embed() {
        let input = FlowBlock::statement("blockId", vec![Embed::new("mtt://doc1/block1").into()]);

        let expected = Block::new("blockId", "statement", "\u{FFFC}").with_annotations(vec![
            Layer::with_spans(AnnotationType::Embed, url("mtt://doc1/block1"), [(0, 1)]),
        ]);
        assert_eq!(block_to_api(&input), expected);
    }

    #[test]
    fn consecutive_embeds() {
        let input = FlowBlock::statement(
            "blockId",
            vec![
                Embed::new("mtt://doc1/block1").into(),
                Embed::new("mtt://doc2/block2").into(),
            ],
        );

        let output = block_to_api(&input);
        assert_eq!(output.text, "\u{FFFC}\u{FFFC}");
        assert_eq!(
            output.annotations,
            vec![
                Layer::with_spans(AnnotationType::Embed, url("mtt://doc1/block1"), [(0, 1)]),
                Layer::with_spans(AnnotationType::Embed, url("mtt://doc2/block2"), [(1, 2)]),
            ]
        );
    }

    #[test]
    fn embeds_separated_by_marks() {
        let input = FlowBlock::statement(
            "blockId",
            vec![
                Text::new("This ").into(),
                Embed::new("mtt://doc1/block1").into(),
                Text::new(" and also this are very ").into(),
                strong("important: ").into(),
                Embed::new("mtt://doc2/block2").into(),
            ],
        );

        let output = block_to_api(&input);
        assert_eq!(output.text, "This \u{FFFC} and also this are very important: \u{FFFC}");
        assert_eq!(
            output.annotations,
            vec![
                Layer::with_spans(AnnotationType::Embed, url("mtt://doc1/block1"), [(5, 6)]),
                Layer::with_spans(AnnotationType::Strong, None, [(30, 41)]),
                Layer::with_spans(AnnotationType::Embed, url("mtt://doc2/block2"), [(41, 42)]),
            ]
        );
    }

    #[test]
    fn empty_marked_leaf_adds_no_span() {
        let input = FlowBlock::statement(
            "blockId",
            vec![strong("").into(), Text::new("plain").into()],
        );
        assert_eq!(block_to_api(&input), Block::new("blockId", "statement", "plain"));
    }

    #[test]
    fn group_keeps_nesting() {
        let group = Group::new(vec![
            FlowBlock::heading("h1", vec![Text::new("Title").into()]).with_group(Group::new(vec![
                FlowBlock::statement("s1", vec![strong("child").into()]),
            ])),
            FlowBlock::statement("s2", vec![Text::new("sibling").into()]),
        ]);

        let nodes = group_to_block_nodes(&group);

        assert_eq!(
            nodes,
            vec![
                BlockNode {
                    block: Block::new("h1", "heading", "Title"),
                    children: vec![BlockNode::new(
                        Block::new("s1", "statement", "child").with_annotations(vec![
                            Layer::with_spans(AnnotationType::Strong, None, [(0, 5)])
                        ])
                    )],
                },
                BlockNode::new(Block::new("s2", "statement", "sibling")),
            ]
        );
    }
}
