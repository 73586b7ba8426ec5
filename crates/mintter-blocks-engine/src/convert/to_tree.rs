use crate::annotations::{AnnotationType, Layer};
use crate::api::{Block, BlockNode};
use crate::model::{BlockKind, Embed, FlowBlock, Group, Inline, Link, Marks, Paragraph, Text};

/// Rebuilds an editor block from its wire record.
///
/// The block type is carried over as is, including names this crate does
/// not know. Headings get a static paragraph, every other kind a regular
/// one.
pub fn api_to_tree(block: &Block) -> FlowBlock {
    let kind = BlockKind::from_wire(&block.block_type);

    let children = text_to_inlines(&block.text, &block.annotations);
    log::debug!("block {} to tree: {} inline nodes", block.id, children.len());

    FlowBlock {
        id: block.id.clone(),
        content: kind.content(Paragraph { children }),
        kind,
        group: None,
    }
}

/// Rebuilds a group of blocks, attaching a child group to every node that
/// has children.
pub fn block_nodes_to_group(nodes: &[BlockNode]) -> Group {
    Group::new(
        nodes
            .iter()
            .map(|node| {
                let mut block = api_to_tree(&node.block);
                if !node.children.is_empty() {
                    block.group = Some(block_nodes_to_group(&node.children));
                }
                block
            })
            .collect(),
    )
}

/// Splits `text` into inline nodes wherever the set of active layers
/// changes.
///
/// Walks the text one code point at a time. A new leaf starts whenever the
/// layers holding the current position differ from those of the leaf being
/// built, and after every embedded object since an embed spans exactly one
/// code point. Empty text yields a single empty text node.
pub fn text_to_inlines(text: &str, layers: &[Layer]) -> Vec<Inline> {
    if text.is_empty() {
        return vec![Text::default().into()];
    }

    let mut builder = InlineBuilder::default();
    let mut state = LeafState::NoLeaf;

    for (pos, (offset, _)) in text.char_indices().enumerate() {
        let active = active_layers(layers, pos);
        state = match state {
            LeafState::NoLeaf => LeafState::Building {
                start: offset,
                active,
            },
            LeafState::Building {
                start,
                active: current,
            } => {
                if current == active && !holds_embed(layers, &current) {
                    LeafState::Building {
                        start,
                        active: current,
                    }
                } else {
                    builder.push(&text[start..offset], LeafStyle::new(layers, &current));
                    LeafState::Building {
                        start: offset,
                        active,
                    }
                }
            }
        };
    }

    if let LeafState::Building { start, active } = state {
        builder.push(&text[start..], LeafStyle::new(layers, &active));
    }

    builder.finish()
}

/// Leaf-building state while walking the text.
enum LeafState {
    NoLeaf,
    /// A leaf starting at byte `start` whose code points all sit in the
    /// layers at indices `active`.
    Building { start: usize, active: Vec<usize> },
}

fn active_layers(layers: &[Layer], pos: usize) -> Vec<usize> {
    layers
        .iter()
        .enumerate()
        .filter(|(_, layer)| layer.contains(pos).is_some())
        .map(|(idx, _)| idx)
        .collect()
}

fn holds_embed(layers: &[Layer], active: &[usize]) -> bool {
    active
        .iter()
        .any(|&idx| layers[idx].annotation_type == AnnotationType::Embed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Wrapper {
    Link(String),
    Embed(String),
}

/// Formatting shared by every code point of one leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LeafStyle {
    marks: Marks,
    wrapper: Option<Wrapper>,
}

impl LeafStyle {
    /// Embeds win over links if a malformed record activates both.
    fn new(layers: &[Layer], active: &[usize]) -> Self {
        let mut marks = Marks::default();
        let mut link = None;
        let mut embed = None;

        for layer in active.iter().map(|&idx| &layers[idx]) {
            let url = || layer.url().unwrap_or_default().to_string();
            match layer.annotation_type {
                AnnotationType::Link => {
                    link.get_or_insert_with(url);
                }
                AnnotationType::Embed => {
                    embed.get_or_insert_with(url);
                }
                other => {
                    if let Some(mark) = other.mark() {
                        marks.set(mark);
                    }
                }
            }
        }

        let wrapper = embed.map(Wrapper::Embed).or(link.map(Wrapper::Link));
        Self { marks, wrapper }
    }
}

/// Collects finished leaves into inline nodes, grouping consecutive leaves
/// of the same link under one link node.
#[derive(Default)]
struct InlineBuilder {
    out: Vec<Inline>,
    link: Option<Link>,
}

impl InlineBuilder {
    fn push(&mut self, value: &str, style: LeafStyle) {
        log::trace!("leaf {value:?} {style:?}");
        let text = Text {
            value: value.to_string(),
            marks: style.marks,
        };

        match style.wrapper {
            Some(Wrapper::Link(url)) => {
                if let Some(link) = self.link.as_mut()
                    && link.url == url
                {
                    link.children.push(text);
                    return;
                }
                self.close_link();
                self.link = Some(Link::new(url, vec![text]));
            }
            Some(Wrapper::Embed(url)) => {
                self.close_link();
                self.out.push(
                    Embed {
                        url,
                        children: vec![Text {
                            value: String::new(),
                            marks: style.marks,
                        }],
                    }
                    .into(),
                );
            }
            None => {
                self.close_link();
                self.out.push(text.into());
            }
        }
    }

    fn close_link(&mut self) {
        if let Some(link) = self.link.take() {
            self.out.push(link.into());
        }
    }

    fn finish(mut self) -> Vec<Inline> {
        self.close_link();
        self.out
    }
}
