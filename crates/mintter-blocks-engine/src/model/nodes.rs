use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::marks::{Mark, Marks};

/// A run of text with its format flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    #[serde(rename = "text")]
    pub value: String,
    #[serde(flatten)]
    pub marks: Marks,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: Marks::default(),
        }
    }

    /// Builder-style helper that switches `mark` on.
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.set(mark);
        self
    }
}

/// A hyperlink wrapping one or more text runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(with = "text_leaves")]
    pub children: Vec<Text>,
}

impl Link {
    pub fn new(url: impl Into<String>, children: Vec<Text>) -> Self {
        Self {
            url: url.into(),
            children,
        }
    }
}

/// An inline reference to another document or block.
///
/// The editor always gives an embed exactly one child with empty text; the
/// child only carries format flags. Extra children are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub url: String,
    #[serde(with = "text_leaves")]
    pub children: Vec<Text>,
}

impl Embed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            children: vec![Text::default()],
        }
    }
}

/// Link and embed children are plain text runs, but the editor still tags
/// each of them with `"type": "text"`.
mod text_leaves {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Text;

    #[derive(Serialize)]
    #[serde(tag = "type", rename_all = "camelCase")]
    enum LeafRef<'a> {
        Text(&'a Text),
    }

    #[derive(Deserialize)]
    #[serde(tag = "type", rename_all = "camelCase")]
    enum Leaf {
        Text(Text),
    }

    pub fn serialize<S: Serializer>(children: &[Text], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(children.iter().map(LeafRef::Text))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Text>, D::Error> {
        let leaves = Vec::<Leaf>::deserialize(deserializer)?;
        Ok(leaves
            .into_iter()
            .map(|leaf| match leaf {
                Leaf::Text(text) => text,
            })
            .collect())
    }
}

/// Phrasing content inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    Text(Text),
    Link(Link),
    Embed(Embed),
}

impl From<Text> for Inline {
    fn from(text: Text) -> Self {
        Inline::Text(text)
    }
}

impl From<Link> for Inline {
    fn from(link: Link) -> Self {
        Inline::Link(link)
    }
}

impl From<Embed> for Inline {
    fn from(embed: Embed) -> Self {
        Inline::Embed(embed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Vec<Inline>,
}

/// The content node of a block. Headings use the static variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Content {
    Paragraph(Paragraph),
    StaticParagraph(Paragraph),
}

impl Content {
    pub fn paragraph(&self) -> &Paragraph {
        match self {
            Content::Paragraph(p) | Content::StaticParagraph(p) => p,
        }
    }

    pub fn children(&self) -> &[Inline] {
        &self.paragraph().children
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Content::StaticParagraph(_))
    }
}

/// Block kinds of the editor schema.
///
/// The schema belongs to the editor, so names this crate does not know are
/// kept verbatim in [`BlockKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    Statement,
    Heading,
    Blockquote,
    Code,
    Other(String),
}

impl BlockKind {
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Statement => "statement",
            BlockKind::Heading => "heading",
            BlockKind::Blockquote => "blockquote",
            BlockKind::Code => "code",
            BlockKind::Other(name) => name,
        }
    }

    /// Parses a wire block type.
    pub fn from_wire(name: &str) -> Self {
        Self::from(name.to_string())
    }

    /// Wraps a paragraph in the content node this kind expects.
    pub fn content(&self, paragraph: Paragraph) -> Content {
        match self {
            BlockKind::Heading => Content::StaticParagraph(paragraph),
            _ => Content::Paragraph(paragraph),
        }
    }
}

impl From<String> for BlockKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "statement" => BlockKind::Statement,
            "heading" => BlockKind::Heading,
            "blockquote" => BlockKind::Blockquote,
            "code" => BlockKind::Code,
            _ => BlockKind::Other(name),
        }
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A block: one content node plus an optional group of nested blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFlowBlock", into = "RawFlowBlock")]
pub struct FlowBlock {
    pub id: String,
    pub kind: BlockKind,
    pub content: Content,
    pub group: Option<Group>,
}

impl FlowBlock {
    pub fn new(id: impl Into<String>, kind: BlockKind, children: Vec<Inline>) -> Self {
        Self {
            id: id.into(),
            content: kind.content(Paragraph { children }),
            kind,
            group: None,
        }
    }

    pub fn statement(id: impl Into<String>, children: Vec<Inline>) -> Self {
        Self::new(id, BlockKind::Statement, children)
    }

    pub fn heading(id: impl Into<String>, children: Vec<Inline>) -> Self {
        Self::new(id, BlockKind::Heading, children)
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.group = Some(group);
        self
    }
}

/// An ordered list of nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGroup", into = "RawGroup")]
pub struct Group {
    pub children: Vec<FlowBlock>,
}

impl Group {
    pub fn new(children: Vec<FlowBlock>) -> Self {
        Self { children }
    }
}

/// Shape errors found while reading a block tree from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("block {id} has no paragraph child")]
    MissingContent { id: String },
    #[error("block {id} has an unexpected child at position {position}")]
    UnexpectedChild { id: String, position: usize },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum GroupTag {
    #[serde(rename = "group")]
    Group,
}

#[derive(Clone, Serialize, Deserialize)]
struct RawGroup {
    #[serde(rename = "type")]
    tag: GroupTag,
    children: Vec<FlowBlock>,
}

impl From<RawGroup> for Group {
    fn from(raw: RawGroup) -> Self {
        Group {
            children: raw.children,
        }
    }
}

impl From<Group> for RawGroup {
    fn from(group: Group) -> Self {
        RawGroup {
            tag: GroupTag::Group,
            children: group.children,
        }
    }
}

/// A child of a block, dispatched on its `type` tag.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum BlockChild {
    Paragraph(Paragraph),
    StaticParagraph(Paragraph),
    Group(GroupBody),
}

#[derive(Clone, Serialize, Deserialize)]
struct GroupBody {
    children: Vec<FlowBlock>,
}

impl From<Content> for BlockChild {
    fn from(content: Content) -> Self {
        match content {
            Content::Paragraph(p) => BlockChild::Paragraph(p),
            Content::StaticParagraph(p) => BlockChild::StaticParagraph(p),
        }
    }
}

/// Editor JSON shape of a block: `{type, id, children: [content, group?]}`.
#[derive(Clone, Serialize, Deserialize)]
struct RawFlowBlock {
    #[serde(rename = "type")]
    kind: BlockKind,
    id: String,
    children: Vec<BlockChild>,
}

impl TryFrom<RawFlowBlock> for FlowBlock {
    type Error = ShapeError;

    fn try_from(raw: RawFlowBlock) -> Result<Self, Self::Error> {
        let RawFlowBlock { kind, id, children } = raw;
        let mut children = children.into_iter();

        let content = match children.next() {
            Some(BlockChild::Paragraph(p)) => Content::Paragraph(p),
            Some(BlockChild::StaticParagraph(p)) => Content::StaticParagraph(p),
            _ => return Err(ShapeError::MissingContent { id }),
        };

        let group = match children.next() {
            None => None,
            Some(BlockChild::Group(body)) => Some(Group::new(body.children)),
            Some(_) => {
                return Err(ShapeError::UnexpectedChild { id, position: 1 });
            }
        };

        if children.next().is_some() {
            return Err(ShapeError::UnexpectedChild { id, position: 2 });
        }

        Ok(FlowBlock {
            id,
            kind,
            content,
            group,
        })
    }
}

impl From<FlowBlock> for RawFlowBlock {
    fn from(block: FlowBlock) -> Self {
        let mut children = vec![BlockChild::from(block.content)];
        if let Some(group) = block.group {
            children.push(BlockChild::Group(GroupBody {
                children: group.children,
            }));
        }
        RawFlowBlock {
            kind: block.kind,
            id: block.id,
            children,
        }
    }
}
