//! # Editor Tree Model
//!
//! Closed sum types for the editor's block tree. A block holds exactly one
//! content node (`paragraph` or `staticParagraph`) followed by an optional
//! `group` of nested blocks. Paragraph children are text runs, links (text
//! runs sharing a url) and embeds (a single empty run standing for one
//! object replacement character in the flat text).
//!
//! The JSON shape matches the editor document model, discriminated by a
//! `type` field on every node.

pub mod marks;
pub mod nodes;

pub use marks::{Mark, Marks};
pub use nodes::{BlockKind, Content, Embed, FlowBlock, Group, Inline, Link, Paragraph, ShapeError, Text};
