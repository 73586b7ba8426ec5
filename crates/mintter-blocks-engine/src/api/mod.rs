//! # Wire Records
//!
//! The flat block record exchanged with the document API:
//!
//! ```text
//! Block      = { id, type, text, annotations?, attributes? }
//! Annotation = { type, attributes: {url} | null, starts: [..], ends: [..] }
//! BlockNode  = { block, children? }
//! ```
//!
//! `text` embeds are U+FFFC characters; every offset counts code points.

pub mod block;
pub mod validate;

pub use block::{Block, BlockNode};
pub use validate::{BlockError, validate};

/// The wire name for a layer inside a block record.
pub type Annotation = crate::annotations::Layer;
