//! # mintter-blocks-engine
//!
//! Converts rich-text blocks between the editor's tree representation and
//! the flat representation used on the wire: plain text plus annotation
//! layers whose spans are code-point offsets stored column-wise.
//!
//! ```
//! use mintter_blocks_engine::{
//!     api_to_tree, block_to_api,
//!     model::{FlowBlock, Link, Mark, Text},
//! };
//!
//! let tree = FlowBlock::statement(
//!     "blk",
//!     vec![
//!         Text::new("hello ").into(),
//!         Link::new("https://mintter.com", vec![Text::new("Mintter").with_mark(Mark::Strong)]).into(),
//!     ],
//! );
//!
//! let wire = block_to_api(&tree);
//! assert_eq!(wire.text, "hello Mintter");
//! assert_eq!(wire.annotations.len(), 2);
//!
//! assert_eq!(api_to_tree(&wire), tree);
//! ```

pub mod annotations;
pub mod api;
pub mod convert;
pub mod model;
pub mod text;

// Re-export key types for easier usage
pub use annotations::{AnnotationType, Attributes, Layer, LayerSet};
pub use api::{Annotation, Block, BlockError, BlockNode, validate};
pub use convert::{api_to_tree, block_nodes_to_group, block_to_api, flatten, group_to_block_nodes};
pub use model::{FlowBlock, Group};
