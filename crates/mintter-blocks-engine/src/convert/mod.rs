//! # Block Conversion
//!
//! Moves blocks between the editor tree and the flat wire record.
//!
//! ```text
//! FlowBlock → flatten → [AtomicLeaf] → LayerSet → Block      (block_to_api)
//! Block → code-point walk over layer lookups → FlowBlock      (api_to_tree)
//! ```
//!
//! Both directions are pure functions over freshly built values, so blocks
//! can be converted from any number of threads at once.

pub mod flatten;
pub mod leaf;
pub mod to_api;
pub mod to_tree;

pub use flatten::{flatten, flatten_block};
pub use leaf::AtomicLeaf;
pub use to_api::{block_to_api, group_to_block_nodes};
pub use to_tree::{api_to_tree, block_nodes_to_group, text_to_inlines};
