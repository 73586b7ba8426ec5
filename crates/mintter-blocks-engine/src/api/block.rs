use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::annotations::Layer;

/// The flat wire representation of one block.
///
/// `annotations` and `attributes` are left out of the JSON entirely when
/// they are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Layer>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Block {
    pub fn new(id: impl Into<String>, block_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_annotations(mut self, annotations: Vec<Layer>) -> Self {
        self.annotations = annotations;
        self
    }
}

/// A block together with its nested child blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    pub block: Block,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    pub fn new(block: Block) -> Self {
        Self {
            block,
            children: Vec::new(),
        }
    }
}
