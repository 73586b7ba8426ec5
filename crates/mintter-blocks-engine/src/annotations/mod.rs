//! # Annotation Layers
//!
//! A block's formatting travels as a set of layers. Each layer groups every
//! span of one annotation identity and stores them column-wise, as parallel
//! `starts`/`ends` vectors of code-point offsets.
//!
//! - **`kind`**: `AnnotationType` and link/embed `Attributes`
//! - **`span`**: `Span` and the binary-search lookup over columnar spans
//! - **`layer`**: `Layer` with merge-adjacent insertion
//! - **`key`**: `LayerKey`, the structural layer identity
//! - **`layer_set`**: `LayerSet`, the accumulator used by the serializer
//!
//! Spans inside one layer never overlap; spans of different layers may.

pub mod key;
pub mod kind;
pub mod layer;
pub mod layer_set;
pub mod span;

pub use key::LayerKey;
pub use kind::{AnnotationType, Attributes};
pub use layer::Layer;
pub use layer_set::LayerSet;
pub use span::Span;
