use thiserror::Error;

use crate::annotations::{AnnotationType, Layer};
use crate::text::{OBJECT_REPLACEMENT, code_point_len};

use super::block::Block;

/// Structural problems in a wire block received from outside.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("annotation {index} ({annotation_type}) has {starts} starts but {ends} ends")]
    LengthMismatch {
        index: usize,
        annotation_type: AnnotationType,
        starts: usize,
        ends: usize,
    },

    #[error("annotation {index} ({annotation_type}) span {span} is empty at {start}")]
    EmptySpan {
        index: usize,
        annotation_type: AnnotationType,
        span: usize,
        start: usize,
    },

    #[error("annotation {index} ({annotation_type}) span {span} ends at {end}, past the text length {len}")]
    OutOfBounds {
        index: usize,
        annotation_type: AnnotationType,
        span: usize,
        end: usize,
        len: usize,
    },

    #[error("annotation {index} ({annotation_type}) span {span} starts at {start} before the previous span ends at {previous_end}")]
    Unordered {
        index: usize,
        annotation_type: AnnotationType,
        span: usize,
        start: usize,
        previous_end: usize,
    },

    #[error("annotation {index} ({annotation_type}) has no url")]
    MissingUrl {
        index: usize,
        annotation_type: AnnotationType,
    },

    #[error("embed annotation {index} covers {found:?} at {pos}, expected U+FFFC")]
    EmbedNotSentinel { index: usize, pos: usize, found: char },
}

/// Checks that every annotation of `block` is well formed against its text.
///
/// Conversion never validates on its own; callers reading blocks from the
/// wire run this first.
pub fn validate(block: &Block) -> Result<(), BlockError> {
    let len = code_point_len(&block.text);
    let chars: Vec<char> = if block
        .annotations
        .iter()
        .any(|layer| layer.annotation_type == AnnotationType::Embed)
    {
        block.text.chars().collect()
    } else {
        Vec::new()
    };

    for (index, layer) in block.annotations.iter().enumerate() {
        validate_layer(index, layer, len)?;

        if layer.annotation_type == AnnotationType::Embed {
            for span in layer.spans() {
                for pos in span.start..span.end {
                    let found = chars[pos];
                    if found != OBJECT_REPLACEMENT {
                        return Err(BlockError::EmbedNotSentinel { index, pos, found });
                    }
                }
            }
        }
    }

    Ok(())
}

fn validate_layer(index: usize, layer: &Layer, len: usize) -> Result<(), BlockError> {
    let annotation_type = layer.annotation_type;

    if layer.starts.len() != layer.ends.len() {
        return Err(BlockError::LengthMismatch {
            index,
            annotation_type,
            starts: layer.starts.len(),
            ends: layer.ends.len(),
        });
    }

    if annotation_type.carries_url() && layer.url().is_none() {
        return Err(BlockError::MissingUrl {
            index,
            annotation_type,
        });
    }

    let mut previous_end = None;
    for (span_idx, span) in layer.spans().enumerate() {
        if span.is_empty() {
            return Err(BlockError::EmptySpan {
                index,
                annotation_type,
                span: span_idx,
                start: span.start,
            });
        }
        if span.end > len {
            return Err(BlockError::OutOfBounds {
                index,
                annotation_type,
                span: span_idx,
                end: span.end,
                len,
            });
        }
        if let Some(previous_end) = previous_end
            && span.start < previous_end
        {
            return Err(BlockError::Unordered {
                index,
                annotation_type,
                span: span_idx,
                start: span.start,
                previous_end,
            });
        }
        previous_end = Some(span.end);
    }

    Ok(())
}
