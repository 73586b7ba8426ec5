use std::collections::BTreeMap;

use super::{
    key::LayerKey,
    kind::{AnnotationType, Attributes},
    layer::Layer,
};

/// Accumulates spans into layers keyed by annotation identity.
#[derive(Debug, Clone, Default)]
pub struct LayerSet {
    layers: BTreeMap<LayerKey, Layer>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `[start, end)` to the layer identified by `annotation_type` and
    /// `attributes`, creating the layer on first use.
    pub fn add_span(
        &mut self,
        annotation_type: AnnotationType,
        attributes: Option<Attributes>,
        start: usize,
        end: usize,
    ) {
        let key = LayerKey::new(annotation_type, attributes.as_ref());
        log::trace!("span {key} [{start}, {end})");
        self.layers
            .entry(key)
            .or_insert_with(|| Layer::new(annotation_type, attributes))
            .add_span(start, end);
    }

    /// Layers sorted by identity key, then stably re-sorted by the start of
    /// their first span.
    pub fn list(&self) -> Vec<Layer> {
        self.clone().into_list()
    }

    /// Consuming variant of [`LayerSet::list`].
    pub fn into_list(self) -> Vec<Layer> {
        // BTreeMap iteration already yields identity order.
        let mut out: Vec<Layer> = self.layers.into_values().collect();
        out.sort_by_key(Layer::first_start);
        out
    }

    pub fn get(&self, annotation_type: AnnotationType, attributes: Option<&Attributes>) -> Option<&Layer> {
        self.layers.get(&LayerKey::new(annotation_type, attributes))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
