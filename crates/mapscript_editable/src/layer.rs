//! Scripting wrapper for layers

use crate::EditableMap;
use mapscript_core::{LayerKind, LayerRef};
use std::rc::Rc;
use uuid::Uuid;

/// Scripting-facing facade over a native layer
///
/// The layer's kind tag is resolved once at construction; scripts dispatch
/// on it instead of downcasting.
#[derive(Debug)]
pub struct EditableLayer {
    kind: LayerKind,
    map: Option<Rc<EditableMap>>,
    layer: LayerRef,
}

impl EditableLayer {
    pub(crate) fn new(map: Option<Rc<EditableMap>>, layer: LayerRef) -> Self {
        let kind = layer.borrow().kind();
        Self { kind, map, layer }
    }

    pub fn id(&self) -> Uuid {
        self.layer.borrow().id
    }

    pub fn name(&self) -> String {
        self.layer.borrow().name.clone()
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn is_object_group(&self) -> bool {
        self.kind == LayerKind::ObjectGroup
    }

    /// The map wrapper this layer was looked up through, if any
    pub fn map(&self) -> Option<&Rc<EditableMap>> {
        self.map.as_ref()
    }

    /// The underlying native layer handle
    pub fn layer(&self) -> &LayerRef {
        &self.layer
    }

    /// Number of objects on an object-group layer; zero otherwise
    pub fn object_count(&self) -> usize {
        self.layer.borrow().objects().len()
    }
}
