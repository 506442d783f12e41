//! Scripting wrapper for map objects

use crate::EditableMap;
use mapscript_core::{LayerRef, MapObjectRef, ObjectShape};
use std::rc::Rc;
use uuid::Uuid;

/// Scripting-facing facade over a native map object
#[derive(Debug)]
pub struct EditableMapObject {
    map: Option<Rc<EditableMap>>,
    object: MapObjectRef,
}

impl EditableMapObject {
    pub(crate) fn new(map: Option<Rc<EditableMap>>, object: MapObjectRef) -> Self {
        Self { map, object }
    }

    pub fn id(&self) -> Uuid {
        self.object.borrow().id
    }

    pub fn name(&self) -> String {
        self.object.borrow().name.clone()
    }

    pub fn position(&self) -> [f32; 2] {
        self.object.borrow().position
    }

    pub fn shape(&self) -> ObjectShape {
        self.object.borrow().shape.clone()
    }

    /// The object group the native object belongs to
    pub fn object_group(&self) -> Option<LayerRef> {
        self.object.borrow().object_group()
    }

    /// The map wrapper this object was looked up through, if any
    pub fn map(&self) -> Option<&Rc<EditableMap>> {
        self.map.as_ref()
    }

    /// The underlying native object handle
    pub fn object(&self) -> &MapObjectRef {
        &self.object
    }
}
