//! Scripting wrapper for a map

use mapscript_core::MapRef;
use std::rc::Rc;
use uuid::Uuid;

/// Scripting-facing facade over a native map
///
/// Usually constructed by the document that owns the map and passed as the
/// context hint when looking up layer and object wrappers.
#[derive(Debug)]
pub struct EditableMap {
    map: MapRef,
}

impl EditableMap {
    pub fn new(map: MapRef) -> Rc<Self> {
        Rc::new(Self { map })
    }

    pub fn id(&self) -> Uuid {
        self.map.borrow().id
    }

    pub fn name(&self) -> String {
        self.map.borrow().name.clone()
    }

    pub fn layer_count(&self) -> usize {
        self.map.borrow().layer_count()
    }

    /// The underlying native map handle
    pub fn map(&self) -> &MapRef {
        &self.map
    }
}
