//! Scripting wrapper for wang sets

use crate::EditableTileset;
use mapscript_core::{WangSetKind, WangSetRef};
use std::rc::Rc;
use uuid::Uuid;

/// Scripting-facing facade over a native wang set
#[derive(Debug)]
pub struct EditableWangSet {
    tileset: Rc<EditableTileset>,
    wang_set: WangSetRef,
}

impl EditableWangSet {
    pub(crate) fn new(tileset: Rc<EditableTileset>, wang_set: WangSetRef) -> Self {
        Self { tileset, wang_set }
    }

    pub fn id(&self) -> Uuid {
        self.wang_set.borrow().id
    }

    pub fn name(&self) -> String {
        self.wang_set.borrow().name.clone()
    }

    pub fn kind(&self) -> WangSetKind {
        self.wang_set.borrow().kind
    }

    pub fn color_count(&self) -> usize {
        self.wang_set.borrow().color_count()
    }

    /// The tileset wrapper this wang set belongs to
    pub fn tileset(&self) -> &Rc<EditableTileset> {
        &self.tileset
    }

    /// The underlying native wang set handle
    pub fn wang_set(&self) -> &WangSetRef {
        &self.wang_set
    }
}
