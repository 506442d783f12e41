//! Wang sets: terrain annotations attached to a tileset

use crate::{Tileset, TilesetRef};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Shared handle to a wang set
pub type WangSetRef = Rc<RefCell<WangSet>>;

/// Which tile positions a wang set constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WangSetKind {
    /// 4 corners per tile
    #[default]
    Corner,
    /// 4 edges per tile
    Edge,
    /// 4 corners + 4 edges per tile
    Mixed,
}

impl WangSetKind {
    /// Number of positions constrained by this kind
    pub fn position_count(&self) -> usize {
        match self {
            WangSetKind::Corner | WangSetKind::Edge => 4,
            WangSetKind::Mixed => 8,
        }
    }
}

/// A named terrain color within a wang set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WangColor {
    pub name: String,
    pub probability: f32,
}

/// Terrain assignments over the tiles of one tileset
///
/// Wang ids index 8 positions clockwise from the top edge; `None` is a
/// wildcard. Corner- and edge-only sets use 4 of the 8.
#[derive(Debug)]
pub struct WangSet {
    pub id: Uuid,
    pub name: String,
    pub kind: WangSetKind,
    colors: Vec<WangColor>,
    wang_ids: HashMap<u32, [Option<u8>; 8]>,
    tileset: Weak<RefCell<Tileset>>,
}

impl WangSet {
    pub(crate) fn new(tileset: &TilesetRef, name: String, kind: WangSetKind) -> WangSetRef {
        Rc::new(RefCell::new(Self {
            id: Uuid::new_v4(),
            name,
            kind,
            colors: Vec::new(),
            wang_ids: HashMap::new(),
            tileset: Rc::downgrade(tileset),
        }))
    }

    /// The tileset this wang set belongs to
    pub fn tileset(&self) -> Option<TilesetRef> {
        self.tileset.upgrade()
    }

    /// Add a terrain color, returning its index
    pub fn add_color(&mut self, name: impl Into<String>) -> usize {
        self.colors.push(WangColor {
            name: name.into(),
            probability: 1.0,
        });
        self.colors.len() - 1
    }

    pub fn colors(&self) -> &[WangColor] {
        &self.colors
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Assign a wang id to a tile by atlas index
    pub fn set_wang_id(&mut self, tile_index: u32, wang_id: [Option<u8>; 8]) {
        self.wang_ids.insert(tile_index, wang_id);
    }

    /// Wang id assigned to a tile, if any
    pub fn wang_id(&self, tile_index: u32) -> Option<[Option<u8>; 8]> {
        self.wang_ids.get(&tile_index).copied()
    }
}
