//! Tilesets and their tiles

use crate::wang::{WangSet, WangSetKind, WangSetRef};
use crate::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Shared handle to a tileset
pub type TilesetRef = Rc<RefCell<Tileset>>;

/// Shared handle to a tile
pub type TileRef = Rc<RefCell<Tile>>;

/// A tile atlas with per-tile data and wang sets
#[derive(Debug)]
pub struct Tileset {
    pub id: Uuid,
    pub name: String,
    /// Tile size in pixels (assumes square tiles)
    pub tile_size: u32,
    /// Path to the atlas image, if backed by one
    pub image: Option<String>,
    pub columns: u32,
    tiles: Vec<TileRef>,
    wang_sets: Vec<WangSetRef>,
}

impl Tileset {
    /// Create a new empty tileset
    pub fn new(name: impl Into<String>, tile_size: u32) -> TilesetRef {
        Rc::new(RefCell::new(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tile_size,
            image: None,
            columns: 0,
            tiles: Vec::new(),
            wang_sets: Vec::new(),
        }))
    }

    /// Add a tile with the given atlas index, wiring its owner link
    pub fn add_tile(tileset: &TilesetRef, index: u32) -> TileRef {
        let tile = Rc::new(RefCell::new(Tile {
            id: Uuid::new_v4(),
            index,
            properties: HashMap::new(),
            tileset: Rc::downgrade(tileset),
        }));
        tileset.borrow_mut().tiles.push(Rc::clone(&tile));
        tile
    }

    /// Find a tile by its atlas index
    pub fn find_tile(&self, index: u32) -> Option<TileRef> {
        self.tiles.iter().find(|t| t.borrow().index == index).cloned()
    }

    pub fn tiles(&self) -> &[TileRef] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Add a wang set, wiring its owner link
    pub fn add_wang_set(
        tileset: &TilesetRef,
        name: impl Into<String>,
        kind: WangSetKind,
    ) -> WangSetRef {
        let wang_set = WangSet::new(tileset, name.into(), kind);
        tileset.borrow_mut().wang_sets.push(Rc::clone(&wang_set));
        wang_set
    }

    /// Remove a wang set by id, handing back the owning reference
    pub fn remove_wang_set(&mut self, id: Uuid) -> Option<WangSetRef> {
        let pos = self.wang_sets.iter().position(|w| w.borrow().id == id)?;
        Some(self.wang_sets.remove(pos))
    }

    pub fn wang_sets(&self) -> &[WangSetRef] {
        &self.wang_sets
    }
}

/// Per-tile data within a tileset
#[derive(Debug)]
pub struct Tile {
    pub id: Uuid,
    /// Index of this tile within the atlas
    pub index: u32,
    pub properties: HashMap<String, Value>,
    tileset: Weak<RefCell<Tileset>>,
}

impl Tile {
    /// The tileset this tile belongs to
    pub fn tileset(&self) -> Option<TilesetRef> {
        self.tileset.upgrade()
    }

    /// Get a custom property
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Set a custom property
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find_tile() {
        let tileset = Tileset::new("terrain", 16);
        let tile = Tileset::add_tile(&tileset, 42);

        assert_eq!(tileset.borrow().tile_count(), 1);
        let found = tileset.borrow().find_tile(42).unwrap();
        assert!(Rc::ptr_eq(&found, &tile));
        assert!(tileset.borrow().find_tile(7).is_none());
    }

    #[test]
    fn test_tile_owner_link() {
        let tileset = Tileset::new("terrain", 16);
        let tile = Tileset::add_tile(&tileset, 0);

        let owner = tile.borrow().tileset().unwrap();
        assert_eq!(owner.borrow().id, tileset.borrow().id);
    }

    #[test]
    fn test_remove_wang_set() {
        let tileset = Tileset::new("terrain", 16);
        let wang_set = Tileset::add_wang_set(&tileset, "cliffs", WangSetKind::Corner);

        let id = wang_set.borrow().id;
        let removed = tileset.borrow_mut().remove_wang_set(id).unwrap();
        assert!(Rc::ptr_eq(&removed, &wang_set));
        assert!(tileset.borrow().wang_sets().is_empty());
    }
}
