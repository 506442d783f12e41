//! Scripting wrappers for tilesets and tiles

use mapscript_core::{TileRef, TilesetRef};
use std::rc::Rc;
use uuid::Uuid;

/// Scripting-facing facade over a native tileset
///
/// Constructed either by the registry, or by an open tileset document that
/// owns the tileset (see `DocumentResolver`).
#[derive(Debug)]
pub struct EditableTileset {
    tileset: TilesetRef,
}

impl EditableTileset {
    pub fn new(tileset: TilesetRef) -> Rc<Self> {
        Rc::new(Self { tileset })
    }

    pub fn id(&self) -> Uuid {
        self.tileset.borrow().id
    }

    pub fn name(&self) -> String {
        self.tileset.borrow().name.clone()
    }

    pub fn tile_count(&self) -> usize {
        self.tileset.borrow().tile_count()
    }

    /// The underlying native tileset handle
    pub fn tileset(&self) -> &TilesetRef {
        &self.tileset
    }
}

/// Scripting-facing facade over a native tile
#[derive(Debug)]
pub struct EditableTile {
    tileset: Rc<EditableTileset>,
    tile: TileRef,
}

impl EditableTile {
    pub(crate) fn new(tileset: Rc<EditableTileset>, tile: TileRef) -> Self {
        Self { tileset, tile }
    }

    pub fn id(&self) -> Uuid {
        self.tile.borrow().id
    }

    /// Index of the tile within its atlas
    pub fn index(&self) -> u32 {
        self.tile.borrow().index
    }

    /// The tileset wrapper this tile belongs to
    pub fn tileset(&self) -> &Rc<EditableTileset> {
        &self.tileset
    }

    /// The underlying native tile handle
    pub fn tile(&self) -> &TileRef {
        &self.tile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapscript_core::Tileset;

    #[test]
    fn test_reads_through_to_native() {
        let tileset = Tileset::new("terrain", 16);
        Tileset::add_tile(&tileset, 3);

        let editable = EditableTileset::new(Rc::clone(&tileset));
        assert_eq!(editable.name(), "terrain");
        assert_eq!(editable.tile_count(), 1);
    }
}
