//! The top-level map: a sized canvas owning a stack of layers

use crate::LayerRef;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Shared handle to a map
pub type MapRef = Rc<RefCell<Map>>;

/// A complete map with a stack of layers
#[derive(Debug)]
pub struct Map {
    pub id: Uuid,
    pub name: String,
    /// Map size in tiles
    pub width: u32,
    pub height: u32,
    /// Tile size in pixels (assumes square tiles)
    pub tile_size: u32,
    layers: Vec<LayerRef>,
}

impl Map {
    /// Create a new empty map
    pub fn new(name: impl Into<String>, width: u32, height: u32, tile_size: u32) -> MapRef {
        Rc::new(RefCell::new(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width,
            height,
            tile_size,
            layers: Vec::new(),
        }))
    }

    /// Add a layer to the top of the stack, wiring its owner link
    pub fn add_layer(map: &MapRef, layer: &LayerRef) {
        layer.borrow_mut().set_map(Some(Rc::downgrade(map)));
        map.borrow_mut().layers.push(Rc::clone(layer));
    }

    /// Remove a layer by id, clearing its owner link
    pub fn remove_layer(map: &MapRef, id: Uuid) -> Option<LayerRef> {
        let layer = {
            let mut m = map.borrow_mut();
            let pos = m.layers.iter().position(|l| l.borrow().id == id)?;
            m.layers.remove(pos)
        };
        layer.borrow_mut().set_map(None);
        Some(layer)
    }

    pub fn layers(&self) -> &[LayerRef] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layer;

    #[test]
    fn test_add_layer_wires_owner() {
        let map = Map::new("overworld", 32, 24, 16);
        let layer = Layer::new_tile_layer("ground", 32, 24);

        Map::add_layer(&map, &layer);

        assert_eq!(map.borrow().layer_count(), 1);
        let owner = layer.borrow().map().unwrap();
        assert_eq!(owner.borrow().id, map.borrow().id);
    }

    #[test]
    fn test_remove_layer_clears_owner() {
        let map = Map::new("overworld", 32, 24, 16);
        let layer = Layer::new_object_group("entities");
        Map::add_layer(&map, &layer);

        let id = layer.borrow().id;
        let removed = Map::remove_layer(&map, id).unwrap();

        assert!(removed.borrow().map().is_none());
        assert_eq!(map.borrow().layer_count(), 0);
        assert!(Map::remove_layer(&map, id).is_none());
    }
}
