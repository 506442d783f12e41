//! Layer types for the native map model

use crate::{Map, MapObjectRef, MapRef};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Shared handle to a layer
pub type LayerRef = Rc<RefCell<Layer>>;

/// The closed set of layer kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Tile,
    ObjectGroup,
    Image,
    Group,
}

/// A single layer in a map
#[derive(Debug)]
pub struct Layer {
    pub id: Uuid,
    pub name: String,
    pub visible: bool,
    pub opacity: f32,
    map: Option<Weak<RefCell<Map>>>,
    pub data: LayerData,
}

/// Kind-specific layer contents
#[derive(Debug)]
pub enum LayerData {
    /// Tile grid; `None` cells are empty
    Tile {
        width: u32,
        height: u32,
        cells: Vec<Option<u32>>,
    },
    /// Objects placed freely on the layer
    ObjectGroup { objects: Vec<MapObjectRef> },
    /// A single background or decoration image
    Image { source: String },
    /// Nested child layers
    Group { layers: Vec<LayerRef> },
}

impl Layer {
    fn with_data(name: String, data: LayerData) -> LayerRef {
        Rc::new(RefCell::new(Self {
            id: Uuid::new_v4(),
            name,
            visible: true,
            opacity: 1.0,
            map: None,
            data,
        }))
    }

    /// Create a new empty tile layer
    pub fn new_tile_layer(name: impl Into<String>, width: u32, height: u32) -> LayerRef {
        let size = (width * height) as usize;
        Self::with_data(
            name.into(),
            LayerData::Tile {
                width,
                height,
                cells: vec![None; size],
            },
        )
    }

    /// Create a new empty object-group layer
    pub fn new_object_group(name: impl Into<String>) -> LayerRef {
        Self::with_data(
            name.into(),
            LayerData::ObjectGroup {
                objects: Vec::new(),
            },
        )
    }

    /// Create a new image layer
    pub fn new_image_layer(name: impl Into<String>, source: impl Into<String>) -> LayerRef {
        Self::with_data(
            name.into(),
            LayerData::Image {
                source: source.into(),
            },
        )
    }

    /// Create a new empty group layer
    pub fn new_group_layer(name: impl Into<String>) -> LayerRef {
        Self::with_data(name.into(), LayerData::Group { layers: Vec::new() })
    }

    /// The kind tag of this layer
    pub fn kind(&self) -> LayerKind {
        match &self.data {
            LayerData::Tile { .. } => LayerKind::Tile,
            LayerData::ObjectGroup { .. } => LayerKind::ObjectGroup,
            LayerData::Image { .. } => LayerKind::Image,
            LayerData::Group { .. } => LayerKind::Group,
        }
    }

    /// The map this layer has been added to, if any
    pub fn map(&self) -> Option<MapRef> {
        self.map.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_map(&mut self, map: Option<Weak<RefCell<Map>>>) {
        self.map = map;
    }

    /// Objects of an object-group layer; empty for other kinds
    pub fn objects(&self) -> &[MapObjectRef] {
        match &self.data {
            LayerData::ObjectGroup { objects } => objects,
            _ => &[],
        }
    }

    /// Add an object to an object-group layer, wiring its owner link
    pub fn add_object(group: &LayerRef, object: &MapObjectRef) {
        {
            let mut layer = group.borrow_mut();
            let LayerData::ObjectGroup { objects } = &mut layer.data else {
                panic!("objects can only be added to object-group layers");
            };
            objects.push(Rc::clone(object));
        }
        object
            .borrow_mut()
            .set_object_group(Some(Rc::downgrade(group)));
    }

    /// Remove an object by id from an object-group layer, clearing its
    /// owner link
    pub fn remove_object(group: &LayerRef, id: Uuid) -> Option<MapObjectRef> {
        let object = {
            let mut layer = group.borrow_mut();
            let LayerData::ObjectGroup { objects } = &mut layer.data else {
                return None;
            };
            let pos = objects.iter().position(|o| o.borrow().id == id)?;
            objects.remove(pos)
        };
        object.borrow_mut().set_object_group(None);
        Some(object)
    }

    /// Add a child layer to a group layer
    pub fn add_child(group: &LayerRef, child: &LayerRef) {
        let mut layer = group.borrow_mut();
        let LayerData::Group { layers } = &mut layer.data else {
            panic!("children can only be added to group layers");
        };
        layers.push(Rc::clone(child));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapObject;

    #[test]
    fn test_new_tile_layer() {
        let layer = Layer::new_tile_layer("ground", 8, 4);

        let layer = layer.borrow();
        assert_eq!(layer.kind(), LayerKind::Tile);
        assert!(layer.visible);
        if let LayerData::Tile { cells, .. } = &layer.data {
            assert_eq!(cells.len(), 32);
            assert!(cells.iter().all(|c| c.is_none()));
        } else {
            panic!("expected a tile layer");
        }
    }

    #[test]
    fn test_add_object_wires_owner() {
        let group = Layer::new_object_group("entities");
        let object = MapObject::new("door", [16.0, 32.0]);

        Layer::add_object(&group, &object);

        assert_eq!(group.borrow().objects().len(), 1);
        let owner = object.borrow().object_group().unwrap();
        assert_eq!(owner.borrow().id, group.borrow().id);
    }

    #[test]
    fn test_remove_object_clears_owner() {
        let group = Layer::new_object_group("entities");
        let object = MapObject::new("door", [16.0, 32.0]);
        Layer::add_object(&group, &object);

        let id = object.borrow().id;
        let removed = Layer::remove_object(&group, id).unwrap();
        assert!(removed.borrow().object_group().is_none());
        assert!(group.borrow().objects().is_empty());
    }

    #[test]
    fn test_objects_empty_for_other_kinds() {
        let layer = Layer::new_image_layer("backdrop", "sky.png");
        assert!(layer.borrow().objects().is_empty());
    }

    #[test]
    fn test_group_layer_children() {
        let group = Layer::new_group_layer("buildings");
        let child = Layer::new_tile_layer("roofs", 8, 8);
        Layer::add_child(&group, &child);

        let group = group.borrow();
        let LayerData::Group { layers } = &group.data else {
            panic!("expected a group layer");
        };
        assert_eq!(layers.len(), 1);
    }

    #[test]
    #[should_panic(expected = "object-group layers")]
    fn test_add_object_to_tile_layer_panics() {
        let layer = Layer::new_tile_layer("ground", 4, 4);
        let object = MapObject::new("door", [0.0, 0.0]);
        Layer::add_object(&layer, &object);
    }
}
