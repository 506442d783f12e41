//! Map objects placed on object-group layers

use crate::{Layer, LayerRef, Value};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Shared handle to a map object
pub type MapObjectRef = Rc<RefCell<MapObject>>;

/// Geometric shape of a map object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum ObjectShape {
    #[default]
    Rectangle,
    Ellipse,
    Point,
    Polygon(Vec<[f32; 2]>),
    Polyline(Vec<[f32; 2]>),
}

/// An object placed on an object-group layer
#[derive(Debug)]
pub struct MapObject {
    pub id: Uuid,
    pub name: String,
    /// Position in pixels
    pub position: [f32; 2],
    /// Size in pixels; ignored for points and polygons
    pub size: [f32; 2],
    pub shape: ObjectShape,
    pub properties: HashMap<String, Value>,
    object_group: Option<Weak<RefCell<Layer>>>,
}

impl MapObject {
    /// Create a new rectangle object, not yet part of any object group
    pub fn new(name: impl Into<String>, position: [f32; 2]) -> MapObjectRef {
        Rc::new(RefCell::new(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            size: [0.0, 0.0],
            shape: ObjectShape::Rectangle,
            properties: HashMap::new(),
            object_group: None,
        }))
    }

    /// The object group this object belongs to, if any
    pub fn object_group(&self) -> Option<LayerRef> {
        self.object_group.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_object_group(&mut self, group: Option<Weak<RefCell<Layer>>>) {
        self.object_group = group;
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
    fn test_new_object_is_detached() {
        let object = MapObject::new("spawn", [64.0, 48.0]);

        let object = object.borrow();
        assert!(object.object_group().is_none());
        assert_eq!(object.shape, ObjectShape::Rectangle);
        assert_eq!(object.position, [64.0, 48.0]);
    }

    #[test]
    fn test_properties() {
        let object = MapObject::new("door", [0.0, 0.0]);
        object.borrow_mut().set_property("locked", true);
        object.borrow_mut().set_property("key_id", 7i64);

        let object = object.borrow();
        assert_eq!(object.property("locked").and_then(Value::as_bool), Some(true));
        assert_eq!(object.property("key_id").and_then(Value::as_int), Some(7));
        assert!(object.property("missing").is_none());
    }
}
