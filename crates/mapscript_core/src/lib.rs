//! Native model types for mapscript
//!
//! This crate provides the scene-graph side of the editor:
//! - `Map` - a sized canvas owning a stack of layers
//! - `Layer` - tile, object-group, image and group layers
//! - `MapObject` - objects placed on object-group layers
//! - `Tileset` / `Tile` - tile atlas configuration and per-tile data
//! - `WangSet` - terrain annotations attached to a tileset
//! - `Value` - generic property value type
//!
//! Model objects are handed around as shared `Rc<RefCell<_>>` handles
//! (`MapRef`, `LayerRef`, ...). Containment owns strongly; parent
//! back-links are weak.

mod layer;
mod map;
mod object;
mod tileset;
mod value;
mod wang;

pub use layer::{Layer, LayerData, LayerKind, LayerRef};
pub use map::{Map, MapRef};
pub use object::{MapObject, MapObjectRef, ObjectShape};
pub use tileset::{Tile, TileRef, Tileset, TilesetRef};
pub use value::Value;
pub use wang::{WangColor, WangSet, WangSetKind, WangSetRef};
