//! Common imports for working with the editable layer

pub use crate::{
    DocumentResolver, EditableLayer, EditableMap, EditableMapObject, EditableRegistry,
    EditableTile, EditableTileset, EditableWangSet,
};
pub use mapscript_core::{
    Layer, LayerData, LayerKind, LayerRef, Map, MapObject, MapObjectRef, MapRef, ObjectShape,
    Tile, TileRef, Tileset, TilesetRef, Value, WangColor, WangSet, WangSetKind, WangSetRef,
};
