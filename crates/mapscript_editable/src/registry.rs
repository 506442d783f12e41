//! Identity registry mapping native model objects to editable wrappers
//!
//! The registry guarantees at most one live wrapper per native object, as
//! observed through its lookup path: a lookup returns the existing wrapper
//! while the scripting side still holds it, and constructs a replacement
//! once the old one has been dropped. Entries are pruned lazily; a stale
//! entry is treated exactly like an absent one.

use crate::{
    EditableLayer, EditableMap, EditableMapObject, EditableTile, EditableTileset,
    EditableWangSet,
};
use log::{debug, trace};
use mapscript_core::{LayerKind, LayerRef, MapObjectRef, TileRef, TilesetRef, WangSetRef};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Resolves tilesets that are already owned by an open document.
///
/// A document-owned tileset keeps its own editable wrapper for the
/// document's lifetime; the registry only caches wrappers for tilesets no
/// document claims.
pub trait DocumentResolver {
    fn tileset_editable(&self, tileset: &TilesetRef) -> Option<Rc<EditableTileset>>;
}

/// Identity maps from native object ids to their live wrappers
///
/// Owned and passed explicitly by whoever owns the scripting session.
/// Plain-layer and object-group lookups share one map, so a layer has a
/// single wrapper no matter which accessor produced it.
#[derive(Default)]
pub struct EditableRegistry {
    layers: HashMap<Uuid, Weak<EditableLayer>>,
    map_objects: HashMap<Uuid, Weak<EditableMapObject>>,
    tilesets: HashMap<Uuid, Weak<EditableTileset>>,
    tiles: HashMap<Uuid, Weak<EditableTile>>,
    wang_sets: HashMap<Uuid, Weak<EditableWangSet>>,
    documents: Option<Box<dyn DocumentResolver>>,
}

impl EditableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that consults `documents` before caching tileset wrappers
    pub fn with_documents(documents: Box<dyn DocumentResolver>) -> Self {
        Self {
            documents: Some(documents),
            ..Self::default()
        }
    }

    /// Wrapper for a layer, created on first access.
    ///
    /// `map` is the context hint for first-time construction; when present
    /// it must own the layer.
    pub fn editable_layer(
        &mut self,
        map: Option<&Rc<EditableMap>>,
        layer: Option<&LayerRef>,
    ) -> Option<Rc<EditableLayer>> {
        let layer = layer?;
        if let Some(map) = map {
            let owner = layer.borrow().map();
            assert!(
                owner.is_some_and(|m| m.borrow().id == map.id()),
                "layer does not belong to the supplied map"
            );
        }
        Some(self.layer_wrapper(map, layer))
    }

    /// Wrapper for an object-group layer. Shares the layer identity map
    /// with [`Self::editable_layer`].
    pub fn editable_object_group(
        &mut self,
        map: Option<&Rc<EditableMap>>,
        object_group: Option<&LayerRef>,
    ) -> Option<Rc<EditableLayer>> {
        let object_group = object_group?;
        assert!(
            object_group.borrow().kind() == LayerKind::ObjectGroup,
            "layer is not an object group"
        );
        Some(self.layer_wrapper(map, object_group))
    }

    fn layer_wrapper(
        &mut self,
        map: Option<&Rc<EditableMap>>,
        layer: &LayerRef,
    ) -> Rc<EditableLayer> {
        let id = layer.borrow().id;
        if let Some(existing) = self.layers.get(&id).and_then(Weak::upgrade) {
            return existing;
        }
        let editable = Rc::new(EditableLayer::new(map.cloned(), Rc::clone(layer)));
        trace!("created editable wrapper for {:?} layer {id}", editable.kind());
        self.layers.insert(id, Rc::downgrade(&editable));
        editable
    }

    /// Wrapper for a map object. The object must already belong to an
    /// object group.
    pub fn editable_map_object(
        &mut self,
        map: Option<&Rc<EditableMap>>,
        object: Option<&MapObjectRef>,
    ) -> Option<Rc<EditableMapObject>> {
        let object = object?;
        assert!(
            object.borrow().object_group().is_some(),
            "map object must belong to an object group"
        );
        let id = object.borrow().id;
        if let Some(existing) = self.map_objects.get(&id).and_then(Weak::upgrade) {
            return Some(existing);
        }
        let editable = Rc::new(EditableMapObject::new(map.cloned(), Rc::clone(object)));
        trace!("created editable wrapper for map object {id}");
        self.map_objects.insert(id, Rc::downgrade(&editable));
        Some(editable)
    }

    /// Wrapper for a tileset.
    ///
    /// If an open document already owns an editable wrapper for the
    /// tileset, that wrapper is returned and the registry is not consulted.
    pub fn editable_tileset(&mut self, tileset: Option<&TilesetRef>) -> Option<Rc<EditableTileset>> {
        tileset.map(|tileset| self.tileset_wrapper(tileset))
    }

    fn tileset_wrapper(&mut self, tileset: &TilesetRef) -> Rc<EditableTileset> {
        if let Some(documents) = &self.documents {
            if let Some(editable) = documents.tileset_editable(tileset) {
                return editable;
            }
        }
        let id = tileset.borrow().id;
        if let Some(existing) = self.tilesets.get(&id).and_then(Weak::upgrade) {
            return existing;
        }
        let editable = EditableTileset::new(Rc::clone(tileset));
        trace!("created editable wrapper for tileset {id}");
        self.tilesets.insert(id, Rc::downgrade(&editable));
        editable
    }

    /// Wrapper for a tile, resolving the owning tileset wrapper first
    pub fn editable_tile(&mut self, tile: Option<&TileRef>) -> Option<Rc<EditableTile>> {
        let tile = tile?;
        let tileset = tile.borrow().tileset().expect("tile must belong to a tileset");
        let tileset = self.tileset_wrapper(&tileset);
        Some(self.editable_tile_in(&tileset, tile))
    }

    /// Wrapper for a tile known to belong to `tileset`
    pub fn editable_tile_in(
        &mut self,
        tileset: &Rc<EditableTileset>,
        tile: &TileRef,
    ) -> Rc<EditableTile> {
        let owner = tile.borrow().tileset();
        assert!(
            owner.is_some_and(|t| t.borrow().id == tileset.id()),
            "tile does not belong to the supplied tileset"
        );
        let id = tile.borrow().id;
        if let Some(existing) = self.tiles.get(&id).and_then(Weak::upgrade) {
            return existing;
        }
        let editable = Rc::new(EditableTile::new(Rc::clone(tileset), Rc::clone(tile)));
        trace!("created editable wrapper for tile {id}");
        self.tiles.insert(id, Rc::downgrade(&editable));
        editable
    }

    /// Wrapper for a wang set, resolving the owning tileset wrapper first
    pub fn editable_wang_set(&mut self, wang_set: Option<&WangSetRef>) -> Option<Rc<EditableWangSet>> {
        let wang_set = wang_set?;
        let tileset = wang_set
            .borrow()
            .tileset()
            .expect("wang set must belong to a tileset");
        let tileset = self.tileset_wrapper(&tileset);
        Some(self.editable_wang_set_in(&tileset, wang_set))
    }

    /// Wrapper for a wang set known to belong to `tileset`
    pub fn editable_wang_set_in(
        &mut self,
        tileset: &Rc<EditableTileset>,
        wang_set: &WangSetRef,
    ) -> Rc<EditableWangSet> {
        let owner = wang_set.borrow().tileset();
        assert!(
            owner.is_some_and(|t| t.borrow().id == tileset.id()),
            "wang set does not belong to the supplied tileset"
        );
        let id = wang_set.borrow().id;
        if let Some(existing) = self.wang_sets.get(&id).and_then(Weak::upgrade) {
            return existing;
        }
        let editable = Rc::new(EditableWangSet::new(Rc::clone(tileset), Rc::clone(wang_set)));
        trace!("created editable wrapper for wang set {id}");
        self.wang_sets.insert(id, Rc::downgrade(&editable));
        editable
    }

    /// Relinquish an owning handle to a layer constructed outside any map.
    ///
    /// If a live wrapper exists for the layer, the layer survives through
    /// that wrapper's handle; otherwise dropping `layer` here destroys it.
    pub fn release_layer(&mut self, layer: LayerRef) {
        let id = layer.borrow().id;
        if self.layers.get(&id).and_then(Weak::upgrade).is_some() {
            debug!("layer {id} retained by its editable wrapper");
        } else {
            self.layers.remove(&id);
            debug!("layer {id} released without a wrapper");
        }
    }

    /// Relinquish an owning handle to a map object, as
    /// [`Self::release_layer`]
    pub fn release_map_object(&mut self, object: MapObjectRef) {
        let id = object.borrow().id;
        if self.map_objects.get(&id).and_then(Weak::upgrade).is_some() {
            debug!("map object {id} retained by its editable wrapper");
        } else {
            self.map_objects.remove(&id);
            debug!("map object {id} released without a wrapper");
        }
    }

    /// Relinquish an owning handle to a wang set, as
    /// [`Self::release_layer`]
    pub fn release_wang_set(&mut self, wang_set: WangSetRef) {
        let id = wang_set.borrow().id;
        if self.wang_sets.get(&id).and_then(Weak::upgrade).is_some() {
            debug!("wang set {id} retained by its editable wrapper");
        } else {
            self.wang_sets.remove(&id);
            debug!("wang set {id} released without a wrapper");
        }
    }

    /// Drop every tracked entry.
    ///
    /// Live wrappers remain owned by the scripting side; the next lookup
    /// for any key constructs a fresh wrapper.
    pub fn clear(&mut self) {
        self.layers.clear();
        self.map_objects.clear();
        self.tilesets.clear();
        self.tiles.clear();
        self.wang_sets.clear();
        debug!("editable registry cleared");
    }

    // Entry counts include stale entries not yet pruned.

    pub fn tracked_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn tracked_map_objects(&self) -> usize {
        self.map_objects.len()
    }

    pub fn tracked_tilesets(&self) -> usize {
        self.tilesets.len()
    }

    pub fn tracked_tiles(&self) -> usize {
        self.tiles.len()
    }

    pub fn tracked_wang_sets(&self) -> usize {
        self.wang_sets.len()
    }
}
