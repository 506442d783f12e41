//! Scripting-facing editable wrappers for the mapscript model
//!
//! Scripts never touch native model objects directly; they work with
//! `Editable*` facades handed out by the [`EditableRegistry`]. The registry
//! keeps at most one live wrapper per native object: a lookup returns the
//! existing wrapper while the scripting side still holds it, and lazily
//! constructs a replacement once it has been dropped.
//!
//! Ownership follows the handles: the registry stores only weak references
//! to wrappers, and each wrapper holds a strong handle to its native
//! object, so a native object a script can still reach is never destroyed
//! out from under it.

mod layer;
mod map;
mod map_object;
pub mod prelude;
mod registry;
mod tileset;
mod wang_set;

pub use layer::EditableLayer;
pub use map::EditableMap;
pub use map_object::EditableMapObject;
pub use registry::{DocumentResolver, EditableRegistry};
pub use tileset::{EditableTile, EditableTileset};
pub use wang_set::EditableWangSet;
