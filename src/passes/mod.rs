//! Normalization passes over the fragment tree.
//!
//! Each pass is a pure `Tree -> Tree` function producing new nodes; no
//! in-place mutation is shared across passes. The passes commute with each
//! other except that flattening must see final emptiness (it runs after
//! nothing can add or remove types) and ordering is defined on the flattened
//! shape, so the fixed sequence below is used.

pub mod erase;
pub mod flatten;
pub mod order;
pub mod partial;

use crate::core::fragment::ModuleFragment;

/// The full normalization sequence: partial marking, typeof-argument
/// erasure, namespace flattening, declaration ordering.
pub fn normalize(module: ModuleFragment) -> ModuleFragment {
    let module = partial::mark_partial(module);
    let module = erase::erase_typeof_arguments(module);
    let module = flatten::flatten_namespaces(module);
    order::order_declarations(module)
}
