//! Namespace flattening.
//!
//! A chain of nested namespaces where every level except the innermost has
//! exactly one child and no direct types collapses into a single dotted-name
//! declaration (`A { B { C { T } } }` becomes `A.B.C { T }`). Namespace
//! subtrees retaining no type anywhere are dropped entirely.

use crate::core::fragment::{ModuleFragment, NamespaceFragment};

pub fn flatten_namespaces(module: ModuleFragment) -> ModuleFragment {
    ModuleFragment {
        namespaces: module
            .namespaces
            .into_iter()
            .filter_map(flatten)
            .collect(),
        ..module
    }
}

fn flatten(ns: NamespaceFragment) -> Option<NamespaceFragment> {
    let mut ns = NamespaceFragment {
        name: ns.name,
        namespaces: ns.namespaces.into_iter().filter_map(flatten).collect(),
        types: ns.types,
    };

    // Collapse single-child links with no direct types into the child.
    while ns.types.is_empty() && ns.namespaces.len() == 1 {
        let child = ns.namespaces.pop().expect("length checked");
        ns = NamespaceFragment {
            name: format!("{}.{}", ns.name, child.name),
            namespaces: child.namespaces,
            types: child.types,
        };
    }

    if ns.is_empty() {
        None
    } else {
        Some(ns)
    }
}
