//! Declaration ordering.
//!
//! Within each type, and within each namespace for top-level types,
//! declarations sort by identifier (ordinal), with declaration kind as a
//! stable secondary key when names collide. Overloads (same name, same
//! kind) keep declaration order via sort stability. Enum members are not
//! reordered; their explicit values make the surface order-independent
//! already.

use crate::core::fragment::{MemberFragment, ModuleFragment, NamespaceFragment, TypeFragment};

pub fn order_declarations(module: ModuleFragment) -> ModuleFragment {
    ModuleFragment {
        types: order_types(module.types),
        namespaces: order_namespaces(module.namespaces),
        ..module
    }
}

fn order_namespaces(mut namespaces: Vec<NamespaceFragment>) -> Vec<NamespaceFragment> {
    namespaces.sort_by(|a, b| a.name.cmp(&b.name));
    namespaces
        .into_iter()
        .map(|ns| NamespaceFragment {
            name: ns.name,
            namespaces: order_namespaces(ns.namespaces),
            types: order_types(ns.types),
        })
        .collect()
}

fn order_types(mut types: Vec<TypeFragment>) -> Vec<TypeFragment> {
    types.sort_by(|a, b| a.name.cmp(&b.name));
    types.into_iter().map(order_members).collect()
}

fn order_members(ty: TypeFragment) -> TypeFragment {
    let mut members: Vec<MemberFragment> = ty
        .members
        .into_iter()
        .map(|member| match member {
            MemberFragment::Type(nested) => MemberFragment::Type(order_members(nested)),
            other => other,
        })
        .collect();
    members.sort_by(|a, b| {
        a.name()
            .cmp(b.name())
            .then_with(|| a.kind_rank().cmp(&b.kind_rank()))
    });
    TypeFragment { members, ..ty }
}
