//! Partial marking: every class/struct/interface declaration gains the
//! `partial` modifier, whether or not the source type carried it. Enums and
//! delegates cannot be partial and are left untouched.

use crate::core::fragment::{DeclModifier, MemberFragment, ModuleFragment, NamespaceFragment, TypeFragment};
use crate::core::TypeKind;

pub fn mark_partial(module: ModuleFragment) -> ModuleFragment {
    ModuleFragment {
        types: module.types.into_iter().map(mark_type).collect(),
        namespaces: module.namespaces.into_iter().map(mark_namespace).collect(),
        ..module
    }
}

fn mark_namespace(ns: NamespaceFragment) -> NamespaceFragment {
    NamespaceFragment {
        name: ns.name,
        namespaces: ns.namespaces.into_iter().map(mark_namespace).collect(),
        types: ns.types.into_iter().map(mark_type).collect(),
    }
}

fn mark_type(ty: TypeFragment) -> TypeFragment {
    let mut ty = TypeFragment {
        members: ty
            .members
            .into_iter()
            .map(|member| match member {
                MemberFragment::Type(nested) => MemberFragment::Type(mark_type(nested)),
                other => other,
            })
            .collect(),
        ..ty
    };
    let combinable = matches!(
        ty.kind,
        TypeKind::Class | TypeKind::Struct | TypeKind::Interface
    );
    if combinable && !ty.has_modifier(DeclModifier::Partial) {
        ty.modifiers.push(DeclModifier::Partial);
    }
    ty
}
