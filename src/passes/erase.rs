//! Generic-argument erasure inside type-literal attribute arguments.
//!
//! A forwarding-style attribute referencing `Generic<A, B, C>` through a
//! `typeof(...)` argument keeps only the structurally meaningful arity:
//! `Generic<,,>`. [`erase_type_arguments`] is the narrow rewrite on a single
//! type reference; [`erase_typeof_arguments`] applies it across every
//! attribute application in a fragment tree.

use crate::core::fragment::{
    EventFragment, FieldFragment, MemberFragment, MethodFragment, ModuleFragment,
    NamespaceFragment, PropertyFragment, TypeFragment,
};
use crate::core::{AttributeArgument, AttributeUse, TypeRef};

/// Replace every generic argument with a bare placeholder, preserving arity.
pub fn erase_type_arguments(ty: TypeRef) -> TypeRef {
    let arity = ty.args.len();
    TypeRef {
        args: (0..arity).map(|_| TypeRef::placeholder()).collect(),
        ..ty
    }
}

/// Erase generic arguments inside every `typeof(...)` attribute argument of
/// the tree. Type references outside attribute applications (bases,
/// signatures, constraints) are never touched.
pub fn erase_typeof_arguments(module: ModuleFragment) -> ModuleFragment {
    ModuleFragment {
        attributes: erase_attribute_list(module.attributes),
        types: module.types.into_iter().map(erase_in_type).collect(),
        namespaces: module
            .namespaces
            .into_iter()
            .map(erase_in_namespace)
            .collect(),
        ..module
    }
}

fn erase_in_namespace(ns: NamespaceFragment) -> NamespaceFragment {
    NamespaceFragment {
        name: ns.name,
        namespaces: ns.namespaces.into_iter().map(erase_in_namespace).collect(),
        types: ns.types.into_iter().map(erase_in_type).collect(),
    }
}

fn erase_in_type(ty: TypeFragment) -> TypeFragment {
    TypeFragment {
        attributes: erase_attribute_list(ty.attributes),
        members: ty.members.into_iter().map(erase_in_member).collect(),
        ..ty
    }
}

fn erase_in_member(member: MemberFragment) -> MemberFragment {
    match member {
        MemberFragment::Field(f) => MemberFragment::Field(FieldFragment {
            attributes: erase_attribute_list(f.attributes),
            ..f
        }),
        MemberFragment::Method(m) => MemberFragment::Method(MethodFragment {
            attributes: erase_attribute_list(m.attributes),
            ..m
        }),
        MemberFragment::Property(p) => MemberFragment::Property(PropertyFragment {
            attributes: erase_attribute_list(p.attributes),
            ..p
        }),
        MemberFragment::Event(e) => MemberFragment::Event(EventFragment {
            attributes: erase_attribute_list(e.attributes),
            ..e
        }),
        MemberFragment::Type(nested) => MemberFragment::Type(erase_in_type(nested)),
    }
}

fn erase_attribute_list(attributes: Vec<AttributeUse>) -> Vec<AttributeUse> {
    attributes
        .into_iter()
        .map(|attr| AttributeUse {
            args: attr
                .args
                .into_iter()
                .map(|arg| match arg {
                    AttributeArgument::TypeOf(ty) => {
                        AttributeArgument::TypeOf(erase_type_arguments(ty))
                    }
                    literal @ AttributeArgument::Literal(_) => literal,
                })
                .collect(),
            ..attr
        })
        .collect()
}
