//! Shared builders for symbol-graph fixtures.
#![allow(dead_code)]

use refgen::core::{
    Accessibility, DelegateSignature, EnumMemberSymbol, EventSymbol, FieldSymbol, MethodKind,
    MethodSymbol, ModifierSet, ModuleGraph, NamespaceSymbol, ParameterSymbol, PropertySymbol,
    TypeKind, TypeRef, TypeSymbol,
};

pub fn graph(name: &str, namespaces: Vec<NamespaceSymbol>) -> ModuleGraph {
    ModuleGraph {
        name: name.to_string(),
        attributes: Vec::new(),
        namespaces,
        types: Vec::new(),
    }
}

pub fn namespace(name: &str, types: Vec<TypeSymbol>) -> NamespaceSymbol {
    NamespaceSymbol {
        name: name.to_string(),
        namespaces: Vec::new(),
        types,
    }
}

pub fn nested_namespace(name: &str, children: Vec<NamespaceSymbol>) -> NamespaceSymbol {
    NamespaceSymbol {
        name: name.to_string(),
        namespaces: children,
        types: Vec::new(),
    }
}

pub fn type_symbol(name: &str, kind: TypeKind) -> TypeSymbol {
    TypeSymbol {
        name: name.to_string(),
        kind,
        accessibility: Accessibility::Public,
        modifiers: ModifierSet::default(),
        is_implicit: false,
        attributes: Vec::new(),
        generic_params: Vec::new(),
        base_type: None,
        interfaces: Vec::new(),
        members: Vec::new(),
        enum_underlying: None,
        enum_members: Vec::new(),
        delegate_signature: None,
    }
}

pub fn class(name: &str) -> TypeSymbol {
    type_symbol(name, TypeKind::Class)
}

pub fn struct_type(name: &str) -> TypeSymbol {
    type_symbol(name, TypeKind::Struct)
}

pub fn interface(name: &str) -> TypeSymbol {
    type_symbol(name, TypeKind::Interface)
}

pub fn enum_type(name: &str, members: &[(&str, i64)]) -> TypeSymbol {
    let mut ty = type_symbol(name, TypeKind::Enum);
    ty.enum_members = members
        .iter()
        .map(|(member, value)| EnumMemberSymbol {
            name: member.to_string(),
            value: *value,
        })
        .collect();
    ty
}

pub fn delegate(name: &str, return_type: TypeRef, parameters: Vec<ParameterSymbol>) -> TypeSymbol {
    let mut ty = type_symbol(name, TypeKind::Delegate);
    ty.delegate_signature = Some(DelegateSignature {
        return_type,
        parameters,
    });
    ty
}

pub fn method(name: &str, return_type: TypeRef) -> MethodSymbol {
    MethodSymbol {
        name: name.to_string(),
        kind: MethodKind::Ordinary,
        accessibility: Accessibility::Public,
        modifiers: ModifierSet::default(),
        is_implicit: false,
        attributes: Vec::new(),
        generic_params: Vec::new(),
        parameters: Vec::new(),
        return_type,
        explicit_interface: None,
    }
}

pub fn constructor(parameters: Vec<ParameterSymbol>) -> MethodSymbol {
    MethodSymbol {
        name: ".ctor".to_string(),
        kind: MethodKind::Constructor,
        accessibility: Accessibility::Public,
        modifiers: ModifierSet::default(),
        is_implicit: false,
        attributes: Vec::new(),
        generic_params: Vec::new(),
        parameters,
        return_type: TypeRef::void(),
        explicit_interface: None,
    }
}

pub fn property(name: &str, ty: TypeRef, has_getter: bool, has_setter: bool) -> PropertySymbol {
    PropertySymbol {
        name: name.to_string(),
        ty,
        accessibility: Accessibility::Public,
        modifiers: ModifierSet::default(),
        is_implicit: false,
        attributes: Vec::new(),
        has_getter,
        has_setter,
        explicit_interface: None,
    }
}

pub fn field(name: &str, ty: TypeRef) -> FieldSymbol {
    FieldSymbol {
        name: name.to_string(),
        ty,
        accessibility: Accessibility::Public,
        modifiers: ModifierSet::default(),
        is_implicit: false,
        attributes: Vec::new(),
    }
}

pub fn event(name: &str, handler_type: TypeRef) -> EventSymbol {
    EventSymbol {
        name: name.to_string(),
        handler_type,
        accessibility: Accessibility::Public,
        modifiers: ModifierSet::default(),
        is_implicit: false,
        attributes: Vec::new(),
    }
}

pub fn param(name: &str, ty: TypeRef) -> ParameterSymbol {
    ParameterSymbol::new(name, ty)
}

pub fn int() -> TypeRef {
    TypeRef::value("int")
}

pub fn boolean() -> TypeRef {
    TypeRef::value("bool")
}

pub fn string() -> TypeRef {
    TypeRef::named("string")
}
