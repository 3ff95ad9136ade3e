//! Maps retained symbols to declaration fragments.
//!
//! Synthesis is blind to runtime behavior: it reproduces declared shape
//! (names, parameter lists, defaults, generic constraints, inheritance)
//! and leaves every body slot empty for the stubbing pass. A symbol whose
//! shape does not match the assumed mapping yields a [`SynthesisError`]
//! naming the symbol; nothing is silently dropped.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::config::GenerationConfig;
use crate::core::fragment::{
    AccessorFragment, AccessorKind, BaseArgument, DeclModifier, DelegateFragment,
    EnumMemberFragment, EventFragment, FieldFragment, MemberFragment, MethodForm, MethodFragment,
    ModuleFragment, NamespaceFragment, PropertyFragment, StubBody, TypeFragment,
};
use crate::core::{
    AttributeUse, EventSymbol, FieldSymbol, MemberSymbol, MethodKind, MethodSymbol, ModifierSet,
    ModuleGraph, NamespaceSymbol, PropertySymbol, TypeKind, TypeSymbol,
};
use crate::errors::{SynthesisError, SynthesisResult};
use crate::filters::{SymbolFilter, SymbolRef};

/// Operator tokens an overloaded-operator declaration may carry.
static OPERATOR_TOKENS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "+", "-", "!", "~", "++", "--", "true", "false", "*", "/", "%", "&", "|", "^", "<<",
        ">>", "==", "!=", "<", ">", "<=", ">=", "implicit", "explicit",
    ]
    .into_iter()
    .collect()
});

/// Synthesize the full fragment tree for one module.
///
/// Filtering happens here, at each nesting level independently: a type must
/// pass before its members are considered, and members are tested one by
/// one. The resulting tree is un-normalized (no partial marking, original
/// declaration order, un-flattened namespaces).
pub fn synthesize_module(
    graph: &ModuleGraph,
    filter: &dyn SymbolFilter,
    config: &GenerationConfig,
) -> SynthesisResult<ModuleFragment> {
    let namespaces = graph
        .namespaces
        .iter()
        .map(|ns| synthesize_namespace(ns, "", graph, filter, config))
        .collect::<SynthesisResult<Vec<_>>>()?;

    let types = synthesize_types(&graph.types, "", "", graph, filter, config)?;

    Ok(ModuleFragment {
        name: graph.name.clone(),
        attributes: retained_attributes(&graph.attributes, config),
        types,
        namespaces,
    })
}

fn synthesize_namespace(
    ns: &NamespaceSymbol,
    parent_path: &str,
    graph: &ModuleGraph,
    filter: &dyn SymbolFilter,
    config: &GenerationConfig,
) -> SynthesisResult<NamespaceFragment> {
    let path = qualify(parent_path, &ns.name);

    let namespaces = ns
        .namespaces
        .iter()
        .map(|child| synthesize_namespace(child, &path, graph, filter, config))
        .collect::<SynthesisResult<Vec<_>>>()?;

    let types = synthesize_types(&ns.types, &path, &path, graph, filter, config)?;

    Ok(NamespaceFragment {
        name: ns.name.clone(),
        namespaces,
        types,
    })
}

/// Filter and synthesize a slice of sibling types. `scope` is the dotted
/// declaration prefix (namespaces plus enclosing types) used for identity;
/// `namespace` is the enclosing namespace used for base-type resolution.
fn synthesize_types(
    types: &[TypeSymbol],
    scope: &str,
    namespace: &str,
    graph: &ModuleGraph,
    filter: &dyn SymbolFilter,
    config: &GenerationConfig,
) -> SynthesisResult<Vec<TypeFragment>> {
    let mut fragments = Vec::new();
    for ty in types {
        let doc_id = ty.doc_id(scope);
        let symbol = SymbolRef::Type {
            symbol: ty,
            doc_id: &doc_id,
        };
        if !filter.include(&symbol) {
            continue;
        }
        fragments.push(synthesize_type(ty, scope, namespace, graph, filter, config)?);
    }
    Ok(fragments)
}

fn synthesize_type(
    ty: &TypeSymbol,
    scope: &str,
    namespace: &str,
    graph: &ModuleGraph,
    filter: &dyn SymbolFilter,
    config: &GenerationConfig,
) -> SynthesisResult<TypeFragment> {
    let identity = qualify(scope, &ty.name);

    let delegate = match ty.kind {
        TypeKind::Delegate => {
            let signature = ty.delegate_signature.as_ref().ok_or_else(|| {
                SynthesisError::unexpected_shape(&identity, "delegate type carries no signature")
            })?;
            Some(DelegateFragment {
                return_type: signature.return_type.clone(),
                parameters: signature.parameters.clone(),
            })
        }
        _ => {
            if ty.delegate_signature.is_some() {
                return Err(SynthesisError::unexpected_shape(
                    &identity,
                    "delegate signature on a non-delegate type",
                ));
            }
            None
        }
    };

    if ty.kind != TypeKind::Enum && !ty.enum_members.is_empty() {
        return Err(SynthesisError::unexpected_shape(
            &identity,
            "enum members on a non-enum type",
        ));
    }

    // Base list: base class first (classes only), then interfaces.
    let mut bases = Vec::new();
    if ty.kind == TypeKind::Class {
        if let Some(base) = &ty.base_type {
            bases.push(base.clone());
        }
    }
    bases.extend(ty.interfaces.iter().cloned());

    let members = match ty.kind {
        TypeKind::Enum | TypeKind::Delegate => Vec::new(),
        _ => synthesize_members(ty, &identity, namespace, graph, filter, config)?,
    };

    Ok(TypeFragment {
        name: ty.name.clone(),
        kind: ty.kind,
        accessibility: ty.accessibility,
        modifiers: type_modifiers(ty),
        attributes: retained_attributes(&ty.attributes, config),
        generic_params: ty.generic_params.clone(),
        bases,
        members,
        enum_underlying: ty.enum_underlying.clone(),
        enum_members: ty
            .enum_members
            .iter()
            .map(|m| EnumMemberFragment {
                name: m.name.clone(),
                value: m.value,
            })
            .collect(),
        delegate,
    })
}

fn synthesize_members(
    ty: &TypeSymbol,
    identity: &str,
    namespace: &str,
    graph: &ModuleGraph,
    filter: &dyn SymbolFilter,
    config: &GenerationConfig,
) -> SynthesisResult<Vec<MemberFragment>> {
    let mut fragments = Vec::new();
    for member in &ty.members {
        let symbol = match member {
            MemberSymbol::Method(m) => SymbolRef::Method {
                symbol: m,
                containing_kind: ty.kind,
            },
            MemberSymbol::Field(f) => SymbolRef::Field(f),
            MemberSymbol::Property(p) => SymbolRef::Property(p),
            MemberSymbol::Event(e) => SymbolRef::Event(e),
            MemberSymbol::Type(nested) => {
                let doc_id = nested.doc_id(identity);
                let symbol = SymbolRef::Type {
                    symbol: nested,
                    doc_id: &doc_id,
                };
                if filter.include(&symbol) {
                    fragments.push(MemberFragment::Type(synthesize_type(
                        nested, identity, namespace, graph, filter, config,
                    )?));
                }
                continue;
            }
        };
        if !filter.include(&symbol) {
            continue;
        }

        let in_interface = ty.kind == TypeKind::Interface;
        let fragment = match member {
            MemberSymbol::Method(m) => MemberFragment::Method(synthesize_method(
                m,
                ty,
                identity,
                namespace,
                graph,
                config,
                in_interface,
            )?),
            MemberSymbol::Field(f) => MemberFragment::Field(synthesize_field(f, config)),
            MemberSymbol::Property(p) => {
                MemberFragment::Property(synthesize_property(p, identity, config, in_interface)?)
            }
            MemberSymbol::Event(e) => {
                MemberFragment::Event(synthesize_event(e, config, in_interface))
            }
            MemberSymbol::Type(_) => unreachable!("nested types handled above"),
        };
        fragments.push(fragment);
    }
    Ok(fragments)
}

fn synthesize_method(
    method: &MethodSymbol,
    containing: &TypeSymbol,
    identity: &str,
    namespace: &str,
    graph: &ModuleGraph,
    config: &GenerationConfig,
    in_interface: bool,
) -> SynthesisResult<MethodFragment> {
    let member_identity = qualify(identity, &method.name);

    if method.kind.is_accessor() {
        return Err(SynthesisError::unexpected_shape(
            &member_identity,
            "accessor methods are represented through their owning declaration",
        ));
    }

    let form = match method.kind {
        MethodKind::Constructor => MethodForm::Constructor {
            base_call: synthesize_base_call(containing, namespace, graph),
        },
        MethodKind::Operator => {
            if !OPERATOR_TOKENS.contains(method.name.as_str()) {
                return Err(SynthesisError::unexpected_shape(
                    &member_identity,
                    format!("unknown operator token `{}`", method.name),
                ));
            }
            MethodForm::Operator
        }
        MethodKind::Ordinary => MethodForm::Ordinary,
        _ => unreachable!("accessor kinds rejected above"),
    };

    // Constructors take the declaring type's name regardless of how the
    // metadata spells them.
    let name = match method.kind {
        MethodKind::Constructor => containing.name.clone(),
        _ => method.name.clone(),
    };

    Ok(MethodFragment {
        name,
        form,
        accessibility: method.accessibility,
        modifiers: member_modifiers(&method.modifiers, in_interface),
        attributes: retained_attributes(&method.attributes, config),
        generic_params: method.generic_params.clone(),
        parameters: method.parameters.clone(),
        return_type: method.return_type.clone(),
        explicit_interface: method.explicit_interface.clone(),
        body: StubBody::None,
    })
}

/// Synthesize the `: base(...)` argument list for a constructor whose base
/// type has constructors but no parameterless one, so the emitted
/// constructor stays compilable with its body erased.
///
/// Selects the base constructor with the fewest parameters (ties broken by
/// declaration order) and passes a neutral default per parameter. A base
/// type that does not resolve inside the module graph is treated as
/// externally defined with an implicit default constructor.
fn synthesize_base_call(
    containing: &TypeSymbol,
    namespace: &str,
    graph: &ModuleGraph,
) -> Option<Vec<BaseArgument>> {
    let base_ref = containing.base_type.as_ref()?;
    let base = resolve_type(&base_ref.name, namespace, graph)?;

    let mut constructors = base.constructors().peekable();
    constructors.peek()?;
    if base.has_parameterless_constructor() {
        return None;
    }

    let chosen = constructors.min_by_key(|ctor| ctor.parameters.len())?;
    Some(
        chosen
            .parameters
            .iter()
            .map(|param| {
                if param.ty.is_value_type {
                    BaseArgument::ValueDefault
                } else {
                    BaseArgument::ReferenceDefault
                }
            })
            .collect(),
    )
}

/// Resolve a base-type name within the module: exact qualified match first,
/// then relative to the enclosing namespace.
fn resolve_type<'a>(name: &str, namespace: &str, graph: &'a ModuleGraph) -> Option<&'a TypeSymbol> {
    graph.find_type(name).or_else(|| {
        if namespace.is_empty() || name.contains('.') {
            None
        } else {
            graph.find_type(&format!("{namespace}.{name}"))
        }
    })
}

fn synthesize_field(field: &FieldSymbol, config: &GenerationConfig) -> FieldFragment {
    // Initializers are executable content and are not reproduced.
    FieldFragment {
        name: field.name.clone(),
        ty: field.ty.clone(),
        accessibility: field.accessibility,
        modifiers: member_modifiers(&field.modifiers, false),
        attributes: retained_attributes(&field.attributes, config),
    }
}

fn synthesize_property(
    property: &PropertySymbol,
    identity: &str,
    config: &GenerationConfig,
    in_interface: bool,
) -> SynthesisResult<PropertyFragment> {
    if !property.has_getter && !property.has_setter {
        return Err(SynthesisError::unexpected_shape(
            qualify(identity, &property.name),
            "property declares neither accessor",
        ));
    }

    Ok(PropertyFragment {
        name: property.name.clone(),
        ty: property.ty.clone(),
        accessibility: property.accessibility,
        modifiers: member_modifiers(&property.modifiers, in_interface),
        attributes: retained_attributes(&property.attributes, config),
        explicit_interface: property.explicit_interface.clone(),
        getter: property
            .has_getter
            .then(|| AccessorFragment::new(AccessorKind::Get)),
        setter: property
            .has_setter
            .then(|| AccessorFragment::new(AccessorKind::Set)),
    })
}

fn synthesize_event(
    event: &EventSymbol,
    config: &GenerationConfig,
    in_interface: bool,
) -> EventFragment {
    EventFragment {
        name: event.name.clone(),
        handler_type: event.handler_type.clone(),
        accessibility: event.accessibility,
        modifiers: member_modifiers(&event.modifiers, in_interface),
        attributes: retained_attributes(&event.attributes, config),
    }
}

/// Map modifier flags to keywords in their fixed rendering order. The
/// `partial` marker is not produced here; the partial-marking pass owns it.
fn type_modifiers(ty: &TypeSymbol) -> Vec<DeclModifier> {
    let mut modifiers = Vec::new();
    if ty.modifiers.is_static {
        modifiers.push(DeclModifier::Static);
    }
    if ty.modifiers.is_abstract {
        modifiers.push(DeclModifier::Abstract);
    }
    if ty.modifiers.is_sealed {
        modifiers.push(DeclModifier::Sealed);
    }
    if ty.modifiers.is_readonly {
        modifiers.push(DeclModifier::Readonly);
    }
    modifiers
}

/// Member modifiers; interface members render bare, so the abstract flag
/// every interface member carries is not spelled out there.
fn member_modifiers(set: &ModifierSet, in_interface: bool) -> Vec<DeclModifier> {
    let mut modifiers = Vec::new();
    if set.is_static {
        modifiers.push(DeclModifier::Static);
    }
    if set.is_abstract && !in_interface {
        modifiers.push(DeclModifier::Abstract);
    }
    if set.is_sealed {
        modifiers.push(DeclModifier::Sealed);
    }
    if set.is_virtual {
        modifiers.push(DeclModifier::Virtual);
    }
    if set.is_override {
        modifiers.push(DeclModifier::Override);
    }
    if set.is_readonly {
        modifiers.push(DeclModifier::Readonly);
    }
    modifiers
}

fn retained_attributes(attributes: &[AttributeUse], config: &GenerationConfig) -> Vec<AttributeUse> {
    attributes
        .iter()
        .filter(|attr| !config.excluded_attributes.contains_type(&attr.attribute_type))
        .cloned()
        .collect()
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}
