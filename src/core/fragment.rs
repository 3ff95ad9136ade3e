//! Declaration-fragment tree: the synthesized, body-erased output nodes.
//!
//! Fragments mirror the symbol taxonomy but carry only declared shape plus a
//! body slot. They are created per module pass, rewritten by the
//! normalization passes as pure `Tree -> Tree` functions, rendered once and
//! discarded; nothing here is shared across modules.

use crate::core::{
    Accessibility, AttributeUse, GenericParam, ParameterSymbol, TypeKind, TypeRef,
};

/// Root of the synthesized tree for one module.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleFragment {
    pub name: String,
    pub attributes: Vec<AttributeUse>,
    /// Types declared outside any namespace.
    pub types: Vec<TypeFragment>,
    pub namespaces: Vec<NamespaceFragment>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamespaceFragment {
    /// Dotted after namespace flattening (`A.B.C`).
    pub name: String,
    pub namespaces: Vec<NamespaceFragment>,
    pub types: Vec<TypeFragment>,
}

impl NamespaceFragment {
    /// True when no type is retained anywhere in this subtree.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.namespaces.iter().all(NamespaceFragment::is_empty)
    }
}

/// Modifier keywords in their fixed rendering order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeclModifier {
    Static,
    Abstract,
    Sealed,
    Virtual,
    Override,
    Readonly,
    /// The fragment-combinable marker, appended by the partial-marking pass.
    Partial,
}

impl DeclModifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclModifier::Static => "static",
            DeclModifier::Abstract => "abstract",
            DeclModifier::Sealed => "sealed",
            DeclModifier::Virtual => "virtual",
            DeclModifier::Override => "override",
            DeclModifier::Readonly => "readonly",
            DeclModifier::Partial => "partial",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeFragment {
    pub name: String,
    pub kind: TypeKind,
    pub accessibility: Accessibility,
    pub modifiers: Vec<DeclModifier>,
    pub attributes: Vec<AttributeUse>,
    pub generic_params: Vec<GenericParam>,
    /// Base class (classes only) followed by implemented interfaces.
    pub bases: Vec<TypeRef>,
    pub members: Vec<MemberFragment>,
    pub enum_underlying: Option<String>,
    pub enum_members: Vec<EnumMemberFragment>,
    pub delegate: Option<DelegateFragment>,
}

impl TypeFragment {
    pub fn has_modifier(&self, modifier: DeclModifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MemberFragment {
    Field(FieldFragment),
    Method(MethodFragment),
    Property(PropertyFragment),
    Event(EventFragment),
    Type(TypeFragment),
}

impl MemberFragment {
    pub fn name(&self) -> &str {
        match self {
            MemberFragment::Field(f) => &f.name,
            MemberFragment::Method(m) => &m.name,
            MemberFragment::Property(p) => &p.name,
            MemberFragment::Event(e) => &e.name,
            MemberFragment::Type(t) => &t.name,
        }
    }

    /// Secondary ordering key when sibling declarations share an identifier.
    pub fn kind_rank(&self) -> u8 {
        match self {
            MemberFragment::Field(_) => 0,
            MemberFragment::Method(_) => 1,
            MemberFragment::Property(_) => 2,
            MemberFragment::Event(_) => 3,
            MemberFragment::Type(_) => 4,
        }
    }
}

/// Shape discriminator for method-like fragments.
#[derive(Clone, Debug, PartialEq)]
pub enum MethodForm {
    Ordinary,
    Constructor {
        /// Synthesized `: base(...)` argument list, present when the base
        /// type has constructors but no parameterless one.
        base_call: Option<Vec<BaseArgument>>,
    },
    /// Overloaded operator; the fragment name holds the operator token.
    Operator,
}

/// Neutral default passed to a synthesized base-constructor call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseArgument {
    /// `default` for value-typed parameters.
    ValueDefault,
    /// `default!` for reference-typed parameters.
    ReferenceDefault,
}

impl BaseArgument {
    pub fn spelling(&self) -> &'static str {
        match self {
            BaseArgument::ValueDefault => "default",
            BaseArgument::ReferenceDefault => "default!",
        }
    }
}

/// Placeholder body assigned by the stubbing pass.
///
/// `None` is both the initial state after synthesis and the final state for
/// members that legitimately carry no body (abstract and interface members).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StubBody {
    #[default]
    None,
    Empty,
    /// `throw null;` or, with a configured message,
    /// `throw new PlatformNotSupportedException("...");`
    Throw(Option<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodFragment {
    pub name: String,
    pub form: MethodForm,
    pub accessibility: Accessibility,
    pub modifiers: Vec<DeclModifier>,
    pub attributes: Vec<AttributeUse>,
    pub generic_params: Vec<GenericParam>,
    pub parameters: Vec<ParameterSymbol>,
    pub return_type: TypeRef,
    pub explicit_interface: Option<TypeRef>,
    pub body: StubBody,
}

impl MethodFragment {
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(&DeclModifier::Abstract)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldFragment {
    pub name: String,
    pub ty: TypeRef,
    pub accessibility: Accessibility,
    pub modifiers: Vec<DeclModifier>,
    pub attributes: Vec<AttributeUse>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccessorFragment {
    pub kind: AccessorKind,
    pub body: StubBody,
}

impl AccessorFragment {
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            kind,
            body: StubBody::None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyFragment {
    pub name: String,
    pub ty: TypeRef,
    pub accessibility: Accessibility,
    pub modifiers: Vec<DeclModifier>,
    pub attributes: Vec<AttributeUse>,
    pub explicit_interface: Option<TypeRef>,
    pub getter: Option<AccessorFragment>,
    pub setter: Option<AccessorFragment>,
}

impl PropertyFragment {
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(&DeclModifier::Abstract)
    }
}

/// Events render as a single declaration with no accessor bodies.
#[derive(Clone, Debug, PartialEq)]
pub struct EventFragment {
    pub name: String,
    pub handler_type: TypeRef,
    pub accessibility: Accessibility,
    pub modifiers: Vec<DeclModifier>,
    pub attributes: Vec<AttributeUse>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumMemberFragment {
    pub name: String,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DelegateFragment {
    pub return_type: TypeRef,
    pub parameters: Vec<ParameterSymbol>,
}
