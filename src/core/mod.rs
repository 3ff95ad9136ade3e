pub mod fragment;

use serde::{Deserialize, Serialize};

/// Fully materialized symbol graph for one compiled module.
///
/// Produced by an external loader (deserialized from JSON by the front end)
/// and treated as read-only for the duration of one pipeline run. Unresolved
/// references are simply absent from the graph.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModuleGraph {
    pub name: String,
    /// Module-level attributes (e.g. type-forwarding declarations).
    #[serde(default)]
    pub attributes: Vec<AttributeUse>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceSymbol>,
    /// Types declared outside any namespace.
    #[serde(default)]
    pub types: Vec<TypeSymbol>,
}

impl ModuleGraph {
    /// Look up a type declared in this module by qualified name
    /// (`Ns.Sub.Type`). Types from other modules are not reachable here.
    pub fn find_type(&self, qualified: &str) -> Option<&TypeSymbol> {
        fn search<'a>(
            prefix: &str,
            namespaces: &'a [NamespaceSymbol],
            types: &'a [TypeSymbol],
            target: &str,
        ) -> Option<&'a TypeSymbol> {
            for ty in types {
                let candidate = if prefix.is_empty() {
                    ty.name.clone()
                } else {
                    format!("{prefix}.{}", ty.name)
                };
                if candidate == target {
                    return Some(ty);
                }
            }
            for ns in namespaces {
                let child_prefix = if prefix.is_empty() {
                    ns.name.clone()
                } else {
                    format!("{prefix}.{}", ns.name)
                };
                if let Some(found) = search(&child_prefix, &ns.namespaces, &ns.types, target) {
                    return Some(found);
                }
            }
            None
        }

        search("", &self.namespaces, &self.types, qualified)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NamespaceSymbol {
    pub name: String,
    #[serde(default)]
    pub namespaces: Vec<NamespaceSymbol>,
    #[serde(default)]
    pub types: Vec<TypeSymbol>,
}

/// Kind taxonomy for named types.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        };
        write!(f, "{keyword}")
    }
}

/// Declared accessibility of a symbol.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Public,
    Protected,
    ProtectedInternal,
    Internal,
    PrivateProtected,
    Private,
}

impl Accessibility {
    /// The source-level keyword spelling.
    pub fn keyword(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Protected => "protected",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::Internal => "internal",
            Accessibility::PrivateProtected => "private protected",
            Accessibility::Private => "private",
        }
    }

    /// Whether a symbol with this accessibility is reachable from outside
    /// its declaring module.
    pub fn visible_outside_module(&self) -> bool {
        matches!(
            self,
            Accessibility::Public | Accessibility::Protected | Accessibility::ProtectedInternal
        )
    }
}

impl std::fmt::Display for Accessibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Declared modifier flags carried by a symbol. Only the modifiers that
/// survive into a declaration-only surface are modeled.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModifierSet {
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_sealed: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_readonly: bool,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_override: bool,
}

/// Reference to a type by (possibly qualified) name plus generic arguments.
///
/// `is_value_type` drives the neutral-default spelling (`default` vs
/// `default!`) when a base-constructor call is synthesized.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<TypeRef>,
    #[serde(default)]
    pub is_value_type: bool,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            is_value_type: false,
        }
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            is_value_type: true,
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
            is_value_type: false,
        }
    }

    /// The `void` pseudo-type used as the default method return type.
    pub fn void() -> Self {
        TypeRef::value("void")
    }

    pub fn is_void(&self) -> bool {
        self.name == "void" && self.args.is_empty()
    }

    /// An erased generic-argument placeholder, rendered as an empty slot
    /// between commas (`Generic<,,>`).
    pub fn placeholder() -> Self {
        TypeRef::named("")
    }

    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }

    /// Last segment of a dotted name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Identity token for exclusion-list matching (`T:Ns.Name` with a
    /// backtick arity suffix for generic types).
    pub fn doc_id(&self) -> String {
        if self.args.is_empty() {
            format!("T:{}", self.name)
        } else {
            format!("T:{}`{}", self.name, self.args.len())
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    // erased placeholders keep bare commas: `Generic<,,>`
                    if arg.is_placeholder() {
                        write!(f, ",")?;
                    } else {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// Generic parameter with its constraint clause, constraints preserved in
/// declaration order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenericParam {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<GenericConstraint>,
}

impl GenericParam {
    pub fn unconstrained(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GenericConstraint {
    /// `class`
    ReferenceType,
    /// `struct`
    ValueType,
    /// `new()`
    DefaultConstructor,
    /// A base-type or interface constraint.
    Type(TypeRef),
}

impl std::fmt::Display for GenericConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericConstraint::ReferenceType => write!(f, "class"),
            GenericConstraint::ValueType => write!(f, "struct"),
            GenericConstraint::DefaultConstructor => write!(f, "new()"),
            GenericConstraint::Type(ty) => write!(f, "{ty}"),
        }
    }
}

/// An attribute application: attribute type plus constructor arguments.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AttributeUse {
    pub attribute_type: TypeRef,
    #[serde(default)]
    pub args: Vec<AttributeArgument>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeArgument {
    Literal(LiteralValue),
    /// A type-literal argument (`typeof(T)`); the only context where
    /// generic-argument erasure applies.
    TypeOf(TypeRef),
}

/// Compile-time constant values appearing as parameter defaults and
/// attribute arguments.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LiteralValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Null,
    /// A named enum constant; rendered fully qualified.
    EnumMember { enum_type: TypeRef, member: String },
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Bool(v) => write!(f, "{v}"),
            LiteralValue::Int(v) => write!(f, "{v}"),
            LiteralValue::Float(v) => write!(f, "{v}"),
            LiteralValue::Str(v) => write!(f, "\"{}\"", v.escape_default()),
            LiteralValue::Null => write!(f, "null"),
            LiteralValue::EnumMember { enum_type, member } => write!(f, "{enum_type}.{member}"),
        }
    }
}

/// A named type declaration in the graph.
///
/// Enum metadata, delegate signatures and member lists are populated
/// according to `kind`; a mismatch between `kind` and the populated fields
/// is a synthesis error, not a silent drop.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TypeSymbol {
    pub name: String,
    pub kind: TypeKind,
    pub accessibility: Accessibility,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeUse>,
    #[serde(default)]
    pub generic_params: Vec<GenericParam>,
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub members: Vec<MemberSymbol>,
    #[serde(default)]
    pub enum_underlying: Option<String>,
    #[serde(default)]
    pub enum_members: Vec<EnumMemberSymbol>,
    #[serde(default)]
    pub delegate_signature: Option<DelegateSignature>,
}

impl TypeSymbol {
    /// Identity token of this type as declared under `namespace_path`
    /// (empty for the global namespace).
    pub fn doc_id(&self, namespace_path: &str) -> String {
        let qualified = if namespace_path.is_empty() {
            self.name.clone()
        } else {
            format!("{namespace_path}.{}", self.name)
        };
        if self.generic_params.is_empty() {
            format!("T:{qualified}")
        } else {
            format!("T:{qualified}`{}", self.generic_params.len())
        }
    }

    pub fn constructors(&self) -> impl Iterator<Item = &MethodSymbol> {
        self.members.iter().filter_map(|member| match member {
            MemberSymbol::Method(method) if method.kind == MethodKind::Constructor => Some(method),
            _ => None,
        })
    }

    pub fn has_parameterless_constructor(&self) -> bool {
        self.constructors().any(|ctor| ctor.parameters.is_empty())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MemberSymbol {
    Method(MethodSymbol),
    Field(FieldSymbol),
    Property(PropertySymbol),
    Event(EventSymbol),
    /// A nested type declaration.
    Type(TypeSymbol),
}

impl MemberSymbol {
    pub fn name(&self) -> &str {
        match self {
            MemberSymbol::Method(m) => &m.name,
            MemberSymbol::Field(f) => &f.name,
            MemberSymbol::Property(p) => &p.name,
            MemberSymbol::Event(e) => &e.name,
            MemberSymbol::Type(t) => &t.name,
        }
    }
}

/// Kind taxonomy for method symbols. Accessor kinds never survive
/// filtering; they are represented through their owning property or event.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    PropertyGetter,
    PropertySetter,
    EventAdder,
    EventRemover,
    Operator,
    DelegateInvoke,
}

impl MethodKind {
    /// Compiler-synthesized method kinds that are represented through their
    /// owning declaration instead of a standalone method.
    pub fn is_accessor(&self) -> bool {
        matches!(
            self,
            MethodKind::PropertyGetter
                | MethodKind::PropertySetter
                | MethodKind::EventAdder
                | MethodKind::EventRemover
                | MethodKind::DelegateInvoke
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MethodSymbol {
    pub name: String,
    #[serde(default)]
    pub kind: MethodKind,
    pub accessibility: Accessibility,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeUse>,
    #[serde(default)]
    pub generic_params: Vec<GenericParam>,
    #[serde(default)]
    pub parameters: Vec<ParameterSymbol>,
    #[serde(default = "TypeRef::void")]
    pub return_type: TypeRef,
    /// Set for explicit interface implementations; the declaration then
    /// carries the interface-qualified name and no accessibility keyword.
    #[serde(default)]
    pub explicit_interface: Option<TypeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParameterSymbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub default_value: Option<LiteralValue>,
    #[serde(default)]
    pub mode: Option<ParameterMode>,
}

impl ParameterSymbol {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
            mode: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParameterMode {
    Ref,
    Out,
    In,
    Params,
}

impl ParameterMode {
    pub fn keyword(&self) -> &'static str {
        match self {
            ParameterMode::Ref => "ref",
            ParameterMode::Out => "out",
            ParameterMode::In => "in",
            ParameterMode::Params => "params",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldSymbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub accessibility: Accessibility,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeUse>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PropertySymbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub accessibility: Accessibility,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeUse>,
    #[serde(default)]
    pub has_getter: bool,
    #[serde(default)]
    pub has_setter: bool,
    #[serde(default)]
    pub explicit_interface: Option<TypeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EventSymbol {
    pub name: String,
    pub handler_type: TypeRef,
    pub accessibility: Accessibility,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeUse>,
}

/// Enum members always carry their resolved numeric value so the emitted
/// surface stays independent of declaration-order changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EnumMemberSymbol {
    pub name: String,
    pub value: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DelegateSignature {
    #[serde(default = "TypeRef::void")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<ParameterSymbol>,
}
