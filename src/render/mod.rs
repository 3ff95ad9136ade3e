//! Serializes a normalized fragment tree to text.
//!
//! The renderer consumes a fully-formed tree and never rewrites it; all
//! shaping (partial marking, ordering, flattening, stubbing) has already
//! happened. Equal trees render to byte-identical text.

use std::fmt::Write as _;

use crate::config::Indentation;
use crate::core::fragment::{
    AccessorFragment, BaseArgument, DeclModifier, EventFragment, FieldFragment, MemberFragment,
    MethodForm, MethodFragment, ModuleFragment, NamespaceFragment, PropertyFragment, StubBody,
    TypeFragment,
};
use crate::core::{AttributeArgument, AttributeUse, ParameterSymbol, GenericParam, TypeKind, TypeRef};

pub struct Renderer {
    indentation: Indentation,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Indentation::default())
    }
}

impl Renderer {
    pub fn new(indentation: Indentation) -> Self {
        Self { indentation }
    }

    pub fn render(&self, module: &ModuleFragment) -> String {
        let mut out = String::new();
        for attr in &module.attributes {
            let _ = writeln!(out, "[assembly: {}]", format_attribute(attr));
        }
        if !module.attributes.is_empty()
            && (!module.types.is_empty() || !module.namespaces.is_empty())
        {
            out.push('\n');
        }
        for ty in &module.types {
            self.write_type(&mut out, ty, 0);
        }
        for ns in &module.namespaces {
            self.write_namespace(&mut out, ns, 0);
        }
        out
    }

    fn pad(&self, depth: usize) -> String {
        self.indentation.unit().repeat(depth)
    }

    fn write_namespace(&self, out: &mut String, ns: &NamespaceFragment, depth: usize) {
        let pad = self.pad(depth);
        let _ = writeln!(out, "{pad}namespace {}", ns.name);
        let _ = writeln!(out, "{pad}{{");
        for ty in &ns.types {
            self.write_type(out, ty, depth + 1);
        }
        for child in &ns.namespaces {
            self.write_namespace(out, child, depth + 1);
        }
        let _ = writeln!(out, "{pad}}}");
    }

    fn write_type(&self, out: &mut String, ty: &TypeFragment, depth: usize) {
        let pad = self.pad(depth);
        for attr in &ty.attributes {
            let _ = writeln!(out, "{pad}[{}]", format_attribute(attr));
        }

        let access = ty.accessibility.keyword();
        let modifiers = modifier_prefix(&ty.modifiers);

        match ty.kind {
            TypeKind::Delegate => {
                let delegate = ty
                    .delegate
                    .as_ref()
                    .expect("delegate fragment carries its signature");
                let _ = writeln!(
                    out,
                    "{pad}{access} {modifiers}delegate {} {}{}({}){};",
                    delegate.return_type,
                    ty.name,
                    generic_list(&ty.generic_params),
                    parameter_list(&delegate.parameters),
                    constraint_clauses(&ty.generic_params),
                );
            }
            TypeKind::Enum => {
                let underlying = ty
                    .enum_underlying
                    .as_deref()
                    .map(|u| format!(" : {u}"))
                    .unwrap_or_default();
                let _ = writeln!(out, "{pad}{access} enum {}{underlying}", ty.name);
                let _ = writeln!(out, "{pad}{{");
                let inner = self.pad(depth + 1);
                let last = ty.enum_members.len().saturating_sub(1);
                for (i, member) in ty.enum_members.iter().enumerate() {
                    let comma = if i == last { "" } else { "," };
                    let _ = writeln!(out, "{inner}{} = {}{comma}", member.name, member.value);
                }
                let _ = writeln!(out, "{pad}}}");
            }
            TypeKind::Class | TypeKind::Struct | TypeKind::Interface => {
                let bases = if ty.bases.is_empty() {
                    String::new()
                } else {
                    let list: Vec<String> = ty.bases.iter().map(TypeRef::to_string).collect();
                    format!(" : {}", list.join(", "))
                };
                let _ = writeln!(
                    out,
                    "{pad}{access} {modifiers}{} {}{}{bases}{}",
                    ty.kind,
                    ty.name,
                    generic_list(&ty.generic_params),
                    constraint_clauses(&ty.generic_params),
                );
                let _ = writeln!(out, "{pad}{{");
                let in_interface = ty.kind == TypeKind::Interface;
                for member in &ty.members {
                    self.write_member(out, member, depth + 1, in_interface);
                }
                let _ = writeln!(out, "{pad}}}");
            }
        }
    }

    fn write_member(
        &self,
        out: &mut String,
        member: &MemberFragment,
        depth: usize,
        in_interface: bool,
    ) {
        let pad = self.pad(depth);
        match member {
            MemberFragment::Field(field) => self.write_field(out, field, &pad),
            MemberFragment::Method(method) => {
                self.write_method(out, method, &pad, in_interface)
            }
            MemberFragment::Property(property) => {
                self.write_property(out, property, &pad, in_interface)
            }
            MemberFragment::Event(event) => self.write_event(out, event, &pad, in_interface),
            MemberFragment::Type(nested) => self.write_type(out, nested, depth),
        }
    }

    fn write_field(&self, out: &mut String, field: &FieldFragment, pad: &str) {
        for attr in &field.attributes {
            let _ = writeln!(out, "{pad}[{}]", format_attribute(attr));
        }
        let _ = writeln!(
            out,
            "{pad}{} {}{} {};",
            field.accessibility.keyword(),
            modifier_prefix(&field.modifiers),
            field.ty,
            field.name,
        );
    }

    fn write_method(
        &self,
        out: &mut String,
        method: &MethodFragment,
        pad: &str,
        in_interface: bool,
    ) {
        for attr in &method.attributes {
            let _ = writeln!(out, "{pad}[{}]", format_attribute(attr));
        }

        let prefix = if method.explicit_interface.is_some() || in_interface {
            modifier_prefix(&method.modifiers)
        } else {
            format!(
                "{} {}",
                method.accessibility.keyword(),
                modifier_prefix(&method.modifiers)
            )
        };

        let signature = match &method.form {
            MethodForm::Constructor { base_call } => {
                let initializer = match base_call {
                    Some(args) => {
                        let list: Vec<&str> =
                            args.iter().map(BaseArgument::spelling).collect();
                        format!(" : base({})", list.join(", "))
                    }
                    None => String::new(),
                };
                format!(
                    "{}({}){initializer}",
                    method.name,
                    parameter_list(&method.parameters)
                )
            }
            MethodForm::Operator => {
                // conversion operators spell the keyword before `operator`
                if method.name == "implicit" || method.name == "explicit" {
                    format!(
                        "{} operator {}({})",
                        method.name,
                        method.return_type,
                        parameter_list(&method.parameters)
                    )
                } else {
                    format!(
                        "{} operator {}({})",
                        method.return_type,
                        method.name,
                        parameter_list(&method.parameters)
                    )
                }
            }
            MethodForm::Ordinary => {
                let name = match &method.explicit_interface {
                    Some(iface) => format!("{iface}.{}", method.name),
                    None => method.name.clone(),
                };
                format!(
                    "{} {name}{}({}){}",
                    method.return_type,
                    generic_list(&method.generic_params),
                    parameter_list(&method.parameters),
                    constraint_clauses(&method.generic_params),
                )
            }
        };

        let _ = writeln!(out, "{pad}{prefix}{signature}{}", body_suffix(&method.body));
    }

    fn write_property(
        &self,
        out: &mut String,
        property: &PropertyFragment,
        pad: &str,
        in_interface: bool,
    ) {
        for attr in &property.attributes {
            let _ = writeln!(out, "{pad}[{}]", format_attribute(attr));
        }

        let prefix = if property.explicit_interface.is_some() || in_interface {
            modifier_prefix(&property.modifiers)
        } else {
            format!(
                "{} {}",
                property.accessibility.keyword(),
                modifier_prefix(&property.modifiers)
            )
        };

        let name = match &property.explicit_interface {
            Some(iface) => format!("{iface}.{}", property.name),
            None => property.name.clone(),
        };

        let accessors: Vec<String> = [property.getter.as_ref(), property.setter.as_ref()]
            .into_iter()
            .flatten()
            .map(format_accessor)
            .collect();

        let _ = writeln!(
            out,
            "{pad}{prefix}{} {name} {{ {} }}",
            property.ty,
            accessors.join(" "),
        );
    }

    fn write_event(&self, out: &mut String, event: &EventFragment, pad: &str, in_interface: bool) {
        for attr in &event.attributes {
            let _ = writeln!(out, "{pad}[{}]", format_attribute(attr));
        }
        let prefix = if in_interface {
            modifier_prefix(&event.modifiers)
        } else {
            format!(
                "{} {}",
                event.accessibility.keyword(),
                modifier_prefix(&event.modifiers)
            )
        };
        let _ = writeln!(out, "{pad}{prefix}event {} {};", event.handler_type, event.name);
    }
}

fn modifier_prefix(modifiers: &[DeclModifier]) -> String {
    let mut prefix = String::new();
    for modifier in modifiers {
        prefix.push_str(modifier.keyword());
        prefix.push(' ');
    }
    prefix
}

fn generic_list(params: &[GenericParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    format!("<{}>", names.join(", "))
}

fn constraint_clauses(params: &[GenericParam]) -> String {
    let mut clauses = String::new();
    for param in params {
        if param.constraints.is_empty() {
            continue;
        }
        let list: Vec<String> = param.constraints.iter().map(|c| c.to_string()).collect();
        let _ = write!(clauses, " where {} : {}", param.name, list.join(", "));
    }
    clauses
}

fn parameter_list(parameters: &[ParameterSymbol]) -> String {
    let rendered: Vec<String> = parameters
        .iter()
        .map(|param| {
            let mode = param
                .mode
                .map(|m| format!("{} ", m.keyword()))
                .unwrap_or_default();
            let default = param
                .default_value
                .as_ref()
                .map(|value| format!(" = {value}"))
                .unwrap_or_default();
            format!("{mode}{} {}{default}", param.ty, param.name)
        })
        .collect();
    rendered.join(", ")
}

fn body_suffix(body: &StubBody) -> String {
    match body {
        StubBody::None => ";".to_string(),
        StubBody::Empty => " { }".to_string(),
        StubBody::Throw(None) => " { throw null; }".to_string(),
        StubBody::Throw(Some(message)) => format!(
            " {{ throw new PlatformNotSupportedException(\"{}\"); }}",
            message.escape_default()
        ),
    }
}

fn format_accessor(accessor: &AccessorFragment) -> String {
    let keyword = accessor.kind.keyword();
    match &accessor.body {
        StubBody::None => format!("{keyword};"),
        StubBody::Empty => format!("{keyword} {{ }}"),
        StubBody::Throw(None) => format!("{keyword} {{ throw null; }}"),
        StubBody::Throw(Some(message)) => format!(
            "{keyword} {{ throw new PlatformNotSupportedException(\"{}\"); }}",
            message.escape_default()
        ),
    }
}

fn format_attribute(attr: &AttributeUse) -> String {
    let name = attribute_display_name(&attr.attribute_type);
    if attr.args.is_empty() {
        return name;
    }
    let args: Vec<String> = attr
        .args
        .iter()
        .map(|arg| match arg {
            AttributeArgument::Literal(value) => value.to_string(),
            AttributeArgument::TypeOf(ty) => format!("typeof({ty})"),
        })
        .collect();
    format!("{name}({})", args.join(", "))
}

/// Attribute type names render with the conventional `Attribute` suffix
/// stripped from the final segment.
fn attribute_display_name(ty: &TypeRef) -> String {
    let mut name = ty.name.clone();
    let simple = ty.simple_name();
    if simple.len() > "Attribute".len() && simple.ends_with("Attribute") {
        let trimmed = simple.len() - "Attribute".len();
        let prefix_len = name.len() - simple.len();
        name.truncate(prefix_len + trimmed);
    }
    name
}
