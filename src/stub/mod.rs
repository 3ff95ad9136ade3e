//! Body-stubbing policy.
//!
//! Fixed per member kind: constructors, void methods and setters get an
//! empty body; value-returning methods and getters get a throw stub;
//! abstract and interface members keep no body at all. The only
//! configurable knob is the throw-stub message: unset, the stub is
//! `throw null;`; set, it raises a platform-not-supported signal carrying
//! the literal message.

use crate::core::fragment::{
    AccessorFragment, MemberFragment, MethodForm, MethodFragment, ModuleFragment,
    NamespaceFragment, PropertyFragment, StubBody, TypeFragment,
};
use crate::core::TypeKind;

#[derive(Clone, Debug, Default)]
pub struct StubPolicy {
    exception_message: Option<String>,
}

impl StubPolicy {
    pub fn new(exception_message: Option<String>) -> Self {
        Self { exception_message }
    }

    fn throw_stub(&self) -> StubBody {
        StubBody::Throw(self.exception_message.clone())
    }

    /// Fill every body slot in the tree. Pure `Tree -> Tree`.
    pub fn apply(&self, module: ModuleFragment) -> ModuleFragment {
        ModuleFragment {
            types: module
                .types
                .into_iter()
                .map(|ty| self.stub_type(ty))
                .collect(),
            namespaces: module
                .namespaces
                .into_iter()
                .map(|ns| self.stub_namespace(ns))
                .collect(),
            ..module
        }
    }

    fn stub_namespace(&self, ns: NamespaceFragment) -> NamespaceFragment {
        NamespaceFragment {
            name: ns.name,
            namespaces: ns
                .namespaces
                .into_iter()
                .map(|child| self.stub_namespace(child))
                .collect(),
            types: ns.types.into_iter().map(|ty| self.stub_type(ty)).collect(),
        }
    }

    fn stub_type(&self, ty: TypeFragment) -> TypeFragment {
        let in_interface = ty.kind == TypeKind::Interface;
        TypeFragment {
            members: ty
                .members
                .into_iter()
                .map(|member| self.stub_member(member, in_interface))
                .collect(),
            ..ty
        }
    }

    fn stub_member(&self, member: MemberFragment, in_interface: bool) -> MemberFragment {
        match member {
            MemberFragment::Method(method) => {
                MemberFragment::Method(self.stub_method(method, in_interface))
            }
            MemberFragment::Property(property) => {
                MemberFragment::Property(self.stub_property(property, in_interface))
            }
            // Fields and events never carry a body; nested types recurse.
            MemberFragment::Type(nested) => MemberFragment::Type(self.stub_type(nested)),
            other @ (MemberFragment::Field(_) | MemberFragment::Event(_)) => other,
        }
    }

    fn stub_method(&self, method: MethodFragment, in_interface: bool) -> MethodFragment {
        if in_interface || method.is_abstract() {
            return MethodFragment {
                body: StubBody::None,
                ..method
            };
        }
        let body = match &method.form {
            MethodForm::Constructor { .. } => StubBody::Empty,
            MethodForm::Ordinary | MethodForm::Operator => {
                if method.return_type.is_void() {
                    StubBody::Empty
                } else {
                    self.throw_stub()
                }
            }
        };
        MethodFragment { body, ..method }
    }

    fn stub_property(&self, property: PropertyFragment, in_interface: bool) -> PropertyFragment {
        if in_interface || property.is_abstract() {
            return property;
        }
        PropertyFragment {
            getter: property.getter.map(|accessor| AccessorFragment {
                body: self.throw_stub(),
                ..accessor
            }),
            setter: property.setter.map(|accessor| AccessorFragment {
                body: StubBody::Empty,
                ..accessor
            }),
            ..property
        }
    }
}
