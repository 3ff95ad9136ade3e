//! End-to-end surface generation: symbol graph in, rendered text out.

mod common;

use common::*;
use indoc::indoc;
use pretty_assertions::assert_eq;

use refgen::core::{
    Accessibility, AttributeArgument, AttributeUse, GenericConstraint, GenericParam,
    LiteralValue, MemberSymbol, MethodKind, ModuleGraph, TypeRef,
};
use refgen::{
    ExclusionSet, GenerationConfig, IntersectionFilter, VisibilityFloor,
};

fn generate(graph: &ModuleGraph, config: &GenerationConfig) -> String {
    let filter = IntersectionFilter::standard(config);
    refgen::render_module(graph, &filter, config).expect("pipeline should succeed")
}

fn generate_default(graph: &ModuleGraph) -> String {
    generate(graph, &GenerationConfig::default())
}

#[test]
fn empty_sealed_class_gains_partial_and_keeps_sealed() {
    let mut ty = class("C");
    ty.modifiers.is_sealed = true;
    let graph = graph("lib", vec![namespace("Foo", vec![ty])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public sealed partial class C
                {
                }
            }
        "}
    );
}

#[test]
fn namespace_chain_collapses_to_dotted_name() {
    let tree = nested_namespace(
        "A",
        vec![
            nested_namespace("B", Vec::new()),
            nested_namespace(
                "C",
                vec![namespace("D", vec![struct_type("Bar")])],
            ),
        ],
    );
    let graph = graph("lib", vec![tree]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace A.C.D
            {
                public partial struct Bar
                {
                }
            }
        "}
    );
}

#[test]
fn empty_namespace_subtree_renders_nothing() {
    let graph = graph(
        "lib",
        vec![nested_namespace(
            "A",
            vec![nested_namespace("B", Vec::new())],
        )],
    );
    assert_eq!(generate_default(&graph), "");
}

#[test]
fn top_level_types_render_in_name_order() {
    let graph = graph(
        "lib",
        vec![namespace("N", vec![class("Foo"), class("Bar")])],
    );

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace N
            {
                public partial class Bar
                {
                }
                public partial class Foo
                {
                }
            }
        "}
    );
}

#[test]
fn properties_stub_getter_with_throw_and_setter_empty() {
    let mut car = class("Car");
    car.members = vec![
        MemberSymbol::Property(property("Drivers", TypeRef::value("int?"), true, false)),
        MemberSymbol::Property(property("Wheels", int(), true, false)),
        MemberSymbol::Property(property("IsRunning", boolean(), true, true)),
        MemberSymbol::Property(property("Is4x4", boolean(), true, true)),
    ];
    let graph = graph("lib", vec![namespace("Foo", vec![car])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public partial class Car
                {
                    public int? Drivers { get { throw null; } }
                    public bool Is4x4 { get { throw null; } set { } }
                    public bool IsRunning { get { throw null; } set { } }
                    public int Wheels { get { throw null; } }
                }
            }
        "}
    );
}

#[test]
fn abstract_members_keep_signature_only() {
    let mut car = class("Car");
    car.modifiers.is_abstract = true;
    car.accessibility = Accessibility::Internal;

    let mut wheels = property("Wheels", TypeRef::value("int?"), true, false);
    wheels.accessibility = Accessibility::Protected;
    wheels.modifiers.is_abstract = true;

    let mut running = property("IsRunning", boolean(), true, true);
    running.modifiers.is_abstract = true;

    car.members = vec![
        MemberSymbol::Property(wheels),
        MemberSymbol::Property(running),
    ];
    let graph = graph("lib", vec![namespace("Foo", vec![car])]);

    let config = GenerationConfig {
        visibility: VisibilityFloor::IncludeInternal,
        ..Default::default()
    };
    assert_eq!(
        generate(&graph, &config),
        indoc! {"
            namespace Foo
            {
                internal abstract partial class Car
                {
                    public abstract bool IsRunning { get; set; }
                    protected abstract int? Wheels { get; }
                }
            }
        "}
    );
}

#[test]
fn interface_members_render_bare() {
    let mut point = interface("IPoint");
    let mut x = property("X", int(), true, true);
    x.modifiers.is_abstract = true;
    let mut y = property("Y", int(), true, true);
    y.modifiers.is_abstract = true;
    let mut distance = method("CalculateDistance", TypeRef::value("double"));
    distance.modifiers.is_abstract = true;
    distance.parameters = vec![param("p", TypeRef::named("IPoint"))];

    point.members = vec![
        MemberSymbol::Property(x),
        MemberSymbol::Property(y),
        MemberSymbol::Method(distance),
    ];
    let graph = graph("lib", vec![namespace("Foo", vec![point])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public partial interface IPoint
                {
                    double CalculateDistance(IPoint p);
                    int X { get; set; }
                    int Y { get; set; }
                }
            }
        "}
    );
}

#[test]
fn enum_members_keep_declaration_order_with_explicit_values() {
    let animals = enum_type("Animal", &[("Dog", 1), ("Cat", 2), ("Bird", 3)]);
    let graph = graph("lib", vec![namespace("Foo", vec![animals])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public enum Animal
                {
                    Dog = 1,
                    Cat = 2,
                    Bird = 3
                }
            }
        "}
    );
}

#[test]
fn constructor_chains_to_fewest_parameter_base_constructor() {
    let mut base = class("Base");
    base.members = vec![
        MemberSymbol::Method(constructor(vec![
            param("count", int()),
            param("label", string()),
        ])),
        MemberSymbol::Method(constructor(vec![
            param("count", int()),
            param("label", string()),
            param("strict", boolean()),
        ])),
    ];

    let mut derived = class("Derived");
    derived.base_type = Some(TypeRef::named("Foo.Base"));
    derived.members = vec![MemberSymbol::Method(constructor(Vec::new()))];

    let graph = graph("lib", vec![namespace("Foo", vec![base, derived])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public partial class Base
                {
                    public Base(int count, string label) { }
                    public Base(int count, string label, bool strict) { }
                }
                public partial class Derived : Foo.Base
                {
                    public Derived() : base(default, default!) { }
                }
            }
        "}
    );
}

#[test]
fn generic_base_types_and_constraints_are_preserved() {
    let mut base = class("BaseNodeMultiple");
    base.generic_params = vec![
        GenericParam::unconstrained("T"),
        GenericParam::unconstrained("U"),
    ];

    let mut node = class("Node4");
    node.generic_params = vec![GenericParam::unconstrained("T")];
    node.base_type = Some(TypeRef::generic(
        "Foo.BaseNodeMultiple",
        vec![TypeRef::named("T"), int()],
    ));

    let mut keyed = class("SuperKeyType");
    keyed.generic_params = vec![
        GenericParam::unconstrained("K"),
        GenericParam {
            name: "V".to_string(),
            constraints: vec![GenericConstraint::DefaultConstructor],
        },
        GenericParam {
            name: "U".to_string(),
            constraints: vec![GenericConstraint::Type(TypeRef::generic(
                "System.IComparable",
                vec![TypeRef::named("U")],
            ))],
        },
    ];

    let graph = graph("lib", vec![namespace("Foo", vec![base, node, keyed])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public partial class BaseNodeMultiple<T, U>
                {
                }
                public partial class Node4<T> : Foo.BaseNodeMultiple<T, int>
                {
                }
                public partial class SuperKeyType<K, V, U> where V : new() where U : System.IComparable<U>
                {
                }
            }
        "}
    );
}

#[test]
fn delegate_declaration_carries_signature_and_no_members() {
    let mut receiver = delegate(
        "SyntaxReceiverCreator",
        boolean(),
        vec![param("a", int()), param("b", boolean())],
    );
    // metadata-level invoke machinery must not surface
    let mut invoke = method("Invoke", boolean());
    invoke.kind = MethodKind::DelegateInvoke;
    receiver.members = vec![MemberSymbol::Method(invoke)];

    let graph = graph("lib", vec![namespace("Foo", vec![receiver])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public delegate bool SyntaxReceiverCreator(int a, bool b);
            }
        "}
    );
}

#[test]
fn implicit_accessor_methods_are_not_duplicated() {
    let mut car = class("Car");
    let mut getter = method("get_Wheels", int());
    getter.kind = MethodKind::PropertyGetter;
    getter.is_implicit = true;
    let mut setter = method("set_Wheels", TypeRef::void());
    setter.kind = MethodKind::PropertySetter;
    setter.is_implicit = true;

    car.members = vec![
        MemberSymbol::Method(getter),
        MemberSymbol::Method(setter),
        MemberSymbol::Property(property("Wheels", int(), true, true)),
    ];
    let graph = graph("lib", vec![namespace("Foo", vec![car])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public partial class Car
                {
                    public int Wheels { get { throw null; } set { } }
                }
            }
        "}
    );
}

#[test]
fn non_public_members_are_dropped_at_default_floor() {
    let mut options = struct_type("Options");
    let mut hidden = field("secret", int());
    hidden.accessibility = Accessibility::Private;
    let mut internal_field = field("cache", int());
    internal_field.accessibility = Accessibility::Internal;
    let mut bool_member = field("BoolMember", boolean());
    bool_member.modifiers.is_readonly = true;

    options.members = vec![
        MemberSymbol::Field(hidden),
        MemberSymbol::Field(internal_field),
        MemberSymbol::Field(bool_member),
    ];
    let graph = graph("lib", vec![namespace("Foo", vec![options])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public partial struct Options
                {
                    public readonly bool BoolMember;
                }
            }
        "}
    );
}

#[test]
fn operators_and_overrides_render_with_throw_stubs() {
    let mut car = class("Car");
    car.interfaces = vec![TypeRef::generic(
        "System.IEquatable",
        vec![TypeRef::named("Car")],
    )];

    let mut equals = method("Equals", boolean());
    equals.parameters = vec![param("o", TypeRef::named("object"))];
    equals.modifiers.is_override = true;

    let mut hash = method("GetHashCode", int());
    hash.modifiers.is_override = true;

    let mut eq = method("==", boolean());
    eq.kind = MethodKind::Operator;
    eq.modifiers.is_static = true;
    eq.parameters = vec![param("lhs", TypeRef::named("Car")), param("rhs", TypeRef::named("Car"))];

    let mut neq = method("!=", boolean());
    neq.kind = MethodKind::Operator;
    neq.modifiers.is_static = true;
    neq.parameters = vec![param("lhs", TypeRef::named("Car")), param("rhs", TypeRef::named("Car"))];

    car.members = vec![
        MemberSymbol::Method(equals),
        MemberSymbol::Method(hash),
        MemberSymbol::Method(eq),
        MemberSymbol::Method(neq),
    ];
    let graph = graph("lib", vec![namespace("Foo", vec![car])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public partial class Car : System.IEquatable<Car>
                {
                    public static bool operator !=(Car lhs, Car rhs) { throw null; }
                    public static bool operator ==(Car lhs, Car rhs) { throw null; }
                    public override bool Equals(object o) { throw null; }
                    public override int GetHashCode() { throw null; }
                }
            }
        "}
    );
}

#[test]
fn explicit_interface_implementations_keep_qualified_form() {
    let mut sample = class("SampleClass");
    sample.interfaces = vec![TypeRef::named("Foo.IControl")];
    let mut paint = method("Paint", TypeRef::void());
    paint.accessibility = Accessibility::Private;
    paint.explicit_interface = Some(TypeRef::named("Foo.IControl"));
    sample.members = vec![MemberSymbol::Method(paint)];

    let graph = graph("lib", vec![namespace("Foo", vec![sample])]);

    // explicit implementations surface despite their private metadata
    // accessibility: the shape belongs to the implemented interface
    let rendered = generate_default(&graph);
    assert!(rendered.contains("void Foo.IControl.Paint() { }"));
}

#[test]
fn enum_defaults_render_fully_qualified() {
    let animals = enum_type("Animal", &[("Dog", 1), ("Cat", 2)]);
    let mut keeper = class("AnimalProperty");
    let mut ctor = constructor(vec![param("animal", TypeRef::value("Foo.Animal"))]);
    ctor.parameters[0].default_value = Some(LiteralValue::EnumMember {
        enum_type: TypeRef::value("Foo.Animal"),
        member: "Cat".to_string(),
    });
    let mut execute = method("Execute", int());
    execute.parameters = vec![param("p", int())];
    execute.parameters[0].default_value = Some(LiteralValue::Int(42));
    keeper.members = vec![MemberSymbol::Method(ctor), MemberSymbol::Method(execute)];

    let graph = graph("lib", vec![namespace("Foo", vec![animals, keeper])]);

    let rendered = generate_default(&graph);
    assert!(rendered.contains("public AnimalProperty(Foo.Animal animal = Foo.Animal.Cat) { }"));
    assert!(rendered.contains("public int Execute(int p = 42) { throw null; }"));
}

#[test]
fn custom_exception_message_switches_throw_stub_form() {
    let mut car = class("Car");
    car.members = vec![MemberSymbol::Property(property("Wheels", int(), true, false))];
    let graph = graph("lib", vec![namespace("Foo", vec![car])]);

    let config = GenerationConfig {
        exception_message: Some("reference surface only".to_string()),
        ..Default::default()
    };
    let rendered = generate(&graph, &config);
    assert!(rendered.contains(
        "public int Wheels { get { throw new PlatformNotSupportedException(\"reference surface only\"); } }"
    ));
    assert!(!rendered.contains("throw null"));
}

#[test]
fn excluded_attribute_types_and_applications_disappear() {
    let mut hidden = class("HiddenAttribute");
    hidden.base_type = Some(TypeRef::named("System.Attribute"));
    let mut visible = class("Creature");
    visible.attributes = vec![
        AttributeUse {
            attribute_type: TypeRef::named("Foo.HiddenAttribute"),
            args: Vec::new(),
        },
        AttributeUse {
            attribute_type: TypeRef::named("Foo.AnimalTypeAttribute"),
            args: vec![AttributeArgument::Literal(LiteralValue::EnumMember {
                enum_type: TypeRef::value("Foo.Animal"),
                member: "Cat".to_string(),
            })],
        },
    ];

    let graph = graph("lib", vec![namespace("Foo", vec![hidden, visible])]);

    let config = GenerationConfig {
        excluded_attributes: ExclusionSet::parse("T:Foo.HiddenAttribute\nnot a doc id\n\n"),
        ..Default::default()
    };
    let rendered = generate(&graph, &config);

    assert!(!rendered.contains("HiddenAttribute"));
    assert!(!rendered.contains("[Foo.Hidden]"));
    assert!(rendered.contains("[Foo.AnimalType(Foo.Animal.Cat)]"));
    assert!(rendered.contains("public partial class Creature"));
}

#[test]
fn forwarding_attribute_generic_arguments_erase_to_arity() {
    let mut module = graph("lib", Vec::new());
    module.attributes = vec![AttributeUse {
        attribute_type: TypeRef::named(
            "System.Runtime.CompilerServices.TypeForwardedToAttribute",
        ),
        args: vec![AttributeArgument::TypeOf(TypeRef::generic(
            "Foo.Generic",
            vec![
                TypeRef::named("A"),
                TypeRef::named("B"),
                TypeRef::named("C"),
            ],
        ))],
    }];

    assert_eq!(
        generate_default(&module),
        "[assembly: System.Runtime.CompilerServices.TypeForwardedTo(typeof(Foo.Generic<,,>))]\n"
    );
}

#[test]
fn events_and_fields_render_without_bodies() {
    let mut events = class("Events");
    events.modifiers.is_abstract = true;
    let mut changed = event(
        "TextChanged",
        TypeRef::generic("System.EventHandler", vec![boolean()]),
    );
    changed.modifiers.is_abstract = true;
    events.members = vec![MemberSymbol::Event(changed)];

    let graph = graph("lib", vec![namespace("Foo", vec![events])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public abstract partial class Events
                {
                    public abstract event System.EventHandler<bool> TextChanged;
                }
            }
        "}
    );
}

#[test]
fn nested_types_are_filtered_and_marked_independently() {
    let mut outer = class("Outer");
    let mut inner_public = struct_type("Inner");
    inner_public.members = vec![MemberSymbol::Field(field("Value", int()))];
    let mut inner_private = class("Secret");
    inner_private.accessibility = Accessibility::Private;

    outer.members = vec![
        MemberSymbol::Type(inner_public),
        MemberSymbol::Type(inner_private),
    ];
    let graph = graph("lib", vec![namespace("Foo", vec![outer])]);

    assert_eq!(
        generate_default(&graph),
        indoc! {"
            namespace Foo
            {
                public partial class Outer
                {
                    public partial struct Inner
                    {
                        public int Value;
                    }
                }
            }
        "}
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let mut car = class("Car");
    car.members = vec![
        MemberSymbol::Property(property("Wheels", int(), true, true)),
        MemberSymbol::Method(method("Honk", TypeRef::void())),
        MemberSymbol::Field(field("Age", int())),
    ];
    let graph = graph("lib", vec![namespace("Foo", vec![car])]);

    let config = GenerationConfig::default();
    assert_eq!(generate(&graph, &config), generate(&graph, &config));
}
