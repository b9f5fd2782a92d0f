//! End-to-end scenarios: header text in, resolved model out.

use autoref::core::{
    ClassModel, FunctionOverloadSet, ModuleEnumKind, ModuleModel, ParseOptions, parse_source,
    resolve::resolve_qualified_names,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

fn parse(source: &str) -> ModuleModel {
    parse_source(source, &ParseOptions::default())
}

fn class<'a>(model: &'a ModuleModel, name: &str) -> &'a ClassModel {
    model
        .class(name)
        .unwrap_or_else(|| panic!("class {name} not found in {model:#?}"))
}

/// `name(p: T, ...) -> R` per overload, `|`-separated.
fn render(set: &FunctionOverloadSet) -> String {
    set.overloads
        .iter()
        .map(|o| {
            let params: Vec<String> = o
                .params
                .iter()
                .map(|p| format!("{}: {}", p.name, p.ty))
                .collect();
            format!("{}({}) -> {}", o.name, params.join(", "), o.return_type)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[test]
fn test_default_parameters_become_overloads() {
    let model = parse(
        r#"
/// @class Foo
class Foo {
    /// @func Bar
    void Bar(int x, int y = 0);
};
"#,
    );

    let foo = class(&model, "Foo");
    assert_eq!(foo.functions.len(), 1);
    assert_snapshot!(render(&foo.functions[0]), @"Bar(x: int) -> void | Bar(x: int, y: int) -> void");
}

#[test]
fn test_alias_rewrites_parameter_to_aliased_class() {
    let model = parse(
        r#"
/// @class Foo
class Foo {
    /// @alias Baz = OldBaz

    /// @class OldBaz
    class OldBaz {};

    /// @func
    void take(const Baz &value, Baz *other);
};
"#,
    );

    let take = class(&model, "Foo").function("take").unwrap();
    let types: Vec<&str> = take.overloads[0]
        .params
        .iter()
        .map(|p| p.ty.as_str())
        .collect();
    assert_eq!(types, vec!["const Foo::OldBaz &", "Foo::OldBaz *"]);
}

#[test]
fn test_blocks_with_same_identity_are_merged() {
    let model = parse(
        r#"
/// @class Painter
class Painter {
    /// @func
    void draw(int x);

    /// @static_func
    static void draw(float x);

    /**
     * @func
     */
    void draw(int x, int y, int z = 0);
};
"#,
    );

    let painter = class(&model, "Painter");
    assert_eq!(painter.functions.len(), 2);

    let member = &painter.functions[0];
    assert!(!member.is_static);
    assert_snapshot!(
        render(member),
        @"draw(x: int) -> void | draw(x: int, y: int) -> void | draw(x: int, y: int, z: int) -> void"
    );
    assert!(painter.functions[1].is_static);
}

#[test]
fn test_accessor_only_property() {
    let model = parse(
        r#"
/// @class Window
class Window {
    /// @func
    /// @property_get title
    const std::string &title();

    /// @func
    /// @property_get width
    int width();

    /// @func
    /// @property_set width
    void setWidth(int width);
};
"#,
    );

    let window = class(&model, "Window");
    let title = window.property("title").unwrap();
    assert!(title.has_getter());
    assert!(!title.has_setter());
    assert!(!title.is_repacked());

    let width = window.property("width").unwrap();
    assert_eq!(window.accessor(width.getter).unwrap().name, "width");
    assert_eq!(window.accessor(width.setter).unwrap().name, "setWidth");
}

#[test]
fn test_nesting_survives_unrelated_braces() {
    let model = parse(
        r#"
namespace detail {
inline int helper() { if (true) { return 1; } return 0; }
}

/// @class Outer
class Outer {
    /// @class A
    struct A {};
    /// @class B
    struct B {
        /// @class C
        struct C {};
    };

    /// @func
    void after(A a, C c);
};
"#,
    );

    let names: Vec<String> = model.classes.iter().map(|c| c.qualified_name()).collect();
    assert_eq!(names, vec!["Outer", "Outer::A", "Outer::B", "Outer::B::C"]);

    // Back in Outer once every nested class closed.
    let after = class(&model, "Outer").function("after").unwrap();
    let types: Vec<&str> = after.overloads[0]
        .params
        .iter()
        .map(|p| p.ty.as_str())
        .collect();
    assert_eq!(types, vec!["Outer::A", "Outer::B::C"]);
}

#[test]
fn test_resolving_twice_changes_nothing() {
    let mut model = parse(
        r#"
/// @class Scene
class Scene {
    /// @class Node
    class Node {
        /// @enum Kind
        /// @enum_item Mesh
        enum Kind { Mesh };
    };

    /// @func
    void add(Node::Kind kind, const Node &node, Scene *parent = nullptr);
};
"#,
    );
    let once = model.clone();
    resolve_qualified_names(&mut model);
    assert_eq!(model, once);

    let add = class(&once, "Scene").function("add").unwrap();
    assert_snapshot!(
        render(add),
        @"add(kind: Scene::Node::Kind, node: const Scene::Node &) -> void | add(kind: Scene::Node::Kind, node: const Scene::Node &, parent: Scene *) -> void"
    );
}

#[test]
fn test_return_types_are_not_qualified() {
    let model = parse(
        r#"
/// @class Mesh
class Mesh {
    /// @class Vertex
    struct Vertex {};

    /// @func
    Vertex first(Vertex fallback);
};
"#,
    );

    let first = &class(&model, "Mesh").function("first").unwrap().overloads[0];
    assert_eq!(first.return_type, "Vertex");
    assert_eq!(first.params[0].ty, "Mesh::Vertex");
}

#[test]
fn test_module_level_tags() {
    let model = parse(
        r#"
/// @ns gfx
/// @cpp_ns gx::gfx
/// @using_ns std
/// @using_ns gx

/// @include_from gfx/types.h

/// @def_enum PixelFormat

/// @enum Filter
/// @cast_to int
/// @enum_item Nearest
/// @enum_item Linear
enum class Filter { Nearest, Linear };

/// @class Texture
/// @ns assets
/// @cpp_name TextureImpl
/// @inherit Resource
/// @inherit Shareable
class TextureImpl : public Resource, public Shareable {
    /// @constant MaxSize
    /// @alias Format = PixelFormat
    /// @default_construct
};

/**
 * @ref_code
 * REGISTER_TEXTURE();
 */
"#,
    );

    assert_eq!(model.target_namespace, "gx::gfx");
    assert_eq!(model.using_namespaces, vec!["std", "gx"]);
    assert_eq!(
        model.include_paths.iter().collect::<Vec<_>>(),
        vec!["gfx/types.h"]
    );

    assert_eq!(model.enums.len(), 2);
    assert_eq!(model.enums[0].kind, ModuleEnumKind::DefEnum);
    assert!(model.enums[0].items.is_empty());
    let filter = &model.enums[1];
    assert_eq!(filter.namespace, "gfx");
    assert_eq!(filter.cast_to.as_deref(), Some("int"));
    assert_eq!(filter.items, vec!["Nearest", "Linear"]);

    let texture = class(&model, "Texture");
    assert_eq!(texture.emitted_name, "TextureImpl");
    assert_eq!(texture.namespace, "assets");
    assert_eq!(texture.bases, vec!["Resource", "Shareable"]);
    assert_eq!(texture.constants, vec!["MaxSize"]);
    assert_eq!(texture.aliases.get("Format").map(String::as_str), Some("PixelFormat"));
    assert_eq!(texture.constructors.len(), 1);
    assert!(texture.constructors[0].overloads[0].params.is_empty());

    assert_eq!(model.custom_code.as_deref(), Some("REGISTER_TEXTURE();"));
}

#[test]
fn test_custom_wrapper_macros() {
    let source = r#"
/// @class Device
class Device {
    /// @func
    MY_API(void reset(bool hard = false));
};
"#;

    let defaults = parse(source);
    let reset = class(&defaults, "Device").functions[0].name.clone();
    assert_eq!(reset, "MY_API");

    let options = ParseOptions {
        wrapper_macros: vec!["MY_API".to_string()],
    };
    let model = parse_source(source, &options);
    let reset = class(&model, "Device").function("reset").unwrap();
    assert_eq!(reset.overloads.len(), 2);
}

#[test]
fn test_malformed_input_is_tolerated() {
    let model = parse(
        r#"
}
/// @func orphan
void orphan();

/// @class Sturdy
class Sturdy {
    /// @alias Broken
    /// @func
    int value(;
    /// @unknown_tag something
    /// @func named
};
}
"#,
    );

    assert_eq!(model.classes.len(), 1);
    let sturdy = class(&model, "Sturdy");
    assert!(sturdy.aliases.is_empty());
    // An unparseable declaration still yields an entry.
    assert!(sturdy.functions.iter().all(|f| f.overloads.is_empty()));
}
