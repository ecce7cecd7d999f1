pub mod dialect;

pub use dialect::{ConfigScope, Dialect};

use crate::transpiler::component::{Component, ComponentTree, Dimension};
use crate::transpiler::types::{AlignmentTarget, map_alignment};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PACKAGE: &str = "com.example.app";
pub const DEFAULT_CLASS: &str = "GeneratedLayout";

const BODY_INDENT: &str = "        ";
const WRAP_CONTENT: &str = "ViewGroup.LayoutParams.WRAP_CONTENT";

/// Names substituted verbatim into the generated header and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    pub package_name: String,
    pub class_name: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            class_name: DEFAULT_CLASS.to_string(),
        }
    }
}

/// One configuration step, spelled as a setter call or a property
/// assignment depending on the dialect.
struct Setter {
    method: &'static str,
    property: Option<&'static str>,
    value: String,
}

impl Setter {
    fn new(method: &'static str, property: Option<&'static str>, value: String) -> Self {
        Self {
            method,
            property,
            value,
        }
    }
}

/// Renders components as imperative view-construction code.
pub struct ConstructionEmitter<'d> {
    dialect: &'d Dialect,
    options: EmitOptions,
}

impl<'d> ConstructionEmitter<'d> {
    pub fn new(dialect: &'d Dialect, options: &EmitOptions) -> Self {
        Self {
            dialect,
            options: options.clone(),
        }
    }

    /// Emits a complete source file. Never fails: an empty or root-less
    /// sequence yields the dialect's single-field fallback type.
    pub fn emit(&self, components: &[Component]) -> String {
        let tree = ComponentTree::new(components);
        let Some(root) = tree.root() else {
            return (self.dialect.fallback)(&self.options.package_name, &self.options.class_name);
        };

        let d = self.dialect;
        let mut code = String::new();

        code.push_str(&format!("package {}{}\n\n", self.options.package_name, d.terminator));
        for import in d.imports {
            code.push_str(&format!("import {}{}\n", import, d.terminator));
        }
        code.push('\n');

        code.push_str(&(d.class_open)(&self.options.class_name));
        for component in components {
            code.push_str(&(d.field_decl)(&component.name, component.widget_kind.view_class()));
        }
        code.push('\n');

        code.push_str(&(d.routine_open)(&self.options.class_name));
        let blocks: Vec<String> = tree
            .subtree(root)
            .into_iter()
            .map(|component| self.component_block(component, &tree))
            .collect();
        code.push_str(&blocks.join("\n"));
        code.push_str("    }\n\n");

        code.push_str(&(d.root_accessor)(root.widget_kind.view_class(), &root.name));
        code.push_str("}\n");

        code
    }

    fn component_block(&self, component: &Component, tree: &ComponentTree<'_>) -> String {
        let d = self.dialect;
        let name = component.name.as_str();
        let class = component.widget_kind.view_class();
        let mut block = String::new();

        match d.scope {
            ConfigScope::Receiver => block.push_str(&format!(
                "{}{} = {}{}(context){}\n",
                BODY_INDENT, name, d.new_keyword, class, d.terminator
            )),
            ConfigScope::ApplyBlock => block.push_str(&format!(
                "{}{} = {}{}(context).apply {{\n",
                BODY_INDENT, name, d.new_keyword, class
            )),
        }

        for setter in self.setters(component) {
            block.push_str(&self.render_setter(name, &setter));
        }

        if d.scope == ConfigScope::ApplyBlock {
            block.push_str(&format!("{}}}\n", BODY_INDENT));
        }

        if let Some(parent_id) = component.parent_id.as_deref() {
            if let Some(parent) = tree.find(parent_id) {
                block.push_str(&format!(
                    "{}{}.addView({}){}\n",
                    BODY_INDENT, parent.name, name, d.terminator
                ));
            }
        }

        block
    }

    fn setters(&self, component: &Component) -> Vec<Setter> {
        let props = &component.properties;
        let bounds = &component.bounds;

        let mut setters = vec![Setter::new(
            "setLayoutParams",
            Some("layoutParams"),
            format!(
                "{}ViewGroup.LayoutParams({}, {})",
                self.dialect.new_keyword,
                dimension_literal(bounds.layout_width()),
                dimension_literal(bounds.layout_height())
            ),
        )];

        // Roots are positioned by whatever container hosts them.
        if !component.is_root() {
            setters.push(Setter::new("setX", Some("x"), float_literal(bounds.x)));
            setters.push(Setter::new("setY", Some("y"), float_literal(bounds.y)));
        }

        setters.push(Setter::new("setId", Some("id"), "View.generateViewId()".to_string()));

        if let Some(background) = props.background() {
            setters.push(Setter::new(
                "setBackgroundColor",
                None,
                format!("Color.parseColor(\"{}\")", background),
            ));
        }

        if component.widget_kind.is_text() {
            if let Some(text) = &props.text {
                setters.push(Setter::new("setText", Some("text"), self.dialect.string_literal(text)));
            }
            if let Some(alignment) = &props.text_alignment {
                setters.push(Setter::new(
                    "setTextAlignment",
                    Some("textAlignment"),
                    map_alignment(Some(alignment), AlignmentTarget::Code).to_string(),
                ));
            }
            if let Some(size) = props.font_size {
                setters.push(Setter::new("setTextSize", Some("textSize"), float_literal(size)));
            }
        }

        setters
    }

    fn render_setter(&self, receiver: &str, setter: &Setter) -> String {
        let d = self.dialect;
        match (d.scope, setter.property) {
            (ConfigScope::Receiver, _) => format!(
                "{}{}.{}({}){}\n",
                BODY_INDENT, receiver, setter.method, setter.value, d.terminator
            ),
            (ConfigScope::ApplyBlock, Some(property)) => format!(
                "{}    {} = {}{}\n",
                BODY_INDENT, property, setter.value, d.terminator
            ),
            (ConfigScope::ApplyBlock, None) => format!(
                "{}    {}({}){}\n",
                BODY_INDENT, setter.method, setter.value, d.terminator
            ),
        }
    }
}

fn dimension_literal(dimension: Dimension) -> String {
    match dimension {
        Dimension::WrapContent => WRAP_CONTENT.to_string(),
        Dimension::Fixed(v) => v.to_string(),
    }
}

fn float_literal(value: f64) -> String {
    if value.is_finite() {
        format!("{}f", value)
    } else {
        "0f".to_string()
    }
}
