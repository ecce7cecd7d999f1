use crate::transpiler::component::{Component, ComponentTree, Dimension};
use crate::transpiler::types::{AlignmentTarget, map_alignment};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";
const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
const INDENT: &str = "    ";

/// Layout returned when there is nothing to render.
pub const FALLBACK_LAYOUT: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
<FrameLayout xmlns:android=\"http://schemas.android.com/apk/res/android\"\n    \
android:layout_width=\"match_parent\"\n    \
android:layout_height=\"match_parent\" />\n";

/// Renders components as Android layout XML.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupEmitter;

impl MarkupEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Emits the first root and its descendants. Never fails: an empty or
    /// root-less sequence yields [`FALLBACK_LAYOUT`].
    pub fn emit(&self, components: &[Component]) -> String {
        let tree = ComponentTree::new(components);
        let Some(root) = tree.root() else {
            return FALLBACK_LAYOUT.to_string();
        };

        let mut xml = String::from(XML_DECLARATION);
        self.write_element(&mut xml, &tree, root, 0);
        xml
    }

    fn write_element(&self, xml: &mut String, tree: &ComponentTree<'_>, component: &Component, depth: usize) {
        let indent = INDENT.repeat(depth);
        let attr_indent = INDENT.repeat(depth + 1);
        let tag = component.widget_kind.markup_tag();

        xml.push_str(&indent);
        xml.push('<');
        xml.push_str(tag);
        if component.is_root() {
            xml.push_str(&format!(" xmlns:android=\"{}\"", ANDROID_NS));
        }

        for (name, value) in attributes(component) {
            xml.push_str(&format!("\n{}{}=\"{}\"", attr_indent, name, value));
        }

        if !tree.has_children(&component.id) {
            xml.push_str(" />\n");
            return;
        }

        xml.push_str(">\n");
        for child in tree.children_of(&component.id) {
            xml.push('\n');
            self.write_element(xml, tree, child, depth + 1);
        }
        xml.push_str(&format!("\n{}</{}>\n", indent, tag));
    }
}

fn attributes(component: &Component) -> Vec<(&'static str, String)> {
    let props = &component.properties;
    let mut attrs = vec![
        ("android:id", format!("@+id/{}", component.name)),
        ("android:layout_width", dimension_value(component.bounds.layout_width())),
        ("android:layout_height", dimension_value(component.bounds.layout_height())),
    ];

    // Offsets are absolute from the document origin, not parent-relative.
    if !component.is_root() {
        attrs.push(("android:layout_marginStart", offset_value(component.bounds.x)));
        attrs.push(("android:layout_marginTop", offset_value(component.bounds.y)));
    }

    if let Some(background) = props.background() {
        attrs.push(("android:background", background));
    }

    if component.widget_kind.is_text() {
        if let Some(text) = &props.text {
            attrs.push(("android:text", escape_xml(text)));
        }
        if let Some(alignment) = &props.text_alignment {
            attrs.push((
                "android:textAlignment",
                map_alignment(Some(alignment), AlignmentTarget::Markup).to_string(),
            ));
        }
        if let Some(size) = props.font_size {
            attrs.push(("android:textSize", format!("{}sp", size)));
        }
        if let Some(family) = &props.font_family {
            attrs.push(("android:fontFamily", escape_xml(family)));
        }
        if props.font_weight.is_some() {
            let style = if props.is_bold() { "bold" } else { "normal" };
            attrs.push(("android:textStyle", style.to_string()));
        }
    }

    attrs
}

fn dimension_value(dimension: Dimension) -> String {
    match dimension {
        Dimension::WrapContent => "wrap_content".to_string(),
        Dimension::Fixed(v) => format!("{}dp", v),
    }
}

fn offset_value(offset: f64) -> String {
    if offset.is_finite() && offset > 0.0 {
        format!("{}dp", offset.round() as i64)
    } else {
        "0dp".to_string()
    }
}

/// Escapes `&` `<` `>` `"` `'` as XML entities. Each input character is
/// replaced at most once, so entities are never escaped twice.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
