use crate::design::raw::{RawDocument, RawNode};
use crate::transpiler::color::rgb_to_hex;
use crate::transpiler::component::{Bounds, Component, Properties};
use crate::transpiler::errors::ConvertError;
use crate::transpiler::naming::NameRegistry;
use crate::transpiler::types::map_kind;
use std::collections::HashSet;

/// Flattens a raw design tree into pre-ordered components.
///
/// Invisible nodes drop their whole subtree. Nodes without geometry emit
/// nothing but stay transparent: their children attach to the nearest
/// emitted ancestor. A node reusing an already emitted id is dropped with
/// its subtree.
#[derive(Debug, Default)]
pub struct Normalizer {
    names: NameRegistry,
    seen: HashSet<String>,
    components: Vec<Component>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(self, document: &RawDocument) -> Result<Vec<Component>, ConvertError> {
        self.normalize_node(document, None)
    }

    /// Normalizes the subset entry (or nested node) named `node_id`.
    pub fn normalize_node(
        self,
        document: &RawDocument,
        node_id: Option<&str>,
    ) -> Result<Vec<Component>, ConvertError> {
        let root = document.root(node_id).ok_or_else(|| match node_id {
            Some(id) => ConvertError::InvalidDocument(format!("node '{}' not found", id)),
            None => ConvertError::InvalidDocument("missing document root".to_string()),
        })?;

        Ok(self.normalize_root(root))
    }

    pub fn normalize_root(mut self, root: &RawNode) -> Vec<Component> {
        self.visit(root, None);
        tracing::debug!(components = self.components.len(), "Normalized design tree");
        self.components
    }

    fn visit(&mut self, node: &RawNode, parent: Option<&str>) {
        if !node.is_visible() {
            tracing::debug!(node = node.id.as_str(), "Skipping invisible subtree");
            return;
        }

        let Some(geometry) = node.geometry else {
            tracing::debug!(node = node.id.as_str(), "No geometry, passing through");
            for child in &node.children {
                self.visit(child, parent);
            }
            return;
        };

        if !self.seen.insert(node.id.clone()) {
            tracing::warn!(node = node.id.as_str(), "Duplicate node id, skipping subtree");
            return;
        }

        let component = Component {
            id: node.id.clone(),
            name: self.names.claim(&node.id, &node.name),
            widget_kind: map_kind(&node.kind),
            bounds: Bounds {
                x: geometry.x.unwrap_or(0.0),
                y: geometry.y.unwrap_or(0.0),
                width: geometry.width,
                height: geometry.height,
            },
            parent_id: parent.map(str::to_string),
            properties: extract_properties(node),
        };

        let id = component.id.clone();
        self.components.push(component);

        for child in &node.children {
            self.visit(child, Some(&id));
        }
    }
}

/// Convenience wrapper over [`Normalizer`].
pub fn normalize(document: &RawDocument) -> Result<Vec<Component>, ConvertError> {
    Normalizer::new().normalize(document)
}

fn extract_properties(node: &RawNode) -> Properties {
    let mut props = Properties::default();

    let solid = node
        .fills
        .iter()
        .find(|fill| fill.is_visible_solid() && fill.color.is_some());
    if let Some(fill) = solid {
        if let Some(color) = fill.color {
            props.background_color = Some(rgb_to_hex(color.r, color.g, color.b));
            props.background_alpha = fill.opacity;
        }
    }

    if let Some(color) = node.strokes.first().and_then(|stroke| stroke.color) {
        props.border_color = Some(rgb_to_hex(color.r, color.g, color.b));
    }

    props.border_width = node.stroke_width.filter(|w| w.is_finite());
    props.corner_radius = node.corner_radius.filter(|r| r.is_finite());

    if node.is_text() {
        props.text = node.characters.clone().filter(|t| !t.is_empty());

        if let Some(style) = &node.style {
            props.font_family = style.font_family.clone().filter(|f| !f.is_empty());
            props.font_weight = style.font_weight.filter(|w| w.is_finite() && *w > 0.0);
            props.font_size = style.font_size.filter(|s| s.is_finite() && *s > 0.0);
            props.text_alignment = style
                .text_align_horizontal
                .as_deref()
                .map(str::to_lowercase);
        }
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::raw::{Geometry, Paint, TextStyle};
    use crate::transpiler::types::WidgetKind;

    fn node(id: &str, name: &str, kind: &str, geometry: Option<Geometry>) -> RawNode {
        RawNode {
            geometry,
            ..RawNode::new(id, name, kind)
        }
    }

    fn boxed(id: &str, name: &str) -> RawNode {
        node(id, name, "RECTANGLE", Some(Geometry::new(0.0, 0.0, 10.0, 10.0)))
    }

    #[test]
    fn test_missing_root_is_invalid() {
        let result = normalize(&RawDocument::default());
        assert!(matches!(result, Err(ConvertError::InvalidDocument(_))));
    }

    #[test]
    fn test_unknown_node_id_is_invalid() {
        let doc = RawDocument::with_root(boxed("1:1", "a"));
        let result = Normalizer::new().normalize_node(&doc, Some("9:9"));
        assert_eq!(
            result,
            Err(ConvertError::InvalidDocument("node '9:9' not found".to_string()))
        );
    }

    #[test]
    fn test_geometry_less_nodes_are_transparent() -> anyhow::Result<()> {
        let mut frame = boxed("1:2", "Frame");
        let mut group = node("1:3", "Group", "GROUP", None);
        group.children.push(boxed("1:4", "Inner"));
        frame.children.push(group);

        let mut doc_root = node("0:0", "Document", "DOCUMENT", None);
        doc_root.children.push(frame);

        let components = normalize(&RawDocument::with_root(doc_root))?;
        let ids: Vec<_> = components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1:2", "1:4"]);
        assert_eq!(components[0].parent_id, None);
        assert_eq!(components[1].parent_id.as_deref(), Some("1:2"));
        Ok(())
    }

    #[test]
    fn test_invisible_subtree_is_dropped() -> anyhow::Result<()> {
        let mut hidden = boxed("1:3", "Hidden");
        hidden.visible = Some(false);
        let mut visible_child = boxed("1:4", "Shown");
        visible_child.visible = Some(true);
        hidden.children.push(visible_child);

        let mut frame = boxed("1:2", "Frame");
        frame.children.push(hidden);
        frame.children.push(boxed("1:5", "Sibling"));

        let components = normalize(&RawDocument::with_root(frame))?;
        let ids: Vec<_> = components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1:2", "1:5"]);
        Ok(())
    }

    #[test]
    fn test_fill_and_stroke_extraction() {
        let mut rect = boxed("1:1", "Rect");
        let mut hidden_fill = Paint::solid(1.0, 0.0, 0.0);
        hidden_fill.visible = Some(false);
        let gradient = Paint {
            kind: "GRADIENT_LINEAR".to_string(),
            ..Paint::solid(0.0, 1.0, 0.0)
        };
        let mut translucent = Paint::solid(0.2, 0.4, 0.9);
        translucent.opacity = Some(0.5);
        rect.fills = vec![hidden_fill, gradient, translucent];
        rect.strokes = vec![Paint::solid(0.0, 0.0, 0.0), Paint::solid(1.0, 1.0, 1.0)];
        rect.stroke_width = Some(2.0);
        rect.corner_radius = Some(8.0);

        let props = extract_properties(&rect);
        assert_eq!(props.background_color.as_deref(), Some("#3366e6"));
        assert_eq!(props.background_alpha, Some(0.5));
        assert_eq!(props.border_color.as_deref(), Some("#000000"));
        assert_eq!(props.border_width, Some(2.0));
        assert_eq!(props.corner_radius, Some(8.0));
        assert_eq!(props.text, None);
    }

    #[test]
    fn test_text_properties_only_for_text_nodes() {
        let style = TextStyle {
            font_family: Some("Inter".to_string()),
            font_weight: Some(700.0),
            font_size: Some(16.0),
            text_align_horizontal: Some("CENTER".to_string()),
        };

        let mut text = boxed("1:1", "Label");
        text.kind = "TEXT".to_string();
        text.characters = Some("Login".to_string());
        text.style = Some(style.clone());

        let props = extract_properties(&text);
        assert_eq!(props.text.as_deref(), Some("Login"));
        assert_eq!(props.font_family.as_deref(), Some("Inter"));
        assert_eq!(props.font_weight, Some(700.0));
        assert_eq!(props.font_size, Some(16.0));
        assert_eq!(props.text_alignment.as_deref(), Some("center"));

        let mut rect = boxed("1:2", "Rect");
        rect.characters = Some("ignored".to_string());
        rect.style = Some(style);
        let props = extract_properties(&rect);
        assert_eq!(props.text, None);
        assert_eq!(props.font_size, None);
    }

    #[test]
    fn test_bounds_copied_and_kind_mapped() -> anyhow::Result<()> {
        let mut ellipse = node(
            "2:1",
            "Avatar",
            "ELLIPSE",
            Some(Geometry::new(12.5, -4.0, 0.0, 64.0)),
        );
        ellipse.children.push(node("2:2", "Star", "STAR", Some(Geometry::default())));

        let components = normalize(&RawDocument::with_root(ellipse))?;
        assert_eq!(components[0].widget_kind, WidgetKind::PlainView);
        assert_eq!(components[0].bounds.x, 12.5);
        assert_eq!(components[0].bounds.y, -4.0);
        assert_eq!(components[0].bounds.width, Some(0.0));
        assert_eq!(components[0].bounds.height, Some(64.0));

        assert_eq!(components[1].widget_kind, WidgetKind::GenericView);
        assert_eq!(components[1].bounds.width, None);
        Ok(())
    }

    #[test]
    fn test_duplicate_names_are_disambiguated() -> anyhow::Result<()> {
        let mut frame = boxed("1:1", "Form");
        frame.children.push(boxed("1:2", "Input"));
        frame.children.push(boxed("1:3", "input"));
        frame.children.push(boxed("1:4", "输入"));
        frame.children.push(boxed("1:5", "名字"));

        let components = normalize(&RawDocument::with_root(frame))?;
        let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["form", "input", "input_2", "unnamed", "unnamed_2"]);
        Ok(())
    }

    #[test]
    fn test_repeated_node_id_is_skipped() -> anyhow::Result<()> {
        let mut echo = boxed("1:1", "Echo");
        echo.children.push(boxed("1:3", "Nested"));
        let mut inner = boxed("1:2", "Inner");
        inner.children.push(echo);
        let mut frame = boxed("1:1", "Frame");
        frame.children.push(inner);

        let components = normalize(&RawDocument::with_root(frame))?;
        let ids: Vec<_> = components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1:1", "1:2"]);
        assert!(components.iter().all(|c| c.parent_id.as_deref() != Some(c.id.as_str())));
        Ok(())
    }
}
