use crate::transpiler::color;
use crate::transpiler::types::WidgetKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A normalized visual element. Components form a flat pre-ordered list and
/// point at their parent by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub widget_kind: WidgetKind,
    pub bounds: Bounds,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

impl Component {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Absolute geometry in design units, copied verbatim from the source node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Bounds {
    pub fn layout_width(&self) -> Dimension {
        Dimension::from_size(self.width)
    }

    pub fn layout_height(&self) -> Dimension {
        Dimension::from_size(self.height)
    }
}

/// A layout size: either a rounded literal or "size to content".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    WrapContent,
    Fixed(i64),
}

impl Dimension {
    /// Zero, negative, absent and non-finite sizes wrap their content.
    pub fn from_size(size: Option<f64>) -> Self {
        match size {
            Some(v) if v.is_finite() && v > 0.0 => Dimension::Fixed(v.round() as i64),
            _ => Dimension::WrapContent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<String>,
}

impl Properties {
    /// Background as `#rrggbb`, or `#aarrggbb` when the fill is translucent.
    pub fn background(&self) -> Option<String> {
        let hex = self.background_color.as_deref()?;
        match self.background_alpha {
            Some(alpha) if alpha.is_finite() && alpha < 1.0 => Some(color::with_alpha(hex, alpha)),
            _ => Some(hex.to_string()),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight.is_some_and(|w| w >= 700.0)
    }
}

/// Parent → children adjacency over a component slice, built once so
/// emitters walk the hierarchy without rescanning the list.
///
/// Ids are expected to be unique; a repeated id is left out of the tree.
#[derive(Debug)]
pub struct ComponentTree<'a> {
    components: &'a [Component],
    by_id: HashMap<&'a str, usize>,
    children: HashMap<&'a str, Vec<usize>>,
    roots: Vec<usize>,
}

impl<'a> ComponentTree<'a> {
    pub fn new(components: &'a [Component]) -> Self {
        let mut by_id = HashMap::with_capacity(components.len());
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();

        for (index, component) in components.iter().enumerate() {
            if by_id.contains_key(component.id.as_str()) {
                tracing::warn!(node = component.id.as_str(), "Duplicate component id, ignoring");
                continue;
            }
            by_id.insert(component.id.as_str(), index);
            match component.parent_id.as_deref() {
                Some(parent) => children.entry(parent).or_default().push(index),
                None => roots.push(index),
            }
        }

        for (parent, kids) in &children {
            if !by_id.contains_key(parent) {
                for &i in kids {
                    tracing::warn!(
                        node = components[i].id.as_str(),
                        parent = *parent,
                        "Parent not found, component left detached"
                    );
                }
            }
        }

        Self {
            components,
            by_id,
            children,
            roots,
        }
    }

    pub fn find(&self, id: &str) -> Option<&'a Component> {
        self.by_id.get(id).map(|&i| &self.components[i])
    }

    /// The first root in sequence order.
    pub fn root(&self) -> Option<&'a Component> {
        self.roots.first().map(|&i| &self.components[i])
    }

    pub fn roots(&self) -> impl Iterator<Item = &'a Component> + '_ {
        self.roots.iter().map(|&i| &self.components[i])
    }

    /// Direct children in sequence order.
    pub fn children_of(&self, id: &str) -> impl Iterator<Item = &'a Component> + '_ {
        self.children
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| &self.components[i])
    }

    pub fn has_children(&self, id: &str) -> bool {
        self.children.get(id).is_some_and(|c| !c.is_empty())
    }

    /// `root` and its descendants in pre-order.
    pub fn subtree(&self, root: &'a Component) -> Vec<&'a Component> {
        let mut ordered = Vec::new();
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            ordered.push(current);
            let kids: Vec<_> = self.children_of(&current.id).collect();
            stack.extend(kids.into_iter().rev());
        }

        ordered
    }
}
