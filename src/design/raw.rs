use serde::{Deserialize, Deserializer, Serialize};
use indexmap::IndexMap;
use serde_json::Value;

/// Envelope returned by the design tool for either a whole file or a
/// subset of nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<RawNode>,
    /// Entries in response order. Ids the tool could not resolve map to `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<IndexMap<String, Option<RawNodeEntry>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNodeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<RawNode>,
}

impl RawDocument {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    pub fn with_root(root: RawNode) -> Self {
        Self {
            document: Some(root),
            ..Self::default()
        }
    }

    /// Selects the root to normalize.
    ///
    /// A whole-file response always yields its `document`. A node-subset
    /// response yields the entry for `node_id`, or the first resolved entry
    /// when no id is given.
    pub fn root(&self, node_id: Option<&str>) -> Option<&RawNode> {
        if let Some(nodes) = &self.nodes {
            let entry = match node_id {
                Some(id) => nodes.get(id).and_then(Option::as_ref),
                None => nodes.values().flatten().find(|e| e.document.is_some()),
            };
            if let Some(node) = entry.and_then(|e| e.document.as_ref()) {
                return Some(node);
            }
        }

        match node_id {
            Some(id) => self.document.as_ref().and_then(|doc| doc.find(id)),
            None => self.document.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "type", alias = "kind", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(
        default,
        rename = "absoluteBoundingBox",
        alias = "geometry",
        skip_serializing_if = "Option::is_none"
    )]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(
        default,
        rename = "strokeWeight",
        alias = "strokeWidth",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub stroke_width: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl RawNode {
    pub fn new(id: &str, name: &str, kind: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn is_text(&self) -> bool {
        self.kind.eq_ignore_ascii_case("text")
    }

    /// Depth-first lookup by node id.
    pub fn find(&self, id: &str) -> Option<&RawNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default, deserialize_with = "lenient_number")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub height: Option<f64>,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }
}

/// A fill or stroke entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(default, rename = "type", alias = "kind", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
}

impl Paint {
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self {
            kind: "SOLID".to_string(),
            visible: Some(true),
            opacity: Some(1.0),
            color: Some(Rgba { r, g, b, a: None }),
        }
    }

    pub fn is_visible_solid(&self) -> bool {
        self.kind.eq_ignore_ascii_case("solid") && self.visible != Some(false)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    #[serde(default, deserialize_with = "lenient_channel")]
    pub r: f64,
    #[serde(default, deserialize_with = "lenient_channel")]
    pub g: f64,
    #[serde(default, deserialize_with = "lenient_channel")]
    pub b: f64,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub a: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_weight: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
}

// Numbers that arrive as strings, booleans or objects decode as absent
// instead of rejecting the whole document.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

// Explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_channel<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or(0.0))
}
