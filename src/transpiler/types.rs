use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Target classification of a design node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    Container,
    LinearStack,
    PlainView,
    TextView,
    ImageView,
    IncludeReference,
    ScrollableContainer,
    GenericGroup,
    GenericView,
}

impl WidgetKind {
    /// Element name in layout XML.
    pub fn markup_tag(self) -> &'static str {
        match self {
            WidgetKind::Container => "FrameLayout",
            WidgetKind::LinearStack => "LinearLayout",
            WidgetKind::PlainView | WidgetKind::GenericView => "View",
            WidgetKind::TextView => "TextView",
            WidgetKind::ImageView => "ImageView",
            WidgetKind::IncludeReference => "include",
            WidgetKind::ScrollableContainer => "ScrollView",
            WidgetKind::GenericGroup => "ViewGroup",
        }
    }

    /// Class instantiated by construction code. `include` is not a class
    /// and `ViewGroup` is abstract, so both become a `FrameLayout`.
    pub fn view_class(self) -> &'static str {
        match self {
            WidgetKind::IncludeReference | WidgetKind::GenericGroup => "FrameLayout",
            other => other.markup_tag(),
        }
    }

    pub fn is_text(self) -> bool {
        self == WidgetKind::TextView
    }
}

impl Display for WidgetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.markup_tag())
    }
}

/// Maps a raw node kind to its widget kind. Unknown kinds fall back to a
/// plain view.
pub fn map_kind(raw_kind: &str) -> WidgetKind {
    match raw_kind.to_ascii_uppercase().as_str() {
        "FRAME" => WidgetKind::Container,
        "GROUP" => WidgetKind::LinearStack,
        "RECTANGLE" | "ELLIPSE" => WidgetKind::PlainView,
        "TEXT" => WidgetKind::TextView,
        "VECTOR" => WidgetKind::ImageView,
        "INSTANCE" | "COMPONENT" => WidgetKind::IncludeReference,
        "CANVAS" => WidgetKind::ScrollableContainer,
        "DOCUMENT" => WidgetKind::GenericGroup,
        other => {
            tracing::debug!(kind = other, "Unknown node kind, using generic view");
            WidgetKind::GenericView
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

impl TextAlign {
    /// Justified text has no dedicated constant and renders as start.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" => TextAlign::Center,
            "right" => TextAlign::End,
            _ => TextAlign::Start,
        }
    }
}

/// Which family of constant names an alignment resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentTarget {
    Markup,
    Code,
}

pub fn map_alignment(value: Option<&str>, target: AlignmentTarget) -> &'static str {
    let align = value.map(TextAlign::parse).unwrap_or(TextAlign::Start);
    match (target, align) {
        (AlignmentTarget::Markup, TextAlign::Start) => "textStart",
        (AlignmentTarget::Markup, TextAlign::Center) => "center",
        (AlignmentTarget::Markup, TextAlign::End) => "textEnd",
        (AlignmentTarget::Code, TextAlign::Start) => "View.TEXT_ALIGNMENT_TEXT_START",
        (AlignmentTarget::Code, TextAlign::Center) => "View.TEXT_ALIGNMENT_CENTER",
        (AlignmentTarget::Code, TextAlign::End) => "View.TEXT_ALIGNMENT_TEXT_END",
    }
}
