use crate::design::raw::{Geometry, Paint, RawDocument, RawNode, TextStyle};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read design document '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode design document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Design document could not be retrieved: {0}")]
    Transport(String),
}

/// Supplies a raw document tree to the conversion pipeline.
///
/// Retrieval (network, credentials, retries) lives behind this seam; the
/// pipeline only sees a decoded document or an error.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource {
    fn fetch(&self) -> Result<RawDocument, SourceError>;
}

/// Reads a JSON export from disk, or from stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<String, SourceError> {
        let io_err = |source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if self.path.as_os_str() == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(io_err)?;
            return Ok(buffer);
        }

        fs::read_to_string(&self.path).map_err(io_err)
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<RawDocument, SourceError> {
        let source = self.read()?;
        let document = RawDocument::from_json(&source)?;
        tracing::debug!(path = %self.path.display(), "Loaded design document");
        Ok(document)
    }
}

/// Built-in login screen used for demos and smoke tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl DocumentSource for SampleSource {
    fn fetch(&self) -> Result<RawDocument, SourceError> {
        Ok(sample_document())
    }
}

pub fn sample_document() -> RawDocument {
    let field = |id: &str, name: &str, y: f64, (r, g, b): (f64, f64, f64)| {
        let mut node = RawNode::new(id, name, "RECTANGLE");
        node.visible = Some(true);
        node.geometry = Some(Geometry::new(40.0, y, 280.0, 48.0));
        node.fills = vec![Paint::solid(r, g, b)];
        node.corner_radius = Some(4.0);
        node
    };

    let mut title = RawNode::new("1:6", "Title", "TEXT");
    title.visible = Some(true);
    title.geometry = Some(Geometry::new(40.0, 120.0, 280.0, 32.0));
    title.fills = vec![Paint::solid(0.13, 0.13, 0.13)];
    title.characters = Some("Sign in".to_string());
    title.style = Some(TextStyle {
        font_family: Some("Roboto".to_string()),
        font_weight: Some(700.0),
        font_size: Some(24.0),
        text_align_horizontal: Some("CENTER".to_string()),
    });

    let mut container = RawNode::new("1:2", "Login Container", "FRAME");
    container.visible = Some(true);
    container.geometry = Some(Geometry::new(0.0, 0.0, 360.0, 640.0));
    container.fills = vec![Paint::solid(1.0, 1.0, 1.0)];
    container.children = vec![
        title,
        field("1:3", "Username Field", 200.0, (0.96, 0.96, 0.96)),
        field("1:4", "Password Field", 260.0, (0.96, 0.96, 0.96)),
        field("1:5", "Login Button", 340.0, (0.2, 0.4, 0.9)),
    ];

    let mut page = RawNode::new("0:1", "Login Page", "CANVAS");
    page.children = vec![container];

    let mut document = RawNode::new("0:0", "Document", "DOCUMENT");
    document.children = vec![page];

    RawDocument {
        name: Some("Login".to_string()),
        ..RawDocument::with_root(document)
    }
}
