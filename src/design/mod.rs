pub mod raw;
pub mod source;

pub use raw::{Geometry, Paint, RawDocument, RawNode, Rgba, TextStyle};
pub use source::{DocumentSource, FileSource, SampleSource, SourceError};
