pub mod cli;
pub mod config;
pub mod design;
pub mod logging;
pub mod transpiler;

// Re-export commonly used types
pub use design::{DocumentSource, FileSource, RawDocument, RawNode};
pub use transpiler::{Component, ConversionOutput, ConvertError, Dialect, EmitOptions, convert, transpile};
