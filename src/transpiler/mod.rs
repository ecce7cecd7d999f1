pub mod color;
pub mod component;
pub mod construction;
pub mod errors;
pub mod markup;
pub mod naming;
pub mod normalizer;
pub mod types;

pub use component::{Bounds, Component, ComponentTree, Dimension, Properties};
pub use construction::{ConstructionEmitter, Dialect, EmitOptions};
pub use errors::ConvertError;
pub use markup::MarkupEmitter;
pub use normalizer::{Normalizer, normalize};

use crate::design::{DocumentSource, RawDocument};
use anyhow::{Context, Result};

/// Everything one conversion run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    pub components: Vec<Component>,
    pub markup: String,
    pub java: String,
    pub kotlin: String,
}

/// Normalizes `document` once and renders all three outputs.
pub fn convert(document: &RawDocument, options: &EmitOptions) -> Result<ConversionOutput, ConvertError> {
    convert_node(document, None, options)
}

pub fn convert_node(
    document: &RawDocument,
    node_id: Option<&str>,
    options: &EmitOptions,
) -> Result<ConversionOutput, ConvertError> {
    let components = Normalizer::new().normalize_node(document, node_id)?;
    Ok(render(components, options))
}

/// Renders an already-normalized component list.
pub fn render(components: Vec<Component>, options: &EmitOptions) -> ConversionOutput {
    let markup = MarkupEmitter::new().emit(&components);
    let java = ConstructionEmitter::new(&Dialect::JAVA, options).emit(&components);
    let kotlin = ConstructionEmitter::new(&Dialect::KOTLIN, options).emit(&components);

    ConversionOutput {
        components,
        markup,
        java,
        kotlin,
    }
}

/// Convenience function to convert a JSON design export with default options.
pub fn transpile(source: &str) -> Result<ConversionOutput> {
    let document = RawDocument::from_json(source).context("Failed to decode design document")?;
    let output = convert(&document, &EmitOptions::default())?;
    Ok(output)
}

/// Fetches from `source`, then converts. Supplier failures are reported
/// before any conversion work starts.
pub fn convert_from(
    source: &dyn DocumentSource,
    node_id: Option<&str>,
    options: &EmitOptions,
) -> Result<ConversionOutput> {
    let document = source.fetch()?;
    let output = convert_node(&document, node_id, options)?;
    Ok(output)
}
