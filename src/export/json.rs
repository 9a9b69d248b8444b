//! JSON Renderer - full record dump.

use crate::error::{Error, Result};
use crate::model::ModelCardRecord;

use super::{ExportOptions, Format, RenderedDocument, Renderer};

/// Serializes the whole record with two-space indentation.
///
/// Nothing is filtered: empty strings and empty sections are written as they
/// are, unlike the document formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for JsonRenderer {
    fn format(&self) -> Format {
        Format::Json
    }

    fn generate(&self, record: &ModelCardRecord, _options: &ExportOptions) -> Result<RenderedDocument> {
        let mut bytes =
            serde_json::to_vec_pretty(record).map_err(|e| Error::generation(Format::Json, e))?;
        bytes.push(b'\n');
        Ok(RenderedDocument::new(bytes, Format::Json.mime_type()))
    }
}
