//! Export module for rendering model cards to document formats.
//!
//! Provides the [`Renderer`] trait, one implementation per [`Format`], and the
//! shared export algorithm every format goes through:
//!
//! 1. **Validate**: the record must carry a non-blank `model_id`.
//! 2. **Generate**: the renderer builds the complete document in memory.
//! 3. **Name**: the output file name is derived from the model id, or taken
//!    from [`ExportOptions::filename`].
//! 4. **Deliver**: the finished document is handed to a [`Delivery`] sink.
//!
//! Renderers only implement step 2. A failure in steps 1-2 means nothing is
//! delivered.
//!
//! # Example
//!
//! ```no_run
//! use modelcard_export::ModelCardRecord;
//! use modelcard_export::export::{DirectoryDelivery, ExportOptions, Format, export};
//!
//! let record = ModelCardRecord::new("clinical-bert").with_developers("A. Lovelace");
//! let mut out = DirectoryDelivery::new("out");
//!
//! let file = export(Format::Html.renderer().as_ref(), &record, &ExportOptions::default(), &mut out)?;
//! assert_eq!(file.filename, "clinical-bert-modelcard.html");
//! # Ok::<(), modelcard_export::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::ModelCardRecord;

mod deliver;
mod filename;
mod html;
mod json;
mod markdown;
mod options;
mod pdf;

pub use deliver::{Delivery, DirectoryDelivery, MemoryDelivery};
pub use filename::{export_filename, slugify};
pub use html::{HtmlRenderer, render_html_document};
pub use json::JsonRenderer;
pub use markdown::{MarkdownRenderer, render_markdown};
pub use options::{ColorMode, ExportOptions, HtmlOptions, PageSize, PdfOptions};
pub use pdf::{Font, Page, PdfRenderer, TextRun, layout_record};

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Pdf,
    Markdown,
    Html,
}

impl Format {
    /// Every format, in the order `export_all` produces them.
    pub const ALL: [Format; 4] = [Format::Json, Format::Pdf, Format::Markdown, Format::Html];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Pdf => "pdf",
            Format::Markdown => "md",
            Format::Html => "html",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Pdf => "application/pdf",
            Format::Markdown => "text/markdown",
            Format::Html => "text/html",
        }
    }

    /// A file name this format always uses, whatever the record or options.
    pub fn fixed_filename(self) -> Option<&'static str> {
        match self {
            Format::Markdown => Some("README.md"),
            _ => None,
        }
    }

    /// The renderer for this format.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Format::Json => Box::new(JsonRenderer),
            Format::Pdf => Box::new(PdfRenderer),
            Format::Markdown => Box::new(MarkdownRenderer),
            Format::Html => Box::new(HtmlRenderer),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "JSON",
            Format::Pdf => "PDF",
            Format::Markdown => "Markdown",
            Format::Html => "HTML",
        })
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "pdf" => Ok(Format::Pdf),
            "md" | "markdown" => Ok(Format::Markdown),
            "html" | "htm" => Ok(Format::Html),
            _ => Err(Error::InvalidOption {
                key: "format",
                value: s.to_string(),
            }),
        }
    }
}

/// A generated document: the bytes and their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl RenderedDocument {
    pub fn new(bytes: Vec<u8>, mime_type: &'static str) -> Self {
        Self { bytes, mime_type }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The document as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// A named document, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub document: RenderedDocument,
}

/// Generates one document format.
///
/// Implementations are stateless: the output depends only on the record and
/// the options. They must not fail because optional fields are missing.
pub trait Renderer {
    fn format(&self) -> Format;

    fn generate(&self, record: &ModelCardRecord, options: &ExportOptions) -> Result<RenderedDocument>;
}

/// Check the one field every export needs and return the trimmed model id.
pub fn validate(record: &ModelCardRecord) -> Result<&str> {
    record.model_id().ok_or_else(|| {
        warn!("record has no model_id");
        Error::MissingRequiredField("model_id")
    })
}

/// Validate, generate and name a document without delivering it.
pub fn prepare<R>(renderer: &R, record: &ModelCardRecord, options: &ExportOptions) -> Result<ExportedFile>
where
    R: Renderer + ?Sized,
{
    let format = renderer.format();
    let model_id = validate(record)?;
    debug!(%format, model_id, "validated record");

    let document = renderer.generate(record, options)?;
    debug!(%format, model_id, bytes = document.len(), "generated document");

    let filename = export_filename(format, model_id, options.filename.as_deref());
    debug!(%format, filename = %filename, "named document");

    Ok(ExportedFile { filename, document })
}

/// Run the full export algorithm for one renderer.
pub fn export<R, D>(
    renderer: &R,
    record: &ModelCardRecord,
    options: &ExportOptions,
    delivery: &mut D,
) -> Result<ExportedFile>
where
    R: Renderer + ?Sized,
    D: Delivery + ?Sized,
{
    let file = prepare(renderer, record, options)?;
    deliver(&file, delivery)?;
    Ok(file)
}

/// Export every format in [`Format::ALL`] order.
///
/// All documents are generated before the first one is delivered, so a
/// validation or generation failure delivers nothing.
pub fn export_all<D>(
    record: &ModelCardRecord,
    options: &ExportOptions,
    delivery: &mut D,
) -> Result<Vec<ExportedFile>>
where
    D: Delivery + ?Sized,
{
    validate(record)?;
    let files = Format::ALL
        .iter()
        .map(|format| prepare(format.renderer().as_ref(), record, options))
        .collect::<Result<Vec<_>>>()?;

    for file in &files {
        deliver(file, delivery)?;
    }
    Ok(files)
}

fn deliver<D: Delivery + ?Sized>(file: &ExportedFile, delivery: &mut D) -> Result<()> {
    delivery
        .deliver(&file.filename, &file.document)
        .map_err(|source| Error::Delivery {
            filename: file.filename.clone(),
            source,
        })?;
    debug!(filename = %file.filename, bytes = file.document.len(), "delivered document");
    Ok(())
}
