//! PDF Renderer - paginated print document.
//!
//! The record is laid out as plain text: free-text fields are flattened from
//! markdown and word-wrapped, code keeps its spacing in a monospaced font.
//! The file itself is written by hand using the standard Type1 fonts, so no
//! font data is embedded.

mod layout;
mod writer;

pub use layout::{Font, Page, TextRun};

use layout::PageLayout;
use writer::{PdfSettings, write_pdf};

use crate::error::{Error, Result};
use crate::markup::to_plain_text;
use crate::model::{HasContent, ModelCardRecord};
use crate::sections::{Body, Mode, PDF_ORDER, Pair, metadata_pairs, render_plain, section};

use super::{ExportOptions, Format, PageSize, RenderedDocument, Renderer};

const TITLE_SIZE: f64 = 20.0;
const SUMMARY_SIZE: f64 = 11.0;
const HEADING_SIZE: f64 = 14.0;
const SUBHEADING_SIZE: f64 = 11.0;
const BODY_SIZE: f64 = 10.0;
const CODE_SIZE: f64 = 9.0;

/// Renderer for the paginated PDF document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for PdfRenderer {
    fn format(&self) -> Format {
        Format::Pdf
    }

    fn generate(&self, record: &ModelCardRecord, options: &ExportOptions) -> Result<RenderedDocument> {
        let page_size = options.pdf.page_size;
        let pages = layout_record(record, page_size);
        let (width, height) = page_size.dimensions();
        let title = format!("Model Card: {}", record.title());
        let settings = PdfSettings {
            title: &title,
            producer: concat!("modelcard-export ", env!("CARGO_PKG_VERSION")),
            width,
            height,
            compress: options.pdf.compress,
        };

        let bytes = write_pdf(&pages, &settings).map_err(|e| Error::generation(Format::Pdf, e))?;
        Ok(RenderedDocument::new(bytes, Format::Pdf.mime_type()))
    }
}

/// Lay the record out onto pages.
pub fn layout_record(record: &ModelCardRecord, page_size: PageSize) -> Vec<Page> {
    let (width, height) = page_size.dimensions();
    let mut doc = PageLayout::new(width, height);

    doc.heading(&format!("Model Card: {}", record.title()), TITLE_SIZE, 0.0);
    if let Some(summary) = record.model_summary.as_deref().filter(|s| s.has_content()) {
        doc.paragraph(&to_plain_text(summary), Font::Italic, SUMMARY_SIZE);
    }

    for id in PDF_ORDER {
        let section = section(id);
        if !section.has_content(record) {
            continue;
        }
        doc.heading(section.pdf, HEADING_SIZE, 8.0);

        match section.body {
            Body::Blocks(_) => {
                let mut pairs: Vec<Pair> = Vec::new();
                for field in section.fields() {
                    if field.mode.is_pair() {
                        pairs.extend(field.pair(record));
                        continue;
                    }
                    flush_pairs(&mut doc, &mut pairs);

                    let Some(value) = field.value(record) else {
                        continue;
                    };
                    if let Some(title) = field.title {
                        doc.heading(title, SUBHEADING_SIZE, 4.0);
                    }
                    match field.mode {
                        Mode::Literal(_) => doc.literal(value, CODE_SIZE),
                        _ => doc.paragraph(&to_plain_text(value), Font::Regular, BODY_SIZE),
                    }
                }
                flush_pairs(&mut doc, &mut pairs);
            }
            Body::Metadata => {
                doc.paragraph(&render_plain(&metadata_pairs(record)), Font::Regular, BODY_SIZE);
            }
            // Legacy card data is not part of the print layout.
            Body::CardData => {}
        }
    }

    doc.finish()
}

fn flush_pairs(doc: &mut PageLayout, pairs: &mut Vec<Pair>) {
    if pairs.is_empty() {
        return;
    }
    doc.paragraph(&render_plain(pairs), Font::Regular, BODY_SIZE);
    pairs.clear();
}
