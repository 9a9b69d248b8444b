//! # modelcard-export
//!
//! Render machine-learning model cards to JSON, Markdown, HTML and PDF.
//!
//! ## Features
//!
//! - One [`ModelCardRecord`] in, four documents out
//! - Markdown `README.md` with a Hugging Face YAML front matter block
//! - Self-contained HTML with a keyboard-accessible accordion and light/dark themes
//! - Paginated PDF using the standard PDF fonts
//! - Free text is authored in Markdown: sanitized for HTML, flattened for PDF
//!
//! ## Quick Start
//!
//! ```no_run
//! use modelcard_export::{DirectoryDelivery, ExportOptions, ModelCardRecord, export_all};
//!
//! let json = std::fs::read_to_string("card.json")?;
//! let record = ModelCardRecord::from_json(&json)?;
//!
//! let mut out = DirectoryDelivery::new("dist");
//! for file in export_all(&record, &ExportOptions::default(), &mut out)? {
//!     println!("wrote {}", file.filename);
//! }
//! # Ok::<(), modelcard_export::Error>(())
//! ```
//!
//! ## Rendering without writing files
//!
//! ```
//! use modelcard_export::{ExportOptions, Format, ModelCardRecord, prepare};
//!
//! let record = ModelCardRecord::new("demo").with_developers("A. Lovelace");
//! let renderer = Format::Markdown.renderer();
//! let file = prepare(renderer.as_ref(), &record, &ExportOptions::default()).unwrap();
//!
//! assert_eq!(file.filename, "README.md");
//! assert!(file.document.as_str().unwrap().contains("# Model Card for demo"));
//! ```

pub mod dom;
pub mod error;
pub mod export;
pub mod frontmatter;
pub mod markup;
pub mod model;
pub mod sections;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use export::{
    ColorMode, Delivery, DirectoryDelivery, ExportOptions, ExportedFile, Format, MemoryDelivery,
    PageSize, RenderedDocument, Renderer, export, export_all, prepare,
};
pub use model::{HasContent, ModelCardRecord, has_content};
