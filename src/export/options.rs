//! Export configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Options shared by every renderer, plus per-format sections.
///
/// Deserializes from a partial document: missing keys take their defaults.
///
/// ```
/// use modelcard_export::export::{ColorMode, ExportOptions};
///
/// let options: ExportOptions = serde_json::from_str(r#"{"html": {"color_mode": "dark"}}"#)?;
/// assert_eq!(options.html.color_mode, ColorMode::Dark);
/// assert_eq!(options.filename, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Output file name, used instead of the one derived from the model id.
    /// The format's extension is appended when missing. Ignored for Markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub html: HtmlOptions,
    pub pdf: PdfOptions,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.html.color_mode = color_mode;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.pdf.page_size = page_size;
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.pdf.compress = compress;
        self
    }
}

/// HTML document options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    pub color_mode: ColorMode,
}

/// Color scheme of the HTML document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    /// Follow the embedding page's theme, or the system preference.
    #[default]
    Auto,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::Auto => "auto",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            "auto" => Ok(ColorMode::Auto),
            _ => Err(Error::InvalidOption {
                key: "color_mode",
                value: s.to_string(),
            }),
        }
    }
}

/// PDF document options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    pub page_size: PageSize,
    /// Deflate page content streams.
    pub compress: bool,
}

/// Paper size of the PDF document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
            PageSize::Letter => "letter",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            _ => Err(Error::InvalidOption {
                key: "page_size",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.filename, None);
        assert_eq!(options.html.color_mode, ColorMode::Auto);
        assert_eq!(options.pdf.page_size, PageSize::A4);
        assert!(!options.pdf.compress);
    }

    #[test]
    fn test_parse_color_mode() {
        assert_eq!("light".parse::<ColorMode>().unwrap(), ColorMode::Light);
        assert_eq!("DARK".parse::<ColorMode>().unwrap(), ColorMode::Dark);
        let err = "sepia".parse::<ColorMode>().unwrap_err();
        assert!(matches!(err, Error::InvalidOption { key: "color_mode", .. }));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!("letter".parse::<PageSize>().unwrap(), PageSize::Letter);
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
        assert!("a5".parse::<PageSize>().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: ExportOptions =
            serde_json::from_str(r#"{"filename": "card", "pdf": {"compress": true}}"#).unwrap();
        assert_eq!(options.filename.as_deref(), Some("card"));
        assert!(options.pdf.compress);
        assert_eq!(options.pdf.page_size, PageSize::A4);
        assert_eq!(options.html.color_mode, ColorMode::Auto);
    }

    #[test]
    fn test_unknown_color_mode_rejected_by_serde() {
        let result: Result<ExportOptions, _> =
            serde_json::from_str(r#"{"html": {"color_mode": "sepia"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let options = ExportOptions::new()
            .with_filename("x")
            .with_color_mode(ColorMode::Dark)
            .with_page_size(PageSize::Letter)
            .with_compression(true);
        assert_eq!(options.html.color_mode, ColorMode::Dark);
        assert_eq!(options.pdf.page_size, PageSize::Letter);
        assert!(options.pdf.compress);
    }
}
