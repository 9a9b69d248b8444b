//! Output file names.

use super::Format;

/// Lowercase the identifier and replace each whitespace run with one hyphen.
///
/// Other characters are kept as they are. Whitespace at either end is
/// dropped rather than turned into a hyphen.
///
/// ```
/// use modelcard_export::export::slugify;
///
/// assert_eq!(slugify("My Model! 2"), "my-model!-2");
/// ```
pub fn slugify(model_id: &str) -> String {
    model_id
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// File name for an export of `format`.
///
/// Markdown is always `README.md`. Otherwise a non-blank `requested` name is
/// used, with the format's extension appended unless already present, and
/// failing that `<slug>-modelcard.<ext>`.
pub fn export_filename(format: Format, model_id: &str, requested: Option<&str>) -> String {
    if let Some(fixed) = format.fixed_filename() {
        return fixed.to_string();
    }

    let ext = format.extension();
    match requested.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) if has_extension(name, ext) => name.to_string(),
        Some(name) => format!("{name}.{ext}"),
        None => format!("{}-modelcard.{ext}", slugify(model_id)),
    }
}

fn has_extension(name: &str, ext: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, found)| !stem.is_empty() && found.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(slugify("My Model! 2"), "my-model!-2");
        assert_eq!(slugify("  Clinical\t\tBERT  v1 "), "clinical-bert-v1");
        assert_eq!(slugify("already-slugged"), "already-slugged");
    }

    #[test]
    fn test_slug_edge_whitespace_dropped() {
        assert_eq!(slugify(" a"), "a");
        assert_eq!(slugify("a\n"), "a");
        assert_eq!(slugify(" \t "), "");
        assert_eq!(export_filename(Format::Json, " My Model ", None), "my-model-modelcard.json");
    }

    #[test]
    fn test_derived_names() {
        assert_eq!(export_filename(Format::Json, "My Model! 2", None), "my-model!-2-modelcard.json");
        assert_eq!(export_filename(Format::Pdf, "My Model! 2", None), "my-model!-2-modelcard.pdf");
        assert_eq!(export_filename(Format::Html, "My Model! 2", None), "my-model!-2-modelcard.html");
    }

    #[test]
    fn test_markdown_is_always_readme() {
        assert_eq!(export_filename(Format::Markdown, "My Model! 2", None), "README.md");
        assert_eq!(export_filename(Format::Markdown, "x", Some("custom")), "README.md");
    }

    #[test]
    fn test_requested_name_gets_extension() {
        assert_eq!(export_filename(Format::Json, "x", Some("card")), "card.json");
        assert_eq!(export_filename(Format::Json, "x", Some("card.JSON")), "card.JSON");
        assert_eq!(export_filename(Format::Pdf, "x", Some("v1.2")), "v1.2.pdf");
        assert_eq!(export_filename(Format::Html, "x", Some(".html")), ".html.html");
    }

    #[test]
    fn test_blank_requested_name_ignored() {
        assert_eq!(export_filename(Format::Json, "demo", Some("  ")), "demo-modelcard.json");
    }
}
