//! HTML Renderer - standalone accordion document.
//!
//! The document is built as a [`dom`](crate::dom) tree and serialized once.
//! Sections of the shared table are grouped into five accordion groups; a
//! group with no content is left out. The stylesheet and scripts are static
//! assets: the accordion script is parameterized only by the accordion's id,
//! and the theme follower is included only in [`ColorMode::Auto`].

use tracing::trace;

use crate::dom::{Element, Node};
use crate::error::Result;
use crate::markup::render_markup;
use crate::model::{HasContent, ModelCardRecord};
use crate::sections::{
    AccordionGroup, Body, Field, Layout, Mode, Pair, Section, card_data_pairs, metadata_pairs,
    render_grid, render_html,
};

use super::{ColorMode, ExportOptions, Format, RenderedDocument, Renderer};

const STYLE: &str = include_str!("assets/style.css");
const ACCORDION_SCRIPT: &str = include_str!("assets/accordion.js");
const THEME_SCRIPT: &str = include_str!("assets/theme.js");

/// Id of the accordion container; the accordion script looks it up.
const ACCORDION_ID: &str = "mc-accordion";

/// Renderer for the standalone HTML document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn format(&self) -> Format {
        Format::Html
    }

    fn generate(&self, record: &ModelCardRecord, options: &ExportOptions) -> Result<RenderedDocument> {
        let html = render_html_document(record, options.html.color_mode);
        Ok(RenderedDocument::new(html.into_bytes(), Format::Html.mime_type()))
    }
}

/// Render a record to a complete HTML document.
pub fn render_html_document(record: &ModelCardRecord, color_mode: ColorMode) -> String {
    let title = format!("Model Card: {}", record.title());

    let mut root = Element::new("html").attr("lang", "en");
    if color_mode != ColorMode::Auto {
        root = root.attr("data-theme", color_mode.as_str());
    }

    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(title.clone()))
        .child(Element::new("style").raw(STYLE));

    let mut body = Element::new("body").child(
        Element::new("div")
            .class("mc-container")
            .child(header(record, &title))
            .child(controls())
            .child(accordion(record)),
    );

    body = body.child(Element::new("script").raw(ACCORDION_SCRIPT.replace("__ACCORDION_ID__", ACCORDION_ID)));
    if color_mode == ColorMode::Auto {
        body = body.child(Element::new("script").raw(THEME_SCRIPT));
    }

    let doc: Node = root.child(head).child(body).into();
    let mut out = String::from("<!DOCTYPE html>\n");
    doc.write_html(&mut out);
    out.push('\n');
    out
}

fn header(record: &ModelCardRecord, title: &str) -> Element {
    let mut header = Element::new("header")
        .class("mc-header")
        .child(Element::new("h1").text(title));
    if let Some(summary) = record.model_summary.as_deref().filter(|s| s.has_content()) {
        header = header.child(Element::new("div").class("mc-summary").raw(render_markup(summary)));
    }
    header
}

fn controls() -> Element {
    Element::new("div")
        .class("mc-controls")
        .child(
            Element::new("button")
                .attr("type", "button")
                .attr("data-mc-action", "expand")
                .text("Expand all"),
        )
        .child(
            Element::new("button")
                .attr("type", "button")
                .attr("data-mc-action", "collapse")
                .text("Collapse all"),
        )
}

fn accordion(record: &ModelCardRecord) -> Element {
    let mut container = Element::new("main").class("accordion").id(ACCORDION_ID);
    let mut first = true;

    for group in AccordionGroup::ALL {
        let sections: Vec<Node> = group
            .sections()
            .filter(|section| section.has_content(record))
            .map(|section| render_section(section, record).into())
            .collect();
        if sections.is_empty() {
            trace!(group = group.slug(), "omitting empty accordion group");
            continue;
        }
        container = container.child(accordion_item(group, sections, first));
        first = false;
    }

    container
}

fn accordion_item(group: AccordionGroup, sections: Vec<Node>, open: bool) -> Element {
    let item_id = format!("mc-group-{}", group.slug());
    let header_id = format!("{item_id}-header");
    let panel_id = format!("{item_id}-panel");

    let header = Element::new("button")
        .class("accordion-header")
        .id(header_id.clone())
        .attr("type", "button")
        .attr("aria-expanded", if open { "true" } else { "false" })
        .attr("aria-controls", panel_id.clone())
        .text(group.title());

    let mut panel = Element::new("div")
        .class("accordion-panel")
        .id(panel_id)
        .attr("role", "region")
        .attr("aria-labelledby", header_id);
    if !open {
        panel = panel.attr("hidden", "");
    }

    Element::new("div")
        .class(if open { "accordion-item open" } else { "accordion-item" })
        .id(item_id)
        .child(header)
        .child(panel.children(sections))
}

fn render_section(section: &Section, record: &ModelCardRecord) -> Element {
    let mut el = Element::new("section")
        .class("mc-section")
        .id(format!("mc-section-{}", section.id.slug()))
        .child(Element::new("h3").text(section.html));

    match section.body {
        Body::Blocks(_) => {
            el = el.children(field_nodes(section, record));
        }
        Body::Metadata => {
            el = el.children(render_html(&metadata_pairs(record)));
        }
        Body::CardData => {
            el = el.children(render_html(&card_data_pairs(record)));
        }
    }
    el
}

/// Fields in table order. Runs of adjacent pair fields render together.
fn field_nodes(section: &Section, record: &ModelCardRecord) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut pairs: Vec<Pair> = Vec::new();

    for field in section.fields() {
        if field.mode.is_pair() {
            pairs.extend(field.pair(record));
            continue;
        }
        flush_pairs(&mut nodes, &mut pairs, section.layout);
        nodes.extend(field_content(field, record));
    }
    flush_pairs(&mut nodes, &mut pairs, section.layout);
    nodes
}

fn flush_pairs(nodes: &mut Vec<Node>, pairs: &mut Vec<Pair>, layout: Layout) {
    if pairs.is_empty() {
        return;
    }
    match layout {
        Layout::Grid => nodes.extend(render_grid(pairs)),
        Layout::Stack => nodes.extend(render_html(pairs)),
    }
    pairs.clear();
}

fn field_content(field: &Field, record: &ModelCardRecord) -> Vec<Node> {
    let Some(value) = field.value(record) else {
        return Vec::new();
    };

    let mut nodes = Vec::new();
    if let Some(title) = field.title {
        nodes.push(Element::new("h4").text(title).into());
    }
    match field.mode {
        Mode::Literal(lang) => {
            let code = Element::new("code")
                .class(format!("language-{lang}"))
                .text(value.trim_matches('\n'));
            nodes.push(Element::new("pre").child(code).into());
        }
        _ => {
            nodes.push(
                Element::new("div")
                    .class("markup")
                    .raw(render_markup(value))
                    .into(),
            );
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Citation, EnvironmentalImpact, HubMetadata, Sources, Uses};
    use serde_json::json;

    fn demo() -> ModelCardRecord {
        ModelCardRecord::new("demo")
            .with_developers("A. Lovelace")
            .with_uses(Uses {
                direct_use: Some("**Use** it for *testing*.".into()),
                ..Uses::default()
            })
    }

    #[test]
    fn test_document_shell() {
        let html = render_html_document(&demo(), ColorMode::Auto);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Model Card: demo</title>"));
        assert!(html.contains("<h1>Model Card: demo</h1>"));
        assert!(html.contains("id=\"mc-accordion\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_groups_present_and_absent() {
        let html = render_html_document(&demo(), ColorMode::Auto);
        assert!(html.contains("id=\"mc-group-overview\""));
        assert!(html.contains("id=\"mc-group-intended-use\""));
        assert!(html.contains("Intended Use &amp; Safety"));
        assert!(html.contains("<strong>Use</strong> it for <em>testing</em>."));
        assert!(!html.contains("mc-group-impact-specs"));
        assert!(!html.contains("Impact &amp; Specifications"));
        assert!(!html.contains("mc-group-training-evaluation"));
    }

    #[test]
    fn test_first_group_open_rest_collapsed() {
        let html = render_html_document(&demo(), ColorMode::Auto);
        assert!(html.contains("<div class=\"accordion-item open\" id=\"mc-group-overview\">"));
        assert!(html.contains("<div class=\"accordion-item\" id=\"mc-group-intended-use\">"));
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert!(html.contains("id=\"mc-group-intended-use-panel\" role=\"region\" aria-labelledby=\"mc-group-intended-use-header\" hidden>"));
    }

    #[test]
    fn test_first_included_group_opens_when_overview_empty() {
        let record = ModelCardRecord::new("demo").with_uses(Uses {
            direct_use: Some("x".into()),
            ..Uses::default()
        });
        let html = render_html_document(&record, ColorMode::Auto);
        assert!(!html.contains("mc-group-overview"));
        assert!(html.contains("<div class=\"accordion-item open\" id=\"mc-group-intended-use\">"));
    }

    #[test]
    fn test_explicit_color_mode_is_static() {
        let html = render_html_document(&demo(), ColorMode::Dark);
        assert!(html.contains("<html lang=\"en\" data-theme=\"dark\">"));
        assert!(!html.contains("MutationObserver"));
        assert!(html.contains("mc-accordion"));

        let html = render_html_document(&demo(), ColorMode::Light);
        assert!(html.contains("data-theme=\"light\""));
        assert!(!html.contains("MutationObserver"));
    }

    #[test]
    fn test_auto_mode_follows_host() {
        let html = render_html_document(&demo(), ColorMode::Auto);
        assert!(!html.contains("<html lang=\"en\" data-theme"));
        assert!(html.contains("MutationObserver"));
        assert!(html.contains("prefers-color-scheme"));
    }

    #[test]
    fn test_accordion_script_gets_container_id() {
        let html = render_html_document(&demo(), ColorMode::Light);
        assert!(html.contains("document.getElementById(\"mc-accordion\")"));
        assert!(!html.contains("__ACCORDION_ID__"));
    }

    #[test]
    fn test_script_in_markup_is_stripped() {
        let record = ModelCardRecord::new("demo").with_uses(Uses {
            direct_use: Some("Hi <script>alert(1)</script> <img src=x onerror=alert(2)>".into()),
            ..Uses::default()
        });
        let html = render_html_document(&record, ColorMode::Light);
        // The only scripts are the document's own.
        assert_eq!(html.matches("<script").count(), 1);
        assert!(!html.contains("alert(1)"));
        assert!(!html.contains("onerror="));
    }

    #[test]
    fn test_code_is_literal() {
        let mut record = ModelCardRecord::new("demo");
        record.get_started_code = Some("print(\"<b>**x**</b>\")".into());
        let html = render_html_document(&record, ColorMode::Light);
        assert!(html.contains(
            "<pre><code class=\"language-python\">print(&quot;&lt;b&gt;**x**&lt;/b&gt;&quot;)</code></pre>"
        ));
    }

    #[test]
    fn test_environmental_impact_grid() {
        let mut record = ModelCardRecord::new("demo");
        record.environmental_impact = Some(EnvironmentalImpact {
            hardware_type: Some("A100".into()),
            ..EnvironmentalImpact::default()
        });
        let html = render_html_document(&record, ColorMode::Light);
        assert!(html.contains("id=\"mc-group-impact-specs\""));
        assert!(html.contains("<div class=\"stat-grid\"><div class=\"stat-card\"><span class=\"stat-label\">Hardware Type</span>"));
    }

    #[test]
    fn test_sources_are_links() {
        let mut record = ModelCardRecord::new("demo");
        record.sources = Some(Sources {
            repo: Some("https://github.com/org/model".into()),
            demo: Some("not a url".into()),
            ..Sources::default()
        });
        let html = render_html_document(&record, ColorMode::Light);
        assert!(html.contains("<span class=\"kv-label\">Repository</span><span class=\"kv-value\"><a href=\"https://github.com/org/model\" rel=\"noopener noreferrer\">"));
        assert!(html.contains("<span class=\"kv-value\">not a url</span>"));
    }

    #[test]
    fn test_metadata_and_card_data() {
        let mut record = ModelCardRecord::new("demo").with_metadata(HubMetadata {
            datasets: Some(vec!["a".into(), "b".into()]),
            ..HubMetadata::default()
        });
        record.card_data = json!({"model_index": "x"}).as_object().cloned();
        let html = render_html_document(&record, ColorMode::Light);
        assert!(html.contains("<h3>Hub Metadata</h3>"));
        assert!(html.contains("<span class=\"kv-value\">a, b</span>"));
        assert!(html.contains("<h3>Additional Metadata</h3>"));
        assert!(html.contains("<span class=\"kv-label\">Model Index</span>"));
    }

    #[test]
    fn test_citation_bibtex_literal_apa_markup() {
        let mut record = ModelCardRecord::new("demo");
        record.citation = Some(Citation {
            citation_bibtex: Some("@misc{x}".into()),
            citation_apa: Some("*Doe* (2024)".into()),
            ..Citation::default()
        });
        let html = render_html_document(&record, ColorMode::Light);
        assert!(html.contains("<h4>BibTeX</h4><pre><code class=\"language-bibtex\">@misc{x}</code></pre>"));
        assert!(html.contains("<h4>APA</h4><div class=\"markup\"><p><em>Doe</em> (2024)</p>"));
    }

    #[test]
    fn test_summary_rendered_as_markup() {
        let record = ModelCardRecord::new("demo").with_summary("A *small* model");
        let html = render_html_document(&record, ColorMode::Light);
        assert!(html.contains("<div class=\"mc-summary\"><p>A <em>small</em> model</p>"));
    }
}
