//! Key/value rendering.
//!
//! Flat label/value lists appear in every document format: model details,
//! environmental impact figures, hub metadata and legacy card data. Empty
//! values are dropped, list values are joined with `", "`.

use serde_json::Value;

use crate::dom::{Element, Node};
use crate::model::HasContent;

/// The value half of a [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairValue<'a> {
    Text(&'a str),
    /// Text that is a URL; rendered as a link in HTML when the scheme allows.
    Url(&'a str),
    List(&'a [String]),
    Flag(bool),
    Json(&'a Value),
}

impl HasContent for PairValue<'_> {
    fn has_content(&self) -> bool {
        match self {
            PairValue::Text(s) | PairValue::Url(s) => s.has_content(),
            PairValue::List(items) => items.has_content(),
            PairValue::Flag(_) => true,
            PairValue::Json(value) => value.has_content(),
        }
    }
}

impl PairValue<'_> {
    /// The value as display text.
    pub fn display(&self) -> String {
        match self {
            PairValue::Text(s) | PairValue::Url(s) => s.trim().to_string(),
            PairValue::List(items) => items.join(", "),
            PairValue::Flag(flag) => flag.to_string(),
            PairValue::Json(value) => json_display(value),
        }
    }
}

fn json_display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items.iter().map(json_display).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// A labelled value.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair<'a> {
    pub label: String,
    pub value: PairValue<'a>,
}

impl<'a> Pair<'a> {
    /// Pair labelled by a prettified field key (`co2_emitted` → `Co2 Emitted`).
    pub fn keyed(key: &str, value: PairValue<'a>) -> Self {
        Self {
            label: prettify_label(key),
            value,
        }
    }

    /// Pair with an explicit label.
    pub fn titled(label: impl Into<String>, value: PairValue<'a>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Turn a snake_case key into a title: underscores become spaces and each
/// word starts with an uppercase letter.
pub fn prettify_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render pairs as `Label: value` lines.
pub fn render_plain(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .filter(|pair| pair.value.has_content())
        .map(|pair| format!("{}: {}", pair.label, pair.value.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render pairs as key/value HTML fragments.
pub fn render_html(pairs: &[Pair]) -> Vec<Node> {
    pairs
        .iter()
        .filter(|pair| pair.value.has_content())
        .map(|pair| {
            Element::new("div")
                .class("kv")
                .child(Element::new("span").class("kv-label").text(pair.label.clone()))
                .child(Element::new("span").class("kv-value").child(value_node(&pair.value)))
                .into()
        })
        .collect()
}

/// Render pairs as a responsive grid of label/value cards.
pub fn render_grid(pairs: &[Pair]) -> Option<Node> {
    let cards: Vec<Node> = pairs
        .iter()
        .filter(|pair| pair.value.has_content())
        .map(|pair| {
            Element::new("div")
                .class("stat-card")
                .child(Element::new("span").class("stat-label").text(pair.label.clone()))
                .child(Element::new("span").class("stat-value").child(value_node(&pair.value)))
                .into()
        })
        .collect();

    if cards.is_empty() {
        return None;
    }
    Some(Element::new("div").class("stat-grid").children(cards).into())
}

fn value_node(value: &PairValue) -> Node {
    let text = value.display();
    match value {
        PairValue::Url(url) if is_web_url(url) => Element::new("a")
            .attr("href", text.clone())
            .attr("rel", "noopener noreferrer")
            .text(text)
            .into(),
        _ => Node::Text(text),
    }
}

fn is_web_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    url.starts_with("https://") || url.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prettify_label() {
        assert_eq!(prettify_label("funded_by"), "Funded By");
        assert_eq!(prettify_label("co2_emitted"), "Co2 Emitted");
        assert_eq!(prettify_label("license"), "License");
        assert_eq!(prettify_label("pipeline__tag_"), "Pipeline Tag");
    }

    #[test]
    fn test_plain_skips_empty_values() {
        let pairs = [
            Pair::keyed("hardware_type", PairValue::Text("A100")),
            Pair::keyed("hours_used", PairValue::Text("  ")),
            Pair::keyed("cloud_region", PairValue::Text("eu-west-1")),
        ];
        assert_eq!(render_plain(&pairs), "Hardware Type: A100\nCloud Region: eu-west-1");
    }

    #[test]
    fn test_lists_are_joined() {
        let tags = vec!["nlp".to_string(), "medical".to_string()];
        let pairs = [Pair::keyed("tags", PairValue::List(&tags))];
        assert_eq!(render_plain(&pairs), "Tags: nlp, medical");

        let value = json!(["a", 1, true]);
        let pairs = [Pair::keyed("mixed", PairValue::Json(&value))];
        assert_eq!(render_plain(&pairs), "Mixed: a, 1, true");
    }

    #[test]
    fn test_flags_always_render() {
        let pairs = [Pair::keyed("inference", PairValue::Flag(false))];
        assert_eq!(render_plain(&pairs), "Inference: false");
    }

    #[test]
    fn test_html_fragments_escape_text() {
        let pairs = [Pair::titled("Notes", PairValue::Text("<script>x</script>"))];
        let html: String = render_html(&pairs).iter().map(Node::to_html).collect();
        assert_eq!(
            html,
            "<div class=\"kv\"><span class=\"kv-label\">Notes</span>\
             <span class=\"kv-value\">&lt;script&gt;x&lt;/script&gt;</span></div>"
        );
    }

    #[test]
    fn test_urls_become_links_only_for_web_schemes() {
        let pairs = [
            Pair::titled("Repository", PairValue::Url("https://github.com/org/model")),
            Pair::titled("Demo", PairValue::Url("javascript:alert(1)")),
        ];
        let html: String = render_html(&pairs).iter().map(Node::to_html).collect();
        assert!(html.contains("<a href=\"https://github.com/org/model\" rel=\"noopener noreferrer\">"));
        assert!(!html.contains("href=\"javascript:"));
        assert!(html.contains("javascript:alert(1)"));
    }

    #[test]
    fn test_grid_empty_when_no_content() {
        let pairs = [Pair::keyed("hours_used", PairValue::Text(""))];
        assert!(render_grid(&pairs).is_none());

        let pairs = [Pair::keyed("hours_used", PairValue::Text("12"))];
        let html = render_grid(&pairs).unwrap().to_html();
        assert!(html.starts_with("<div class=\"stat-grid\">"));
        assert!(html.contains("<span class=\"stat-label\">Hours Used</span>"));
    }
}
