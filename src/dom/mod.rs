//! Minimal HTML node tree.
//!
//! The HTML renderer builds its document as a tree of [`Node`]s and
//! serializes it in one place, so every piece of record text passes through
//! [`escape_html`] exactly once. Pre-sanitized fragments and static assets
//! (stylesheet, scripts) enter the tree as [`Node::Raw`].

use std::fmt::Write;

use crate::markup::escape_html;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "link", "meta"];

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Markup emitted as-is. Only for sanitized fragments and static assets.
    Raw(String),
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. An empty value renders as a bare boolean attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn raw(self, html: impl Into<String>) -> Self {
        self.child(Node::Raw(html.into()))
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Serialize this node and its descendants.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Raw(html) => out.push_str(html),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    if value.is_empty() {
                        let _ = write!(out, " {name}");
                    } else {
                        let _ = write!(out, " {name}=\"{}\"", escape_html(value));
                    }
                }
                out.push('>');
                if element.is_void() {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let node: Node = Element::new("p").text("<b>&</b>").into();
        assert_eq!(node.to_html(), "<p>&lt;b&gt;&amp;&lt;/b&gt;</p>");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let node: Node = Element::new("a").attr("href", "x\" onclick=\"y").into();
        assert_eq!(node.to_html(), "<a href=\"x&quot; onclick=&quot;y\"></a>");
    }

    #[test]
    fn test_boolean_attribute() {
        let node: Node = Element::new("div").attr("hidden", "").into();
        assert_eq!(node.to_html(), "<div hidden></div>");
    }

    #[test]
    fn test_void_elements_have_no_close_tag() {
        let node: Node = Element::new("meta").attr("charset", "utf-8").into();
        assert_eq!(node.to_html(), "<meta charset=\"utf-8\">");
    }

    #[test]
    fn test_raw_passes_through() {
        let node: Node = Element::new("div").raw("<em>ok</em>").into();
        assert_eq!(node.to_html(), "<div><em>ok</em></div>");
    }

    #[test]
    fn test_nested_children_in_order() {
        let node: Node = Element::new("ul")
            .children(["a", "b"].map(|t| Element::new("li").text(t)))
            .into();
        assert_eq!(node.to_html(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_get_attr() {
        let element = Element::new("section").id("x").class("y");
        assert_eq!(element.get_attr("id"), Some("x"));
        assert_eq!(element.get_attr("class"), Some("y"));
        assert_eq!(element.get_attr("title"), None);
    }
}
