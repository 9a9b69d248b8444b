//! Markdown → sanitized HTML.

use std::collections::HashMap;

use pulldown_cmark::{Options, Parser};

/// Tags that may appear in rendered markup. Anything else is unwrapped.
pub const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "u", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "a",
    "code", "pre", "blockquote", "hr", "table", "thead", "tbody", "tr", "th", "td", "img", "del",
    "ins", "sub", "sup",
];

/// Attributes that may appear on any allowed tag.
pub const ALLOWED_ATTRIBUTES: &[&str] = &["href", "src", "alt", "title", "class"];

/// URL schemes accepted in `href` and `src`; relative URLs pass through.
const URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render user-authored markdown to an HTML fragment that is safe to embed.
///
/// Supports headings, emphasis, lists, links, images, code spans and blocks,
/// blockquotes, tables, strikethrough, rules and inline HTML. The generated
/// HTML then goes through [`sanitize_html`].
///
/// # Examples
///
/// ```
/// use modelcard_export::markup::render_markup;
///
/// let html = render_markup("**Use** it for *testing*.");
/// assert_eq!(html.trim(), "<p><strong>Use</strong> it for <em>testing</em>.</p>");
/// ```
pub fn render_markup(markup: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markup, options);
    let mut html = String::with_capacity(markup.len() + markup.len() / 2);
    pulldown_cmark::html::push_html(&mut html, parser);

    sanitize_html(&html)
}

/// Strip every tag and attribute outside the allow-list.
///
/// Disallowed tags are removed but their text is kept, except `script` and
/// `style`, whose contents are dropped along with the tag. `href`/`src` values
/// with schemes other than http, https and mailto are removed.
pub fn sanitize_html(html: &str) -> String {
    let mut builder = ammonia::Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .tag_attributes(HashMap::new())
        .generic_attributes(ALLOWED_ATTRIBUTES.iter().copied().collect())
        .url_schemes(URL_SCHEMES.iter().copied().collect())
        .link_rel(None);
    builder.clean(html).to_string()
}
