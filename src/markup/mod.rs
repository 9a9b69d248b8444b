//! Pure transformations of user-authored markup.
//!
//! Free-text fields of a model card are written in a lightweight markdown
//! dialect. Each output format needs them in a different shape:
//!
//! - [`escape`]: entity escaping for text embedded in HTML
//! - [`html`]: markdown → HTML, sanitized against a fixed allow-list
//! - [`plain`]: markdown → plain text for the fixed-width PDF layout
//!
//! Markdown output needs no transformation at all; the fields are copied as
//! written.
//!
//! ## Design Notes
//!
//! - **Sanitization is a security boundary**: markup fields may contain
//!   script, style, event handlers or `javascript:` URLs. Tags and attributes
//!   outside the allow-list are stripped (their text survives), except the
//!   contents of `script` and `style`, which are dropped entirely.
//! - **Flattening runs to a fixed point**: the individual rewrite steps can
//!   expose constructs for one another (a code span holding `**x**`), so the
//!   step sequence repeats until the text stops changing.

mod escape;
mod html;
mod plain;

pub use escape::escape_html;
pub use html::{ALLOWED_ATTRIBUTES, ALLOWED_TAGS, render_markup, sanitize_html};
pub use plain::to_plain_text;
