//! Markdown → plain text for fixed-width layouts.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*([^*\n]+?)\*\*\*").unwrap());
static BOLD_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*\n]+?)\*\*").unwrap());
static BOLD_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_\n]+?)__").unwrap());
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\s*](?:[^*\n]*[^\s*])?)\*").unwrap());
// Intraword underscores (snake_case) are not emphasis.
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^\w])_([^\s_](?:[^_\n]*[^\s_])?)_").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[([^\]\n]*)\]\([^)\n]*\)").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]{0,3}#{1,6}[ \t]+").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([ \t]*)[-*+][ \t]+").unwrap());
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([ \t]*)\d+[.)][ \t]+").unwrap());
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:```|~~~)[^\n]*(?:\n|$)").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap());

/// Flatten markdown to plain text.
///
/// Emphasis markers and link URLs are dropped, headings lose their `#`
/// markers, bullets become `•`, list numbers and code fences disappear,
/// horizontal rules are removed and runs of blank lines collapse to one.
/// Every line ending, including a lone `\r`, becomes `\n`.
///
/// The result is stable: flattening it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use modelcard_export::markup::to_plain_text;
///
/// assert_eq!(to_plain_text("- **Bold** [link](https://x.y)"), "• Bold link");
/// ```
pub fn to_plain_text(markup: &str) -> String {
    let mut current = markup.replace("\r\n", "\n").replace('\r', "\n");
    loop {
        let next = flatten_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

/// One pass of every rewrite step, in order.
fn flatten_pass(text: &str) -> String {
    let text = strip_emphasis(text);
    let text = LINK.replace_all(&text, "$1");
    let text = flatten_lines(&text);
    let text = FENCE.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = remove_rules(&text);
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn strip_emphasis(text: &str) -> String {
    let text = BOLD_ITALIC.replace_all(text, "$1");
    let text = BOLD_STAR.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORE.replace_all(&text, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    ITALIC_UNDERSCORE.replace_all(&text, "${1}${2}").into_owned()
}

/// Headings, bullets and numbered items, line by line.
fn flatten_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            // Rules like `- - -` would otherwise read as bullets.
            if is_rule(line) {
                return line.to_string();
            }
            let line = HEADING.replace(line, "");
            let line = BULLET.replace(&line, "${1}• ");
            NUMBERED.replace(&line, "$1").into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn remove_rules(text: &str) -> String {
    text.split('\n')
        .filter(|line| !is_rule(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A line made only of three or more `-`, `*` or `_` (spaces allowed).
fn is_rule(line: &str) -> bool {
    let mut marks = line.chars().filter(|c| !c.is_whitespace());
    let Some(first) = marks.next() else {
        return false;
    };
    if !matches!(first, '-' | '*' | '_') {
        return false;
    }
    let mut count = 1;
    for c in marks {
        if c != first {
            return false;
        }
        count += 1;
    }
    count >= 3
}
