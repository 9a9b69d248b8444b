//! Page layout: text flow, word wrapping and page breaks.
//!
//! Layout produces a display list per page ([`TextRun`]s at absolute
//! positions). A [`DocumentCursor`] tracks the vertical position on the
//! current page; it lives inside one [`PageLayout`] and is never shared.

use tracing::trace;

/// Left, right and top margin, in points.
pub const MARGIN: f64 = 56.0;
/// Bottom margin; the page footer sits inside it.
pub const BOTTOM_MARGIN: f64 = 64.0;

const LINE_SPACING: f64 = 1.4;
const FOOTER_SIZE: f64 = 8.0;

/// The four standard fonts the document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Italic,
    Mono,
}

impl Font {
    pub const ALL: [Font; 4] = [Font::Regular, Font::Bold, Font::Italic, Font::Mono];

    /// Resource name in page dictionaries.
    pub fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Italic => "F3",
            Font::Mono => "F4",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Italic => "Helvetica-Oblique",
            Font::Mono => "Courier",
        }
    }

    /// Approximate advance width of `c` in ems.
    fn advance(self, c: char) -> f64 {
        if self == Font::Mono {
            return 0.6;
        }
        let width = match c {
            'i' | 'j' | 'l' | '\'' | '|' | '.' | ',' | ':' | ';' | '!' => 0.25,
            'f' | 't' | 'r' | 'I' | ' ' | '(' | ')' | '[' | ']' | '-' => 0.33,
            'm' | 'w' | 'M' | 'W' | '@' => 0.83,
            'A'..='Z' => 0.68,
            '0'..='9' => 0.556,
            _ => 0.52,
        };
        if self == Font::Bold { width * 1.06 } else { width }
    }

    /// Estimated width of `text` at `size` points.
    pub fn text_width(self, text: &str, size: f64) -> f64 {
        text.chars().map(|c| self.advance(c)).sum::<f64>() * size
    }
}

/// One line of text placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub font: Font,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub runs: Vec<TextRun>,
}

/// Vertical position on the current page, measured from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentCursor {
    y: f64,
    top: f64,
    bottom: f64,
}

impl DocumentCursor {
    pub fn new(page_height: f64) -> Self {
        let top = page_height - MARGIN;
        Self {
            y: top,
            top,
            bottom: BOTTOM_MARGIN,
        }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Space left above the bottom margin.
    pub fn remaining(&self) -> f64 {
        self.y - self.bottom
    }

    pub fn at_top(&self) -> bool {
        self.y >= self.top
    }

    pub fn advance(&mut self, dy: f64) {
        self.y = (self.y - dy).max(self.bottom);
    }

    pub fn reset(&mut self) {
        self.y = self.top;
    }
}

/// Lays text out onto pages of a fixed size.
#[derive(Debug)]
pub struct PageLayout {
    width: f64,
    cursor: DocumentCursor,
    pages: Vec<Page>,
    current: Page,
}

impl PageLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            cursor: DocumentCursor::new(height),
            pages: Vec::new(),
            current: Page::default(),
        }
    }

    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * MARGIN
    }

    #[cfg(test)]
    pub fn cursor(&self) -> DocumentCursor {
        self.cursor
    }

    /// Break to a new page unless `height` still fits on this one.
    pub fn ensure_space(&mut self, height: f64) {
        if self.cursor.remaining() < height && !self.cursor.at_top() {
            trace!(
                page = self.pages.len() + 1,
                remaining = self.cursor.remaining(),
                needed = height,
                "page break"
            );
            self.pages.push(std::mem::take(&mut self.current));
            self.cursor.reset();
        }
    }

    /// Vertical whitespace. Dropped at the top of a page.
    pub fn gap(&mut self, height: f64) {
        if !self.cursor.at_top() {
            self.cursor.advance(height);
        }
    }

    /// One line of text, placed without wrapping.
    pub fn line(&mut self, text: &str, font: Font, size: f64, indent: f64) {
        let height = size * LINE_SPACING;
        self.ensure_space(height);
        self.current.runs.push(TextRun {
            font,
            size,
            x: MARGIN + indent,
            y: self.cursor.y() - size,
            text: text.to_string(),
        });
        self.cursor.advance(height);
    }

    /// A heading kept on the same page as the line that follows it.
    pub fn heading(&mut self, text: &str, size: f64, space_before: f64) {
        self.gap(space_before);
        self.ensure_space(size * LINE_SPACING + 10.0 * LINE_SPACING);
        for line in wrap_text(text, Font::Bold, size, self.content_width()) {
            self.line(&line, Font::Bold, size, 0.0);
        }
        self.gap(size * 0.3);
    }

    /// Word-wrapped text. Line breaks in `text` are kept; blank lines become
    /// half-line gaps.
    pub fn paragraph(&mut self, text: &str, font: Font, size: f64) {
        let width = self.content_width();
        for source in text.lines() {
            if source.trim().is_empty() {
                self.gap(size * LINE_SPACING * 0.5);
                continue;
            }
            for line in wrap_text(source, font, size, width) {
                self.line(&line, font, size, 0.0);
            }
        }
        self.gap(size * 0.6);
    }

    /// Monospaced text with its spacing kept. Over-long lines are split.
    pub fn literal(&mut self, text: &str, size: f64) {
        let max_chars = ((self.content_width() - 12.0) / (Font::Mono.advance(' ') * size))
            .floor()
            .max(1.0) as usize;
        for source in text.trim_matches('\n').lines() {
            let source = source.replace('\t', "    ");
            let chars: Vec<char> = source.trim_end().chars().collect();
            if chars.is_empty() {
                self.line("", Font::Mono, size, 12.0);
                continue;
            }
            for chunk in chars.chunks(max_chars) {
                let chunk: String = chunk.iter().collect();
                self.line(&chunk, Font::Mono, size, 12.0);
            }
        }
        self.gap(size * 0.8);
    }

    /// Close the last page and stamp `Page N of M` footers.
    pub fn finish(mut self) -> Vec<Page> {
        if !self.current.runs.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }

        let total = self.pages.len();
        for (index, page) in self.pages.iter_mut().enumerate() {
            let text = format!("Page {} of {}", index + 1, total);
            let x = (self.width - Font::Regular.text_width(&text, FOOTER_SIZE)) / 2.0;
            page.runs.push(TextRun {
                font: Font::Regular,
                size: FOOTER_SIZE,
                x,
                y: BOTTOM_MARGIN / 2.0,
                text,
            });
        }
        self.pages
    }
}

/// Greedy word wrap to `max_width`. Words wider than a line are split.
pub fn wrap_text(text: &str, font: Font, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if font.text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if font.text_width(word, size) <= max_width {
            current = word.to_string();
            continue;
        }
        for c in word.chars() {
            current.push(c);
            if font.text_width(&current, size) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(20);
        let lines = wrap_text(&text, Font::Regular, 10.0, 200.0);
        assert!(lines.len() > 5);
        for line in &lines {
            assert!(Font::Regular.text_width(line, 10.0) <= 200.0, "{line}");
        }
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, Font::Regular, 10.0, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("   ", Font::Regular, 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_cursor_breaks_page() {
        let mut layout = PageLayout::new(200.0, 200.0);
        for i in 0..20 {
            layout.line(&format!("line {i}"), Font::Regular, 10.0, 0.0);
        }
        let pages = layout.finish();
        assert!(pages.len() > 1);
        for page in &pages {
            for run in &page.runs {
                assert!(run.y >= BOTTOM_MARGIN / 2.0);
                assert!(run.y <= 200.0 - MARGIN);
            }
        }
    }

    #[test]
    fn test_footer_on_every_page() {
        let mut layout = PageLayout::new(200.0, 200.0);
        for _ in 0..20 {
            layout.line("text", Font::Regular, 10.0, 0.0);
        }
        let pages = layout.finish();
        let total = pages.len();
        for (i, page) in pages.iter().enumerate() {
            let footer = page.runs.last().unwrap();
            assert_eq!(footer.text, format!("Page {} of {}", i + 1, total));
        }
    }

    #[test]
    fn test_empty_layout_has_one_page() {
        let pages = PageLayout::new(612.0, 792.0).finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].runs.len(), 1);
    }

    #[test]
    fn test_gap_dropped_at_page_top() {
        let mut layout = PageLayout::new(612.0, 792.0);
        layout.gap(100.0);
        assert!(layout.cursor().at_top());
    }

    #[test]
    fn test_literal_keeps_indentation() {
        let mut layout = PageLayout::new(612.0, 792.0);
        layout.literal("def f():\n    return 1\n", 9.0);
        let pages = layout.finish();
        let texts: Vec<_> = pages[0].runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts[..2], ["def f():", "    return 1"]);
        assert_eq!(pages[0].runs[0].font, Font::Mono);
    }
}
