//! Markdown Renderer - the Hub `README.md`.
//!
//! Output is the YAML front matter, a title line, the summary, then every
//! section of the shared table that has content, using the Hub model card
//! template's heading text. Free-text fields are copied as written since the
//! destination is markdown too.

use crate::error::Result;
use crate::frontmatter::Frontmatter;
use crate::model::{HasContent, ModelCardRecord};
use crate::sections::{Block, Body, Caption, Field, Mode, SECTIONS, Section};

use super::{ExportOptions, Format, RenderedDocument, Renderer};

/// Renderer for the Hub-style `README.md`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MarkdownRenderer {
    fn format(&self) -> Format {
        Format::Markdown
    }

    fn generate(&self, record: &ModelCardRecord, _options: &ExportOptions) -> Result<RenderedDocument> {
        let text = render_markdown(record);
        Ok(RenderedDocument::new(text.into_bytes(), Format::Markdown.mime_type()))
    }
}

/// Render a record to markdown text.
pub fn render_markdown(record: &ModelCardRecord) -> String {
    let mut out = MarkdownWriter::default();

    out.heading(1, &format!("Model Card for {}", record.title()));
    if let Some(summary) = record.model_summary.as_deref().filter(|s| s.has_content()) {
        out.block(summary.trim());
    }

    for section in SECTIONS {
        write_section(&mut out, section, record);
    }

    let mut doc = Frontmatter::from_record(record).to_yaml_block();
    doc.push_str(&out.finish());
    doc
}

fn write_section(out: &mut MarkdownWriter, section: &Section, record: &ModelCardRecord) {
    // Hub metadata and card data live in the front matter.
    let Body::Blocks(blocks) = section.body else {
        return;
    };
    if !section.has_content(record) {
        return;
    }

    if let Some((level, heading)) = section.markdown {
        out.heading(level, heading);
    }
    let level = section.child_level();
    for block in blocks {
        write_block(out, block, level, record);
    }
}

fn write_block(out: &mut MarkdownWriter, block: &Block, level: usize, record: &ModelCardRecord) {
    match block {
        Block::Field(field) => write_field(out, field, level, record),
        Block::Group { heading, blocks } => {
            if !block.has_content(record) {
                return;
            }
            out.heading(level, heading);
            for child in blocks.iter() {
                write_block(out, child, level + 1, record);
            }
        }
    }
}

fn write_field(out: &mut MarkdownWriter, field: &Field, level: usize, record: &ModelCardRecord) {
    let Some(value) = field.value(record) else {
        return;
    };

    match field.markdown {
        Caption::Bullet(label) => {
            out.bullet(label, value.trim());
            return;
        }
        Caption::Heading(heading) => out.heading(level, heading),
        Caption::Bold(label) => out.block(&format!("**{label}**")),
        Caption::Bare => {}
    }

    match field.mode {
        Mode::Literal(lang) => out.block(&code_block(value, lang)),
        _ => out.block(value.trim()),
    }
}

/// A fenced code block long enough to contain any backtick run in `code`.
fn code_block(code: &str, lang: &str) -> String {
    let code = code.trim_matches('\n');
    let fence = "`".repeat(fence_length(code));
    format!("{fence}{lang}\n{code}\n{fence}")
}

/// Longest backtick run plus one, and at least three.
fn fence_length(content: &str) -> usize {
    let mut max_run = 0;
    let mut current = 0;
    for c in content.chars() {
        if c == '`' {
            current += 1;
            max_run = max_run.max(current);
        } else {
            current = 0;
        }
    }
    max_run.max(2) + 1
}

/// Accumulates blocks separated by blank lines. Consecutive bullets share one
/// list block.
#[derive(Debug, Default)]
struct MarkdownWriter {
    blocks: Vec<String>,
    in_list: bool,
}

impl MarkdownWriter {
    fn block(&mut self, text: &str) {
        self.blocks.push(text.to_string());
        self.in_list = false;
    }

    fn heading(&mut self, level: usize, text: &str) {
        let marks = "#".repeat(level.clamp(1, 6));
        self.block(&format!("{marks} {text}"));
    }

    fn bullet(&mut self, label: &str, value: &str) {
        // Continuation lines stay inside the list item.
        let value = value.replace('\n', "\n  ");
        let item = format!("- **{label}:** {value}");
        match self.blocks.last_mut() {
            Some(list) if self.in_list => {
                list.push('\n');
                list.push_str(&item);
            }
            _ => {
                self.blocks.push(item);
                self.in_list = true;
            }
        }
    }

    fn finish(self) -> String {
        let mut text = self.blocks.join("\n\n");
        text.push('\n');
        text
    }
}
