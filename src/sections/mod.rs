//! Section descriptor table shared by the document renderers.
//!
//! The Markdown, HTML and PDF renderers all walk the same ordered table of
//! [`Section`]s. Each section declares its heading in every format's
//! vocabulary, the accordion group it belongs to in HTML, and a tree of
//! [`Block`]s naming the record fields it shows and how each one renders.
//! A section (or group) is emitted only when at least one of its fields has
//! content, so the three formats cannot drift apart on what they omit.

mod pairs;
mod table;

pub use pairs::{Pair, PairValue, prettify_label, render_grid, render_html, render_plain};
pub use table::{PDF_ORDER, SECTIONS};

use crate::model::{HasContent, ModelCardRecord};

/// Identifies one logical section of a model card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Details,
    Sources,
    Uses,
    BiasRisks,
    GetStarted,
    TrainingDetails,
    Evaluation,
    EnvironmentalImpact,
    TechnicalSpecs,
    Citation,
    AdditionalInfo,
    Metadata,
    CardData,
}

impl SectionId {
    /// Stable identifier used for HTML ids.
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Details => "details",
            SectionId::Sources => "sources",
            SectionId::Uses => "uses",
            SectionId::BiasRisks => "bias-risks",
            SectionId::GetStarted => "get-started",
            SectionId::TrainingDetails => "training-details",
            SectionId::Evaluation => "evaluation",
            SectionId::EnvironmentalImpact => "environmental-impact",
            SectionId::TechnicalSpecs => "technical-specs",
            SectionId::Citation => "citation",
            SectionId::AdditionalInfo => "additional-info",
            SectionId::Metadata => "metadata",
            SectionId::CardData => "card-data",
        }
    }
}

/// The collapsible groups of the HTML document, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccordionGroup {
    Overview,
    IntendedUse,
    TrainingEvaluation,
    ImpactSpecs,
    CitationInfo,
}

impl AccordionGroup {
    pub const ALL: [AccordionGroup; 5] = [
        AccordionGroup::Overview,
        AccordionGroup::IntendedUse,
        AccordionGroup::TrainingEvaluation,
        AccordionGroup::ImpactSpecs,
        AccordionGroup::CitationInfo,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AccordionGroup::Overview => "Overview & Setup",
            AccordionGroup::IntendedUse => "Intended Use & Safety",
            AccordionGroup::TrainingEvaluation => "Training & Evaluation",
            AccordionGroup::ImpactSpecs => "Impact & Specifications",
            AccordionGroup::CitationInfo => "Citation & Additional Information",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            AccordionGroup::Overview => "overview",
            AccordionGroup::IntendedUse => "intended-use",
            AccordionGroup::TrainingEvaluation => "training-evaluation",
            AccordionGroup::ImpactSpecs => "impact-specs",
            AccordionGroup::CitationInfo => "citation-info",
        }
    }

    /// Sections shown in this group, in table order.
    pub fn sections(self) -> impl Iterator<Item = &'static Section> {
        SECTIONS.iter().filter(move |section| section.group == self)
    }
}

/// How a field's value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Free text in markdown: copied, rendered to HTML, or flattened.
    Markup,
    /// Verbatim text shown as a code block in the given language.
    Literal(&'static str),
    /// Short scalar shown as a label/value pair.
    Detail,
    /// Like `Detail`, but the value is a URL.
    Link,
}

impl Mode {
    /// Whether the field renders through the key/value renderer.
    pub fn is_pair(self) -> bool {
        matches!(self, Mode::Detail | Mode::Link)
    }
}

/// How a field is introduced in Markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    /// The value follows the enclosing heading directly.
    Bare,
    /// A heading one level below the enclosing one.
    Heading(&'static str),
    /// A bold label paragraph, e.g. `**BibTeX:**`.
    Bold(&'static str),
    /// A list item, e.g. `- **Developed by:** value`.
    Bullet(&'static str),
}

type Getter = for<'r> fn(&'r ModelCardRecord) -> Option<&'r str>;

/// One record field and how to present it.
#[derive(Clone, Copy)]
pub struct Field {
    /// Record key, used for labels and anchors.
    pub key: &'static str,
    pub mode: Mode,
    pub markdown: Caption,
    /// Sub-heading (markup) or label (pairs) in HTML and PDF. `None` means
    /// no sub-heading, or the prettified key for pairs.
    pub title: Option<&'static str>,
    get: Getter,
}

impl Field {
    pub const fn new(
        key: &'static str,
        mode: Mode,
        markdown: Caption,
        title: Option<&'static str>,
        get: Getter,
    ) -> Self {
        Self {
            key,
            mode,
            markdown,
            title,
            get,
        }
    }

    /// The field's value, if it has content.
    pub fn value<'r>(&self, record: &'r ModelCardRecord) -> Option<&'r str> {
        (self.get)(record).filter(|value| value.has_content())
    }

    pub fn has_content(&self, record: &ModelCardRecord) -> bool {
        self.value(record).is_some()
    }

    /// Label for HTML and PDF output.
    pub fn label(&self) -> String {
        match self.title {
            Some(title) => title.to_string(),
            None => prettify_label(self.key),
        }
    }

    /// This field as a key/value pair, if it has content.
    pub fn pair<'r>(&self, record: &'r ModelCardRecord) -> Option<Pair<'r>> {
        let value = self.value(record)?;
        let value = match self.mode {
            Mode::Link => PairValue::Url(value),
            _ => PairValue::Text(value),
        };
        Some(Pair::titled(self.label(), value))
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("mode", &self.mode)
            .field("markdown", &self.markdown)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// A node in a section's field tree.
#[derive(Debug, Clone, Copy)]
pub enum Block {
    Field(Field),
    /// Fields sharing a Markdown sub-heading. HTML and PDF flatten groups.
    Group {
        heading: &'static str,
        blocks: &'static [Block],
    },
}

impl Block {
    pub fn has_content(&self, record: &ModelCardRecord) -> bool {
        match self {
            Block::Field(field) => field.has_content(record),
            Block::Group { blocks, .. } => blocks.iter().any(|b| b.has_content(record)),
        }
    }

    fn collect_fields(&'static self, out: &mut Vec<&'static Field>) {
        match self {
            Block::Field(field) => out.push(field),
            Block::Group { blocks, .. } => {
                for block in blocks.iter() {
                    block.collect_fields(out);
                }
            }
        }
    }
}

/// What a section shows.
#[derive(Debug, Clone, Copy)]
pub enum Body {
    Blocks(&'static [Block]),
    /// The record's hub metadata.
    Metadata,
    /// The legacy free-form `card_data` mapping.
    CardData,
}

/// How pair fields are laid out in HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Stack,
    Grid,
}

/// One entry of the section table.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub group: AccordionGroup,
    /// Markdown heading level and text. `None` puts the fields' own headings
    /// at level 2 with no umbrella heading.
    pub markdown: Option<(usize, &'static str)>,
    pub html: &'static str,
    pub pdf: &'static str,
    pub layout: Layout,
    pub body: Body,
}

impl Section {
    /// Whether any field of this section has content.
    ///
    /// Presence is decided per field, not per sub-object: a section object
    /// holding only empty strings is treated as absent.
    pub fn has_content(&self, record: &ModelCardRecord) -> bool {
        match self.body {
            Body::Blocks(blocks) => blocks.iter().any(|b| b.has_content(record)),
            Body::Metadata => metadata_pairs(record).iter().any(|p| p.value.has_content()),
            Body::CardData => card_data_pairs(record).iter().any(|p| p.value.has_content()),
        }
    }

    /// All fields of this section in table order, groups flattened.
    pub fn fields(&self) -> Vec<&'static Field> {
        let mut out = Vec::new();
        if let Body::Blocks(blocks) = self.body {
            for block in blocks {
                block.collect_fields(&mut out);
            }
        }
        out
    }

    /// Markdown level for this section's direct children.
    pub fn child_level(&self) -> usize {
        self.markdown.map_or(2, |(level, _)| level + 1)
    }
}

/// Look up a section by id.
pub fn section(id: SectionId) -> &'static Section {
    SECTIONS
        .iter()
        .find(|section| section.id == id)
        .unwrap_or_else(|| unreachable!("section table covers every SectionId"))
}

/// Hub metadata as key/value pairs, in declaration order.
pub fn metadata_pairs(record: &ModelCardRecord) -> Vec<Pair<'_>> {
    let Some(metadata) = record.metadata.as_ref() else {
        return Vec::new();
    };

    let mut pairs = Vec::new();
    let scalars = [
        ("license", &metadata.license),
        ("language", &metadata.language),
        ("base_model", &metadata.base_model),
        ("library_name", &metadata.library_name),
        ("pipeline_tag", &metadata.pipeline_tag),
    ];
    for (key, value) in scalars {
        if let Some(value) = value {
            pairs.push(Pair::keyed(key, PairValue::Text(value)));
        }
    }
    let lists = [
        ("tags", &metadata.tags),
        ("datasets", &metadata.datasets),
        ("metrics", &metadata.metrics),
    ];
    for (key, value) in lists {
        if let Some(value) = value {
            pairs.push(Pair::keyed(key, PairValue::List(value)));
        }
    }
    if let Some(inference) = metadata.inference {
        pairs.push(Pair::keyed("inference", PairValue::Flag(inference)));
    }
    pairs
}

/// Legacy card data as key/value pairs, in mapping order.
pub fn card_data_pairs(record: &ModelCardRecord) -> Vec<Pair<'_>> {
    record
        .card_data
        .iter()
        .flatten()
        .map(|(key, value)| Pair::keyed(key, PairValue::Json(value)))
        .collect()
}
