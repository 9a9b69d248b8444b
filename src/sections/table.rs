//! The ordered section table.
//!
//! Markdown headings follow the Hugging Face model card template, including
//! its `[optional]` suffixes. HTML and PDF use plain headings.

use super::{AccordionGroup, Block, Body, Caption, Field, Layout, Mode, Section, SectionId};

/// Every section, in Markdown document order.
pub static SECTIONS: &[Section] = &[
    Section {
        id: SectionId::Details,
        group: AccordionGroup::Overview,
        markdown: Some((2, "Model Details")),
        html: "Model Details",
        pdf: "Model Details",
        layout: Layout::Stack,
        body: Body::Blocks(&[Block::Group {
            heading: "Model Description",
            blocks: &[
                Block::Field(Field::new(
                    "model_description",
                    Mode::Markup,
                    Caption::Bare,
                    None,
                    |r| r.model_description.as_deref(),
                )),
                Block::Field(Field::new(
                    "developers",
                    Mode::Detail,
                    Caption::Bullet("Developed by"),
                    None,
                    |r| r.developers.as_deref(),
                )),
                Block::Field(Field::new(
                    "funded_by",
                    Mode::Detail,
                    Caption::Bullet("Funded by [optional]"),
                    None,
                    |r| r.funded_by.as_deref(),
                )),
                Block::Field(Field::new(
                    "shared_by",
                    Mode::Detail,
                    Caption::Bullet("Shared by [optional]"),
                    None,
                    |r| r.shared_by.as_deref(),
                )),
                Block::Field(Field::new(
                    "model_type",
                    Mode::Detail,
                    Caption::Bullet("Model type"),
                    None,
                    |r| r.model_type.as_deref(),
                )),
                Block::Field(Field::new(
                    "language",
                    Mode::Detail,
                    Caption::Bullet("Language(s) (NLP)"),
                    None,
                    |r| r.language.as_deref(),
                )),
                Block::Field(Field::new(
                    "license",
                    Mode::Detail,
                    Caption::Bullet("License"),
                    None,
                    |r| r.license.as_deref(),
                )),
                Block::Field(Field::new(
                    "base_model",
                    Mode::Detail,
                    Caption::Bullet("Finetuned from model [optional]"),
                    None,
                    |r| r.base_model.as_deref(),
                )),
            ],
        }]),
    },
    Section {
        id: SectionId::Sources,
        group: AccordionGroup::Overview,
        markdown: Some((3, "Model Sources [optional]")),
        html: "Model Sources",
        pdf: "Model Sources",
        layout: Layout::Stack,
        body: Body::Blocks(&[
            Block::Field(Field::new(
                "repo",
                Mode::Link,
                Caption::Bullet("Repository"),
                Some("Repository"),
                |r| r.sources.as_ref()?.repo.as_deref(),
            )),
            Block::Field(Field::new(
                "paper",
                Mode::Link,
                Caption::Bullet("Paper [optional]"),
                Some("Paper"),
                |r| r.sources.as_ref()?.paper.as_deref(),
            )),
            Block::Field(Field::new(
                "demo",
                Mode::Link,
                Caption::Bullet("Demo [optional]"),
                Some("Demo"),
                |r| r.sources.as_ref()?.demo.as_deref(),
            )),
        ]),
    },
    Section {
        id: SectionId::Uses,
        group: AccordionGroup::IntendedUse,
        markdown: Some((2, "Uses")),
        html: "Uses",
        pdf: "Uses",
        layout: Layout::Stack,
        body: Body::Blocks(&[
            Block::Field(Field::new(
                "direct_use",
                Mode::Markup,
                Caption::Heading("Direct Use"),
                Some("Direct Use"),
                |r| r.uses.as_ref()?.direct_use.as_deref(),
            )),
            Block::Field(Field::new(
                "downstream_use",
                Mode::Markup,
                Caption::Heading("Downstream Use [optional]"),
                Some("Downstream Use"),
                |r| r.uses.as_ref()?.downstream_use.as_deref(),
            )),
            Block::Field(Field::new(
                "out_of_scope_use",
                Mode::Markup,
                Caption::Heading("Out-of-Scope Use"),
                Some("Out-of-Scope Use"),
                |r| r.uses.as_ref()?.out_of_scope_use.as_deref(),
            )),
        ]),
    },
    Section {
        id: SectionId::BiasRisks,
        group: AccordionGroup::IntendedUse,
        markdown: Some((2, "Bias, Risks, and Limitations")),
        html: "Bias, Risks, and Limitations",
        pdf: "Bias, Risks, and Limitations",
        layout: Layout::Stack,
        body: Body::Blocks(&[
            Block::Field(Field::new(
                "bias_risks_limitations",
                Mode::Markup,
                Caption::Bare,
                None,
                |r| r.bias_risks.as_ref()?.bias_risks_limitations.as_deref(),
            )),
            Block::Field(Field::new(
                "bias_recommendations",
                Mode::Markup,
                Caption::Heading("Recommendations"),
                Some("Recommendations"),
                |r| r.bias_risks.as_ref()?.bias_recommendations.as_deref(),
            )),
        ]),
    },
    Section {
        id: SectionId::GetStarted,
        group: AccordionGroup::Overview,
        markdown: Some((2, "How to Get Started with the Model")),
        html: "How to Get Started",
        pdf: "How to Get Started",
        layout: Layout::Stack,
        body: Body::Blocks(&[Block::Field(Field::new(
            "get_started_code",
            Mode::Literal("python"),
            Caption::Bare,
            None,
            |r| r.get_started_code.as_deref(),
        ))]),
    },
    Section {
        id: SectionId::TrainingDetails,
        group: AccordionGroup::TrainingEvaluation,
        markdown: Some((2, "Training Details")),
        html: "Training Details",
        pdf: "Training Details",
        layout: Layout::Stack,
        body: Body::Blocks(&[
            Block::Field(Field::new(
                "training_data",
                Mode::Markup,
                Caption::Heading("Training Data"),
                Some("Training Data"),
                |r| r.training_details.as_ref()?.training_data.as_deref(),
            )),
            Block::Group {
                heading: "Training Procedure",
                blocks: &[
                    Block::Field(Field::new(
                        "preprocessing",
                        Mode::Markup,
                        Caption::Heading("Preprocessing [optional]"),
                        Some("Preprocessing"),
                        |r| r.training_details.as_ref()?.preprocessing.as_deref(),
                    )),
                    Block::Group {
                        heading: "Training Hyperparameters",
                        blocks: &[Block::Field(Field::new(
                            "training_regime",
                            Mode::Detail,
                            Caption::Bullet("Training regime"),
                            None,
                            |r| r.training_details.as_ref()?.training_regime.as_deref(),
                        ))],
                    },
                    Block::Field(Field::new(
                        "speeds_sizes_times",
                        Mode::Markup,
                        Caption::Heading("Speeds, Sizes, Times [optional]"),
                        Some("Speeds, Sizes, Times"),
                        |r| r.training_details.as_ref()?.speeds_sizes_times.as_deref(),
                    )),
                ],
            },
        ]),
    },
    Section {
        id: SectionId::Evaluation,
        group: AccordionGroup::TrainingEvaluation,
        markdown: Some((2, "Evaluation")),
        html: "Evaluation",
        pdf: "Evaluation",
        layout: Layout::Stack,
        body: Body::Blocks(&[
            Block::Group {
                heading: "Testing Data, Factors & Metrics",
                blocks: &[
                    Block::Field(Field::new(
                        "testing_data",
                        Mode::Markup,
                        Caption::Heading("Testing Data"),
                        Some("Testing Data"),
                        |r| r.evaluation.as_ref()?.testing_data.as_deref(),
                    )),
                    Block::Field(Field::new(
                        "testing_factors",
                        Mode::Markup,
                        Caption::Heading("Factors"),
                        Some("Factors"),
                        |r| r.evaluation.as_ref()?.testing_factors.as_deref(),
                    )),
                    Block::Field(Field::new(
                        "testing_metrics",
                        Mode::Markup,
                        Caption::Heading("Metrics"),
                        Some("Metrics"),
                        |r| r.evaluation.as_ref()?.testing_metrics.as_deref(),
                    )),
                ],
            },
            Block::Group {
                heading: "Results",
                blocks: &[
                    Block::Field(Field::new(
                        "results",
                        Mode::Markup,
                        Caption::Bare,
                        Some("Results"),
                        |r| r.evaluation.as_ref()?.results.as_deref(),
                    )),
                    Block::Field(Field::new(
                        "results_summary",
                        Mode::Markup,
                        Caption::Heading("Summary"),
                        Some("Summary"),
                        |r| r.evaluation.as_ref()?.results_summary.as_deref(),
                    )),
                ],
            },
        ]),
    },
    Section {
        id: SectionId::EnvironmentalImpact,
        group: AccordionGroup::ImpactSpecs,
        markdown: Some((2, "Environmental Impact")),
        html: "Environmental Impact",
        pdf: "Environmental Impact",
        layout: Layout::Grid,
        body: Body::Blocks(&[
            Block::Field(Field::new(
                "hardware_type",
                Mode::Detail,
                Caption::Bullet("Hardware Type"),
                None,
                |r| r.environmental_impact.as_ref()?.hardware_type.as_deref(),
            )),
            Block::Field(Field::new(
                "hours_used",
                Mode::Detail,
                Caption::Bullet("Hours used"),
                None,
                |r| r.environmental_impact.as_ref()?.hours_used.as_deref(),
            )),
            Block::Field(Field::new(
                "cloud_provider",
                Mode::Detail,
                Caption::Bullet("Cloud Provider"),
                None,
                |r| r.environmental_impact.as_ref()?.cloud_provider.as_deref(),
            )),
            Block::Field(Field::new(
                "cloud_region",
                Mode::Detail,
                Caption::Bullet("Compute Region"),
                None,
                |r| r.environmental_impact.as_ref()?.cloud_region.as_deref(),
            )),
            Block::Field(Field::new(
                "co2_emitted",
                Mode::Detail,
                Caption::Bullet("Carbon Emitted"),
                None,
                |r| r.environmental_impact.as_ref()?.co2_emitted.as_deref(),
            )),
        ]),
    },
    Section {
        id: SectionId::TechnicalSpecs,
        group: AccordionGroup::ImpactSpecs,
        markdown: Some((2, "Technical Specifications [optional]")),
        html: "Technical Specifications",
        pdf: "Technical Specifications",
        layout: Layout::Stack,
        body: Body::Blocks(&[
            Block::Field(Field::new(
                "model_specs",
                Mode::Markup,
                Caption::Heading("Model Architecture and Objective"),
                Some("Model Architecture and Objective"),
                |r| r.technical_specs.as_ref()?.model_specs.as_deref(),
            )),
            Block::Group {
                heading: "Compute Infrastructure",
                blocks: &[
                    Block::Field(Field::new(
                        "compute_infrastructure",
                        Mode::Markup,
                        Caption::Bare,
                        Some("Compute Infrastructure"),
                        |r| r.technical_specs.as_ref()?.compute_infrastructure.as_deref(),
                    )),
                    Block::Field(Field::new(
                        "hardware_requirements",
                        Mode::Markup,
                        Caption::Heading("Hardware"),
                        Some("Hardware"),
                        |r| r.technical_specs.as_ref()?.hardware_requirements.as_deref(),
                    )),
                    Block::Field(Field::new(
                        "software",
                        Mode::Markup,
                        Caption::Heading("Software"),
                        Some("Software"),
                        |r| r.technical_specs.as_ref()?.software.as_deref(),
                    )),
                ],
            },
        ]),
    },
    Section {
        id: SectionId::Citation,
        group: AccordionGroup::CitationInfo,
        markdown: Some((2, "Citation [optional]")),
        html: "Citation",
        pdf: "Citation",
        layout: Layout::Stack,
        body: Body::Blocks(&[
            Block::Field(Field::new(
                "citation_bibtex",
                Mode::Literal("bibtex"),
                Caption::Bold("BibTeX:"),
                Some("BibTeX"),
                |r| r.citation.as_ref()?.citation_bibtex.as_deref(),
            )),
            Block::Field(Field::new(
                "citation_apa",
                Mode::Markup,
                Caption::Bold("APA:"),
                Some("APA"),
                |r| r.citation.as_ref()?.citation_apa.as_deref(),
            )),
        ]),
    },
    Section {
        id: SectionId::AdditionalInfo,
        group: AccordionGroup::CitationInfo,
        markdown: None,
        html: "Additional Information",
        pdf: "Additional Information",
        layout: Layout::Stack,
        body: Body::Blocks(&[
            Block::Field(Field::new(
                "model_examination",
                Mode::Markup,
                Caption::Heading("Model Examination [optional]"),
                Some("Model Examination"),
                |r| r.additional_info.as_ref()?.model_examination.as_deref(),
            )),
            Block::Field(Field::new(
                "glossary",
                Mode::Markup,
                Caption::Heading("Glossary [optional]"),
                Some("Glossary"),
                |r| r.additional_info.as_ref()?.glossary.as_deref(),
            )),
            Block::Field(Field::new(
                "more_information",
                Mode::Markup,
                Caption::Heading("More Information [optional]"),
                Some("More Information"),
                |r| r.additional_info.as_ref()?.more_information.as_deref(),
            )),
            Block::Field(Field::new(
                "model_card_authors",
                Mode::Markup,
                Caption::Heading("Model Card Authors [optional]"),
                Some("Model Card Authors"),
                |r| r.additional_info.as_ref()?.model_card_authors.as_deref(),
            )),
            Block::Field(Field::new(
                "model_card_contact",
                Mode::Markup,
                Caption::Heading("Model Card Contact"),
                Some("Model Card Contact"),
                |r| r.additional_info.as_ref()?.model_card_contact.as_deref(),
            )),
        ]),
    },
    Section {
        id: SectionId::Metadata,
        group: AccordionGroup::Overview,
        markdown: None,
        html: "Hub Metadata",
        pdf: "HuggingFace Metadata",
        layout: Layout::Stack,
        body: Body::Metadata,
    },
    Section {
        id: SectionId::CardData,
        group: AccordionGroup::CitationInfo,
        markdown: None,
        html: "Additional Metadata",
        pdf: "Additional Metadata",
        layout: Layout::Stack,
        body: Body::CardData,
    },
];

/// Section order of the PDF document. Legacy card data is not printed.
pub const PDF_ORDER: [SectionId; 12] = [
    SectionId::Details,
    SectionId::Sources,
    SectionId::GetStarted,
    SectionId::Uses,
    SectionId::BiasRisks,
    SectionId::TrainingDetails,
    SectionId::Evaluation,
    SectionId::EnvironmentalImpact,
    SectionId::TechnicalSpecs,
    SectionId::Citation,
    SectionId::AdditionalInfo,
    SectionId::Metadata,
];
