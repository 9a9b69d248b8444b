//! Model card record.
//!
//! This module contains:
//! - [`ModelCardRecord`], the single input handed to every renderer
//! - One struct per logical section (uses, evaluation, citation, ...)
//! - Hub-style [`HubMetadata`] and the legacy free-form `card_data` mapping
//! - The [`HasContent`] filter deciding which values are worth rendering
//!
//! Every field except `model_id` is optional. Absent sections deserialize to
//! `None` and are skipped on serialization. Unknown keys, at the top level and
//! inside every section object, land in that level's `extra` map, so a record
//! survives a JSON round trip unchanged.

mod content;

pub use content::{HasContent, has_content};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured documentation for one machine-learning model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funded_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Sources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<Uses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_risks: Option<BiasRisks>,
    /// Verbatim code, never treated as markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_started_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_details: Option<TrainingDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_impact: Option<EnvironmentalImpact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_specs: Option<TechnicalSpecs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<Citation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HubMetadata>,
    /// Legacy free-form metadata. Keys collide with `metadata` only in the
    /// front matter, where `metadata` wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_data: Option<Map<String, Value>>,

    /// Top-level keys this crate does not know about, kept for the JSON dump.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Uses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_of_scope_use: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasRisks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_risks_limitations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias_recommendations: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preprocessing: Option<String>,
    /// Short scalar such as `fp16 mixed precision`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_regime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speeds_sizes_times: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing_factors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing_metrics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_summary: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_emitted: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_specs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_infrastructure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// BibTeX source, rendered as a literal block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_bibtex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_apa: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_examination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_card_authors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_card_contact: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hub-style metadata (the YAML header of a hosted model card).
///
/// Independent of the record's top-level `license` and `language`, which
/// describe the model rather than the hosting entry. Keys outside the known
/// set stay in `extra` and follow the known keys in the front matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelCardRecord {
    /// Create a record holding only the required identifier.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: Some(model_id.into()),
            ..Self::default()
        }
    }

    /// Parse a record from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Set the one-paragraph summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.model_summary = Some(summary.into());
        self
    }

    /// Set the developers line.
    pub fn with_developers(mut self, developers: impl Into<String>) -> Self {
        self.developers = Some(developers.into());
        self
    }

    /// Set the intended-use section.
    pub fn with_uses(mut self, uses: Uses) -> Self {
        self.uses = Some(uses);
        self
    }

    /// Set the hub metadata.
    pub fn with_metadata(mut self, metadata: HubMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// The model identifier, trimmed, if it has content.
    pub fn model_id(&self) -> Option<&str> {
        self.model_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// The identifier as written, or an empty string when absent.
    pub fn title(&self) -> &str {
        self.model_id().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_only_has_id() {
        let record = ModelCardRecord::new("demo");
        assert_eq!(record.model_id(), Some("demo"));
        assert!(record.uses.is_none());
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_model_id_blank_is_none() {
        let record = ModelCardRecord::new("   ");
        assert_eq!(record.model_id(), None);
        assert_eq!(ModelCardRecord::default().model_id(), None);
    }

    #[test]
    fn test_parse_nested_sections() {
        let record = ModelCardRecord::from_json(
            r#"{
                "model_id": "demo",
                "developers": "A. Lovelace",
                "uses": {"direct_use": "**Use** it"},
                "metadata": {"license": "mit", "tags": ["a", "b"], "inference": false}
            }"#,
        )
        .unwrap();

        assert_eq!(record.developers.as_deref(), Some("A. Lovelace"));
        assert_eq!(
            record.uses.as_ref().and_then(|u| u.direct_use.as_deref()),
            Some("**Use** it")
        );
        let metadata = record.metadata.unwrap();
        assert_eq!(metadata.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(metadata.inference, Some(false));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let record =
            ModelCardRecord::from_json(r#"{"model_id": "x", "model_summary": null, "uses": null}"#)
                .unwrap();
        assert!(record.model_summary.is_none());
        assert!(record.uses.is_none());
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let json = r#"{"model_id":"x","form_version":3,"uses":{}}"#;
        let record = ModelCardRecord::from_json(json).unwrap();
        assert_eq!(record.extra.get("form_version"), Some(&Value::from(3)));
        assert_eq!(record.uses, Some(Uses::default()));

        let again = serde_json::to_string(&record).unwrap();
        assert_eq!(ModelCardRecord::from_json(&again).unwrap(), record);
    }

    #[test]
    fn test_unknown_nested_keys_survive_round_trip() {
        let json = r#"{
            "model_id": "x",
            "uses": {"direct_use": "a", "intended_users": "clinicians"},
            "citation": {"citation_apa": "Doe", "doi": "10.1/x"},
            "metadata": {"license": "mit", "model_name": "X", "co2_eq_emissions": {"emissions": 12}}
        }"#;
        let record = ModelCardRecord::from_json(json).unwrap();
        let uses = record.uses.as_ref().unwrap();
        assert_eq!(uses.direct_use.as_deref(), Some("a"));
        assert_eq!(uses.extra.get("intended_users"), Some(&Value::from("clinicians")));
        let metadata = record.metadata.as_ref().unwrap();
        assert_eq!(metadata.license.as_deref(), Some("mit"));
        assert_eq!(metadata.extra.get("model_name"), Some(&Value::from("X")));
        assert!(record.extra.is_empty());

        let again = serde_json::to_value(&record).unwrap();
        assert_eq!(again["uses"]["intended_users"], "clinicians");
        assert_eq!(again["citation"]["doi"], "10.1/x");
        assert_eq!(again["metadata"]["co2_eq_emissions"]["emissions"], 12);
    }
}
