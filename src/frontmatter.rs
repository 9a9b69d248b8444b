//! YAML front matter for the Markdown document.
//!
//! Hub hosting reads a small metadata header at the top of `README.md`. The
//! header is assembled from the record's [`HubMetadata`] in a fixed key order,
//! followed by its unrecognized keys, then topped up from the legacy
//! `card_data` mapping. On a key collision the
//! hub metadata wins.
//!
//! [`HubMetadata`]: crate::model::HubMetadata

use std::fmt::Write;

use serde_json::Value;

use crate::model::{HasContent, ModelCardRecord};

/// One front matter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontmatterValue {
    Scalar(String),
    Bool(bool),
    List(Vec<String>),
    /// Written verbatim: numbers and JSON objects (a valid YAML flow mapping)
    /// from legacy card data.
    Raw(String),
}

/// An ordered, duplicate-free set of front matter entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    entries: Vec<(String, FrontmatterValue)>,
}

impl Frontmatter {
    /// Build the front matter for a record.
    pub fn from_record(record: &ModelCardRecord) -> Self {
        let mut fm = Self::default();

        if let Some(metadata) = &record.metadata {
            let scalars = [
                ("license", &metadata.license),
                ("language", &metadata.language),
                ("base_model", &metadata.base_model),
                ("library_name", &metadata.library_name),
                ("pipeline_tag", &metadata.pipeline_tag),
            ];
            for (key, value) in scalars {
                if let Some(value) = value.as_deref().filter(|v| v.has_content()) {
                    fm.insert(key, FrontmatterValue::Scalar(value.trim().to_string()));
                }
            }
            if let Some(tags) = metadata.tags.as_ref().filter(|t| t.has_content()) {
                fm.insert("tags", FrontmatterValue::List(tags.clone()));
            }
            if let Some(inference) = metadata.inference {
                fm.insert("inference", FrontmatterValue::Bool(inference));
            }
            for (key, value) in &metadata.extra {
                if let Some(value) = from_json(value) {
                    fm.insert(key, value);
                }
            }
        }

        for (key, value) in record.card_data.iter().flatten() {
            if let Some(value) = from_json(value) {
                fm.insert(key, value);
            }
        }

        fm
    }

    /// Add an entry unless the key is already present.
    ///
    /// Returns `false` when an earlier entry kept the key.
    pub fn insert(&mut self, key: &str, value: FrontmatterValue) -> bool {
        if self.get(key).is_some() {
            return false;
        }
        self.entries.push((key.to_string(), value));
        true
    }

    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Serialize as a `---` delimited block followed by a blank line.
    ///
    /// Returns an empty string when there are no entries, so the delimiters
    /// are omitted too.
    pub fn to_yaml_block(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut out = String::from("---\n");
        for (key, value) in &self.entries {
            let key = yaml_scalar(key);
            match value {
                FrontmatterValue::Scalar(s) => {
                    let _ = writeln!(out, "{key}: {}", yaml_scalar(s));
                }
                FrontmatterValue::Bool(b) => {
                    let _ = writeln!(out, "{key}: {b}");
                }
                FrontmatterValue::Raw(raw) => {
                    let _ = writeln!(out, "{key}: {raw}");
                }
                FrontmatterValue::List(items) => {
                    let _ = writeln!(out, "{key}:");
                    for item in items {
                        let _ = writeln!(out, "  - {}", yaml_scalar(item));
                    }
                }
            }
        }
        out.push_str("---\n\n");
        out
    }
}

/// Convert a legacy card data value. Nulls are dropped.
fn from_json(value: &Value) -> Option<FrontmatterValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(FrontmatterValue::Bool(*b)),
        Value::Number(n) => Some(FrontmatterValue::Raw(n.to_string())),
        Value::String(s) => Some(FrontmatterValue::Scalar(s.trim().to_string())),
        Value::Array(items) => Some(FrontmatterValue::List(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )),
        Value::Object(_) => Some(FrontmatterValue::Raw(value.to_string())),
    }
}

/// Quote a scalar when YAML would otherwise misread it.
fn yaml_scalar(s: &str) -> String {
    if needs_quotes(s) {
        let escaped = s
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\t', "\\t");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}

fn needs_quotes(s: &str) -> bool {
    const RESERVED: &[&str] = &["true", "false", "yes", "no", "on", "off", "null", "~"];

    let Some(first) = s.chars().next() else {
        return true;
    };
    if s.trim() != s || s.contains('\n') || s.contains('\t') {
        return true;
    }
    if "-?:,[]{}#&*!|>'\"%@`".contains(first) {
        return true;
    }
    if s.contains(": ") || s.contains(" #") || s.ends_with(':') {
        return true;
    }
    if RESERVED.iter().any(|r| s.eq_ignore_ascii_case(r)) {
        return true;
    }
    s.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HubMetadata;
    use serde_json::json;

    fn record_with(metadata: HubMetadata, card_data: Value) -> ModelCardRecord {
        let mut record = ModelCardRecord::new("demo").with_metadata(metadata);
        record.card_data = card_data.as_object().cloned();
        record
    }

    #[test]
    fn test_metadata_wins_over_card_data() {
        let record = record_with(
            HubMetadata {
                license: Some("mit".into()),
                ..HubMetadata::default()
            },
            json!({"license": "apache-2.0", "datasets": ["mimic-iv"]}),
        );
        let yaml = Frontmatter::from_record(&record).to_yaml_block();
        assert_eq!(yaml.matches("license:").count(), 1);
        assert!(yaml.contains("license: mit\n"));
        assert!(!yaml.contains("apache-2.0"));
        assert!(yaml.contains("datasets:\n  - mimic-iv\n"));
    }

    #[test]
    fn test_fixed_key_order() {
        let record = record_with(
            HubMetadata {
                pipeline_tag: Some("text-classification".into()),
                license: Some("mit".into()),
                tags: Some(vec!["medical".into(), "bert".into()]),
                inference: Some(false),
                library_name: Some("transformers".into()),
                ..HubMetadata::default()
            },
            Value::Null,
        );
        let fm = Frontmatter::from_record(&record);
        let keys: Vec<_> = fm.keys().collect();
        assert_eq!(keys, ["license", "library_name", "pipeline_tag", "tags", "inference"]);
        assert_eq!(
            fm.to_yaml_block(),
            "---\nlicense: mit\nlibrary_name: transformers\npipeline_tag: text-classification\n\
             tags:\n  - medical\n  - bert\ninference: false\n---\n\n"
        );
    }

    #[test]
    fn test_empty_frontmatter_has_no_delimiters() {
        let record = ModelCardRecord::new("demo");
        let fm = Frontmatter::from_record(&record);
        assert!(fm.is_empty());
        assert_eq!(fm.to_yaml_block(), "");
    }

    #[test]
    fn test_empty_tags_and_blank_scalars_skipped() {
        let record = record_with(
            HubMetadata {
                license: Some("  ".into()),
                tags: Some(Vec::new()),
                ..HubMetadata::default()
            },
            Value::Null,
        );
        assert!(Frontmatter::from_record(&record).is_empty());
    }

    #[test]
    fn test_inference_true_unquoted() {
        let record = record_with(
            HubMetadata {
                inference: Some(true),
                ..HubMetadata::default()
            },
            Value::Null,
        );
        assert!(Frontmatter::from_record(&record).to_yaml_block().contains("inference: true\n"));
    }

    #[test]
    fn test_ambiguous_scalars_quoted() {
        assert_eq!(yaml_scalar("mit"), "mit");
        assert_eq!(yaml_scalar("apache-2.0"), "apache-2.0");
        assert_eq!(yaml_scalar("yes"), "\"yes\"");
        assert_eq!(yaml_scalar("1.5"), "\"1.5\"");
        assert_eq!(yaml_scalar("a: b"), "\"a: b\"");
        assert_eq!(yaml_scalar("#tag"), "\"#tag\"");
        assert_eq!(yaml_scalar(""), "\"\"");
        assert_eq!(yaml_scalar("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn test_unknown_hub_keys_follow_known_keys() {
        let mut metadata = HubMetadata {
            license: Some("mit".into()),
            ..HubMetadata::default()
        };
        metadata.extra.insert("model_name".into(), json!("demo-large"));
        metadata.extra.insert("license".into(), json!("gpl-3.0"));
        let record = record_with(metadata, json!({"model_name": "other", "thumbnail": "t.png"}));

        let fm = Frontmatter::from_record(&record);
        let keys: Vec<_> = fm.keys().collect();
        assert_eq!(keys, ["license", "model_name", "thumbnail"]);
        assert_eq!(fm.get("license"), Some(&FrontmatterValue::Scalar("mit".into())));
        assert_eq!(fm.get("model_name"), Some(&FrontmatterValue::Scalar("demo-large".into())));
    }

    #[test]
    fn test_list_items_quoted_like_scalars() {
        let record = record_with(
            HubMetadata {
                tags: Some(vec!["bert".into(), "1.0".into(), "yes".into()]),
                ..HubMetadata::default()
            },
            Value::Null,
        );
        assert_eq!(
            Frontmatter::from_record(&record).to_yaml_block(),
            "---\ntags:\n  - bert\n  - \"1.0\"\n  - \"yes\"\n---\n\n"
        );
    }

    #[test]
    fn test_card_data_values() {
        let record = record_with(
            HubMetadata::default(),
            json!({"version": 2, "gated": true, "skip": null, "extra": {"a": 1}}),
        );
        let yaml = Frontmatter::from_record(&record).to_yaml_block();
        assert!(yaml.contains("version: 2\n"));
        assert!(yaml.contains("gated: true\n"));
        assert!(!yaml.contains("skip"));
        assert!(yaml.contains("extra: {\"a\":1}\n"));
    }
}
