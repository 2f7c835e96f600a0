//! Form value container and per-kind field updates

use crate::schema::{FormSchema, InputKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current value of a single field.
///
/// Text and single-select fields hold a string; checkbox groups hold the
/// list of selected options. Serialized untagged so the submission payload
/// is a flat key/value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// The string content (empty for checkbox groups)
    pub fn as_str(&self) -> &str {
        match self {
            Self::Single(s) => s,
            Self::Many(_) => "",
        }
    }

    /// The selected options (empty for string fields)
    #[allow(dead_code)]
    pub fn selections(&self) -> &[String] {
        match self {
            Self::Single(_) => &[],
            Self::Many(items) => items,
        }
    }

    /// Whether the given option is currently selected
    pub fn has_selection(&self, option: &str) -> bool {
        match self {
            Self::Single(s) => s == option,
            Self::Many(items) => items.iter().any(|i| i == option),
        }
    }
}

/// Mapping from every input key across all steps to its current value.
///
/// Every update addresses exactly one key; updates to keys outside the
/// declared keyspace are silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    /// Initialize the mapping from a schema: empty string per text and
    /// single-select field, empty list per checkbox field, independent of
    /// the `required` flag.
    pub fn for_schema(schema: &FormSchema) -> Self {
        let values = schema
            .inputs()
            .map(|input| {
                let initial = match input.kind {
                    InputKind::Text | InputKind::SelectCheckbox => {
                        FieldValue::Single(String::new())
                    }
                    InputKind::Checkbox => FieldValue::Many(Vec::new()),
                };
                (input.key.clone(), initial)
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Replace a text field's value with the raw input string
    #[allow(dead_code)]
    pub fn set_text(&mut self, key: &str, value: String) {
        if let Some(FieldValue::Single(s)) = self.values.get_mut(key) {
            *s = value;
        }
    }

    /// Append a character to a text field
    pub fn push_char(&mut self, key: &str, c: char) {
        if let Some(FieldValue::Single(s)) = self.values.get_mut(key) {
            s.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self, key: &str) {
        if let Some(FieldValue::Single(s)) = self.values.get_mut(key) {
            s.pop();
        }
    }

    /// Set a single-select field to the chosen option, replacing any
    /// previous choice; exactly one option is active at a time.
    pub fn select(&mut self, key: &str, option: &str) {
        if let Some(FieldValue::Single(s)) = self.values.get_mut(key) {
            *s = option.to_string();
        }
    }

    /// Toggle membership of an option in a checkbox field's list value
    pub fn toggle(&mut self, key: &str, option: &str) {
        if let Some(FieldValue::Many(items)) = self.values.get_mut(key) {
            if let Some(pos) = items.iter().position(|i| i == option) {
                items.remove(pos);
            } else {
                items.push(option.to_string());
            }
        }
    }

    /// Number of keys in the mapping
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_values() -> FormValues {
        FormValues::for_schema(&FormSchema::sample())
    }

    mod initialization {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_schema_key_is_present() {
            let values = sample_values();
            assert_eq!(values.len(), 5);
            for key in ["name", "email", "age", "occupation", "interests"] {
                assert!(values.get(key).is_some(), "missing key {key}");
            }
        }

        #[test]
        fn test_text_and_select_start_empty_string() {
            let values = sample_values();
            assert_eq!(values.get("name"), Some(&FieldValue::Single(String::new())));
            assert_eq!(
                values.get("occupation"),
                Some(&FieldValue::Single(String::new()))
            );
        }

        #[test]
        fn test_checkbox_starts_empty_list() {
            let values = sample_values();
            assert_eq!(values.get("interests"), Some(&FieldValue::Many(vec![])));
        }
    }

    mod text_updates {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_text_replaces_previous_value() {
            let mut values = sample_values();
            values.set_text("name", "Ada".to_string());
            values.set_text("name", "Grace".to_string());
            assert_eq!(values.get("name").unwrap().as_str(), "Grace");
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut values = sample_values();
            values.push_char("name", 'A');
            values.push_char("name", 'd');
            values.push_char("name", 'a');
            assert_eq!(values.get("name").unwrap().as_str(), "Ada");
            values.pop_char("name");
            assert_eq!(values.get("name").unwrap().as_str(), "Ad");
        }

        #[test]
        fn test_pop_char_on_empty_field_is_noop() {
            let mut values = sample_values();
            values.pop_char("name");
            assert_eq!(values.get("name").unwrap().as_str(), "");
        }

        #[test]
        fn test_unknown_key_is_ignored() {
            let mut values = sample_values();
            values.set_text("nope", "x".to_string());
            values.push_char("nope", 'x');
            assert!(values.get("nope").is_none());
            assert_eq!(values.len(), 5);
        }

        #[test]
        fn test_text_update_does_not_touch_other_fields() {
            let mut values = sample_values();
            values.set_text("name", "Ada".to_string());
            assert_eq!(values.get("email").unwrap().as_str(), "");
            assert!(values.get("interests").unwrap().selections().is_empty());
        }
    }

    mod select_updates {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_select_sets_single_option() {
            let mut values = sample_values();
            values.select("occupation", "student");
            assert_eq!(values.get("occupation").unwrap().as_str(), "student");
        }

        #[test]
        fn test_select_b_after_a_leaves_exactly_b() {
            let mut values = sample_values();
            values.select("occupation", "student");
            values.select("occupation", "employed");
            let value = values.get("occupation").unwrap();
            assert_eq!(value.as_str(), "employed");
            assert!(value.has_selection("employed"));
            assert!(!value.has_selection("student"));
        }

        #[test]
        fn test_select_on_checkbox_field_is_noop() {
            let mut values = sample_values();
            values.select("interests", "sports");
            assert!(values.get("interests").unwrap().selections().is_empty());
        }
    }

    mod checkbox_updates {
        use super::*;
        use pretty_assertions::assert_eq;

        fn sorted(items: &[String]) -> Vec<String> {
            let mut v: Vec<String> = items.to_vec();
            v.sort_unstable();
            v
        }

        #[test]
        fn test_toggle_adds_absent_option() {
            let mut values = sample_values();
            values.toggle("interests", "sports");
            assert!(values.get("interests").unwrap().has_selection("sports"));
        }

        #[test]
        fn test_toggle_twice_restores_original_set() {
            let mut values = sample_values();
            values.toggle("interests", "art");
            let before = sorted(values.get("interests").unwrap().selections());
            values.toggle("interests", "sports");
            values.toggle("interests", "sports");
            let after = sorted(values.get("interests").unwrap().selections());
            assert_eq!(before, after);
        }

        #[test]
        fn test_sports_then_art_then_sports_leaves_art_only() {
            let mut values = sample_values();
            values.toggle("interests", "sports");
            values.toggle("interests", "art");
            assert_eq!(
                sorted(values.get("interests").unwrap().selections()),
                ["art", "sports"]
            );
            values.toggle("interests", "sports");
            assert_eq!(
                values.get("interests").unwrap().selections(),
                &["art".to_string()]
            );
        }

        #[test]
        fn test_toggle_on_text_field_is_noop() {
            let mut values = sample_values();
            values.toggle("name", "sports");
            assert_eq!(values.get("name").unwrap().as_str(), "");
        }
    }

    mod serialization {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_payload_is_flat_object() {
            let mut values = sample_values();
            values.set_text("name", "Ada".to_string());
            values.select("occupation", "employed");
            values.toggle("interests", "art");

            let json: serde_json::Value = serde_json::to_value(&values).unwrap();
            assert_eq!(json["name"], "Ada");
            assert_eq!(json["occupation"], "employed");
            assert_eq!(json["interests"], serde_json::json!(["art"]));
        }

        #[test]
        fn test_empty_fields_serialize_as_empty_string_and_list() {
            let json: serde_json::Value = serde_json::to_value(&sample_values()).unwrap();
            assert_eq!(json["email"], "");
            assert_eq!(json["interests"], serde_json::json!([]));
        }
    }
}
