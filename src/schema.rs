//! Form schema definitions, JSON loading, and load-time validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Input affordance hint for text fields.
///
/// Governs presentation only (a dim hint next to the label); values are
/// never validated against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Text,
    Email,
    Number,
}

impl TextFormat {
    /// Affordance hint shown next to the field label ("" for plain text)
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Text => "",
            Self::Email => "email",
            Self::Number => "number",
        }
    }
}

/// Display type of a single input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Single-line editable text control
    Text,
    /// Mutually exclusive option group (exactly one selectable)
    SelectCheckbox,
    /// Independent toggles (any subset selectable)
    Checkbox,
}

/// A single field definition within a step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInput {
    /// Unique key into the form value mapping
    pub key: String,
    /// Display label override; the capitalized key is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(rename = "type")]
    pub kind: InputKind,
    /// Only meaningful for `type: text`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TextFormat>,
    /// Required for `type: select-checkbox`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_options: Option<Vec<String>>,
    /// Required for `type: checkbox`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox_options: Option<Vec<String>>,
    /// Rendered as an indicator; never enforced before navigation or submit
    pub required: bool,
}

impl StepInput {
    /// Create a text input
    pub fn text(key: &str, format: TextFormat, required: bool) -> Self {
        Self {
            key: key.to_string(),
            custom_title: None,
            kind: InputKind::Text,
            format: Some(format),
            select_options: None,
            checkbox_options: None,
            required,
        }
    }

    /// Create a single-select input
    pub fn select(key: &str, options: &[&str], required: bool) -> Self {
        Self {
            key: key.to_string(),
            custom_title: None,
            kind: InputKind::SelectCheckbox,
            format: None,
            select_options: Some(options.iter().map(|o| o.to_string()).collect()),
            checkbox_options: None,
            required,
        }
    }

    /// Create a multi-select checkbox group
    pub fn checkbox(key: &str, options: &[&str], required: bool) -> Self {
        Self {
            key: key.to_string(),
            custom_title: None,
            kind: InputKind::Checkbox,
            format: None,
            select_options: None,
            checkbox_options: Some(options.iter().map(|o| o.to_string()).collect()),
            required,
        }
    }

    /// Set a display label override
    pub fn with_title(mut self, title: &str) -> Self {
        self.custom_title = Some(title.to_string());
        self
    }

    /// Display label: the custom title, or the key with its first letter
    /// upper-cased
    pub fn label(&self) -> String {
        if let Some(title) = &self.custom_title {
            return title.clone();
        }
        capitalize(&self.key)
    }

    /// Option list for select/checkbox inputs (empty slice for text)
    pub fn options(&self) -> &[String] {
        match self.kind {
            InputKind::Text => &[],
            InputKind::SelectCheckbox => self.select_options.as_deref().unwrap_or(&[]),
            InputKind::Checkbox => self.checkbox_options.as_deref().unwrap_or(&[]),
        }
    }
}

/// Upper-case the first letter of a display string
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One page of the wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    /// 1-based position; orders across a form are contiguous from 1
    pub order: u32,
    pub inputs: Vec<StepInput>,
}

/// Validation failures surfaced when a schema is handed to the app
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("form has no steps")]
    Empty,
    #[error("step '{title}' has no inputs")]
    EmptyStep { title: String },
    #[error("step orders must be contiguous from 1 (expected {expected}, found {found})")]
    NonContiguousOrder { expected: u32, found: u32 },
    #[error("input key '{key}' appears more than once")]
    DuplicateKey { key: String },
    #[error("single-select input '{key}' has no selectOptions")]
    MissingSelectOptions { key: String },
    #[error("checkbox input '{key}' has no checkboxOptions")]
    MissingCheckboxOptions { key: String },
}

/// The full, ordered step schema for one form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSchema {
    pub steps: Vec<Step>,
}

impl FormSchema {
    /// Parse a schema from JSON (an array of steps) and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: FormSchema = serde_json::from_str(json).context("failed to parse schema")?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load and validate a schema file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read schema file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid schema file {}", path.display()))
    }

    /// Check the data-model invariants: contiguous orders starting at 1,
    /// globally unique input keys, option lists present where the kind
    /// demands them, nothing empty.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.steps.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut keys = HashSet::new();
        for (position, step) in self.steps.iter().enumerate() {
            let expected = position as u32 + 1;
            if step.order != expected {
                return Err(SchemaError::NonContiguousOrder {
                    expected,
                    found: step.order,
                });
            }
            if step.inputs.is_empty() {
                return Err(SchemaError::EmptyStep {
                    title: step.title.clone(),
                });
            }
            for input in &step.inputs {
                if !keys.insert(input.key.clone()) {
                    return Err(SchemaError::DuplicateKey {
                        key: input.key.clone(),
                    });
                }
                match input.kind {
                    InputKind::SelectCheckbox
                        if input.select_options.as_ref().is_none_or(|o| o.is_empty()) =>
                    {
                        return Err(SchemaError::MissingSelectOptions {
                            key: input.key.clone(),
                        });
                    }
                    InputKind::Checkbox
                        if input
                            .checkbox_options
                            .as_ref()
                            .is_none_or(|o| o.is_empty()) =>
                    {
                        return Err(SchemaError::MissingCheckboxOptions {
                            key: input.key.clone(),
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Highest step order (the last page)
    pub fn max_order(&self) -> u32 {
        self.steps.last().map(|s| s.order).unwrap_or(0)
    }

    /// Number of steps
    #[allow(dead_code)]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Look up a step by its order value
    pub fn step(&self, order: u32) -> Option<&Step> {
        self.steps.iter().find(|s| s.order == order)
    }

    /// Iterate over every input across all steps, in page order
    pub fn inputs(&self) -> impl Iterator<Item = &StepInput> {
        self.steps.iter().flat_map(|s| s.inputs.iter())
    }

    /// Built-in sample form used when no schema file is configured
    pub fn sample() -> Self {
        Self {
            steps: vec![
                Step {
                    title: "Personal Info".to_string(),
                    order: 1,
                    inputs: vec![
                        StepInput::text("name", TextFormat::Text, false),
                        StepInput::text("email", TextFormat::Email, false),
                    ],
                },
                Step {
                    title: "Professional Info".to_string(),
                    order: 2,
                    inputs: vec![
                        StepInput::text("age", TextFormat::Number, false),
                        StepInput::select(
                            "occupation",
                            &["student", "employed", "unemployed"],
                            false,
                        ),
                    ],
                },
                Step {
                    title: "Interests".to_string(),
                    order: 3,
                    inputs: vec![StepInput::checkbox(
                        "interests",
                        &["technology", "sports", "art", "travel"],
                        false,
                    )
                    .with_title("select all that apply")],
                },
            ],
        }
    }
}
