//! Application state and core logic

use crate::config::TuiConfig;
use crate::schema::{FormSchema, InputKind, Step, StepInput};
use crate::sink::{LogSink, SubmitSink};
use crate::state::{FormValues, ProgressState, WizardState, BUTTON_BACK, BUTTON_FORWARD};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// User configuration
    pub config: TuiConfig,
    /// Static step schema, validated at load time
    pub schema: FormSchema,
    /// Step pointer and page focus
    pub wizard: WizardState,
    /// Accumulated field values across all steps
    pub values: FormValues,
    /// Animated progress gauge state
    pub progress: ProgressState,
    /// Status bar feedback message
    pub status_message: Option<String>,
    /// External collaborator receiving submitted data
    sink: Box<dyn SubmitSink>,
}

impl App {
    /// Create a new App instance: load the user config, the schema it
    /// points at (or the built-in sample), and wire up the log sink.
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        let schema = match &config.schema_path {
            Some(path) => FormSchema::load(path)?,
            None => FormSchema::sample(),
        };
        Self::with_sink(config, schema, Box::new(LogSink))
    }

    /// Create an App over an explicit schema and sink
    pub fn with_sink(
        config: TuiConfig,
        schema: FormSchema,
        sink: Box<dyn SubmitSink>,
    ) -> Result<Self> {
        schema.validate()?;
        let wizard = WizardState::new(schema.max_order());
        let values = FormValues::for_schema(&schema);
        let progress = ProgressState::new(wizard.progress_ratio());
        Ok(Self {
            config,
            schema,
            wizard,
            values,
            progress,
            status_message: None,
            sink,
        })
    }

    /// The step currently displayed
    pub fn current_step(&self) -> Option<&Step> {
        self.schema.step(self.wizard.current_order())
    }

    /// Handle a key event for the current page
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(step) = self.current_step() else {
            return Ok(());
        };
        let input_count = step.inputs.len();
        let on_buttons = self.wizard.on_buttons_row(input_count);
        // Clone the focused input definition so the schema borrow does not
        // alias the state mutations below
        let focused: Option<StepInput> = if on_buttons {
            None
        } else {
            step.inputs.get(self.wizard.active_input()).cloned()
        };
        let is_text = focused
            .as_ref()
            .is_some_and(|i| i.kind == InputKind::Text);
        let is_options = focused
            .as_ref()
            .is_some_and(|i| i.kind != InputKind::Text);

        match key.code {
            KeyCode::Tab => self.wizard.next_field(input_count),
            KeyCode::BackTab => self.wizard.prev_field(input_count),
            // Silent no-op on the first step
            KeyCode::Esc => self.retreat(),
            // Buttons row navigation and activation
            KeyCode::Left if on_buttons => self.wizard.prev_button(),
            KeyCode::Right if on_buttons => self.wizard.next_button(),
            KeyCode::Enter if on_buttons => self.activate_selected_button().await?,
            // Option cursor inside select/checkbox fields
            KeyCode::Up if is_options => {
                let count = focused.as_ref().map(|i| i.options().len()).unwrap_or(0);
                self.wizard.cursor_up(count);
            }
            KeyCode::Down if is_options => {
                let count = focused.as_ref().map(|i| i.options().len()).unwrap_or(0);
                self.wizard.cursor_down(count);
            }
            KeyCode::Char(' ') | KeyCode::Enter if is_options => {
                if let Some(input) = &focused {
                    self.apply_option_key(input);
                }
            }
            // Enter on a text field moves focus forward
            KeyCode::Enter if is_text => self.wizard.next_field(input_count),
            // Text editing; format hints never restrict the accepted characters
            KeyCode::Char(c) if is_text => {
                if let Some(input) = &focused {
                    self.values.push_char(&input.key, c);
                }
            }
            KeyCode::Backspace if is_text => {
                if let Some(input) = &focused {
                    self.values.pop_char(&input.key);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Select or toggle the option under the cursor for the focused field
    fn apply_option_key(&mut self, input: &StepInput) {
        let options = input.options();
        if options.is_empty() {
            return;
        }
        let cursor = self.wizard.option_cursor().min(options.len() - 1);
        let option = options[cursor].clone();
        match input.kind {
            InputKind::SelectCheckbox => self.values.select(&input.key, &option),
            InputKind::Checkbox => self.values.toggle(&input.key, &option),
            InputKind::Text => {}
        }
    }

    /// Activate the selected button on the buttons row
    async fn activate_selected_button(&mut self) -> Result<()> {
        match self.wizard.selected_button() {
            BUTTON_BACK => self.retreat(),
            BUTTON_FORWARD => {
                if self.wizard.is_last_step() {
                    self.submit().await?;
                } else {
                    self.advance();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Advance the step pointer and retarget the gauge animation
    fn advance(&mut self) {
        self.status_message = None;
        self.wizard.advance();
        self.progress.retarget(self.wizard.progress_ratio());
    }

    /// Retreat the step pointer and retarget the gauge animation
    fn retreat(&mut self) {
        self.status_message = None;
        self.wizard.retreat();
        self.progress.retarget(self.wizard.progress_ratio());
    }

    /// Hand the full value snapshot to the sink, exactly once per
    /// activation. Required flags are never checked here; an all-empty
    /// form submits like any other.
    async fn submit(&mut self) -> Result<()> {
        match self.sink.submit(&self.values).await {
            Ok(()) => self.status_message = Some("Form submitted!".to_string()),
            Err(err) => {
                tracing::warn!("submission sink failed: {err:#}");
                self.status_message = Some("Submission failed".to_string());
            }
        }
        Ok(())
    }
}
