//! Wizard navigation state: step pointer and per-step focus

/// Back button index on the buttons row
pub const BUTTON_BACK: usize = 0;
/// Next (or Submit, on the last step) button index
pub const BUTTON_FORWARD: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Owns the current step pointer plus the transient focus of the page.
///
/// The pointer is a step `order` value, always within `[1, max_order]`.
/// Moving past either boundary is a silent no-op. The focus cycles through
/// the step's inputs plus a trailing buttons row (index == input count),
/// and resets whenever the pointer moves.
#[derive(Debug, Clone)]
pub struct WizardState {
    current_order: u32,
    max_order: u32,
    /// Active input index; equal to the step's input count on the buttons row
    active_input: usize,
    /// Which button is selected when on the buttons row
    selected_button: usize,
    /// Cursor within the focused select/checkbox option list
    option_cursor: usize,
}

impl WizardState {
    /// Start at the first step of a form with `max_order` steps
    pub fn new(max_order: u32) -> Self {
        Self {
            current_order: 1,
            max_order,
            active_input: 0,
            selected_button: BUTTON_FORWARD,
            option_cursor: 0,
        }
    }

    pub fn current_order(&self) -> u32 {
        self.current_order
    }

    pub fn max_order(&self) -> u32 {
        self.max_order
    }

    pub fn is_first_step(&self) -> bool {
        self.current_order == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_order == self.max_order
    }

    /// Fraction of the form reached, for the progress gauge
    pub fn progress_ratio(&self) -> f32 {
        if self.max_order == 0 {
            return 0.0;
        }
        self.current_order as f32 / self.max_order as f32
    }

    /// Move to the next step. No-op on the last step; no completeness
    /// validation of the current step's fields is performed.
    pub fn advance(&mut self) {
        if self.current_order < self.max_order {
            self.current_order += 1;
            self.reset_focus();
        }
    }

    /// Move to the previous step. No-op on the first step.
    pub fn retreat(&mut self) {
        if self.current_order > 1 {
            self.current_order -= 1;
            self.reset_focus();
        }
    }

    fn reset_focus(&mut self) {
        self.active_input = 0;
        self.selected_button = BUTTON_FORWARD;
        self.option_cursor = 0;
    }

    pub fn active_input(&self) -> usize {
        self.active_input
    }

    /// Whether focus sits on the buttons row below the fields
    pub fn on_buttons_row(&self, input_count: usize) -> bool {
        self.active_input >= input_count
    }

    /// Move focus to the next input, wrapping through the buttons row
    pub fn next_field(&mut self, input_count: usize) {
        self.active_input = (self.active_input + 1) % (input_count + 1);
        self.option_cursor = 0;
    }

    /// Move focus to the previous input, wrapping through the buttons row
    pub fn prev_field(&mut self, input_count: usize) {
        if self.active_input == 0 {
            self.active_input = input_count;
        } else {
            self.active_input -= 1;
        }
        self.option_cursor = 0;
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    /// Move the option cursor up, wrapping
    pub fn cursor_up(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        if self.option_cursor == 0 {
            self.option_cursor = option_count - 1;
        } else {
            self.option_cursor -= 1;
        }
    }

    /// Move the option cursor down, wrapping
    pub fn cursor_down(&mut self, option_count: usize) {
        if option_count == 0 {
            return;
        }
        self.option_cursor = (self.option_cursor + 1) % option_count;
    }

    pub fn selected_button(&self) -> usize {
        self.selected_button
    }

    /// Move to the next button on the buttons row (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button on the buttons row (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}
