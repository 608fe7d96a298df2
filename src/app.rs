//! Application state and interaction logic.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::data::{format_value, RowClass, Stats, Thresholds, ValueLog};
use crate::error::{Error, Result};
use crate::export;
use crate::ui::Theme;

/// Inline message shown under the input box after a rejected entry.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number (e.g. 2.30)";

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state for one session.
///
/// Owns the observation log; event handlers receive it by `&mut` and
/// nothing else holds session state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Session data
    pub log: ValueLog,
    pub thresholds: Thresholds,
    pub export_path: PathBuf,

    // Input field
    pub input: String,
    pub input_error: Option<String>,

    // History table selection (row index into the log)
    pub selected_row: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with an empty log.
    pub fn new(thresholds: Thresholds, export_path: PathBuf, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            log: ValueLog::new(),
            thresholds,
            export_path,
            input: String::new(),
            input_error: None,
            selected_row: 0,
            theme,
            status_message: None,
        }
    }

    /// Start the session from already-recorded values.
    pub fn with_log(mut self, log: ValueLog) -> Self {
        self.log = log;
        self.select_last();
        self
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Stats over the whole log, recomputed on every call.
    pub fn stats(&self) -> Result<Stats> {
        Stats::compute(&self.log, &self.thresholds)
    }

    /// Row class for one observation.
    pub fn row_class(&self, value: f64) -> RowClass {
        self.thresholds.row_class(value)
    }

    /// Append a character to the input field.
    pub fn input_push(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character from the input field.
    pub fn input_pop(&mut self) {
        self.input.pop();
    }

    /// Clear the input field and any inline error.
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_error = None;
    }

    /// Parse the input field and add it to the log.
    ///
    /// On success the field is cleared and the new row selected. On failure
    /// the text is kept for correction and an inline error is set; the log
    /// is not modified.
    pub fn submit_input(&mut self) -> Result<f64> {
        match self.log.append_input(&self.input) {
            Ok(value) => {
                self.input.clear();
                self.input_error = None;
                self.select_last();
                self.set_status_message(format!("Value {} added", format_value(value)));
                Ok(value)
            }
            Err(e) => {
                warn!(input = %self.input, "rejected input");
                self.input_error = Some(INVALID_INPUT_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Move history selection down by one row.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move history selection up by one row.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move history selection down by n rows.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.log.len().saturating_sub(1);
        self.selected_row = (self.selected_row + n).min(max);
    }

    /// Move history selection up by n rows.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_row = self.selected_row.saturating_sub(n);
    }

    /// Jump to the oldest observation.
    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    /// Jump to the newest observation.
    pub fn select_last(&mut self) {
        self.selected_row = self.log.len().saturating_sub(1);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the log to the configured CSV path and report the outcome
    /// in the status bar.
    pub fn export_csv(&mut self) -> Result<usize> {
        let result = export::write_csv(&self.export_path, &self.log);
        match &result {
            Ok(rows) => {
                info!(rows, "csv export finished");
                self.set_status_message(format!(
                    "Exported {} values to {}",
                    rows,
                    self.export_path.display()
                ));
            }
            Err(Error::EmptyLog) => {
                self.set_status_message("Nothing to export yet".to_string());
            }
            Err(e) => {
                warn!(error = %e, "csv export failed");
                self.set_status_message(format!("Export failed: {}", e));
            }
        }
        result
    }
}
