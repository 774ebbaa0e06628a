//! Toolkit-free model of the grade calculator form.
//!
//! The form owns the text of its two entry fields and the result label. Any
//! front end (the terminal loop in the binary, or a real widget toolkit) copies
//! user input into the fields, calls [`GradeForm::calculate_grades`], and shows
//! whatever [`FormOutcome`] comes back.

use tracing::debug;

use crate::assigner::assign;

pub const WINDOW_TITLE: &str = "Grade Calculator";
pub const TOTAL_NUMBER_LABEL: &str = "Total number of students:";
pub const SCORES_LABEL: &str = "Enter scores separated by space:";
pub const CALCULATE_BUTTON: &str = "Calculate Grades";
pub const ERROR_TITLE: &str = "Error";

/// What the front end should display after the button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The result label was updated with this text.
    Report(String),
    /// A modal alert should be shown; the result label is unchanged.
    Alert { title: String, message: String },
}

#[derive(Debug, Default, Clone)]
pub struct GradeForm {
    pub total_number: String,
    pub scores: String,
    result: String,
}

impl GradeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn calculate_grades(&mut self) -> FormOutcome {
        match assign(&self.total_number, &self.scores) {
            Ok(report) => {
                debug!(graded = report.len(), "Grades calculated");
                self.result = report.to_string();
                FormOutcome::Report(self.result.clone())
            }
            Err(e) => {
                debug!(error = %e, "Grade input rejected");
                FormOutcome::Alert {
                    title: ERROR_TITLE.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }
}
