//! Output formatting for grade reports.
//!
//! Supports the plain-text `Grades:` block and JSON logging.

use anyhow::Result;
use std::fmt;
use tracing::info;

use crate::assigner::GradeReport;

impl fmt::Display for GradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grades:")?;
        for entry in &self.entries {
            writeln!(
                f,
                "Student {} score is {} and grade is {}",
                entry.position, entry.score, entry.grade
            )?;
        }
        Ok(())
    }
}

/// Logs the report as pretty-printed JSON.
pub fn print_json(report: &GradeReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assigner::assign;

    #[test]
    fn test_render_report() {
        let report = assign("3", "95 82 59").unwrap();
        assert_eq!(
            report.to_string(),
            "Grades:\n\
             Student 1 score is 95 and grade is A\n\
             Student 2 score is 82 and grade is B\n\
             Student 3 score is 59 and grade is F\n"
        );
    }

    #[test]
    fn test_render_empty_report_is_header_only() {
        assert_eq!(GradeReport::default().to_string(), "Grades:\n");
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = assign("1", "77").unwrap();
        print_json(&report).unwrap();
    }

    #[test]
    fn test_json_shape() {
        let report = assign("1", "77").unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["entries"][0]["position"], 1);
        assert_eq!(value["entries"][0]["score"], 77);
        assert_eq!(value["entries"][0]["grade"], "C");
    }
}
