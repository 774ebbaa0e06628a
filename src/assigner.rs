//! Assigns letter grades to a validated set of student scores.

use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::grade::Grade;
use crate::parser::{DeclaredTotal, parse_scores, parse_total};

/// A declared student count together with exactly that many scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSet {
    total: i64,
    scores: Vec<i64>,
}

impl ScoreSet {
    /// Validates `total` and the score count.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidTotal`] if `total <= 0`,
    /// [`ValidationError::CountMismatch`] if `scores.len() != total`.
    pub fn new(total: i64, scores: Vec<i64>) -> Result<Self, ValidationError> {
        if total <= 0 {
            return Err(ValidationError::InvalidTotal);
        }
        if scores.len() as u64 != total as u64 {
            return Err(ValidationError::CountMismatch {
                expected: total.to_string(),
            });
        }
        Ok(Self { total, scores })
    }

    /// Builds a score set from the raw text of the two input fields.
    pub fn parse(total: &str, scores: &str) -> Result<Self, ValidationError> {
        let total = parse_total(total)?;
        let scores = parse_scores(scores)?;
        match total {
            DeclaredTotal::Count(n) => Self::new(n, scores),
            DeclaredTotal::Overflow(_) => Err(ValidationError::CountMismatch {
                expected: total.digits(),
            }),
        }
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Grades every score in input order.
    ///
    /// Scores outside 0..=100 receive no grade. The report pairs the score list
    /// with the shorter grade list position by position, so after a skip the
    /// entry at position N shows the N-th input score next to the N-th grade
    /// that was actually assigned.
    pub fn assign(&self) -> GradeReport {
        let grades: Vec<Grade> = self
            .scores
            .iter()
            .filter_map(|&score| {
                let grade = Grade::from_score(score);
                if grade.is_none() {
                    debug!(score, "Score matches no grade band, skipping");
                }
                grade
            })
            .collect();

        let entries = self
            .scores
            .iter()
            .zip(grades)
            .enumerate()
            .map(|(i, (&score, grade))| GradeEntry {
                position: i + 1,
                score,
                grade,
            })
            .collect();

        GradeReport { entries }
    }
}

/// One line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeEntry {
    /// 1-based.
    pub position: usize,
    pub score: i64,
    pub grade: Grade,
}

/// Ordered grading results, one entry per assigned grade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub entries: Vec<GradeEntry>,
}

impl GradeReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validates the two text fields and grades the scores.
///
/// Checks run in order: total, score tokens, score count. The first failure
/// is returned.
#[tracing::instrument(level = "debug")]
pub fn assign(total: &str, scores: &str) -> Result<GradeReport, ValidationError> {
    let set = ScoreSet::parse(total, scores)?;
    let report = set.assign();
    debug!(
        total = set.total(),
        graded = report.len(),
        "Grades assigned"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(report: &GradeReport) -> Vec<(usize, i64, Grade)> {
        report
            .entries
            .iter()
            .map(|e| (e.position, e.score, e.grade))
            .collect()
    }

    #[test]
    fn test_assign_mixed_scores() {
        let report = assign("3", "95 82 59").unwrap();
        assert_eq!(
            triples(&report),
            vec![(1, 95, Grade::A), (2, 82, Grade::B), (3, 59, Grade::F)]
        );
    }

    #[test]
    fn test_assign_extremes() {
        let report = assign("2", "100 0").unwrap();
        assert_eq!(triples(&report), vec![(1, 100, Grade::A), (2, 0, Grade::F)]);
    }

    #[test]
    fn test_adjacent_band_boundaries() {
        let report = assign("8", "59 60 69 70 79 80 89 90").unwrap();
        let grades: Vec<Grade> = report.entries.iter().map(|e| e.grade).collect();
        assert_eq!(
            grades,
            vec![
                Grade::F,
                Grade::D,
                Grade::D,
                Grade::C,
                Grade::C,
                Grade::B,
                Grade::B,
                Grade::A
            ]
        );
    }

    #[test]
    fn test_every_in_range_score_is_graded() {
        let scores: Vec<i64> = (0..=100).collect();
        let set = ScoreSet::new(101, scores.clone()).unwrap();
        let report = set.assign();

        assert_eq!(report.len(), 101);
        for (entry, score) in report.entries.iter().zip(scores) {
            assert_eq!(entry.score, score);
            assert_eq!(Some(entry.grade), Grade::from_score(score));
        }
    }

    #[test]
    fn test_zero_total_rejected() {
        assert_eq!(assign("0", ""), Err(ValidationError::InvalidTotal));
    }

    #[test]
    fn test_total_checked_before_scores() {
        assert_eq!(assign("-1", "abc"), Err(ValidationError::InvalidTotal));
    }

    #[test]
    fn test_count_mismatch() {
        assert_eq!(
            assign("2", "70"),
            Err(ValidationError::CountMismatch {
                expected: "2".to_string()
            })
        );
    }

    #[test]
    fn test_bad_token_checked_before_count() {
        assert_eq!(
            assign("5", "70 abc"),
            Err(ValidationError::InvalidScore {
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_out_of_range_score_is_dropped() {
        let report = assign("1", "150").unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_skip_shifts_pairing() {
        // 150 gets no grade, so the first entry pairs 150 with 95's grade.
        let report = assign("3", "150 95 -5").unwrap();
        assert_eq!(triples(&report), vec![(1, 150, Grade::A)]);
    }

    #[test]
    fn test_oversized_score_is_skipped() {
        let report = assign("2", "99999999999999999999 95").unwrap();
        assert_eq!(triples(&report), vec![(1, i64::MAX, Grade::A)]);
    }

    #[test]
    fn test_oversized_total_is_count_mismatch() {
        let err = assign("99999999999999999999", "95").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter 99999999999999999999 valid scores."
        );
    }

    #[test]
    fn test_oversized_total_still_checks_tokens() {
        assert_eq!(
            assign("99999999999999999999", "9x"),
            Err(ValidationError::InvalidScore {
                token: "9x".to_string()
            })
        );
    }

    #[test]
    fn test_score_set_accessors() {
        let set = ScoreSet::parse(" 2 ", "88 77").unwrap();
        assert_eq!(set.total(), 2);
        assert_eq!(set.scores(), &[88, 77]);
    }
}
