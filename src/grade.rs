use serde::Serialize;
use std::fmt;

/// Letter grade assigned to a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }

    /// Converts a score into a letter grade using [`GRADE_BANDS`].
    ///
    /// | Range     | Grade |
    /// |-----------|-------|
    /// | 90..=100  | A     |
    /// | 80..=89   | B     |
    /// | 70..=79   | C     |
    /// | 60..=69   | D     |
    /// | 0..=59    | F     |
    ///
    /// Scores below 0 or above 100 fall in no band and return `None`.
    pub fn from_score(score: i64) -> Option<Grade> {
        GRADE_BANDS
            .iter()
            .find(|band| band.contains(score))
            .map(|band| band.grade)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An inclusive score interval mapped to one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeBand {
    pub grade: Grade,
    pub lower: i64,
    pub upper: i64,
}

impl GradeBand {
    pub fn contains(&self, score: i64) -> bool {
        self.lower <= score && score <= self.upper
    }
}

/// Checked in this order; the first matching band wins.
#[rustfmt::skip]
pub static GRADE_BANDS: [GradeBand; 5] = [
    GradeBand { grade: Grade::A, lower: 90, upper: 100 },
    GradeBand { grade: Grade::B, lower: 80, upper: 89 },
    GradeBand { grade: Grade::C, lower: 70, upper: 79 },
    GradeBand { grade: Grade::D, lower: 60, upper: 69 },
    GradeBand { grade: Grade::F, lower: 0, upper: 59 },
];
