use serde::Serialize;

use crate::model::{GradeRecord, Student};

/// Band shown next to a student's attendance rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AttendanceBand {
    /// Thresholds 95/85/75. Input is not range-checked; out-of-range rates
    /// fall through to the nearest band.
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 95.0 {
            AttendanceBand::Excellent
        } else if rate >= 85.0 {
            AttendanceBand::Good
        } else if rate >= 75.0 {
            AttendanceBand::Fair
        } else {
            AttendanceBand::Poor
        }
    }
}

/// Band shown next to a 4.0-scale GPA. Cut points differ from
/// `LetterGrade`; the two scales are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GpaBand {
    A,
    B,
    C,
    D,
}

impl GpaBand {
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.7 {
            GpaBand::A
        } else if gpa >= 3.0 {
            GpaBand::B
        } else if gpa >= 2.0 {
            GpaBand::C
        } else {
            GpaBand::D
        }
    }
}

/// Letter for a 0-100 score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 90.0 {
            LetterGrade::A
        } else if pct >= 80.0 {
            LetterGrade::B
        } else if pct >= 70.0 {
            LetterGrade::C
        } else if pct >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }
}

/// Raw score as a percentage of `max_score`. Not guarded: a zero divisor
/// propagates as NaN/inf, so callers must ensure `max_score` is positive.
pub fn percentage(score: f64, max_score: f64) -> f64 {
    score / max_score * 100.0
}

/// Arithmetic mean, 0 for an empty sequence (keeps percentage displays
/// stable instead of surfacing NaN).
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0_usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Round half-up to a whole number.
pub fn round_whole(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round to two decimal places.
pub fn round_2dp(x: f64) -> f64 {
    (100.0 * x).round() / 100.0
}

/// Mean attendance rate over a cohort, as a whole percent.
pub fn cohort_average_attendance(students: &[Student]) -> f64 {
    round_whole(average(students.iter().map(|s| s.attendance_rate)))
}

/// Mean GPA over a cohort, to two decimals.
pub fn cohort_average_gpa(students: &[Student]) -> f64 {
    round_2dp(average(students.iter().map(|s| s.current_gpa)))
}

/// Average score percentage for one student, optionally narrowed to a
/// subject. Records whose `student_id` matches no student simply never make
/// it here; an empty remainder averages to 0.
pub fn average_score_for_student(
    grades: &[GradeRecord],
    student_id: &str,
    subject: Option<&str>,
) -> f64 {
    average(
        grades
            .iter()
            .filter(|g| g.student_id == student_id)
            .filter(|g| subject.map(|wanted| g.subject == wanted).unwrap_or(true))
            .map(|g| percentage(g.score, g.max_score)),
    )
}
