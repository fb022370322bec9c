use std::collections::HashSet;

use serde_json::json;

use crate::calc::{self, LetterGrade};
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_opt_str, parse_sort, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{initials, Dataset, Student};
use crate::query::{self, SortableRow, FILTER_ALL};

struct ScoredRow<'a> {
    student: &'a Student,
    avg_score: f64,
    grade_count: usize,
}

impl SortableRow for ScoredRow<'_> {
    fn name(&self) -> String {
        self.student.full_name()
    }
    fn grade_label(&self) -> &str {
        &self.student.grade
    }
    fn score_value(&self) -> f64 {
        self.avg_score
    }
}

/// Distinct subjects in first-seen record order.
fn subject_list(data: &Dataset) -> Vec<&str> {
    let mut seen = HashSet::new();
    data.grades
        .iter()
        .map(|g| g.subject.as_str())
        .filter(|subject| seen.insert(*subject))
        .collect()
}

fn grades_open(data: &Dataset, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let search_text = get_opt_str(params, "search").unwrap_or_default();
    let grade_level = get_opt_str(params, "gradeLevel").unwrap_or_else(|| FILTER_ALL.to_string());
    let subject = get_opt_str(params, "subject").unwrap_or_else(|| FILTER_ALL.to_string());
    let (sort_key, sort_dir) = parse_sort(params)?;
    let subject_filter = if subject == FILTER_ALL {
        None
    } else {
        Some(subject.as_str())
    };

    // Grade filter, then search, then derived averages, then sort.
    let by_grade = query::filter_exact(&data.students, |s| s.grade.as_str(), &grade_level);
    let fields: [fn(&Student) -> String; 2] = [|s| s.full_name(), |s| s.email.clone()];
    let matched = query::search(by_grade, &search_text, &fields);

    let mut scored: Vec<ScoredRow> = matched
        .into_iter()
        .map(|student| {
            let grade_count = data
                .grades
                .iter()
                .filter(|g| g.student_id == student.id)
                .filter(|g| subject_filter.map(|s| g.subject == s).unwrap_or(true))
                .count();
            ScoredRow {
                student,
                avg_score: calc::average_score_for_student(
                    &data.grades,
                    &student.id,
                    subject_filter,
                ),
                grade_count,
            }
        })
        .collect();
    query::sort_rows(&mut scored, sort_key, sort_dir);

    let rows: Vec<serde_json::Value> = scored
        .iter()
        .map(|row| {
            json!({
                "studentId": row.student.id,
                "name": row.student.full_name(),
                "email": row.student.email,
                "grade": row.student.grade,
                "profileImage": row.student.profile_image,
                "initials": initials(&row.student.full_name()),
                "averageScore": row.avg_score,
                "letter": LetterGrade::from_percentage(row.avg_score),
                "gradeCount": row.grade_count
            })
        })
        .collect();

    // Class performance over the same filtered cohort.
    let letters = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];
    let letter_distribution: Vec<serde_json::Value> = letters
        .iter()
        .map(|letter| {
            let count = scored
                .iter()
                .filter(|row| LetterGrade::from_percentage(row.avg_score) == *letter)
                .count();
            json!({
                "letter": letter,
                "count": count,
                "share": if scored.is_empty() {
                    0.0
                } else {
                    calc::round_whole(100.0 * count as f64 / scored.len() as f64)
                }
            })
        })
        .collect();

    let cohort_ids: HashSet<&str> = scored.iter().map(|row| row.student.id.as_str()).collect();
    let average_by_subject: Vec<serde_json::Value> = subject_list(data)
        .into_iter()
        .map(|subject| {
            let avg = calc::average(
                data.grades
                    .iter()
                    .filter(|g| g.subject == subject)
                    .filter(|g| cohort_ids.contains(g.student_id.as_str()))
                    .map(|g| calc::percentage(g.score, g.max_score)),
            );
            json!({ "subject": subject, "averageScore": calc::round_whole(avg) })
        })
        .collect();

    Ok(json!({
        "subjects": subject_list(data),
        "rows": rows,
        "classPerformance": {
            "letterDistribution": letter_distribution,
            "averageScoreBySubject": average_by_subject
        }
    }))
}

fn handle_grades_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    match grades_open(&state.data, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "grades.open" => Some(handle_grades_open(state, req)),
        _ => None,
    }
}
