use std::collections::HashSet;

use serde_json::json;

use crate::calc;
use crate::dates;
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_opt_str, get_required_str, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{initials, AttendanceStatus, Dataset, Student};
use crate::query::{self, FILTER_ALL};

/// Share of the roster, as a whole percent; 0 for an empty roster.
fn share(count: i64, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        calc::round_whole(100.0 * count as f64 / total as f64)
    }
}

fn counter(count: i64, total: usize) -> serde_json::Value {
    json!({ "count": count, "share": share(count, total) })
}

fn day_open(data: &Dataset, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let date_raw = get_required_str(params, "date")?;
    let date = dates::parse_date_key(&date_raw)
        .ok_or_else(|| HandlerErr::bad_params("date must be YYYY-MM-DD"))?;
    let grade_level = get_opt_str(params, "gradeLevel").unwrap_or_else(|| FILTER_ALL.to_string());
    let search_text = get_opt_str(params, "search").unwrap_or_default();

    let by_grade = query::filter_exact(&data.students, |s| s.grade.as_str(), &grade_level);
    let fields: [fn(&Student) -> String; 3] = [
        |s| s.first_name.clone(),
        |s| s.last_name.clone(),
        |s| s.email.clone(),
    ];
    let roster = query::search(by_grade, &search_text, &fields);

    let key = dates::date_key(date);
    let day_records: Vec<_> = data.attendance.iter().filter(|r| r.date == key).collect();

    // Summary counts join records to the filtered roster, so orphaned
    // records and other grade levels stay out of the day's totals.
    let roster_ids: HashSet<&str> = roster.iter().map(|s| s.id.as_str()).collect();
    let mut present = 0_i64;
    let mut absent = 0_i64;
    let mut late = 0_i64;
    let mut excused = 0_i64;
    for r in day_records
        .iter()
        .filter(|r| roster_ids.contains(r.student_id.as_str()))
    {
        match r.status {
            AttendanceStatus::Present => present += 1,
            AttendanceStatus::Absent => absent += 1,
            AttendanceStatus::Late => late += 1,
            AttendanceStatus::Excused => excused += 1,
        }
    }
    let total = roster.len();
    // Excused records are marked in the row view but, as displayed, do not
    // reduce the unmarked total.
    let unmarked = total as i64 - (present + absent + late);

    let rows: Vec<serde_json::Value> = roster
        .iter()
        .map(|s| {
            // First record wins when a (student, date) pair is duplicated.
            let record = day_records.iter().find(|r| r.student_id == s.id);
            json!({
                "studentId": s.id,
                "name": s.full_name(),
                "email": s.email,
                "grade": s.grade,
                "profileImage": s.profile_image,
                "initials": initials(&s.full_name()),
                "status": record.map(|r| r.status),
                "notes": record.and_then(|r| r.notes.clone())
            })
        })
        .collect();

    Ok(json!({
        "date": key,
        "formattedDate": dates::format_long(date),
        "previousDate": dates::date_key(dates::shift_day(date, -1)),
        "nextDate": dates::date_key(dates::shift_day(date, 1)),
        "gradeLevel": grade_level,
        "summary": {
            "totalStudents": total,
            "present": counter(present, total),
            "absent": counter(absent, total),
            "late": counter(late, total),
            "excused": counter(excused, total),
            "unmarked": counter(unmarked, total)
        },
        "rows": rows
    }))
}

fn handle_day_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    match day_open(&state.data, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.dayOpen" => Some(handle_day_open(state, req)),
        _ => None,
    }
}
