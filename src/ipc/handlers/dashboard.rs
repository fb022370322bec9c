use std::collections::BTreeSet;

use serde_json::json;

use crate::calc::{self, GpaBand};
use crate::dates;
use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use crate::model::{initials, AttendanceStatus, Dataset};

/// Per-day present share over the dates that actually carry records. The
/// canonical YYYY-MM-DD keys sort chronologically as plain strings.
fn daily_attendance(data: &Dataset) -> Vec<serde_json::Value> {
    let days: BTreeSet<&str> = data.attendance.iter().map(|r| r.date.as_str()).collect();
    days.into_iter()
        .map(|day| {
            let records: Vec<_> = data.attendance.iter().filter(|r| r.date == day).collect();
            let present = records
                .iter()
                .filter(|r| r.status == AttendanceStatus::Present)
                .count();
            // Every listed day has at least the record it came from.
            let rate = calc::round_whole(100.0 * present as f64 / records.len() as f64);
            let label = dates::parse_date_key(day)
                .map(dates::weekday_label)
                .unwrap_or_else(|| day.to_string());
            json!({ "date": day, "label": label, "presentRate": rate })
        })
        .collect()
}

fn gpa_distribution(data: &Dataset) -> Vec<serde_json::Value> {
    let bands = [GpaBand::A, GpaBand::B, GpaBand::C, GpaBand::D];
    let total = data.students.len();
    bands
        .iter()
        .map(|band| {
            let count = data
                .students
                .iter()
                .filter(|s| GpaBand::from_gpa(s.current_gpa) == *band)
                .count();
            json!({
                "band": band,
                "count": count,
                "share": if total == 0 {
                    0.0
                } else {
                    calc::round_whole(100.0 * count as f64 / total as f64)
                }
            })
        })
        .collect()
}

fn dashboard_open(data: &Dataset) -> serde_json::Value {
    let performance: Vec<serde_json::Value> = data
        .students
        .iter()
        .take(5)
        .map(|s| {
            json!({
                "id": s.id,
                "name": s.full_name(),
                "grade": s.grade,
                "profileImage": s.profile_image,
                "initials": initials(&s.full_name()),
                "attendanceRate": s.attendance_rate,
                "currentGPA": s.current_gpa
            })
        })
        .collect();

    json!({
        "totalStudents": data.students.len(),
        "averageAttendance": calc::cohort_average_attendance(&data.students),
        "averageGpa": calc::cohort_average_gpa(&data.students),
        "dailyAttendance": daily_attendance(data),
        "gpaDistribution": gpa_distribution(data),
        "performance": performance
    })
}

fn handle_dashboard_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, dashboard_open(&state.data))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.open" => Some(handle_dashboard_open(state, req)),
        _ => None,
    }
}
