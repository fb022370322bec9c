use serde_json::json;

use crate::calc::{self, AttendanceBand, GpaBand, LetterGrade};
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_opt_str, get_required_str, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{initials, AttendanceStatus, Dataset, Student};
use crate::query;

fn student_row(s: &Student) -> serde_json::Value {
    json!({
        "id": s.id,
        "name": s.full_name(),
        "email": s.email,
        "grade": s.grade,
        "profileImage": s.profile_image,
        "initials": initials(&s.full_name()),
        "attendanceRate": s.attendance_rate,
        "attendanceBand": AttendanceBand::from_rate(s.attendance_rate),
        "currentGPA": s.current_gpa,
        "gpaBand": GpaBand::from_gpa(s.current_gpa),
        "contactNumber": s.contact_number
    })
}

fn students_list(data: &Dataset, params: &serde_json::Value) -> serde_json::Value {
    let search_text = get_opt_str(params, "search").unwrap_or_default();
    let fields: [fn(&Student) -> String; 4] = [
        |s| s.first_name.clone(),
        |s| s.last_name.clone(),
        |s| s.email.clone(),
        |s| s.grade.clone(),
    ];
    let matched = query::search(&data.students, &search_text, &fields);

    let rows: Vec<serde_json::Value> = matched.iter().map(|s| student_row(s)).collect();
    json!({
        "students": rows,
        "total": rows.len()
    })
}

fn students_open(data: &Dataset, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let student_id = get_required_str(params, "studentId")?;
    let student = data
        .student_by_id(&student_id)
        .ok_or_else(|| HandlerErr::not_found("student not found"))?;

    let history: Vec<_> = data
        .attendance
        .iter()
        .filter(|r| r.student_id == student.id)
        .collect();
    let count_of = |status: AttendanceStatus| -> usize {
        history.iter().filter(|r| r.status == status).count()
    };
    let attendance_records: Vec<serde_json::Value> = history
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "date": r.date,
                "status": r.status,
                "notes": r.notes
            })
        })
        .collect();

    let student_grades: Vec<_> = data
        .grades
        .iter()
        .filter(|g| g.student_id == student.id)
        .collect();
    let subject_scores: Vec<serde_json::Value> = student_grades
        .iter()
        .map(|g| {
            json!({
                "subject": g.subject,
                "percentage": calc::percentage(g.score, g.max_score)
            })
        })
        .collect();
    let grade_records: Vec<serde_json::Value> = student_grades
        .iter()
        .map(|g| {
            let pct = calc::percentage(g.score, g.max_score);
            json!({
                "id": g.id,
                "subject": g.subject,
                "score": g.score,
                "maxScore": g.max_score,
                "percentage": pct,
                "letter": LetterGrade::from_percentage(pct),
                "term": g.term,
                "date": g.date,
                "notes": g.notes
            })
        })
        .collect();

    Ok(json!({
        "student": {
            "id": student.id,
            "firstName": student.first_name,
            "lastName": student.last_name,
            "name": student.full_name(),
            "email": student.email,
            "enrollmentDate": student.enrollment_date,
            "grade": student.grade,
            "profileImage": student.profile_image,
            "initials": initials(&student.full_name()),
            "contactNumber": student.contact_number,
            "address": student.address,
            "parent": {
                "name": student.parent_name,
                "email": student.parent_email,
                "phone": student.parent_phone
            }
        },
        "attendance": {
            "rate": student.attendance_rate,
            "band": AttendanceBand::from_rate(student.attendance_rate),
            "presentCount": count_of(AttendanceStatus::Present),
            "absentCount": count_of(AttendanceStatus::Absent),
            "lateCount": count_of(AttendanceStatus::Late),
            "excusedCount": count_of(AttendanceStatus::Excused),
            "records": attendance_records
        },
        "grades": {
            "currentGPA": student.current_gpa,
            "gpaBand": GpaBand::from_gpa(student.current_gpa),
            "subjectScores": subject_scores,
            "records": grade_records
        }
    }))
}

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, students_list(&state.data, &req.params))
}

fn handle_students_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    match students_open(&state.data, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_students_list(state, req)),
        "students.open" => Some(handle_students_open(state, req)),
        _ => None,
    }
}
