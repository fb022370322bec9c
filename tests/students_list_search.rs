
use serde_json::json;
use test_support::{request_err, request_ok, spawn_sidecar};

#[test]
fn empty_search_lists_every_student_in_seed_order() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let result = request_ok(&mut stdin, &mut reader, "1", "students.list", json!({}));
    assert_eq!(result["total"], 5);
    let names: Vec<&str> = result["students"]
        .as_array()
        .expect("students array")
        .iter()
        .map(|row| row["name"].as_str().expect("name"))
        .collect();
    assert_eq!(
        names,
        [
            "Emma Johnson",
            "Liam Williams",
            "Olivia Smith",
            "Noah Brown",
            "Sophia Garcia"
        ]
    );
}

#[test]
fn search_matches_case_insensitively_on_any_field() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let by_name = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "students.list",
        json!({ "search": "EMMA" }),
    );
    assert_eq!(by_name["total"], 1);
    assert_eq!(by_name["students"][0]["name"], "Emma Johnson");

    let by_grade = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "students.list",
        json!({ "search": "10th" }),
    );
    assert_eq!(by_grade["total"], 2);

    let by_email = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "students.list",
        json!({ "search": "noah.b@" }),
    );
    assert_eq!(by_email["total"], 1);
    assert_eq!(by_email["students"][0]["name"], "Noah Brown");
}

#[test]
fn rows_carry_bands_and_initials() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "students.list",
        json!({ "search": "emma" }),
    );
    let emma = &result["students"][0];
    assert_eq!(emma["attendanceRate"], 97.0);
    assert_eq!(emma["attendanceBand"], "Excellent");
    assert_eq!(emma["currentGPA"], 3.8);
    assert_eq!(emma["gpaBand"], "A");
    assert_eq!(emma["initials"], "EJ");
}

#[test]
fn students_open_resolves_profile_and_rejects_unknown_ids() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let profile = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "students.open",
        json!({ "studentId": "1" }),
    );
    assert_eq!(profile["student"]["name"], "Emma Johnson");
    assert_eq!(profile["student"]["parent"]["name"], "Sarah Johnson");
    assert_eq!(profile["attendance"]["presentCount"], 4);
    assert_eq!(profile["attendance"]["absentCount"], 1);
    assert_eq!(profile["attendance"]["lateCount"], 0);
    assert_eq!(
        profile["attendance"]["records"]
            .as_array()
            .expect("records")
            .len(),
        5
    );

    let subject_scores = profile["grades"]["subjectScores"]
        .as_array()
        .expect("subject scores");
    assert_eq!(subject_scores.len(), 3);
    assert_eq!(subject_scores[0]["subject"], "Mathematics");
    assert_eq!(subject_scores[0]["percentage"], 92.0);
    assert_eq!(profile["grades"]["records"][0]["letter"], "A");
    assert_eq!(profile["grades"]["records"][1]["letter"], "B");

    let error = request_err(
        &mut stdin,
        &mut reader,
        "2",
        "students.open",
        json!({ "studentId": "999" }),
    );
    assert_eq!(error.get("code").and_then(|v| v.as_str()), Some("not_found"));

    let missing = request_err(&mut stdin, &mut reader, "3", "students.open", json!({}));
    assert_eq!(missing.get("code").and_then(|v| v.as_str()), Some("bad_params"));
}
