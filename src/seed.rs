use std::path::Path;

use anyhow::Context;

use crate::model::{
    AttendanceRecord, AttendanceStatus, Dataset, GradeRecord, Student, User, UserRole,
};

fn attendance(
    id: &str,
    student_id: &str,
    date: &str,
    status: AttendanceStatus,
    notes: Option<&str>,
) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        student_id: student_id.to_string(),
        date: date.to_string(),
        status,
        notes: notes.map(str::to_string),
    }
}

fn grade(
    id: &str,
    student_id: &str,
    subject: &str,
    score: f64,
    max_score: f64,
    date: &str,
    notes: &str,
) -> GradeRecord {
    GradeRecord {
        id: id.to_string(),
        student_id: student_id.to_string(),
        subject: subject.to_string(),
        score,
        max_score,
        term: "Spring 2024".to_string(),
        date: date.to_string(),
        notes: Some(notes.to_string()),
    }
}

/// The dataset the daemon serves when no fixture file is given at startup.
pub fn builtin() -> Dataset {
    let students = vec![
        Student {
            id: "1".into(),
            first_name: "Emma".into(),
            last_name: "Johnson".into(),
            email: "emma.j@example.edu".into(),
            enrollment_date: "2023-09-01".into(),
            grade: "10th".into(),
            profile_image: Some(
                "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg".into(),
            ),
            attendance_rate: 97.0,
            current_gpa: 3.8,
            contact_number: "(555) 123-4567".into(),
            address: "123 Education St, Learning City".into(),
            parent_name: "Sarah Johnson".into(),
            parent_email: "sarah.j@example.com".into(),
            parent_phone: "(555) 987-6543".into(),
        },
        Student {
            id: "2".into(),
            first_name: "Liam".into(),
            last_name: "Williams".into(),
            email: "liam.w@example.edu".into(),
            enrollment_date: "2023-09-01".into(),
            grade: "10th".into(),
            profile_image: Some(
                "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg".into(),
            ),
            attendance_rate: 92.0,
            current_gpa: 3.5,
            contact_number: "(555) 234-5678".into(),
            address: "456 Scholar Ave, Learning City".into(),
            parent_name: "Michael Williams".into(),
            parent_email: "michael.w@example.com".into(),
            parent_phone: "(555) 876-5432".into(),
        },
        Student {
            id: "3".into(),
            first_name: "Olivia".into(),
            last_name: "Smith".into(),
            email: "olivia.s@example.edu".into(),
            enrollment_date: "2023-09-01".into(),
            grade: "11th".into(),
            profile_image: Some(
                "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg".into(),
            ),
            attendance_rate: 99.0,
            current_gpa: 4.0,
            contact_number: "(555) 345-6789".into(),
            address: "789 Academy Lane, Learning City".into(),
            parent_name: "David Smith".into(),
            parent_email: "david.s@example.com".into(),
            parent_phone: "(555) 765-4321".into(),
        },
        Student {
            id: "4".into(),
            first_name: "Noah".into(),
            last_name: "Brown".into(),
            email: "noah.b@example.edu".into(),
            enrollment_date: "2023-09-01".into(),
            grade: "9th".into(),
            profile_image: Some(
                "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg".into(),
            ),
            attendance_rate: 85.0,
            current_gpa: 2.9,
            contact_number: "(555) 456-7890".into(),
            address: "101 Knowledge Road, Learning City".into(),
            parent_name: "Jennifer Brown".into(),
            parent_email: "jennifer.b@example.com".into(),
            parent_phone: "(555) 654-3210".into(),
        },
        Student {
            id: "5".into(),
            first_name: "Sophia".into(),
            last_name: "Garcia".into(),
            email: "sophia.g@example.edu".into(),
            enrollment_date: "2023-09-01".into(),
            grade: "12th".into(),
            profile_image: Some(
                "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg".into(),
            ),
            attendance_rate: 95.0,
            current_gpa: 3.7,
            contact_number: "(555) 567-8901".into(),
            address: "202 Wisdom Way, Learning City".into(),
            parent_name: "Carlos Garcia".into(),
            parent_email: "carlos.g@example.com".into(),
            parent_phone: "(555) 543-2109".into(),
        },
    ];

    let attendance = vec![
        attendance("1", "1", "2024-05-01", AttendanceStatus::Present, None),
        attendance("2", "1", "2024-05-02", AttendanceStatus::Present, None),
        attendance("3", "1", "2024-05-03", AttendanceStatus::Present, None),
        attendance(
            "4",
            "1",
            "2024-05-04",
            AttendanceStatus::Absent,
            Some("Doctor appointment"),
        ),
        attendance("5", "1", "2024-05-05", AttendanceStatus::Present, None),
        attendance("6", "2", "2024-05-01", AttendanceStatus::Present, None),
        attendance(
            "7",
            "2",
            "2024-05-02",
            AttendanceStatus::Late,
            Some("Bus delay"),
        ),
        attendance("8", "2", "2024-05-03", AttendanceStatus::Present, None),
        attendance("9", "2", "2024-05-04", AttendanceStatus::Present, None),
        attendance("10", "2", "2024-05-05", AttendanceStatus::Present, None),
    ];

    let grades = vec![
        grade(
            "1",
            "1",
            "Mathematics",
            92.0,
            100.0,
            "2024-04-15",
            "Excellent work on calculus problems",
        ),
        grade(
            "2",
            "1",
            "English",
            88.0,
            100.0,
            "2024-04-20",
            "Good essay structure",
        ),
        grade(
            "3",
            "1",
            "Science",
            95.0,
            100.0,
            "2024-04-18",
            "Outstanding lab results",
        ),
        grade(
            "4",
            "2",
            "Mathematics",
            78.0,
            100.0,
            "2024-04-15",
            "Needs work on algebra",
        ),
        grade(
            "5",
            "2",
            "English",
            85.0,
            100.0,
            "2024-04-20",
            "Good vocabulary usage",
        ),
        grade(
            "6",
            "2",
            "Science",
            80.0,
            100.0,
            "2024-04-18",
            "Satisfactory lab work",
        ),
    ];

    Dataset {
        students,
        attendance,
        grades,
        current_user: User {
            id: "admin1".into(),
            name: "Alex Rodriguez".into(),
            email: "alex.rodriguez@example.edu".into(),
            role: UserRole::Admin,
            profile_image: Some(
                "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg".into(),
            ),
        },
    }
}

/// Load a replacement dataset from a JSON fixture file.
pub fn load_from_file(path: &Path) -> anyhow::Result<Dataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read dataset file {}", path.display()))?;
    let mut data: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("parse dataset file {}", path.display()))?;
    data.assign_missing_ids();
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_values_stay_in_domain_ranges() {
        let data = builtin();
        assert_eq!(data.students.len(), 5);
        for s in &data.students {
            assert!((0.0..=100.0).contains(&s.attendance_rate), "{}", s.id);
            assert!((0.0..=4.0).contains(&s.current_gpa), "{}", s.id);
            assert!(!s.id.is_empty());
        }
    }

    #[test]
    fn seed_records_resolve_to_seed_students() {
        let data = builtin();
        for r in &data.attendance {
            assert!(data.student_by_id(&r.student_id).is_some(), "attendance {}", r.id);
        }
        for g in &data.grades {
            assert!(data.student_by_id(&g.student_id).is_some(), "grade {}", g.id);
        }
    }

    #[test]
    fn seed_dates_use_the_canonical_key_form() {
        let data = builtin();
        for r in &data.attendance {
            let parsed = crate::dates::parse_date_key(&r.date).expect("canonical date");
            assert_eq!(crate::dates::date_key(parsed), r.date);
        }
    }
}
