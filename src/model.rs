use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: String,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub attendance_rate: f64,
    #[serde(rename = "currentGPA")]
    pub current_gpa: f64,
    pub contact_number: String,
    pub address: String,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default)]
    pub id: String,
    pub student_id: String,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    #[serde(default)]
    pub id: String,
    pub student_id: String,
    pub subject: String,
    pub score: f64,
    pub max_score: f64,
    pub term: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// The process-wide collections every view is derived from. Built once at
/// startup and replaced wholesale by `dataset.load`; nothing mutates it in
/// place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub students: Vec<Student>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub grades: Vec<GradeRecord>,
    pub current_user: User,
}

impl Dataset {
    pub fn student_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Loaded fixture files may omit record ids; give those records fresh
    /// ones so foreign-key scans and row keys stay usable.
    pub fn assign_missing_ids(&mut self) {
        for s in &mut self.students {
            if s.id.is_empty() {
                s.id = Uuid::new_v4().to_string();
            }
        }
        for r in &mut self.attendance {
            if r.id.is_empty() {
                r.id = Uuid::new_v4().to_string();
            }
        }
        for g in &mut self.grades {
            if g.id.is_empty() {
                g.id = Uuid::new_v4().to_string();
            }
        }
    }
}

/// Two-letter monogram used when a profile image is missing or fails to
/// load: first letter of up to two name words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}
