// ABOUTME: Defines the Feedback record and the FeedbackDraft creation parameters.
// ABOUTME: Identifier and timestamp are assigned once at construction and never recomputed.

use chrono::Local;
use serde::Serialize;
use ulid::Ulid;

/// Sentinel stored in `student_name` when the submitter withholds their name.
pub const ANONYMOUS: &str = "Anonymous";

/// Storage format for `Feedback::timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One feedback submission. Field order matches the wire format, so the
/// derived serializer emits keys in the documented order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub feedback_id: String,
    pub usn: String,
    pub student_name: String,
    pub year: i32,
    pub semester: i32,
    pub subject_code: String,
    pub subject_name: String,
    pub faculty_id: String,
    pub faculty_name: String,
    pub rating: i32,
    pub comments: String,
    pub timestamp: String,
}

/// The caller-supplied fields of a new submission. The repository turns a
/// draft into a `Feedback`, assigning the identifier and timestamp.
///
/// Field validation (rating range, identifier shape) is the caller's job;
/// this layer stores whatever it is handed.
#[derive(Debug, Clone)]
pub struct FeedbackDraft {
    pub usn: String,
    pub student_name: String,
    pub year: i32,
    pub semester: i32,
    pub subject_code: String,
    pub subject_name: String,
    pub faculty_id: String,
    pub faculty_name: String,
    pub rating: i32,
    pub comments: String,
}

impl Feedback {
    /// Build a record from a draft. Generates a fresh identifier and stamps
    /// the creation time. An empty student name becomes the anonymous
    /// sentinel.
    pub fn new(draft: FeedbackDraft) -> Self {
        let student_name = if draft.student_name.is_empty() {
            ANONYMOUS.to_string()
        } else {
            draft.student_name
        };

        Self {
            feedback_id: generate_feedback_id(),
            usn: draft.usn,
            student_name,
            year: draft.year,
            semester: draft.semester,
            subject_code: draft.subject_code,
            subject_name: draft.subject_name,
            faculty_id: draft.faculty_id,
            faculty_name: draft.faculty_name,
            rating: draft.rating,
            comments: draft.comments,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.student_name == ANONYMOUS
    }
}

/// Feedback identifiers keep the historical `FB` prefix but derive the rest
/// from a ULID, which stays unique under rapid submission where a bare
/// millisecond clock would collide.
fn generate_feedback_id() -> String {
    format!("FB{}", Ulid::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_draft() -> FeedbackDraft {
        FeedbackDraft {
            usn: "1RV21CS042".to_string(),
            student_name: "Priya N".to_string(),
            year: 2,
            semester: 3,
            subject_code: "18CS34".to_string(),
            subject_name: "Database Management Systems".to_string(),
            faculty_id: "F102".to_string(),
            faculty_name: "Dr. Rao".to_string(),
            rating: 4,
            comments: "Clear lectures".to_string(),
        }
    }

    #[test]
    fn new_sets_caller_fields() {
        let fb = Feedback::new(make_draft());

        assert_eq!(fb.usn, "1RV21CS042");
        assert_eq!(fb.student_name, "Priya N");
        assert_eq!(fb.year, 2);
        assert_eq!(fb.semester, 3);
        assert_eq!(fb.subject_name, "Database Management Systems");
        assert_eq!(fb.faculty_id, "F102");
        assert_eq!(fb.rating, 4);
        assert!(!fb.is_anonymous());
    }

    #[test]
    fn new_generates_prefixed_identifier() {
        let fb = Feedback::new(make_draft());
        assert!(fb.feedback_id.starts_with("FB"));
        assert!(fb.feedback_id.len() > 2);
    }

    #[test]
    fn rapid_creation_yields_distinct_identifiers() {
        let ids: std::collections::BTreeSet<String> = (0..100)
            .map(|_| Feedback::new(make_draft()).feedback_id)
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn new_stamps_parseable_timestamp() {
        let fb = Feedback::new(make_draft());
        assert!(NaiveDateTime::parse_from_str(&fb.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn empty_student_name_becomes_anonymous() {
        let mut draft = make_draft();
        draft.student_name = String::new();

        let fb = Feedback::new(draft);
        assert_eq!(fb.student_name, ANONYMOUS);
        assert!(fb.is_anonymous());
    }
}
