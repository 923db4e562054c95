// ABOUTME: Schema-specific JSON codec for the feedback wire format.
// ABOUTME: Encode is strict and ordered; decode drops individually malformed entries and keeps the rest.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::record::Feedback;
use crate::subject::Subject;

/// Document-level codec failures. Per-entry problems never surface here;
/// they are reported as [`SkippedEntry`] values in the decode outcome.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root is not an array")]
    NotAnArray,
}

/// Why one array entry was dropped during decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub index: usize,
    pub reason: String,
}

/// The best-effort result of decoding a feedback document: every entry that
/// parsed, in source order, plus a note for every entry that did not.
#[derive(Debug, Default)]
pub struct DecodeOutcome {
    pub records: Vec<Feedback>,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Error)]
enum EntryError {
    #[error("entry is not an object")]
    NotAnObject,

    #[error("field `{0}` is missing or not an integer")]
    BadInteger(&'static str),
}

/// Encode records as a top-level JSON array, one fixed-shape object per
/// record, keys in the documented wire order. String escaping is handled by
/// the serializer; integer fields are emitted unquoted.
pub fn encode(records: &[Feedback]) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Encode the subject catalog in the same array-of-objects shape. Subjects
/// are export-only; there is no matching decode.
pub fn encode_subjects(subjects: &[Subject]) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(subjects)?)
}

/// Decode a feedback document.
///
/// Empty input yields an empty outcome. Input that fails to parse as a JSON
/// array is a document-level error. Individually malformed entries are
/// skipped with a warning and recorded in the outcome; decoding always
/// continues with the remaining entries.
pub fn decode(text: &str) -> Result<DecodeOutcome, CodecError> {
    if text.trim().is_empty() {
        return Ok(DecodeOutcome::default());
    }

    let root: Value = serde_json::from_str(text)?;
    let Value::Array(entries) = root else {
        return Err(CodecError::NotAnArray);
    };

    let mut outcome = DecodeOutcome::default();
    for (index, entry) in entries.iter().enumerate() {
        match decode_entry(entry) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                tracing::warn!("skipping malformed feedback entry {index}: {reason}");
                outcome.skipped.push(SkippedEntry {
                    index,
                    reason: reason.to_string(),
                });
            }
        }
    }

    Ok(outcome)
}

/// Rebuild one record from its JSON object. The stored identifier and
/// timestamp are restored verbatim, never regenerated.
fn decode_entry(entry: &Value) -> Result<Feedback, EntryError> {
    let Value::Object(obj) = entry else {
        return Err(EntryError::NotAnObject);
    };

    Ok(Feedback {
        feedback_id: string_field(obj, "feedbackId"),
        usn: string_field(obj, "usn"),
        student_name: string_field(obj, "studentName"),
        year: int_field(obj, "year")?,
        semester: int_field(obj, "semester")?,
        subject_code: string_field(obj, "subjectCode"),
        subject_name: string_field(obj, "subjectName"),
        faculty_id: string_field(obj, "facultyId"),
        faculty_name: string_field(obj, "facultyName"),
        rating: int_field(obj, "rating")?,
        comments: string_field(obj, "comments"),
        timestamp: string_field(obj, "timestamp"),
    })
}

/// String fields degrade gracefully: a missing or non-string value reads
/// back as the empty string.
fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Numeric fields do not degrade: a missing or non-integral value fails the
/// whole entry. Values outside the business range are kept as-is.
fn int_field(obj: &Map<String, Value>, key: &'static str) -> Result<i32, EntryError> {
    obj.get(key)
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(EntryError::BadInteger(key))
}
