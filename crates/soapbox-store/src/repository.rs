// ABOUTME: In-memory feedback repository backed by the file store.
// ABOUTME: Serves filtered views, aggregates, and distinct listings; persists on every add.

use std::collections::{BTreeMap, BTreeSet};

use soapbox_core::{Feedback, FeedbackDraft};

use crate::file::{FeedbackFile, StoreError};

/// The authoritative in-memory record collection, insertion-ordered, loaded
/// from the store at construction and rewritten in full on every add.
///
/// Mutation requires `&mut self`; queries take `&self`. Callers sharing a
/// repository across threads wrap it in `RwLock<FeedbackRepository>`, which
/// serializes adds while letting reads run concurrently.
pub struct FeedbackRepository {
    store: FeedbackFile,
    records: Vec<Feedback>,
}

impl FeedbackRepository {
    /// Load the backing file into memory. A storage failure is downgraded to
    /// a warning and an empty collection so startup never aborts on a bad
    /// data file.
    pub fn open(store: FeedbackFile) -> Self {
        let records = match store.load() {
            Ok(outcome) => {
                if !outcome.skipped.is_empty() {
                    tracing::warn!(
                        "dropped {} malformed entries from {}",
                        outcome.skipped.len(),
                        store.path().display()
                    );
                }
                tracing::info!(
                    "loaded {} feedback entries from {}",
                    outcome.records.len(),
                    store.path().display()
                );
                outcome.records
            }
            Err(err) => {
                tracing::warn!("{err}; starting with an empty feedback collection");
                Vec::new()
            }
        };

        Self { store, records }
    }

    /// Create the record from the draft, append it, and persist the entire
    /// collection. A failed save rolls the append back, so memory and disk
    /// never diverge.
    pub fn add(&mut self, draft: FeedbackDraft) -> Result<Feedback, StoreError> {
        let record = Feedback::new(draft);

        self.records.push(record.clone());
        if let Err(err) = self.store.save(&self.records) {
            self.records.pop();
            return Err(err);
        }

        Ok(record)
    }

    /// Defensive copy of the full collection, insertion order preserved.
    pub fn all(&self) -> Vec<Feedback> {
        self.records.clone()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_usn(&self, usn: &str) -> Vec<Feedback> {
        self.filter(|fb| fb.usn.eq_ignore_ascii_case(usn))
    }

    pub fn by_semester(&self, semester: i32) -> Vec<Feedback> {
        self.filter(|fb| fb.semester == semester)
    }

    pub fn by_subject(&self, subject_name: &str) -> Vec<Feedback> {
        self.filter(|fb| fb.subject_name.eq_ignore_ascii_case(subject_name))
    }

    pub fn by_faculty(&self, faculty_id: &str) -> Vec<Feedback> {
        self.filter(|fb| fb.faculty_id.eq_ignore_ascii_case(faculty_id))
    }

    pub fn by_year(&self, year: i32) -> Vec<Feedback> {
        self.filter(|fb| fb.year == year)
    }

    /// Mean rating across the subject's feedback, 0.0 when there is none.
    pub fn average_rating_by_subject(&self, subject_name: &str) -> f64 {
        average(&self.by_subject(subject_name))
    }

    /// Mean rating across the faculty member's feedback, 0.0 when there is
    /// none.
    pub fn average_rating_by_faculty(&self, faculty_id: &str) -> f64 {
        average(&self.by_faculty(faculty_id))
    }

    /// Occurrence count per rating value 1..=5 within the subject's feedback.
    pub fn rating_distribution_by_subject(&self, subject_name: &str) -> BTreeMap<i32, usize> {
        distribution(&self.by_subject(subject_name))
    }

    /// Occurrence count per rating value 1..=5 within the faculty member's
    /// feedback.
    pub fn rating_distribution_by_faculty(&self, faculty_id: &str) -> BTreeMap<i32, usize> {
        distribution(&self.by_faculty(faculty_id))
    }

    /// Sorted, de-duplicated subject names seen in the collection.
    pub fn unique_subjects(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|fb| fb.subject_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted, de-duplicated `"<name> (<id>)"` listing of faculty seen in
    /// the collection. Use [`faculty_id_from_entry`] to recover the bare
    /// identifier from an entry.
    pub fn unique_faculty(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|fb| format!("{} ({})", fb.faculty_name, fb.faculty_id))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn filter(&self, pred: impl Fn(&Feedback) -> bool) -> Vec<Feedback> {
        self.records.iter().filter(|fb| pred(fb)).cloned().collect()
    }
}

/// Recover the bare faculty identifier from a `"<name> (<id>)"` listing
/// entry: the substring inside the last parenthesis pair. A name that itself
/// contains parentheses still resolves to the trailing identifier.
pub fn faculty_id_from_entry(entry: &str) -> Option<&str> {
    let open = entry.rfind('(')?;
    let rest = &entry[open + 1..];
    let close = rest.find(')')?;
    Some(&rest[..close])
}

/// Empty subsets average to 0.0 rather than NaN.
fn average(records: &[Feedback]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: i64 = records.iter().map(|fb| i64::from(fb.rating)).sum();
    sum as f64 / records.len() as f64
}

/// All five rating buckets are always present. Out-of-contract ratings are
/// left uncounted rather than given a bucket of their own.
fn distribution(records: &[Feedback]) -> BTreeMap<i32, usize> {
    let mut dist: BTreeMap<i32, usize> = (1..=5).map(|rating| (rating, 0)).collect();
    for fb in records {
        if let Some(count) = dist.get_mut(&fb.rating) {
            *count += 1;
        }
    }
    dist
}
