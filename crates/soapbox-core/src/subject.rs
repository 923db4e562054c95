// ABOUTME: Subject model and the predefined per-semester subject catalog.
// ABOUTME: The catalog seeds the fixed curriculum and supports manual additions.

use serde::Serialize;

/// One subject offering. Field order matches the subject export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub subject_code: String,
    pub subject_name: String,
    pub semester: i32,
    pub department: String,
}

impl Subject {
    pub fn new(code: &str, name: &str, semester: i32, department: &str) -> Self {
        Self {
            subject_code: code.to_string(),
            subject_name: name.to_string(),
            semester,
            department: department.to_string(),
        }
    }
}

/// The fixed curriculum, one entry per (code, name, semester, department).
const PREDEFINED: &[(&str, &str, i32, &str)] = &[
    ("18CS11", "Problem Solving with C", 1, "CSE"),
    ("18MAT11", "Engineering Mathematics-I", 1, "Common"),
    ("18PHY12", "Engineering Physics", 1, "Common"),
    ("18CHE12", "Engineering Chemistry", 1, "Common"),
    ("18ELE14", "Elements of Electronics", 1, "Common"),
    ("18CS21", "Data Structures with C", 2, "CSE"),
    ("18MAT21", "Engineering Mathematics-II", 2, "Common"),
    ("18PHY22", "Engineering Physics Lab", 2, "Common"),
    ("18CHE22", "Engineering Chemistry Lab", 2, "Common"),
    ("18PCD23", "Professional Communication", 2, "Common"),
    ("18CS31", "Object Oriented Programming with Java", 3, "CSE"),
    ("18CS32", "Data Structures and Applications", 3, "CSE"),
    ("18CS33", "Computer Organization", 3, "CSE"),
    ("18CS34", "Database Management Systems", 3, "CSE"),
    ("18MAT31", "Engineering Mathematics-III", 3, "CSE"),
    ("18CS41", "Design and Analysis of Algorithms", 4, "CSE"),
    ("18CS42", "Operating Systems", 4, "CSE"),
    ("18CS43", "Microcontroller and Embedded Systems", 4, "CSE"),
    ("18CS44", "Software Engineering", 4, "CSE"),
    ("18MAT41", "Engineering Mathematics-IV", 4, "CSE"),
    ("18CS51", "Computer Networks", 5, "CSE"),
    ("18CS52", "Automata Theory and Compiler Design", 5, "CSE"),
    ("18CS53", "Application Development using Python", 5, "CSE"),
    ("18CS54", "Unix Programming", 5, "CSE"),
    ("18CS55", "Environmental Studies", 5, "CSE"),
    ("18CS61", "Web Technology and Applications", 6, "CSE"),
    ("18CS62", "Machine Learning", 6, "CSE"),
    ("18CS63", "Cloud Computing", 6, "CSE"),
    ("18CS64", "Computer Graphics", 6, "CSE"),
    ("18CS65", "Mobile Application Development", 6, "CSE"),
    ("18CS71", "Artificial Intelligence", 7, "CSE"),
    ("18CS72", "Big Data Analytics", 7, "CSE"),
    ("18CS73", "Internet of Things", 7, "CSE"),
    ("18CS74", "Information Security", 7, "CSE"),
    ("18CS81", "Project Work", 8, "CSE"),
    ("18CS82", "Internship/Seminar", 8, "CSE"),
];

/// Holds the predefined subjects plus any manual entries added at runtime.
#[derive(Debug, Clone)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl Default for SubjectCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectCatalog {
    /// Create a catalog seeded with the predefined curriculum.
    pub fn new() -> Self {
        let subjects = PREDEFINED
            .iter()
            .map(|(code, name, semester, department)| {
                Subject::new(code, name, *semester, department)
            })
            .collect();
        Self { subjects }
    }

    pub fn all(&self) -> &[Subject] {
        &self.subjects
    }

    /// Add a manual entry alongside the predefined curriculum.
    pub fn add(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Subjects offered in the given semester, in catalog order.
    pub fn for_semester(&self, semester: i32) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.semester == semester)
            .collect()
    }

    /// Look up a subject by code, ignoring case.
    pub fn find_by_code(&self, code: &str) -> Option<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.subject_code.eq_ignore_ascii_case(code))
    }
}
