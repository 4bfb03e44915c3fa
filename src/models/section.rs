//! Section model.
//!
//! A section is one offering of a course (e.g. "Section A" of CS101).
//! Section names are unique only by convention within their course;
//! nothing enforces that globally.

use serde::{Deserialize, Serialize};

/// A section of a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Owning course identifier.
    pub course_id: String,
    /// Display name (e.g. "A", "B1").
    pub name: String,
}

impl Section {
    /// Creates a new section under a course.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            name: name.into(),
        }
    }
}
