//! Course model.
//!
//! A course is a unit of instruction (e.g. "CS101 — Introduction to
//! Programming") delivered either as theory lectures or as lab sessions.
//! Sections belong to courses; schedule entries reference both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery classification shared by courses and rooms.
///
/// The conflict validator requires a course to be scheduled in a room
/// of the same type, so both entities draw from one value space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    /// Lecture-style instruction.
    Theory,
    /// Hands-on lab instruction.
    Lab,
}

impl CourseType {
    /// Wire/display form (`"THEORY"` / `"LAB"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Theory => "THEORY",
            CourseType::Lab => "LAB",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course offered by the institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Catalog code (e.g. "CS101").
    pub code: String,
    /// Full course title.
    pub title: String,
    /// Theory or lab delivery.
    #[serde(rename = "type")]
    pub course_type: CourseType,
    /// Weekly credit hours (positive).
    pub credit_hours: u32,
}

impl Course {
    /// Creates a new course.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        title: impl Into<String>,
        course_type: CourseType,
        credit_hours: u32,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            title: title.into(),
            course_type,
            credit_hours,
        }
    }
}

/// Partial update for a course. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    /// New catalog code.
    pub code: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New delivery type.
    pub course_type: Option<CourseType>,
    /// New credit hours.
    pub credit_hours: Option<u32>,
}

impl CourseUpdate {
    /// Sets the catalog code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the delivery type.
    pub fn with_type(mut self, course_type: CourseType) -> Self {
        self.course_type = Some(course_type);
        self
    }

    /// Sets the credit hours.
    pub fn with_credit_hours(mut self, credit_hours: u32) -> Self {
        self.credit_hours = Some(credit_hours);
        self
    }

    /// Merges the populated fields into `course`.
    pub fn apply(self, course: &mut Course) {
        if let Some(code) = self.code {
            course.code = code;
        }
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(course_type) = self.course_type {
            course.course_type = course_type;
        }
        if let Some(credit_hours) = self.credit_hours {
            course.credit_hours = credit_hours;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_new() {
        let c = Course::new("c1", "CS101", "Intro to Programming", CourseType::Theory, 3);
        assert_eq!(c.id, "c1");
        assert_eq!(c.code, "CS101");
        assert_eq!(c.course_type, CourseType::Theory);
        assert_eq!(c.credit_hours, 3);
    }

    #[test]
    fn test_course_type_display() {
        assert_eq!(CourseType::Theory.to_string(), "THEORY");
        assert_eq!(CourseType::Lab.to_string(), "LAB");
    }

    #[test]
    fn test_course_wire_format() {
        let c = Course::new("c1", "CS101", "Intro", CourseType::Lab, 1);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["type"], "LAB");
        assert_eq!(v["creditHours"], 1);
        assert_eq!(v["code"], "CS101");
    }

    #[test]
    fn test_update_merges_only_populated_fields() {
        let mut c = Course::new("c1", "CS101", "Intro", CourseType::Theory, 3);
        CourseUpdate::default()
            .with_title("Intro to Programming")
            .with_credit_hours(4)
            .apply(&mut c);

        assert_eq!(c.title, "Intro to Programming");
        assert_eq!(c.credit_hours, 4);
        assert_eq!(c.code, "CS101");
        assert_eq!(c.course_type, CourseType::Theory);
    }
}
