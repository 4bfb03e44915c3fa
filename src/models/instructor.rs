//! Instructor model.

use serde::{Deserialize, Serialize};

/// A teaching staff member.
///
/// No uniqueness is enforced on email; the identifier is the only key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Home department.
    pub department: String,
}

impl Instructor {
    /// Creates a new instructor.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}

/// Partial update for an instructor. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct InstructorUpdate {
    /// New full name.
    pub name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New home department.
    pub department: Option<String>,
}

impl InstructorUpdate {
    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Merges the populated fields into `instructor`.
    pub fn apply(self, instructor: &mut Instructor) {
        if let Some(name) = self.name {
            instructor.name = name;
        }
        if let Some(email) = self.email {
            instructor.email = email;
        }
        if let Some(department) = self.department {
            instructor.department = department;
        }
    }
}
