//! Schedule entry model.
//!
//! A [`ScheduleEntry`] is a committed assignment binding a course
//! section to an instructor, a room, and a timeslot. Entries are created
//! only through the store's commit protocol; a [`CandidateEntry`] is the
//! proposed, not-yet-admitted form (same fields, no identifier).

use serde::{Deserialize, Serialize};

/// A committed schedule assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Referenced course.
    pub course_id: String,
    /// Referenced section of that course.
    pub section_id: String,
    /// Assigned instructor.
    pub instructor_id: String,
    /// Assigned room.
    pub room_id: String,
    /// Assigned timeslot.
    pub timeslot_id: String,
}

impl ScheduleEntry {
    /// The candidate form of this entry (fields minus id). Used to
    /// re-validate an existing entry against the rest of the set.
    pub fn candidate(&self) -> CandidateEntry {
        CandidateEntry {
            course_id: self.course_id.clone(),
            section_id: self.section_id.clone(),
            instructor_id: self.instructor_id.clone(),
            room_id: self.room_id.clone(),
            timeslot_id: self.timeslot_id.clone(),
        }
    }
}

/// A proposed schedule assignment, submitted for validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEntry {
    /// Referenced course.
    pub course_id: String,
    /// Referenced section of that course.
    pub section_id: String,
    /// Proposed instructor.
    pub instructor_id: String,
    /// Proposed room.
    pub room_id: String,
    /// Proposed timeslot.
    pub timeslot_id: String,
}

impl CandidateEntry {
    /// Creates a candidate from the five reference fields.
    pub fn new(
        course_id: impl Into<String>,
        section_id: impl Into<String>,
        instructor_id: impl Into<String>,
        room_id: impl Into<String>,
        timeslot_id: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            section_id: section_id.into(),
            instructor_id: instructor_id.into(),
            room_id: room_id.into(),
            timeslot_id: timeslot_id.into(),
        }
    }

    /// Wire name of the first empty reference field, if any.
    /// An incomplete candidate must be rejected before validation runs.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.course_id.is_empty() {
            Some("courseId")
        } else if self.section_id.is_empty() {
            Some("sectionId")
        } else if self.instructor_id.is_empty() {
            Some("instructorId")
        } else if self.room_id.is_empty() {
            Some("roomId")
        } else if self.timeslot_id.is_empty() {
            Some("timeslotId")
        } else {
            None
        }
    }

    /// Promotes this candidate to a committed entry with the given id.
    pub fn into_entry(self, id: impl Into<String>) -> ScheduleEntry {
        ScheduleEntry {
            id: id.into(),
            course_id: self.course_id,
            section_id: self.section_id,
            instructor_id: self.instructor_id,
            room_id: self.room_id,
            timeslot_id: self.timeslot_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_candidate_has_no_missing_field() {
        let c = CandidateEntry::new("c1", "s1", "i1", "r1", "ST1");
        assert_eq!(c.missing_field(), None);
    }

    #[test]
    fn test_missing_field_reports_first_blank() {
        let c = CandidateEntry::new("c1", "s1", "i1", "", "ST1");
        assert_eq!(c.missing_field(), Some("roomId"));

        let c = CandidateEntry::new("", "", "", "", "");
        assert_eq!(c.missing_field(), Some("courseId"));
    }

    #[test]
    fn test_into_entry_and_back() {
        let c = CandidateEntry::new("c1", "s1", "i1", "r1", "ST1");
        let entry = c.clone().into_entry("e1");
        assert_eq!(entry.id, "e1");
        assert_eq!(entry.timeslot_id, "ST1");

        let round = entry.candidate();
        assert_eq!(round.course_id, c.course_id);
        assert_eq!(round.room_id, c.room_id);
    }

    #[test]
    fn test_wire_format() {
        let entry = CandidateEntry::new("c1", "s1", "i1", "r1", "ST1").into_entry("e1");
        let v = serde_json::to_value(&entry).unwrap();
        assert_eq!(v["courseId"], "c1");
        assert_eq!(v["timeslotId"], "ST1");
    }
}
