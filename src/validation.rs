//! Conflict detection for schedule assignments.
//!
//! Checks a candidate assignment against the committed entry set and
//! reference data before admission. Detects:
//! - Course/room type mismatches (theory course in a lab room and vice versa)
//! - Instructor double-booking at a timeslot
//! - Room double-booking at a timeslot
//! - Duplicate scheduling of the same section at a timeslot
//!
//! All checks run unconditionally and accumulate — a candidate that
//! breaks several rules at once gets the full list in one pass, so the
//! caller never loops through fix-one-resubmit-discover-next.

use serde::{Deserialize, Serialize};

use crate::models::{CandidateEntry, Course, Room, ScheduleEntry};

/// A reason a candidate assignment cannot be admitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict category.
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
    /// Whether this conflict blocks admission.
    pub severity: Severity,
}

/// Categories of schedule conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    /// Course delivery type differs from the room type.
    RoomTypeMismatch,
    /// Instructor is already assigned elsewhere at this timeslot.
    InstructorConflict,
    /// Room is already booked at this timeslot.
    RoomConflict,
    /// The same section is already scheduled at this timeslot.
    DuplicateEntry,
}

/// Conflict severity.
///
/// Every rule defined today emits [`Severity::Error`]; `Warning` exists
/// so future advisory rules can surface without blocking admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks admission.
    Error,
    /// Advisory only.
    Warning,
}

impl Conflict {
    fn error(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Runs the four admission rules for a candidate assignment.
///
/// `exclude_id` removes one committed entry from consideration, so an
/// entry being re-validated (e.g. during an edit) does not conflict with
/// itself. Pure and side-effect free; O(entries) per call.
///
/// # Checks
/// 1. Room type mismatch — only when both the course and room resolve.
/// 2. Instructor double-booked at the candidate's timeslot.
/// 3. Room double-booked at the candidate's timeslot.
/// 4. Same (course, section, timeslot) already committed.
///
/// # Returns
/// Every detected conflict, in rule order. An empty vector means the
/// candidate is admissible under all rules.
pub fn detect_conflicts(
    candidate: &CandidateEntry,
    exclude_id: Option<&str>,
    entries: &[ScheduleEntry],
    courses: &[Course],
    rooms: &[Room],
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    let course = courses.iter().find(|c| c.id == candidate.course_id);
    let room = rooms.iter().find(|r| r.id == candidate.room_id);
    let existing: Vec<&ScheduleEntry> = entries
        .iter()
        .filter(|e| Some(e.id.as_str()) != exclude_id)
        .collect();

    // Room type mismatch: skipped when either reference dangles.
    if let (Some(course), Some(room)) = (course, room) {
        if course.course_type != room.room_type {
            conflicts.push(Conflict::error(
                ConflictKind::RoomTypeMismatch,
                format!(
                    "{} course cannot be scheduled in {} room",
                    course.course_type, room.room_type
                ),
            ));
        }
    }

    // Instructor double-booked.
    if let Some(taken) = existing.iter().find(|e| {
        e.instructor_id == candidate.instructor_id && e.timeslot_id == candidate.timeslot_id
    }) {
        let code = courses
            .iter()
            .find(|c| c.id == taken.course_id)
            .map(|c| c.code.as_str())
            .unwrap_or("another course");
        conflicts.push(Conflict::error(
            ConflictKind::InstructorConflict,
            format!("Instructor already assigned to {code} at this timeslot"),
        ));
    }

    // Room double-booked.
    if existing
        .iter()
        .any(|e| e.room_id == candidate.room_id && e.timeslot_id == candidate.timeslot_id)
    {
        conflicts.push(Conflict::error(
            ConflictKind::RoomConflict,
            "Room already booked at this timeslot",
        ));
    }

    // Duplicate section at this timeslot.
    if existing.iter().any(|e| {
        e.course_id == candidate.course_id
            && e.section_id == candidate.section_id
            && e.timeslot_id == candidate.timeslot_id
    }) {
        conflicts.push(Conflict::error(
            ConflictKind::DuplicateEntry,
            "This section is already scheduled at this timeslot",
        ));
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseType;

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("c1", "CS101", "Intro to Programming", CourseType::Theory, 3),
            Course::new("c2", "CS102L", "Programming Lab", CourseType::Lab, 1),
        ]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![
            Room::new("r1", "LH1", 120, CourseType::Theory, "Main"),
            Room::new("r2", "LAB1", 30, CourseType::Lab, "Annex"),
        ]
    }

    fn committed(id: &str, course: &str, section: &str, instructor: &str, room: &str, slot: &str) -> ScheduleEntry {
        CandidateEntry::new(course, section, instructor, room, slot).into_entry(id)
    }

    #[test]
    fn test_admissible_candidate_yields_no_conflicts() {
        let candidate = CandidateEntry::new("c1", "s1", "i1", "r1", "ST1");
        let conflicts = detect_conflicts(&candidate, None, &[], &sample_courses(), &sample_rooms());
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_room_type_mismatch() {
        // Theory course into a lab room.
        let candidate = CandidateEntry::new("c1", "s1", "i1", "r2", "ST1");
        let conflicts = detect_conflicts(&candidate, None, &[], &sample_courses(), &sample_rooms());

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::RoomTypeMismatch);
        assert_eq!(conflicts[0].severity, Severity::Error);
        assert_eq!(
            conflicts[0].message,
            "THEORY course cannot be scheduled in LAB room"
        );
    }

    #[test]
    fn test_room_type_check_skipped_when_reference_dangles() {
        // Unknown room id: the type rule cannot fire.
        let candidate = CandidateEntry::new("c1", "s1", "i1", "ghost", "ST1");
        let conflicts = detect_conflicts(&candidate, None, &[], &sample_courses(), &sample_rooms());
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_instructor_conflict_names_existing_course() {
        let entries = vec![committed("e1", "c1", "s1", "i1", "r1", "ST1")];
        let candidate = CandidateEntry::new("c2", "s2", "i1", "r2", "ST1");
        let conflicts =
            detect_conflicts(&candidate, None, &entries, &sample_courses(), &sample_rooms());

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::InstructorConflict);
        assert_eq!(
            conflicts[0].message,
            "Instructor already assigned to CS101 at this timeslot"
        );
    }

    #[test]
    fn test_instructor_conflict_placeholder_when_course_unresolvable() {
        let entries = vec![committed("e1", "deleted-course", "s1", "i1", "r1", "ST1")];
        let candidate = CandidateEntry::new("c2", "s2", "i1", "r2", "ST1");
        let conflicts =
            detect_conflicts(&candidate, None, &entries, &sample_courses(), &sample_rooms());

        assert_eq!(conflicts[0].kind, ConflictKind::InstructorConflict);
        assert_eq!(
            conflicts[0].message,
            "Instructor already assigned to another course at this timeslot"
        );
    }

    #[test]
    fn test_room_conflict() {
        let entries = vec![committed("e1", "c1", "s1", "i1", "r1", "ST1")];
        let candidate = CandidateEntry::new("c2", "s2", "i2", "r1", "ST1");
        let conflicts =
            detect_conflicts(&candidate, None, &entries, &sample_courses(), &sample_rooms());

        // The lab course c2 also mismatches theory room r1.
        let kinds: Vec<_> = conflicts.iter().map(|c| c.kind).collect();
        assert!(kinds.contains(&ConflictKind::RoomConflict));
        assert!(kinds.contains(&ConflictKind::RoomTypeMismatch));
    }

    #[test]
    fn test_room_conflict_alone() {
        let entries = vec![committed("e1", "c1", "s1", "i1", "r1", "ST1")];
        // Theory course in the same theory room, different instructor/section.
        let candidate = CandidateEntry::new("c1", "s2", "i2", "r1", "ST1");
        let conflicts =
            detect_conflicts(&candidate, None, &entries, &sample_courses(), &sample_rooms());

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::RoomConflict);
        assert_eq!(conflicts[0].message, "Room already booked at this timeslot");
    }

    #[test]
    fn test_duplicate_entry() {
        let entries = vec![committed("e1", "c1", "s1", "i1", "r1", "ST1")];
        // Same course/section/timeslot, everything else different.
        let candidate = CandidateEntry::new("c1", "s1", "i2", "r3", "ST1");
        let conflicts =
            detect_conflicts(&candidate, None, &entries, &sample_courses(), &sample_rooms());

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::DuplicateEntry);
        assert_eq!(
            conflicts[0].message,
            "This section is already scheduled at this timeslot"
        );
    }

    #[test]
    fn test_all_rules_fire_together() {
        // Lab course c2's section re-filed with the same instructor, same
        // theory room, same timeslot: every pairwise rule plus the type
        // rule fires at once, in rule order.
        let entries = vec![committed("e1", "c2", "s1", "i1", "r1", "ST1")];
        let candidate = CandidateEntry::new("c2", "s1", "i1", "r1", "ST1");
        let conflicts =
            detect_conflicts(&candidate, None, &entries, &sample_courses(), &sample_rooms());

        let kinds: Vec<_> = conflicts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConflictKind::RoomTypeMismatch,
                ConflictKind::InstructorConflict,
                ConflictKind::RoomConflict,
                ConflictKind::DuplicateEntry,
            ]
        );
    }

    #[test]
    fn test_exclude_id_removes_self_conflict() {
        let entry = committed("e1", "c1", "s1", "i1", "r1", "ST1");
        let entries = vec![entry.clone()];

        // Without exclusion the entry collides with itself on all three
        // pairwise rules.
        let own = entry.candidate();
        let unexcluded =
            detect_conflicts(&own, None, &entries, &sample_courses(), &sample_rooms());
        assert_eq!(unexcluded.len(), 3);

        // With exclusion it re-validates cleanly.
        let excluded =
            detect_conflicts(&own, Some("e1"), &entries, &sample_courses(), &sample_rooms());
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_detection_is_symmetric() {
        // A committed, B candidate — and the reverse — both detect the
        // shared (instructor, timeslot) pair.
        let a = committed("ea", "c1", "s1", "i1", "r1", "ST1");
        let b = committed("eb", "c2", "s2", "i1", "r2", "ST1");

        let b_vs_a = detect_conflicts(
            &b.candidate(),
            None,
            &[a.clone()],
            &sample_courses(),
            &sample_rooms(),
        );
        let a_vs_b = detect_conflicts(
            &a.candidate(),
            None,
            &[b],
            &sample_courses(),
            &sample_rooms(),
        );

        assert!(b_vs_a.iter().any(|c| c.kind == ConflictKind::InstructorConflict));
        assert!(a_vs_b.iter().any(|c| c.kind == ConflictKind::InstructorConflict));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let entries = vec![committed("e1", "c1", "s1", "i1", "r1", "ST1")];
        let candidate = CandidateEntry::new("c2", "s2", "i1", "r1", "ST1");

        let first =
            detect_conflicts(&candidate, None, &entries, &sample_courses(), &sample_rooms());
        let second =
            detect_conflicts(&candidate, None, &entries, &sample_courses(), &sample_rooms());
        assert_eq!(first, second);
    }

    #[test]
    fn test_conflict_wire_format() {
        let candidate = CandidateEntry::new("c1", "s1", "i1", "r2", "ST1");
        let conflicts = detect_conflicts(&candidate, None, &[], &sample_courses(), &sample_rooms());
        let v = serde_json::to_value(&conflicts[0]).unwrap();
        assert_eq!(v["type"], "ROOM_TYPE_MISMATCH");
        assert_eq!(v["severity"], "error");
    }
}
