//! Summary statistics over a store.
//!
//! Flat counters for a dashboard-style overview: entity totals,
//! theory/lab splits, and how much of the timeslot catalog is in use.

use std::collections::HashSet;

use crate::models::CourseType;
use crate::store::ScheduleStore;

/// Headline numbers describing the current store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleStats {
    /// Total courses.
    pub courses: usize,
    /// Total instructors.
    pub instructors: usize,
    /// Total rooms.
    pub rooms: usize,
    /// Total sections.
    pub sections: usize,
    /// Committed schedule entries.
    pub entries: usize,
    /// Courses delivered as theory lectures.
    pub theory_courses: usize,
    /// Courses delivered as labs.
    pub lab_courses: usize,
    /// Theory rooms.
    pub theory_rooms: usize,
    /// Lab rooms.
    pub lab_rooms: usize,
    /// Distinct timeslots referenced by committed entries.
    pub timeslots_in_use: usize,
}

impl ScheduleStats {
    /// Computes the counters from the current store state.
    pub fn collect(store: &ScheduleStore) -> Self {
        let theory_courses = store
            .courses()
            .iter()
            .filter(|c| c.course_type == CourseType::Theory)
            .count();
        let theory_rooms = store
            .rooms()
            .iter()
            .filter(|r| r.room_type == CourseType::Theory)
            .count();
        let timeslots_in_use = store
            .entries()
            .iter()
            .map(|e| e.timeslot_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            courses: store.courses().len(),
            instructors: store.instructors().len(),
            rooms: store.rooms().len(),
            sections: store.sections().len(),
            entries: store.entries().len(),
            theory_courses,
            lab_courses: store.courses().len() - theory_courses,
            theory_rooms,
            lab_rooms: store.rooms().len() - theory_rooms,
            timeslots_in_use,
        }
    }
}
