//! In-memory entity store and assignment commit protocol.
//!
//! [`ScheduleStore`] owns the five entity collections plus the committed
//! schedule entries, and is the single mutation surface of the crate.
//! There is no global state: the owning shell constructs a store, passes
//! it by reference to consumers, and drives persistence through the
//! [`Snapshot`] contract.
//!
//! Collections preserve insertion order for display stability only;
//! order is never semantically significant. Referential integrity is
//! enforced solely at admission time by the commit protocol — deleting a
//! referenced entity leaves committed entries dangling, and lookups on
//! dangling ids simply return `None`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    CandidateEntry, Course, CourseType, CourseUpdate, Instructor, InstructorUpdate, Room,
    RoomType, RoomUpdate, ScheduleEntry, Section, Timeslot, Weekday,
};
use crate::validation::{detect_conflicts, Conflict};

/// Errors surfaced by store operations.
///
/// Conflicts are data, not errors — see [`ScheduleStore::commit`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A candidate entry arrived with a blank reference field.
    /// Rejected before validation runs; nothing is recorded.
    #[error("candidate entry is missing required field `{field}`")]
    IncompleteCandidate {
        /// Wire name of the first blank field.
        field: &'static str,
    },
}

/// Serializable image of the full store state.
///
/// Field names follow the snapshot wire format (camelCase, `type` for
/// the course/room discriminant). Collections missing from a serialized
/// snapshot default to empty; an empty timeslot list is replaced by the
/// seed catalog on restore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Course collection.
    pub courses: Vec<Course>,
    /// Instructor collection.
    pub instructors: Vec<Instructor>,
    /// Room collection.
    pub rooms: Vec<Room>,
    /// Section collection.
    pub sections: Vec<Section>,
    /// Timeslot catalog.
    pub timeslots: Vec<Timeslot>,
    /// Committed schedule entries.
    pub schedule_entries: Vec<ScheduleEntry>,
}

/// The in-memory relational store.
///
/// Single-threaded by design: every mutator takes `&mut self`, so the
/// check-then-insert sequence inside [`commit`](Self::commit) is atomic
/// with respect to any safe caller.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    courses: Vec<Course>,
    instructors: Vec<Instructor>,
    rooms: Vec<Room>,
    sections: Vec<Section>,
    timeslots: Vec<Timeslot>,
    entries: Vec<ScheduleEntry>,
    revision: u64,
}

fn next_id() -> String {
    Uuid::new_v4().to_string()
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleStore {
    /// Creates an empty store with the seeded timeslot catalog.
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            instructors: Vec::new(),
            rooms: Vec::new(),
            sections: Vec::new(),
            timeslots: Timeslot::seed_catalog(),
            entries: Vec::new(),
            revision: 0,
        }
    }

    /// Restores a store from a snapshot.
    ///
    /// An empty timeslot list falls back to the seed catalog; the other
    /// collections are taken as-is.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let timeslots = if snapshot.timeslots.is_empty() {
            Timeslot::seed_catalog()
        } else {
            snapshot.timeslots
        };
        Self {
            courses: snapshot.courses,
            instructors: snapshot.instructors,
            rooms: snapshot.rooms,
            sections: snapshot.sections,
            timeslots,
            entries: snapshot.schedule_entries,
            revision: 0,
        }
    }

    /// Clones the current state into a snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            courses: self.courses.clone(),
            instructors: self.instructors.clone(),
            rooms: self.rooms.clone(),
            sections: self.sections.clone(),
            timeslots: self.timeslots.clone(),
            schedule_entries: self.entries.clone(),
        }
    }

    /// Monotonic mutation counter. The owning shell compares revisions
    /// to decide when to persist a fresh snapshot; nothing here blocks
    /// or fails on persistence.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // ---- courses ----

    /// All courses, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Looks up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Adds a course under a freshly generated id.
    pub fn add_course(
        &mut self,
        code: impl Into<String>,
        title: impl Into<String>,
        course_type: CourseType,
        credit_hours: u32,
    ) -> &Course {
        let course = Course::new(next_id(), code, title, course_type, credit_hours);
        debug!(id = %course.id, code = %course.code, "course added");
        let idx = self.courses.len();
        self.courses.push(course);
        self.touch();
        &self.courses[idx]
    }

    /// Merges the populated fields of `update` into the course.
    /// Silent no-op returning `false` when the id is absent.
    pub fn update_course(&mut self, id: &str, update: CourseUpdate) -> bool {
        match self.courses.iter_mut().find(|c| c.id == id) {
            Some(course) => {
                update.apply(course);
                debug!(id, "course updated");
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Removes a course and every section belonging to it. Committed
    /// schedule entries referencing the course are left dangling.
    /// Returns `false` when the id is absent.
    pub fn remove_course(&mut self, id: &str) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        if self.courses.len() == before {
            return false;
        }
        self.sections.retain(|s| s.course_id != id);
        debug!(id, "course removed (sections cascaded)");
        self.touch();
        true
    }

    // ---- instructors ----

    /// All instructors, in insertion order.
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    /// Looks up an instructor by id.
    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id == id)
    }

    /// Adds an instructor under a freshly generated id.
    pub fn add_instructor(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> &Instructor {
        let instructor = Instructor::new(next_id(), name, email, department);
        debug!(id = %instructor.id, "instructor added");
        let idx = self.instructors.len();
        self.instructors.push(instructor);
        self.touch();
        &self.instructors[idx]
    }

    /// Merges the populated fields of `update` into the instructor.
    /// Silent no-op returning `false` when the id is absent.
    pub fn update_instructor(&mut self, id: &str, update: InstructorUpdate) -> bool {
        match self.instructors.iter_mut().find(|i| i.id == id) {
            Some(instructor) => {
                update.apply(instructor);
                debug!(id, "instructor updated");
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Removes an instructor. No cascade to schedule entries.
    pub fn remove_instructor(&mut self, id: &str) -> bool {
        let before = self.instructors.len();
        self.instructors.retain(|i| i.id != id);
        if self.instructors.len() == before {
            return false;
        }
        debug!(id, "instructor removed");
        self.touch();
        true
    }

    // ---- rooms ----

    /// All rooms, in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Adds a room under a freshly generated id.
    pub fn add_room(
        &mut self,
        code: impl Into<String>,
        capacity: u32,
        room_type: RoomType,
        building: impl Into<String>,
    ) -> &Room {
        let room = Room::new(next_id(), code, capacity, room_type, building);
        debug!(id = %room.id, code = %room.code, "room added");
        let idx = self.rooms.len();
        self.rooms.push(room);
        self.touch();
        &self.rooms[idx]
    }

    /// Merges the populated fields of `update` into the room.
    /// Silent no-op returning `false` when the id is absent.
    pub fn update_room(&mut self, id: &str, update: RoomUpdate) -> bool {
        match self.rooms.iter_mut().find(|r| r.id == id) {
            Some(room) => {
                update.apply(room);
                debug!(id, "room updated");
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Removes a room. No cascade to schedule entries.
    pub fn remove_room(&mut self, id: &str) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id != id);
        if self.rooms.len() == before {
            return false;
        }
        debug!(id, "room removed");
        self.touch();
        true
    }

    // ---- sections ----

    /// All sections, in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Sections belonging to a course, in insertion order.
    pub fn sections_for_course(&self, course_id: &str) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.course_id == course_id)
            .collect()
    }

    /// Adds a section under a freshly generated id. The owning course is
    /// not checked for existence; a dangling `course_id` is tolerated
    /// like every other reference.
    pub fn add_section(
        &mut self,
        course_id: impl Into<String>,
        name: impl Into<String>,
    ) -> &Section {
        let section = Section::new(next_id(), course_id, name);
        debug!(id = %section.id, course_id = %section.course_id, "section added");
        let idx = self.sections.len();
        self.sections.push(section);
        self.touch();
        &self.sections[idx]
    }

    /// Removes a section. No cascade to schedule entries.
    pub fn remove_section(&mut self, id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        if self.sections.len() == before {
            return false;
        }
        debug!(id, "section removed");
        self.touch();
        true
    }

    // ---- timeslots (read-only catalog) ----

    /// The timeslot catalog, in catalog order.
    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    /// Looks up a timeslot by id.
    pub fn timeslot(&self, id: &str) -> Option<&Timeslot> {
        self.timeslots.iter().find(|t| t.id == id)
    }

    // ---- schedule entries: validation + commit protocol ----

    /// Runs the conflict rules for a candidate without mutating anything.
    ///
    /// `exclude_id` removes one committed entry from consideration so an
    /// entry under edit does not conflict with itself. Safe to call
    /// repeatedly; identical inputs yield identical conflict lists.
    pub fn validate(&self, candidate: &CandidateEntry, exclude_id: Option<&str>) -> Vec<Conflict> {
        detect_conflicts(candidate, exclude_id, &self.entries, &self.courses, &self.rooms)
    }

    /// Validates a candidate and, if it is conflict-free, commits it.
    ///
    /// All-or-nothing: `Ok` with an empty list means exactly one entry
    /// was added (retrievable via [`entries`](Self::entries)); `Ok` with
    /// conflicts means the store is untouched. A candidate with a blank
    /// reference field fails the precondition before validation runs.
    pub fn commit(&mut self, candidate: CandidateEntry) -> Result<Vec<Conflict>, StoreError> {
        if let Some(field) = candidate.missing_field() {
            return Err(StoreError::IncompleteCandidate { field });
        }

        let conflicts = self.validate(&candidate, None);
        if conflicts.is_empty() {
            let entry = candidate.into_entry(next_id());
            debug!(id = %entry.id, timeslot = %entry.timeslot_id, "schedule entry committed");
            self.entries.push(entry);
            self.touch();
        } else {
            debug!(count = conflicts.len(), "candidate rejected");
        }
        Ok(conflicts)
    }

    /// Removes a committed entry by id. Idempotent: returns `false` when
    /// the id is absent. Never re-validates the remaining set — every
    /// rule is pairwise, so removal can only reduce conflicts.
    pub fn remove_entry(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return false;
        }
        debug!(id, "schedule entry removed");
        self.touch();
        true
    }

    /// Looks up a committed entry by id.
    pub fn entry(&self, id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All committed entries, in insertion order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    // ---- entry queries ----

    /// Committed entries assigned to an instructor.
    pub fn entries_for_instructor(&self, instructor_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.instructor_id == instructor_id)
            .collect()
    }

    /// Committed entries booked into a room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.room_id == room_id)
            .collect()
    }

    /// Committed entries occupying a timeslot.
    pub fn entries_for_timeslot(&self, timeslot_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.timeslot_id == timeslot_id)
            .collect()
    }

    /// Committed entries whose timeslot covers `day` and starts at
    /// `start_time` ("HH:MM"). Entries with a dangling timeslot id are
    /// skipped. This is the grid-cell lookup of a period-by-day timetable.
    pub fn entries_at(&self, day: Weekday, start_time: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| {
                self.timeslot(&e.timeslot_id)
                    .map(|t| t.start_time == start_time && t.days.contains(&day))
                    .unwrap_or(false)
            })
            .collect()
    }
}
