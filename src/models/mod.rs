//! Timetable domain models.
//!
//! Plain data types for the six entity families the store manages:
//!
//! | Entity | Role |
//! |--------|------|
//! | [`Course`] | Unit of instruction, theory or lab |
//! | [`Section`] | One offering of a course |
//! | [`Instructor`] | Teaching staff member |
//! | [`Room`] | Teaching room, typed like courses |
//! | [`Timeslot`] | Fixed weekly period (read-only catalog) |
//! | [`ScheduleEntry`] | Committed section–instructor–room–timeslot binding |
//!
//! All types serialize with the snapshot wire names (camelCase, `type`
//! for the course/room discriminant).

mod course;
mod entry;
mod instructor;
mod room;
mod section;
mod timeslot;

pub use course::{Course, CourseType, CourseUpdate};
pub use entry::{CandidateEntry, ScheduleEntry};
pub use instructor::{Instructor, InstructorUpdate};
pub use room::{Room, RoomType, RoomUpdate};
pub use section::Section;
pub use timeslot::{DayPattern, Timeslot, Weekday};
