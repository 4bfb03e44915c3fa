//! Class-schedule management core.
//!
//! Records courses, sections, instructors, rooms, and a fixed weekly
//! timeslot catalog, then admits section–instructor–room–timeslot
//! assignments through a validate-then-commit protocol that detects
//! scheduling conflicts.
//!
//! # Modules
//!
//! - **`models`**: Entity types — `Course`, `Section`, `Instructor`,
//!   `Room`, `Timeslot`, `ScheduleEntry`, and the candidate form
//! - **`validation`**: Conflict rules — type mismatches, double-bookings,
//!   duplicate sections; accumulating, never short-circuiting
//! - **`store`**: The owned in-memory store — CRUD, cascade rules, the
//!   commit protocol, snapshot hydrate/dehydrate, timetable queries
//! - **`stats`**: Summary counters for dashboard-style overviews
//!
//! # Design
//!
//! The store is a plain owned value; the shell that embeds it decides
//! when to persist a [`store::Snapshot`] (the `revision` counter says
//! whether anything changed). Conflicts are returned as data, never
//! thrown: an empty conflict list is the sole admission criterion, and
//! a committed set only ever changes through [`store::ScheduleStore::commit`]
//! and [`store::ScheduleStore::remove_entry`].

pub mod models;
pub mod stats;
pub mod store;
pub mod validation;
