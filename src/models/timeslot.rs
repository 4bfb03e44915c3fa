//! Timeslot catalog.
//!
//! Timeslots are fixed reference data: six 90-minute periods per day
//! pattern, three patterns, 18 slots total. They are never created,
//! edited, or deleted at runtime; the store either restores them from a
//! snapshot or falls back to [`Timeslot::seed_catalog`].

use serde::{Deserialize, Serialize};

/// Weekday grouping a timeslot recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayPattern {
    /// Sunday / Tuesday.
    St,
    /// Monday / Wednesday.
    Mw,
    /// Thursday only.
    Ra,
}

impl DayPattern {
    /// Code prefix used in catalog ids (`"ST"`, `"MW"`, `"RA"`).
    pub fn prefix(&self) -> &'static str {
        match self {
            DayPattern::St => "ST",
            DayPattern::Mw => "MW",
            DayPattern::Ra => "RA",
        }
    }

    /// Weekdays this pattern recurs on.
    pub fn days(&self) -> &'static [Weekday] {
        match self {
            DayPattern::St => &[Weekday::Sunday, Weekday::Tuesday],
            DayPattern::Mw => &[Weekday::Monday, Weekday::Wednesday],
            DayPattern::Ra => &[Weekday::Thursday],
        }
    }
}

/// Day of the week, serialized as its full English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// A fixed weekly timeslot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeslot {
    /// Unique timeslot identifier.
    pub id: String,
    /// Display code (e.g. "ST1").
    pub code: String,
    /// Day pattern this slot recurs on.
    pub pattern: DayPattern,
    /// Wall-clock start ("HH:MM").
    pub start_time: String,
    /// Wall-clock end ("HH:MM").
    pub end_time: String,
    /// Weekdays covered (non-empty).
    pub days: Vec<Weekday>,
}

/// The six recurring periods shared by every pattern.
static PERIODS: [(&str, &str); 6] = [
    ("08:00", "09:30"),
    ("09:40", "11:10"),
    ("11:20", "12:50"),
    ("13:00", "14:30"),
    ("14:40", "16:10"),
    ("16:20", "17:50"),
];

impl Timeslot {
    /// Creates a new timeslot.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        pattern: DayPattern,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        days: Vec<Weekday>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            pattern,
            start_time: start_time.into(),
            end_time: end_time.into(),
            days,
        }
    }

    /// Builds the fixed 18-slot catalog: `ST1..ST6`, `MW1..MW6`,
    /// `RA1..RA6`, with catalog codes doubling as identifiers.
    pub fn seed_catalog() -> Vec<Timeslot> {
        let mut slots = Vec::with_capacity(18);
        for pattern in [DayPattern::St, DayPattern::Mw, DayPattern::Ra] {
            for (i, (start, end)) in PERIODS.iter().enumerate() {
                let code = format!("{}{}", pattern.prefix(), i + 1);
                slots.push(Timeslot::new(
                    code.clone(),
                    code,
                    pattern,
                    *start,
                    *end,
                    pattern.days().to_vec(),
                ));
            }
        }
        slots
    }

    /// The daily start times of the catalog periods, in order.
    /// Useful for rendering a period-by-day grid.
    pub fn period_starts() -> impl Iterator<Item = &'static str> {
        PERIODS.iter().map(|(start, _)| *start)
    }
}
