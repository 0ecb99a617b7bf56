use super::status::EmploymentStatus;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// A single timestamped attendance record for one employee.
/// The `(employee, date, time)` triple is the uniqueness key; duplicates
/// are silently ignored at the storage layer, never overwritten.
#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub id: i64,
    pub employee: String, // canonical, space-delimited, upper-case
    pub date: NaiveDate,  // ⇔ punches.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,  // ⇔ punches.time (TEXT "HH:MM")
    pub status: EmploymentStatus,
    pub created_at: String, // ⇔ punches.created_at (TEXT, ISO8601)
}

impl PunchEvent {
    /// Constructor for punches produced by the ingest pipeline.
    /// The id is filled in by SQLite on insert.
    pub fn new(
        employee: String,
        date: NaiveDate,
        time: NaiveTime,
        status: EmploymentStatus,
    ) -> Self {
        Self {
            id: 0,
            employee,
            date,
            time,
            status,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
