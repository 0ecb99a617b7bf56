use chrono::{NaiveDate, NaiveTime};

/// One calendar day of an employee's duty cycle, derived from the punches
/// of a single (employee, date). Not persisted.
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub weekday: String, // "Mon".."Sun"
    pub check_in: Option<NaiveTime>,
    pub break_out: Option<NaiveTime>,
    pub break_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub punches: Vec<NaiveTime>, // all of the day's punches, ascending
}

impl DayRecord {
    pub fn is_empty(&self) -> bool {
        self.punches.is_empty()
    }
}

/// A dense month view: one DayRecord per calendar day, punches or not.
#[derive(Debug, Clone)]
pub struct MonthGroup {
    pub employee: String,
    pub year: i32,
    pub month: u32,
    pub label: String, // e.g. "March 2025"
    pub days: Vec<DayRecord>,
}
