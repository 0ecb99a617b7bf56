use crate::models::day_record::{DayRecord, MonthGroup};
use crate::utils::date::fmt_time_12h;
use chrono::{Datelike, NaiveTime};
use serde::Serialize;

/// Flat per-day row shared by all export writers. Slot times use the
/// 12-hour display form without the AM/PM marker, as the DTR sheet expects.
#[derive(Serialize, Clone, Debug)]
pub struct DayRow {
    pub day: u32,
    pub weekday: String,
    pub check_in: String,
    pub break_out: String,
    pub break_in: String,
    pub check_out: String,
}

fn slot(t: &Option<NaiveTime>) -> String {
    t.as_ref().map(fmt_time_12h).unwrap_or_default()
}

pub(crate) fn day_to_row(d: &DayRecord) -> DayRow {
    DayRow {
        day: d.date.day(),
        weekday: d.weekday.clone(),
        check_in: slot(&d.check_in),
        break_out: slot(&d.break_out),
        break_in: slot(&d.break_in),
        check_out: slot(&d.check_out),
    }
}

pub(crate) fn month_to_rows(group: &MonthGroup) -> Vec<DayRow> {
    group.days.iter().map(day_to_row).collect()
}

/// Header for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "day",
        "weekday",
        "check_in",
        "break_out",
        "break_in",
        "check_out",
    ]
}

/// Convert rows into a table of strings (for PDF).
pub(crate) fn rows_to_table(rows: &[DayRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            vec![
                r.day.to_string(),
                r.weekday.clone(),
                r.check_in.clone(),
                r.break_out.clone(),
                r.break_in.clone(),
                r.check_out.clone(),
            ]
        })
        .collect()
}
