//! Calendar reconstruction: a dense day-by-day month view merging sparse
//! punch data with the full day range.

use crate::core::classify::assign_slots;
use crate::models::day_record::{DayRecord, MonthGroup};
use crate::models::punch::PunchEvent;
use crate::utils::date::{all_days_of_month, month_label, weekday_label};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Build the calendar for one employee and month from a single pre-grouped
/// punch query. Every day 1..N gets a DayRecord; a month with zero punches
/// yields a full set of empty records, never an absent entry.
pub fn build_month(employee: &str, year: i32, month: u32, punches: &[PunchEvent]) -> MonthGroup {
    let mut by_date: BTreeMap<NaiveDate, Vec<NaiveTime>> = BTreeMap::new();
    for p in punches {
        by_date.entry(p.date).or_default().push(p.time);
    }

    let mut days = Vec::new();
    for date in all_days_of_month(year, month) {
        let mut times = by_date.get(&date).cloned().unwrap_or_default();
        times.sort();

        let slots = assign_slots(&times);

        days.push(DayRecord {
            date,
            weekday: weekday_label(&date),
            check_in: slots.check_in,
            break_out: slots.break_out,
            break_in: slots.break_in,
            check_out: slots.check_out,
            punches: times,
        });
    }

    MonthGroup {
        employee: employee.to_string(),
        year,
        month,
        label: month_label(year, month),
        days,
    }
}
