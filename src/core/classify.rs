//! Time classification: parse datetime fragments to 24h canonical keys and
//! bucket each day's punches into the four duty-cycle slots.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime, Timelike};
use regex::{Captures, Regex};

/// Parses `MM/DD/YYYY H:MM[:SS] [AM|PM]` fragments via fixed numeric groups.
pub struct TimeClassifier {
    pattern: Regex,
}

impl TimeClassifier {
    pub fn new() -> Self {
        let pattern = Regex::new(
            r"(?i)(\d{1,2})/(\d{1,2})/(\d{4})\s+(\d{1,2}):(\d{2})(?::(\d{2}))?\s*(AM|PM)?",
        )
        .unwrap();
        Self { pattern }
    }

    /// 12h → 24h: PM adds 12 unless the hour is already >= 12, AM maps 12
    /// to 0. Seconds are parsed but dropped; keys keep minute precision.
    pub fn parse_datetime(&self, fragment: &str) -> AppResult<(NaiveDate, NaiveTime)> {
        let caps = self
            .pattern
            .captures(fragment)
            .ok_or_else(|| AppError::InvalidTime(fragment.to_string()))?;

        let month = num(&caps, 1);
        let day = num(&caps, 2);
        let year = caps[3]
            .parse::<i32>()
            .map_err(|_| AppError::InvalidDate(fragment.to_string()))?;
        let mut hour = num(&caps, 4);
        let minute = num(&caps, 5);

        match caps.get(7).map(|m| m.as_str().to_ascii_uppercase()) {
            Some(ref ampm) if ampm == "PM" && hour < 12 => hour += 12,
            Some(ref ampm) if ampm == "AM" && hour == 12 => hour = 0,
            _ => {}
        }

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::InvalidDate(fragment.to_string()))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| AppError::InvalidTime(fragment.to_string()))?;

        Ok((date, time))
    }
}

impl Default for TimeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn num(caps: &Captures, i: usize) -> u32 {
    // groups are all-digit by construction
    caps[i].parse().unwrap_or(0)
}

/// The four duty-cycle slots of one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutySlots {
    pub check_in: Option<NaiveTime>,
    pub break_out: Option<NaiveTime>,
    pub break_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}

/// Bucket one day's punches into duty slots.
///
/// check-in keeps the FIRST qualifying punch; noon punches fill break-out
/// then break-in, also first-fit; check-out keeps the LAST qualifying punch
/// so the final badge-out among several end-of-shift punches wins. Punches
/// in hours 0-4 and 22-23 belong to no slot (the raw event still persists).
/// The first-fit/last-fit asymmetry is deliberate; do not unify the rules.
pub fn assign_slots(punches: &[NaiveTime]) -> DutySlots {
    let mut sorted: Vec<NaiveTime> = punches.to_vec();
    sorted.sort();

    let mut slots = DutySlots::default();
    for t in sorted {
        match t.hour() {
            5..=11 => {
                if slots.check_in.is_none() {
                    slots.check_in = Some(t);
                }
            }
            12 => {
                if slots.break_out.is_none() {
                    slots.break_out = Some(t);
                } else if slots.break_in.is_none() {
                    slots.break_in = Some(t);
                }
            }
            13..=21 => slots.check_out = Some(t),
            _ => {}
        }
    }
    slots
}
