use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Every calendar day of a month, ascending. Leap years come out right
/// because the walk stops when the month rolls over.
pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    all_days_of_month(year, month).len() as u32
}

/// Month display label, e.g. "March 2025".
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// Short weekday label, "Mon".."Sun".
pub fn weekday_label(date: &NaiveDate) -> String {
    date.format("%a").to_string()
}

/// 12-hour display without the AM/PM marker, e.g. "8:00", "5:04".
pub fn fmt_time_12h(t: &NaiveTime) -> String {
    let (_, hour) = t.hour12();
    format!("{}:{:02}", hour, t.minute())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
