use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::build_month;
use crate::core::ingest::LogParser;
use crate::db::pool::DbPool;
use crate::db::queries::{load_month_punches, punch_months};
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::utils::colors::{RESET, color_for_slot};
use crate::utils::date::{fmt_time_12h, today};
use chrono::{Datelike, NaiveTime};
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        employee,
        month,
        year,
        status,
    } = cmd
    {
        let rules = cfg.name_rules();
        let canonical = LogParser::new(rules).canonical_name(employee);

        let mut pool = DbPool::new(&cfg.database)?;

        // no period given: walk every month on file for this employee
        let periods: Vec<(i32, u32)> = if month.is_none() && year.is_none() {
            let on_file = punch_months(&pool.conn, &canonical)?;
            if on_file.is_empty() {
                vec![(today().year(), today().month())]
            } else {
                on_file
            }
        } else {
            vec![(
                year.unwrap_or_else(|| today().year()),
                month.unwrap_or_else(|| today().month()),
            )]
        };

        for (y, m) in periods {
            let punches = load_month_punches(&pool.conn, &canonical, y, m, *status)?;
            let group = build_month(&canonical, y, m, &punches);

            println!("📅 {} | {}\n", group.employee, group.label);

            print_calendar(&group.days);

            let punched_days = group.days.iter().filter(|d| !d.is_empty()).count();
            println!(
                "{} of {} days have punches ({} punch events).",
                punched_days,
                group.days.len(),
                punches.len()
            );
        }
    }
    Ok(())
}

fn slot_cell(t: &Option<NaiveTime>) -> String {
    t.as_ref().map(fmt_time_12h).unwrap_or_default()
}

/// Fixed-width calendar table; empty slots are dimmed so worked days
/// stand out.
fn print_calendar(days: &[DayRecord]) {
    let headers = ["Day", "WD", "Check In", "Break Out", "Break In", "Check Out"];
    let widths = [3usize, 3, 9, 9, 9, 9];

    for (h, w) in headers.iter().zip(widths) {
        print!("{:<width$}  ", h, width = w);
    }
    println!();
    for w in widths {
        print!("{}  ", "-".repeat(w));
    }
    println!();

    for d in days {
        let cells = [
            d.date.day().to_string(),
            d.weekday.clone(),
            slot_cell(&d.check_in),
            slot_cell(&d.break_out),
            slot_cell(&d.break_in),
            slot_cell(&d.check_out),
        ];

        for (i, cell) in cells.iter().enumerate() {
            let pad = widths[i].saturating_sub(UnicodeWidthStr::width(cell.as_str()));
            if i >= 2 {
                print!("{}{}{}{}  ", color_for_slot(cell), cell, RESET, " ".repeat(pad));
            } else {
                print!("{}{}  ", cell, " ".repeat(pad));
            }
        }
        println!();
    }
    println!();
}
