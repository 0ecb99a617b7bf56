use crate::errors::{AppError, AppResult};
use crate::models::batch::RawLogBatch;
use crate::models::punch::PunchEvent;
use crate::models::status::EmploymentStatus;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

/// Outcome of an insert-if-absent on the `(employee, date, time)` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

// ---------------------------------------------------------------------------
// punches
// ---------------------------------------------------------------------------

/// Atomic insert-if-absent. The UNIQUE constraint resolves conflicts at the
/// storage layer, so concurrent ingestion of overlapping batches converges
/// to the same row set regardless of interleaving.
pub fn insert_punch_if_absent(conn: &Connection, punch: &PunchEvent) -> AppResult<InsertOutcome> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO punches (employee, date, time, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            punch.employee,
            punch.date_str(),
            punch.time_str(),
            punch.status.to_db_str(),
            punch.created_at,
        ],
    )?;

    Ok(if changed == 0 {
        InsertOutcome::AlreadyExists
    } else {
        InsertOutcome::Inserted
    })
}

pub fn map_punch(row: &Row) -> Result<PunchEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;
    let status_str: String = row.get("status")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let status = EmploymentStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(PunchEvent {
        id: row.get("id")?,
        employee: row.get("employee")?,
        date,
        time,
        status,
        created_at: row.get("created_at")?,
    })
}

/// Load one employee's punches for one month, date and time ascending.
/// One pre-grouped query per (employee, period); callers never go back to
/// the store day by day.
pub fn load_month_punches(
    conn: &Connection,
    employee: &str,
    year: i32,
    month: u32,
    status: Option<EmploymentStatus>,
) -> AppResult<Vec<PunchEvent>> {
    let ym = format!("{year:04}-{month:02}");

    let mut sql = String::from(
        "SELECT id, employee, date, time, status, created_at
         FROM punches
         WHERE employee = ?1 AND strftime('%Y-%m', date) = ?2",
    );
    let mut values: Vec<String> = vec![employee.to_string(), ym];

    if let Some(s) = status {
        sql.push_str(" AND status = ?3");
        values.push(s.to_db_str().to_string());
    }

    sql.push_str(" ORDER BY date ASC, time ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), map_punch)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All distinct year-months on file for an employee, ascending.
pub fn punch_months(conn: &Connection, employee: &str) -> AppResult<Vec<(i32, u32)>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT strftime('%Y-%m', date) AS ym
         FROM punches
         WHERE employee = ?1
         ORDER BY ym ASC",
    )?;

    let rows = stmt.query_map([employee], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let ym = r?;
        if let Some((y, m)) = ym.split_once('-')
            && let (Ok(year), Ok(month)) = (y.parse::<i32>(), m.parse::<u32>())
        {
            out.push((year, month));
        }
    }
    Ok(out)
}

/// Distinct canonical employee names with punches in the given month,
/// stable alphabetical order, paginated. Returns (page of names, total).
pub fn distinct_employees(
    conn: &Connection,
    search: Option<&str>,
    year: i32,
    month: u32,
    status: Option<EmploymentStatus>,
    page: usize,
    per_page: usize,
) -> AppResult<(Vec<String>, i64)> {
    let ym = format!("{year:04}-{month:02}");

    let mut conditions = vec!["strftime('%Y-%m', date) = ?".to_string()];
    let mut values: Vec<String> = vec![ym];

    if let Some(term) = search {
        conditions.push("employee LIKE ?".to_string());
        values.push(format!("%{}%", term.to_uppercase()));
    }

    if let Some(s) = status {
        conditions.push("status = ?".to_string());
        values.push(s.to_db_str().to_string());
    }

    let where_clause = conditions.join(" AND ");

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(DISTINCT employee) FROM punches WHERE {where_clause}"),
        params_from_iter(values.iter()),
        |row| row.get(0),
    )?;

    let offset = page.saturating_sub(1) * per_page;
    let sql = format!(
        "SELECT DISTINCT employee FROM punches WHERE {where_clause}
         ORDER BY employee ASC LIMIT {per_page} OFFSET {offset}"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
        row.get::<_, String>(0)
    })?;

    let mut names = Vec::new();
    for r in rows {
        names.push(r?);
    }
    Ok((names, total))
}

// ---------------------------------------------------------------------------
// batches
// ---------------------------------------------------------------------------

fn map_batch(row: &Row) -> Result<RawLogBatch> {
    Ok(RawLogBatch {
        id: row.get("id")?,
        label: row.get("label")?,
        raw_log: row.get("raw_log")?,
        hash: row.get("hash")?,
        record_count: row.get("record_count")?,
        uploaded_at: row.get("uploaded_at")?,
    })
}

pub fn insert_batch(
    conn: &Connection,
    label: &str,
    raw_log: &str,
    hash: &str,
    record_count: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO batches (label, raw_log, hash, record_count, uploaded_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![label, raw_log, hash, record_count, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_batch_by_hash(conn: &Connection, hash: &str) -> AppResult<Option<RawLogBatch>> {
    let batch = conn
        .query_row(
            "SELECT id, label, raw_log, hash, record_count, uploaded_at
             FROM batches WHERE hash = ?1",
            [hash],
            map_batch,
        )
        .optional()?;
    Ok(batch)
}

pub fn get_batch(conn: &Connection, id: i64) -> AppResult<Option<RawLogBatch>> {
    let batch = conn
        .query_row(
            "SELECT id, label, raw_log, hash, record_count, uploaded_at
             FROM batches WHERE id = ?1",
            [id],
            map_batch,
        )
        .optional()?;
    Ok(batch)
}

pub fn count_batches(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM batches", [], |row| row.get(0))?;
    Ok(n)
}

/// Upload history, newest first.
pub fn list_batches(
    conn: &Connection,
    page: usize,
    per_page: usize,
) -> AppResult<Vec<RawLogBatch>> {
    let offset = page.saturating_sub(1) * per_page;

    let mut stmt = conn.prepare(
        "SELECT id, label, raw_log, hash, record_count, uploaded_at
         FROM batches
         ORDER BY id DESC
         LIMIT ?1 OFFSET ?2",
    )?;

    let rows = stmt.query_map(params![per_page as i64, offset as i64], map_batch)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
