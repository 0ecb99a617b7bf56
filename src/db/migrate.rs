use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `batches` table. The content hash is UNIQUE: one row per
/// distinct raw submission, ever.
fn create_batches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS batches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            label        TEXT NOT NULL,
            raw_log      TEXT NOT NULL,
            hash         TEXT NOT NULL UNIQUE,
            record_count INTEGER NOT NULL DEFAULT 0,
            uploaded_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `punches` table. UNIQUE(employee, date, time) makes
/// INSERT OR IGNORE an atomic insert-if-absent, which is the whole
/// idempotency story for overlapping batches.
fn create_punches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            employee   TEXT NOT NULL,
            date       TEXT NOT NULL,          -- YYYY-MM-DD
            time       TEXT NOT NULL,          -- HH:MM
            status     TEXT NOT NULL DEFAULT 'job-order'
                       CHECK (status IN ('permanent','job-order')),
            created_at TEXT NOT NULL,          -- ISO 8601 timestamp
            UNIQUE (employee, date, time)
        );

        CREATE INDEX IF NOT EXISTS idx_punches_employee_date ON punches(employee, date);
        CREATE INDEX IF NOT EXISTS idx_punches_date ON punches(date);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_batches_table(conn)?;
    create_punches_table(conn)?;
    Ok(())
}
