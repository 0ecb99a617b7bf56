#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dtr() -> Command {
    cargo_bin_cmd!("dtrlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dtrlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A small but realistic biometric dump: two employees, unspaced names,
/// punches out of order between employees.
pub const SAMPLE_LOG: &str = "\
danielrabaradomingo 10/01/2025 07:55:02 AM
jessicagarcia 10/01/2025 08:10:15 AM
danielrabaradomingo 10/01/2025 12:01:10 PM
danielrabaradomingo 10/01/2025 12:58:33 PM
jessicagarcia 10/01/2025 05:30:44 PM
danielrabaradomingo 10/01/2025 05:04:41 PM
danielrabaradomingo 10/02/2025 08:02:00 AM
danielrabaradomingo 10/02/2025 04:55:12 PM
";

/// Initialize the DB schema and ingest the sample dump
pub fn init_db_with_sample(db_path: &str) {
    dtr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dtr()
        .args(["--db", db_path, "ingest", "--label", "sample upload"])
        .write_stdin(SAMPLE_LOG)
        .assert()
        .success();
}

/// Count rows in an arbitrary table of the test DB
pub fn count_rows(db_path: &str, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .expect("count rows")
}
