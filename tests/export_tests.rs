use predicates::str::contains;
use std::fs;

mod common;
use common::{dtr, init_db_with_sample, setup_test_db, temp_out};

fn export_args<'a>(db_path: &'a str, file: &'a str, format: &'a str) -> Vec<&'a str> {
    vec![
        "--db",
        db_path,
        "export",
        "DANIEL RABARA DOMINGO",
        "--month",
        "10",
        "--year",
        "2025",
        "--format",
        format,
        "--file",
        file,
    ]
}

#[test]
fn test_export_csv_writes_full_month() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_sample(&db_path);

    dtr().args(export_args(&db_path, &out, "csv")).assert().success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("day,weekday,check_in,break_out,break_in,check_out"));
    assert!(content.contains("7:55"));
    assert!(content.contains("5:04"));
    // header + one row per calendar day of October
    assert_eq!(content.lines().count(), 32);
}

#[test]
fn test_export_json_is_dense_and_structured() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_sample(&db_path);

    dtr().args(export_args(&db_path, &out, "json")).assert().success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of day rows");

    assert_eq!(rows.len(), 31);
    assert_eq!(rows[0]["day"], 1);
    assert_eq!(rows[0]["check_in"], "7:55");
    assert_eq!(rows[0]["check_out"], "5:04");
    // a day without punches still appears, with empty slots
    assert_eq!(rows[4]["check_in"], "");
}

#[test]
fn test_export_xlsx_and_pdf_produce_files() {
    let db_path = setup_test_db("export_binary");
    init_db_with_sample(&db_path);

    let xlsx = temp_out("export_binary", "xlsx");
    dtr().args(export_args(&db_path, &xlsx, "xlsx")).assert().success();
    assert!(fs::metadata(&xlsx).map(|m| m.len() > 0).unwrap_or(false));

    let pdf = temp_out("export_binary", "pdf");
    dtr().args(export_args(&db_path, &pdf, "pdf")).assert().success();
    assert!(fs::metadata(&pdf).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_sample(&db_path);

    dtr()
        .args(export_args(&db_path, "relative_out.csv", "csv"))
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    init_db_with_sample(&db_path);

    fs::write(&out, "placeholder").expect("seed existing file");

    // non-interactive stdin answers the overwrite prompt with EOF
    dtr()
        .args(export_args(&db_path, &out, "csv"))
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    let mut forced = export_args(&db_path, &out, "csv");
    forced.push("--force");
    dtr().args(forced).assert().success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("check_in"));
}

#[test]
fn test_export_of_employee_without_punches_is_zero_filled() {
    let db_path = setup_test_db("export_zero");
    let out = temp_out("export_zero", "csv");
    init_db_with_sample(&db_path);

    dtr()
        .args([
            "--db",
            &db_path,
            "export",
            "SOMEBODY ELSE",
            "--month",
            "2",
            "--year",
            "2024",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    // leap February: header + 29 day rows, all slots empty
    assert_eq!(content.lines().count(), 30);
    assert!(content.contains("29,Thu,,,,"));
}
