use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{dtr, init_db_with_sample, setup_test_db};

#[test]
fn test_employees_lists_canonical_names_alphabetically() {
    let db_path = setup_test_db("employees_list");
    init_db_with_sample(&db_path);

    dtr()
        .args([
            "--db",
            &db_path,
            "employees",
            "--month",
            "10",
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(contains("DANIEL RABARA DOMINGO"))
        .stdout(contains("JESSICA GARCIA"))
        .stdout(contains("Page 1 of 1 (2 employees)"));
}

#[test]
fn test_employees_search_is_substring_match() {
    let db_path = setup_test_db("employees_search");
    init_db_with_sample(&db_path);

    dtr()
        .args([
            "--db",
            &db_path,
            "employees",
            "--search",
            "garcia",
            "--month",
            "10",
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(contains("JESSICA GARCIA"))
        .stdout(contains("(1 employees)"))
        .stdout(contains("DANIEL").not());
}

#[test]
fn test_employees_status_filter() {
    let db_path = setup_test_db("employees_status");
    init_db_with_sample(&db_path);

    // DANIEL RABARA DOMINGO is on the permanent roster, JESSICA GARCIA
    // defaults to job-order
    dtr()
        .args([
            "--db",
            &db_path,
            "employees",
            "--month",
            "10",
            "--year",
            "2025",
            "--status",
            "permanent",
        ])
        .assert()
        .success()
        .stdout(contains("DANIEL RABARA DOMINGO"))
        .stdout(contains("JESSICA").not());

    dtr()
        .args([
            "--db",
            &db_path,
            "employees",
            "--month",
            "10",
            "--year",
            "2025",
            "--status",
            "job-order",
        ])
        .assert()
        .success()
        .stdout(contains("JESSICA GARCIA"))
        .stdout(contains("DANIEL").not());
}

#[test]
fn test_employees_month_without_punches_is_empty() {
    let db_path = setup_test_db("employees_empty_month");
    init_db_with_sample(&db_path);

    dtr()
        .args([
            "--db",
            &db_path,
            "employees",
            "--month",
            "11",
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(contains("No employees with punches in November 2025."));
}
