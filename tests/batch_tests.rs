use predicates::str::contains;

mod common;
use common::{SAMPLE_LOG, dtr, init_db_with_sample, setup_test_db};

#[test]
fn test_batches_lists_upload_history() {
    let db_path = setup_test_db("batches_list");
    init_db_with_sample(&db_path);

    dtr()
        .args(["--db", &db_path, "batches"])
        .assert()
        .success()
        .stdout(contains("sample upload"))
        .stdout(contains("8"))
        .stdout(contains("Page 1 of 1 (1 batches)"));
}

#[test]
fn test_batches_with_empty_store() {
    let db_path = setup_test_db("batches_empty");

    dtr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dtr()
        .args(["--db", &db_path, "batches"])
        .assert()
        .success()
        .stdout(contains("No batches on file yet."));
}

#[test]
fn test_raw_returns_stored_text_verbatim() {
    let db_path = setup_test_db("batches_raw");
    init_db_with_sample(&db_path);

    dtr()
        .args(["--db", &db_path, "raw", "1"])
        .assert()
        .success()
        .stdout(contains(SAMPLE_LOG));
}

#[test]
fn test_raw_unknown_batch_is_not_found() {
    let db_path = setup_test_db("batches_raw_missing");
    init_db_with_sample(&db_path);

    dtr()
        .args(["--db", &db_path, "raw", "99"])
        .assert()
        .failure()
        .stderr(contains("Not found: batch 99"));
}

#[test]
fn test_reprocess_parses_again_without_persisting() {
    let db_path = setup_test_db("batches_reprocess");
    init_db_with_sample(&db_path);

    dtr()
        .args(["--db", &db_path, "reprocess", "1"])
        .assert()
        .success()
        .stdout(contains("8 lines matched"))
        .stdout(contains("Nothing was persisted"))
        .stdout(contains("DANIEL RABARA DOMINGO"));

    // still exactly one batch and the original punches
    assert_eq!(common::count_rows(&db_path, "batches"), 1);
    assert_eq!(common::count_rows(&db_path, "punches"), 8);
}

#[test]
fn test_reprocess_unknown_batch_is_not_found() {
    let db_path = setup_test_db("batches_reprocess_missing");
    init_db_with_sample(&db_path);

    dtr()
        .args(["--db", &db_path, "reprocess", "42"])
        .assert()
        .failure()
        .stderr(contains("Not found: batch 42"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("batches_log");
    init_db_with_sample(&db_path);

    dtr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("ingest"))
        .stdout(contains("sample upload"));
}
