use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rov, setup_test_db, show_json};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rov()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_show_computes_today_and_weekly() {
    let db_path = setup_test_db("show_today");
    init_db(&db_path);

    rov()
        .args([
            "--db", &db_path, "--test", "show", "--planned", "17:25", "--actual", "19:00",
        ])
        .assert()
        .success()
        .stdout(contains("Today's overtime").and(contains("1:35")))
        .stdout(contains("Grand total").not());
}

#[test]
fn test_show_early_leave_is_zero() {
    let db_path = setup_test_db("show_early");
    init_db(&db_path);

    let v = show_json(&db_path, &["--planned", "17:25", "--actual", "16:10"]);
    assert_eq!(v["today"], "0:00");
    assert_eq!(v["weekly_total"], "0:00");
}

#[test]
fn test_save_then_merge_scenario() {
    let db_path = setup_test_db("save_merge");
    init_db(&db_path);

    rov()
        .args([
            "--db", &db_path, "--test", "save", "--planned", "17:25", "--actual", "19:00",
        ])
        .assert()
        .success()
        .stdout(contains("1:35"));

    // actual end is back at the default, so nothing extra accrues
    let v = show_json(&db_path, &[]);
    assert_eq!(v["weekly_overtime_minutes"], 95);
    assert_eq!(v["today"], "0:00");
    assert_eq!(v["weekly_total"], "1:35");
    assert!(v.get("grand_total").is_none());

    rov()
        .args(["--db", &db_path, "--test", "merge"])
        .assert()
        .success()
        .stdout(contains("Grand total").and(contains("1:35")));

    let v = show_json(&db_path, &[]);
    assert_eq!(v["weekly_overtime_minutes"], 0);
    assert_eq!(v["total_overtime_minutes"], 95);
}

#[test]
fn test_merge_includes_today_and_prior_total() {
    let db_path = setup_test_db("merge_today");
    init_db(&db_path);

    rov()
        .args(["--db", &db_path, "--test", "set", "--weekly", "100", "--total", "230"])
        .assert()
        .success();

    rov()
        .args([
            "--db", &db_path, "--test", "merge", "--planned", "17:00", "--actual", "17:30",
        ])
        .assert()
        .success()
        .stdout(contains("4:00"));

    let v = show_json(&db_path, &[]);
    assert_eq!(v["weekly_overtime_minutes"], 0);
    // 1:00 + 0:30 + 2:30
    assert_eq!(v["total_overtime_minutes"], 240);
}

#[test]
fn test_set_normalizes_raw_digits() {
    let db_path = setup_test_db("set_digits");
    init_db(&db_path);

    rov()
        .args(["--db", &db_path, "--test", "set", "--weekly", "330"])
        .assert()
        .success()
        .stdout(contains("3:30"));

    rov()
        .args(["--db", &db_path, "--test", "set", "--total", "99"])
        .assert()
        .success()
        .stdout(contains("0:59"));

    let v = show_json(&db_path, &[]);
    assert_eq!(v["weekly_overtime_minutes"], 210);
    assert_eq!(v["total_overtime_minutes"], 59);
}

#[test]
fn test_reset_all_is_idempotent() {
    let db_path = setup_test_db("reset_all");
    init_db(&db_path);

    rov()
        .args(["--db", &db_path, "--test", "set", "--weekly", "45", "--total", "1200"])
        .assert()
        .success();

    for _ in 0..2 {
        rov()
            .args(["--db", &db_path, "--test", "reset"])
            .assert()
            .success();

        let v = show_json(&db_path, &[]);
        assert_eq!(v["weekly_overtime_minutes"], 0);
        assert_eq!(v["total_overtime_minutes"], 0);
    }
}

#[test]
fn test_reset_weekly_keeps_total() {
    let db_path = setup_test_db("reset_weekly");
    init_db(&db_path);

    rov()
        .args(["--db", &db_path, "--test", "set", "--weekly", "45", "--total", "1200"])
        .assert()
        .success();

    rov()
        .args(["--db", &db_path, "--test", "reset", "--weekly"])
        .assert()
        .success();

    let v = show_json(&db_path, &[]);
    assert_eq!(v["weekly_overtime_minutes"], 0);
    assert_eq!(v["total_overtime_minutes"], 720);
}

#[test]
fn test_malformed_times_degrade_to_zero() {
    let db_path = setup_test_db("malformed");
    init_db(&db_path);

    // planned unreadable => 0:00, so the whole actual time counts
    let v = show_json(&db_path, &["--planned", "half past five", "--actual", "1:15"]);
    assert_eq!(v["planned_end"], "0:00");
    assert_eq!(v["today"], "1:15");
}

#[test]
fn test_show_without_init_starts_from_zero() {
    let db_path = setup_test_db("no_init");

    let v = show_json(&db_path, &[]);
    assert_eq!(v["planned_end"], "17:25");
    assert_eq!(v["actual_end"], "17:25");
    assert_eq!(v["weekly_overtime_minutes"], 0);
    assert_eq!(v["total_overtime_minutes"], 0);
}

#[test]
fn test_log_records_commits() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);

    rov()
        .args([
            "--db", &db_path, "--test", "save", "--planned", "17:25", "--actual", "18:00",
        ])
        .assert()
        .success();
    rov()
        .args(["--db", &db_path, "--test", "merge"])
        .assert()
        .success();

    rov()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("save").and(contains("merge")))
        .stdout(contains("total now 0:35"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);

    rov()
        .args(["--db", &db_path, "--test", "set", "--weekly", "120"])
        .assert()
        .success();

    rov()
        .args(["--db", &db_path, "--test", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("weeklyOvertimeMinutes: 80"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_config_print_in_test_mode() {
    let db_path = setup_test_db("config_print");

    rov()
        .args(["--db", &db_path, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_end_time: 17:25").or(contains("default_end_time: '17:25'")))
        .stdout(contains(db_path.as_str()));
}
