#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use timeledger::core::{FixedClock, ReportCache, WorkSchedule};
use timeledger::db::DbPool;
use timeledger::db::store::EventStore;
use timeledger::models::action::EventAction;

pub fn tl() -> Command {
    cargo_bin_cmd!("timeledger")
}

/// Command whose config directory lives under `home`.
pub fn tl_home(home: &Path) -> Command {
    let mut cmd = tl();
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh database path inside a private temp dir; keep the dir alive for the test.
pub fn setup_test_db(name: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path: PathBuf = dir.path().join(format!("{}_timeledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    (dir, db_path)
}

/// Initialize the schema through the CLI in test mode.
pub fn init_db(home: &Path, db_path: &str) {
    tl_home(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").expect("valid timestamp")
}

/// Mon-Fri, 480 minutes each.
pub fn office_schedule() -> WorkSchedule {
    WorkSchedule::new([480.0, 480.0, 480.0, 480.0, 480.0, 0.0, 0.0], [0, 1, 2, 3, 4])
}

pub fn cache_at(now: &str) -> ReportCache<DbPool, WorkSchedule, FixedClock> {
    let pool = DbPool::in_memory().expect("in-memory db");
    ReportCache::with_clock(pool, office_schedule(), FixedClock(ts(now)))
}

pub fn session<S: EventStore>(store: &mut S, start: &str, stop: &str) {
    store
        .add_event(EventAction::Start, ts(start), None)
        .expect("add start");
    store
        .add_event(EventAction::Stop, ts(stop), None)
        .expect("add stop");
}
