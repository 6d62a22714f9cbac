use std::collections::HashSet;
use std::fs;

use chrono::{FixedOffset, TimeZone};
use duty_roster::clock::FixedClock;
use duty_roster::export::{CsvSink, MemorySink};
use duty_roster::parser::CsvSource;
use duty_roster::schedule::{execute, run, AssignmentEngine, RosterSource};
use duty_roster::{Result, RosterError};

fn rows(rows: &[&[&'static str]]) -> Vec<Vec<&'static str>> {
    rows.iter().map(|r| r.to_vec()).collect()
}

fn clock() -> FixedClock {
    let jst = FixedOffset::east_opt(9 * 3600).unwrap();
    FixedClock(jst.with_ymd_and_hms(2024, 4, 1, 6, 30, 0).unwrap())
}

struct StaticSource {
    duties: Vec<Vec<String>>,
    members: Vec<Vec<String>>,
}

impl StaticSource {
    fn new(duties: &[&[&str]], members: &[&[&str]]) -> Self {
        let own = |rows: &[&[&str]]| -> Vec<Vec<String>> {
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect()
        };
        Self {
            duties: own(duties),
            members: own(members),
        }
    }
}

impl RosterSource for StaticSource {
    fn duty_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.duties.clone())
    }

    fn member_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.members.clone())
    }
}

#[test]
fn test_monday_scenario() {
    for seed in 0..20 {
        let duties = rows(&[&["Monday", "Trash", "Dishes"]]);
        let members = rows(&[&["Alice", "2"], &["Bob", "0"], &["Carol", "0"]]);

        let report = run(&duties, &members, "label", &mut AssignmentEngine::seeded(seed)).unwrap();

        let monday = &report.days[0];
        assert_eq!(monday.day, "Monday");
        let duties: Vec<&str> = monday.assignments.iter().map(|a| a.duty.as_str()).collect();
        assert_eq!(duties, vec!["Trash", "Dishes"]);
        let assignees: HashSet<&str> = monday.assignments.iter().map(|a| a.assignee.as_str()).collect();
        assert_eq!(assignees, HashSet::from(["Bob", "Carol"]));

        assert_eq!(report.count_of("Alice"), Some(2));
        assert_eq!(report.count_of("Bob"), Some(1));
        assert_eq!(report.count_of("Carol"), Some(1));
    }
}

#[test]
fn test_counts_grow_by_assignments_made() {
    let duties = rows(&[
        &["Monday", "Trash", "Dishes", ""],
        &["Tuesday", "Trash", "", ""],
        &["Wednesday", "Trash", "Dishes", "Floors"],
        &["Thursday", "Dishes", "", ""],
    ]);
    let members = rows(&[&["Alice", "4"], &["Bob", "1"], &["Carol", "0"], &["Dave", "7"]]);

    let report = run(&duties, &members, "label", &mut AssignmentEngine::seeded(17)).unwrap();

    assert_eq!(report.assignments_made(), 7);
    assert_eq!(report.final_total() - report.initial_total, 7);
}

#[test]
fn test_days_keep_input_order() {
    let duties = rows(&[&["Sunday", "Trash"], &["Monday", "Trash"], &["Saturday", "Trash"]]);
    let members = rows(&[&["Alice", "0"]]);

    let report = run(&duties, &members, "label", &mut AssignmentEngine::seeded(1)).unwrap();

    let days: Vec<&str> = report.days.iter().map(|d| d.day.as_str()).collect();
    assert_eq!(days, vec!["Sunday", "Monday", "Saturday"]);
    assert_eq!(report.count_of("Alice"), Some(3));
}

#[test]
fn test_fixed_seed_is_repeatable() {
    let duties = rows(&[&["Monday", "Trash", "Dishes"], &["Tuesday", "Trash", "Dishes"]]);
    let members = rows(&[&["Alice", "0"], &["Bob", "0"], &["Carol", "0"], &["Dave", "0"], &["Erin", "0"]]);

    let first = run(&duties, &members, "a", &mut AssignmentEngine::seeded(2024)).unwrap();
    let second = run(&duties, &members, "b", &mut AssignmentEngine::seeded(2024)).unwrap();

    assert_eq!(first.days, second.days);
}

#[test]
fn test_execute_labels_and_persists() {
    let source = StaticSource::new(&[&["Monday", "Trash"]], &[&["Alice", "0"], &["Bob", "3"]]);
    let mut sink = MemorySink::default();

    let report = execute(&source, &mut sink, &clock(), &mut AssignmentEngine::seeded(0)).unwrap();

    assert_eq!(report.label, "20240401_063000");
    assert_eq!(sink.reports.len(), 1);
    assert_eq!(sink.reports[0].count_of("Alice"), Some(1));
}

#[test]
fn test_failed_run_persists_nothing() {
    let mut sink = MemorySink::default();

    let bad_members = StaticSource::new(&[&["Monday", "Trash"]], &[&["Alice"]]);
    let result = execute(&bad_members, &mut sink, &clock(), &mut AssignmentEngine::seeded(0));
    assert!(matches!(result, Err(RosterError::Validation(_))));

    let bad_duties = StaticSource::new(&[&["Monday", "Trash"], &["Tuesday", ""]], &[&["Alice", "0"]]);
    let result = execute(&bad_duties, &mut sink, &clock(), &mut AssignmentEngine::seeded(0));
    assert!(matches!(result, Err(RosterError::Validation(_))));

    let no_members = StaticSource::new(&[&["Monday", "Trash"]], &[]);
    let result = execute(&no_members, &mut sink, &clock(), &mut AssignmentEngine::seeded(0));
    assert!(matches!(result, Err(RosterError::Validation(_))));

    assert!(sink.reports.is_empty());
}

#[test]
fn test_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let duties_path = dir.path().join("duties.csv");
    let members_path = dir.path().join("members.csv");
    fs::write(&duties_path, "day,duty1,duty2\nMonday,Trash,Dishes\nTuesday,Trash,\n").unwrap();
    fs::write(&members_path, "name,count\nAlice,2\nBob,0\nCarol,0\n").unwrap();

    let source = CsvSource::new(&duties_path, &members_path);
    let mut sink = CsvSink::new(dir.path().join("output"), &members_path);
    let report = execute(&source, &mut sink, &clock(), &mut AssignmentEngine::seeded(3)).unwrap();

    assert!(sink.roster_csv_path("20240401_063000").exists());
    assert!(sink.roster_json_path("20240401_063000").exists());

    // The rewritten member sheet feeds the next run
    let reloaded = source.member_rows().unwrap();
    let counts: Vec<(String, u32)> = reloaded
        .iter()
        .map(|row| (row[0].clone(), row[1].parse().unwrap()))
        .collect();
    let expected: Vec<(String, u32)> = report
        .candidates
        .iter()
        .map(|c| (c.name().to_string(), c.count()))
        .collect();
    assert_eq!(counts, expected);
    assert_eq!(report.final_total(), 5);
}

#[test]
fn test_missing_input_file_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let members_path = dir.path().join("members.csv");
    fs::write(&members_path, "name,count\nAlice,2\n").unwrap();

    let source = CsvSource::new(dir.path().join("missing.csv"), &members_path);
    let mut sink = CsvSink::new(dir.path().join("output"), &members_path);
    let result = execute(&source, &mut sink, &clock(), &mut AssignmentEngine::seeded(3));

    assert!(matches!(result, Err(RosterError::MissingInput(_))));
    assert!(!dir.path().join("output").exists());
    assert_eq!(fs::read_to_string(&members_path).unwrap(), "name,count\nAlice,2\n");
}

#[test]
fn test_headerless_sheets_survive_repeated_runs() {
    let dir = tempfile::tempdir().unwrap();
    let duties_path = dir.path().join("duties.csv");
    let members_path = dir.path().join("members.csv");
    fs::write(&duties_path, "Monday,Trash\n").unwrap();
    fs::write(&members_path, "Alice,0\nBob,0\n").unwrap();

    let mut source = CsvSource::new(&duties_path, &members_path);
    source.skip_header = false;
    let mut sink = CsvSink::new(dir.path().join("output"), &members_path);
    sink.write_header = false;

    execute(&source, &mut sink, &clock(), &mut AssignmentEngine::seeded(4)).unwrap();
    let second = execute(&source, &mut sink, &clock(), &mut AssignmentEngine::seeded(4)).unwrap();

    // Each candidate has served once after two single-duty runs
    assert_eq!(second.count_of("Alice"), Some(1));
    assert_eq!(second.count_of("Bob"), Some(1));
    let sheet = fs::read_to_string(&members_path).unwrap();
    assert!(!sheet.contains("name,count"));
    assert_eq!(sheet.lines().count(), 2);
}
