use std::fs;
use std::io::Cursor;

use tempfile::TempDir;
use timetable_viewer::{Field, RecordStore, ScheduleRecord, Session};

fn rec(desc: &str, date: &str, day: &str) -> ScheduleRecord {
    ScheduleRecord::new()
        .with(Field::Description, desc)
        .with(Field::ActivityDate, date)
        .with(Field::ScheduledDays, day)
        .with(Field::ScheduledStartTime, "09:00")
        .with(Field::ScheduledEndTime, "10:00")
        .with(Field::Duration, "1:00")
        .with(Field::AllocatedLocationName, "Room 1")
        .with(Field::PlannedSize, "30")
        .with(Field::AllocatedStaffName, "Dr Smith")
        .with(Field::ZoneName, "North")
}

fn run(store: RecordStore, script: &str) -> (RecordStore, String) {
    let mut session = Session::new(store, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    session.run().unwrap();
    let (store, output) = session.into_parts();
    (store, String::from_utf8(output).unwrap())
}

#[test]
fn menu_is_printed_and_exit_stops_the_loop() {
    let (_, output) = run(RecordStore::new(), "3\n2\n");
    assert!(output.contains("Timetable Viewer Menu:"));
    assert!(output.contains("1. Load Data"));
    assert!(output.contains("2. List Schedules"));
    assert!(output.contains("3. Exit"));
    assert!(!output.contains("Enter module code"));
}

#[test]
fn descending_date_listing_for_a_weekday() {
    let store = RecordStore::from_records(vec![
        rec("Early", "02/01/2024", "Monday"),
        rec("Late", "20/03/2024", "Monday"),
        rec("Other", "05/01/2024", "Tuesday"),
    ]);
    let (_, output) = run(store, "2\n\n\n\n\n\nmonday\nActivity Dates\nn\n3\n");

    let late = output.find("Late").expect("late row");
    let early = output.find("Early").expect("early row");
    assert!(late < early, "expected descending order:\n{output}");
    assert!(!output.contains("Other"));
}

#[test]
fn loading_through_the_menu_fills_the_store() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("week1.csv"),
        "Description,Activity Dates (Individual),Scheduled Days\n\
         CS101 Lecture,01/02/2024,Monday\n\
         CS101 Stream,01/02/2024,Online Learning\n",
    )
    .unwrap();

    let script = format!("1\n{}\n3\n", dir.path().display());
    let (store, output) = run(RecordStore::new(), &script);
    assert!(output.contains("Data loaded successfully! (1 records from 1 files, 1 online sessions skipped)"));
    assert_eq!(store.len(), 1);
}

#[test]
fn listing_reports_missing_columns() {
    let store = RecordStore::from_records(vec![
        ScheduleRecord::new()
            .with(Field::Description, "CS101 Lecture")
            .with(Field::ScheduledDays, "Monday"),
    ]);
    let (_, output) = run(store, "2\n\n\n\n\n\n\n\ny\n");
    assert!(output.contains("Error: record has no 'Activity Dates (Individual)' column"));
}

#[test]
fn folder_path_is_used_exactly_as_typed() {
    let root = TempDir::new().unwrap();
    let padded = root.path().join(" term1 ");
    fs::create_dir(&padded).unwrap();
    fs::write(
        padded.join("week1.csv"),
        "Description,Activity Dates (Individual),Scheduled Days\n\
         CS101 Lecture,01/02/2024,Monday\n",
    )
    .unwrap();

    let script = format!("1\n{}\n3\n", padded.display());
    let (store, output) = run(RecordStore::new(), &script);
    assert!(output.contains("Data loaded successfully! (1 records from 1 files, 0 online sessions skipped)"));
    assert_eq!(store.len(), 1);
}
