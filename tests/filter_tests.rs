use timetable_viewer::{Field, Filter, QueryError, ScheduleRecord, filter_records};

fn rec(desc: &str, date: &str, day: &str, start: &str, room: &str, staff: &str) -> ScheduleRecord {
    ScheduleRecord::new()
        .with(Field::Description, desc)
        .with(Field::ActivityDate, date)
        .with(Field::ScheduledDays, day)
        .with(Field::ScheduledStartTime, start)
        .with(Field::ScheduledEndTime, "")
        .with(Field::Duration, "1:00")
        .with(Field::AllocatedLocationName, room)
        .with(Field::PlannedSize, "30")
        .with(Field::AllocatedStaffName, staff)
        .with(Field::ZoneName, "North")
}

fn sample() -> Vec<ScheduleRecord> {
    vec![
        rec("CS101 Lecture", "01/02/2024", "Monday", "09:00", "Room 1", "Dr Smith"),
        rec("cs101 Lab", "03/01/2024", "Wednesday", "14:00", "Lab 2", "Dr Jones"),
        rec("MA200 Tutorial", "01/02/2024", "monday", "09:00", "Room 1", "Dr Jones"),
        rec("PH150 Seminar", "1/2/2024", "Friday", "11:00", "Room 9", "dr smith"),
    ]
}

fn descriptions(records: &[ScheduleRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.field(Field::Description).unwrap())
        .collect()
}

#[test]
fn module_filter_is_case_insensitive_substring() {
    let out = filter_records(&sample(), &[Filter::Module("Cs101".into())]).unwrap();
    assert_eq!(descriptions(&out), vec!["CS101 Lecture", "cs101 Lab"]);
}

#[test]
fn lecturer_filter_is_case_sensitive_exact() {
    let out = filter_records(&sample(), &[Filter::Lecturer("Dr Smith".into())]).unwrap();
    assert_eq!(descriptions(&out), vec!["CS101 Lecture"]);

    let out = filter_records(&sample(), &[Filter::Lecturer("Dr".into())]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn location_filter_is_exact() {
    let out = filter_records(&sample(), &[Filter::Location("Room 1".into())]).unwrap();
    assert_eq!(descriptions(&out), vec!["CS101 Lecture", "MA200 Tutorial"]);
}

#[test]
fn date_filter_does_not_normalize() {
    let out = filter_records(&sample(), &[Filter::Date("01/02/2024".into())]).unwrap();
    assert_eq!(descriptions(&out), vec!["CS101 Lecture", "MA200 Tutorial"]);

    let out = filter_records(&sample(), &[Filter::Date("1/2/2024".into())]).unwrap();
    assert_eq!(descriptions(&out), vec!["PH150 Seminar"]);
}

#[test]
fn time_filter_matches_start_time() {
    let out = filter_records(&sample(), &[Filter::Time("14:00".into())]).unwrap();
    assert_eq!(descriptions(&out), vec!["cs101 Lab"]);
}

#[test]
fn scheduled_day_filter_ignores_case_but_not_partial_names() {
    let out = filter_records(&sample(), &[Filter::ScheduledDay("MONDAY".into())]).unwrap();
    assert_eq!(descriptions(&out), vec!["CS101 Lecture", "MA200 Tutorial"]);

    let out = filter_records(&sample(), &[Filter::ScheduledDay("Mon".into())]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn no_filters_returns_everything_in_order() {
    let records = sample();
    let out = filter_records(&records, &[]).unwrap();
    assert_eq!(out, records);
}

#[test]
fn combined_filters_are_a_conjunction() {
    let records = sample();
    let by_room = Filter::Location("Room 1".into());
    let by_staff = Filter::Lecturer("Dr Jones".into());

    let both = filter_records(&records, &[by_room.clone(), by_staff.clone()]).unwrap();
    let room_only = filter_records(&records, &[by_room]).unwrap();
    let staff_only = filter_records(&records, &[by_staff]).unwrap();

    assert_eq!(descriptions(&both), vec!["MA200 Tutorial"]);
    for record in &both {
        assert!(room_only.contains(record));
        assert!(staff_only.contains(record));
    }
}

#[test]
fn filter_order_does_not_change_the_result() {
    let records = sample();
    let a = Filter::Date("01/02/2024".into());
    let b = Filter::Time("09:00".into());
    let forward = filter_records(&records, &[a.clone(), b.clone()]).unwrap();
    let backward = filter_records(&records, &[b, a]).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn input_is_not_mutated() {
    let records = sample();
    let snapshot = records.clone();
    let _ = filter_records(&records, &[Filter::Module("MA".into())]).unwrap();
    assert_eq!(records, snapshot);
}

#[test]
fn missing_column_is_reported() {
    let records = vec![ScheduleRecord::new().with(Field::Description, "CS101 Lecture")];
    let err = filter_records(&records, &[Filter::Lecturer("Dr Smith".into())]).unwrap_err();
    assert_eq!(
        err,
        QueryError::MissingField {
            column: "Allocated Staff Name".into()
        }
    );
}
