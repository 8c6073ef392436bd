use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{QueryError, QueryResult};

/// Value of `Scheduled Days` marking a row that is dropped at load time.
pub const ONLINE_LEARNING: &str = "Online Learning";

/// The timetable columns the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Description,
    ActivityDate,
    ScheduledDays,
    ScheduledStartTime,
    ScheduledEndTime,
    Duration,
    AllocatedLocationName,
    PlannedSize,
    AllocatedStaffName,
    ZoneName,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Description,
        Field::ActivityDate,
        Field::ScheduledDays,
        Field::ScheduledStartTime,
        Field::ScheduledEndTime,
        Field::Duration,
        Field::AllocatedLocationName,
        Field::PlannedSize,
        Field::AllocatedStaffName,
        Field::ZoneName,
    ];

    /// Header name as it appears in the exported CSV files.
    pub fn header(self) -> &'static str {
        match self {
            Field::Description => "Description",
            Field::ActivityDate => "Activity Dates (Individual)",
            Field::ScheduledDays => "Scheduled Days",
            Field::ScheduledStartTime => "Scheduled Start Time",
            Field::ScheduledEndTime => "Scheduled End Time",
            Field::Duration => "Duration",
            Field::AllocatedLocationName => "Allocated Location Name",
            Field::PlannedSize => "Planned Size",
            Field::AllocatedStaffName => "Allocated Staff Name",
            Field::ZoneName => "Zone Name",
        }
    }

    /// Column title used when rendering a table.
    pub fn display_name(self) -> &'static str {
        match self {
            Field::ActivityDate => "Activity Dates",
            Field::AllocatedLocationName => "Location Name",
            Field::PlannedSize => "Size",
            Field::AllocatedStaffName => "Staff Name",
            other => other.header(),
        }
    }

    fn variant_name(self) -> &'static str {
        match self {
            Field::Description => "Description",
            Field::ActivityDate => "ActivityDate",
            Field::ScheduledDays => "ScheduledDays",
            Field::ScheduledStartTime => "ScheduledStartTime",
            Field::ScheduledEndTime => "ScheduledEndTime",
            Field::Duration => "Duration",
            Field::AllocatedLocationName => "AllocatedLocationName",
            Field::PlannedSize => "PlannedSize",
            Field::AllocatedStaffName => "AllocatedStaffName",
            Field::ZoneName => "ZoneName",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// Lowercase alphanumerics only, so "Activity Dates (Individual)",
// "activity_date" and "ActivityDate" can all be compared.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return Err(format!("unknown field '{s}'"));
        }
        Field::ALL
            .into_iter()
            .find(|field| {
                normalize(field.header()) == wanted
                    || normalize(field.display_name()) == wanted
                    || normalize(field.variant_name()) == wanted
            })
            .ok_or_else(|| format!("unknown field '{s}'"))
    }
}

/// One row of a timetable export, keyed by CSV header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRecord {
    values: BTreeMap<String, String>,
}

impl ScheduleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter keyed by a known field.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field.header().to_string(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn column(&self, column: &str) -> QueryResult<&str> {
        self.get(column).ok_or_else(|| QueryError::missing(column))
    }

    pub fn field(&self, field: Field) -> QueryResult<&str> {
        self.column(field.header())
    }

    pub fn is_online_learning(&self) -> bool {
        self.get(Field::ScheduledDays.header()) == Some(ONLINE_LEARNING)
    }
}

impl<K, V> FromIterator<(K, V)> for ScheduleRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
