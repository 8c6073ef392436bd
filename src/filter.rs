use crate::error::QueryResult;
use crate::record::{Field, ScheduleRecord};

/// A single narrowing step over the loaded records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring of the description, e.g. a module code.
    Module(String),
    Lecturer(String),
    Location(String),
    /// Compared verbatim, so `1/1/2024` does not match `01/01/2024`.
    Date(String),
    Time(String),
    /// Weekday name, compared case-insensitively.
    ScheduledDay(String),
}

impl Filter {
    pub fn field(&self) -> Field {
        match self {
            Filter::Module(_) => Field::Description,
            Filter::Lecturer(_) => Field::AllocatedStaffName,
            Filter::Location(_) => Field::AllocatedLocationName,
            Filter::Date(_) => Field::ActivityDate,
            Filter::Time(_) => Field::ScheduledStartTime,
            Filter::ScheduledDay(_) => Field::ScheduledDays,
        }
    }

    pub fn matches(&self, record: &ScheduleRecord) -> QueryResult<bool> {
        let value = record.field(self.field())?;
        let hit = match self {
            Filter::Module(code) => value.to_lowercase().contains(&code.to_lowercase()),
            Filter::Lecturer(wanted)
            | Filter::Location(wanted)
            | Filter::Date(wanted)
            | Filter::Time(wanted) => value == wanted.as_str(),
            Filter::ScheduledDay(day) => value.to_lowercase() == day.to_lowercase(),
        };
        Ok(hit)
    }
}

/// Keep the records that satisfy every filter, preserving input order.
///
/// Filters are applied one after another, each narrowing the survivors of the
/// previous one. The input slice is left untouched.
pub fn filter_records(
    records: &[ScheduleRecord],
    filters: &[Filter],
) -> QueryResult<Vec<ScheduleRecord>> {
    let mut current: Vec<&ScheduleRecord> = records.iter().collect();
    for filter in filters {
        let mut kept = Vec::with_capacity(current.len());
        for record in current {
            if filter.matches(record)? {
                kept.push(record);
            }
        }
        current = kept;
    }
    Ok(current.into_iter().cloned().collect())
}
