use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::error::{QueryError, QueryResult};
use crate::record::{Field, ScheduleRecord};

/// Date format used by the timetable exports.
pub const ACTIVITY_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// What a query sorts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Column whose values are `dd/mm/yyyy` dates, named by CSV header.
    Date(String),
    /// Plain string comparison; used when a module filter pins the sort to
    /// the description.
    Text(Field),
}

pub fn parse_activity_date(column: &str, value: &str) -> QueryResult<NaiveDate> {
    NaiveDate::parse_from_str(value, ACTIVITY_DATE_FORMAT).map_err(|_| {
        QueryError::DateParse {
            column: column.to_string(),
            value: value.to_string(),
        }
    })
}

/// Bubble sort with early exit after a pass without swaps.
///
/// Elements are swapped only when `cmp` returns `Greater`, so equal elements
/// keep their relative order.
pub fn bubble_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if cmp(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sort `records` in place by `key`.
///
/// Fails with [`QueryError::DateParse`] on the first value that is not a
/// valid date, leaving `records` in its original order.
pub fn sort_records(
    records: &mut Vec<ScheduleRecord>,
    key: &SortKey,
    order: SortOrder,
) -> QueryResult<()> {
    if records.len() < 2 {
        return Ok(());
    }
    match key {
        SortKey::Date(column) => {
            let mut keyed = Vec::with_capacity(records.len());
            for record in records.iter() {
                let date = parse_activity_date(column, record.column(column)?)?;
                keyed.push(date);
            }
            let mut pairs: Vec<(NaiveDate, ScheduleRecord)> =
                keyed.into_iter().zip(records.drain(..)).collect();
            bubble_sort_by(&mut pairs, |a, b| order.apply(a.0.cmp(&b.0)));
            records.extend(pairs.into_iter().map(|(_, record)| record));
        }
        SortKey::Text(field) => {
            for record in records.iter() {
                record.field(*field)?;
            }
            bubble_sort_by(records.as_mut_slice(), |a, b| {
                let left = a.get(field.header()).unwrap_or_default();
                let right = b.get(field.header()).unwrap_or_default();
                order.apply(left.cmp(right))
            });
        }
    }
    Ok(())
}
