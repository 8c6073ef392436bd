use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::filter::{Filter, filter_records};
use crate::record::{Field, ScheduleRecord};
use crate::sort::{SortKey, SortOrder, sort_records};
use crate::store::RecordStore;

/// One listing request. Empty strings leave that column unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    pub module: String,
    pub lecturer: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub scheduled_day: String,
    pub sort_by: String,
    pub ascending: bool,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            module: String::new(),
            lecturer: String::new(),
            location: String::new(),
            date: String::new(),
            time: String::new(),
            scheduled_day: String::new(),
            sort_by: String::new(),
            ascending: true,
        }
    }
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module(mut self, value: impl Into<String>) -> Self {
        self.module = value.into();
        self
    }

    pub fn lecturer(mut self, value: impl Into<String>) -> Self {
        self.lecturer = value.into();
        self
    }

    pub fn location(mut self, value: impl Into<String>) -> Self {
        self.location = value.into();
        self
    }

    pub fn date(mut self, value: impl Into<String>) -> Self {
        self.date = value.into();
        self
    }

    pub fn time(mut self, value: impl Into<String>) -> Self {
        self.time = value.into();
        self
    }

    pub fn scheduled_day(mut self, value: impl Into<String>) -> Self {
        self.scheduled_day = value.into();
        self
    }

    pub fn sort_by(mut self, value: impl Into<String>, ascending: bool) -> Self {
        self.sort_by = value.into();
        self.ascending = ascending;
        self
    }

    /// Active filters, in the order they narrow the result.
    pub fn filters(&self) -> Vec<Filter> {
        let candidates: [(&String, fn(String) -> Filter); 6] = [
            (&self.module, Filter::Module),
            (&self.lecturer, Filter::Lecturer),
            (&self.location, Filter::Location),
            (&self.date, Filter::Date),
            (&self.time, Filter::Time),
            (&self.scheduled_day, Filter::ScheduledDay),
        ];
        candidates
            .into_iter()
            .filter(|(value, _)| !value.is_empty())
            .map(|(value, make)| make(value.clone()))
            .collect()
    }

    /// The sort applied to the filtered rows, if any.
    ///
    /// A module filter always sorts by description text. Otherwise nothing
    /// is sorted unless some filter is set and a sort column was named.
    pub fn sort_key(&self) -> Option<SortKey> {
        if !self.module.is_empty() {
            return Some(SortKey::Text(Field::Description));
        }
        if self.filters().is_empty() || self.sort_by.is_empty() {
            return None;
        }
        let column = match self.sort_by.parse::<Field>() {
            Ok(field) => field.header().to_string(),
            Err(_) => self.sort_by.clone(),
        };
        Some(SortKey::Date(column))
    }

    pub fn order(&self) -> SortOrder {
        SortOrder::from_ascending(self.ascending)
    }
}

/// Filter then (conditionally) sort the store's records for one request.
pub fn run_query(store: &RecordStore, spec: &QuerySpec) -> QueryResult<Vec<ScheduleRecord>> {
    if store.is_empty() {
        return Err(QueryError::NoDataLoaded);
    }
    let filters = spec.filters();
    let mut rows = filter_records(store.records(), &filters)?;
    let sort_key = spec.sort_key();
    debug!(
        filters = filters.len(),
        matched = rows.len(),
        sort = ?sort_key,
        "query filtered"
    );
    if let Some(key) = sort_key {
        sort_records(&mut rows, &key, spec.order())?;
    }
    Ok(rows)
}
