pub mod error;
pub mod filter;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod query;
pub mod record;
pub mod session;
pub mod sort;
pub mod store;
pub mod table;

pub use error::{LoadError, LoadResult, QueryError, QueryResult};
pub use filter::{Filter, filter_records};
pub use query::{QuerySpec, run_query};
pub use record::{Field, ONLINE_LEARNING, ScheduleRecord};
pub use session::Session;
pub use sort::{SortKey, SortOrder, bubble_sort_by, parse_activity_date, sort_records};
pub use store::{LoadSummary, RecordStore};
pub use table::{COLUMNS, column_titles, project_rows, render_table};
