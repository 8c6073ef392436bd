use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a folder of timetable CSV exports.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No CSV files found in {}", folder.display())]
    NoFilesFound { folder: PathBuf },

    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Failures raised while filtering, sorting, or projecting records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("no schedule data loaded")]
    NoDataLoaded,

    #[error("cannot parse '{value}' in column '{column}' as a dd/mm/yyyy date")]
    DateParse { column: String, value: String },

    #[error("record has no '{column}' column")]
    MissingField { column: String },
}

impl QueryError {
    pub(crate) fn missing(column: impl Into<String>) -> Self {
        QueryError::MissingField {
            column: column.into(),
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
pub type QueryResult<T> = Result<T, QueryError>;
