use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LoadError, LoadResult};
use crate::record::ScheduleRecord;

/// Counts reported after a successful folder load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub files_read: usize,
    pub records_loaded: usize,
    pub online_learning_skipped: usize,
}

/// All schedule records loaded during a session, in load order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ScheduleRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ScheduleRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|record| !record.is_online_learning())
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[ScheduleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Append every non-online row of every `.csv` file directly inside
    /// `folder`. Nothing is appended unless all files parse.
    pub fn load<P: AsRef<Path>>(&mut self, folder: P) -> LoadResult<LoadSummary> {
        let folder = folder.as_ref();
        let files = csv_files_in(folder)?;
        if files.is_empty() {
            warn!(folder = %folder.display(), "no CSV files found");
            return Err(LoadError::NoFilesFound {
                folder: folder.to_path_buf(),
            });
        }

        let mut summary = LoadSummary::default();
        let mut staged = Vec::new();
        for path in &files {
            let skipped = read_csv_file(path, &mut staged)?;
            summary.files_read += 1;
            summary.online_learning_skipped += skipped;
        }
        summary.records_loaded = staged.len();
        self.records.append(&mut staged);

        info!(
            folder = %folder.display(),
            files = summary.files_read,
            records = summary.records_loaded,
            skipped = summary.online_learning_skipped,
            total = self.records.len(),
            "timetable data loaded"
        );
        Ok(summary)
    }
}

fn csv_files_in(folder: &Path) -> LoadResult<Vec<PathBuf>> {
    let io_err = |source| LoadError::Io {
        path: folder.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension() == Some(OsStr::new("csv")) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one export into `out`, returning how many online rows were dropped.
fn read_csv_file(path: &Path, out: &mut Vec<ScheduleRecord>) -> LoadResult<usize> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut skipped = 0;
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        // Short rows simply lack the trailing columns.
        let record: ScheduleRecord = headers.iter().zip(row.iter()).collect();
        if record.is_online_learning() {
            skipped += 1;
            continue;
        }
        out.push(record);
    }
    debug!(file = %path.display(), skipped, "parsed CSV file");
    Ok(skipped)
}
