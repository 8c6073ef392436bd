use std::io::{self, BufRead, Write};

use tracing::{error, info};

use crate::error::{LoadError, QueryError};
use crate::query::{QuerySpec, run_query};
use crate::store::RecordStore;
use crate::table::render_table;

/// Menu-driven console front end over a [`RecordStore`].
pub struct Session<R, W> {
    store: RecordStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.output)
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nTimetable Viewer Menu:")?;
            writeln!(self.output, "1. Load Data")?;
            writeln!(self.output, "2. List Schedules")?;
            writeln!(self.output, "3. Exit")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => {
                    if !self.load_data()? {
                        break;
                    }
                }
                "2" => {
                    if !self.list_schedules()? {
                        break;
                    }
                }
                "3" => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        info!("session finished");
        Ok(())
    }

    // `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn load_data(&mut self) -> io::Result<bool> {
        let Some(folder) = self.prompt("Enter the folder path containing CSV files: ")? else {
            return Ok(false);
        };
        match self.store.load(&folder) {
            Ok(summary) => writeln!(
                self.output,
                "Data loaded successfully! ({} records from {} files, {} online sessions skipped)",
                summary.records_loaded, summary.files_read, summary.online_learning_skipped
            )?,
            Err(LoadError::NoFilesFound { .. }) => {
                writeln!(self.output, "No CSV files found in the specified folder.")?
            }
            Err(err) => {
                error!(error = %err, "load failed");
                writeln!(self.output, "Error: {err}")?
            }
        }
        Ok(true)
    }

    fn list_schedules(&mut self) -> io::Result<bool> {
        let Some(spec) = self.read_query()? else {
            return Ok(false);
        };
        match run_query(&self.store, &spec).and_then(|rows| render_table(&rows)) {
            Ok(table) => write!(self.output, "{table}")?,
            Err(QueryError::NoDataLoaded) => writeln!(self.output, "Please load data first.")?,
            Err(err) => {
                error!(error = %err, "query failed");
                writeln!(self.output, "Error: {err}")?
            }
        }
        Ok(true)
    }

    fn read_query(&mut self) -> io::Result<Option<QuerySpec>> {
        let prompts = [
            "Enter module code (Leave empty for all modules): ",
            "Enter lecturer name (Leave empty for all lecturers): ",
            "Enter location/room (Leave empty for all locations): ",
            "Enter date (Leave empty for all dates): ",
            "Enter time (Leave empty for all times): ",
            "Enter scheduled day (Leave empty for all days): ",
            "Enter sorting field: ",
            "Sort in ascending order? (y/n): ",
        ];
        let mut answers = Vec::with_capacity(prompts.len());
        for message in prompts {
            match self.prompt(message)? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        let [module, lecturer, location, date, time, day, sort_by, order]: [String; 8] =
            match answers.try_into() {
                Ok(answers) => answers,
                Err(_) => return Ok(None),
            };
        Ok(Some(
            QuerySpec::new()
                .module(module)
                .lecturer(lecturer)
                .location(location)
                .date(date)
                .time(time)
                .scheduled_day(day)
                .sort_by(sort_by, order.eq_ignore_ascii_case("y")),
        ))
    }
}
