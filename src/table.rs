use crate::error::QueryResult;
use crate::record::{Field, ScheduleRecord};

/// Columns shown in a schedule listing, in display order.
pub const COLUMNS: [Field; 10] = Field::ALL;

pub fn column_titles() -> Vec<&'static str> {
    COLUMNS.iter().map(|field| field.display_name()).collect()
}

/// Cell text for each record, one inner vector per row.
pub fn project_rows(records: &[ScheduleRecord]) -> QueryResult<Vec<Vec<String>>> {
    records
        .iter()
        .map(|record| {
            COLUMNS
                .iter()
                .map(|field| record.field(*field).map(str::to_string))
                .collect::<QueryResult<Vec<String>>>()
        })
        .collect()
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(&centered(cell.as_ref(), *width));
        out.push_str(" |");
    }
    out.push('\n');
}

/// Render `records` as a bordered text table with centred cells.
pub fn render_table(records: &[ScheduleRecord]) -> QueryResult<String> {
    let titles = column_titles();
    let rows = project_rows(records)?;

    let mut widths: Vec<usize> = titles.iter().map(|t| t.chars().count()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &titles[..], &widths);
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row.as_slice(), &widths);
    }
    out.push_str(&sep);
    out.push('\n');
    Ok(out)
}
