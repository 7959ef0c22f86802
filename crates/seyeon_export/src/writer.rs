use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;
use polars::prelude::*;

use crate::error::ExportError;
use crate::row::{HEADER, ListingRow};

/// One string column per `HEADER` entry.
pub fn rows_to_frame(rows: &[ListingRow]) -> PolarsResult<DataFrame> {
    let fields: Vec<[&str; 8]> = rows.iter().map(ListingRow::fields).collect();

    let columns = HEADER
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Column::new(
                (*name).into(),
                fields.iter().map(|f| f[i]).collect::<Vec<&str>>(),
            )
        })
        .collect::<Vec<_>>();

    DataFrame::new(columns)
}

/// Header line, then one line per row. Fields containing a comma, quote or
/// line break are quoted.
pub fn write_csv<W: Write>(rows: &[ListingRow], writer: &mut W) -> Result<(), ExportError> {
    let mut df = rows_to_frame(rows)?;

    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(b',')
        .with_quote_char(b'"')
        .with_quote_style(QuoteStyle::Necessary)
        .finish(&mut df)?;

    Ok(())
}

/// Create or truncate `path` and write the table into it.
pub fn export_csv(rows: &[ListingRow], path: &Path) -> Result<(), ExportError> {
    let mut file = File::create(path).map_err(ExportError::Create)?;
    write_csv(rows, &mut file)?;
    file.flush()?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
