// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rendering of collected records as a console table, CSV or JSON.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use prettytable::{Cell, Row, Table, format};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::{
    error::{self, Error},
    record::{COLUMNS, RepoStatsRecord, StatsDocument},
};

/// Title printed above the console table.
const TABLE_TITLE: &str = "GitHub Stats";
/// Indentation used by JSON artifacts.
const JSON_INDENT: &[u8] = b"    ";

/// Destination of the rendered records.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum OutputTarget
{
    /// Table printed to standard output.
    Console,
    /// CSV file at the given path.
    Csv(PathBuf,),
    /// JSON file at the given path.
    Json(PathBuf,),
}

impl OutputTarget
{
    /// Chooses the output from the optional `--output-file` path.
    ///
    /// The extension is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the path has any
    /// extension other than `csv` or `json`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    ///
    /// use gh_stats::OutputTarget;
    ///
    /// assert_eq!(OutputTarget::from_path(None)?, OutputTarget::Console);
    /// assert!(OutputTarget::from_path(Some(Path::new("stats.txt"))).is_err());
    /// # Ok::<(), gh_stats::Error>(())
    /// ```
    pub fn from_path(path: Option<&Path,>,) -> Result<Self, Error,>
    {
        let Some(path,) = path else {
            return Ok(Self::Console,);
        };

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str(),)
            .map(str::to_ascii_lowercase,)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv(path.to_path_buf(),),),
            "json" => Ok(Self::Json(path.to_path_buf(),),),
            _ => Err(Error::validation(format!(
                "output file must be CSV or JSON, got {}",
                path.display()
            ),),),
        }
    }
}

/// Renders `records` to the selected destination.
///
/// Files are created or truncated, fully written and flushed before this
/// returns.
///
/// # Errors
///
/// Returns an [`Error`] when the destination cannot be written or encoding
/// fails.
pub fn write_output(target: &OutputTarget, records: &[RepoStatsRecord],) -> Result<(), Error,>
{
    match target {
        OutputTarget::Console => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render_table(&mut handle, records,)
                .map_err(|source| error::output_error(Path::new("<stdout>",), source,),)
        }
        OutputTarget::Csv(path,) => {
            info!("Creating CSV");
            write_file(path, |writer| write_csv(writer, records,),)?;
            info!("CSV file created at {}", path.display());
            Ok((),)
        }
        OutputTarget::Json(path,) => {
            info!("Creating JSON");
            write_file(path, |writer| write_json(writer, records,),)?;
            info!("JSON file created at {}", path.display());
            Ok((),)
        }
    }
}

fn write_file<F,>(path: &Path, render: F,) -> Result<(), Error,>
where
    F: FnOnce(&mut BufWriter<File,>,) -> Result<(), Error,>,
{
    let file = File::create(path,).map_err(|source| error::output_error(path, source,),)?;
    let mut writer = BufWriter::new(file,);
    render(&mut writer,)?;
    writer.flush().map_err(|source| error::output_error(path, source,),)
}

/// Prints the records as a titled table with one row per record.
///
/// # Errors
///
/// Propagates I/O errors from `writer`.
pub fn render_table<W: Write,>(writer: &mut W, records: &[RepoStatsRecord],) -> io::Result<(),>
{
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS,);
    table.set_titles(Row::new(COLUMNS.iter().map(|title| Cell::new(title,).style_spec("bc",),).collect(),),);

    for record in records {
        let cells = record
            .cells()
            .iter()
            .enumerate()
            .map(|(index, value,)| Cell::new(value,).style_spec(if index == 0 { "l" } else { "c" },),)
            .collect();
        table.add_row(Row::new(cells,),);
    }

    writeln!(writer, "{TABLE_TITLE}")?;
    table.print(writer,)?;
    Ok((),)
}

/// Writes a header row followed by one row per record.
///
/// # Errors
///
/// Returns [`Error::Csv`](Error::Csv) when encoding or writing fails.
pub fn write_csv<W: Write,>(writer: W, records: &[RepoStatsRecord],) -> Result<(), Error,>
{
    let mut table = Table::new();
    table.add_row(Row::new(COLUMNS.iter().map(|title| Cell::new(title,),).collect(),),);
    for record in records {
        table.add_row(Row::new(record.cells().iter().map(|value| Cell::new(value,),).collect(),),);
    }

    table.to_csv(writer,).map(drop,).map_err(|e| Error::Csv {
        message: e.to_string(),
    },)
}

/// Writes `{"Data": [...]}` with four-space indentation and a trailing
/// newline.
///
/// # Errors
///
/// Returns [`Error::Serialize`](Error::Serialize) when encoding fails.
pub fn write_json<W: Write,>(mut writer: W, records: &[RepoStatsRecord],) -> Result<(), Error,>
{
    let document = StatsDocument {
        data: records.to_vec(),
    };

    let mut serializer =
        Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(JSON_INDENT,),);
    document.serialize(&mut serializer,)?;
    writeln!(writer).map_err(serde_json::Error::io,)?;
    Ok((),)
}
