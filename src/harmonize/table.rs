//! Untyped tabular input: header row plus string cells, with the helpers the
//! source layouts share (column lookup, year melting, lenient numeric parsing).

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One (source row, year column) pair produced by [`RawTable::melt_years`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeltedCell {
    pub row: usize,
    pub year: Option<i32>,
    pub value: Option<f64>,
}

impl RawTable {
    /// Reads CSV records, skipping `skip_records` non-blank records before the
    /// header. Rows may be ragged; invalid UTF-8 is replaced rather than
    /// rejected.
    pub fn from_reader<R: Read>(reader: R, skip_records: usize) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records: Vec<Vec<String>> = Vec::new();
        for result in rdr.byte_records() {
            let record = result?;
            records.push(
                record
                    .iter()
                    .map(|f| String::from_utf8_lossy(f).into_owned())
                    .collect(),
            );
        }

        Ok(Self::from_records(records, skip_records))
    }

    /// Reads the first worksheet of an `.xlsx`/`.xls` workbook. Cells are
    /// stringified so the same lenient parsing applies as for CSV.
    pub fn from_workbook(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook {}", path.display()))?;

        let Some(sheet) = workbook.sheet_names().first().cloned() else {
            bail!("Workbook {} has no sheets", path.display());
        };
        let range = workbook
            .worksheet_range(&sheet)
            .with_context(|| format!("Failed to read sheet {:?} of {}", sheet, path.display()))?;

        let records: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        Ok(Self::from_records(records, 0))
    }

    /// Builds a table from raw records: blank records are dropped, a leading
    /// BOM is stripped, then `skip_records` records are skipped before the
    /// header.
    pub fn from_records(records: Vec<Vec<String>>, skip_records: usize) -> Self {
        let mut records: Vec<Vec<String>> = records
            .into_iter()
            .filter(|r| !r.iter().all(|f| f.trim().is_empty()))
            .collect();

        if let Some(first) = records.first_mut().and_then(|r| r.first_mut()) {
            *first = first.trim_start_matches('\u{feff}').to_string();
        }

        let mut records = records.into_iter().skip(skip_records);
        let headers = records
            .next()
            .map(|h| h.into_iter().map(|c| c.trim().to_string()).collect())
            .unwrap_or_default();

        Self {
            headers,
            rows: records.collect(),
        }
    }

    /// Index of the column named exactly `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of the first candidate that names a column.
    pub fn first_column(&self, candidates: &[&str]) -> Option<usize> {
        candidates.iter().find_map(|c| self.column(c))
    }

    /// Non-empty cell content; `None` for empty or missing cells.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }

    /// Cell content for every row of `col` (`None` when `col` is `None`).
    pub fn column_values(&self, col: Option<usize>) -> Vec<Option<String>> {
        (0..self.rows.len())
            .map(|row| col.and_then(|c| self.cell(row, c)).map(str::to_string))
            .collect()
    }

    /// Columns whose header is a four-digit year.
    pub fn year_columns(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| is_year_label(h))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_year_columns(&self) -> bool {
        self.headers.iter().any(|h| is_year_label(h))
    }

    /// Turns every year column into (year, value) pairs, one per source row,
    /// year column by year column. All other columns stay reachable through
    /// [`MeltedCell::row`].
    pub fn melt_years(&self) -> Vec<MeltedCell> {
        let mut out = Vec::with_capacity(self.rows.len() * self.year_columns().len());
        for col in self.year_columns() {
            let year = parse_year(&self.headers[col]);
            for row in 0..self.rows.len() {
                out.push(MeltedCell {
                    row,
                    year,
                    value: self.cell(row, col).and_then(parse_number),
                });
            }
        }
        out
    }
}

/// Reads a tabular file by extension: CSV, or the first sheet of an Excel
/// workbook. Any other extension is a configuration error.
pub fn read_any(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            RawTable::from_reader(file, 0)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        "xlsx" | "xls" => RawTable::from_workbook(path),
        _ => bail!("Unsupported file type: .{}", ext),
    }
}

/// Excel error cells read as blanks.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn is_year_label(label: &str) -> bool {
    label.len() == 4 && label.chars().all(|c| c.is_ascii_digit())
}

/// Lenient numeric coercion: blanks, the `..` sentinel, NaN and anything
/// unparseable become `None`. Infinities are kept for the normalizer to drop.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || s == ".." {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Year coercion: an integral number within `i32`, `2015.0` included.
pub fn parse_year(raw: &str) -> Option<i32> {
    parse_number(raw)
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .filter(|v| *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
        .map(|v| v as i32)
}
