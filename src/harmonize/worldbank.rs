//! World Bank bulk downloads: a ZIP holding `API_<code>_....csv` with a
//! two-line preamble and one column per year.

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

use super::table::RawTable;
use crate::observation::IndicatorObservation;

pub const SOURCE: &str = "WorldBank";

/// Non-blank lines before the header row.
const PREAMBLE_RECORDS: usize = 2;

/// Opens a World Bank ZIP at `path` and converts its data sheet to tidy rows.
pub fn tidy_wb_zip(
    path: &Path,
    indicator_id: &str,
    unit: &str,
) -> Result<Vec<IndicatorObservation>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    tidy_wb_archive(file, indicator_id, unit)
        .with_context(|| format!("Failed to read {}", path.display()))
}

pub fn tidy_wb_archive<R: Read + Seek>(
    reader: R,
    indicator_id: &str,
    unit: &str,
) -> Result<Vec<IndicatorObservation>> {
    let mut archive = ZipArchive::new(reader)?;

    let csv_name = archive
        .file_names()
        .filter(|n| n.starts_with("API_") && n.to_lowercase().ends_with(".csv"))
        .min()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("No API_*.csv entry in archive"))?;
    debug!(entry = %csv_name, "Reading World Bank data sheet");

    let mut buf = Vec::new();
    archive.by_name(&csv_name)?.read_to_end(&mut buf)?;
    let table = RawTable::from_reader(buf.as_slice(), PREAMBLE_RECORDS)?;

    Ok(tidy_wb_table(&table, indicator_id, unit))
}

pub fn tidy_wb_table(
    table: &RawTable,
    indicator_id: &str,
    unit: &str,
) -> Vec<IndicatorObservation> {
    let names = table.column_values(table.column("Country Name"));
    let codes = table.column_values(table.column("Country Code"));
    let base = IndicatorObservation::new(indicator_id, unit, SOURCE);

    table
        .melt_years()
        .into_iter()
        .map(|m| {
            base.clone()
                .with_country(codes[m.row].clone(), names[m.row].clone())
                .with_point(m.year, m.value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    const SHEET: &str = "\"Data Source\",\"World Development Indicators\",\n\
        \n\
        \"Last Updated Date\",\"2024-06-28\",\n\
        \n\
        \"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\",\"2015\",\"2016\",\n\
        \"Kenya\",\"KEN\",\"Primary completion rate\",\"SE.PRM.CMPT.ZS\",\"99.1\",\"..\",\n\
        \"World\",\"WLD\",\"Primary completion rate\",\"SE.PRM.CMPT.ZS\",\"88\",\"89\",\n";

    fn archive(entries: &[(&str, &str)]) -> Cursor<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        let mut cursor = writer.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    #[test]
    fn test_reads_api_sheet_and_melts_years() {
        let zip = archive(&[
            ("Metadata_Country_API_SE.PRM.CMPT.ZS_DS2.csv", "junk\n"),
            ("API_SE.PRM.CMPT.ZS_DS2_en_csv_v2.csv", SHEET),
        ]);
        let rows = tidy_wb_archive(zip, "SE.PRM.CMPT.ZS", "percent").unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].country_iso3.as_deref(), Some("KEN"));
        assert_eq!(rows[0].country_name.as_deref(), Some("Kenya"));
        assert_eq!(rows[0].year, Some(2015));
        assert_eq!(rows[0].value, Some(99.1));
        assert_eq!(rows[0].source.as_deref(), Some("WorldBank"));
        assert_eq!(rows[0].unit.as_deref(), Some("percent"));

        // ".." sentinel becomes null
        assert_eq!(rows[2].year, Some(2016));
        assert_eq!(rows[2].value, None);
    }

    #[test]
    fn test_archive_without_api_sheet_fails() {
        let zip = archive(&[("Metadata_Indicator.csv", "x\n")]);
        assert!(tidy_wb_archive(zip, "X", "percent").is_err());
    }
}
