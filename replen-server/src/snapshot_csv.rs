//! Snapshot CSV ingestion.
//!
//! One row per channel listing, headers matching [`SnapshotRecord`] field
//! names. Optional columns may be left empty; whitespace around cells is
//! ignored. Errors carry the 1-based file line so a bad export is easy to
//! find in a spreadsheet.

use std::fs::File;
use std::io::{BufReader, Read};

use replen_engine::types::SnapshotRecord;

use crate::error::{CliError, CliResult};

pub fn load_snapshot_file(path: &str) -> CliResult<Vec<SnapshotRecord>> {
    let file = File::open(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })?;
    let records = read_snapshot(BufReader::new(file), path)?;
    log::info!("loaded {} snapshot rows from {path}", records.len());
    Ok(records)
}

pub fn read_snapshot<R: Read>(reader: R, path: &str) -> CliResult<Vec<SnapshotRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in csv_reader.deserialize::<SnapshotRecord>().enumerate() {
        // Line 1 is the header.
        let record = row.map_err(|source| CliError::SnapshotRow {
            path: path.to_string(),
            line: (i + 2) as u64,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "sku,name,amazon_qty,threepl_qty,awd_qty,amazon_inbound_qty,\
threepl_inbound_qty,cost,weekly_vel,amz_weekly_vel,shop_weekly_vel,corrected_vel,cv,\
safety_stock,seasonal_factor,demand_class,stockout_risk";

    #[test]
    fn parses_a_full_row() {
        let csv = format!(
            "{HEADER}\nWIDGET-1,Widget,10,200,5,0,50,4.25,70,55,15,68.5,0.3,40,1.1,smooth,12.5\n"
        );
        let records = read_snapshot(csv.as_bytes(), "inline").unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.sku, "WIDGET-1");
        assert_eq!(r.amazon_qty, 10.0);
        assert_eq!(r.threepl_qty, 200.0);
        assert_eq!(r.cost, 4.25);
        assert_eq!(r.weekly_vel, 70.0);
        assert_eq!(r.corrected_vel, Some(68.5));
        assert_eq!(r.cv, 0.3);
        assert_eq!(r.demand_class.as_deref(), Some("smooth"));
        assert_eq!(r.stockout_risk, Some(12.5));
    }

    #[test]
    fn empty_optional_cells_are_none() {
        let csv = format!("{HEADER}\nWIDGET-2,Widget,0,10,0,0,0,1,7,7,0,,0.1,,,,\n");
        let records = read_snapshot(csv.as_bytes(), "inline").unwrap();
        let r = &records[0];
        assert_eq!(r.corrected_vel, None);
        assert_eq!(r.safety_stock, None);
        assert_eq!(r.seasonal_factor, None);
        assert_eq!(r.demand_class, None);
        assert_eq!(r.stockout_risk, None);
    }

    #[test]
    fn cells_are_trimmed() {
        let csv = format!("{HEADER}\n  WIDGET-3 , Widget ,0, 10 ,0,0,0,1, 7 ,0,0,,0,,,,\n");
        let records = read_snapshot(csv.as_bytes(), "inline").unwrap();
        assert_eq!(records[0].sku, "WIDGET-3");
        assert_eq!(records[0].threepl_qty, 10.0);
    }

    #[test]
    fn bad_row_reports_its_line() {
        let csv = format!(
            "{HEADER}\nGOOD-1,Widget,0,10,0,0,0,1,7,0,0,,0,,,,\nBAD-1,Widget,0,not-a-number,0,0,0,1,7,0,0,,0,,,,\n"
        );
        let error = read_snapshot(csv.as_bytes(), "inline").unwrap_err();
        match error {
            CliError::SnapshotRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = load_snapshot_file("/nonexistent/snapshot.csv").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/snapshot.csv"));
    }
}
