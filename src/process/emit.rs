use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::process::parse::{ClusterRecord, COLUMNS};

/// Write the parsed records as a CSV table: header row first, then one row
/// per record in input order. Returns the number of data rows written.
pub fn write_table(records: &[ClusterRecord], outfile: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(BufWriter::new(File::create(outfile)?));
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;

    info!(rows = records.len(), outfile = %outfile.display(), "catalog table written");
    Ok(records.len())
}
