use reqwest::Client;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::{fetch, process};

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Data rows written to the output table.
    pub records: usize,
    pub outfile: PathBuf,
}

/// Run the full fetch → extract → parse → emit pipeline.
///
/// Stages run strictly in order and the first failure aborts the run. The
/// output file is only opened once the whole input has parsed, so a failed
/// run emits zero rows. The downloaded archive and the extracted text file
/// stay on disk afterwards.
pub async fn run(client: &Client, config: &PipelineConfig) -> Result<RunSummary> {
    // 1) refuse to clobber an existing output unless asked to
    if config.outfile.exists() && !config.clobber {
        return Err(PipelineError::OutputExists(config.outfile.clone()));
    }

    // 2) fetch the archive next to the output file
    let archive = fetch::retrieve_archive(client, &config.source, &config.archive_path()).await?;

    // 3) unpack the single catalog file it must contain
    let catalog = process::extract::extract_single_member(&archive, &config.catalog_path())?;

    // 4) parse every record up front
    let file = File::open(&catalog)?;
    let records = process::parse::parse_catalog(BufReader::new(file))?;

    // 5) emit the table
    let rows = process::emit::write_table(&records, &config.outfile)?;
    info!(rows, outfile = %config.outfile.display(), "pipeline complete");

    Ok(RunSummary {
        records: rows,
        outfile: config.outfile.clone(),
    })
}
