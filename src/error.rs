use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("output file {0} already exists; pass --clobber to overwrite")]
    OutputExists(PathBuf),

    #[error("transfer failed: {0}")]
    Transfer(#[from] reqwest::Error),

    #[error("archive holds {count} members, expected exactly 1")]
    ArchiveShape { count: usize },

    #[error("line {lineno}: expected 10 fields, found {found} in {line:?}")]
    RecordShape {
        lineno: usize,
        found: usize,
        line: String,
    },

    #[error("line {lineno}: column `{column}`: {token:?} is not numeric")]
    TypeCoercion {
        lineno: usize,
        column: &'static str,
        token: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
