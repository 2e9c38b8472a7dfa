use std::path::PathBuf;

/// Everything one pipeline run needs to know, built once from the command
/// line and passed down explicitly. No process-wide state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// HTTP(S) URL of the catalog dump, or a path to a local copy of it.
    pub source: String,
    /// Destination of the CSV output table.
    pub outfile: PathBuf,
    /// Overwrite `outfile` if it already exists.
    pub clobber: bool,
}

impl PipelineConfig {
    /// Where the downloaded archive lands, derived from the output name.
    /// Left on disk after the run.
    pub fn archive_path(&self) -> PathBuf {
        self.outfile.with_extension("tar.gz")
    }

    /// Where the extracted catalog text file lands. Also left on disk.
    pub fn catalog_path(&self) -> PathBuf {
        self.outfile.with_extension("txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_effect_paths_share_the_output_basename() {
        let config = PipelineConfig {
            source: "https://example.org/dump.tar.gz".into(),
            outfile: PathBuf::from("/data/deepwedge.csv"),
            clobber: false,
        };
        assert_eq!(config.archive_path(), PathBuf::from("/data/deepwedge.tar.gz"));
        assert_eq!(config.catalog_path(), PathBuf::from("/data/deepwedge.txt"));
    }
}
