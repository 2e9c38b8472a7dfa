// src/fetch/mod.rs
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;
use url::Url;

use crate::error::Result;

/// Retrieve the catalog archive into `dest` and return its path.
///
/// `source` is either an HTTP(S) URL or a path to a local copy of the
/// archive; a local copy is duplicated to `dest` so the on-disk layout is
/// the same either way. One attempt only, failures propagate to the caller.
pub async fn retrieve_archive(client: &Client, source: &str, dest: &Path) -> Result<PathBuf> {
    match Url::parse(source) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            download_archive(client, &url, dest).await
        }
        // Anything that does not parse as an absolute http(s) URL is
        // treated as a local path.
        _ => {
            info!(source, dest = %dest.display(), "copying local archive");
            fs::copy(source, dest).await?;
            Ok(dest.to_path_buf())
        }
    }
}

/// Download the archive URL and save it to `dest`.
async fn download_archive(client: &Client, url: &Url, dest: &Path) -> Result<PathBuf> {
    info!(url = %url, "downloading catalog archive");
    let resp = client.get(url.as_str()).send().await?.error_for_status()?;
    let bytes = resp.bytes().await?;
    fs::write(dest, &bytes).await?;
    info!(bytes = bytes.len(), dest = %dest.display(), "archive saved");
    Ok(dest.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs as std_fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn local_source_is_copied_to_dest() -> Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("dump.tar.gz");
        std_fs::write(&src, b"not really a tarball")?;

        let dest = dir.path().join("deepwedge.tar.gz");
        let client = Client::new();
        let got = retrieve_archive(&client, src.to_str().unwrap(), &dest).await?;

        assert_eq!(got, dest);
        assert_eq!(std_fs::read(&dest)?, b"not really a tarball");
        Ok(())
    }

    #[tokio::test]
    async fn missing_local_source_is_fatal() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("deepwedge.tar.gz");
        let client = Client::new();
        let err = retrieve_archive(&client, "no/such/archive.tar.gz", &dest)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::PipelineError::Io(_)));
    }
}
