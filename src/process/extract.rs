use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tar::Archive;
use tracing::info;

use crate::error::{PipelineError, Result};

/// Unpack the single file contained in the gzipped tar at `archive_path`,
/// writing it to `target` regardless of its name inside the archive.
///
/// The catalog dump is expected to hold exactly one member; any other count
/// is fatal. Tar streams are single-pass, so the archive is opened once to
/// count members and a second time to unpack the survivor — the count check
/// always finishes before anything lands at `target`.
pub fn extract_single_member(archive_path: &Path, target: &Path) -> Result<PathBuf> {
    let count = count_members(archive_path)?;
    if count != 1 {
        return Err(PipelineError::ArchiveShape { count });
    }

    let mut archive = open_archive(archive_path)?;
    let mut entries = archive.entries()?;
    match entries.next() {
        Some(entry) => {
            entry?.unpack(target)?;
        }
        None => return Err(PipelineError::ArchiveShape { count: 0 }),
    }

    info!(
        archive = %archive_path.display(),
        target = %target.display(),
        "extracted catalog file"
    );
    Ok(target.to_path_buf())
}

fn open_archive(path: &Path) -> Result<Archive<GzDecoder<BufReader<File>>>> {
    let file = File::open(path)?;
    Ok(Archive::new(GzDecoder::new(BufReader::new(file))))
}

fn count_members(path: &Path) -> Result<usize> {
    let mut archive = open_archive(path)?;
    let mut count = 0;
    for entry in archive.entries()? {
        entry?;
        count += 1;
    }
    Ok(count)
}
