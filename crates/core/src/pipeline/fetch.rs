use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;
use reqwest::{StatusCode, blocking::get};

use crate::io::AssetFile;

/// Result of a single font download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The body was written to `path`.
    Saved { path: PathBuf, bytes: usize },
    /// The server answered with something other than 200 OK; nothing was written.
    Failed { status: StatusCode },
}

impl FetchOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved { path, .. } => {
                write!(f, "Successfully downloaded Material Icons font to {}", path.display())
            }
            Self::Failed { status } => write!(f, "Failed to download font: {}", status.as_u16()),
        }
    }
}

/// Downloads `url` into `dest`, creating its parent directory first.
///
/// Only a 200 response is written. Any other status is returned as
/// [`FetchOutcome::Failed`] and leaves `dest` untouched. Transport and I/O
/// failures are errors.
pub fn fetch_font(url: &str, dest: &Path) -> Result<FetchOutcome> {
    let file = AssetFile::new(dest);
    file.ensure_parent_dir()?;

    info!("Fetching {url}");
    let response = get(url).with_context(|| format!("Failed to fetch {url}"))?;
    let status = response.status();
    if status != StatusCode::OK {
        info!("HTTP {status} for {url}");
        return Ok(FetchOutcome::Failed { status });
    }

    let bytes = response.bytes().with_context(|| format!("Failed to read body of {url}"))?;
    file.write(&bytes)?;

    info!("Wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(FetchOutcome::Saved { path: dest.to_path_buf(), bytes: bytes.len() })
}
