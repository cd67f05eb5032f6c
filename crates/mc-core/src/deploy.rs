use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::info;

const ARTIFACT_EXTENSION: &str = ".jar";

/// Copy `src` into `mods_dir` as `filename`, creating the directory first.
///
/// Only bare `.jar` file names are accepted. Returns the destination path.
pub async fn deploy_artifact(src: &Path, mods_dir: &Path, filename: &str) -> CoreResult<PathBuf> {
    validate_filename(filename)?;

    tokio::fs::create_dir_all(mods_dir)
        .await
        .map_err(|source| CoreError::Deploy {
            path: mods_dir.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

    let dest = mods_dir.join(filename);
    let bytes = tokio::fs::copy(src, &dest)
        .await
        .map_err(|source| CoreError::Deploy {
            path: dest.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Deployed {filename} ({bytes} bytes) to {}", dest.display());
    Ok(dest)
}

#[track_caller]
fn validate_filename(filename: &str) -> CoreResult<()> {
    let reason = if !filename.ends_with(ARTIFACT_EXTENSION) {
        Some("only .jar files are accepted")
    } else if Path::new(filename).file_name().and_then(|n| n.to_str()) != Some(filename) {
        Some("file name must not contain a path")
    } else {
        None
    };

    match reason {
        None => Ok(()),
        Some(reason) => Err(CoreError::RejectedArtifact {
            filename: filename.to_string(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
