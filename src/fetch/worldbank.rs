//! World Bank bulk CSV download (a ZIP of CSVs per indicator).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{HttpClient, fetch_bytes};
use crate::output::write_bytes_atomic;

const BULK_URL: &str = "https://api.worldbank.org/v2/country/all/indicator";

pub fn bulk_url(code: &str) -> String {
    format!("{}/{}?downloadformat=csv", BULK_URL, code)
}

/// Where the bulk ZIP for `code` is stored under the raw directory.
pub fn zip_path(raw_dir: &Path, code: &str) -> PathBuf {
    raw_dir.join(format!("wb_{}.zip", code))
}

/// Downloads the bulk ZIP for `code` into `raw_dir`.
///
/// The file only appears once the whole body has been received; a failed or
/// timed-out request leaves any previous download untouched.
#[tracing::instrument(skip(client, raw_dir))]
pub async fn download_indicator<C: HttpClient>(
    client: &C,
    code: &str,
    raw_dir: &Path,
) -> Result<PathBuf> {
    let url = bulk_url(code);
    info!(%url, "Downloading from World Bank");

    let bytes = fetch_bytes(client, &url)
        .await
        .with_context(|| format!("Download of {} failed", code))?;

    let out = zip_path(raw_dir, code);
    write_bytes_atomic(&out, &bytes)?;
    info!(path = %out.display(), bytes = bytes.len(), "Saved World Bank archive");
    Ok(out)
}
