use std::{fs::OpenOptions, io::Write, path::Path};

use crate::errors::VideoError;

/// How the output file is opened when it already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace any existing content.
    #[default]
    Truncate,
    /// Concatenate after any existing content.
    Append,
}

/// Downloads `url` into memory, then writes the whole body to `path`.
///
/// Returns the number of bytes written.
pub async fn download(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
    mode: WriteMode,
) -> Result<usize, VideoError> {
    log::info!("Downloading video: {url}");
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        log::warn!("Video response status {}, saving body anyway", resp.status());
    }
    let binary = resp.bytes().await?;

    // The body is fully buffered, so a failed transfer never touches the file.
    let mut file = match mode {
        WriteMode::Truncate => OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?,
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path)?,
    };
    file.write_all(&binary)?;
    log::info!("Saved {} bytes to {}", binary.len(), path.display());
    Ok(binary.len())
}
