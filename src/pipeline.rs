use std::path::PathBuf;

use crate::{errors::VideoError, page, video};

/// Where and how the resolved video is saved.
#[derive(Debug, Clone)]
pub struct Options {
    pub out: PathBuf,
    pub write_mode: video::WriteMode,
}

/// Fetches the page behind `url`, resolves its video link and saves the video.
///
/// Returns the number of bytes written to `options.out`.
pub async fn run(url: &str, options: &Options) -> Result<usize, VideoError> {
    let client = reqwest::Client::new();

    let video_url = {
        let document = page::fetch_page(&client, url).await?;
        video::resolve(&document)?
    };
    log::info!("Parsed video URL: {video_url}");

    video::download(&client, &video_url, &options.out, options.write_mode).await
}
