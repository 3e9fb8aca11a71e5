//! Raw file fetching.

use std::path::{Path, PathBuf};

use futures::{Stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{header, Client};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Minimum file size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Fetch a URL and stream the body into `dest`, overwriting any
/// existing file.
///
/// The body is staged at `{dest}.part` and renamed into place only when
/// the stream ends cleanly, so an interrupted transfer never leaves a
/// truncated file at `dest`.
///
/// The progress bar draws to stderr and is cleared once the transfer
/// ends.
pub async fn fetch_to_file(
    http: &Client,
    user_agent: &str,
    url: &str,
    dest: &Path,
    show_progress: bool,
) -> Result<()> {
    tracing::debug!("GET {}", url);
    let response = http
        .get(url)
        .header(header::USER_AGENT, user_agent)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Download(format!(
            "HTTP {} fetching {}",
            response.status(),
            url
        )));
    }

    let content_length = response.content_length();
    let show_bar =
        show_progress && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false);

    let progress = if show_bar {
        let pb = ProgressBar::new(content_length.unwrap_or(0));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let result = write_stream(response.bytes_stream(), dest, progress.as_ref()).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    result
}

/// Stream chunks into `dest` through its `.part` sibling.
///
/// The partial file is renamed over `dest` only when the stream ends
/// cleanly; on any error it is removed, leaving whatever was at `dest`
/// untouched.
async fn write_stream<S, B, E>(
    mut stream: S,
    dest: &Path,
    progress: Option<&ProgressBar>,
) -> Result<()>
where
    S: Stream<Item = std::result::Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let partial = partial_path(dest);

    let copied: Result<()> = async {
        let mut file = File::create(&partial).await?;
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            file.write_all(chunk.as_ref()).await?;
            downloaded += chunk.as_ref().len() as u64;

            if let Some(pb) = progress {
                pb.set_position(downloaded);
            }
        }

        file.flush().await?;
        Ok(())
    }
    .await;

    match copied {
        Ok(()) => {
            tokio::fs::rename(&partial, dest).await?;
            Ok(())
        }
        Err(e) => {
            let _ = tokio::fs::remove_file(&partial).await;
            Err(e)
        }
    }
}

/// Partial-transfer sibling of `dest`: appends `.part` to the full file
/// name (`100.png` -> `100.png.part`).
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
