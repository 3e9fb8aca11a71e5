//! FurAffinity per-submission pipeline.

use reqwest::Client;

use crate::api::furaffinity::FaClient;
use crate::api::types::FaSubmission;
use crate::config::Config;
use crate::download::fetch::fetch_to_file;
use crate::download::outcome::Outcome;
use crate::error::{Error, Result};
use crate::fs::naming::{author_directory, canonicalize};
use crate::fs::paths::ensure_dir;
use crate::output::report::print_destination;

/// Download one FurAffinity submission by id.
pub async fn download_submission(
    api: &FaClient,
    http: &Client,
    config: &Config,
    sub_id: u64,
    show_progress: bool,
) -> Result<Outcome> {
    let sub = api.get_submission(sub_id).await?;
    process_submission(http, config, &sub, show_progress).await
}

/// Apply the download policy to fetched submission metadata.
pub(crate) async fn process_submission(
    http: &Client,
    config: &Config,
    sub: &FaSubmission,
    show_progress: bool,
) -> Result<Outcome> {
    let ext = sub
        .file_url
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .ok_or_else(|| {
            Error::Media(format!(
                "submission {} file URL has no extension: {}",
                sub.id, sub.file_url
            ))
        })?;

    let filename = canonicalize(
        &format!("{} - {}.{}", sub.id, sub.title, ext),
        &config.invalid_chars,
    );
    let subdir = canonicalize(&author_directory(&sub.author), &config.invalid_chars);

    let dl_path = config.dl_base.join(&subdir);
    let dl_file = dl_path.join(&filename);
    print_destination(&dl_file);

    // Existence check only; FurAffinity pages carry no content hash.
    if dl_file.exists() {
        return Ok(Outcome::AlreadyExists);
    }

    ensure_dir(&dl_path).await?;
    fetch_to_file(http, &config.user_agent(), &sub.file_url, &dl_file, show_progress).await?;

    Ok(Outcome::Done)
}
