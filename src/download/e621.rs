//! e621 per-post pipeline.

use reqwest::Client;

use crate::api::e621::E621Client;
use crate::api::types::E621Post;
use crate::config::Config;
use crate::dedup::hash::md5_file;
use crate::download::fetch::fetch_to_file;
use crate::download::outcome::Outcome;
use crate::error::Result;
use crate::fs::naming::{artist_directory, canonicalize};
use crate::fs::paths::ensure_dir;
use crate::output::report::print_destination;

/// Download one e621 post by id.
pub async fn download_post(
    api: &E621Client,
    http: &Client,
    config: &Config,
    post_id: u64,
    show_progress: bool,
) -> Result<Outcome> {
    let post = api.get_post(post_id).await?;
    process_post(http, config, &post, show_progress).await
}

/// Apply the download policy to fetched post metadata.
///
/// Raw file fetches carry the plain client User-Agent without the
/// username suffix the API calls use.
pub(crate) async fn process_post(
    http: &Client,
    config: &Config,
    post: &E621Post,
    show_progress: bool,
) -> Result<Outcome> {
    // Takedowns null the file URL; nothing to fetch, nothing to print.
    let Some(file_url) = post.file.url.as_deref() else {
        return Ok(Outcome::NotFound);
    };

    let filename = canonicalize(
        &format!("{}.{}", post.id, post.file.ext),
        &config.invalid_chars,
    );
    let subdir = canonicalize(&artist_directory(&post.tags.artist), &config.invalid_chars);

    let dl_path = config.dl_base.join(&subdir);
    let dl_file = dl_path.join(&filename);
    print_destination(&dl_file);

    // First matching blacklist tag wins; a copy already on disk gets
    // deleted rather than kept.
    for tag in &config.e6.blacklist {
        if post.tags.categories().any(|tags| tags.contains(tag)) {
            if dl_file.exists() {
                tokio::fs::remove_file(&dl_file).await?;
                return Ok(Outcome::RemovedBlacklist);
            }
            return Ok(Outcome::SkippedBlacklist);
        }
    }

    // On disk and matching the recorded hash: nothing to fetch. A
    // mismatch means a truncated or stale file, so fall through and
    // overwrite it.
    if dl_file.exists() {
        if let Some(post_md5) = post.file.md5.as_deref() {
            if md5_file(&dl_file)? == post_md5 {
                return Ok(Outcome::AlreadyExists);
            }
        }
    }

    ensure_dir(&dl_path).await?;
    fetch_to_file(http, &config.user_agent(), file_url, &dl_file, show_progress).await?;

    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{E621File, E621Tags};
    use crate::config::{Config, E6Config, FaConfig};
    use std::path::Path;
    use tempfile::TempDir;

    fn make_config(dl_base: &Path, blacklist: Vec<String>) -> Config {
        Config {
            client_name: "testclient".to_string(),
            client_version: "0.0.0".to_string(),
            dl_base: dl_base.to_path_buf(),
            invalid_chars: vec![':', '/'],
            e6: E6Config {
                username: "tester".to_string(),
                blacklist,
            },
            fa: FaConfig {
                cookie_a: String::new(),
                cookie_b: String::new(),
            },
        }
    }

    fn make_post(id: u64, url: Option<&str>, md5: Option<&str>, artist: &str) -> E621Post {
        E621Post {
            id,
            file: E621File {
                url: url.map(str::to_string),
                ext: "png".to_string(),
                md5: md5.map(str::to_string),
            },
            tags: E621Tags {
                general: vec!["solo".to_string()],
                artist: vec![artist.to_string()],
                ..E621Tags::default()
            },
        }
    }

    #[tokio::test]
    async fn test_removed_media_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path(), vec![]);
        let post = make_post(100, None, None, "some_artist");

        let outcome = process_post(&Client::new(), &config, &post, false)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::NotFound);
        // Nothing was created under the download root.
        assert!(dir.path().read_dir().unwrap().next().is_none());
    }

    #[tokio::test]
    async fn test_blacklisted_post_is_skipped() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path(), vec!["solo".to_string()]);
        let post = make_post(100, Some("https://static1.e621.net/x.png"), None, "some_artist");

        let outcome = process_post(&Client::new(), &config, &post, false)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::SkippedBlacklist);
        assert!(!dir.path().join("Some Artist").join("100.png").exists());
    }

    #[tokio::test]
    async fn test_blacklisted_post_on_disk_is_removed() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path(), vec!["solo".to_string()]);
        let post = make_post(100, Some("https://static1.e621.net/x.png"), None, "some_artist");

        let dl_path = dir.path().join("Some Artist");
        std::fs::create_dir_all(&dl_path).unwrap();
        let dl_file = dl_path.join("100.png");
        std::fs::write(&dl_file, b"old bytes").unwrap();

        let outcome = process_post(&Client::new(), &config, &post, false)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::RemovedBlacklist);
        assert!(!dl_file.exists());
    }

    #[tokio::test]
    async fn test_matching_hash_reports_already_exists() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path(), vec![]);

        let dl_path = dir.path().join("Some Artist");
        std::fs::create_dir_all(&dl_path).unwrap();
        let dl_file = dl_path.join("100.png");
        std::fs::write(&dl_file, b"hello world").unwrap();

        // md5("hello world")
        let post = make_post(
            100,
            Some("https://static1.e621.net/x.png"),
            Some("5eb63bbbe01eeed093cb22bb8f5acdc3"),
            "some_artist",
        );

        let outcome = process_post(&Client::new(), &config, &post, false)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::AlreadyExists);
        assert_eq!(std::fs::read(&dl_file).unwrap(), b"hello world");
    }

    #[tokio::test]
    async fn test_blacklist_outranks_already_exists() {
        // A blacklisted post is removed even when its hash matches.
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path(), vec!["solo".to_string()]);

        let dl_path = dir.path().join("Some Artist");
        std::fs::create_dir_all(&dl_path).unwrap();
        let dl_file = dl_path.join("100.png");
        std::fs::write(&dl_file, b"hello world").unwrap();

        let post = make_post(
            100,
            Some("https://static1.e621.net/x.png"),
            Some("5eb63bbbe01eeed093cb22bb8f5acdc3"),
            "some_artist",
        );

        let outcome = process_post(&Client::new(), &config, &post, false)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::RemovedBlacklist);
        assert!(!dl_file.exists());
    }
}
