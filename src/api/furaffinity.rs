//! FurAffinity client.
//!
//! FurAffinity has no public JSON API; submission metadata is read
//! from the regular view pages of a logged-in session, carried by the
//! site's `a`/`b` cookie pair.

use regex::Regex;
use reqwest::{header, Client};
use url::Url;

use crate::api::types::FaSubmission;
use crate::config::Config;
use crate::error::{Error, Result};

/// Site base URL.
const SITE_BASE: &str = "https://www.furaffinity.net";

/// Client for FurAffinity submission pages.
pub struct FaClient {
    client: Client,
}

impl FaClient {
    /// Create a new client from the configured session cookie pair.
    pub fn new(config: &Config) -> Result<Self> {
        let cookie = format!("a={}; b={}", config.fa.cookie_a, config.fa.cookie_b);
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::COOKIE,
            cookie
                .parse()
                .map_err(|_| Error::Config("fa cookies contain invalid characters".to_string()))?,
        );

        let client = Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch a submission's metadata. The file itself is fetched
    /// separately.
    pub async fn get_submission(&self, sub_id: u64) -> Result<FaSubmission> {
        let page_url = format!("{}/view/{}/", SITE_BASE, sub_id);
        tracing::debug!("GET {}", page_url);

        let response = self.client.get(&page_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("submission {}: HTTP {}", sub_id, status)));
        }

        let html = response.text().await?;
        parse_submission_page(sub_id, &page_url, &html)
    }
}

/// Extract submission metadata from a view page.
///
/// A page without a download section means the submission was removed,
/// requires a login, or the site served an error page; all of those
/// surface as a per-item error.
fn parse_submission_page(sub_id: u64, page_url: &str, html: &str) -> Result<FaSubmission> {
    // Download link: <div class="download"><a href="//d.furaffinity.net/...">
    let download_re = Regex::new(r#"<div class="download">\s*<a href="([^"]+)""#).unwrap();
    let title_re = Regex::new(r#"(?s)<div class="submission-title">.*?<p>([^<]*)</p>"#).unwrap();
    let author_re =
        Regex::new(r#"(?s)<div class="submission-id-sub-container">.*?<strong>([^<]+)</strong>"#)
            .unwrap();

    let href = capture(&download_re, html).ok_or_else(|| {
        Error::Api(format!(
            "submission {} has no download link (removed or not accessible)",
            sub_id
        ))
    })?;
    let title = capture(&title_re, html)
        .ok_or_else(|| Error::Api(format!("submission {}: could not find the title", sub_id)))?;
    let author = capture(&author_re, html)
        .ok_or_else(|| Error::Api(format!("submission {}: could not find the author", sub_id)))?;

    // Download hrefs are protocol-relative; resolve against the page URL.
    let file_url = Url::parse(page_url)?.join(href)?.to_string();

    Ok(FaSubmission {
        id: sub_id,
        title: decode_entities(title.trim()),
        author: decode_entities(author.trim()),
        file_url,
    })
}

fn capture<'h>(re: &Regex, html: &'h str) -> Option<&'h str> {
    re.captures(html).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Decode the handful of HTML entities that show up in titles and
/// author names. `&amp;` goes last so escaped entities stay escaped.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
