//! Platform API data models.

use serde::Deserialize;

/// Wrapper around the single-post endpoint response.
#[derive(Debug, Deserialize)]
pub struct E621PostResponse {
    pub post: E621Post,
}

/// An e621 post, reduced to the fields the download pipeline needs.
#[derive(Debug, Clone, Deserialize)]
pub struct E621Post {
    pub id: u64,
    pub file: E621File,
    pub tags: E621Tags,
}

/// File metadata of an e621 post.
#[derive(Debug, Clone, Deserialize)]
pub struct E621File {
    /// Direct media URL. Null when the file was removed from the site.
    pub url: Option<String>,
    pub ext: String,
    /// Content hash recorded by the site.
    pub md5: Option<String>,
}

/// Tags of an e621 post, grouped by category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct E621Tags {
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub character: Vec<String>,
    #[serde(default)]
    pub copyright: Vec<String>,
    #[serde(default)]
    pub artist: Vec<String>,
    #[serde(default)]
    pub invalid: Vec<String>,
    #[serde(default)]
    pub lore: Vec<String>,
    #[serde(default)]
    pub meta: Vec<String>,
}

impl E621Tags {
    /// Iterate over every category's tag list.
    pub fn categories(&self) -> impl Iterator<Item = &[String]> {
        [
            self.general.as_slice(),
            self.species.as_slice(),
            self.character.as_slice(),
            self.copyright.as_slice(),
            self.artist.as_slice(),
            self.invalid.as_slice(),
            self.lore.as_slice(),
            self.meta.as_slice(),
        ]
        .into_iter()
    }
}

/// A FurAffinity submission, as read off its view page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaSubmission {
    pub id: u64,
    pub title: String,
    pub author: String,
    /// Absolute URL of the full-size file.
    pub file_url: String,
}
