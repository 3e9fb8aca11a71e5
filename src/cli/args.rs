//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// yiffdl CLI.
#[derive(Parser, Debug)]
#[command(
    name = "yiffdl",
    version,
    about = "Bulk download posts from e621/e926 and FurAffinity URL lists",
    long_about = "Reads text files of URLs, extracts e621/e926 post ids and FurAffinity \
                  submission ids, and downloads the referenced media into per-artist \
                  directories, skipping blacklisted and already-downloaded items."
)]
pub struct Args {
    /// Text file(s) with one URL per line.
    #[arg(required = true, num_args = 1..)]
    pub url_lists: Vec<PathBuf>,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Download root directory (overrides dl_base from the config file).
    #[arg(short = 'd', long = "directory")]
    pub directory: Option<PathBuf>,

    /// Hide transient byte-progress bars for large downloads.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.directory {
            config.dl_base = dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_at_least_one_list() {
        assert!(Args::try_parse_from(["yiffdl"]).is_err());
        assert!(Args::try_parse_from(["yiffdl", "urls.txt"]).is_ok());
    }

    #[test]
    fn test_config_override() {
        let args = Args::try_parse_from(["yiffdl", "-c", "other.json", "urls.txt"]).unwrap();
        assert_eq!(args.config, PathBuf::from("other.json"));

        let args = Args::try_parse_from(["yiffdl", "urls.txt"]).unwrap();
        assert_eq!(args.config, PathBuf::from("config.json"));
    }

    #[test]
    fn test_multiple_lists() {
        let args = Args::try_parse_from(["yiffdl", "a.txt", "b.txt", "c.txt"]).unwrap();
        assert_eq!(args.url_lists.len(), 3);
    }
}
