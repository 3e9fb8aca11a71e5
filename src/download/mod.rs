//! Download pipelines, one per platform, plus the shared raw fetch.

pub mod batch;
pub mod e621;
pub mod fetch;
pub mod furaffinity;
pub mod outcome;

pub use batch::run_batch;
pub use e621::download_post;
pub use fetch::fetch_to_file;
pub use furaffinity::download_submission;
pub use outcome::Outcome;
