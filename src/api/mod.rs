//! Platform clients.
//!
//! This module provides:
//! - The e621 JSON API client
//! - The FurAffinity page client (session-cookie authenticated)
//! - Response models for both platforms

pub mod e621;
pub mod furaffinity;
pub mod types;

pub use e621::E621Client;
pub use furaffinity::FaClient;
pub use types::{E621File, E621Post, E621PostResponse, E621Tags, FaSubmission};
