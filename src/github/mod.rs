//! GitHub repository access.
//!
//! A thin blocking client over the GitHub REST contents API: list the
//! repository root, fetch a file's (base64-encoded) content. Every call
//! blocks until the response arrives; there is no retry layer here, the
//! caller decides what a failure means.

mod client;

pub use client::{ContentEntry, GithubClient};
