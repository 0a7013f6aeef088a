//! Blocking GitHub REST client.

use crate::error::{Result, SherpaError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("sherpa/", env!("CARGO_PKG_VERSION"));

/// One entry from a directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    /// Entry name (last path component).
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// "file", "dir", "symlink", or "submodule".
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl ContentEntry {
    /// Whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.entry_type == "dir"
    }
}

/// File payload from the contents API.
#[derive(Debug, Deserialize)]
struct FilePayload {
    content: String,
    encoding: String,
}

/// Client for one repository, authenticated with a personal access token.
pub struct GithubClient {
    base_url: String,
    repo: String,
    token: String,
    client: reqwest::blocking::Client,
}

impl GithubClient {
    /// Create a client for `repo` ("owner/name") using `token`.
    pub fn new(token: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, repo, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API base URL (tests).
    pub fn with_base_url(
        token: impl Into<String>,
        repo: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(SherpaError::remote)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            repo: repo.into(),
            token: token.into(),
            client,
        })
    }

    /// The "owner/name" identifier this client talks to.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Verify the repository is reachable with the given credentials.
    pub fn connect(&self) -> Result<()> {
        let url = format!("{}/repos/{}", self.base_url, self.repo);
        let response = self.get(&url)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SherpaError::Remote {
                message: format!("HTTP {} for repository '{}'", response.status(), self.repo),
            })
        }
    }

    /// List the repository's top-level entries, in remote listing order.
    pub fn list_root(&self) -> Result<Vec<ContentEntry>> {
        let url = format!("{}/repos/{}/contents/", self.base_url, self.repo);
        let response = self.get(&url)?;

        if !response.status().is_success() {
            return Err(SherpaError::Remote {
                message: format!("HTTP {} listing repository root", response.status()),
            });
        }

        response.json().map_err(SherpaError::remote)
    }

    /// Fetch a file's content, decoded to UTF-8 text.
    ///
    /// A 404 is reported as [`SherpaError::FileNotFound`]; everything else
    /// that goes wrong is a [`SherpaError::Remote`].
    pub fn fetch_file(&self, path: &str) -> Result<String> {
        let url = format!("{}/repos/{}/contents/{}", self.base_url, self.repo, path);
        let response = self.get(&url)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SherpaError::FileNotFound {
                path: path.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(SherpaError::Remote {
                message: format!("HTTP {} fetching {}", response.status(), path),
            });
        }

        let payload: FilePayload = response.json().map_err(SherpaError::remote)?;
        decode_content(&payload, path)
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .map_err(SherpaError::remote)
    }
}

/// Decode a contents-API payload. GitHub base64-encodes file bodies and
/// wraps the encoding with newlines every 60 characters.
fn decode_content(payload: &FilePayload, path: &str) -> Result<String> {
    if payload.encoding != "base64" {
        return Err(SherpaError::Remote {
            message: format!(
                "unexpected encoding '{}' for {}",
                payload.encoding, path
            ),
        });
    }

    let compact: String = payload
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = BASE64.decode(compact).map_err(|e| SherpaError::Remote {
        message: format!("invalid base64 in {}: {}", path, e),
    })?;

    String::from_utf8(bytes).map_err(|e| SherpaError::Remote {
        message: format!("{} is not valid UTF-8: {}", path, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(content: &str, encoding: &str) -> FilePayload {
        FilePayload {
            content: content.to_string(),
            encoding: encoding.to_string(),
        }
    }

    #[test]
    fn decodes_base64_content() {
        // "hello" encoded
        let decoded = decode_content(&payload("aGVsbG8=", "base64"), "x").unwrap();
        assert_eq!(decoded, "hello");
    }

    #[test]
    fn decodes_base64_with_embedded_newlines() {
        // GitHub wraps long content; whitespace must be ignored
        let decoded = decode_content(&payload("aGVs\nbG8=\n", "base64"), "x").unwrap();
        assert_eq!(decoded, "hello");
    }

    #[test]
    fn rejects_unexpected_encoding() {
        let err = decode_content(&payload("aGVsbG8=", "utf-8"), "x").unwrap_err();
        assert!(matches!(err, SherpaError::Remote { .. }));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_content(&payload("not base64 !!!", "base64"), "x").unwrap_err();
        assert!(matches!(err, SherpaError::Remote { .. }));
    }

    #[test]
    fn content_entry_is_dir() {
        let entry = ContentEntry {
            name: "billing".into(),
            path: "billing".into(),
            entry_type: "dir".into(),
        };
        assert!(entry.is_dir());

        let file = ContentEntry {
            name: "LICENSE".into(),
            path: "LICENSE".into(),
            entry_type: "file".into(),
        };
        assert!(!file.is_dir());
    }

    #[test]
    fn client_strips_trailing_slash_from_base_url() {
        let client =
            GithubClient::with_base_url("tok", "acme/mono", "http://localhost:1234/").unwrap();
        assert_eq!(client.base_url, "http://localhost:1234");
        assert_eq!(client.repo(), "acme/mono");
    }
}
