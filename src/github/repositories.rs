//! GitHub Repository API operations
//!
//! File contents and releases.

use super::client::GitHubClient;
use super::error::GitHubError;
use super::transport::GitHubTransport;
use super::types::{ContentRequest, DecodedFile};
use base64::{Engine, prelude::BASE64_STANDARD};

/// Decode the base64 payload of the contents API into text
///
/// The API wraps the encoded content over several lines, so whitespace is
/// ignored. Invalid UTF-8 sequences are replaced.
pub fn decode_file_content(raw_content: Option<&str>) -> Result<String, GitHubError> {
    let raw_content = raw_content
        .ok_or_else(|| GitHubError::InvalidArgument("no file content to decode".to_string()))?;

    let compact: String = raw_content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = BASE64_STANDARD.decode(compact)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl<T: GitHubTransport> GitHubClient<T> {
    /// Fetch a file and decode its content
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `path` - Path of the file inside the repository
    /// * `reference` - Commit, branch or tag; the default branch when `None`
    pub async fn get_file_at_revision(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<DecodedFile, GitHubError> {
        let mut request = ContentRequest::new(owner, repo, path);
        if let Some(reference) = reference {
            request = request.at_revision(reference);
        }

        self.logger.debug(&format!(
            "Fetching {}/{}:{} at {}",
            owner,
            repo,
            path,
            reference.unwrap_or("default branch")
        ));

        let file = self.transport.get_content(&request).await?;

        Ok(DecodedFile {
            filename: path.to_string(),
            content: decode_file_content(file.content.as_deref())?,
        })
    }

    /// Create a release from `tag`
    pub async fn create_release(&self, owner: &str, repo: &str, tag: &str) -> Result<(), GitHubError> {
        self.logger
            .debug(&format!("Creating release {} for {}/{}", tag, owner, repo));
        self.transport.create_release(owner, repo, tag).await
    }
}
