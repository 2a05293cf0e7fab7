//! Hub API client.
//!
//! The three remote operations provisioning needs, behind the [`Hub`] trait
//! so the pipeline can run against a fake in tests. [`HubClient`] talks to
//! the real REST API. No call is retried.

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, Response, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, trace};

use crate::core::constants::REVISION;
use crate::core::secrets::SpaceSecret;
use crate::core::types::{Identity, RepoId};
use crate::error::{HubError, Result};

/// Per-request timeout, so a stalled Hub fails the run instead of hanging it.
const TIMEOUT: Duration = Duration::from_secs(60);

/// Remote operations against the Hub.
#[async_trait]
pub trait Hub {
    /// Resolve the identity behind the token.
    async fn whoami(&self) -> Result<Identity>;

    /// Create a repository, attaching `secrets` to it.
    async fn create_repo(
        &self,
        repo_id: &RepoId,
        repo_type: &str,
        sdk: &str,
        secrets: &[SpaceSecret],
    ) -> Result<()>;

    /// Commit a single file into a repository.
    async fn upload_file(
        &self,
        repo_id: &RepoId,
        path_in_repo: &str,
        content: &[u8],
        repo_type: &str,
    ) -> Result<()>;
}

/// HTTP client for the Hub REST API.
pub struct HubClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl HubClient {
    /// Create a client for `endpoint` authenticating with `token`.
    pub fn new(endpoint: &str, token: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("seedspace/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(HubError::Http)?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }
}

/// Map a non-success response to an error, keeping the Hub's message.
async fn check(response: Response) -> std::result::Result<Response, HubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(HubError::Unauthorized);
    }

    let body = response.text().await?;
    // The Hub answers with {"error": "..."} on most failures.
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or(body);

    Err(HubError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Encode a single-file commit as the NDJSON body the commit endpoint takes.
pub fn commit_body(path_in_repo: &str, content: &[u8]) -> std::result::Result<String, HubError> {
    let header = json!({
        "key": "header",
        "value": {
            "summary": format!("Upload {}", path_in_repo),
            "description": "",
        },
    });
    let file = json!({
        "key": "file",
        "value": {
            "content": base64::engine::general_purpose::STANDARD.encode(content),
            "path": path_in_repo,
            "encoding": "base64",
        },
    });

    Ok(format!(
        "{}\n{}\n",
        serde_json::to_string(&header)?,
        serde_json::to_string(&file)?
    ))
}

#[async_trait]
impl Hub for HubClient {
    async fn whoami(&self) -> Result<Identity> {
        debug!("resolving identity");

        let response = self
            .http
            .get(self.url("/api/whoami-v2"))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(HubError::Http)?;
        let body = check(response).await?.text().await.map_err(HubError::Http)?;

        let identity: Identity = serde_json::from_str(&body).map_err(HubError::Decode)?;
        trace!(name = ?identity.name, "resolved identity");
        Ok(identity)
    }

    async fn create_repo(
        &self,
        repo_id: &RepoId,
        repo_type: &str,
        sdk: &str,
        secrets: &[SpaceSecret],
    ) -> Result<()> {
        debug!(repo = %repo_id, secrets = secrets.len(), "creating repository");

        let response = self
            .http
            .post(self.url("/api/repos/create"))
            .bearer_auth(&self.token)
            .json(&json!({
                "name": repo_id.name,
                "organization": repo_id.owner,
                "type": repo_type,
                "sdk": sdk,
                "secrets": secrets,
            }))
            .send()
            .await
            .map_err(HubError::Http)?;

        if response.status() == StatusCode::CONFLICT {
            return Err(HubError::AlreadyExists(repo_id.to_string()).into());
        }
        check(response).await?;

        trace!(repo = %repo_id, "repository created");
        Ok(())
    }

    async fn upload_file(
        &self,
        repo_id: &RepoId,
        path_in_repo: &str,
        content: &[u8],
        repo_type: &str,
    ) -> Result<()> {
        debug!(repo = %repo_id, path = path_in_repo, bytes = content.len(), "uploading file");

        let url = self.url(&format!(
            "/api/{}s/{}/{}/commit/{}",
            repo_type, repo_id.owner, repo_id.name, REVISION
        ));
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(commit_body(path_in_repo, content)?)
            .send()
            .await
            .map_err(HubError::Http)?;
        check(response).await?;

        trace!(repo = %repo_id, path = path_in_repo, "file committed");
        Ok(())
    }
}
