//! Remote repository creation on the hosting service

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Timeout for the repository creation request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const API_ACCEPT: &str = "application/vnd.github.v3+json";

/// Body of the repository creation request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateRepoRequest {
    pub name: String,
    pub private: bool,
}

/// Clone URL for a repository owned by `username`
pub fn remote_url(username: &str, repo_name: &str) -> String {
    format!("https://github.com/{}/{}.git", username, repo_name)
}

/// Client for the hosting service's repository API
pub struct RepoHost {
    api_base: Url,
    client: reqwest::Client,
}

impl RepoHost {
    /// Create a client with a custom user agent
    pub fn new(api_base: Url, user_agent: &str) -> Self {
        Self {
            api_base,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a client from a product config, honoring the URL override env
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.api_url_env())
            .unwrap_or_else(|_| config.default_api_url().to_string());
        let url = Url::parse(&url_str).with_context(|| format!("Invalid API URL: {}", url_str))?;
        Ok(Self::new(url, config.user_agent()))
    }

    /// Repository creation endpoint, preserving query parameters
    pub fn endpoint(&self) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", self.api_base))?
            .pop_if_empty()
            .push("user")
            .push("repos");
        Ok(url)
    }

    /// POST a repository creation request
    ///
    /// Any HTTP status of 400 or above is a failure.
    pub async fn create_repo(
        &self,
        token: &str,
        request: &CreateRepoRequest,
    ) -> Result<(), ScaffoldError> {
        let url = self.endpoint().map_err(|e| ScaffoldError::Vcs(e.to_string()))?;

        let response = self
            .client
            .post(url.clone())
            .header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, API_ACCEPT)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ScaffoldError::Vcs(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScaffoldError::Vcs(format!(
                "creating repository '{}' failed: HTTP {} {}",
                request.name,
                status,
                body.trim()
            )));
        }

        Ok(())
    }
}
