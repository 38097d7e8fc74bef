use super::paginate::{EndpointRequest, PaginationClient};
use crate::config::GithubSettings;
use crate::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, LINK};
use serde_json::Value;
use std::time::Duration;
use url::Url;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`PaginationClient`] backed by the GitHub REST API.
///
/// Pages are fetched one after another by following `Link: rel="next"` until
/// the header disappears. Failures are returned immediately, nothing is retried.
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    per_page: u32,
}

impl RestClient {
    pub fn new(settings: &GithubSettings, token: Option<String>) -> Result<Self> {
        // reqwest is built without a bundled crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url(&settings.api_url)?,
            token,
            per_page: settings.per_page,
        })
    }

    /// Builds a client using the token from the environment variable named in `settings`.
    pub fn from_settings(settings: &GithubSettings) -> Result<Self> {
        Self::new(settings, settings.token())
    }

    fn first_page_url(&self, request: &EndpointRequest) -> Result<Url> {
        let mut url = self.base_url.join(request.path.trim_start_matches('/'))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
            if !request.query.iter().any(|(key, _)| key == "per_page") {
                pairs.append_pair("per_page", &self.per_page.to_string());
            }
        }
        Ok(url)
    }

    /// Resolves a `next` link, refusing any that leave the API origin so the
    /// token is only ever sent to `base_url`'s host.
    fn follow(&self, link: &str) -> Result<Url> {
        let url = Url::parse(link)?;
        if url.origin() != self.base_url.origin() {
            return Err(BotError::Endpoint(format!(
                "Refusing to follow cross-origin link {} (API is {})",
                url,
                self.base_url.origin().ascii_serialization()
            )));
        }
        Ok(url)
    }
}

#[async_trait]
impl PaginationClient for RestClient {
    async fn paginate(&self, request: EndpointRequest) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut next = Some(self.first_page_url(&request)?);

        while let Some(url) = next.take() {
            tracing::debug!(url = %url, "Fetching page");

            let mut builder = self
                .http
                .request(request.method.clone(), url.clone())
                .header(ACCEPT, GITHUB_MEDIA_TYPE);
            if let Some(ref token) = self.token {
                builder = builder.bearer_auth(token);
            }

            let response = builder.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(BotError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            next = next_link(response.headers())
                .map(|link| self.follow(&link))
                .transpose()?;
            let page: Vec<Value> = response.json().await?;
            items.extend(page);
        }

        tracing::info!(path = %request.path, count = items.len(), "Fetched all pages");
        Ok(items)
    }
}

/// Parses the API root, making sure relative paths join below it.
fn base_url(api_url: &str) -> Result<Url> {
    let mut url = Url::parse(api_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Extracts the `rel="next"` target from a `Link` header.
fn next_link(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(LINK)?.to_str().ok()?;
    value.split(',').find_map(|part| {
        let mut segments = part.split(';');
        let target = segments.next()?.trim();
        if segments.any(|s| s.trim() == r#"rel="next""#) {
            target
                .strip_prefix('<')?
                .strip_suffix('>')
                .map(str::to_string)
        } else {
            None
        }
    })
}
