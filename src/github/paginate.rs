use crate::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};

/// Parameters handed to an [`Endpoint`], e.g. `{"org": "octo-org", "per_page": 100}`.
pub type EndpointOptions = Map<String, Value>;

/// A fully resolved list request: method, path relative to the API root, query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl EndpointRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
        }
    }
}

/// Builds a request from options.
pub trait Endpoint {
    fn endpoint(&self, options: &EndpointOptions) -> Result<EndpointRequest>;
}

/// Fetches every page of a list request and returns the concatenated items.
#[async_trait]
pub trait PaginationClient: Send + Sync {
    async fn paginate(&self, request: EndpointRequest) -> Result<Vec<Value>>;
}

/// Resolves `endpoint` against `options` and lets `client` page through it.
///
/// Nothing is retried or wrapped: errors from either collaborator come back as-is.
pub async fn paginate<C, E>(
    client: &C,
    endpoint: &E,
    options: &EndpointOptions,
) -> Result<Vec<Value>>
where
    C: PaginationClient + ?Sized,
    E: Endpoint + ?Sized,
{
    let request = endpoint.endpoint(options)?;
    tracing::debug!(method = %request.method, path = %request.path, "Paginating endpoint");
    client.paginate(request).await
}
