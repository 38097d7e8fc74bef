//! Built-in GitHub list routes.
//!
//! A [`Route`] is a path template such as `/orgs/{org}/members`. Resolving it
//! fills each `{name}` placeholder from the options; whatever options are
//! left over become query parameters.

use super::paginate::{Endpoint, EndpointOptions, EndpointRequest};
use crate::error::{BotError, Result};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
}

impl Route {
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }

    /// Placeholder names in template order.
    pub fn params(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }
}

pub const ORG_MEMBERS: Route = Route::new("/orgs/{org}/members");
pub const ORG_PENDING_INVITATIONS: Route = Route::new("/orgs/{org}/invitations");
pub const ORG_TEAMS: Route = Route::new("/orgs/{org}/teams");
pub const TEAM_MEMBERS: Route = Route::new("/orgs/{org}/teams/{team_slug}/members");
pub const REPO_COLLABORATORS: Route = Route::new("/repos/{owner}/{repo}/collaborators");

/// Renders a scalar option; arrays, objects and null are not sent.
fn param_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Percent-encodes a path parameter so it stays a single segment.
fn encode_segment(name: &str, value: &str, template: &str) -> Result<String> {
    if value == "." || value == ".." {
        return Err(BotError::Endpoint(format!(
            "Parameter '{}' for {} cannot be '{}'",
            name, template, value
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}

impl Endpoint for Route {
    fn endpoint(&self, options: &EndpointOptions) -> Result<EndpointRequest> {
        let malformed = || BotError::Endpoint(format!("Malformed route template: {}", self.path));

        // one left-to-right pass, so substituted values are never re-scanned
        let mut path = String::with_capacity(self.path.len());
        let mut params = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find(['{', '}']) {
            if rest[start..].starts_with('}') {
                return Err(malformed());
            }
            let len = rest[start..].find('}').ok_or_else(malformed)?;
            let name = &rest[start + 1..start + len];
            if name.contains('{') {
                return Err(malformed());
            }

            let value = options
                .get(name)
                .and_then(param_value)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    BotError::Endpoint(format!(
                        "Missing parameter '{}' for {}",
                        name, self.path
                    ))
                })?;

            path.push_str(&rest[..start]);
            path.push_str(&encode_segment(name, &value, self.path)?);
            params.push(name);
            rest = &rest[start + len + 1..];
        }
        path.push_str(rest);

        let query = options
            .iter()
            .filter(|(key, _)| !params.iter().any(|name| *name == key.as_str()))
            .filter_map(|(key, value)| param_value(value).map(|v| (key.clone(), v)))
            .collect();

        Ok(EndpointRequest {
            query,
            ..EndpointRequest::get(path)
        })
    }
}
