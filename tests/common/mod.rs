//! A tiny stand-in for the GitHub REST API, served by axum on a random port.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;

pub const ORG: &str = "octo-org";
pub const MEMBERS: [&str; 5] = ["alice", "bob", "carol", "dave", "erin"];

#[derive(Clone)]
struct FakeGithub {
    base: String,
    token: Option<String>,
}

/// Starts the fake API and returns its base URL. Requests must carry
/// `Authorization: Bearer <token>` when a token is given.
pub async fn spawn_fake_github(token: Option<&str>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let state = FakeGithub {
        base: base.clone(),
        token: token.map(str::to_string),
    };

    let app = Router::new()
        .route("/orgs/{org}/members", get(members))
        .route("/orgs/{org}/teams", get(teams))
        .route("/orgs/{org}/invitations", get(invitations))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base
}

fn authorized(state: &FakeGithub, headers: &HeaderMap) -> bool {
    match state.token {
        Some(ref token) => {
            let expected = format!("Bearer {}", token);
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                == Some(expected.as_str())
        }
        None => true,
    }
}

async fn members(
    State(state): State<FakeGithub>,
    Path(org): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if org != ORG {
        return StatusCode::NOT_FOUND.into_response();
    }

    let logins: Vec<&str> = match params.get("role").map(String::as_str) {
        Some("admin") => vec!["alice"],
        _ => MEMBERS.to_vec(),
    };
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let per_page: usize = params
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(30);

    let start = (page - 1) * per_page;
    let items: Vec<Value> = logins
        .iter()
        .skip(start)
        .take(per_page)
        .map(|login| json!({ "login": login, "type": "User" }))
        .collect();

    let mut response = Json(items).into_response();
    if start + per_page < logins.len() {
        let link = format!(
            r#"<{}/orgs/{}/members?page={}&per_page={}>; rel="next""#,
            state.base,
            org,
            page + 1,
            per_page
        );
        response
            .headers_mut()
            .insert(header::LINK, HeaderValue::from_str(&link).unwrap());
    }
    response
}

/// Answers with an object instead of a list.
async fn teams() -> Json<Value> {
    Json(json!({ "message": "not a list" }))
}

/// First page points its `next` link at another host.
async fn invitations(State(state): State<FakeGithub>, headers: HeaderMap) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut response = Json(json!([{ "login": "frank" }])).into_response();
    response.headers_mut().insert(
        header::LINK,
        HeaderValue::from_static(r#"<https://elsewhere.test/orgs/octo-org/invitations?page=2>; rel="next""#),
    );
    response
}
