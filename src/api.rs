//! REST Client
//!
//! Thin HTTP boundary against the `/characters` collection endpoint.
//! No retries, no timeouts; callers surface errors as status text.

use std::fmt;

use gloo_net::http::Request;

use crate::models::Character;

const API_URL: &str = "http://localhost:3000/characters";

/// Failure at the HTTP boundary
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure (server unreachable, request aborted)
    Network(String),
    /// Server answered with a non-2xx status
    Http(u16),
    /// Response body was not the expected JSON
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http(status) => write!(f, "server returned status {status}"),
            ApiError::Decode(msg) => write!(f, "bad response: {msg}"),
        }
    }
}

impl ApiError {
    fn network(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }

    fn decode(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

// ========================
// Request Bodies
// ========================

#[derive(serde::Serialize)]
struct NewCharacterBody<'a> {
    name: &'a str,
    image: &'a str,
    votes: u32,
}

#[derive(serde::Serialize)]
struct VotesBody {
    votes: u32,
}

// ========================
// Operations
// ========================

/// GET the full character collection
pub async fn list() -> Result<Vec<Character>, ApiError> {
    let resp = Request::get(API_URL).send().await.map_err(ApiError::network)?;
    if !resp.ok() {
        return Err(ApiError::Http(resp.status()));
    }
    resp.json::<Vec<Character>>().await.map_err(ApiError::decode)
}

/// POST a new character; the server assigns the id, votes start at 0
pub async fn create(name: &str, image: &str) -> Result<Character, ApiError> {
    let resp = Request::post(API_URL)
        .json(&NewCharacterBody { name, image, votes: 0 })
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if !resp.ok() {
        return Err(ApiError::Http(resp.status()));
    }
    resp.json::<Character>().await.map_err(ApiError::decode)
}

/// PATCH a character's vote count to an absolute value; returns the updated record
pub async fn patch_votes(id: u32, votes: u32) -> Result<Character, ApiError> {
    let resp = Request::patch(&format!("{API_URL}/{id}"))
        .json(&VotesBody { votes })
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if !resp.ok() {
        return Err(ApiError::Http(resp.status()));
    }
    resp.json::<Character>().await.map_err(ApiError::decode)
}
