//! HTTP API Client
//!
//! Functions for communicating with the InjectWatch REST API. Every request
//! except the health probe carries the bearer token from local storage; a
//! missing token short-circuits without touching the network.

use gloo_net::http::Request;

use crate::config;
use crate::state::global::Message;

/// localStorage key holding the bearer token
const TOKEN_KEY: &str = "token";

/// Read the bearer token from local storage
pub fn auth_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct MessageListResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Fetch one page of chat messages
///
/// Returns the empty page when no token is stored, which renders as the
/// signed-out empty state.
pub async fn fetch_messages(skip: usize, limit: usize) -> Result<Vec<Message>, String> {
    let Some(token) = auth_token() else {
        return Ok(Vec::new());
    };

    let url = format!(
        "{}/chat/messages?skip={}&limit={}",
        config::api_url(),
        skip,
        limit
    );

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Failed to fetch messages").await);
    }

    let result: MessageListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.messages)
}

/// Delete a single message
pub async fn delete_message(id: &str) -> Result<(), String> {
    let Some(token) = auth_token() else {
        return Err("Not signed in".to_string());
    };

    let url = format!("{}/chat/messages/{}", config::api_url(), id);

    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Failed to delete message").await);
    }

    Ok(())
}

/// Set or clear the prompt-injection flag on a message
pub async fn set_injection_flag(id: &str, flagged: bool) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct UpdateRequest {
        is_prompt_injection: bool,
    }

    let Some(token) = auth_token() else {
        return Err("Not signed in".to_string());
    };

    let url = format!("{}/chat/messages/{}", config::api_url(), id);

    let response = Request::patch(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(&UpdateRequest {
            is_prompt_injection: flagged,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Failed to update message").await);
    }

    Ok(())
}

/// Check API health
///
/// The health endpoint lives at `/api/health`, outside the versioned API
/// path, and takes no auth.
pub async fn check_health() -> Result<HealthResponse, String> {
    let url = health_url(&config::api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Health endpoint for a backend base URL
fn health_url(base: &str) -> String {
    format!("{}/api/health", base)
}

/// Decode a structured error body, falling back to a generic message
async fn error_body(response: gloo_net::http::Response, fallback: &str) -> String {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(err) => err.error,
        Err(_) => format!("{} ({})", fallback, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_url_is_outside_versioned_api() {
        let url = health_url("http://localhost:8000");
        assert_eq!(url, "http://localhost:8000/api/health");
        assert!(!url.contains("/api/v1"));
    }
}
