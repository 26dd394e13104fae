//! API utilities for frontend-backend communication
//!
//! The RAG backend lives at a fixed address. It can be changed only at build
//! time through the `RAG_API_BASE` environment variable, e.g.
//! `RAG_API_BASE=https://rag.example.com trunk build`.

/// Default backend address (Spring service started locally)
const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Get the base URL for API requests
///
/// # Returns
/// - `RAG_API_BASE` captured at compile time, or `http://localhost:8080`
/// - Never ends with a slash
pub fn api_base() -> String {
    let base = option_env!("RAG_API_BASE").unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/chat");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
