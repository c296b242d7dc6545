//! Authenticated JSON requests against the REST backend.
//!
//! Every request carries the stored bearer token, is aborted after
//! `API_TIMEOUT_MS`, and a 401 response ends the current session.

use contracts::config::API_TIMEOUT_MS;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Drops the stored token and reloads, which lands on the login screen.
fn end_session() {
    log::warn!("api: 401 received, clearing session");
    storage::clear_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

async fn execute<B: Serialize + ?Sized>(
    method: Method,
    path: &str,
    body: Option<&B>,
    what: &str,
) -> Result<Response, String> {
    let url = api_url(path);
    let mut request = builder(method, &url);
    let token = storage::get_token();
    if let Some(token) = &token {
        request = request.header("Authorization", &bearer(token));
    }

    let controller =
        AbortController::new().map_err(|_| "Failed to create abort controller".to_string())?;
    let request = request.abort_signal(Some(&controller.signal()));
    let request = match body {
        Some(body) => request.json(body),
        None => request.build(),
    }
    .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let _timeout = Timeout::new(API_TIMEOUT_MS, move || controller.abort());

    log::debug!("api: {:?} {}", method, path);
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    // A 401 without a session is a plain failure, e.g. wrong credentials.
    if response.status() == 401 && token.is_some() {
        end_session();
        return Err("Session expired, please sign in again".to_string());
    }
    if !response.ok() {
        return Err(format!("Failed to {}: {}", what, response.status()));
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str, what: &str) -> Result<T, String> {
    let response = execute::<()>(Method::Get, path, None, what).await?;
    parse(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B, what: &str) -> Result<T, String>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = execute(Method::Post, path, Some(body), what).await?;
    parse(response).await
}

/// Sends the body and ignores whatever the backend answers with.
pub async fn put_json<B: Serialize + ?Sized>(path: &str, body: &B, what: &str) -> Result<(), String> {
    execute(Method::Put, path, Some(body), what).await.map(|_| ())
}

pub async fn delete(path: &str, what: &str) -> Result<(), String> {
    execute::<()>(Method::Delete, path, None, what).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
