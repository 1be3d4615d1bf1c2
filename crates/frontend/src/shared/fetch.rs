//! JSON helpers over `gloo_net` with an error taxonomy the UI can act on.
//!
//! `Cancelled` marks a request superseded by a newer one; it must never
//! reach an error signal. Everything else renders as inline page text.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use web_sys::AbortSignal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request was aborted because a newer one superseded it.
    Cancelled,
    /// Non-2xx response from the backend.
    Http { status: u16, message: String },
    /// Transport-level failure (connection refused, DNS, CORS).
    Network(String),
    /// The response body did not match the expected shape.
    Decode(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }

    fn from_gloo(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => FetchError::Cancelled,
            gloo_net::Error::JsError(js) => FetchError::Network(js.message),
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            gloo_net::Error::GlooError(msg) => FetchError::Network(msg),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Cancelled => write!(f, "request cancelled"),
            FetchError::Http { status, message } if message.is_empty() => {
                write!(f, "HTTP {}", status)
            }
            FetchError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Decode(msg) => write!(f, "bad response: {}", msg),
        }
    }
}

async fn into_error(response: gloo_net::http::Response) -> FetchError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    FetchError::Http { status, message }
}

pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, FetchError> {
    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(FetchError::from_gloo)?;
    if !response.ok() {
        return Err(into_error(response).await);
    }
    response.json::<T>().await.map_err(FetchError::from_gloo)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, FetchError> {
    let response = Request::post(url)
        .json(body)
        .map_err(FetchError::from_gloo)?
        .send()
        .await
        .map_err(FetchError::from_gloo)?;
    if !response.ok() {
        return Err(into_error(response).await);
    }
    response.json::<T>().await.map_err(FetchError::from_gloo)
}

/// PUT with a JSON body; the response body is discarded.
pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), FetchError> {
    let response = Request::put(url)
        .json(body)
        .map_err(FetchError::from_gloo)?
        .send()
        .await
        .map_err(FetchError::from_gloo)?;
    if !response.ok() {
        return Err(into_error(response).await);
    }
    Ok(())
}

/// DELETE; the response body (status message JSON) is discarded.
pub async fn delete(url: &str) -> Result<(), FetchError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(FetchError::from_gloo)?;
    if !response.ok() {
        return Err(into_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let err = FetchError::Http {
            status: 404,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP 404");
        assert!(FetchError::Cancelled.is_cancelled());
        assert!(!err.is_cancelled());
    }
}
