use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Failure of a JSON round trip, mapped by each client onto its own error
/// type.
#[derive(Debug)]
pub enum HttpError {
    Transport(reqwest::Error),
    Status(StatusCode, String),
}

impl From<reqwest::Error> for HttpError {
    /// The URL is dropped so that query strings never reach error messages.
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.without_url())
    }
}

impl From<HttpError> for crate::LanguageModelError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Transport(e) => Self::Transport(e),
            HttpError::Status(status, body) => Self::StatusCode(status, body),
        }
    }
}

impl From<HttpError> for crate::StoreError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Transport(e) => Self::Transport(e),
            HttpError::Status(status, body) => Self::StatusCode(status, body),
        }
    }
}

/// Create a JSON request, parse the response.
/// Throws error on non OK status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
    timeout: Duration,
) -> Result<R, HttpError> {
    let response = client
        .post(url)
        .headers(headers)
        .timeout(timeout)
        .json(data)
        .send()
        .await?;
    parse_json(response).await
}

/// Issue a GET request, parse the JSON response.
/// Throws error on non OK status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: HeaderMap,
    timeout: Duration,
) -> Result<R, HttpError> {
    let response = client
        .get(url)
        .headers(headers)
        .timeout(timeout)
        .send()
        .await?;
    parse_json(response).await
}

async fn parse_json<R: DeserializeOwned>(response: Response) -> Result<R, HttpError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(HttpError::Status(
            status,
            response.text().await.unwrap_or_default(),
        ))
    }
}
