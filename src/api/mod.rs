//! Blocking REST client for the dashboard backend.
//!
//! One request per call, no retry. Every 2xx body is parsed into a typed
//! record and passed through its [`Validate`] impl before it reaches the
//! caller.

mod asistencias;
mod auth;
mod gastos;
mod giras;
mod incidencias;
mod sedes;
mod usuarios;

pub use incidencias::IncidenciaQuery;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Validate;
use crate::session::Session;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Error body sent by the backend on 4xx/5xx.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "error", alias = "msg")]
    message: Option<String>,
}

pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(cfg: &Config, session: Option<&Session>) -> AppResult<Self> {
        // trailing slash so join() appends instead of replacing "api"
        let base_url = Url::parse(&format!("{}/", cfg.api_base()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .user_agent(concat!("rgiras/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: session.map(|s| s.token.clone()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path relative to the API base ("giras/123").
    pub fn url(&self, path: &str) -> AppResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    fn send(&self, method: &str, url: Url, req: RequestBuilder) -> AppResult<(u16, String)> {
        debug!("{method} {url}");
        let response = self.authorize(req).send().map_err(|e| {
            error!("{method} {url} failed: {e}");
            AppError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!("{method} {url} -> {status} ({} bytes)", body.len());
        Ok((status, body))
    }

    pub fn get<T: DeserializeOwned + Validate>(&self, url: Url) -> AppResult<T> {
        let what = url.path().to_string();
        let (status, body) = self.send("GET", url.clone(), self.http.get(url))?;
        decode_response(status, &body, &what)
    }

    pub fn post<B: Serialize, T: DeserializeOwned + Validate>(
        &self,
        url: Url,
        body: &B,
    ) -> AppResult<T> {
        let what = url.path().to_string();
        let (status, text) = self.send("POST", url.clone(), self.http.post(url).json(body))?;
        decode_response(status, &text, &what)
    }

    /// POST whose response body is not needed.
    pub fn post_unit<B: Serialize>(&self, url: Url, body: &B) -> AppResult<()> {
        let what = url.path().to_string();
        let (status, text) = self.send("POST", url.clone(), self.http.post(url).json(body))?;
        check_status(status, &text, &what)
    }

    /// PUT; the response body carries nothing the client uses.
    pub fn put<B: Serialize>(&self, url: Url, body: &B) -> AppResult<()> {
        let what = url.path().to_string();
        let (status, text) = self.send("PUT", url.clone(), self.http.put(url).json(body))?;
        check_status(status, &text, &what)
    }

    pub fn delete(&self, url: Url) -> AppResult<()> {
        let what = url.path().to_string();
        let (status, text) = self.send("DELETE", url.clone(), self.http.delete(url))?;
        check_status(status, &text, &what)
    }
}

fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Map a non-2xx status to an error; 2xx passes.
pub fn check_status(status: u16, body: &str, what: &str) -> AppResult<()> {
    match status {
        200..=299 => Ok(()),
        401 => Err(AppError::Unauthorized),
        404 => Err(AppError::NotFound(
            backend_message(body).unwrap_or_else(|| what.to_string()),
        )),
        _ => {
            let message = backend_message(body).unwrap_or_else(|| match status {
                403 => "Access denied".to_string(),
                500..=599 => "Internal server error".to_string(),
                _ => body.trim().chars().take(200).collect(),
            });
            Err(AppError::Api { status, message })
        }
    }
}

/// Turn a status and body into a validated record.
pub fn decode_response<T: DeserializeOwned + Validate>(
    status: u16,
    body: &str,
    what: &str,
) -> AppResult<T> {
    check_status(status, body, what)?;

    let value: T = serde_json::from_str(body).map_err(|e| AppError::Schema {
        what: format!("{} ({what})", T::WHAT),
        detail: e.to_string(),
    })?;

    value.validate().map_err(|detail| AppError::Schema {
        what: format!("{} ({what})", T::WHAT),
        detail,
    })?;

    Ok(value)
}
