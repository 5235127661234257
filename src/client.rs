// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Thin wrapper over the finance API. Attaches the session's bearer token to every call,
//! classifies failures, and is the single place that reacts to 401/403.

use crate::config::Config;
use crate::error::ApiError;
use crate::session::Session;
use crate::utils::http_client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// One round trip. Implementations report transport failures only; status handling belongs
/// to [`ApiClient`].
pub trait Transport {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            client: http_client(config.timeout)?,
            base_url: config.api_url.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(RawResponse { status, body })
    }
}

pub struct ApiClient {
    transport: Box<dyn Transport>,
    session: Session,
}

impl ApiClient {
    pub fn new(transport: Box<dyn Transport>, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn connect(config: &Config, session: Session) -> Result<Self, ApiError> {
        Ok(Self::new(Box::new(HttpTransport::new(config)?), session))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// User id from the stored login, if the backend sent one.
    pub fn stored_user_id(&self) -> Result<Option<i64>, ApiError> {
        Ok(self.session.user_id()?)
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, path))
    }

    pub fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut req = ApiRequest::new(Method::Get, path);
        req.query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.fetch(req)
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.fetch(with_body(Method::Post, path, body)?)
    }

    /// POST whose response body is ignored.
    pub fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(with_body(Method::Post, path, body)?).map(|_| ())
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.fetch(with_body(Method::Put, path, body)?)
    }

    pub fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(with_body(Method::Put, path, body)?).map(|_| ())
    }

    /// Bodiless PUT, e.g. the restore endpoints.
    pub fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::new(Method::Put, path)).map(|_| ())
    }

    pub fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::new(Method::Delete, path)).map(|_| ())
    }

    fn fetch<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, ApiError> {
        let path = req.path.clone();
        let resp = self.send(req)?;
        let body = if resp.body.trim().is_empty() {
            "null"
        } else {
            resp.body.as_str()
        };
        serde_json::from_str(body).map_err(|source| ApiError::Decode { path, source })
    }

    fn send(&self, mut req: ApiRequest) -> Result<RawResponse, ApiError> {
        req.bearer = self.session.token()?;
        let resp = self.transport.execute(&req)?;
        debug!(method = req.method.as_str(), path = %req.path, status = resp.status, "api call");
        match resp.status {
            200..=299 => Ok(resp),
            401 | 403 => {
                warn!(status = resp.status, path = %req.path, "authorization failed; clearing session");
                self.session.clear()?;
                Err(ApiError::Unauthorized {
                    status: resp.status,
                })
            }
            400..=499 => Err(ApiError::Validation {
                status: resp.status,
                message: server_message(&resp.body),
            }),
            status => Err(ApiError::Unexpected {
                status,
                body: resp.body,
            }),
        }
    }
}

fn with_body<B: Serialize>(method: Method, path: &str, body: &B) -> Result<ApiRequest, ApiError> {
    let mut req = ApiRequest::new(method, path);
    req.body = Some(serde_json::to_value(body).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })?);
    Ok(req)
}

/// Pull a human message out of an error body: `{"message": ...}` JSON, a bare JSON string,
/// or plain text.
pub fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(|v| v.as_str())
            .map(str::to_string),
        Ok(serde_json::Value::String(s)) => Some(s),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}
