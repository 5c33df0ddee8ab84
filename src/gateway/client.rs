//! HTTP client forwarding validated requests to the booking server.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, Method},
    response::Response,
};
use serde::Serialize;
use url::Url;

use crate::{gateway::error::GatewayError, model::api::USER_ID_HEADER};

/// A request to replay against the booking server.
pub struct ForwardRequest {
    method: Method,
    path: String,
    query: Option<String>,
    user_id: Option<HeaderValue>,
    body: Option<serde_json::Value>,
}

impl ForwardRequest {
    /// Starts a request for `path` on the server, e.g. `/server/bookings`.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            user_id: None,
            body: None,
        }
    }

    /// Copies the acting user header from the inbound request, if present.
    pub fn user(mut self, headers: &HeaderMap) -> Self {
        self.user_id = headers.get(USER_ID_HEADER).cloned();
        self
    }

    /// Forwards the inbound query string verbatim.
    pub fn query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    /// Attaches a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, GatewayError> {
        let value = serde_json::to_value(body)
            .map_err(|e| GatewayError::BadRequest(format!("Unserializable body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Client for the booking server.
///
/// Cloning is cheap: `reqwest::Client` shares its connection pool between clones.
#[derive(Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ServerClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Sends a request to the server and relays its response.
    ///
    /// The server's status code, content type and body are passed through unchanged, so
    /// server-side rejections reach the client exactly as the server produced them.
    ///
    /// # Returns
    /// - `Ok(Response)` - The server's response, whatever its status
    /// - `Err(GatewayError::InvalidUrl)` - Path could not be joined onto the base URL
    /// - `Err(GatewayError::Upstream)` - Server unreachable or response unreadable
    pub async fn forward(&self, request: ForwardRequest) -> Result<Response, GatewayError> {
        let mut url = self.base_url.join(&request.path)?;
        url.set_query(request.query.as_deref());

        tracing::debug!("Forwarding {} {}", request.method, url);

        let mut builder = self.http.request(request.method, url);
        if let Some(user_id) = request.user_id {
            builder = builder.header(USER_ID_HEADER, user_id);
        }
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let upstream = builder.send().await?;

        let status = upstream.status();
        let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
        let bytes = upstream.bytes().await?;

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        if let Some(content_type) = content_type {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }

        Ok(response)
    }
}
