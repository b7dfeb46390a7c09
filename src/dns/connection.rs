//! Request shaping for the DNS JSON API.
//!
//! [`Connection`] turns an API path into a versioned URL, attaches the client
//! identification headers, and hands the finished request to an
//! [`HttpTransport`]. Moving bytes over the network is the transport's job.

use std::future::Future;

use http::{
    header::{HeaderName, ACCEPT_ENCODING, CONTENT_TYPE, USER_AGENT},
    Method, Request, Response,
};
use url::Url;

use super::{ConnectionConfig, ConnectionError};
use crate::observability::{log_debug, log_trace};

/// Header carrying the client library identification.
pub const CLIENT_INFO_HEADER: &str = "x-goog-api-client";

/// Sends a fully built request and returns the raw response.
pub trait HttpTransport {
    /// Transport failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver `request` and wait for its response.
    fn send(
        &self,
        request: Request<Vec<u8>>,
    ) -> impl Future<Output = Result<Response<Vec<u8>>, Self::Error>> + Send;
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Sent verbatim.
    Raw(Vec<u8>),
}

/// Decoded response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed JSON body. An empty body parses as an empty object.
    Json(serde_json::Value),
    /// Raw body bytes.
    Raw(Vec<u8>),
}

/// A single API call: method, path below the versioned root, query and body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
    expect_json: bool,
}

impl ApiRequest {
    /// Request `path` (e.g. `/projects/p/managedZones`) with `method`,
    /// expecting a JSON response.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            expect_json: true,
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Attach a body.
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Return the response bytes instead of parsing JSON.
    pub fn raw(mut self) -> Self {
        self.expect_json = false;
        self
    }
}

/// Connection to the DNS JSON API over a caller-supplied transport.
#[derive(Debug)]
pub struct Connection<T> {
    config: ConnectionConfig,
    transport: T,
}

impl<T> Connection<T> {
    /// Connect with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(ConnectionConfig::default(), transport)
    }

    /// Connect with an explicit configuration.
    pub fn with_config(config: ConnectionConfig, transport: T) -> Self {
        Connection { config, transport }
    }

    /// Connection settings.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build `{base}/dns/{version}{path}`, appending `query` when non-empty.
    pub fn build_api_url<K, V>(&self, path: &str, query: &[(K, V)]) -> Result<Url, ConnectionError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = Url::parse(&format!(
            "{}/dns/{}{}",
            self.config.api_base_url, self.config.api_version, path
        ))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_ref(), v.as_ref())));
        }
        Ok(url)
    }

    fn build_request(&self, request: &ApiRequest) -> Result<Request<Vec<u8>>, ConnectionError> {
        let url = self.build_api_url(&request.path, &request.query)?;
        let mut builder = Request::builder()
            .method(request.method.clone())
            .uri(url.as_str())
            .header(ACCEPT_ENCODING, "gzip")
            .header(
                HeaderName::from_static(CLIENT_INFO_HEADER),
                self.config.client_info.as_str(),
            )
            .header(USER_AGENT, self.config.user_agent.as_str());
        let body = match &request.body {
            Some(RequestBody::Json(value)) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                serde_json::to_vec(value)?
            }
            Some(RequestBody::Raw(bytes)) => bytes.clone(),
            None => Vec::new(),
        };
        Ok(builder.body(body)?)
    }
}

impl<T> Connection<T>
where
    T: HttpTransport,
{
    /// Send one API request and decode its response.
    ///
    /// # Errors
    /// Returns [`ConnectionError::Status`] for non-2xx responses and
    /// [`ConnectionError::Transport`] when the transport fails.
    pub async fn api_request(&self, request: ApiRequest) -> Result<ApiResponse, ConnectionError> {
        let http_request = self.build_request(&request)?;
        log_debug!(
            component = "dns",
            event = "api_request",
            method = %http_request.method(),
            uri = %http_request.uri(),
        );

        let response = self
            .transport
            .send(http_request)
            .await
            .map_err(|err| ConnectionError::Transport(Box::new(err)))?;
        let status = response.status();
        let body = response.into_body();
        if !status.is_success() {
            log_debug!(
                component = "dns",
                event = "api_request_failed",
                status = status.as_u16(),
            );
            return Err(ConnectionError::Status { status, body });
        }
        log_trace!(
            component = "dns",
            event = "api_response",
            status = status.as_u16(),
            body_len = body.len(),
        );

        if !request.expect_json {
            return Ok(ApiResponse::Raw(body));
        }
        if body.is_empty() {
            return Ok(ApiResponse::Json(serde_json::Value::Object(
                serde_json::Map::new(),
            )));
        }
        Ok(ApiResponse::Json(serde_json::from_slice(&body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn() -> Connection<()> {
        Connection::new(())
    }

    #[test]
    fn api_url_without_query() {
        let url = conn().build_api_url::<&str, &str>("/foo", &[]).unwrap();
        assert_eq!(url.as_str(), "https://www.googleapis.com/dns/v1/foo");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn api_url_with_query_keeps_path() {
        let url = conn()
            .build_api_url("/foo", &[("bar", "baz"), ("q", "a b")])
            .unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("www.googleapis.com"));
        assert_eq!(url.path(), "/dns/v1/foo");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("bar".to_owned(), "baz".to_owned()),
                ("q".to_owned(), "a b".to_owned()),
            ]
        );
    }

    #[test]
    fn api_url_follows_config() {
        let config = ConnectionConfig::default()
            .api_base_url("http://localhost:8080")
            .api_version("v2beta1");
        let conn = Connection::with_config(config, ());

        let url = conn.build_api_url::<&str, &str>("/zones", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/dns/v2beta1/zones");
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let conn = Connection::with_config(ConnectionConfig::default().api_base_url("not a url"), ());
        assert!(matches!(
            conn.build_api_url::<&str, &str>("/foo", &[]),
            Err(ConnectionError::Url(_))
        ));
    }

    #[test]
    fn request_carries_client_headers() {
        let request = conn()
            .build_request(&ApiRequest::new(Method::POST, "/rainbow").body(RequestBody::Json(
                serde_json::json!({"name": "zone"}),
            )))
            .unwrap();
        let headers = request.headers();

        assert_eq!(headers[ACCEPT_ENCODING], "gzip");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(
            headers[USER_AGENT],
            concat!("gcloud-rust/", env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(
            headers[CLIENT_INFO_HEADER],
            concat!("gl-rust gccl/", env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(request.body(), br#"{"name":"zone"}"#);
    }
}
