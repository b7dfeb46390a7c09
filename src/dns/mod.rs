//! Connection glue for the Cloud DNS JSON API.

mod config;
mod connection;
mod error;

pub use config::{ConnectionConfig, API_BASE_URL, API_VERSION};
pub use connection::{
    ApiRequest, ApiResponse, Connection, HttpTransport, RequestBody, CLIENT_INFO_HEADER,
};
pub use error::ConnectionError;
