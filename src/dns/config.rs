/// Default API host.
pub const API_BASE_URL: &str = "https://www.googleapis.com";

/// Default API version segment.
pub const API_VERSION: &str = "v1";

const USER_AGENT: &str = concat!("gcloud-rust/", env!("CARGO_PKG_VERSION"));

const CLIENT_INFO: &str = concat!("gl-rust gccl/", env!("CARGO_PKG_VERSION"));

/// Settings for a DNS [`Connection`](super::Connection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub(crate) api_base_url: String,
    pub(crate) api_version: String,
    pub(crate) user_agent: String,
    pub(crate) client_info: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            api_base_url: API_BASE_URL.to_owned(),
            api_version: API_VERSION.to_owned(),
            user_agent: USER_AGENT.to_owned(),
            client_info: CLIENT_INFO.to_owned(),
        }
    }
}

impl ConnectionConfig {
    /// Override the API host, e.g. to target an emulator.
    pub fn api_base_url(self, api_base_url: impl Into<String>) -> Self {
        ConnectionConfig {
            api_base_url: api_base_url.into(),
            ..self
        }
    }

    /// Override the API version segment.
    pub fn api_version(self, api_version: impl Into<String>) -> Self {
        ConnectionConfig {
            api_version: api_version.into(),
            ..self
        }
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        ConnectionConfig {
            user_agent: user_agent.into(),
            ..self
        }
    }

    /// Value sent in the `X-Goog-API-Client` header.
    pub fn client_info(self, client_info: impl Into<String>) -> Self {
        ConnectionConfig {
            client_info: client_info.into(),
            ..self
        }
    }

    /// Configured API host.
    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Configured API version segment.
    pub fn version(&self) -> &str {
        &self.api_version
    }

    /// Value sent in the `User-Agent` header.
    pub fn user_agent_header(&self) -> &str {
        &self.user_agent
    }

    /// Value sent in the `X-Goog-API-Client` header.
    pub fn client_info_header(&self) -> &str {
        &self.client_info
    }
}
