use crate::error::{BadEnvVarSnafu, ParseUrlSnafu, RosterResult, UnusableBaseUrlSnafu};
use dotenvy::var;
use reqwest::Url;
use snafu::ResultExt;
use std::sync::Arc;

pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    server_ip: Arc<str>,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        let server_ip = var("ROSTER_SERVER_IP").unwrap_or_else(|_| DEFAULT_SERVER_IP.to_string());

        Ok(Self::from_parts(ApiConfig::new()?, server_ip))
    }

    pub fn from_parts(api_config: ApiConfig, server_ip: impl Into<Arc<str>>) -> Self {
        Self {
            api_config: Arc::new(api_config),
            server_ip: server_ip.into(),
        }
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new() -> RosterResult<Self> {
        let base_url = var("ROSTER_API_URL").context(BadEnvVarSnafu {
            name: "ROSTER_API_URL",
        })?;

        Self::from_base_url(&base_url)
    }

    pub fn from_base_url(base_url: &str) -> RosterResult<Self> {
        let base_url = Url::parse(base_url).context(ParseUrlSnafu {
            original: base_url,
        })?;
        snafu::ensure!(
            !base_url.cannot_be_a_base(),
            UnusableBaseUrlSnafu { url: base_url }
        );

        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn parses_backend_url() {
        let config = ApiConfig::from_base_url("http://localhost:5000/api").unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:5000/api");
    }

    #[test]
    fn rejects_garbage_backend_url() {
        let err = ApiConfig::from_base_url("not a url").unwrap_err();
        assert!(matches!(err, RosterError::ParseUrl { .. }));
    }

    #[test]
    fn rejects_url_without_path_hierarchy() {
        let err = ApiConfig::from_base_url("mailto:registrar@uni.edu").unwrap_err();
        assert!(matches!(err, RosterError::UnusableBaseUrl { .. }));
    }
}
