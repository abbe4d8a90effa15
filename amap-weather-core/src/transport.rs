//! Transport seam between [`WeatherClient`](crate::WeatherClient) and the network.
//!
//! The client only talks to a [`Transport`]. [`HttpTransport`] is the real one;
//! tests inject their own.

use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod http;

pub use http::HttpTransport;

/// Options applied to a transport. Unset fields fall back to the transport's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Total request timeout.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    /// Proxy URL used for every request.
    pub proxy: Option<String>,
}

impl TransportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Overlay `other` on top of `self`: fields set in `other` win, the rest are kept.
    pub fn merge(self, other: TransportOptions) -> Self {
        Self {
            timeout: other.timeout.or(self.timeout),
            connect_timeout: other.connect_timeout.or(self.connect_timeout),
            user_agent: other.user_agent.or(self.user_agent),
            proxy: other.proxy.or(self.proxy),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Executes HTTP GET requests on behalf of the client.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Send a GET to `url` with `query` appended and return the body text.
    ///
    /// Any failure, including a non-success status, is an error whose
    /// message is reported to the caller unchanged.
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> anyhow::Result<String>;

    /// Currently active options.
    fn options(&self) -> &TransportOptions;

    /// Replace the active options with a complete set.
    fn configure(&mut self, options: TransportOptions) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_only_set_fields() {
        let base = TransportOptions::new()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("amap-weather/0.1");
        let merged = base.merge(TransportOptions::new().with_timeout(Duration::from_secs(10)));

        assert_eq!(merged.timeout, Some(Duration::from_secs(10)));
        assert_eq!(merged.user_agent.as_deref(), Some("amap-weather/0.1"));
        assert_eq!(merged.connect_timeout, None);
    }

    #[test]
    fn merge_with_empty_keeps_everything() {
        let base = TransportOptions::new()
            .with_connect_timeout(Duration::from_secs(2))
            .with_proxy("http://127.0.0.1:8080");
        let merged = base.clone().merge(TransportOptions::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn default_options_are_empty() {
        assert!(TransportOptions::default().is_empty());
        assert!(!TransportOptions::new().with_timeout(Duration::from_millis(1)).is_empty());
    }
}
