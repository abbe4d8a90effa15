use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{Transport, TransportOptions};

/// [`Transport`] backed by a [`reqwest::Client`].
///
/// The inner client is rebuilt whenever the options change.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    options: TransportOptions,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            options: TransportOptions::default(),
        }
    }

    pub fn with_options(options: TransportOptions) -> Result<Self> {
        let http = build_client(&options)?;
        Ok(Self { http, options })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

const PROXY_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

fn build_client(options: &TransportOptions) -> Result<Client> {
    let mut builder = Client::builder();

    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = options.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(user_agent) = &options.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    if let Some(proxy) = &options.proxy {
        let url = reqwest::Url::parse(proxy)
            .with_context(|| format!("Invalid proxy URL: {proxy}"))?;
        if !PROXY_SCHEMES.contains(&url.scheme()) {
            bail!("Invalid proxy URL: {proxy} (unsupported scheme '{}')", url.scheme());
        }
        let proxy = reqwest::Proxy::all(url)
            .with_context(|| format!("Invalid proxy URL: {proxy}"))?;
        builder = builder.proxy(proxy);
    }

    builder.build().context("Failed to build HTTP client")
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        // The query string carries the API key, so errors are stripped of the URL.
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = res.status();
        debug!(%status, "Received weather response");

        let res = res.error_for_status().map_err(reqwest::Error::without_url)?;
        let body = res.text().await.map_err(reqwest::Error::without_url)?;

        Ok(body)
    }

    fn options(&self) -> &TransportOptions {
        &self.options
    }

    fn configure(&mut self, options: TransportOptions) -> Result<()> {
        self.http = build_client(&options)?;
        self.options = options;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_transport_has_no_options() {
        let transport = HttpTransport::new();
        assert!(transport.options().is_empty());
        assert_eq!(transport.options().timeout, None);
    }

    #[test]
    fn configure_replaces_options() {
        let mut transport = HttpTransport::new();
        transport
            .configure(TransportOptions::new().with_timeout(Duration::from_secs(5)))
            .expect("configure should succeed");

        assert_eq!(transport.options().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn invalid_proxy_is_rejected_and_options_kept() {
        let mut transport =
            HttpTransport::with_options(TransportOptions::new().with_timeout(Duration::from_secs(1)))
                .expect("valid options");

        let err = transport
            .configure(TransportOptions::new().with_proxy("ftp://proxy.example"))
            .unwrap_err();

        assert!(err.to_string().contains("Invalid proxy URL"));
        assert_eq!(transport.options().timeout, Some(Duration::from_secs(1)));
    }

    #[test]
    fn unparsable_proxy_is_rejected() {
        let err = HttpTransport::with_options(TransportOptions::new().with_proxy("not a url"))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid proxy URL"));
    }

    #[test]
    fn http_and_socks_proxies_are_accepted() {
        for proxy in ["http://127.0.0.1:8080", "https://proxy.example", "socks5://127.0.0.1:1080"] {
            let transport = HttpTransport::with_options(TransportOptions::new().with_proxy(proxy))
                .expect("supported proxy scheme");
            assert_eq!(transport.options().proxy.as_deref(), Some(proxy));
        }
    }
}
