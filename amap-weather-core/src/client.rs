//! The AMap weather client.

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::{
    error::WeatherError,
    params::{OutputFormat, WeatherType},
    transport::{HttpTransport, Transport, TransportOptions},
};

/// Fixed AMap weather endpoint.
pub const WEATHER_API_URL: &str = "https://restapi.amap.com/v3/weather/weatherInfo";

/// A decoded JSON object as returned for `output=json`.
pub type JsonMap = Map<String, Value>;

/// Normalized result of a weather query.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherResult {
    /// Body decoded into a key-value mapping.
    Json(JsonMap),
    /// Body returned as-is.
    Xml(String),
}

impl WeatherResult {
    pub fn as_json(&self) -> Option<&JsonMap> {
        match self {
            WeatherResult::Json(map) => Some(map),
            WeatherResult::Xml(_) => None,
        }
    }

    pub fn into_json(self) -> Option<JsonMap> {
        match self {
            WeatherResult::Json(map) => Some(map),
            WeatherResult::Xml(_) => None,
        }
    }

    pub fn as_xml(&self) -> Option<&str> {
        match self {
            WeatherResult::Json(_) => None,
            WeatherResult::Xml(body) => Some(body),
        }
    }
}

/// Client for the AMap weather API.
///
/// Owns one transport. The default is [`HttpTransport`]; any other
/// [`Transport`] can be injected with [`WeatherClient::with_transport`].
#[derive(Clone)]
pub struct WeatherClient<T = HttpTransport> {
    api_key: String,
    transport: T,
}

impl<T: Transport> std::fmt::Debug for WeatherClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("api_key", &"[REDACTED]")
            .field("transport", &self.transport)
            .finish()
    }
}

impl WeatherClient<HttpTransport> {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, HttpTransport::new())
    }

    /// Create a client whose HTTP transport starts with `options` applied.
    pub fn with_options(
        api_key: impl Into<String>,
        options: TransportOptions,
    ) -> Result<Self, WeatherError> {
        let transport = HttpTransport::with_options(options)
            .map_err(|e| WeatherError::InvalidOptions(format!("{e:#}")))?;
        Ok(Self::with_transport(api_key, transport))
    }
}

impl<T: Transport> WeatherClient<T> {
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            api_key: api_key.into(),
            transport,
        }
    }

    /// The owned transport, e.g. to read back its active options.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Merge `options` over the active transport options.
    ///
    /// Applies to every request sent afterwards. Fields left unset in
    /// `options` keep their current value, so a set option cannot be cleared
    /// here; use [`reset_transport_options`](Self::reset_transport_options).
    pub fn set_transport_options(&mut self, options: TransportOptions) -> Result<(), WeatherError> {
        let merged = self.transport.options().clone().merge(options);
        self.transport
            .configure(merged)
            .map_err(|e| WeatherError::InvalidOptions(format!("{e:#}")))
    }

    /// Drop every transport option, returning to the transport defaults.
    pub fn reset_transport_options(&mut self) -> Result<(), WeatherError> {
        self.transport
            .configure(TransportOptions::default())
            .map_err(|e| WeatherError::InvalidOptions(format!("{e:#}")))
    }

    /// Query with string parameters, validating them first.
    ///
    /// `weather_type` is checked before `format`. Nothing is sent if either is invalid.
    pub async fn get_weather(
        &self,
        city: &str,
        weather_type: &str,
        format: &str,
    ) -> Result<WeatherResult, WeatherError> {
        let weather_type = WeatherType::try_from(weather_type)?;
        let format = OutputFormat::try_from(format)?;

        self.query(city, weather_type, format).await
    }

    pub async fn query(
        &self,
        city: &str,
        weather_type: WeatherType,
        format: OutputFormat,
    ) -> Result<WeatherResult, WeatherError> {
        let body = self.fetch(city, weather_type, format).await?;

        match format {
            OutputFormat::Json => Ok(WeatherResult::Json(decode_json(&body)?)),
            OutputFormat::Xml => Ok(WeatherResult::Xml(body)),
        }
    }

    /// Live weather for `city`, as JSON.
    pub async fn get_live_weather(&self, city: &str) -> Result<JsonMap, WeatherError> {
        self.query_json(city, WeatherType::Base).await
    }

    /// Forecast for `city`, as JSON.
    pub async fn get_forecasts_weather(&self, city: &str) -> Result<JsonMap, WeatherError> {
        self.query_json(city, WeatherType::All).await
    }

    async fn query_json(
        &self,
        city: &str,
        weather_type: WeatherType,
    ) -> Result<JsonMap, WeatherError> {
        match self.query(city, weather_type, OutputFormat::Json).await? {
            WeatherResult::Json(map) => Ok(map),
            WeatherResult::Xml(_) => unreachable!("json output yields a json result"),
        }
    }

    #[instrument(skip(self))]
    async fn fetch(
        &self,
        city: &str,
        weather_type: WeatherType,
        format: OutputFormat,
    ) -> Result<String, WeatherError> {
        let query = [
            ("key", self.api_key.as_str()),
            ("city", city),
            ("extensions", weather_type.as_str()),
            ("output", format.as_str()),
        ];

        debug!("Fetching weather");

        self.transport
            .get(WEATHER_API_URL, &query)
            .await
            .map_err(|e| WeatherError::Http(format!("{e:#}")))
    }
}

fn decode_json(body: &str) -> Result<JsonMap, WeatherError> {
    Ok(serde_json::from_str(body)?)
}
