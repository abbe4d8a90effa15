//! Client library for the AMap weather API.
//!
//! This crate defines:
//! - [`WeatherClient`]: validation, request construction and response normalization
//! - The [`Transport`] seam and its reqwest-backed default
//! - Typed views over the JSON payload
//!
//! It is used by `amap-weather-cli`, but has no CLI, configuration file or
//! environment dependencies of its own.

pub mod client;
pub mod error;
pub mod model;
pub mod params;
pub mod transport;

pub use client::{JsonMap, WEATHER_API_URL, WeatherClient, WeatherResult};
pub use error::WeatherError;
pub use model::{Cast, Forecast, LiveWeather, WeatherReport};
pub use params::{OutputFormat, WeatherType};
pub use transport::{HttpTransport, Transport, TransportOptions};
