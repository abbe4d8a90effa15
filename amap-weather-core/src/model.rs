//! Typed views over the AMap weather JSON payload.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::JsonMap;

const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Full response envelope.
///
/// `lives` is filled for `extensions=base`, `forecasts` for `extensions=all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// "1" on success, "0" on failure.
    pub status: String,
    #[serde(default)]
    pub count: Option<String>,
    pub info: String,
    #[serde(default)]
    pub infocode: Option<String>,
    #[serde(default)]
    pub lives: Vec<LiveWeather>,
    #[serde(default)]
    pub forecasts: Vec<Forecast>,
}

impl WeatherReport {
    pub fn from_map(map: &JsonMap) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(map.clone()))
    }

    pub fn is_success(&self) -> bool {
        self.status == "1"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveWeather {
    pub province: String,
    pub city: String,
    pub adcode: String,
    pub weather: String,
    pub temperature: String,
    pub winddirection: String,
    pub windpower: String,
    pub humidity: String,
    pub reporttime: String,
}

impl LiveWeather {
    pub fn report_time(&self) -> Option<NaiveDateTime> {
        parse_report_time(&self.reporttime)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub adcode: String,
    pub province: String,
    pub reporttime: String,
    #[serde(default)]
    pub casts: Vec<Cast>,
}

impl Forecast {
    pub fn report_time(&self) -> Option<NaiveDateTime> {
        parse_report_time(&self.reporttime)
    }
}

/// One forecast day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cast {
    pub date: String,
    pub week: String,
    pub dayweather: String,
    pub nightweather: String,
    pub daytemp: String,
    pub nighttemp: String,
    pub daywind: String,
    pub nightwind: String,
    pub daypower: String,
    pub nightpower: String,
}

impl Cast {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

fn parse_report_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, REPORT_TIME_FORMAT).ok()
}
