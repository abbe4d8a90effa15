//! Human-friendly rendering of weather reports.

use amap_weather_core::{Forecast, JsonMap, LiveWeather, WeatherReport, WeatherResult};
use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;

/// Decode a JSON map into a report, failing on an API-level error status.
pub fn report_from_map(map: &JsonMap) -> Result<WeatherReport> {
    let report =
        WeatherReport::from_map(map).context("Unexpected response shape from the weather API")?;

    if !report.is_success() {
        bail!(
            "Weather API returned an error: {} (infocode {})",
            report.info,
            report.infocode.as_deref().unwrap_or("unknown")
        );
    }

    Ok(report)
}

pub fn format_live(live: &LiveWeather) -> String {
    let mut out = format!("{} {}\n", live.province, live.city);
    out.push_str(&format!("  Weather:     {}\n", live.weather));
    out.push_str(&format!("  Temperature: {}°C\n", live.temperature));
    out.push_str(&format!("  Humidity:    {}%\n", live.humidity));
    out.push_str(&format!("  Wind:        {} {}\n", live.winddirection, live.windpower));
    out.push_str(&format!("  Reported at: {}\n", reported_at(live.report_time(), &live.reporttime)));
    out
}

pub fn format_forecast(forecast: &Forecast) -> String {
    let mut out = format!(
        "{} {} (reported at {})\n",
        forecast.province,
        forecast.city,
        reported_at(forecast.report_time(), &forecast.reporttime)
    );

    for cast in &forecast.casts {
        let date = cast
            .date()
            .map(|d| d.format("%a %Y-%m-%d").to_string())
            .unwrap_or_else(|| cast.date.clone());

        out.push_str(&format!(
            "  {date}: day {} {}°C, night {} {}°C\n",
            cast.dayweather, cast.daytemp, cast.nightweather, cast.nighttemp
        ));
    }

    out
}

/// Raw output for `query`: pretty JSON or the XML body as-is.
pub fn format_raw(result: &WeatherResult) -> Result<String> {
    match result {
        WeatherResult::Json(map) => {
            serde_json::to_string_pretty(map).context("Failed to render JSON response")
        }
        WeatherResult::Xml(body) => Ok(body.clone()),
    }
}

fn reported_at(parsed: Option<NaiveDateTime>, raw: &str) -> String {
    parsed
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}
