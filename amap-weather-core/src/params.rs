use std::{convert::TryFrom, fmt, str::FromStr};

use crate::error::WeatherError;

/// Which report the API should return, sent as the `extensions` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeatherType {
    /// Live conditions.
    #[default]
    Base,
    /// Multi-day forecast.
    All,
}

impl WeatherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherType::Base => "base",
            WeatherType::All => "all",
        }
    }

    pub const fn all() -> &'static [WeatherType] {
        &[WeatherType::Base, WeatherType::All]
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WeatherType {
    type Error = WeatherError;

    // Matching is exact: the API only understands lowercase values.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "base" => Ok(WeatherType::Base),
            "all" => Ok(WeatherType::All),
            _ => Err(WeatherError::invalid_type(value)),
        }
    }
}

impl FromStr for WeatherType {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherType::try_from(s)
    }
}

/// Response body format, sent as the `output` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }

    pub const fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Xml]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OutputFormat {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(WeatherError::invalid_format(value)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_type_as_str_roundtrip() {
        for t in WeatherType::all() {
            let parsed = WeatherType::try_from(t.as_str()).expect("roundtrip should succeed");
            assert_eq!(*t, parsed);
        }
    }

    #[test]
    fn output_format_as_str_roundtrip() {
        for f in OutputFormat::all() {
            let parsed: OutputFormat = f.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*f, parsed);
        }
    }

    #[test]
    fn defaults_are_base_and_json() {
        assert_eq!(WeatherType::default(), WeatherType::Base);
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn unknown_type_error() {
        let err = WeatherType::try_from("foo").unwrap_err();
        assert!(matches!(err, WeatherError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid type value(base/all): foo");
    }

    #[test]
    fn unknown_format_error() {
        let err = "array".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, WeatherError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid response format: array");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(WeatherType::try_from("BASE").is_err());
        assert!(OutputFormat::try_from("Json").is_err());
    }
}
