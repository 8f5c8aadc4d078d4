//! Weather panel model
//!
//! One unauthenticated GET to the Open-Meteo forecast endpoint. Anything
//! other than a well-formed forecast is reported as an error so the panel
//! can show its offline state.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::config::TripConfig;
use crate::domain::{DomainError, DomainResult};

const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Hours of the day shown in the hourly strip
const FIRST_HOUR: u32 = 8;
const LAST_HOUR: u32 = 21;

pub fn forecast_url(config: &TripConfig) -> String {
    format!(
        "{}?latitude={}&longitude={}&hourly=temperature_2m,weathercode&daily=weathercode,temperature_2m_max,temperature_2m_min&timezone={}",
        FORECAST_ENDPOINT,
        config.weather_coords.lat,
        config.weather_coords.lng,
        utf8_percent_encode(&config.weather_timezone, NON_ALPHANUMERIC)
    )
}

/// Body as served by Open-Meteo, or the `sw.js` fallback when offline
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub reason: Option<String>,
    pub hourly: Option<RawHourly>,
    pub daily: Option<RawDaily>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHourly {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub weathercode: Vec<Option<i64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDaily {
    pub time: Vec<String>,
    pub weathercode: Vec<Option<i64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub code: i64,
}

impl HourlyPoint {
    pub fn hour_label(&self) -> String {
        format!("{}:00", self.time.hour())
    }

    pub fn kind(&self) -> WeatherKind {
        WeatherKind::from_code(self.code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub code: i64,
    pub max: f64,
    pub min: f64,
}

impl DailyPoint {
    pub fn kind(&self) -> WeatherKind {
        WeatherKind::from_code(self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherData {
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
}

impl WeatherData {
    pub fn from_json(body: &str) -> DomainResult<Self> {
        let response: ForecastResponse = serde_json::from_str(body)?;
        Self::from_response(response)
    }

    /// Zip the column arrays into points; rows with nulls are skipped
    pub fn from_response(response: ForecastResponse) -> DomainResult<Self> {
        if let Some(err) = response.error.as_ref().filter(|e| !matches!(e, serde_json::Value::Bool(false))) {
            let reason = response.reason.clone().unwrap_or_else(|| err.to_string());
            return Err(DomainError::Internal(format!("forecast unavailable: {}", reason)));
        }
        let hourly = response.hourly.ok_or_else(|| DomainError::Parse("missing hourly block".to_string()))?;
        let daily = response.daily.ok_or_else(|| DomainError::Parse("missing daily block".to_string()))?;

        let hourly = hourly
            .time
            .iter()
            .zip(&hourly.temperature_2m)
            .zip(&hourly.weathercode)
            .filter_map(|((time, temp), code)| {
                let time = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M").ok()?;
                Some(HourlyPoint { time, temperature: (*temp)?, code: (*code)? })
            })
            .collect();

        let daily = daily
            .time
            .iter()
            .enumerate()
            .filter_map(|(i, date)| {
                Some(DailyPoint {
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?,
                    code: (*daily.weathercode.get(i)?)?,
                    max: (*daily.temperature_2m_max.get(i)?)?,
                    min: (*daily.temperature_2m_min.get(i)?)?,
                })
            })
            .collect();

        Ok(Self { hourly, daily })
    }

    /// Daytime hours out of the first 24 reported
    pub fn hourly_window(&self) -> Vec<&HourlyPoint> {
        self.hourly
            .iter()
            .take(24)
            .filter(|p| (FIRST_HOUR..=LAST_HOUR).contains(&p.time.hour()))
            .collect()
    }

    pub fn daily_outlook(&self) -> &[DailyPoint] {
        &self.daily[..self.daily.len().min(5)]
    }
}

/// Icon bucket for a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Rain,
    Storm,
    Wind,
}

impl WeatherKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            c if c <= 1 => WeatherKind::Clear,
            c if c <= 3 => WeatherKind::Cloudy,
            c if c <= 67 => WeatherKind::Rain,
            c if c <= 99 => WeatherKind::Storm,
            _ => WeatherKind::Wind,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "☀️",
            WeatherKind::Cloudy => "☁️",
            WeatherKind::Rain => "🌧️",
            WeatherKind::Storm => "⛈️",
            WeatherKind::Wind => "💨",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "wx-clear",
            WeatherKind::Cloudy => "wx-cloudy",
            WeatherKind::Rain => "wx-rain",
            WeatherKind::Storm => "wx-storm",
            WeatherKind::Wind => "wx-wind",
        }
    }
}

/// `Hoy` for today, otherwise the short Spanish weekday
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Hoy".to_string();
    }
    match date.weekday() {
        Weekday::Mon => "lun",
        Weekday::Tue => "mar",
        Weekday::Wed => "mié",
        Weekday::Thu => "jue",
        Weekday::Fri => "vie",
        Weekday::Sat => "sáb",
        Weekday::Sun => "dom",
    }
    .to_string()
}

/// Rounded temperature with a degree sign
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°", celsius.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> String {
        let times: Vec<String> = (0..30).map(|h| format!("2026-04-{:02}T{:02}:00", 12 + h / 24, h % 24)).collect();
        let temps: Vec<f64> = (0..30).map(|h| 10.0 + h as f64 * 0.5).collect();
        let codes: Vec<i64> = (0..30).map(|h| if h < 12 { 0 } else { 61 }).collect();
        serde_json::json!({
            "hourly": { "time": times, "temperature_2m": temps, "weathercode": codes },
            "daily": {
                "time": ["2026-04-12", "2026-04-13", "2026-04-14", "2026-04-15", "2026-04-16", "2026-04-17"],
                "weathercode": [0, 2, 61, 95, 3, 1],
                "temperature_2m_max": [21.4, 20.0, 18.6, 17.2, 19.9, 22.0],
                "temperature_2m_min": [12.1, 11.0, 10.5, 9.9, 11.2, 12.8]
            }
        })
        .to_string()
    }

    #[test]
    fn test_forecast_url_encodes_timezone() {
        let url = forecast_url(&TripConfig::default());
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?latitude=41.38&longitude=2.17"));
        assert!(url.ends_with("&timezone=Europe%2FMadrid"));
    }

    #[test]
    fn test_parses_forecast() {
        let data = WeatherData::from_json(&sample_body()).unwrap();
        assert_eq!(data.hourly.len(), 30);
        assert_eq!(data.daily.len(), 6);
        assert_eq!(data.daily_outlook().len(), 5);
    }

    #[test]
    fn test_hourly_window_keeps_daytime_of_first_day_aligned() {
        let data = WeatherData::from_json(&sample_body()).unwrap();
        let window = data.hourly_window();
        assert_eq!(window.len(), 14);
        assert_eq!(window[0].hour_label(), "8:00");
        assert_eq!(window[0].temperature, 14.0);
        assert_eq!(window[0].kind(), WeatherKind::Clear);
        assert_eq!(window[13].hour_label(), "21:00");
        assert_eq!(window[13].kind(), WeatherKind::Rain);
    }

    #[test]
    fn test_error_bodies_are_offline() {
        assert!(WeatherData::from_json(r#"{"error":"offline"}"#).is_err());
        assert!(WeatherData::from_json(r#"{"error":true,"reason":"Bad latitude"}"#).is_err());
        assert!(WeatherData::from_json("<html>").is_err());
        assert!(WeatherData::from_json("{}").is_err());
    }

    #[test]
    fn test_service_worker_fallback_reads_as_offline() {
        let err = WeatherData::from_json(r#"{"error":"offline","reason":"offline"}"#).unwrap_err();
        assert_eq!(err, DomainError::Internal("forecast unavailable: offline".to_string()));
    }

    #[test]
    fn test_null_rows_are_skipped() {
        let body = r#"{"hourly":{"time":["2026-04-12T09:00","2026-04-12T10:00"],"temperature_2m":[null,15.0],"weathercode":[1,2]},
                       "daily":{"time":["2026-04-12"],"weathercode":[1],"temperature_2m_max":[20.0],"temperature_2m_min":[null]}}"#;
        let data = WeatherData::from_json(body).unwrap();
        assert_eq!(data.hourly.len(), 1);
        assert!(data.daily.is_empty());
    }

    #[test]
    fn test_weather_kind_buckets() {
        assert_eq!(WeatherKind::from_code(0), WeatherKind::Clear);
        assert_eq!(WeatherKind::from_code(1), WeatherKind::Clear);
        assert_eq!(WeatherKind::from_code(3), WeatherKind::Cloudy);
        assert_eq!(WeatherKind::from_code(67), WeatherKind::Rain);
        assert_eq!(WeatherKind::from_code(95), WeatherKind::Storm);
        assert_eq!(WeatherKind::from_code(120), WeatherKind::Wind);
    }

    #[test]
    fn test_day_label() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 12).unwrap();
        assert_eq!(day_label(today, today), "Hoy");
        assert_eq!(day_label(today.succ_opt().unwrap(), today), "lun");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(21.4), "21°");
        assert_eq!(format_temperature(17.5), "18°");
    }
}
