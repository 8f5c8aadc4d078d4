//! Weather Fetch
//!
//! The app's only outbound request.

use escala_core::weather::{forecast_url, WeatherData};
use escala_core::TripConfig;
use gloo_net::http::Request;

pub async fn fetch_forecast(config: &TripConfig) -> Result<WeatherData, String> {
    let url = forecast_url(config);
    let resp = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("forecast HTTP {}", resp.status()));
    }
    let body = resp.text().await.map_err(|e| e.to_string())?;
    WeatherData::from_json(&body).map_err(|e| e.to_string())
}
