//! Port-call profile
//!
//! Everything that ties the app to one particular day in one particular
//! port. The default is the Barcelona call of 12 April 2026.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Coords, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripConfig {
    /// Header title, e.g. "Escala Barcelona"
    pub port_name: String,
    /// Human date shown under the title
    pub date_label: String,
    /// Last moment to be back on board
    pub onboard_time: NaiveTime,
    pub departure_time: NaiveTime,
    pub port_coords: Coords,
    /// Initial map centre
    pub map_center: Coords,
    pub map_zoom: f64,
    pub weather_coords: Coords,
    /// IANA zone passed to the forecast service
    pub weather_timezone: String,
    /// Planned walking distance of the GPX route, km
    pub walking_distance_km: f64,
    /// Message prefilled in the SOS share link
    pub sos_message: String,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            port_name: "Escala Barcelona".to_string(),
            date_label: "12 Abril 2026".to_string(),
            onboard_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap_or(NaiveTime::MIN),
            departure_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN),
            port_coords: Coords::new(41.362895, 2.181948),
            map_center: Coords::new(41.38, 2.17),
            map_zoom: 13.0,
            weather_coords: Coords::new(41.38, 2.17),
            weather_timezone: "Europe/Madrid".to_string(),
            walking_distance_km: 5.4,
            sos_message: "SOS Barcelona".to_string(),
        }
    }
}

impl TripConfig {
    /// Load a profile for another port call; missing fields keep the defaults
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_default_onboard_before_departure() {
        let cfg = TripConfig::default();
        assert!(cfg.onboard_time < cfg.departure_time);
        assert_eq!(cfg.onboard_time.format("%H:%M").to_string(), "17:30");
    }

    #[test]
    fn test_from_json_overrides_some_fields() {
        let cfg = TripConfig::from_json(r#"{"port_name":"Escala Palma","onboard_time":"16:45:00"}"#).unwrap();
        assert_eq!(cfg.port_name, "Escala Palma");
        assert_eq!(cfg.onboard_time, NaiveTime::from_hms_opt(16, 45, 0).unwrap());
        assert_eq!(cfg.weather_timezone, "Europe/Madrid");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(TripConfig::from_json("{not json"), Err(DomainError::Parse(_))));
    }
}
