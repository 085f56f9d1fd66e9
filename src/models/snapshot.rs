//! Normalized, presentation-ready weather facts.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::timezone::TimezoneId;

/// Weather conditions at the snapshot instant.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    /// Air temperature, degrees Celsius.
    pub temperature: f64,
    /// Perceived temperature, degrees Celsius.
    pub apparent_temperature: f64,
    /// Corrected WMO weather code.
    pub weather_code: u8,
    pub wind_speed: f64,
    /// Wind direction in degrees from north; 0 in calm air.
    pub wind_direction: f64,
    /// Relative humidity percentage, 0-100.
    pub humidity: u8,
    /// Precipitation over the hour covering the snapshot instant, mm.
    pub precipitation: f64,
    /// Mean sea-level pressure, hPa.
    pub pressure: f64,
    /// Shortwave radiation, W/m2.
    pub radiation: f64,
    /// Composed low+mid cloud cover percentage, 0-100.
    pub cloud_cover: u8,
    pub dew_point: f64,
    /// The actual instant this snapshot was produced, in the resolved
    /// zone. Deliberately not the provider's whole-hour stamp.
    pub timestamp: DateTime<Tz>,
}

/// One hour of the normalized forecast.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyConditions {
    pub temperature: f64,
    /// Corrected WMO weather code.
    pub weather_code: u8,
    pub wind_speed: f64,
    /// Wind direction in degrees from north; 0 in calm air.
    pub wind_direction: f64,
    /// Composed low+mid cloud cover percentage, 0-100.
    pub cloud_cover: u8,
    /// Shortwave radiation, W/m2.
    pub radiation: f64,
}

/// One day of the normalized forecast.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    /// Absent during polar day/night.
    pub sunrise: Option<DateTime<Tz>>,
    /// Absent during polar day/night.
    pub sunset: Option<DateTime<Tz>>,
    pub max_temperature: f64,
    pub min_temperature: f64,
    /// Representative code for the day, aggregated from its daytime
    /// hours rather than copied from upstream.
    pub weather_code: u8,
}

/// The complete output of one normalization call. Immutable; a fresh
/// snapshot is produced for every payload.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSnapshot {
    /// Reference latitude of the forecast point.
    pub latitude: f64,
    /// The timezone every timestamp in this snapshot is expressed in.
    pub timezone: TimezoneId,
    pub current: CurrentConditions,
    /// Exactly 168 entries; index = 24 * day + hour of day.
    pub hourly: Vec<HourlyConditions>,
    /// Exactly 7 entries, today first.
    pub daily: Vec<DailySummary>,
}
