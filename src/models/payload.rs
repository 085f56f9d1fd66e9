//! The raw upstream weather payload, prior to normalization.

use serde::Deserialize;

use crate::error::MalformedPayloadError;

/// Number of hourly samples in a payload (7 days).
pub const HOURS: usize = 168;

/// Number of daily samples in a payload.
pub const DAYS: usize = 7;

/// The unprocessed time series as delivered by the weather data provider.
///
/// All timestamps are local to the timezone the upstream fetch was made
/// with. Element-level nulls are preserved here and repaired during
/// normalization; missing containers or mis-sized series are rejected
/// with a [`MalformedPayloadError`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherPayload {
    /// Reference latitude of the forecast point.
    pub latitude: f64,
    pub current_weather: CurrentWeather,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

/// The provider's current-conditions sample, stamped at whole-hour
/// granularity.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    /// Local timestamp of the sample, `yyyy-mm-ddThh:mm`.
    pub time: String,
    pub temperature: f64,
    #[serde(rename = "weathercode")]
    pub weather_code: u8,
    #[serde(rename = "windspeed")]
    pub wind_speed: f64,
    #[serde(rename = "winddirection")]
    pub wind_direction: f64,
}

/// Hourly series, indexed by hour offset 0..168 from midnight of day 0.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<Option<f64>>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<Option<u8>>,
    #[serde(rename = "windspeed_10m")]
    pub wind_speed: Vec<Option<f64>>,
    #[serde(rename = "winddirection_10m")]
    pub wind_direction: Vec<Option<f64>>,
    #[serde(rename = "cloudcover_low")]
    pub cloud_cover_low: Vec<Option<u8>>,
    #[serde(rename = "cloudcover_mid")]
    pub cloud_cover_mid: Vec<Option<u8>>,
    pub precipitation: Vec<Option<f64>>,
    #[serde(rename = "pressure_msl")]
    pub pressure: Vec<Option<f64>>,
    #[serde(rename = "shortwave_radiation")]
    pub radiation: Vec<Option<f64>>,
    #[serde(rename = "relativehumidity_2m")]
    pub humidity: Vec<Option<u8>>,
    #[serde(rename = "dewpoint_2m")]
    pub dew_point: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
}

/// Daily series, indexed by day offset 0..7.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    /// Local sunrise timestamps; the provider marks polar day/night with
    /// a null or a pre-2000 sentinel date.
    pub sunrise: Vec<Option<String>>,
    pub sunset: Vec<Option<String>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
}

impl RawWeatherPayload {
    /// Parse a payload from the provider's JSON text.
    pub fn from_json(json: &str) -> Result<Self, MalformedPayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that every series has the length normalization relies on.
    pub(crate) fn check_shape(&self) -> Result<(), MalformedPayloadError> {
        fn check<T>(
            field: &'static str,
            series: &[Option<T>],
            expected: usize,
        ) -> Result<(), MalformedPayloadError> {
            if series.len() == expected {
                Ok(())
            } else {
                Err(MalformedPayloadError::SeriesLength {
                    field,
                    expected,
                    actual: series.len(),
                })
            }
        }

        check("hourly.temperature_2m", &self.hourly.temperature, HOURS)?;
        check("hourly.weathercode", &self.hourly.weather_code, HOURS)?;
        check("hourly.windspeed_10m", &self.hourly.wind_speed, HOURS)?;
        check(
            "hourly.winddirection_10m",
            &self.hourly.wind_direction,
            HOURS,
        )?;
        check("hourly.cloudcover_low", &self.hourly.cloud_cover_low, HOURS)?;
        check("hourly.cloudcover_mid", &self.hourly.cloud_cover_mid, HOURS)?;
        check("hourly.precipitation", &self.hourly.precipitation, HOURS)?;
        check("hourly.pressure_msl", &self.hourly.pressure, HOURS)?;
        check("hourly.shortwave_radiation", &self.hourly.radiation, HOURS)?;
        check("hourly.relativehumidity_2m", &self.hourly.humidity, HOURS)?;
        check("hourly.dewpoint_2m", &self.hourly.dew_point, HOURS)?;
        check(
            "hourly.apparent_temperature",
            &self.hourly.apparent_temperature,
            HOURS,
        )?;
        check("daily.sunrise", &self.daily.sunrise, DAYS)?;
        check("daily.sunset", &self.daily.sunset, DAYS)?;
        check("daily.temperature_2m_max", &self.daily.temperature_max, DAYS)?;
        check("daily.temperature_2m_min", &self.daily.temperature_min, DAYS)?;
        Ok(())
    }
}
