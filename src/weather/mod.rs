//! Weather-series normalization.
//!
//! Turns the provider's raw hourly/daily arrays into presentation-ready
//! current, hourly and daily summaries: gaps repaired, cloud cover
//! recomposed from the visible layers, weather codes corrected, and one
//! representative code derived per day.

pub mod codes;
mod daylight;
mod series;

pub use daylight::is_day;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::Result;
use crate::error::MalformedPayloadError;
use crate::models::{
    CurrentConditions, DAYS, DailySummary, HOURS, HourlyConditions, RawWeatherPayload,
    WeatherSnapshot,
};
use crate::timezone::TimezoneId;

/// Format of every timestamp in the payload.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The provider stamps "no such sun event" with dates far in the past
/// (usually near the epoch, not always exactly on it).
const SENTINEL_YEAR: i32 = 2000;

/// Normalize a payload against the current system clock.
///
/// See [`normalize_at`] for the full contract; this wrapper only supplies
/// the clock.
pub fn normalize(payload: &RawWeatherPayload, timezone: &TimezoneId) -> Result<WeatherSnapshot> {
    normalize_at(payload, timezone, Utc::now())
}

/// Normalize a payload, treating `now` as the current instant.
///
/// The payload's timestamps must already be local to `timezone` - the
/// upstream fetch is expected to have requested them that way. The
/// provider stamps its current conditions at whole-hour granularity; the
/// snapshot instead carries `now` localized to the resolved zone and
/// samples the hourly series at that instant's hour of day, so displayed
/// current data reflects real time rather than the last sampled hour.
///
/// Fails only on structural problems: mis-sized series, an unreadable
/// current timestamp, or a series with no values at all. Sparse nulls
/// are repaired in place and never surface.
pub fn normalize_at(
    payload: &RawWeatherPayload,
    timezone: &TimezoneId,
    now: DateTime<Utc>,
) -> Result<WeatherSnapshot> {
    payload.check_shape()?;

    // The stamp itself gets replaced by `now`, but a payload whose stamp
    // does not even parse is not to be trusted.
    NaiveDateTime::parse_from_str(&payload.current_weather.time, TIME_FORMAT).map_err(|_| {
        MalformedPayloadError::Timestamp {
            value: payload.current_weather.time.clone(),
        }
    })?;

    let tz = timezone.tz();
    let now = now.with_timezone(&tz);
    let current_hour = now.hour() as usize;

    let hourly = build_hourly(payload)?;
    let daily = build_daily(payload, &hourly, tz, current_hour)?;
    let current = build_current(payload, now, current_hour)?;

    Ok(WeatherSnapshot {
        latitude: payload.latitude,
        timezone: timezone.clone(),
        current,
        hourly,
        daily,
    })
}

fn build_current(
    payload: &RawWeatherPayload,
    now: DateTime<Tz>,
    current_hour: usize,
) -> Result<CurrentConditions> {
    let hourly = &payload.hourly;
    let cloud_cover = codes::total_cloud_cover(
        series::sample(&hourly.cloud_cover_low, current_hour, "hourly.cloudcover_low")?,
        series::sample(&hourly.cloud_cover_mid, current_hour, "hourly.cloudcover_mid")?,
    );
    Ok(CurrentConditions {
        temperature: payload.current_weather.temperature,
        apparent_temperature: series::sample(
            &hourly.apparent_temperature,
            current_hour,
            "hourly.apparent_temperature",
        )?,
        weather_code: codes::weather_code_from_cloud_cover(
            payload.current_weather.weather_code,
            cloud_cover,
        ),
        wind_speed: payload.current_weather.wind_speed,
        wind_direction: payload.current_weather.wind_direction,
        humidity: series::sample(
            &hourly.humidity,
            current_hour,
            "hourly.relativehumidity_2m",
        )?
        .min(100),
        // Precipitation and radiation accumulate over the hour ending at
        // the stamp, so the bucket covering "now" is the next slot.
        precipitation: series::sample(
            &hourly.precipitation,
            current_hour + 1,
            "hourly.precipitation",
        )?,
        pressure: series::sample(&hourly.pressure, current_hour, "hourly.pressure_msl")?,
        radiation: series::sample(
            &hourly.radiation,
            current_hour + 1,
            "hourly.shortwave_radiation",
        )?,
        cloud_cover,
        dew_point: series::sample(&hourly.dew_point, current_hour, "hourly.dewpoint_2m")?,
        timestamp: now,
    })
}

fn build_hourly(payload: &RawWeatherPayload) -> Result<Vec<HourlyConditions>> {
    let hourly = &payload.hourly;
    let mut out = Vec::with_capacity(HOURS);
    for i in 0..HOURS {
        let cloud_cover = codes::total_cloud_cover(
            series::sample(&hourly.cloud_cover_low, i, "hourly.cloudcover_low")?,
            series::sample(&hourly.cloud_cover_mid, i, "hourly.cloudcover_mid")?,
        );
        let weather_code = codes::weather_code_from_cloud_cover(
            series::sample(&hourly.weather_code, i, "hourly.weathercode")?,
            cloud_cover,
        );
        let wind_speed = series::sample(&hourly.wind_speed, i, "hourly.windspeed_10m")?;
        // Calm air comes with a null direction; zero keeps the series
        // rectangular and is never displayed.
        let wind_direction = if wind_speed == 0.0 {
            0.0
        } else {
            series::sample(&hourly.wind_direction, i, "hourly.winddirection_10m")?
        };
        out.push(HourlyConditions {
            temperature: series::sample(&hourly.temperature, i, "hourly.temperature_2m")?,
            weather_code,
            wind_speed,
            wind_direction,
            cloud_cover,
            radiation: series::sample(&hourly.radiation, i, "hourly.shortwave_radiation")?,
        });
    }
    Ok(out)
}

fn build_daily(
    payload: &RawWeatherPayload,
    hourly: &[HourlyConditions],
    tz: Tz,
    current_hour: usize,
) -> Result<Vec<DailySummary>> {
    let daily = &payload.daily;
    let mut out = Vec::with_capacity(DAYS);
    for day in 0..DAYS {
        // The provider's own daily code overweights the night hours; a
        // fixed daytime sample represents a day better. For the current
        // day, once those sampling hours have mostly passed, the three
        // upcoming hours take over.
        let sample_hours: Vec<usize> = if day > 0 || current_hour < 10 {
            vec![24 * day + 10, 24 * day + 13, 24 * day + 16, 24 * day + 19]
        } else if current_hour < 13 {
            vec![13, 16, 19]
        } else if current_hour < 16 {
            vec![16, 19]
        } else {
            vec![current_hour + 1, current_hour + 2, current_hour + 3]
        };
        let sampled: Vec<u8> = sample_hours.iter().map(|&h| hourly[h].weather_code).collect();
        let weather_code =
            codes::combined_weather_code(&sampled).unwrap_or(codes::INVALID_WEATHER_CODE);

        out.push(DailySummary {
            sunrise: parse_sun_event(daily.sunrise[day].as_deref(), tz)?,
            sunset: parse_sun_event(daily.sunset[day].as_deref(), tz)?,
            max_temperature: series::sample(
                &daily.temperature_max,
                day,
                "daily.temperature_2m_max",
            )?,
            min_temperature: series::sample(
                &daily.temperature_min,
                day,
                "daily.temperature_2m_min",
            )?,
            weather_code,
        });
    }
    Ok(out)
}

/// Parse a sunrise/sunset stamp. Nulls and the provider's far-past
/// sentinel dates read as "no such event today"; garbage is an error.
fn parse_sun_event(value: Option<&str>, tz: Tz) -> Result<Option<DateTime<Tz>>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let naive = NaiveDateTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| {
        MalformedPayloadError::Timestamp {
            value: raw.to_string(),
        }
    })?;
    if naive.year() < SENTINEL_YEAR {
        return Ok(None);
    }
    Ok(naive.and_local_timezone(tz).earliest())
}
