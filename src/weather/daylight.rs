//! Day/night classification from sun events.

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;

use crate::models::WeatherSnapshot;

/// Whether `time` counts as daytime, given the day's sun events.
///
/// Either event may be absent at extreme latitudes (polar day and polar
/// night), and coinciding events mean the same thing. With no usable
/// event the decision falls back to season and hemisphere. A sunset
/// before its sunrise marks a sun period wrapping around local midnight;
/// that also only happens in polar regions.
#[must_use]
pub fn is_day(
    time: DateTime<Tz>,
    sunrise: Option<DateTime<Tz>>,
    sunset: Option<DateTime<Tz>>,
    latitude: f64,
) -> bool {
    let (sunrise, sunset) = match (sunrise, sunset) {
        (Some(rise), Some(set)) if rise == set => (None, None),
        events => events,
    };
    match (sunrise, sunset) {
        (None, None) => {
            let summer_half = (4..=9).contains(&time.month());
            summer_half ^ (latitude < 0.0)
        }
        (None, Some(set)) => time <= set,
        (Some(rise), None) => time > rise,
        (Some(rise), Some(set)) if rise > set => time > rise || time <= set,
        (Some(rise), Some(set)) => rise < time && time <= set,
    }
}

impl WeatherSnapshot {
    /// Day/night at the snapshot's current instant.
    #[must_use]
    pub fn current_is_day(&self) -> bool {
        self.is_day_on(0, self.current.timestamp)
    }

    /// Day/night at `time`, judged by the sun events of forecast day
    /// `day` (0 = today). Days outside the forecast range fall back to
    /// season and hemisphere.
    #[must_use]
    pub fn is_day_on(&self, day: usize, time: DateTime<Tz>) -> bool {
        let (sunrise, sunset) = self
            .daily
            .get(day)
            .map_or((None, None), |d| (d.sunrise, d.sunset));
        is_day(time, sunrise, sunset, self.latitude)
    }
}
