//! Nimbus - the portable core of a weather-display application.
//!
//! This library provides the two stateless engines behind the display
//! layer: timezone resolution and weather normalization.
//!
//! - [`resolve_timezone`] maps a geographic coordinate plus administrative
//!   address facts to a canonical IANA timezone identifier through a
//!   country/region decision table with coordinate tie-breaks.
//! - [`normalize`] turns a raw hourly/daily weather time series into
//!   presentation-ready current, hourly and daily summaries: gaps
//!   repaired, cloud cover recomposed from the visible layers, and one
//!   representative weather code derived per day.
//!
//! Rendering, unit conversion, network transport and persistence are the
//! caller's business; this crate is a library boundary only.

pub mod error;
pub mod models;
pub mod timezone;
pub mod weather;

// Re-export core types for public API
pub use error::MalformedPayloadError;
pub use models::{
    AddressFacts, CurrentConditions, DailySummary, GeoPoint, HourlyConditions, RawWeatherPayload,
    WeatherSnapshot,
};
pub use timezone::{TimezoneId, resolve_timezone};
pub use weather::{is_day, normalize, normalize_at};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, MalformedPayloadError>;
