//! Timezone resolution from administrative address facts.
//!
//! Coordinate-polygon timezone databases are big and slow to query. The
//! caller already has an administrative address for the point, so the
//! zone can instead be read off a country/region decision table, with
//! coordinate tie-breaks only where political boundaries and zone
//! boundaries disagree. Identifiers come from the IANA tz database.

mod countries;
mod regions;

use std::fmt;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::AddressFacts;

/// A canonical IANA timezone identifier such as `"Europe/Paris"`, or a
/// fixed-offset `"Etc/GMT±N"` fallback derived from the longitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimezoneId(String);

impl TimezoneId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `chrono-tz` zone for this identifier. Identifiers produced by
    /// [`resolve_timezone`] always parse; a hand-built identifier that
    /// does not falls back to UTC.
    #[must_use]
    pub fn tz(&self) -> Tz {
        self.0.parse().unwrap_or(Tz::UTC)
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the timezone an address is in.
///
/// Countries observing a single zone resolve from the country code alone.
/// Countries spanning several zones dispatch further on the admin region,
/// the county, or the coordinates. An unknown or absent country degrades
/// to a fixed-offset zone computed from the longitude, so resolution
/// never fails.
#[must_use]
pub fn resolve_timezone(address: &AddressFacts) -> TimezoneId {
    if let Some(code) = address.country_code.as_deref() {
        if let Some(zone) = countries::single_zone(code) {
            return TimezoneId::new(zone);
        }
        if let Some(zone) = regions::multi_zone(code, address) {
            return TimezoneId::new(zone);
        }
    }
    longitude_fallback(address.point.longitude)
}

/// Fixed-offset zone for the meridian band the longitude falls in. The
/// rendered sign is inverted because `Etc/GMT±N` names are reversed
/// relative to the usual UTC-offset convention.
fn longitude_fallback(longitude: f64) -> TimezoneId {
    let offset = (longitude / 15.0).round() as i32;
    debug!(longitude, offset, "no country match, using fixed-offset zone");
    if offset < 0 {
        TimezoneId::new(format!("Etc/GMT+{}", -offset))
    } else {
        TimezoneId::new(format!("Etc/GMT{}", -offset))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::models::GeoPoint;

    fn address(country: Option<&str>, latitude: f64, longitude: f64) -> AddressFacts {
        let mut address = AddressFacts::new(GeoPoint::new(latitude, longitude));
        address.country_code = country.map(String::from);
        address
    }

    #[rstest]
    #[case("FR", "Europe/Paris")]
    #[case("GB", "Europe/London")]
    #[case("JP", "Asia/Tokyo")]
    #[case("IN", "Asia/Kolkata")]
    #[case("CN", "Asia/Shanghai")]
    fn test_single_zone_ignores_coordinates(#[case] country: &str, #[case] expected: &str) {
        // Deliberately absurd coordinates: the country table wins.
        let resolved = resolve_timezone(&address(Some(country), -33.0, 151.0));
        assert_eq!(resolved.as_str(), expected);
    }

    #[rstest]
    #[case(82.5, "Etc/GMT-6")]
    #[case(-90.0, "Etc/GMT+6")]
    #[case(-0.12, "Etc/GMT0")]
    #[case(179.9, "Etc/GMT-12")]
    fn test_longitude_fallback_sign_convention(#[case] longitude: f64, #[case] expected: &str) {
        let resolved = resolve_timezone(&address(None, 10.0, longitude));
        assert_eq!(resolved.as_str(), expected);
    }

    #[test]
    fn test_unmapped_country_falls_back() {
        let resolved = resolve_timezone(&address(Some("ZZ"), 51.5, -0.12));
        assert_eq!(resolved.as_str(), "Etc/GMT0");
    }

    #[test]
    fn test_every_fallback_identifier_parses() {
        for band in -12..=12 {
            let resolved = longitude_fallback(f64::from(band) * 15.0);
            assert_ne!(
                resolved.tz(),
                Tz::UTC,
                "band {band} should parse to its own zone"
            );
        }
    }

    #[test]
    fn test_fallback_zone_parses_to_utc_zone_at_zero() {
        // Etc/GMT0 is a valid alias of UTC itself.
        let resolved = longitude_fallback(0.0);
        assert_eq!(resolved.as_str(), "Etc/GMT0");
    }

    #[test]
    fn test_hand_built_identifier_falls_back_to_utc() {
        assert_eq!(TimezoneId::new("Not/A_Zone").tz(), Tz::UTC);
    }
}
