//! Geographic coordinates and administrative address facts.

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, positive north, in [-90, 90].
    pub latitude: f64,
    /// Longitude, positive east, in [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Administrative address facts for a geographic point, as produced by a
/// reverse-geocoding lookup.
///
/// Region names are matched against their reference-locale (English)
/// spellings; the timezone tables also carry common native spellings as
/// synonyms. When a localized name fails to resolve, the caller is
/// expected to re-query the address lookup in the reference locale and
/// pass that result here instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressFacts {
    /// ISO 3166-1 alpha-2 country code, e.g. `"FR"`.
    pub country_code: Option<String>,
    /// First-level subdivision (state/province/oblast).
    pub admin_region: Option<String>,
    /// Second-level subdivision (county/district).
    pub sub_region: Option<String>,
    /// City, town or hamlet name.
    pub locality: Option<String>,
    pub point: GeoPoint,
}

impl AddressFacts {
    /// Address facts carrying nothing but the coordinates.
    #[must_use]
    pub fn new(point: GeoPoint) -> Self {
        Self {
            country_code: None,
            admin_region: None,
            sub_region: None,
            locality: None,
            point,
        }
    }

    /// Best human-readable label for this location: the locality if known,
    /// otherwise the smallest known administrative division, otherwise the
    /// bare coordinates.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.locality
            .clone()
            .or_else(|| self.sub_region.clone())
            .or_else(|| self.admin_region.clone())
            .unwrap_or_else(|| {
                format!("{:.4}, {:.4}", self.point.latitude, self.point.longitude)
            })
    }
}
