//! WMO weather-code arithmetic: cloud-cover composition, code correction
//! and multi-code aggregation.

/// Recorded when an aggregation input belongs to no known code family.
/// Unreachable for genuine WMO codes; kept as a defensive sentinel.
pub const INVALID_WEATHER_CODE: u8 = u8::MAX;

// Severity scales per weather family. The shared cloud codes 0-3 lead
// every scale so that averages over "precipitation mixed with clear
// periods" stay inside the family.
const FOG: &[u8] = &[0, 1, 2, 3, 45, 48];
const DRIZZLE: &[u8] = &[0, 1, 2, 3, 51, 56, 53, 57, 55];
const THUNDERSTORM: &[u8] = &[3, 95, 96, 99];
const RAIN: &[u8] = &[0, 1, 2, 3, 80, 61, 81, 63, 82, 65, 95, 96, 99];
const FREEZING_RAIN: &[u8] = &[0, 1, 2, 3, 66, 67, 95, 96, 99];
const SNOW: &[u8] = &[0, 1, 2, 3, 85, 71, 73, 86, 77, 75];

const FAMILIES: &[&[u8]] = &[FOG, DRIZZLE, THUNDERSTORM, RAIN, FREEZING_RAIN, SNOW];

/// Leading entries of every family scale shared with the others; removal
/// between family attempts must leave them alone.
const SHARED_PREFIX: usize = 4;

/// Codes whose icon shows some sun.
const SUN_CODES: &[u8] = &[0, 1, 2, 80, 81, 82, 85, 86];

/// Combined sky coverage of the low and mid cloud layers, treated as
/// independent: the complement of the product of their clear-sky shares.
/// Inputs are clamped to [0, 100].
#[must_use]
pub fn total_cloud_cover(low: u8, mid: u8) -> u8 {
    let clear_low = u32::from(100 - low.min(100));
    let clear_mid = u32::from(100 - mid.min(100));
    (100 - clear_low * clear_mid / 100) as u8
}

/// Correct an upstream weather code against the composed low/mid cloud
/// cover.
///
/// The provider sometimes reports "overcast" off high-altitude cloud
/// that is not visible from the ground, so the plain cloud codes 0-3 are
/// recomputed from the visible layers. Anything above 3 encodes
/// precipitation, fog or worse and is more specific than cloud cover
/// alone; it passes through untouched.
#[must_use]
pub fn weather_code_from_cloud_cover(weather_code: u8, cloud_cover: u8) -> u8 {
    if weather_code > 3 {
        weather_code
    } else if cloud_cover > 75 {
        3
    } else if cloud_cover > 50 {
        2
    } else if cloud_cover > 25 {
        1
    } else {
        0
    }
}

/// Collapse a day's sampled codes into one representative code.
///
/// Families are tried in a fixed order. When every input code sits on the
/// current family's scale, the result is the scale entry at the rounded
/// average of the input indices - downgraded to its sunless equivalent if
/// no input hour actually showed sun. Otherwise the codes exclusive to
/// that family are dropped and the next family is tried. `None` means no
/// family covered the input, which cannot happen for genuine WMO codes.
#[must_use]
pub fn combined_weather_code(weather_codes: &[u8]) -> Option<u8> {
    if weather_codes.is_empty() {
        return None;
    }
    let mut working: Vec<u8> = weather_codes.to_vec();
    for family in FAMILIES {
        if working.iter().all(|code| family.contains(code)) {
            let index_sum: usize = working
                .iter()
                .filter_map(|code| family.iter().position(|entry| entry == code))
                .sum();
            let average = (index_sum as f64 / working.len() as f64).round() as usize;
            let combined = family[average];
            if weather_codes.iter().all(|code| !SUN_CODES.contains(code)) {
                // Don't say there will be sun if there won't.
                return Some(without_sun(combined));
            }
            return Some(combined);
        }
        working.retain(|code| !family[SHARED_PREFIX.min(family.len())..].contains(code));
    }
    None
}

/// The sunless equivalent of a shower code.
fn without_sun(code: u8) -> u8 {
    match code {
        80 => 61,
        81 => 63,
        82 => 65,
        85 => 71,
        86 => 75,
        other => other,
    }
}

/// Whether a code's presentation differs between day and night: the
/// clear-to-cloudy codes and the shower group, where the icon carries a
/// sun or a moon.
#[must_use]
pub fn varies_by_daylight(code: u8) -> bool {
    code <= 2 || code / 10 == 8
}

/// Human-readable label for a WMO weather code.
#[must_use]
pub fn describe(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(100, 100, 100)]
    #[case(50, 50, 75)]
    #[case(100, 0, 100)]
    #[case(0, 100, 100)]
    #[case(30, 40, 58)]
    fn test_total_cloud_cover(#[case] low: u8, #[case] mid: u8, #[case] expected: u8) {
        assert_eq!(total_cloud_cover(low, mid), expected);
    }

    #[test]
    fn test_total_cloud_cover_clamps_inputs() {
        assert_eq!(total_cloud_cover(255, 0), 100);
    }

    #[rstest]
    #[case(3, 10, 0)]
    #[case(0, 80, 3)]
    #[case(2, 60, 2)]
    #[case(1, 30, 1)]
    #[case(3, 76, 3)]
    #[case(61, 0, 61)]
    #[case(95, 0, 95)]
    fn test_weather_code_from_cloud_cover(
        #[case] code: u8,
        #[case] cloud_cover: u8,
        #[case] expected: u8,
    ) {
        assert_eq!(weather_code_from_cloud_cover(code, cloud_cover), expected);
    }

    #[test]
    fn test_combined_all_clear() {
        assert_eq!(combined_weather_code(&[0, 0, 0, 0]), Some(0));
    }

    #[test]
    fn test_combined_cloud_average() {
        // Indices 0,1,2,3 on the fog scale; average 1.5 rounds up.
        assert_eq!(combined_weather_code(&[0, 1, 2, 3]), Some(2));
    }

    #[test]
    fn test_combined_rain_downgrades_without_sun() {
        // 61 and 63 average onto the showers entry, but no input hour
        // showed sun, so the plain rain code comes back.
        assert_eq!(combined_weather_code(&[61, 63]), Some(63));
        // Same for a cloudy/rainy mix landing on slight showers.
        assert_eq!(combined_weather_code(&[3, 61]), Some(61));
    }

    #[test]
    fn test_combined_keeps_showers_when_sun_was_seen() {
        // 80 is itself a sun code; no downgrade applies.
        assert_eq!(combined_weather_code(&[1, 80]), Some(3));
        assert_eq!(combined_weather_code(&[0, 80]), Some(2));
        assert_eq!(combined_weather_code(&[80, 80]), Some(80));
    }

    #[test]
    fn test_combined_fog() {
        assert_eq!(combined_weather_code(&[45, 48]), Some(48));
        assert_eq!(combined_weather_code(&[45, 0, 0]), Some(1)); // fog burning off
    }

    #[test]
    fn test_combined_mixed_families_drop_to_rain() {
        // A thunderstorm hour among rain hours: fog and drizzle pass,
        // both codes sit on the rain scale.
        assert_eq!(combined_weather_code(&[95, 61]), Some(65));
    }

    #[test]
    fn test_combined_snow() {
        assert_eq!(combined_weather_code(&[71, 73]), Some(73));
        assert_eq!(combined_weather_code(&[71, 71, 71, 71]), Some(71));
    }

    #[test]
    fn test_combined_unknown_code_is_flagged() {
        // 4 is not on any family scale; the defensive branch reports it.
        assert_eq!(combined_weather_code(&[4]), None);
        assert_eq!(combined_weather_code(&[]), None);
    }

    #[rstest]
    #[case(0, true)]
    #[case(2, true)]
    #[case(3, false)]
    #[case(61, false)]
    #[case(80, true)]
    #[case(86, true)]
    #[case(95, false)]
    fn test_varies_by_daylight(#[case] code: u8, #[case] expected: bool) {
        assert_eq!(varies_by_daylight(code), expected);
    }

    #[test]
    fn test_describe_covers_the_closed_set() {
        for code in [
            0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81,
            82, 85, 86, 95, 96, 99,
        ] {
            assert_ne!(describe(code), "Unknown", "code {code} should be labeled");
        }
        assert_eq!(describe(INVALID_WEATHER_CODE), "Unknown");
    }
}
