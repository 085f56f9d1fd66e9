//! Gap repair for sparse series.
//!
//! The provider occasionally reports null at arbitrary indices of an
//! otherwise well-formed series. The series stays the source of truth;
//! a gap is filled with the nearest present value, scanning outward and
//! preferring the earlier sample on ties.

use tracing::debug;

use crate::error::MalformedPayloadError;

/// The value at `index`, repaired from the nearest present neighbor when
/// absent. Only a series with no present value at all is an error.
pub(super) fn sample<T: Copy>(
    series: &[Option<T>],
    index: usize,
    field: &'static str,
) -> Result<T, MalformedPayloadError> {
    if let Some(value) = series.get(index).copied().flatten() {
        return Ok(value);
    }
    match nearest_present(series, index) {
        Some(value) => {
            debug!(field, index, "repaired null sample from nearest neighbor");
            Ok(value)
        }
        None => Err(MalformedPayloadError::EmptySeries { field }),
    }
}

fn nearest_present<T: Copy>(series: &[Option<T>], index: usize) -> Option<T> {
    for distance in 1..series.len() {
        if distance <= index {
            let below = index - distance;
            if below < series.len() {
                if let Some(value) = series[below] {
                    return Some(value);
                }
            }
        }
        let above = index + distance;
        if above < series.len() {
            if let Some(value) = series[above] {
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value_passes_through() {
        let series = [Some(1.0), Some(2.0), Some(3.0)];
        assert_eq!(sample(&series, 1, "test").unwrap(), 2.0);
    }

    #[test]
    fn test_tie_prefers_lower_index() {
        let mut series = vec![Some(0.0); 10];
        series[4] = Some(10.0);
        series[5] = None;
        series[6] = Some(20.0);
        assert_eq!(sample(&series, 5, "test").unwrap(), 10.0);
    }

    #[test]
    fn test_scan_widens_symmetrically() {
        let series = [None, Some(7), None, None, None];
        assert_eq!(sample(&series, 3, "test").unwrap(), 7);
        let series = [None, None, None, Some(9), None];
        assert_eq!(sample(&series, 1, "test").unwrap(), 9);
    }

    #[test]
    fn test_gap_at_the_edges() {
        let series = [None, None, Some(4)];
        assert_eq!(sample(&series, 0, "test").unwrap(), 4);
        let series = [Some(4), None, None];
        assert_eq!(sample(&series, 2, "test").unwrap(), 4);
    }

    #[test]
    fn test_all_null_is_an_error() {
        let series: [Option<i64>; 4] = [None; 4];
        let err = sample(&series, 2, "hourly.weathercode").unwrap_err();
        assert!(matches!(
            err,
            MalformedPayloadError::EmptySeries {
                field: "hourly.weathercode"
            }
        ));
    }
}
