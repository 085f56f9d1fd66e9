//! Error types for payload validation.

use thiserror::Error;

/// Raised when a weather payload is structurally unusable: the text does
/// not parse, a required series has the wrong number of elements, or the
/// current-conditions timestamp is unreadable.
///
/// Sparse nulls *inside* a well-formed series are not errors; they are
/// repaired during normalization. This error propagates to the caller,
/// who decides whether to refetch, fall back to cached data, or surface
/// the failure.
#[derive(Error, Debug)]
pub enum MalformedPayloadError {
    /// The payload text is not valid JSON or lacks a required container.
    #[error("unreadable payload: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// A series does not have the expected number of elements.
    #[error("series {field} has {actual} elements, expected {expected}")]
    SeriesLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Every element of a required series is null.
    #[error("series {field} contains no usable values")]
    EmptySeries { field: &'static str },

    /// A timestamp string could not be parsed.
    #[error("unparseable timestamp {value:?}")]
    Timestamp { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = MalformedPayloadError::SeriesLength {
            field: "hourly.temperature_2m",
            expected: 168,
            actual: 12,
        };
        assert!(err.to_string().contains("hourly.temperature_2m"));
        assert!(err.to_string().contains("168"));

        let err = MalformedPayloadError::EmptySeries {
            field: "hourly.weathercode",
        };
        assert!(err.to_string().contains("hourly.weathercode"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MalformedPayloadError = json_err.into();
        assert!(matches!(err, MalformedPayloadError::Json { .. }));
    }
}
