use thiserror::Error;

/// Errors reported by the perimeter-function library.
///
/// Every fallible entry point validates its numeric inputs eagerly:
/// a NaN argument is a [`PerifnError::InvalidArgument`], a finite or
/// infinite value outside the documented domain is a
/// [`PerifnError::OutOfRange`]. Fewer than 3 distinct polygon vertices
/// is not an error: degenerate polygons silently yield zero-valued
/// results.
#[derive(Debug, Error)]
pub enum PerifnError {
    #[error("{function}: argument `{argument}` is NaN")]
    InvalidArgument {
        function: &'static str,
        argument: &'static str,
    },

    #[error("{function}: `{argument}` = {value} is outside the documented domain")]
    OutOfRange {
        function: &'static str,
        argument: &'static str,
        value: f64,
    },

    #[error("{function}: segment index {index} is out of range (num_segments = {count})")]
    IndexOutOfRange {
        function: &'static str,
        index: usize,
        count: usize,
    },
}

/// Convenience type alias for results using [`PerifnError`].
pub type Result<T> = std::result::Result<T, PerifnError>;

/// Maps a validation failure to the quiet-NaN sentinel.
///
/// Callers that prefer the sentinel convention over typed errors (for
/// example plotting layers that propagate NaN through arithmetic) chain
/// `.or_nan()` onto any fallible call instead of `?`.
pub trait OrNan {
    fn or_nan(self) -> f64;
}

impl OrNan for Result<f64> {
    fn or_nan(self) -> f64 {
        self.unwrap_or(f64::NAN)
    }
}

/// Checks an inbound argument for NaN.
pub(crate) fn not_nan(value: f64, function: &'static str, argument: &'static str) -> Result<()> {
    if value.is_nan() {
        return Err(PerifnError::InvalidArgument { function, argument });
    }
    Ok(())
}

/// Checks an inbound argument against its documented range.
pub(crate) fn in_range(
    cond: bool,
    value: f64,
    function: &'static str,
    argument: &'static str,
) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(PerifnError::OutOfRange {
            function,
            argument,
            value,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn or_nan_maps_errors_to_nan() {
        let err: Result<f64> = Err(PerifnError::InvalidArgument {
            function: "pf_plane",
            argument: "z",
        });
        assert!(err.or_nan().is_nan());

        let ok: Result<f64> = Ok(1.5);
        assert!((ok.or_nan() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn error_messages_name_function_and_argument() {
        let err = PerifnError::OutOfRange {
            function: "pf_circle",
            argument: "z",
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("pf_circle"), "{msg}");
        assert!(msg.contains('z'), "{msg}");
    }
}
