use crate::convention::Bounds;

/// Errors from validating a pattern string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A dot-separated segment of the pattern is not a known token.
    #[error("Invalid pattern `{pattern}`: unknown segment `{segment}`")]
    UnknownSegment { pattern: String, segment: String },
}

/// Errors from parsing a version string against a pattern.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The pattern itself is invalid.
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    /// The version has a different number of segments than the pattern, even after allowing for
    /// an implicit trailing `MICRO`.
    #[error("Version has {value_segments} segments, but pattern has {pattern_segments}")]
    SegmentCountMismatch {
        pattern_segments: usize,
        value_segments: usize,
    },

    /// A version segment is not an integer.
    #[error("Version segment `{segment}` should be an integer")]
    InvalidValue { segment: String },

    /// A version segment is an integer, but not a legal one for its token.
    #[error("Value `{value}` for `{token}` should be {bounds}")]
    OutOfRange {
        token: &'static str,
        value: i64,
        bounds: Bounds,
    },

    /// Each of year, month and day was in range, but together they are not a real date.
    #[error("Year ({year}), month ({month}), and day ({day}) cannot be made into a valid date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
