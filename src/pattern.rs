use crate::{
    convention::{self, Convention, Field},
    error::PatternError,
};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The separator between segments, in both patterns and versions.
pub(crate) const SEPARATOR: char = '.';

/// A Pattern describes the structure of a version as a dot-separated sequence of tokens, like
/// `YYYY.0M.MICRO`.
///
/// The original pattern string is kept verbatim, because tokens for the same part of a date (e.g.
/// `YY` and `0Y`) render differently.
///
/// Pattern validation is shallow: a token may repeat (`MM.MM`) and tokens may come in
/// any order (`DD.YYYY`). When two tokens map to the same part of a version, parsing keeps the
/// last one's value, and rendering writes every occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    conventions: Vec<&'static Convention>,
}

impl Pattern {
    /// Parses and validates a pattern string.
    ///
    /// # Errors
    ///
    /// - If any segment is not a known token, returns [PatternError::UnknownSegment].
    ///
    /// # Example
    ///
    /// ```
    /// use calver::Pattern;
    ///
    /// let pattern = Pattern::parse("YYYY.0M.MICRO").unwrap();
    /// assert_eq!("YYYY.0M.MICRO", pattern.to_string());
    /// assert!(Pattern::parse("YYYY.XX").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let conventions = pattern
            .split(SEPARATOR)
            .map(|segment| {
                convention::lookup(segment).ok_or_else(|| PatternError::UnknownSegment {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: pattern.to_string(),
            conventions,
        })
    }

    /// Returns the pattern string as it was given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the number of segments in this pattern.
    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    /// Patterns always have at least one segment, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    /// Returns true if this pattern has an explicit `MICRO` token.
    pub fn has_micro(&self) -> bool {
        self.conventions
            .iter()
            .any(|convention| convention.field == Field::Micro)
    }

    pub(crate) fn conventions(&self) -> &[&'static Convention] {
        &self.conventions
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Checks that every segment of `pattern` is a known token.
///
/// ```
/// use calver::{validate_pattern, PatternError};
///
/// assert!(validate_pattern("0Y.0M.0D").is_ok());
/// assert_eq!(
///     Err(PatternError::UnknownSegment {
///         pattern: "YYYY.XX.HH".to_string(),
///         segment: "XX".to_string(),
///     }),
///     validate_pattern("YYYY.XX.HH")
/// );
/// ```
pub fn validate_pattern(pattern: &str) -> Result<(), PatternError> {
    Pattern::parse(pattern).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::{DAY_SHORT, MICRO, MONTH_ZERO_PADDED, YEAR_FULL};
    use itertools::Itertools;
    use rstest::*;
    use std::iter;

    /// Returns every year, year-month and year-month-day token sequence, each with and without a
    /// trailing `MICRO`.
    #[fixture]
    fn all_valid_token_sequences() -> impl Iterator<Item = Vec<&'static str>> {
        let years = || iter::once(vec!["YYYY", "YY", "0Y"]);
        let months = || iter::once(vec!["MM", "M0", "0M"]);
        let days = || iter::once(vec!["DD", "D0", "0D"]);

        let years_product = years().multi_cartesian_product();
        let years_months_product = years().chain(months()).multi_cartesian_product();
        let years_months_days_product = years()
            .chain(months())
            .chain(days())
            .multi_cartesian_product();

        years_product
            .chain(years_months_product)
            .chain(years_months_days_product)
            .flat_map(|tokens| vec![tokens.clone(), [tokens, vec!["MICRO"]].concat()])
    }

    #[rstest]
    fn test_parse_ok(all_valid_token_sequences: impl Iterator<Item = Vec<&'static str>>) {
        for tokens in all_valid_token_sequences {
            let pattern_str = tokens.join(".");
            let pattern = Pattern::parse(&pattern_str);
            assert_eq!(Ok(pattern_str.as_str()), pattern.as_ref().map(|p| p.as_str()));
            assert_eq!(Ok(tokens.len()), pattern.map(|p| p.len()));
        }
    }

    #[test]
    fn test_parse_tokens() {
        let pattern = Pattern::parse("YYYY.0M.DD.MICRO").unwrap();
        assert_eq!(
            &[&YEAR_FULL, &MONTH_ZERO_PADDED, &DAY_SHORT, &MICRO],
            pattern.conventions()
        );
        assert!(pattern.has_micro());
        assert!(!Pattern::parse("YYYY.0M.DD").unwrap().has_micro());
    }

    #[test]
    fn test_loose_patterns_accepted() {
        for pattern in ["MM.MM", "DD.YYYY", "MICRO", "YYYY.YY", "MICRO.MICRO"] {
            assert!(validate_pattern(pattern).is_ok(), "{pattern}");
        }
    }

    #[test]
    fn test_bad_patterns() {
        let args = [
            ("YYYY.XX.HH", "XX"),
            ("", ""),
            ("YYYY.", ""),
            (".YYYY", ""),
            ("yyyy.mm", "yyyy"),
            ("YYYY-MM", "YYYY-MM"),
            ("YYYY.MM.DD.micro", "micro"),
            ("<YYYY>", "<YYYY>"),
        ];

        for (pattern, segment) in args {
            let actual = validate_pattern(pattern);
            assert_eq!(
                Err(PatternError::UnknownSegment {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                }),
                actual
            );
        }
    }

    #[test]
    fn test_error_names_pattern() {
        let err = Pattern::parse("YYYY.XX.HH").unwrap_err();
        assert!(err.to_string().contains("YYYY.XX.HH"));
        assert!(err.to_string().starts_with("Invalid pattern"));
    }

    #[test]
    fn test_eq() {
        let pattern1 = Pattern::parse("YYYY.MM").unwrap();
        let pattern2: Pattern = "YYYY.MM".parse().unwrap();
        assert_eq!(pattern1, pattern2);
    }

    #[test]
    fn test_neq() {
        let pattern1 = Pattern::parse("YYYY.MM").unwrap();
        let pattern2 = Pattern::parse("YYYY.0M").unwrap();
        assert_ne!(pattern1, pattern2);
    }
}
