use crate::{
    clock::Clock,
    convention::{Field, MAX_MICRO, MICRO},
    error::{PatternError, VersionError},
    pattern::{Pattern, SEPARATOR},
};
use chrono::{Datelike, NaiveDate};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
};
use tracing::{debug, warn};

/// A Version is one release of a project: a [Pattern], a calendar date, and a micro counter that
/// distinguishes releases made on the same date.
///
/// Versions are created with [Version::new] (dated today) or [Version::parse] (from a previously
/// rendered string). They are [displayed](Version::to_string), [compared](Version::compare_to),
/// and [incremented](Version::next). Versions are never mutated: `next` returns a new one.
///
/// # Examples
///
/// ```
/// use calver::{FixedClock, Version};
///
/// let clock = FixedClock::from_ymd(2021, 2, 1).unwrap();
///
/// let version = Version::new("YYYY.MM.DD", 0, &clock).unwrap();
/// assert_eq!("2021.2.1", version.to_string());
///
/// // same day, so the micro counter goes up and becomes visible
/// let next = version.next(&clock);
/// assert_eq!("2021.2.1.2", next.to_string());
/// assert!(next.compare_to(&version).is_gt());
///
/// // a later day resets it
/// let later = FixedClock::from_ymd(2021, 2, 3).unwrap();
/// assert_eq!("2021.2.3", next.next(&later).to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub(crate) pattern: Pattern,
    pub(crate) date: NaiveDate,
    pub(crate) micro: u64,
}

impl Version {
    /// Returns a new version for `pattern`, dated today according to `clock`.
    ///
    /// A `micro` of `0` means unset, and is treated as `1`. A `micro` above `i64::MAX` is lowered
    /// to `i64::MAX`, the largest micro a version string can carry.
    ///
    /// # Errors
    ///
    /// - If `pattern` is invalid, returns a [PatternError].
    pub fn new<C: Clock + ?Sized>(
        pattern: &str,
        micro: u64,
        clock: &C,
    ) -> Result<Self, PatternError> {
        let pattern = Pattern::parse(pattern)?;
        Ok(Self {
            pattern,
            date: clock.today(),
            micro: micro.clamp(1, MAX_MICRO),
        })
    }

    /// Parses a version string against a pattern string.
    ///
    /// If the version has exactly one more segment than the pattern and the pattern has no
    /// `MICRO` token, the extra trailing segment is read as the micro counter. This is how
    /// `2021.2.1.3` parses with pattern `YYYY.MM.DD`.
    ///
    /// Parts of the date the pattern doesn't mention are taken from `clock`. If the day is taken
    /// from `clock` and doesn't exist in the parsed month (e.g. today is the 31st, but the version
    /// is for February), it is clamped to the last day of that month. A missing micro is `1`.
    ///
    /// Two-digit years (`YY`, `0Y`) are read as years since 2000, so they only round-trip for
    /// years 2000 through 2099. A version dated 2100 or later renders `YY` as `0`, which parses
    /// back as 2000.
    ///
    /// # Errors
    ///
    /// - If `pattern` is invalid, returns a [VersionError::InvalidPattern].
    /// - If the segment counts don't line up, returns a [VersionError::SegmentCountMismatch].
    /// - If a segment isn't an integer, returns a [VersionError::InvalidValue].
    /// - If a segment is out of range for its token, returns a [VersionError::OutOfRange].
    /// - If the year, month and day are each in range but aren't a real date (e.g. `2021.2.30`),
    ///   returns a [VersionError::InvalidDate].
    pub fn parse<C: Clock + ?Sized>(
        pattern: &str,
        value: &str,
        clock: &C,
    ) -> Result<Self, VersionError> {
        let pattern = Pattern::parse(pattern)?;
        let value_segments: Vec<&str> = value.split(SEPARATOR).collect();

        let mut conventions = pattern.conventions().to_vec();
        if value_segments.len() == conventions.len() + 1 && !pattern.has_micro() {
            debug!(%pattern, value, "reading trailing segment as implicit MICRO");
            conventions.push(&MICRO);
        } else if value_segments.len() != conventions.len() {
            return Err(VersionError::SegmentCountMismatch {
                pattern_segments: conventions.len(),
                value_segments: value_segments.len(),
            });
        }

        let mut year = None;
        let mut month = None;
        let mut day = None;
        let mut micro = None;

        for (convention, segment) in conventions.iter().zip(value_segments) {
            let value = segment
                .parse::<i64>()
                .map_err(|_| VersionError::InvalidValue {
                    segment: segment.to_string(),
                })?;
            convention.validate(value)?;

            // values are range-checked above, so these casts don't truncate
            match convention.field {
                Field::Year => year = Some(value as i32),
                Field::ShortYear => year = Some(2000 + value as i32),
                Field::Month => month = Some(value as u32),
                Field::Day => day = Some(value as u32),
                Field::Micro => micro = Some(value as u64),
            }
        }

        let today = clock.today();
        let year = year.unwrap_or_else(|| today.year());
        let month = month.unwrap_or_else(|| today.month());
        let date = match day {
            Some(day) => NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(VersionError::InvalidDate { year, month, day })?,
            None => clamped_date(year, month, today.day())?,
        };

        Ok(Self {
            pattern,
            date,
            micro: micro.unwrap_or(1),
        })
    }

    /// Returns the pattern of this version.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the date of this version.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the micro counter of this version. It is always at least 1.
    pub fn micro(&self) -> u64 {
        self.micro
    }

    /// Orders versions by date, then by micro. Patterns are not compared.
    ///
    /// Use `compare_to(other) as i8` for a `-1`/`0`/`1` result.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.micro.cmp(&other.micro))
    }

    /// Returns the version that should follow this one.
    ///
    /// If `clock` is past this version's date, that is a fresh version for today with micro `1`.
    /// Otherwise, it is this version with micro incremented. A micro already at `i64::MAX` stays
    /// there.
    pub fn next<C: Clock + ?Sized>(&self, clock: &C) -> Self {
        let fresh = Self {
            pattern: self.pattern.clone(),
            date: clock.today(),
            micro: 1,
        };

        if fresh.compare_to(self).is_gt() {
            debug!(from = %self.date, to = %fresh.date, "date advanced, resetting micro");
            fresh
        } else {
            let micro = self.micro.saturating_add(1).min(MAX_MICRO);
            if micro == self.micro {
                warn!(date = %self.date, micro, "micro is at its maximum and cannot be incremented");
            }
            debug!(date = %self.date, micro, "same date, incrementing micro");
            Self {
                pattern: self.pattern.clone(),
                date: self.date,
                micro,
            }
        }
    }
}

/// Makes a date whose day came from the clock rather than the version, clamping it to the last
/// day of the month.
fn clamped_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, VersionError> {
    let date = (1..=day)
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or(VersionError::InvalidDate { year, month, day })?;
    if date.day() != day {
        debug!(%date, clock_day = day, "clamped day to end of month");
    }
    Ok(date)
}

impl Display for Version {
    /// Renders the version with its pattern.
    ///
    /// If the micro counter is above 1 and the pattern has no `MICRO` token, it is appended as an
    /// extra segment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let implicit_micro = (self.micro > 1 && !self.pattern.has_micro()).then_some(&MICRO);
        let conventions = self
            .pattern
            .conventions()
            .iter()
            .copied()
            .chain(implicit_micro);

        for (index, convention) in conventions.enumerate() {
            if index > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(&convention.format(convention.extract(self)))?;
        }

        Ok(())
    }
}
