use chrono::{NaiveDate, Utc};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::VersionError;

/// A source of "today", used to date new versions and to fill in date parts a pattern omits.
///
/// Pass [SystemClock] in production. Use [FixedClock] when the date needs to be pinned, such as in
/// tests or when rebuilding an old release.
pub trait Clock {
    /// The current calendar date, in UTC.
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Reads the system clock at each call and truncates it to the UTC calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
///
/// ```
/// use calver::{Clock, FixedClock};
///
/// let clock = FixedClock::from_ymd(2021, 2, 1).unwrap();
/// assert_eq!("2021-02-01", clock.today().to_string());
///
/// let parsed: FixedClock = "2021-02-01".parse().unwrap();
/// assert_eq!(clock, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Returns a clock fixed at `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns a clock fixed at the given date, or [VersionError::InvalidDate] if the arguments
    /// are not a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, VersionError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(VersionError::InvalidDate { year, month, day })
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for FixedClock {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for FixedClock {
    type Err = chrono::ParseError;

    /// Parses a `YYYY-MM-DD` string. See [NaiveDate::from_str].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::from_str(s)?))
    }
}

impl Display for FixedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_from_str() {
        let args = [
            ("2021-02-01", true),
            ("2024-02-29", true),
            ("2023-02-29", false),
            ("2021-2-1x", false),
            ("yesterday", false),
        ];
        for (date_str, passes) in args {
            let clock = FixedClock::from_str(date_str);
            assert_eq!(passes, clock.is_ok(), "{date_str}");
        }
    }

    #[test]
    fn test_fixed_from_ymd() {
        let args = [
            ((2021, 2, 1), true),
            ((2021, 2, 30), false),
            ((2021, 13, 1), false),
        ];
        for ((year, month, day), passes) in args {
            let clock = FixedClock::from_ymd(year, month, day);
            if passes {
                assert_eq!(
                    NaiveDate::from_ymd_opt(year, month, day),
                    clock.ok().map(|c| c.today())
                );
            } else {
                assert_eq!(Err(VersionError::InvalidDate { year, month, day }), clock);
            }
        }
    }

    #[test]
    fn test_dyn_clock() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::from_ymd(2021, 2, 1).unwrap());
        assert_eq!(NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(), clock.today());
    }

    #[test]
    fn test_system_clock_is_plausible() {
        let today = SystemClock.today();
        assert!(today >= NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    }
}
