use chrono::Datelike;
use core::fmt::{self, Display};

use crate::{error::VersionError, version::Version};

fn full_year(version: &Version) -> i64 {
    i64::from(version.date.year())
}

fn short_year(version: &Version) -> i64 {
    // keep the last two digits, so 2006 -> 6, 2016 -> 16, 2106 -> 6
    let year = full_year(version);
    year - (year / 100 * 100)
}

fn month(version: &Version) -> i64 {
    i64::from(version.date.month())
}

fn day(version: &Version) -> i64 {
    i64::from(version.date.day())
}

fn micro(version: &Version) -> i64 {
    // versions never hold a micro above MAX_MICRO
    version.micro as i64
}

/// The largest micro counter a version can hold: the largest value a `MICRO` segment can parse.
pub(crate) const MAX_MICRO: u64 = i64::MAX as u64;

/// The legal values for a token's segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Between `min` and `max`, both inclusive.
    Inclusive { min: i64, max: i64 },
    /// Strictly greater than zero, up to the largest `i64`.
    Positive,
}

impl Bounds {
    pub(crate) fn contains(&self, value: i64) -> bool {
        match self {
            Bounds::Inclusive { min, max } => (*min..=*max).contains(&value),
            Bounds::Positive => value > 0,
        }
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bounds::Inclusive { min, max } => write!(f, "between {min} and {max}"),
            Bounds::Positive => f.write_str("greater than 0"),
        }
    }
}

/// Which part of a [Version] a token is parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Year,
    /// A year with only its last two digits, expanded relative to 2000.
    ShortYear,
    Month,
    Day,
    Micro,
}

/// The rules for one pattern token: how to read its value off a version, render it, and check it.
#[derive(Debug)]
pub(crate) struct Convention {
    /// The literal text of this token in a pattern string.
    pub(crate) token: &'static str,

    /// The part of a version this token is parsed into.
    pub(crate) field: Field,

    /// Width to zero-pad the rendered value to. `None` renders the value as-is.
    pub(crate) zero_pad_len: Option<usize>,

    /// Reads this token's value off a version.
    pub(crate) extract_fn: fn(&Version) -> i64,

    /// The legal values of this token when parsed from a version string.
    pub(crate) bounds: Bounds,
}

impl Convention {
    pub(crate) fn extract(&self, version: &Version) -> i64 {
        (self.extract_fn)(version)
    }

    pub(crate) fn format(&self, value: i64) -> String {
        match self.zero_pad_len {
            Some(len) => format!("{:0len$}", value, len = len),
            None => value.to_string(),
        }
    }

    pub(crate) fn validate(&self, value: i64) -> Result<(), VersionError> {
        if self.bounds.contains(value) {
            Ok(())
        } else {
            Err(VersionError::OutOfRange {
                token: self.token,
                value,
                bounds: self.bounds,
            })
        }
    }
}

impl PartialEq for Convention {
    // tokens are unique in the table
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Convention {}

impl Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token)
    }
}

const YEAR_BOUNDS: Bounds = Bounds::Inclusive {
    min: 2000,
    max: 2500,
};
const SHORT_YEAR_BOUNDS: Bounds = Bounds::Inclusive { min: 0, max: 99 };
const MONTH_BOUNDS: Bounds = Bounds::Inclusive { min: 1, max: 12 };
const DAY_BOUNDS: Bounds = Bounds::Inclusive { min: 1, max: 31 };

/// Full year - 2006, 2016, 2106
pub(crate) static YEAR_FULL: Convention = Convention {
    token: "YYYY",
    field: Field::Year,
    zero_pad_len: Some(4),
    extract_fn: full_year,
    bounds: YEAR_BOUNDS,
};

/// Short year - 6, 16, 6
pub(crate) static YEAR_SHORT: Convention = Convention {
    token: "YY",
    field: Field::ShortYear,
    zero_pad_len: None,
    extract_fn: short_year,
    bounds: SHORT_YEAR_BOUNDS,
};

/// Zero-padded year - 06, 16, 06
pub(crate) static YEAR_ZERO_PADDED: Convention = Convention {
    token: "0Y",
    field: Field::ShortYear,
    zero_pad_len: Some(2),
    extract_fn: short_year,
    bounds: SHORT_YEAR_BOUNDS,
};

/// Short month - 1, 2 ... 11, 12
pub(crate) static MONTH_SHORT: Convention = Convention {
    token: "MM",
    field: Field::Month,
    zero_pad_len: None,
    extract_fn: month,
    bounds: MONTH_BOUNDS,
};

/// Zero-padded month, trailing zero spelling - 01, 02 ... 11, 12
pub(crate) static MONTH_PADDED_TRAILING: Convention = Convention {
    token: "M0",
    field: Field::Month,
    zero_pad_len: Some(2),
    extract_fn: month,
    bounds: MONTH_BOUNDS,
};

/// Zero-padded month - 01, 02 ... 11, 12
pub(crate) static MONTH_ZERO_PADDED: Convention = Convention {
    token: "0M",
    field: Field::Month,
    zero_pad_len: Some(2),
    extract_fn: month,
    bounds: MONTH_BOUNDS,
};

/// Short day - 1, 2 ... 30, 31
pub(crate) static DAY_SHORT: Convention = Convention {
    token: "DD",
    field: Field::Day,
    zero_pad_len: None,
    extract_fn: day,
    bounds: DAY_BOUNDS,
};

/// Zero-padded day, trailing zero spelling - 01, 02 ... 30, 31
pub(crate) static DAY_PADDED_TRAILING: Convention = Convention {
    token: "D0",
    field: Field::Day,
    zero_pad_len: Some(2),
    extract_fn: day,
    bounds: DAY_BOUNDS,
};

/// Zero-padded day - 01, 02 ... 30, 31
pub(crate) static DAY_ZERO_PADDED: Convention = Convention {
    token: "0D",
    field: Field::Day,
    zero_pad_len: Some(2),
    extract_fn: day,
    bounds: DAY_BOUNDS,
};

/// Same-day release counter - 1, 2, 3 ...
pub(crate) static MICRO: Convention = Convention {
    token: "MICRO",
    field: Field::Micro,
    zero_pad_len: None,
    extract_fn: micro,
    bounds: Bounds::Positive,
};

pub(crate) static ALL: &[&Convention] = &[
    &YEAR_FULL,
    &YEAR_SHORT,
    &YEAR_ZERO_PADDED,
    &MONTH_SHORT,
    &MONTH_PADDED_TRAILING,
    &MONTH_ZERO_PADDED,
    &DAY_SHORT,
    &DAY_PADDED_TRAILING,
    &DAY_ZERO_PADDED,
    &MICRO,
];

/// Returns the convention for a pattern token, if there is one. Tokens are case-sensitive.
pub(crate) fn lookup(token: &str) -> Option<&'static Convention> {
    ALL.iter().copied().find(|convention| convention.token == token)
}
