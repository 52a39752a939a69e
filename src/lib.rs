//! # calver
//!
//! A library for parsing, rendering, comparing and incrementing calendar versions.
//!
//! A version's structure is described by a *pattern* of dot-separated tokens, like `YYYY.0M.0D`.
//! A version is a date plus a *micro* counter that tells apart releases made on the same day.
//! Incrementing a version moves it to today's date when the clock has advanced, and bumps the
//! micro counter otherwise.
//!
//! ## Examples
//!
//! ```
//! use calver::prelude::*;
//!
//! let clock = FixedClock::from_ymd(2021, 2, 1).unwrap();
//!
//! // a first release today
//! let version = Version::new("YYYY.0M.0D", 0, &clock).unwrap();
//! assert_eq!("2021.02.01", version.to_string());
//!
//! // a second release on the same day gets a micro segment
//! let next = version.next(&clock);
//! assert_eq!("2021.02.01.2", next.to_string());
//!
//! // store only the string and pattern, then pick up where you left off
//! let restored = Version::parse("YYYY.0M.0D", "2021.02.01.2", &clock).unwrap();
//! assert_eq!(next, restored);
//! ```
//!
//! In production, pass [SystemClock], which reads the current UTC date:
//!
//! ```
//! use calver::prelude::*;
//!
//! let version = Version::new("YYYY.MM.DD", 0, &SystemClock).unwrap();
//! assert!(version.next(&SystemClock).compare_to(&version).is_gt());
//! ```
//!
//! ## Tokens
//!
//! In the "Example" column below, we reference a date of `2001-02-03` and a micro of `4`.
//!
//! | Token | Example | Part | Parsed range | Description |
//! |---|---|---|---|---|
//! | `YYYY` | `2001` | Year | `2000`–`2500` | Full year. |
//! | `YY` | `1` | Year | `0`–`99` | Last two digits of the year, read back as years since 2000. Only years 2000–2099 round-trip. |
//! | `0Y` | `01` | Year | `0`–`99` | Same as `YY` but zero-padded to 2 characters. Only years 2000–2099 round-trip. |
//! | `MM` | `2` | Month | `1`–`12` | Month. |
//! | `0M` | `02` | Month | `1`–`12` | Same as `MM` but zero-padded to 2 characters. |
//! | `M0` | `02` | Month | `1`–`12` | Same as `0M`. |
//! | `DD` | `3` | Day | `1`–`31` | Day of the month. |
//! | `0D` | `03` | Day | `1`–`31` | Same as `DD` but zero-padded to 2 characters. |
//! | `D0` | `03` | Day | `1`–`31` | Same as `0D`. |
//! | `MICRO` | `4` | Micro | `1`–`9223372036854775807` | Same-day release counter. |
//!
//! If a pattern has no `MICRO` token, the micro counter is rendered as an extra trailing segment
//! once it passes 1, and such a trailing segment is accepted when parsing.
//!
//! ## Prelude
//!
//! calver provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use calver::prelude::*;
//! ```
#![warn(missing_docs)]

mod clock;
mod convention;
mod error;
mod pattern;
mod version;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::convention::Bounds;
pub use crate::error::{PatternError, VersionError};
pub use crate::pattern::{validate_pattern, Pattern};
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use calver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::validate_pattern;
    #[doc(no_inline)]
    pub use crate::Bounds;
    #[doc(no_inline)]
    pub use crate::Clock;
    #[doc(no_inline)]
    pub use crate::FixedClock;
    #[doc(no_inline)]
    pub use crate::Pattern;
    #[doc(no_inline)]
    pub use crate::PatternError;
    #[doc(no_inline)]
    pub use crate::SystemClock;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
