//! Colon-separated sexagesimal parsing.
//!
//! SuperWASP identifiers decompose into `HH:MM:SS.ss` / `±DD:MM:SS.s`
//! strings, and those are the only angle formats this crate needs to
//! read. Use [`parse_hms`] for right ascension and [`parse_dms`] for
//! declination, or the [`AngleUnits`] methods on `str`:
//!
//! ```
//! use swasp_core::angle::AngleUnits;
//!
//! let ra = "06:32:01.52".hms().unwrap();
//! let dec = "+44:09:21.4".dms().unwrap();
//! ```
//!
//! Signs are only valid at the beginning: `-22:28:39` works,
//! `22:-28:39` does not. Minutes and seconds must be below 60.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Angle;
use crate::errors::{CoordError, CoordResult};

static COLON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-])?(\d{1,3}):(\d{1,2}):(\d{1,2}(?:\.\d+)?)\s*$").unwrap());

/// Parse strings as angles with explicit sexagesimal units.
///
/// Implemented for `str`. For right ascension use
/// [`hms`](AngleUnits::hms); for declination use [`dms`](AngleUnits::dms).
pub trait AngleUnits {
    /// Parse hours:minutes:seconds (1 hour = 15 degrees).
    fn hms(&self) -> CoordResult<Angle>;
    /// Parse degrees:arcminutes:arcseconds.
    fn dms(&self) -> CoordResult<Angle>;
}

impl AngleUnits for str {
    #[inline]
    fn hms(&self) -> CoordResult<Angle> {
        parse_hms(self)
    }

    #[inline]
    fn dms(&self) -> CoordResult<Angle> {
        parse_dms(self)
    }
}

/// Parses `HH:MM:SS.ss` into an angle in hour units.
pub fn parse_hms(s: &str) -> CoordResult<Angle> {
    let (sign, h, m, sec) = split_colon(s).ok_or_else(|| CoordError::InvalidHms(s.to_string()))?;
    if m >= 60.0 || sec >= 60.0 {
        return Err(CoordError::InvalidHms(s.to_string()));
    }
    Ok(Angle::from_hours(sign * (h + m / 60.0 + sec / 3600.0)))
}

/// Parses `±DD:MM:SS.s` into an angle in degree units.
pub fn parse_dms(s: &str) -> CoordResult<Angle> {
    let (sign, d, m, sec) = split_colon(s).ok_or_else(|| CoordError::InvalidDms(s.to_string()))?;
    if m >= 60.0 || sec >= 60.0 {
        return Err(CoordError::InvalidDms(s.to_string()));
    }
    Ok(Angle::from_degrees(sign * (d + m / 60.0 + sec / 3600.0)))
}

fn split_colon(s: &str) -> Option<(f64, f64, f64, f64)> {
    let caps = COLON_RE.captures(s)?;
    let sign = caps
        .get(1)
        .map_or(1.0, |m| if m.as_str() == "-" { -1.0 } else { 1.0 });
    let first: f64 = caps[2].parse().unwrap();
    let minutes: f64 = caps[3].parse().unwrap();
    let seconds: f64 = caps[4].parse().unwrap();
    Some((sign, first, minutes, seconds))
}
