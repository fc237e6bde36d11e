//! Sexagesimal formatting.
//!
//! Renders angles in the zero-padded colon notation that positional
//! catalogue services accept as a target string: `HH:MM:SS.ss` for right
//! ascension and `±DD:MM:SS.s` for declination.
//!
//! ```
//! use swasp_core::angle::{Angle, DmsFmt, HmsFmt};
//!
//! let ra = Angle::from_hours(6.0 + 32.0 / 60.0 + 1.52 / 3600.0);
//! assert_eq!(HmsFmt { frac_digits: 2 }.fmt(ra), "06:32:01.52");
//!
//! let dec = Angle::from_degrees(-23.4392);
//! assert_eq!(DmsFmt { frac_digits: 1 }.fmt(dec), "-23:26:21.1");
//! ```

use core::fmt;

use super::Angle;

/// Formatter for colon-separated hours-minutes-seconds.
///
/// Output is always positive; negative angles wrap to [0, 24h).
pub struct HmsFmt {
    /// Decimal places for the seconds component.
    pub frac_digits: u8,
}

/// Formatter for colon-separated degrees-arcminutes-arcseconds.
///
/// The sign is always explicit.
pub struct DmsFmt {
    /// Decimal places for the arcseconds component.
    pub frac_digits: u8,
}

impl HmsFmt {
    /// Formats an angle as `HH:MM:SS.ss`.
    #[inline]
    pub fn fmt(&self, a: Angle) -> String {
        let mut h = a.hours().rem_euclid(24.0);
        let hh = libm::trunc(h);
        h = (h - hh) * 60.0;
        let mm = libm::trunc(h);
        let ss = (h - mm) * 60.0;
        format!(
            "{:02}:{:02}:{:0w$.p$}",
            hh as u32,
            mm as u32,
            ss,
            w = seconds_width(self.frac_digits),
            p = self.frac_digits as usize
        )
    }
}

impl DmsFmt {
    /// Formats an angle as `±DD:MM:SS.s`.
    #[inline]
    pub fn fmt(&self, a: Angle) -> String {
        let sign = if a.degrees() < 0.0 { '-' } else { '+' };
        let mut d = a.degrees().abs();
        let deg = libm::trunc(d);
        d = (d - deg) * 60.0;
        let min = libm::trunc(d);
        let sec = (d - min) * 60.0;
        format!(
            "{sign}{:02}:{:02}:{:0w$.p$}",
            deg as u32,
            min as u32,
            sec,
            w = seconds_width(self.frac_digits),
            p = self.frac_digits as usize
        )
    }
}

fn seconds_width(frac_digits: u8) -> usize {
    if frac_digits == 0 {
        2
    } else {
        frac_digits as usize + 3
    }
}

impl fmt::Display for Angle {
    /// Formats the angle as decimal degrees with 6 decimal places.
    ///
    /// For astronomical notation, use [`HmsFmt`] or [`DmsFmt`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms_zero_pads_every_component() {
        let a = Angle::from_hours(6.0 + 32.0 / 60.0 + 1.52 / 3600.0);
        let fmt = HmsFmt { frac_digits: 2 };
        assert_eq!(fmt.fmt(a), "06:32:01.52");
    }

    #[test]
    fn hms_wraps_negative_angles() {
        let a = Angle::from_hours(-1.5);
        let fmt = HmsFmt { frac_digits: 1 };
        assert_eq!(fmt.fmt(a), "22:30:00.0");
    }

    #[test]
    fn hms_whole_seconds() {
        let a = Angle::from_hours(14.5);
        let fmt = HmsFmt { frac_digits: 0 };
        assert_eq!(fmt.fmt(a), "14:30:00");
    }

    #[test]
    fn dms_sign_is_always_explicit() {
        let dec = Angle::from_degrees(44.0 + 9.0 / 60.0 + 21.4 / 3600.0);
        let fmt = DmsFmt { frac_digits: 1 };
        assert_eq!(fmt.fmt(dec), "+44:09:21.4");

        let neg = Angle::from_degrees(-(22.0 + 28.0 / 60.0 + 39.0 / 3600.0));
        assert_eq!(fmt.fmt(neg), "-22:28:39.0");
    }

    #[test]
    fn dms_small_angles_keep_padding() {
        let dec = Angle::from_degrees(-0.5);
        let fmt = DmsFmt { frac_digits: 1 };
        assert_eq!(fmt.fmt(dec), "-00:30:00.0");
    }

    #[test]
    fn display_is_decimal_degrees() {
        let a = Angle::from_degrees(45.123456789);
        assert_eq!(format!("{a}"), "45.123457°");
    }
}
