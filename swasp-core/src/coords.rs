//! Validated ICRS sky positions.

use core::fmt;

use crate::angle::{Angle, DmsFmt, HmsFmt};
use crate::errors::CoordResult;

/// A right ascension / declination pair in the ICRS frame.
///
/// Construction validates: right ascension is normalized to [0, 24h),
/// declination must lie in [-90°, +90°].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcrsPosition {
    ra: Angle,
    dec: Angle,
}

impl IcrsPosition {
    pub fn new(ra: Angle, dec: Angle) -> CoordResult<Self> {
        let ra = ra.validate_right_ascension()?;
        let dec = dec.validate_declination()?;
        Ok(Self { ra, dec })
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_hours(ra_hours), Angle::from_degrees(dec_deg))
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    /// Right ascension as zero-padded `HH:MM:SS…` sexagesimal.
    pub fn ra_hms(&self, frac_digits: u8) -> String {
        HmsFmt { frac_digits }.fmt(self.ra)
    }

    /// Declination as sign-explicit `±DD:MM:SS…` sexagesimal.
    pub fn dec_dms(&self, frac_digits: u8) -> String {
        DmsFmt { frac_digits }.fmt(self.dec)
    }
}

impl fmt::Display for IcrsPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ICRS(RA={:.6}°, Dec={:.6}°)",
            self.ra.degrees(),
            self.dec.degrees()
        )
    }
}
