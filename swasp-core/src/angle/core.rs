//! Core angle type.
//!
//! Angles are stored as radians and constructed from or converted to the
//! units astronomy actually uses: degrees, hours (right ascension,
//! 1h = 15°), arcminutes, and arcseconds.
//!
//! ```
//! use swasp_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-10);
//! ```

use crate::errors::{CoordError, CoordResult};

const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// An angular measurement stored as radians.
///
/// `Eq` and `Ord` are not implemented because f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from hours (24h = 360°, so 1h = 15°).
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * 15.0).to_radians(),
        }
    }

    /// Creates an angle from arcseconds (3600" = 1°).
    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: (arcsec / 3600.0).to_radians(),
        }
    }

    /// Creates an angle from arcminutes (60' = 1°).
    #[inline]
    pub fn from_arcminutes(arcmin: f64) -> Self {
        Self {
            rad: (arcmin / 60.0).to_radians(),
        }
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Returns the angle in hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    /// Returns the angle in arcseconds.
    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.degrees() * 3600.0
    }

    /// Returns the angle in arcminutes.
    #[inline]
    pub fn arcminutes(self) -> f64 {
        self.degrees() * 60.0
    }

    /// Returns the absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Normalizes the angle to [0, 2π), i.e. [0°, 360°).
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: self.rad.rem_euclid(TWO_PI),
        }
    }

    /// Validates the angle as a right ascension.
    ///
    /// Right ascension is cyclic, so any finite value is accepted and
    /// normalized to [0, 24h).
    pub fn validate_right_ascension(self) -> CoordResult<Self> {
        if !self.rad.is_finite() {
            return Err(CoordError::NonFiniteRa);
        }
        Ok(self.normalized())
    }

    /// Validates the angle as a declination in [-90°, +90°].
    pub fn validate_declination(self) -> CoordResult<Self> {
        if !self.rad.is_finite() || self.rad.abs() > std::f64::consts::FRAC_PI_2 {
            return Err(CoordError::DeclinationRange(self.degrees()));
        }
        Ok(self)
    }
}
