//! Catalogue match records.

/// A single source returned from a Gaia/Tycho cone search.
///
/// Field units follow the catalogue: positions in degrees (J2000),
/// parallax and its uncertainty in milliarcseconds, proper motions in
/// milliarcseconds per year.
#[derive(Debug, Clone, PartialEq)]
pub struct GaiaSource {
    /// Unique Gaia source identifier; the key for a result set.
    pub source_id: i64,
    /// Tycho-2 identifier, when the source has one.
    pub tyc: Option<String>,
    /// Hipparcos identifier, when the source has one.
    pub hip: Option<u32>,
    /// Right ascension, degrees.
    pub ra_deg: f64,
    /// Declination, degrees.
    pub dec_deg: f64,
    /// Parallax, milliarcseconds.
    pub plx_mas: f64,
    /// Parallax standard uncertainty, milliarcseconds.
    pub e_plx_mas: f64,
    /// Proper motion in right ascension (μα·cosδ), mas/yr.
    pub pmra_mas_yr: f64,
    /// Proper motion in declination, mas/yr.
    pub pmdec_mas_yr: f64,
}
