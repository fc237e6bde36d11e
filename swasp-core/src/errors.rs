use thiserror::Error;

/// Convenience alias for `Result<T, CoordError>`.
pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error)]
pub enum CoordError {
    #[error("cannot parse '{0}' as HH:MM:SS.ss")]
    InvalidHms(String),

    #[error("cannot parse '{0}' as ±DD:MM:SS.s")]
    InvalidDms(String),

    #[error("right ascension is not finite")]
    NonFiniteRa,

    #[error("declination {0:.2}° outside [-90°, +90°]")]
    DeclinationRange(f64),
}
