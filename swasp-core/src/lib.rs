//! Core types for working with SuperWASP object identifiers.
//!
//! SuperWASP survey identifiers encode an ICRS sky position directly in
//! the object name (`1SWASP J063201.52+440921.4`). This crate provides
//! the [`Angle`] type with colon-sexagesimal parsing and formatting, the
//! validated [`IcrsPosition`] coordinate pair, and [`parse_swasp_id`],
//! which recovers the encoded position from an identifier string.
//!
//! Everything here is pure: no I/O, no shared state, safe to call from
//! any thread.

pub mod angle;
pub mod coords;
pub mod errors;
pub mod identifier;

pub use angle::Angle;
pub use coords::IcrsPosition;
pub use errors::{CoordError, CoordResult};
pub use identifier::parse_swasp_id;
