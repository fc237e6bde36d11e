mod core;
mod format;
mod parse;

pub use core::Angle;
pub use format::{DmsFmt, HmsFmt};
pub use parse::{parse_dms, parse_hms, AngleUnits};
