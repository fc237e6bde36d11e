//! SuperWASP identifier parsing.
//!
//! SuperWASP object names embed the object's ICRS position:
//!
//! ```text
//! 1SWASP J063201.52+440921.4
//!         └──┬───┘ └───┬───┘
//!     RA hhmmss.ss   Dec ±ddmmss.s
//! ```
//!
//! The space before the `J` is optional; both spellings name the same
//! object. [`parse_swasp_id`] searches for the pattern anywhere in the
//! input, so surrounding text is tolerated and the first occurrence
//! wins. Anything that does not contain a well-formed identifier yields
//! `None`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::angle::{parse_dms, parse_hms};
use crate::coords::IcrsPosition;

static SWASP_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"1SWASP ?J(\d{2})(\d{2})(\d{2}\.\d{2})([+-]\d{2})(\d{2})(\d{2}\.\d)").unwrap()
});

/// Extracts the ICRS position encoded in a SuperWASP identifier.
///
/// Returns `None` when the string contains no well-formed identifier, or
/// when the encoded fields do not form a valid sky position (arcminutes
/// or arcseconds of 60 and above).
pub fn parse_swasp_id(identifier: &str) -> Option<IcrsPosition> {
    let caps = SWASP_ID_RE.captures(identifier)?;
    let ra = parse_hms(&format!("{}:{}:{}", &caps[1], &caps[2], &caps[3])).ok()?;
    let dec = parse_dms(&format!("{}:{}:{}", &caps[4], &caps[5], &caps[6])).ok()?;
    IcrsPosition::new(ra, dec).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "1SWASP J063201.52+440921.4";

    #[test]
    fn parses_a_valid_identifier() {
        let pos = parse_swasp_id(NAME).unwrap();
        assert_eq!(pos.ra_hms(2), "06:32:01.52");
        assert_eq!(pos.dec_dms(1), "+44:09:21.4");
    }

    #[test]
    fn decodes_the_expected_degrees() {
        let pos = parse_swasp_id(NAME).unwrap();
        assert!((pos.ra().degrees() - 98.00633333).abs() < 1e-6);
        assert!((pos.dec().degrees() - 44.15594444).abs() < 1e-6);
    }

    #[test]
    fn space_before_j_is_optional() {
        let spaced = parse_swasp_id(NAME).unwrap();
        let compact = parse_swasp_id(&NAME.replace(' ', "")).unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        assert!(parse_swasp_id(&NAME.replace("SWASP", "FOOBAR")).is_none());
    }

    #[test]
    fn negative_declination() {
        let pos = parse_swasp_id("1SWASPJ102030.65-222839.0").unwrap();
        assert_eq!(pos.ra_hms(2), "10:20:30.65");
        assert_eq!(pos.dec_dms(1), "-22:28:39.0");
        assert!(pos.dec().degrees() < 0.0);
    }

    #[test]
    fn finds_the_identifier_inside_longer_text() {
        let pos = parse_swasp_id("target 1SWASPJ063201.52+440921.4 (V=11.3)").unwrap();
        assert_eq!(pos.ra_hms(2), "06:32:01.52");
    }

    #[test]
    fn first_occurrence_wins() {
        let pos =
            parse_swasp_id("1SWASPJ000000.00+000000.0 1SWASPJ063201.52+440921.4").unwrap();
        assert_eq!(pos.ra_hms(2), "00:00:00.00");
    }

    #[test]
    fn out_of_range_arcminutes_are_rejected() {
        // 69 declination arcminutes
        assert!(parse_swasp_id("1SWASP J063201.52+446921.4").is_none());
    }

    #[test]
    fn garbage_returns_none() {
        assert!(parse_swasp_id("").is_none());
        assert!(parse_swasp_id("1SWASP").is_none());
        assert!(parse_swasp_id("J063201.52+440921.4").is_none());
        assert!(parse_swasp_id("1SWASP J06320152+4409214").is_none());
        assert!(parse_swasp_id("completely unrelated").is_none());
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(parse_swasp_id(NAME), parse_swasp_id(NAME));
    }
}
