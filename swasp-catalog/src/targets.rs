//! Target lists for batch cross-matching.
//!
//! A target file holds one object per line: the space-free SuperWASP
//! identifier, optionally followed by the IRFM theta value in
//! milliarcseconds. A non-positive theta is the file-format marker for
//! "unknown":
//!
//! ```text
//! 1SWASPJ063201.52+440921.4 4.0
//! 1SWASPJ102030.65-222839.0 -1
//! 1SWASPJ141450.70+131340.1
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};

/// One object to cross-match.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Raw SuperWASP identifier; parsed later by the query path.
    pub swasp_id: String,
    /// IRFM angular diameter in mas; `None` when unknown.
    pub theta_mas: Option<f64>,
}

impl Target {
    /// Creates a target, mapping a non-positive theta to unknown.
    pub fn new(swasp_id: impl Into<String>, theta_mas: Option<f64>) -> Self {
        Self {
            swasp_id: swasp_id.into(),
            theta_mas: theta_mas.filter(|t| *t > 0.0),
        }
    }
}

/// Reads a target list file. See the module docs for the format.
pub fn read_target_list(path: impl AsRef<Path>) -> CatalogResult<Vec<Target>> {
    let file = File::open(path)?;
    parse_target_list(BufReader::new(file))
}

/// Parses a target list from any reader. Blank lines are skipped.
pub fn parse_target_list(reader: impl BufRead) -> CatalogResult<Vec<Target>> {
    let mut targets = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace();

        let id = match parts.next() {
            Some(id) => id,
            None => continue,
        };

        let theta = match parts.next() {
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| CatalogError::TargetList {
                line: idx + 1,
                message: format!("bad theta value '{}'", raw),
            })?),
            None => None,
        };

        if parts.next().is_some() {
            return Err(CatalogError::TargetList {
                line: idx + 1,
                message: "expected 'identifier [theta]' (use the space-free identifier form)"
                    .to_string(),
            });
        }

        targets.push(Target::new(id, theta));
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifier_theta_pairs() {
        let list = "1SWASPJ063201.52+440921.4 4.0\n1SWASPJ102030.65-222839.0 2.25\n";
        let targets = parse_target_list(list.as_bytes()).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].swasp_id, "1SWASPJ063201.52+440921.4");
        assert_eq!(targets[0].theta_mas, Some(4.0));
        assert_eq!(targets[1].theta_mas, Some(2.25));
    }

    #[test]
    fn non_positive_theta_means_unknown() {
        let list = "1SWASPJ063201.52+440921.4 -1\n1SWASPJ102030.65-222839.0 0\n";
        let targets = parse_target_list(list.as_bytes()).unwrap();
        assert_eq!(targets[0].theta_mas, None);
        assert_eq!(targets[1].theta_mas, None);
    }

    #[test]
    fn theta_column_is_optional() {
        let targets = parse_target_list("1SWASPJ063201.52+440921.4\n".as_bytes()).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].theta_mas, None);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let list = "\n1SWASPJ063201.52+440921.4 4.0\n\n";
        let targets = parse_target_list(list.as_bytes()).unwrap();
        assert_eq!(targets.len(), 1);
    }

    #[test]
    fn bad_theta_reports_the_line_number() {
        let list = "1SWASPJ063201.52+440921.4 4.0\n1SWASPJ102030.65-222839.0 abc\n";
        let err = parse_target_list(list.as_bytes()).unwrap_err();
        match err {
            CatalogError::TargetList { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn extra_fields_are_rejected() {
        // a spaced identifier reads as three fields
        let list = "1SWASP J063201.52+440921.4 4.0\n";
        assert!(parse_target_list(list.as_bytes()).is_err());
    }

    #[test]
    fn constructor_filters_non_positive_theta() {
        assert_eq!(Target::new("x", Some(-3.0)).theta_mas, None);
        assert_eq!(Target::new("x", Some(1.5)).theta_mas, Some(1.5));
        assert_eq!(Target::new("x", None).theta_mas, None);
    }
}
