//! VizieR tab-separated response parsing.
//!
//! The `asu-tsv` endpoint interleaves `#` comment lines with the result
//! table: a tab-separated column-name header, a units line, a `---`
//! separator line, then data rows until a blank line. A query with no
//! matches returns comments only; that parses as an empty result, not
//! an error.

use std::collections::HashMap;

use crate::error::{CatalogError, CatalogResult};
use crate::record::GaiaSource;

struct ColumnIndices {
    tyc: usize,
    hip: usize,
    ra: usize,
    dec: usize,
    plx: usize,
    e_plx: usize,
    pmra: usize,
    pmde: usize,
    source: usize,
}

impl ColumnIndices {
    fn from_header(header: &str) -> CatalogResult<Self> {
        let mut col_map: HashMap<&str, usize> = HashMap::new();
        for (idx, col) in header.trim().split('\t').enumerate() {
            col_map.insert(col.trim(), idx);
        }
        Ok(Self {
            tyc: require_column(&col_map, "TYC")?,
            hip: require_column(&col_map, "HIP")?,
            ra: require_column(&col_map, "_RAJ2000")?,
            dec: require_column(&col_map, "_DEJ2000")?,
            plx: require_column(&col_map, "Plx")?,
            e_plx: require_column(&col_map, "e_Plx")?,
            pmra: require_column(&col_map, "pmRA")?,
            pmde: require_column(&col_map, "pmDE")?,
            source: require_column(&col_map, "Source")?,
        })
    }
}

fn require_column(col_map: &HashMap<&str, usize>, name: &str) -> CatalogResult<usize> {
    col_map
        .get(name)
        .copied()
        .ok_or_else(|| CatalogError::Response(format!("missing column: {}", name)))
}

/// Parses an `asu-tsv` response body into match records.
pub fn parse_response(body: &str) -> CatalogResult<Vec<GaiaSource>> {
    let mut lines = body.lines();

    // First non-comment line is the column header; a comments-only body
    // means the cone matched nothing.
    let header = loop {
        match lines.next() {
            Some(line) if line.starts_with('#') || line.trim().is_empty() => continue,
            Some(line) => break line,
            None => return Ok(Vec::new()),
        }
    };
    let cols = ColumnIndices::from_header(header)?;

    // Units line(s) sit between the header and the dashes separator.
    loop {
        match lines.next() {
            Some(line) if line.trim_start().starts_with('-') => break,
            Some(_) => continue,
            None => return Ok(Vec::new()),
        }
    }

    let mut sources = Vec::new();
    for line in lines {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            break;
        }
        sources.push(parse_row(line, &cols)?);
    }
    Ok(sources)
}

fn parse_row(line: &str, cols: &ColumnIndices) -> CatalogResult<GaiaSource> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

    let source_raw = field(&fields, cols.source)
        .ok_or_else(|| CatalogError::Response("row is missing Source".to_string()))?;
    let source_id = source_raw
        .parse()
        .map_err(|_| CatalogError::Response(format!("bad Source value '{}'", source_raw)))?;

    Ok(GaiaSource {
        source_id,
        tyc: field(&fields, cols.tyc).map(str::to_string),
        hip: field(&fields, cols.hip).and_then(|f| f.parse().ok()),
        ra_deg: float_field(&fields, cols.ra, "_RAJ2000")?,
        dec_deg: float_field(&fields, cols.dec, "_DEJ2000")?,
        plx_mas: float_field(&fields, cols.plx, "Plx")?,
        e_plx_mas: float_field(&fields, cols.e_plx, "e_Plx")?,
        pmra_mas_yr: float_field(&fields, cols.pmra, "pmRA")?,
        pmdec_mas_yr: float_field(&fields, cols.pmde, "pmDE")?,
    })
}

fn field<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields.get(idx).copied().filter(|f| !f.is_empty())
}

fn float_field(fields: &[&str], idx: usize, name: &str) -> CatalogResult<f64> {
    let raw = field(fields, idx)
        .ok_or_else(|| CatalogError::Response(format!("row is missing {}", name)))?;
    raw.parse()
        .map_err(|_| CatalogError::Response(format!("bad {} value '{}'", name, raw)))
}
