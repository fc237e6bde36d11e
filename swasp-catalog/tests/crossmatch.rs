//! Pipeline tests that exercise everything short of the network:
//! identifier to query target string, canned VizieR response to records,
//! records plus theta to stellar radii.

use swasp_catalog::radius::stellar_radius;
use swasp_catalog::targets::parse_target_list;
use swasp_catalog::tsv::parse_response;
use swasp_core::parse_swasp_id;

const RESPONSE: &str = "\
#\n\
#   VizieR Astronomical Server\n\
#-source=I/337/tgasptyc\n\
\n\
TYC\tHIP\t_RAJ2000\t_DEJ2000\tPlx\te_Plx\tpmRA\tpmDE\tSource\n\
\t\tdeg\tdeg\tmas\tmas\tmas/yr\tmas/yr\t\n\
---\t---\t--------\t--------\t---\t---\t---\t---\t------\n\
2934-566-1\t\t98.00633421\t44.15594219\t10.0000\t0.3210\t1.2000\t-3.4000\t971216161046626304\n\
\t31843\t98.01012000\t44.16002000\t5.0000\t0.2800\t12.5000\t7.9000\t971216161046627456\n";

#[test]
fn identifier_renders_the_query_target() {
    let pos = parse_swasp_id("1SWASPJ063201.52+440921.4").unwrap();
    assert_eq!(
        format!("{} {}", pos.ra_hms(2), pos.dec_dms(1)),
        "06:32:01.52 +44:09:21.4"
    );
}

#[test]
fn response_rows_turn_into_radii() {
    let sources = parse_response(RESPONSE).unwrap();
    assert_eq!(sources.len(), 2);

    let theta_mas = 4.0;
    let radii: Vec<f64> = sources
        .iter()
        .map(|s| stellar_radius(theta_mas, s.plx_mas))
        .collect();

    assert!((radii[0] - 42.98).abs() < 1e-9);
    assert!((radii[1] - 85.96).abs() < 1e-9);
}

#[test]
fn target_file_drives_the_pipeline() {
    let list = "1SWASPJ063201.52+440921.4 4.0\n1SWASPJ102030.65-222839.0 -1\n";
    let targets = parse_target_list(list.as_bytes()).unwrap();
    assert_eq!(targets.len(), 2);

    // every listed object resolves to a coordinate
    for target in &targets {
        assert!(parse_swasp_id(&target.swasp_id).is_some());
    }

    // known theta produces a radius, unknown theta suppresses it
    assert_eq!(targets[0].theta_mas, Some(4.0));
    assert_eq!(targets[1].theta_mas, None);
}
