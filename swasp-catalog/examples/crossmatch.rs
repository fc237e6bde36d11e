use swasp_catalog::VizierClient;
use swasp_core::parse_swasp_id;

fn main() -> anyhow::Result<()> {
    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1SWASP J063201.52+440921.4".to_string());

    let pos = parse_swasp_id(&id).expect("not a SuperWASP identifier");
    println!("{} -> {}", id, pos);

    let client = VizierClient::new()?;
    let sources = client.query_region(&pos, 5.0)?;
    println!("{} match(es) within 5\":\n", sources.len());

    for s in &sources {
        println!(
            "  {:>20}  RA {:.6}°  Dec {:+.6}°  plx {:.4}±{:.4} mas",
            s.source_id, s.ra_deg, s.dec_deg, s.plx_mas, s.e_plx_mas,
        );
    }

    Ok(())
}
