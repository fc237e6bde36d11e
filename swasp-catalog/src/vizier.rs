//! Blocking VizieR cone-search client.
//!
//! One HTTP GET per query against the `asu-tsv` endpoint; the response
//! is parsed by [`crate::tsv`]. There is no retry logic: a failed
//! request surfaces as an error, and a query that matches nothing is an
//! empty, non-error result.

use std::time::Duration;

use swasp_core::IcrsPosition;

use crate::error::{CatalogError, CatalogResult};
use crate::record::GaiaSource;
use crate::tsv;

/// VizieR table holding the Gaia DR1 TGAS / Tycho cross-match.
pub const GAIA_TGAS_CATALOGUE: &str = "I/337/tgasptyc";

const DEFAULT_BASE_URL: &str = "https://vizier.cds.unistra.fr/viz-bin/asu-tsv";
const OUT_COLUMNS: &str = "TYC HIP _RAJ2000 _DEJ2000 Plx e_Plx pmRA pmDE Source";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for positional queries against a VizieR-hosted catalogue.
pub struct VizierClient {
    http: reqwest::blocking::Client,
    base_url: String,
    catalogue: String,
}

impl VizierClient {
    /// Creates a client for [`GAIA_TGAS_CATALOGUE`] on the public VizieR
    /// service.
    pub fn new() -> CatalogResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a specific `asu-tsv` endpoint (mirrors,
    /// test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> CatalogResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            catalogue: GAIA_TGAS_CATALOGUE.to_string(),
        })
    }

    /// Overrides the catalogue table to query.
    pub fn with_catalogue(mut self, catalogue: impl Into<String>) -> Self {
        self.catalogue = catalogue.into();
        self
    }

    /// Cone-searches the catalogue around `pos`.
    ///
    /// `radius_arcsec` is the search radius in arcseconds. Returns the
    /// matching sources in server row order; zero matches is
    /// `Ok(vec![])`.
    pub fn query_region(
        &self,
        pos: &IcrsPosition,
        radius_arcsec: f64,
    ) -> CatalogResult<Vec<GaiaSource>> {
        let target = region_target(pos);
        log::debug!(
            "querying {} around {} ({}\" radius)",
            self.catalogue,
            target,
            radius_arcsec
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&region_params(&self.catalogue, &target, radius_arcsec))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text()?;
        tsv::parse_response(&body)
    }
}

/// Renders the sexagesimal target string VizieR expects for `-c`.
fn region_target(pos: &IcrsPosition) -> String {
    format!("{} {}", pos.ra_hms(2), pos.dec_dms(1))
}

fn region_params(catalogue: &str, target: &str, radius_arcsec: f64) -> Vec<(&'static str, String)> {
    vec![
        ("-source", catalogue.to_string()),
        ("-c", target.to_string()),
        ("-c.rs", radius_arcsec.to_string()),
        ("-out", OUT_COLUMNS.to_string()),
        ("-out.max", "unlimited".to_string()),
    ]
}
