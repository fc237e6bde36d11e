//! Cross-match SuperWASP objects against the Gaia/Tycho catalogue.
//!
//! The SuperWASP survey names objects after their sky position;
//! [`swasp_core::parse_swasp_id`] turns a name back into coordinates, and
//! [`VizierClient`] cone-searches the TGAS table (`I/337/tgasptyc`)
//! around them via the VizieR service. Matches carry parallaxes, which
//! combined with an IRFM angular-diameter estimate give a stellar radius
//! ([`radius::stellar_radius`]).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vizier`] | Blocking cone-search client |
//! | [`tsv`] | VizieR tab-separated response parsing |
//! | [`record`] | [`GaiaSource`] match records |
//! | [`radius`] | Stellar radius from theta + parallax |
//! | [`targets`] | Newline-delimited target list parsing |
//!
//! # Quick start
//!
//! ```ignore
//! use swasp_catalog::VizierClient;
//! use swasp_core::parse_swasp_id;
//!
//! let pos = parse_swasp_id("1SWASP J063201.52+440921.4").unwrap();
//! let client = VizierClient::new()?;
//! for src in client.query_region(&pos, 5.0)? {
//!     println!("{} plx={} mas", src.source_id, src.plx_mas);
//! }
//! ```
//!
//! # Features
//!
//! - **`cli`** — enables the `swasp-xmatch` and `rstar` binaries.

pub mod error;
pub mod radius;
pub mod record;
pub mod targets;
pub mod tsv;
pub mod vizier;

pub use error::{CatalogError, CatalogResult};
pub use record::GaiaSource;
pub use targets::Target;
pub use vizier::VizierClient;
