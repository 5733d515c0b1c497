//! # API Forwarding Module
//!
//! The panel calls `/api/sources/...` on its own origin. This module relays
//! every request under `/api` to the content API configured as upstream and
//! hands the answer back untouched. It does not interpret the sources API:
//! validation, persistence and scoring all stay upstream.
//!
//! ## Sub-modules:
//! - `forward`: the catch-all handler and the `Upstream` client it uses.
//! - `error`: failures of the relay itself, rendered as `success: false`
//!   envelopes so the panel's error paths apply.

mod error;
mod forward;

use actix_web::web::{scope, to};
use actix_web::Scope;

pub use error::ProxyError;
pub use forward::Upstream;

/// Prefix relayed to the upstream.
const API_PATH: &str = "/api";

/// Configures the Actix `Scope` that relays `/api/*`.
///
/// Every method and sub-path goes to `forward::process`; the upstream decides
/// what exists.
pub fn configure_routes() -> Scope {
    scope(API_PATH).default_service(to(forward::process))
}
