//! Wire model shared by the source manager panel and its host.
//!
//! Everything here mirrors the JSON exchanged with the content API under
//! `/api/sources`. Types are deliberately lenient when decoding: the API is
//! an external collaborator and its payloads carry optional or loosely typed
//! fields.

pub mod dates;
pub mod model;
pub mod requests;
pub mod responses;
