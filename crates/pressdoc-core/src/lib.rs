//! pressdoc-core
//!
//! Pure domain types for press documents and the request vocabulary used to
//! pick between them. No rendering or HTTP dependency lives here.

pub mod error;
pub mod models;
pub mod request;
