//! rsdef - hypermedia resource contract model
//!
//! This library captures a hypermedia REST API description (resources, their
//! states and link relations, operations and status codes) as typed data, and
//! provides validation, transition resolution, status-code tables, contract
//! checking of observed responses, and documentation rendering.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
