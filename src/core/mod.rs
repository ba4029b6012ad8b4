//! Core contract model for rsdef
//!
//! This module contains pure logic with no I/O dependencies.
//! Where definitions come from is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Contract types (resources, states, transitions, operations)
//! - `services/` - Registry, validation, outcome tables, contract checks, docs
//! - `ports/` - Trait definitions for definition sources

pub mod models;
pub mod ports;
pub mod services;
