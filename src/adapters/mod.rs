//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `schema/` - schema document parsing, writing and directory loading

pub mod schema;
