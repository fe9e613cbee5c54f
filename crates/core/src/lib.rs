//! Domain building blocks for the video store catalog.
//!
//! Everything here is pure logic with no database access, so it can be
//! unit-tested in isolation and shared by the `db` and `api` crates.

pub mod error;
pub mod sort;
pub mod types;
pub mod validation;
