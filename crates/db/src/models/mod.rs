//! Row structs and DTOs.
//!
//! Each submodule contains `FromRow` + `Serialize` structs shaped for the
//! responses that read them, plus a `Create*` DTO for inserts where the
//! table is writable.

pub mod customer;
pub mod rental;
pub mod video;
