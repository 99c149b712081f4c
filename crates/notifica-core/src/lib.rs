//! notifica-core
//!
//! Pure domain types for condominium notifications: the inbound request
//! schema, default resolution and the Portuguese date vocabulary.
//! No PDF or HTTP dependency; this is the shared vocabulary of the system.

pub mod dates;
pub mod error;
pub mod models;
