//! Domains module containing business logic organized by bounded contexts.
//!
//! The quotes server exposes a single domain: tools backed by the upstream
//! quotes API.

pub mod tools;
