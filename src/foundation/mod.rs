//! Shared primitives: canvas geometry and the crate error taxonomy.

pub(crate) mod core;
pub(crate) mod error;
