//! Message wrapping and per-size text placement.

pub(crate) mod plan;
