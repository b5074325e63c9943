//! Font resolution and text shaping.
//!
//! The provider is explicit and injectable: either a scalable face loaded
//! from caller-supplied bytes, or the bundled bitmap face. Card generation
//! never fails because a font asset is missing.

pub(crate) mod bitmap;
pub(crate) mod provider;
