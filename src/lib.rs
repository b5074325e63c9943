//! Wishcard renders personalized greeting-card images.
//!
//! Given a recipient, occasion, message, sender, and an optional background
//! template, the renderer produces one PNG per configured output size with
//! four text blocks composited over the background.
//!
//! # Pipeline overview
//!
//! For each entry of the [`SizeTable`]:
//!
//! 1. **Resolve background**: decode a raster template (stretch-resized to the
//!    target size) or rasterize a vector template at the target size; missing
//!    or unusable vector templates degrade to a flat neutral fill.
//! 2. **Resolve fonts**: header/main/message sizes as fractions of canvas
//!    height from an injectable [`FontProvider`]; a missing face degrades to
//!    a bundled bitmap face for all three roles.
//! 3. **Layout**: wrap the message with a characters-per-line heuristic and
//!    center the block in the band between the recipient line and the footer.
//! 4. **Composite and write**: draw the four text blocks in fixed order over
//!    the background and persist a PNG under a collision-avoiding filename.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Degrade, don't fail**: missing templates, failed vector rasterization,
//!   and missing font faces are documented fallbacks, never errors. Output
//!   write failures and corrupt raster templates fail the whole request.
//! - **Deterministic layout**: identical inputs yield identical wrapped lines
//!   and placement; the only randomness is the output filename suffix.
//! - **No cross-call state**: each [`render_card`] invocation is independent
//!   and synchronous.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod card;
mod fonts;
mod foundation;
mod layout;
mod render;

pub use assets::background::{BackgroundPixels, BackgroundSource, resolve_background};
pub use card::model::{CardRequest, OutputSize, RenderOptions, SizeTable};
pub use fonts::provider::{BrushRgba8, FaceHandle, FontProvider, FontSet};
pub use foundation::core::Canvas;
pub use foundation::error::{CardError, CardResult};
pub use layout::plan::{LayoutPlan, wrap_message};
pub use render::output::output_filename;
pub use render::pipeline::{render_batch, render_card};
