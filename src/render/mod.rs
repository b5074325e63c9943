//! Compositing and output: draw the text blocks over a resolved background
//! and persist the result as a PNG.

pub(crate) mod compositor;
pub(crate) mod output;
pub(crate) mod pipeline;
