//! Background template resolution: raster decode, vector rasterization, and
//! the flat-fill fallback.

pub(crate) mod background;
