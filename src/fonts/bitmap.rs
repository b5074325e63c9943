//! Bundled 8×8 bitmap face used when no scalable face is available.
//!
//! Glyph cells are fixed-size, so measurement is plain arithmetic and the
//! computed per-role pixel sizes are ignored on this path. Layout fidelity
//! differs from the scalable face; that is the documented trade-off of the
//! degrade path, not a defect.

use font8x8::{BASIC_FONTS, UnicodeFonts};

use crate::fonts::provider::BrushRgba8;

/// Glyph cell width in pixels.
pub(crate) const GLYPH_W: u32 = 8;
/// Glyph cell height in pixels.
pub(crate) const GLYPH_H: u32 = 8;
/// Vertical advance between lines: the glyph cell plus 2 px leading.
pub(crate) const LINE_ADVANCE: u32 = 10;

/// Measure one line: `(width, height)` in pixels.
pub(crate) fn measure_line(text: &str) -> (u32, u32) {
    (text.chars().count() as u32 * GLYPH_W, GLYPH_H)
}

/// Blit one line of text into a tightly packed RGBA8 frame.
///
/// Pixels outside the frame are clipped. Glyphs outside the basic plane of
/// the face render as `?`.
pub(crate) fn blit_line(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    text: &str,
    origin_x: i64,
    origin_y: i64,
    brush: BrushRgba8,
) {
    let mut pen_x = origin_x;
    for ch in text.chars() {
        let glyph = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0u8; 8]);
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8u32 {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let x = pen_x + i64::from(col);
                let y = origin_y + row as i64;
                if x < 0 || y < 0 || x >= i64::from(frame_width) || y >= i64::from(frame_height) {
                    continue;
                }
                let idx = (y as usize * frame_width as usize + x as usize) * 4;
                // Opaque ink, so premultiplied equals straight alpha.
                frame[idx..idx + 4].copy_from_slice(&[brush.r, brush.g, brush.b, 255]);
            }
        }
        pen_x += i64::from(GLYPH_W);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/bitmap.rs"]
mod tests;
