use super::*;

#[test]
fn measure_uses_fixed_glyph_cells() {
    assert_eq!(measure_line(""), (0, 8));
    assert_eq!(measure_line("Hi"), (16, 8));
    assert_eq!(measure_line("Dear Alice,"), (88, 8));
}

#[test]
fn blit_inks_pixels_with_the_brush_color() {
    let mut frame = vec![0u8; 32 * 16 * 4];
    blit_line(
        &mut frame,
        32,
        16,
        "A",
        0,
        0,
        BrushRgba8::opaque(30, 30, 30),
    );

    let inked = frame
        .chunks_exact(4)
        .filter(|px| *px == [30, 30, 30, 255])
        .count();
    assert!(inked > 0, "glyph 'A' should ink at least one pixel");

    // Nothing outside the 8x8 glyph cell is touched.
    for y in 0..16usize {
        for x in 0..32usize {
            if x < 8 && y < 8 {
                continue;
            }
            let idx = (y * 32 + x) * 4;
            assert_eq!(&frame[idx..idx + 4], &[0, 0, 0, 0]);
        }
    }
}

#[test]
fn blit_clips_out_of_bounds_origins() {
    let mut frame = vec![0u8; 8 * 8 * 4];
    // Must not panic when the glyph extends past any edge.
    blit_line(&mut frame, 8, 8, "MM", -4, -4, BrushRgba8::opaque(1, 2, 3));
    blit_line(&mut frame, 8, 8, "MM", 6, 6, BrushRgba8::opaque(1, 2, 3));
}

#[test]
fn unknown_glyphs_fall_back_to_question_mark() {
    let mut with_unknown = vec![0u8; 16 * 8 * 4];
    let mut with_question = vec![0u8; 16 * 8 * 4];
    blit_line(
        &mut with_unknown,
        16,
        8,
        "\u{1F600}",
        0,
        0,
        BrushRgba8::opaque(9, 9, 9),
    );
    blit_line(
        &mut with_question,
        16,
        8,
        "?",
        0,
        0,
        BrushRgba8::opaque(9, 9, 9),
    );
    assert_eq!(with_unknown, with_question);
}
