use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas {
        width: w,
        height: h,
    }
}

#[test]
fn wrap_fills_lines_greedily() {
    assert_eq!(wrap_message("hello world", 11), vec!["hello world"]);
    assert_eq!(wrap_message("hello world", 10), vec!["hello", "world"]);
    assert_eq!(
        wrap_message("one two three four", 9),
        vec!["one two", "three", "four"]
    );
}

#[test]
fn wrap_collapses_whitespace_and_handles_empty_input() {
    assert!(wrap_message("", 10).is_empty());
    assert!(wrap_message("   \n\t ", 10).is_empty());
    assert_eq!(wrap_message("a   b\n c", 10), vec!["a b c"]);
}

#[test]
fn wrap_hard_breaks_overlong_words() {
    assert_eq!(wrap_message("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap_message("hi abcdefghij", 4), vec!["hi", "abcd", "efgh", "ij"]);
}

#[test]
fn wrap_width_follows_the_canvas_heuristic() {
    // floor(1200 * 0.04) = 48 characters per line.
    let mut provider = FontProvider::builtin();
    let fonts = provider.fonts_for_height(628);
    let message = "a".repeat(50);
    let plan = LayoutPlan::compute(canvas(1200, 628), &message, &fonts, &mut provider).unwrap();
    assert_eq!(plan.lines, vec!["a".repeat(48), "aa".to_string()]);
}

#[test]
fn anchors_are_height_fractions() {
    let mut provider = FontProvider::builtin();
    let fonts = provider.fonts_for_height(1080);
    let plan = LayoutPlan::compute(canvas(1080, 1080), "hi", &fonts, &mut provider).unwrap();
    let h = 1080.0f32;
    assert_eq!(plan.header_y, h * 0.15);
    assert_eq!(plan.recipient_y, h * 0.32);
    assert_eq!(plan.footer_y, h * 0.88);
}

#[test]
fn message_block_centers_in_the_band() {
    let mut provider = FontProvider::builtin();
    let fonts = provider.fonts_for_height(1080);
    let message = "Hope your day is wonderful and full of joy!";
    let plan =
        LayoutPlan::compute(canvas(1080, 1080), message, &fonts, &mut provider).unwrap();

    // Builtin face: every wrapped line advances by a fixed 10 px.
    let block = plan.lines.len() as f32 * 10.0;
    assert_eq!(plan.block_height(), block);

    // Band top hangs off half the computed main size (86 / 2 at h = 1080),
    // not the 4 px bitmap half-cell, even though the face fell back.
    assert_eq!(fonts.main_size_px, 86);
    let h = 1080.0f32;
    let band_top = h * 0.32 + 43.0 + 20.0;
    let band_bottom = h * 0.88 - 60.0;
    let expected = band_top + (band_bottom - band_top - block) / 2.0;
    assert_eq!(plan.message_start_y, expected);
}

#[test]
fn layout_is_deterministic() {
    let mut provider = FontProvider::builtin();
    let fonts = provider.fonts_for_height(1350);
    let message = "Wishing you all the best today and always.";
    let a = LayoutPlan::compute(canvas(1080, 1350), message, &fonts, &mut provider).unwrap();
    let b = LayoutPlan::compute(canvas(1080, 1350), message, &fonts, &mut provider).unwrap();
    assert_eq!(a, b);
}

#[test]
fn overflowing_block_keeps_the_unclamped_center() {
    let mut provider = FontProvider::builtin();
    let fonts = provider.fonts_for_height(100);
    // 100 px wide canvas wraps at 4 chars; enough words to dwarf the band.
    let message = "word ".repeat(60);
    let plan = LayoutPlan::compute(canvas(100, 100), &message, &fonts, &mut provider).unwrap();

    let h = 100.0f32;
    let band_top = h * 0.32 + fonts.main_size_px as f32 / 2.0 + 20.0;
    let band_bottom = h * 0.88 - 60.0;
    let block = plan.lines.len() as f32 * 10.0;
    let expected = band_top + (band_bottom - band_top - block) / 2.0;

    assert!(block > band_bottom - band_top);
    assert_eq!(plan.message_start_y, expected);
    assert!(plan.message_start_y < band_top);
}
