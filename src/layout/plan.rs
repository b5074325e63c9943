use crate::{
    fonts::{
        bitmap,
        provider::{FaceHandle, FontProvider, FontSet},
    },
    foundation::{core::Canvas, error::CardResult},
};

/// Height fraction of the header anchor.
const HEADER_ANCHOR: f32 = 0.15;
/// Height fraction of the recipient-line anchor.
const RECIPIENT_ANCHOR: f32 = 0.32;
/// Height fraction of the footer anchor.
const FOOTER_ANCHOR: f32 = 0.88;
/// Characters-per-line estimate per pixel of canvas width.
const WRAP_CHARS_PER_WIDTH_PX: f64 = 0.04;
/// Gap between the recipient line's lower edge and the message band, px.
const BAND_TOP_PAD: f32 = 20.0;
/// Gap reserved above the footer anchor, px.
const BAND_BOTTOM_PAD: f32 = 60.0;

/// Derived placement for the four text blocks at one output size.
///
/// Computed fresh per `(request, size)` pair; band geometry differs per
/// size, so plans are never reused across sizes. Deterministic for
/// identical inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Vertical midpoint of the header, px from the top.
    pub header_y: f32,
    /// Vertical midpoint of the recipient line.
    pub recipient_y: f32,
    /// Vertical midpoint of the footer.
    pub footer_y: f32,
    /// Wrapped message lines, in draw order.
    pub lines: Vec<String>,
    /// Rendered height of each wrapped line, parallel to `lines`.
    pub line_heights: Vec<f32>,
    /// Top edge of the message block.
    ///
    /// Unclamped: when the block is taller than the band this sits above
    /// the band top (possibly negative) and the block runs past the footer.
    /// Overflow is an accepted edge case, not an error.
    pub message_start_y: f32,
}

impl LayoutPlan {
    /// Wrap the message and center its block inside the band between the
    /// recipient line and the footer.
    pub fn compute(
        canvas: Canvas,
        message: &str,
        fonts: &FontSet,
        provider: &mut FontProvider,
    ) -> CardResult<Self> {
        let h = canvas.height as f32;
        let header_y = h * HEADER_ANCHOR;
        let recipient_y = h * RECIPIENT_ANCHOR;
        let footer_y = h * FOOTER_ANCHOR;

        // f64 so the estimate stays stable (1200 * 0.04 must floor to 48).
        let max_chars = ((f64::from(canvas.width) * WRAP_CHARS_PER_WIDTH_PX) as usize).max(1);
        let lines = wrap_message(message, max_chars);

        let mut line_heights = Vec::with_capacity(lines.len());
        let mut block_height = 0.0f32;
        for line in &lines {
            let line_h = match fonts.message {
                FaceHandle::Builtin => bitmap::LINE_ADVANCE as f32,
                FaceHandle::Scalable { .. } => provider.line_extent(line, fonts.message)?.1,
            };
            line_heights.push(line_h);
            block_height += line_h;
        }

        // The band always hangs off the computed main size, so the builtin
        // fallback keeps the scalable path's geometry.
        let band_top = recipient_y + fonts.main_size_px as f32 / 2.0 + BAND_TOP_PAD;
        let band_bottom = footer_y - BAND_BOTTOM_PAD;
        let message_start_y = band_top + (band_bottom - band_top - block_height) / 2.0;

        Ok(Self {
            header_y,
            recipient_y,
            footer_y,
            lines,
            line_heights,
            message_start_y,
        })
    }

    /// Total rendered height of the wrapped message block.
    pub fn block_height(&self) -> f32 {
        self.line_heights.iter().sum()
    }
}

/// Greedy word wrap at `max_chars` characters per line.
///
/// This is a proportional character-count heuristic, not a glyph-metric
/// measurement: whitespace runs collapse, words longer than a full line are
/// hard-broken at the limit, and narrow canvases or wide glyphs can still
/// overflow horizontally. Callers get an estimate, not a guarantee.
pub fn wrap_message(message: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in message.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                if chunk.len() == max_chars {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            word_len + 1
        };
        if current_len + needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
