use std::{borrow::Cow, path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    fonts::bitmap,
    foundation::error::{CardError, CardResult},
};

/// Height fraction for the header/footer font.
const HEADER_FRACTION: f64 = 0.04;
/// Height fraction for the recipient-line font.
const MAIN_FRACTION: f64 = 0.08;
/// Height fraction for the message font.
const MESSAGE_FRACTION: f64 = 0.035;

/// RGBA8 brush color carried through Parley text layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl BrushRgba8 {
    /// Fully opaque brush from RGB components.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Per-role font handle.
///
/// Either every role of a [`FontSet`] is scalable at its own computed size,
/// or every role is the builtin bitmap face. Mixing is disallowed to keep
/// visual results self-consistent, and is unrepresentable here because the
/// outcome is decided once per provider, not per role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceHandle {
    /// Registered scalable face at a fixed integer pixel size.
    Scalable {
        /// Font size in pixels, truncated from the height fraction.
        size_px: u32,
    },
    /// Bundled 8×8 bitmap face; computed sizes are ignored.
    Builtin,
}

/// The three role handles derived for one canvas height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSet {
    /// Header and footer font.
    pub header: FaceHandle,
    /// Recipient-line font.
    pub main: FaceHandle,
    /// Message-block font.
    pub message: FaceHandle,
    /// Computed main font size in pixels.
    ///
    /// Band geometry is derived from this size even when the roles fall
    /// back to the builtin face, so the degraded path keeps the same text
    /// placement as the scalable one.
    pub main_size_px: u32,
}

struct ScalableFace {
    family: String,
    bytes: Arc<Vec<u8>>,
}

/// Injectable font source with a guaranteed builtin fallback.
///
/// Owns the Parley shaping contexts, so shaping and measuring take
/// `&mut self`. Shaping is deterministic for identical inputs.
pub struct FontProvider {
    face: Option<ScalableFace>,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<BrushRgba8>,
}

impl FontProvider {
    /// Provider that renders every role with the bundled bitmap face.
    pub fn builtin() -> Self {
        Self {
            face: None,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register a scalable face from a TTF/OTF file.
    ///
    /// A missing or unusable file is a degrade notice, not an error: the
    /// provider falls back to the builtin face for all roles.
    pub fn with_face_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut provider = Self::builtin();
        match provider.register_face(path) {
            Ok(face) => provider.face = Some(face),
            Err(err) => {
                tracing::warn!(
                    face = %path.display(),
                    reason = %err,
                    "scalable face unavailable, using builtin bitmap face"
                );
            }
        }
        provider
    }

    fn register_face(&mut self, path: &Path) -> anyhow::Result<ScalableFace> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| anyhow::anyhow!("no font families in '{}'", path.display()))?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| anyhow::anyhow!("registered font family has no name"))?
            .to_string();
        Ok(ScalableFace {
            family,
            bytes: Arc::new(bytes),
        })
    }

    /// Whether a scalable face registered; `false` means every handle this
    /// provider hands out is builtin.
    pub fn has_scalable_face(&self) -> bool {
        self.face.is_some()
    }

    /// Raw face bytes for glyph rendering, when the scalable face is active.
    pub(crate) fn face_bytes(&self) -> Option<Arc<Vec<u8>>> {
        self.face.as_ref().map(|f| Arc::clone(&f.bytes))
    }

    /// Derive the three role handles for a canvas height.
    ///
    /// Sizes are fixed fractions of height (0.04 / 0.08 / 0.035) truncated
    /// to whole pixels. All three roles share one outcome: the scalable face
    /// at distinct sizes, or the builtin face for all of them.
    pub fn fonts_for_height(&self, canvas_height: u32) -> FontSet {
        let (header, main, message) = role_sizes(canvas_height);
        if self.face.is_none() {
            return FontSet {
                header: FaceHandle::Builtin,
                main: FaceHandle::Builtin,
                message: FaceHandle::Builtin,
                main_size_px: main,
            };
        }
        FontSet {
            header: FaceHandle::Scalable { size_px: header },
            main: FaceHandle::Scalable { size_px: main },
            message: FaceHandle::Scalable { size_px: message },
            main_size_px: main,
        }
    }

    /// Measure one line of text: `(width, height)` in pixels.
    pub fn line_extent(&mut self, text: &str, handle: FaceHandle) -> CardResult<(f32, f32)> {
        match handle {
            FaceHandle::Builtin => {
                let (w, h) = bitmap::measure_line(text);
                Ok((w as f32, h as f32))
            }
            FaceHandle::Scalable { size_px } => {
                let layout = self.shape_line(text, size_px, BrushRgba8::default())?;
                Ok((layout.width(), layout.height()))
            }
        }
    }

    /// Shape one line of text with the registered scalable face.
    pub(crate) fn shape_line(
        &mut self,
        text: &str,
        size_px: u32,
        brush: BrushRgba8,
    ) -> CardResult<parley::Layout<BrushRgba8>> {
        let family = self
            .face
            .as_ref()
            .map(|f| f.family.clone())
            .ok_or_else(|| CardError::render("shape_line requires a registered scalable face"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px as f32));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<BrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Header/main/message pixel sizes for a canvas height, truncated to whole
/// pixels with a floor of 1.
///
/// Computed in f64 so pixel sizes stay stable across canvas heights
/// (`1350 * 0.04` must truncate to 54, not 53).
fn role_sizes(canvas_height: u32) -> (u32, u32, u32) {
    let at = |fraction: f64| ((f64::from(canvas_height) * fraction) as u32).max(1);
    (
        at(HEADER_FRACTION),
        at(MAIN_FRACTION),
        at(MESSAGE_FRACTION),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/provider.rs"]
mod tests;
