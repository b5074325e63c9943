use std::path::Path;

use anyhow::Context;

use crate::foundation::{
    core::Canvas,
    error::{CardError, CardResult},
};

/// Flat neutral fill substituted when no usable template resolves.
pub(crate) const FLAT_FILL_RGB: [u8; 3] = [250, 250, 250];

/// Background pixel buffer at exactly one target canvas size.
///
/// Owned by a single render pass and discarded after compositing.
#[derive(Clone, Debug)]
pub struct BackgroundPixels {
    /// The canvas these pixels were resolved for.
    pub canvas: Canvas,
    /// Row-major premultiplied RGBA8, tightly packed.
    pub rgba8_premul: Vec<u8>,
}

/// How the background for one output size was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundSource {
    /// Decoded from a raster template and stretch-resized to the target size.
    Raster,
    /// Rasterized from a vector template directly at the target size.
    Vector,
    /// Template reference missing on disk; flat fill substituted.
    FallbackMissing,
    /// Vector template failed to parse or rasterize; flat fill substituted.
    /// Carries the underlying reason for the degrade notice.
    FallbackVector(String),
}

/// Resolve a background buffer of exactly `canvas` size.
///
/// Each output size resolves independently so vector templates rasterize at
/// native target resolution instead of being upscaled from one rendering.
/// Missing templates and vector failures degrade to the flat fill; a corrupt
/// raster template is fatal ([`CardError::Template`]).
pub fn resolve_background(
    template: Option<&Path>,
    canvas: Canvas,
) -> CardResult<(BackgroundPixels, BackgroundSource)> {
    let Some(path) = template else {
        return Ok((flat_fill(canvas), BackgroundSource::FallbackMissing));
    };
    if !path.exists() {
        tracing::debug!(template = %path.display(), "template missing, using flat fill");
        return Ok((flat_fill(canvas), BackgroundSource::FallbackMissing));
    }

    let is_vector = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_vector {
        match rasterize_svg_file(path, canvas) {
            Ok(pixels) => Ok((pixels, BackgroundSource::Vector)),
            Err(err) => {
                tracing::warn!(
                    template = %path.display(),
                    reason = %err,
                    "vector template unusable, using flat fill"
                );
                Ok((flat_fill(canvas), BackgroundSource::FallbackVector(err.to_string())))
            }
        }
    } else {
        Ok((decode_raster_file(path, canvas)?, BackgroundSource::Raster))
    }
}

/// Opaque flat-fill buffer at the target size.
pub(crate) fn flat_fill(canvas: Canvas) -> BackgroundPixels {
    let [r, g, b] = FLAT_FILL_RGB;
    let mut rgba8_premul = Vec::with_capacity(canvas.rgba8_len());
    for _ in 0..(canvas.width as usize * canvas.height as usize) {
        rgba8_premul.extend_from_slice(&[r, g, b, 255]);
    }
    BackgroundPixels {
        canvas,
        rgba8_premul,
    }
}

fn decode_raster_file(path: &Path, canvas: Canvas) -> CardResult<BackgroundPixels> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read template '{}'", path.display()))
        .map_err(CardError::from)?;
    let dyn_img = image::load_from_memory(&bytes).map_err(|e| {
        CardError::template(format!("decode raster template '{}': {e}", path.display()))
    })?;

    // Stretch to the exact target size; aspect is the template author's concern.
    let resized = dyn_img.resize_exact(
        canvas.width,
        canvas.height,
        image::imageops::FilterType::CatmullRom,
    );
    let mut rgba8_premul = resized.to_rgba8().into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(BackgroundPixels {
        canvas,
        rgba8_premul,
    })
}

fn rasterize_svg_file(path: &Path, canvas: Canvas) -> anyhow::Result<BackgroundPixels> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read template '{}'", path.display()))?;
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(&bytes, &opts).context("parse svg tree")?;

    let size = tree.size();
    if !size.width().is_finite() || size.width() <= 0.0 || size.height() <= 0.0 {
        anyhow::bail!("svg has invalid width/height");
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| anyhow::anyhow!("failed to allocate svg pixmap"))?;
    let sx = canvas.width as f32 / size.width();
    let sy = canvas.height as f32 / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(BackgroundPixels {
        canvas,
        rgba8_premul: pixmap.data().to_vec(),
    })
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/background.rs"]
mod tests;
