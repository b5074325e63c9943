use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::{core::Canvas, error::CardResult};

/// Build the output filename for one `(request, size)` pair:
/// `{recipient}_{occasion}_{size}_{6 hex chars}.png` with spaces replaced by
/// underscores.
///
/// The random suffix only keeps concurrent renders of identical
/// recipient/occasion/size from colliding; it is not a content hash and
/// gives no deduplication guarantee.
pub fn output_filename(recipient: &str, occasion: &str, size_name: &str) -> String {
    let token = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}_{}.png",
        recipient.replace(' ', "_"),
        occasion.replace(' ', "_"),
        size_name,
        &token[..6]
    )
}

/// Persist a premultiplied RGBA8 frame as a straight-alpha PNG under `dir`,
/// creating the directory if needed.
///
/// A write failure here is fatal for the request; it propagates so batch
/// callers can attribute the failure to the specific record.
pub(crate) fn write_png(
    dir: &Path,
    filename: &str,
    canvas: Canvas,
    rgba8_premul: &[u8],
) -> CardResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output directory '{}'", dir.display()))
        .map_err(crate::CardError::from)?;

    let mut rgba = rgba8_premul.to_vec();
    unpremultiply_rgba8_in_place(&mut rgba);

    let path = dir.join(filename);
    image::save_buffer_with_format(
        &path,
        &rgba,
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write card image '{}'", path.display()))?;
    Ok(path)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
