use crate::{
    assets::background::BackgroundPixels,
    card::model::CardRequest,
    fonts::{
        bitmap,
        provider::{BrushRgba8, FaceHandle, FontProvider, FontSet},
    },
    foundation::{
        core::Canvas,
        error::{CardError, CardResult},
    },
    layout::plan::LayoutPlan,
};

/// Header and footer ink.
const ACCENT_GRAY: BrushRgba8 = BrushRgba8::opaque(100, 100, 100);
/// Recipient-line ink.
const INK: BrushRgba8 = BrushRgba8::opaque(30, 30, 30);
/// Message-block ink.
const MESSAGE_GRAY: BrushRgba8 = BrushRgba8::opaque(70, 70, 70);

/// Vertical anchor for one drawn line. Horizontally, every line is centered
/// on the canvas midline.
#[derive(Clone, Copy)]
enum VAnchor {
    /// The line's vertical midpoint sits at `y`.
    Midpoint(f32),
    /// The line's top edge sits at `y`.
    Top(f32),
}

/// Deferred builtin-face draw, applied after compositor readback.
struct BlitJob {
    text: String,
    x: i64,
    y: i64,
    brush: BrushRgba8,
}

/// Composite the four text blocks over the background in fixed order:
/// header, recipient line, message block, footer.
///
/// Returns the frame as premultiplied RGBA8 at canvas size.
pub(crate) fn compose(
    canvas: Canvas,
    background: &BackgroundPixels,
    request: &CardRequest,
    fonts: &FontSet,
    plan: &LayoutPlan,
    provider: &mut FontProvider,
) -> CardResult<Vec<u8>> {
    let (w16, h16) = canvas.dims_u16()?;
    if background.rgba8_premul.len() != canvas.rgba8_len() {
        return Err(CardError::render("background byte length mismatch"));
    }

    let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
    let mut ctx = vello_cpu::RenderContext::new(w16, h16);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    draw_background(&mut ctx, background)?;

    let font_data = provider.face_bytes().map(|bytes| {
        vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.as_ref().clone()), 0)
    });
    // Builtin-face lines are blitted after readback; with no scalable face
    // registered there are no glyph runs, so the draw order is preserved
    // either way.
    let mut blits: Vec<BlitJob> = Vec::new();

    let header = request.occasion.to_uppercase();
    draw_line(
        &mut ctx,
        &mut blits,
        provider,
        font_data.as_ref(),
        canvas,
        &header,
        fonts.header,
        ACCENT_GRAY,
        VAnchor::Midpoint(plan.header_y),
    )?;

    let recipient = format!("Dear {},", request.recipient);
    draw_line(
        &mut ctx,
        &mut blits,
        provider,
        font_data.as_ref(),
        canvas,
        &recipient,
        fonts.main,
        INK,
        VAnchor::Midpoint(plan.recipient_y),
    )?;

    let mut cursor = plan.message_start_y;
    for (line, line_h) in plan.lines.iter().zip(&plan.line_heights) {
        draw_line(
            &mut ctx,
            &mut blits,
            provider,
            font_data.as_ref(),
            canvas,
            line,
            fonts.message,
            MESSAGE_GRAY,
            VAnchor::Top(cursor),
        )?;
        cursor += line_h;
    }

    let footer = format!("Best regards, {}", request.sender);
    draw_line(
        &mut ctx,
        &mut blits,
        provider,
        font_data.as_ref(),
        canvas,
        &footer,
        fonts.header,
        ACCENT_GRAY,
        VAnchor::Midpoint(plan.footer_y),
    )?;

    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let mut frame = pixmap.data_as_u8_slice().to_vec();
    for job in blits {
        bitmap::blit_line(
            &mut frame,
            canvas.width,
            canvas.height,
            &job.text,
            job.x,
            job.y,
            job.brush,
        );
    }
    Ok(frame)
}

fn draw_background(
    ctx: &mut vello_cpu::RenderContext,
    background: &BackgroundPixels,
) -> CardResult<()> {
    let pixmap = premul_bytes_to_pixmap(&background.rgba8_premul, background.canvas)?;
    let paint = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(background.canvas.width),
        f64::from(background.canvas.height),
    ));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_line(
    ctx: &mut vello_cpu::RenderContext,
    blits: &mut Vec<BlitJob>,
    provider: &mut FontProvider,
    font: Option<&vello_cpu::peniko::FontData>,
    canvas: Canvas,
    text: &str,
    handle: FaceHandle,
    brush: BrushRgba8,
    anchor: VAnchor,
) -> CardResult<()> {
    match handle {
        FaceHandle::Builtin => {
            let (tw, th) = bitmap::measure_line(text);
            let x = (canvas.width as f32 - tw as f32) / 2.0;
            let y = match anchor {
                VAnchor::Midpoint(y) => y - th as f32 / 2.0,
                VAnchor::Top(y) => y,
            };
            blits.push(BlitJob {
                text: text.to_string(),
                x: x.round() as i64,
                y: y.round() as i64,
                brush,
            });
        }
        FaceHandle::Scalable { size_px } => {
            let font = font
                .ok_or_else(|| CardError::render("scalable handle without registered face"))?;
            let layout = provider.shape_line(text, size_px, brush)?;
            let x = (canvas.width as f32 - layout.width()) / 2.0;
            let y = match anchor {
                VAnchor::Midpoint(y) => y - layout.height() / 2.0,
                VAnchor::Top(y) => y,
            };
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                f64::from(x),
                f64::from(y),
            )));

            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let b = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));
                    let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
    }
    Ok(())
}

fn premul_bytes_to_pixmap(rgba8_premul: &[u8], canvas: Canvas) -> CardResult<vello_cpu::Pixmap> {
    let (w, h) = canvas.dims_u16()?;
    if rgba8_premul.len() != canvas.rgba8_len() {
        return Err(CardError::render("background byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(canvas.width as usize * canvas.height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], a,
        ]));
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
