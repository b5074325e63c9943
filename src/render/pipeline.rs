use crate::{
    assets::background::resolve_background,
    card::model::{CardRequest, RenderOptions, SizeTable},
    foundation::error::CardResult,
    fonts::provider::FontProvider,
    layout::plan::LayoutPlan,
    render::{compositor::compose, output},
};

/// Render one card across every configured output size.
///
/// Returns one output filename per size, in table order. The call is
/// synchronous and holds no cross-call state; concurrent invocations are
/// safe because output filenames carry a per-render random suffix and
/// templates are only ever read.
///
/// Background and font fallbacks degrade silently (at most a log notice).
/// Validation failures, corrupt raster templates, and output write failures
/// fail the whole request; sizes already written for this request stay on
/// disk (no partial cleanup).
#[tracing::instrument(
    skip(request, sizes, provider, options),
    fields(recipient = %request.recipient, occasion = %request.occasion)
)]
pub fn render_card(
    request: &CardRequest,
    sizes: &SizeTable,
    provider: &mut FontProvider,
    options: &RenderOptions,
) -> CardResult<Vec<String>> {
    request.validate()?;

    let mut filenames = Vec::with_capacity(sizes.len());
    for size in sizes.iter() {
        let canvas = size.canvas();
        let (background, source) = resolve_background(request.template.as_deref(), canvas)?;
        tracing::debug!(size = %size.name, ?source, "background resolved");

        let fonts = provider.fonts_for_height(canvas.height);
        let plan = LayoutPlan::compute(canvas, &request.message, &fonts, provider)?;
        let frame = compose(canvas, &background, request, &fonts, &plan, provider)?;

        let filename = output::output_filename(&request.recipient, &request.occasion, &size.name);
        output::write_png(&options.output_dir, &filename, canvas, &frame)?;
        filenames.push(filename);
    }
    Ok(filenames)
}

/// Render a batch of records with per-record failure attribution.
///
/// Each entry of the result corresponds to the request at the same index; a
/// failed record never masks or aborts the remaining ones, and a bulk caller
/// must not report success for an `Err` row.
pub fn render_batch(
    requests: &[CardRequest],
    sizes: &SizeTable,
    provider: &mut FontProvider,
    options: &RenderOptions,
) -> Vec<CardResult<Vec<String>>> {
    requests
        .iter()
        .map(|request| render_card(request, sizes, provider, options))
        .collect()
}
