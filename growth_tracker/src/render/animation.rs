use tracing::info;

use crate::render::chart::{ChartStyle, draw_frame};
use crate::render::sink::FrameSink;
use crate::render::{ConversionSnafu, RenderError};

/// Renders the growing-line animation and feeds every frame to `sink`.
///
/// Frame `i` draws the series prefix `0..=i`, so the animation holds one
/// frame per point. Returns whatever the sink produces on finalization.
pub async fn render_animation<S>(
    xs: &[f64],
    ys: &[f64],
    style: &ChartStyle,
    y_max: f64,
    sink: &mut S,
) -> Result<S::Output, RenderError>
where
    S: FrameSink + Send,
{
    snafu::ensure!(
        !xs.is_empty() && xs.len() == ys.len(),
        ConversionSnafu {
            message: format!(
                "animation needs matching nonempty series, got {} x values and {} y values",
                xs.len(),
                ys.len()
            ),
        }
    );

    info!(frames = xs.len(), fps = style.fps, "rendering animation");

    let mut buffer = vec![0u8; style.frame_len()];
    for upto in 0..xs.len() {
        draw_frame(&mut buffer, style, xs, ys, upto, y_max)?;
        sink.write_frame(&buffer).await?;
    }

    sink.finish().await
}
