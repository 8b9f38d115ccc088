use chrono::DateTime;
use plotters::prelude::*;

use crate::render::{ConversionSnafu, DrawSnafu, RenderError};

/// Chart canvas background, the light grey of the original styling.
const BACKGROUND: RGBColor = RGBColor(211, 211, 211);

/// Presentation settings for the animated chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Caption drawn above the plot area.
    pub caption: String,
    /// Stroke width of the series line.
    pub line_width: u32,
    /// Frames per second of the encoded animation.
    pub fps: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            caption: "Subscriber growth".to_string(),
            line_width: 3,
            fps: 20,
        }
    }
}

impl ChartStyle {
    /// Byte length of one RGB24 frame at this canvas size.
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

/// Draws one animation frame into an RGB24 buffer.
///
/// The axes span the whole series (x from first to last sample, y from zero
/// to `y_max`) on every frame; only the line grows, tracing the prefix
/// `0..=upto`. `xs` holds epoch seconds, which the x axis labels as dates.
pub fn draw_frame(
    buffer: &mut [u8],
    style: &ChartStyle,
    xs: &[f64],
    ys: &[f64],
    upto: usize,
    y_max: f64,
) -> Result<(), RenderError> {
    snafu::ensure!(
        buffer.len() == style.frame_len(),
        ConversionSnafu {
            message: format!(
                "frame buffer holds {} bytes, canvas needs {}",
                buffer.len(),
                style.frame_len()
            ),
        }
    );
    snafu::ensure!(
        !xs.is_empty() && xs.len() == ys.len(),
        ConversionSnafu {
            message: format!("unplottable series: {} x values, {} y values", xs.len(), ys.len()),
        }
    );
    snafu::ensure!(
        y_max > 0.0,
        ConversionSnafu {
            message: format!("y axis upper bound must be positive, got {y_max}"),
        }
    );

    let x_min = xs[0];
    let mut x_max = xs[xs.len() - 1];
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let root = BitMapBackend::with_buffer(buffer, (style.width, style.height)).into_drawing_area();
    root.fill(&BACKGROUND).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.caption, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(10)
        .x_label_formatter(&|epoch| format_epoch_label(*epoch))
        .x_desc("Date")
        .y_desc("Total Subscribers")
        .draw()
        .map_err(draw_err)?;

    let end = upto.min(xs.len() - 1);
    chart
        .draw_series(LineSeries::new(
            xs[..=end].iter().zip(&ys[..=end]).map(|(x, y)| (*x, *y)),
            RED.stroke_width(style.line_width),
        ))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_err<E: std::fmt::Display>(error: E) -> RenderError {
    DrawSnafu {
        message: error.to_string(),
    }
    .build()
}

fn format_epoch_label(epoch: f64) -> String {
    match DateTime::from_timestamp(epoch as i64, 0) {
        Some(date) => date.format("%b %d").to_string(),
        None => String::new(),
    }
}
