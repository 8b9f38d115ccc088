//! Turning a collected series into an animated line chart.
//!
//! [`chart`] draws single frames with plotters, [`sink`] defines where the
//! rendered frames go, and [`animation`] drives the two together, one frame
//! per sample.

pub mod animation;
pub mod chart;
pub mod sink;

use snafu::{Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RenderError {
    /// The plotting backend failed while drawing a frame.
    #[snafu(display("Failed to draw frame: {message}"))]
    Draw { message: String, backtrace: Backtrace },

    /// An error occurred while trying to write frames (e.g., the encoder
    /// exited early).
    #[snafu(display("Failed to write frames: {message}"))]
    Write { message: String, backtrace: Backtrace },

    /// The series handed to the renderer cannot be drawn.
    #[snafu(display("Frame data conversion error: {message}"))]
    Conversion { message: String, backtrace: Backtrace },

    /// A generic I/O error.
    #[snafu(display("I/O error: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}
