use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (growth_tracker.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect a forum's subscriber history and render the animated chart
    Track {
        /// Forum (subreddit) name, e.g. "coronavirus"
        #[arg(long)]
        forum: String,

        /// Collection start: epoch seconds or RFC3339 (e.g. "2020-01-01T00:00:00Z")
        #[arg(long)]
        start: String,

        /// Subscriber count that stops collection once reached
        #[arg(long)]
        goal: u64,

        /// Output video path
        #[arg(short, long, default_value = "subcount.mp4")]
        output: String,

        /// Interpolate this many points into every gap before rendering
        #[arg(long)]
        augment: Option<usize>,

        /// Gaussian smoothing degree applied before rendering
        #[arg(long)]
        smooth: Option<usize>,

        /// Frames per second of the output video
        #[arg(long)]
        fps: Option<u32>,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
}
