use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin, Command};
use tracing::debug;

use crate::render::chart::ChartStyle;
use crate::render::{IoSnafu, RenderError, WriteSnafu};

/// Destination for rendered animation frames.
#[async_trait]
pub trait FrameSink {
    /// The type of output returned after the animation is finalized.
    ///
    /// This makes the trait flexible. For example:
    /// - A video sink might return the path of the encoded file.
    /// - A frame-dump sink might return the paths of every written frame.
    type Output;

    /// Consumes one rendered RGB24 frame.
    async fn write_frame(&mut self, frame: &[u8]) -> Result<(), RenderError>;

    /// Flushes and finalizes the destination.
    async fn finish(&mut self) -> Result<Self::Output, RenderError>;
}

/// Encodes frames into a video file by piping raw RGB24 into an `ffmpeg`
/// child process.
///
/// ffmpeg picks the container from the output path's extension, so the
/// default `.mp4` works as well as anything else it can mux. Requires
/// `ffmpeg` on `PATH`.
pub struct Mp4Sink {
    child: Child,
    stdin: Option<ChildStdin>,
    path: PathBuf,
}

impl Mp4Sink {
    pub fn spawn(path: impl AsRef<Path>, style: &ChartStyle) -> Result<Self, RenderError> {
        let path = path.as_ref().to_path_buf();

        let mut child = Command::new("ffmpeg")
            .args(["-hide_banner", "-loglevel", "error", "-y"])
            .args(["-f", "rawvideo", "-pix_fmt", "rgb24"])
            .arg("-s")
            .arg(format!("{}x{}", style.width, style.height))
            .arg("-r")
            .arg(style.fps.to_string())
            .args(["-i", "-"])
            .args(["-pix_fmt", "yuv420p", "-b:v", "1800k"])
            .arg(&path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                WriteSnafu {
                    message: format!("failed to spawn ffmpeg: {e}"),
                }
                .build()
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            WriteSnafu {
                message: "ffmpeg stdin unavailable".to_string(),
            }
            .build()
        })?;

        debug!(path = %path.display(), "ffmpeg encoder started");
        Ok(Self {
            child,
            stdin: Some(stdin),
            path,
        })
    }
}

#[async_trait]
impl FrameSink for Mp4Sink {
    type Output = PathBuf;

    async fn write_frame(&mut self, frame: &[u8]) -> Result<(), RenderError> {
        match self.stdin.as_mut() {
            Some(stdin) => stdin.write_all(frame).await.context(IoSnafu),
            None => WriteSnafu {
                message: "encoder already finalized".to_string(),
            }
            .fail(),
        }
    }

    async fn finish(&mut self) -> Result<PathBuf, RenderError> {
        // Closing stdin signals end-of-stream so ffmpeg can flush and exit.
        drop(self.stdin.take());

        let status = self.child.wait().await.context(IoSnafu)?;
        if !status.success() {
            return WriteSnafu {
                message: format!("ffmpeg exited with {status}"),
            }
            .fail();
        }
        Ok(self.path.clone())
    }
}

/// Writes every frame as a numbered PNG into a directory.
///
/// Useful for inspecting individual frames or encoding with a tool of the
/// operator's choosing.
pub struct FramesDirSink {
    dir: PathBuf,
    width: u32,
    height: u32,
    next_index: usize,
    written: Vec<PathBuf>,
}

impl FramesDirSink {
    pub fn create(dir: impl AsRef<Path>, style: &ChartStyle) -> Result<Self, RenderError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).context(IoSnafu)?;
        Ok(Self {
            dir,
            width: style.width,
            height: style.height,
            next_index: 0,
            written: Vec::new(),
        })
    }
}

#[async_trait]
impl FrameSink for FramesDirSink {
    type Output = Vec<PathBuf>;

    async fn write_frame(&mut self, frame: &[u8]) -> Result<(), RenderError> {
        let path = self.dir.join(format!("frame_{:05}.png", self.next_index));
        image::save_buffer(
            &path,
            frame,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| {
            WriteSnafu {
                message: format!("failed to encode {}: {e}", path.display()),
            }
            .build()
        })?;

        self.next_index += 1;
        self.written.push(path);
        Ok(())
    }

    async fn finish(&mut self) -> Result<Vec<PathBuf>, RenderError> {
        Ok(std::mem::take(&mut self.written))
    }
}
