use growth_tracker::render::RenderError;
use growth_tracker::render::animation::render_animation;
use growth_tracker::render::chart::ChartStyle;
use growth_tracker::render::sink::{FramesDirSink, Mp4Sink};

fn small_style() -> ChartStyle {
    ChartStyle {
        width: 160,
        height: 120,
        fps: 5,
        ..ChartStyle::default()
    }
}

fn sample_series() -> (Vec<f64>, Vec<f64>) {
    let xs = vec![1_577_836_800.0, 1_577_923_200.0, 1_578_009_600.0];
    let ys = vec![0.0, 40.0, 90.0];
    (xs, ys)
}

#[tokio::test]
async fn frames_sink_writes_one_png_per_point() {
    let dir = tempfile::tempdir().unwrap();
    let style = small_style();
    let (xs, ys) = sample_series();

    let mut sink = FramesDirSink::create(dir.path(), &style).unwrap();
    let written = render_animation(&xs, &ys, &style, 100.0, &mut sink)
        .await
        .unwrap();

    assert_eq!(written.len(), 3);
    assert!(written[0].ends_with("frame_00000.png"));
    for path in &written {
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}

#[tokio::test]
async fn mismatched_series_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let style = small_style();

    let mut sink = FramesDirSink::create(dir.path(), &style).unwrap();
    let result = render_animation(&[0.0, 1.0], &[0.0], &style, 100.0, &mut sink).await;
    assert!(matches!(result, Err(RenderError::Conversion { .. })));
}

// Requires ffmpeg on PATH.
#[tokio::test]
#[ignore]
async fn mp4_sink_encodes_a_video_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("growth.mp4");
    let style = small_style();
    let (xs, ys) = sample_series();

    let mut sink = Mp4Sink::spawn(&output, &style).unwrap();
    let path = render_animation(&xs, &ys, &style, 100.0, &mut sink)
        .await
        .unwrap();

    assert_eq!(path, output);
    assert!(std::fs::metadata(&output).unwrap().len() > 0);
}
