use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use growth_tracker::cli::commands::{Cli, Commands};
use growth_tracker::cli::params::parse_start;
use growth_tracker::collector::collect_history;
use growth_tracker::config::{self, Config};
use growth_tracker::models::request_params::{HistoryRequestParams, ProviderParams};
use growth_tracker::providers::pushshift::PushshiftProvider;
use growth_tracker::render::animation::render_animation;
use growth_tracker::render::chart::ChartStyle;
use growth_tracker::render::sink::Mp4Sink;
use growth_tracker::series::augment::augment;
use growth_tracker::series::smooth::smooth_gaussian;
use shared_utils::env::optional_env_var;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .or_else(|| optional_env_var("GROWTH_TRACKER_CONFIG"));
    let config = match config_path {
        Some(path) => config::read_config(&path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Track {
            forum,
            start,
            goal,
            output,
            augment: augment_steps,
            smooth: smooth_degree,
            fps,
            width,
            height,
        } => {
            let start = parse_start(&start).map_err(anyhow::Error::msg)?;
            let params = HistoryRequestParams {
                forum: forum.clone(),
                start,
                goal_subscribers: goal,
                provider_specific: ProviderParams::default(),
            };

            let provider = PushshiftProvider::from_config(&config.provider)
                .map_err(growth_tracker::Error::from)?;
            let provider = match &params.provider_specific {
                ProviderParams::Pushshift(extra) => provider.with_params(extra.clone()),
                ProviderParams::None => provider,
            };

            info!(forum = %params.forum, goal, "collecting subscriber history");
            let series = collect_history(&provider, &params)
                .await
                .map_err(growth_tracker::Error::from)?;

            let mut xs = series.epochs();
            let mut ys = series.counts();
            if let Some(steps) = augment_steps {
                (xs, ys) = augment(&xs, &ys, steps).map_err(growth_tracker::Error::from)?;
            }
            if let Some(degree) = smooth_degree {
                xs = smooth_gaussian(&xs, degree).map_err(growth_tracker::Error::from)?;
                ys = smooth_gaussian(&ys, degree).map_err(growth_tracker::Error::from)?;
            }

            let style = ChartStyle {
                width: width.unwrap_or(config.render.width),
                height: height.unwrap_or(config.render.height),
                fps: fps.unwrap_or(config.render.fps),
                caption: format!("r/{} road to {} subscribers", params.forum, goal),
                ..ChartStyle::default()
            };

            let mut sink = Mp4Sink::spawn(&output, &style).map_err(growth_tracker::Error::from)?;
            let path = render_animation(&xs, &ys, &style, goal as f64, &mut sink)
                .await
                .map_err(growth_tracker::Error::from)?;

            info!(path = %path.display(), frames = xs.len(), "animation written");
        }
    }

    Ok(())
}
