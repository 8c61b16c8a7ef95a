// File: crates/trend-demo/src/main.rs
// Summary: Demo renders a trend chart (static or animated frame by frame) and a hover tooltip to PNGs.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use trend_core::{ChartConfig, Point, PointerEvent, RenderOptions, TickOutcome, TrendChart};

#[derive(Parser, Debug)]
#[command(name = "trend-demo", about = "Render a row/column trend chart to PNG")]
struct Args {
    /// TOML chart config; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// One value per column in 1..=rows, comma separated; random when omitted.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<i64>,
    /// Animate the line over this many seconds and write intermediate frames.
    #[arg(long)]
    animate: Option<f64>,
    /// Write an animation frame every N ticks.
    #[arg(long, default_value_t = 10)]
    frame_every: u32,
    /// Column to hover for the tooltip image.
    #[arg(long)]
    hover: Option<usize>,
    /// Output directory.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    log::info!(
        "chart: {} rows x {} columns, theme '{}'",
        config.row_count,
        config.column_count,
        config.theme
    );
    let values = if args.values.is_empty() {
        random_values(config.column_count, config.row_count)
    } else {
        args.values.clone()
    };
    println!("Values: {:?}", values);

    let mut chart = TrendChart::new(config)?;
    let opts = RenderOptions::default();

    match args.animate {
        Some(secs) => animate(&mut chart, &values, secs, args.frame_every.max(1), &opts, &args.out)?,
        None => {
            chart.draw_trends(&values)?;
            write(&chart, &opts, &args.out.join("trend.png"))?;
        }
    }

    if let Some(column) = args.hover {
        let Some(p) = chart.plot().points.get(column).copied() else {
            anyhow::bail!("hover column {column} out of range (0..{})", chart.plot().len());
        };
        chart.handle_pointer(PointerEvent::MouseMove(Point::new(p.x, p.y)));
        write(&chart, &opts, &args.out.join(format!("trend_hover_{column}.png")))?;
    }
    Ok(())
}

fn animate(chart: &mut TrendChart, values: &[i64], secs: f64, frame_every: u32, opts: &RenderOptions, out: &Path) -> Result<()> {
    let done = Rc::new(Cell::new(false));
    let flag = done.clone();
    chart.animate_trends(values, secs, move || flag.set(true))?;
    let total = chart.animation().map(|a| a.total_steps()).unwrap_or(0);
    log::info!("animating {total} ticks over {secs}s, frame every {frame_every} ticks");

    let mut tick = 0u32;
    loop {
        let outcome = chart.tick();
        tick += 1;
        if outcome == TickOutcome::Completed || tick % frame_every == 0 {
            write(chart, opts, &out.join(format!("trend_frame_{tick:04}.png")))?;
        }
        if outcome != TickOutcome::Running {
            log::debug!("animation ended at tick {tick} with {outcome:?}");
            break;
        }
    }
    anyhow::ensure!(done.get(), "animation stopped before completing");
    Ok(())
}

fn random_values(columns: usize, rows: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..columns).map(|_| rng.random_range(1..=rows as i64)).collect()
}

fn write(chart: &TrendChart, opts: &RenderOptions, path: &Path) -> Result<()> {
    chart.render_to_png(opts, path)?;
    log::debug!("rendered {}x{} frame", opts.width, opts.height);
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_stay_in_row_range() {
        let v = random_values(15, 10);
        assert_eq!(v.len(), 15);
        assert!(v.iter().all(|&x| (1..=10).contains(&x)));
    }

    #[test]
    fn parses_values_and_fractional_duration() {
        let args = Args::try_parse_from(["trend-demo", "--values", "1,2,3", "--animate", "0.7"]).expect("parse");
        assert_eq!(args.values, vec![1, 2, 3]);
        assert_eq!(args.animate, Some(0.7));
        assert_eq!(args.frame_every, 10);
    }
}
