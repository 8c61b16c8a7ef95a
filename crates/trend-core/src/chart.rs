// File: crates/trend-core/src/chart.rs
// Summary: TrendChart composition root: owns config, grid, scene, current trend, tooltip and animation.

use std::time::Duration;

use crate::animate::{AnimatedTrendRenderer, TickOutcome};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::geometry::Point;
use crate::grid::GridPoints;
use crate::scene::{LabelId, LayerId, Scene};
use crate::table;
use crate::theme::{self, Theme};
use crate::tooltip::{PointerEvent, TooltipController};
use crate::trend::{TrendPlot, TrendRenderer};

pub struct TrendChart {
    config: ChartConfig,
    theme: Theme,
    grid: GridPoints,
    scene: Scene,
    trends: LayerId,
    markers: LayerId,
    highlight: LayerId,
    tooltip_label: LabelId,
    titles: Vec<LabelId>,
    plot: TrendPlot,
    tooltip: TooltipController,
    animation: Option<AnimatedTrendRenderer>,
}

impl TrendChart {
    /// Validate `config`, lay out the grid and build the table, titles and empty trend layers.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        let theme = theme::find(&config.theme);
        let grid = GridPoints::compute(config.rect, config.row_count, config.column_count)?;

        let mut scene = Scene::new();
        let table_layer = scene.create_layer("table");
        table::draw_rows(&grid, scene.layer_mut(table_layer), &theme);
        let trends = scene.create_layer("trends");
        let markers = scene.create_layer("markers");
        let highlight = scene.create_layer("highlight");
        scene.layer_mut(trends).stroke_color = theme.trend_line;
        scene.layer_mut(trends).line_width = 1.0;
        scene.layer_mut(markers).fill_color = theme.marker;
        scene.layer_mut(highlight).fill_color = theme.highlight;

        let titles = table::add_titles(&grid, &mut scene, &config, &theme);
        let tooltip_label = scene.create_label("tooltip", "0", Point::ZERO, config.tooltip_font_size, theme.tooltip);
        scene.label_mut(tooltip_label).visible = false;

        let tooltip = TooltipController::new(&grid);
        Ok(Self {
            config,
            theme,
            grid,
            scene,
            trends,
            markers,
            highlight,
            tooltip_label,
            titles,
            plot: TrendPlot::default(),
            tooltip,
            animation: None,
        })
    }

    /// Replace the current trend and draw it in one pass.
    pub fn draw_trends(&mut self, values: &[i64]) -> Result<&TrendPlot> {
        let plot = TrendPlot::resolve(&self.grid, values)?;
        self.reset_trend();
        let (lines, markers) = self.scene.layer_pair_mut(self.trends, self.markers);
        TrendRenderer::draw(&plot, lines, markers);
        self.plot = plot;
        Ok(&self.plot)
    }

    /// Replace the current trend and draw it progressively over `duration_seconds`
    /// as [`TrendChart::update`] is fed time. `on_complete` runs once, at the end of the final tick.
    pub fn animate_trends(&mut self, values: &[i64], duration_seconds: f64, on_complete: impl FnOnce() + 'static) -> Result<()> {
        let anim = AnimatedTrendRenderer::animate(&self.grid, values, duration_seconds, on_complete)?;
        self.reset_trend();
        self.plot = anim.plot().clone();
        self.animation = Some(anim);
        Ok(())
    }

    /// Drive a running animation with elapsed host time.
    pub fn update(&mut self, elapsed: Duration) -> TickOutcome {
        let Some(anim) = self.animation.as_mut() else { return TickOutcome::Idle; };
        let (lines, markers) = self.scene.layer_pair_mut(self.trends, self.markers);
        let outcome = anim.advance(elapsed, lines, markers);
        if outcome == TickOutcome::Completed {
            self.animation = None;
        }
        outcome
    }

    /// Run one animation tick regardless of elapsed time.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(anim) = self.animation.as_mut() else { return TickOutcome::Idle; };
        let (lines, markers) = self.scene.layer_pair_mut(self.trends, self.markers);
        let outcome = anim.tick(lines, markers);
        if outcome == TickOutcome::Completed {
            self.animation = None;
        }
        outcome
    }

    /// Cancel a running animation without invoking its completion callback.
    pub fn stop_animation(&mut self) {
        if let Some(mut anim) = self.animation.take() {
            anim.cancel();
        }
    }

    /// Route a pointer event to the tooltip. Returns true when the tooltip changed.
    /// While animating, only points whose marker is already drawn can be hovered.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let revealed = self.animation.as_ref().map_or(self.plot.len(), |a| a.state().revealed_points());
        let (highlight, label) = self.scene.layer_and_label_mut(self.highlight, self.tooltip_label);
        self.tooltip.handle_revealed(event, &self.plot, revealed, label, highlight)
    }

    pub fn hide_tooltip(&mut self) -> bool {
        let (highlight, label) = self.scene.layer_and_label_mut(self.highlight, self.tooltip_label);
        self.tooltip.hide(label, highlight)
    }

    fn reset_trend(&mut self) {
        self.stop_animation();
        self.hide_tooltip();
        self.scene.layer_mut(self.trends).clear();
        self.scene.layer_mut(self.markers).clear();
        self.plot = TrendPlot::default();
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn grid(&self) -> &GridPoints { &self.grid }
    pub fn plot(&self) -> &TrendPlot { &self.plot }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn tooltip(&self) -> &TooltipController { &self.tooltip }
    pub fn animation(&self) -> Option<&AnimatedTrendRenderer> { self.animation.as_ref() }
    pub fn is_animating(&self) -> bool { self.animation.is_some() }
    pub fn trends_layer(&self) -> LayerId { self.trends }
    pub fn markers_layer(&self) -> LayerId { self.markers }
    pub fn highlight_layer(&self) -> LayerId { self.highlight }
    pub fn tooltip_label(&self) -> LabelId { self.tooltip_label }
    pub fn title_labels(&self) -> &[LabelId] { &self.titles }
}
