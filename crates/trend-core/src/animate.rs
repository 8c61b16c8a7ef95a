// File: crates/trend-core/src/animate.rs
// Summary: Animated trend drawing as a pure per-tick step over explicit state, driven by a repeating timer.
// Notes:
// - Stepping assumes a fixed 60 Hz host clock; a host running slower stretches the animation
//   instead of dropping steps, since progress is counted in ticks rather than elapsed time.
// - A zero sentinel point follows the last trend point. The final tick lands on the last
//   real point with `step_within_segment == 0`, so the sentinel is never interpolated towards.

use std::fmt;
use std::time::Duration;

use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::grid::GridPoints;
use crate::scene::Layer;
use crate::scheduler::RepeatTimer;
use crate::trend::{Segment, TrendPlot};
use crate::types::{MARKER_RADIUS, TICKS_PER_SECOND};

/// Progress of one animation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub point_index: usize,
    pub step_within_segment: u32,
    pub steps_per_segment: u32,
    pub ticks: u32,
    pub total_steps: u32,
    /// Last position the line was drawn to.
    pub last: Point,
}

impl AnimationState {
    /// Initial state for animating `points` over `duration_seconds`.
    pub fn new(points: &[Point], duration_seconds: f64) -> Result<Self> {
        let columns = points.len();
        if columns < 2 { return Err(ChartError::ColumnCountTooSmall(columns)); }
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(ChartError::InvalidDuration(duration_seconds));
        }
        let steps_per_segment = steps_per_segment(duration_seconds, columns);
        let total_steps = total_steps(steps_per_segment, columns)
            .ok_or(ChartError::InvalidDuration(duration_seconds))?;
        Ok(Self {
            point_index: 0,
            step_within_segment: 0,
            steps_per_segment,
            ticks: 0,
            total_steps,
            last: points[0],
        })
    }

    pub fn is_finished(&self) -> bool {
        self.ticks >= self.total_steps
    }

    /// Number of leading trend points whose marker has been drawn.
    pub fn revealed_points(&self) -> usize {
        self.point_index + usize::from(self.step_within_segment > 0)
    }
}

/// `floor(duration * 60 / (columns - 1))`, at least 1 so every segment gets a tick.
/// Saturates at `u32::MAX`.
pub fn steps_per_segment(duration_seconds: f64, columns: usize) -> u32 {
    let raw = (duration_seconds * TICKS_PER_SECOND as f64 / (columns - 1) as f64).floor();
    (raw as u32).max(1)
}

/// Ticks needed to draw every segment and land on the last point, or `None` past `u32::MAX`.
pub fn total_steps(steps_per_segment: u32, columns: usize) -> Option<u32> {
    let columns = u32::try_from(columns).ok()?;
    (steps_per_segment - 1)
        .checked_mul(columns - 1)?
        .checked_add(columns)
}

/// Draw calls produced by one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    /// Start marker of the segment, on the segment's first step.
    pub marker: Option<Point>,
    /// Line from the previously drawn position to the new one.
    pub line: Option<Segment>,
    /// Set on the final tick.
    pub completed: bool,
}

/// Advance the animation by one tick. `path` is the trend points followed by the sentinel.
///
/// A finished state is returned unchanged with an empty frame.
pub fn step(state: AnimationState, path: &[Point]) -> (AnimationState, Frame) {
    if state.is_finished() {
        return (state, Frame::default());
    }
    let mut next = state;
    let from = path.get(state.point_index).copied().unwrap_or(Point::ZERO);
    let to = path.get(state.point_index + 1).copied().unwrap_or(Point::ZERO);
    let t = state.step_within_segment as f32 / state.steps_per_segment as f32;
    let pos = from.lerp(to, t);

    let mut frame = Frame::default();
    if state.ticks > 0 {
        frame.line = Some(Segment { from: state.last, to: pos });
    }
    if state.step_within_segment == 0 {
        frame.marker = Some(from);
    }

    next.last = pos;
    next.ticks += 1;
    next.step_within_segment += 1;
    if next.step_within_segment >= next.steps_per_segment {
        next.step_within_segment = 0;
        next.point_index += 1;
    }
    frame.completed = next.is_finished();
    (next, frame)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one tick ran and more remain.
    Running,
    /// The final tick ran during this call; the completion callback has been invoked.
    Completed,
    /// Nothing ran: finished, cancelled, or no tick was due.
    Idle,
}

/// Animated variant of the trend renderer.
pub struct AnimatedTrendRenderer {
    plot: TrendPlot,
    path: Vec<Point>,
    state: AnimationState,
    timer: RepeatTimer,
    on_complete: Option<Box<dyn FnOnce()>>,
    cancelled: bool,
}

impl fmt::Debug for AnimatedTrendRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedTrendRenderer")
            .field("state", &self.state)
            .field("cancelled", &self.cancelled)
            .finish_non_exhaustive()
    }
}

impl AnimatedTrendRenderer {
    /// Resolve `values` against `grid` and prepare an animation lasting `duration_seconds`.
    /// All validation happens here; ticking never fails.
    pub fn animate(
        grid: &GridPoints,
        values: &[i64],
        duration_seconds: f64,
        on_complete: impl FnOnce() + 'static,
    ) -> Result<Self> {
        let plot = TrendPlot::resolve(grid, values)?;
        Self::from_plot(plot, duration_seconds, on_complete)
    }

    pub fn from_plot(plot: TrendPlot, duration_seconds: f64, on_complete: impl FnOnce() + 'static) -> Result<Self> {
        let state = AnimationState::new(&plot.points, duration_seconds)?;
        let mut path = plot.points.clone();
        path.push(Point::ZERO);
        log::debug!(
            "animate: {} points, {} steps/segment, {} total steps",
            plot.len(),
            state.steps_per_segment,
            state.total_steps
        );
        Ok(Self {
            timer: RepeatTimer::at_rate(TICKS_PER_SECOND, state.total_steps),
            plot,
            path,
            state,
            on_complete: Some(Box::new(on_complete)),
            cancelled: false,
        })
    }

    pub fn plot(&self) -> &TrendPlot { &self.plot }
    pub fn state(&self) -> &AnimationState { &self.state }
    pub fn total_steps(&self) -> u32 { self.state.total_steps }
    pub fn is_finished(&self) -> bool { self.state.is_finished() }
    pub fn is_cancelled(&self) -> bool { self.cancelled }

    /// Run exactly one tick, issuing its draw calls.
    pub fn tick(&mut self, lines: &mut Layer, markers: &mut Layer) -> TickOutcome {
        if self.cancelled || self.state.is_finished() {
            return TickOutcome::Idle;
        }
        let (next, frame) = step(self.state, &self.path);
        self.state = next;
        if let Some(seg) = frame.line {
            lines.move_to(seg.from);
            lines.line_to(seg.to);
            lines.stroke();
        }
        if let Some(center) = frame.marker {
            markers.circle(center, MARKER_RADIUS);
            markers.fill();
        }
        if frame.completed {
            if let Some(done) = self.on_complete.take() {
                log::debug!("animate: completed after {} ticks", self.state.ticks);
                done();
            }
            return TickOutcome::Completed;
        }
        TickOutcome::Running
    }

    /// Feed elapsed host time to the timer and run every tick that became due.
    pub fn advance(&mut self, elapsed: Duration, lines: &mut Layer, markers: &mut Layer) -> TickOutcome {
        if self.cancelled { return TickOutcome::Idle; }
        let due = self.timer.advance(elapsed);
        let mut outcome = TickOutcome::Idle;
        for _ in 0..due {
            outcome = self.tick(lines, markers);
            if outcome == TickOutcome::Completed { break; }
        }
        outcome
    }

    /// Run all remaining ticks immediately.
    pub fn finish(&mut self, lines: &mut Layer, markers: &mut Layer) -> TickOutcome {
        let mut outcome = TickOutcome::Idle;
        while !self.cancelled && !self.state.is_finished() {
            outcome = self.tick(lines, markers);
        }
        outcome
    }

    /// Halt future ticks; the completion callback is dropped without being called.
    pub fn cancel(&mut self) {
        if self.cancelled { return; }
        self.cancelled = true;
        self.timer.cancel();
        self.on_complete = None;
        log::debug!("animate: cancelled at tick {}", self.state.ticks);
    }
}
