use crate::{
    error::{SegueError, SegueResult},
    lerp::Lerp,
    transition::Transition,
};

/// Per-frame playback controller: a transition plus the signed direction
/// that scales `dt`.
///
/// `advance` reports whether the frame needs a redraw; by convention any
/// update while running counts as a change, since the value may have moved.
#[derive(Clone, Debug)]
pub struct Driver<T> {
    transition: Transition<T>,
    direction: f64,
}

impl<T> Driver<T>
where
    T: Lerp + Clone,
{
    pub fn new(transition: Transition<T>) -> Self {
        Self {
            transition,
            direction: 1.0,
        }
    }

    /// Plays forward from the current position.
    pub fn forward(&mut self) {
        self.direction = 1.0;
        self.transition.run();
    }

    /// Plays backward from the current position.
    pub fn backward(&mut self) {
        self.direction = -1.0;
        self.transition.run();
    }

    pub fn toggle(&mut self) {
        self.transition.toggle_running();
    }

    pub fn pause(&mut self) {
        self.transition.pause();
    }

    /// Feeds one frame's `dt`, scaled by the playback direction. Returns
    /// true when the consumer should redraw.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !self.transition.is_running() {
            return false;
        }
        self.transition.update(self.direction * dt);
        true
    }

    pub fn value(&self) -> &T {
        self.transition.current()
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn transition(&self) -> &Transition<T> {
        &self.transition
    }

    pub fn into_transition(self) -> Transition<T> {
        self.transition
    }
}

/// Collects a polyline of a playing transition's values at a fixed
/// resolution, one sample per elapsed interval of `duration / resolution`.
/// Feeds path-tracing consumers that draw the curve travelled so far.
#[derive(Clone, Debug)]
pub struct Tracer<T> {
    points: Vec<T>,
    max_points: usize,
    stopwatch: f64,
    interval: f64,
}

impl<T> Tracer<T>
where
    T: Clone,
{
    /// `resolution` is the number of line segments; the trace holds at most
    /// `resolution + 1` points. Seeds the polyline with the transition's
    /// current value.
    pub fn new(transition: &Transition<T>, resolution: usize) -> SegueResult<Self>
    where
        T: Lerp,
    {
        if resolution == 0 {
            return Err(SegueError::config("tracer resolution must be >= 1"));
        }
        Ok(Self {
            points: vec![transition.current().clone()],
            max_points: resolution + 1,
            stopwatch: 0.0,
            interval: transition.duration_secs() / resolution as f64,
        })
    }

    /// Accumulates `dt` and samples the transition's current value each time
    /// the stopwatch crosses the sampling interval. Returns true when a new
    /// point was recorded.
    pub fn advance(&mut self, transition: &Transition<T>, dt: f64) -> bool
    where
        T: Lerp,
    {
        if !transition.is_running() || self.points.len() >= self.max_points {
            return false;
        }
        self.stopwatch += dt;
        if self.stopwatch >= self.interval {
            self.points.push(transition.current().clone());
            self.stopwatch = 0.0;
            return true;
        }
        false
    }

    pub fn points(&self) -> &[T] {
        &self.points
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() >= self.max_points
    }
}
