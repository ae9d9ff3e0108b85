use crate::{
    ease::{Ease, EaseFn},
    error::{SegueError, SegueResult},
    lerp::Lerp,
    path::{Path, PathFn},
};

/// The two strategy contracts a transition can carry: an easing curve that
/// yields a proportion (composed into a value by lerping the endpoints), or a
/// path that yields the value directly.
#[derive(Clone, Debug)]
pub enum Strategy<T> {
    Ease(Ease),
    Path(Path<T>),
}

impl<T> Strategy<T>
where
    T: Lerp + Clone,
{
    fn evaluate(&self, start: &T, end: &T, t: f64) -> T {
        match self {
            Self::Ease(ease) => T::lerp(start, end, ease.apply(t)),
            Self::Path(path) => path.evaluate(start, end, t),
        }
    }
}

/// Advances a value from `start` to `end` over a fixed duration.
///
/// The transition is a tiny state machine: it starts stopped, `run`/`pause`
/// control whether `update` has any effect, and the accumulated fraction is
/// never reset by pausing, so resuming continues from where playback left
/// off. Feeding a negative `dt` plays backwards; a cyclical transition wraps
/// past the end instead of holding there.
///
/// `current` always caches the last computed value; reads are free.
#[derive(Clone, Debug)]
pub struct Transition<T> {
    start: T,
    end: T,
    duration: f64, // seconds, > 0
    fraction: f64, // elapsed / duration; unclamped accumulator
    running: bool,
    cyclical: bool,
    current: T,
    strategy: Strategy<T>,
}

impl<T> Transition<T>
where
    T: Lerp + Clone,
{
    pub fn new(start: T, end: T, duration_secs: f64, strategy: Strategy<T>) -> SegueResult<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(SegueError::config(format!(
                "transition duration must be finite and > 0, got {duration_secs}"
            )));
        }
        Ok(Self {
            current: start.clone(),
            start,
            end,
            duration: duration_secs,
            fraction: 0.0,
            running: false,
            cyclical: false,
            strategy,
        })
    }

    pub fn linear(start: T, end: T, duration_secs: f64) -> SegueResult<Self> {
        Self::new(start, end, duration_secs, Strategy::Ease(Ease::Linear))
    }

    pub fn quadratic(start: T, end: T, duration_secs: f64) -> SegueResult<Self> {
        Self::new(start, end, duration_secs, Strategy::Ease(Ease::Quadratic))
    }

    pub fn step(start: T, end: T, duration_secs: f64, steps: u32) -> SegueResult<Self> {
        if steps == 0 {
            return Err(SegueError::config("step count must be >= 1"));
        }
        Self::new(start, end, duration_secs, Strategy::Ease(Ease::Step(steps)))
    }

    pub fn custom(start: T, end: T, duration_secs: f64, f: EaseFn) -> SegueResult<Self> {
        Self::new(start, end, duration_secs, Strategy::Ease(Ease::Custom(f)))
    }

    pub fn cubic_bezier(
        start: T,
        end: T,
        duration_secs: f64,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
    ) -> SegueResult<Self> {
        Self::new(
            start,
            end,
            duration_secs,
            Strategy::Ease(Ease::CubicBezier { x1, y1, x2, y2 }),
        )
    }

    /// Bezier easing with the stock ease control points.
    pub fn ease(start: T, end: T, duration_secs: f64) -> SegueResult<Self> {
        Self::new(start, end, duration_secs, Strategy::Ease(Ease::standard()))
    }

    /// Value-space Bezier: the motion bows through `p1` and `p2` on its way
    /// from `start` to `end`.
    pub fn bezier_path(start: T, p1: T, p2: T, end: T, duration_secs: f64) -> SegueResult<Self> {
        Self::new(
            start,
            end,
            duration_secs,
            Strategy::Path(Path::CubicBezier { p1, p2 }),
        )
    }

    /// Plays the parametric curve `f` over the sampling interval `[t0, t1]`.
    /// The endpoints are derived from the curve itself.
    pub fn parametrized(f: PathFn<T>, t0: f64, t1: f64, duration_secs: f64) -> SegueResult<Self> {
        let start = f(t0);
        let end = f(t1);
        Self::new(
            start,
            end,
            duration_secs,
            Strategy::Path(Path::Parametrized { f, t0, t1 }),
        )
    }

    /// Advances the internal clock by `dt` seconds (negative plays backwards)
    /// and recomputes the cached value. No-op while paused.
    ///
    /// Crossing the lower boundary clamps to `start`; crossing the upper
    /// boundary holds at `end`, or wraps back into `[0, 1)` when cyclical.
    /// The wrap drops every whole cycle at once, so a `dt` spanning several
    /// full cycles still lands at the correct phase.
    pub fn update(&mut self, dt: f64) {
        if !self.running {
            return;
        }
        self.fraction += dt / self.duration;

        if self.fraction <= 0.0 {
            self.current = self.start.clone();
        } else if self.fraction >= 1.0 {
            self.current = self.end.clone();
            if self.cyclical {
                self.fraction -= self.fraction.floor();
                self.current = if self.fraction <= 0.0 {
                    self.start.clone()
                } else {
                    self.strategy.evaluate(&self.start, &self.end, self.fraction)
                };
            }
        } else {
            self.current = self.strategy.evaluate(&self.start, &self.end, self.fraction);
        }
    }

    pub fn run(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn set_cyclical(&mut self, cyclical: bool) {
        self.cyclical = cyclical;
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn end(&self) -> &T {
        &self.end
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_cyclical(&self) -> bool {
        self.cyclical
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration
    }

    /// The transition's internal clock: elapsed time over duration. Exposed
    /// so callers can observe playback position; not clamped.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}
