use std::sync::Arc;

/// Stored easing callable. An `Arc` closure rather than a bare `fn` so user
/// curves may capture state, while staying cheap to clone.
pub type EaseFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Proportion strategy: maps a normalized time fraction to a normalized
/// progress fraction. The transition core turns the proportion into a value
/// with a single lerp between its endpoints.
#[derive(Clone)]
pub enum Ease {
    Linear,
    /// `t²` — slow start, fast finish.
    Quadratic,
    /// `floor(t·n)/n` — exactly `n` plateaus over the domain. A count of 0 is
    /// rejected by the validated constructors; `apply` still guards the
    /// division so a hand-built `Step(0)` cannot divide by zero.
    Step(u32),
    Custom(EaseFn),
    /// Cubic Bezier through `(0,0), (x1,y1), (x2,y2), (1,1)`, evaluated at
    /// parameter `t` directly. CSS-style easing would solve `x(u) = t` for
    /// `u` and return `y(u)`; this is an intentional approximation of that.
    /// Can overshoot `[0,1]` when the control-point y values do.
    CubicBezier {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

impl Ease {
    /// The stock ease curve: control points `(0.25, 0.1)` and `(0.25, 1.0)`.
    pub fn standard() -> Self {
        Self::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        }
    }

    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Quadratic => t * t,
            Self::Step(n) => {
                let n = f64::from((*n).max(1));
                (t * n).floor() / n
            }
            Self::Custom(f) => f(t),
            Self::CubicBezier { y1, y2, .. } => {
                // y-coordinate of the curve at parameter t; the endpoints
                // (0,0) and (1,1) contribute the 0 and t³ terms.
                let u = 1.0 - t;
                3.0 * u * u * t * y1 + 3.0 * u * t * t * y2 + t * t * t
            }
        }
    }
}

impl std::fmt::Debug for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::Quadratic => f.write_str("Quadratic"),
            Self::Step(n) => f.debug_tuple("Step").field(n).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::CubicBezier { x1, y1, x2, y2 } => f
                .debug_struct("CubicBezier")
                .field("x1", x1)
                .field("y1", y1)
                .field("x2", x2)
                .field("y2", y2)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::Quadratic, Ease::standard()] {
            assert!((ease.apply(0.0)).abs() < 1e-12);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn quadratic_is_t_squared() {
        assert_eq!(Ease::Quadratic.apply(0.5), 0.25);
        assert!((Ease::Quadratic.apply(0.9) - 0.81).abs() < 1e-12);
    }

    #[test]
    fn step_produces_n_plateaus() {
        let ease = Ease::Step(4);
        let m = 40;
        let mut seen = std::collections::BTreeSet::new();
        for i in 0..m {
            let t = i as f64 / m as f64;
            let p = ease.apply(t);
            // every plateau is a multiple of 1/4
            assert_eq!(p, (p * 4.0).round() / 4.0);
            seen.insert((p * 4.0).round() as i64);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn step_zero_does_not_divide_by_zero() {
        let p = Ease::Step(0).apply(0.5);
        assert!(p.is_finite());
        assert_eq!(p, 0.0);
    }

    #[test]
    fn custom_closure_is_applied() {
        let ease = Ease::Custom(Arc::new(|t| 1.0 - t));
        assert_eq!(ease.apply(0.25), 0.75);
    }

    #[test]
    fn input_is_clamped_to_unit_interval() {
        assert_eq!(Ease::Linear.apply(-3.0), 0.0);
        assert_eq!(Ease::Linear.apply(7.0), 1.0);
    }

    #[test]
    fn bezier_at_parameter_matches_polynomial() {
        let ease = Ease::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        };
        let t: f64 = 0.4;
        let u = 1.0 - t;
        let expected = 3.0 * u * u * t * 0.1 + 3.0 * u * t * t * 1.0 + t * t * t;
        assert!((ease.apply(t) - expected).abs() < 1e-12);
    }
}
