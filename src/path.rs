use std::sync::Arc;

use crate::lerp::Lerp;

/// Stored parametric curve callable.
pub type PathFn<T> = Arc<dyn Fn(f64) -> T + Send + Sync>;

/// Value strategy: produces the interpolated value directly, bypassing the
/// proportional blend between endpoints. Used when the motion is a curve
/// rather than a straight line between `start` and `end`.
#[derive(Clone)]
pub enum Path<T> {
    /// Value-space cubic Bezier. The transition's `start` and `end` are the
    /// outer control points; `p1` and `p2` shape the curve between them.
    CubicBezier { p1: T, p2: T },
    /// Plays an arbitrary parametric curve `f` by remapping the normalized
    /// progress into the sampling interval `[t0, t1]`.
    Parametrized { f: PathFn<T>, t0: f64, t1: f64 },
}

impl<T> Path<T>
where
    T: Lerp + Clone,
{
    pub fn evaluate(&self, start: &T, end: &T, t: f64) -> T {
        match self {
            Self::CubicBezier { p1, p2 } => cubic_bezier(start, p1, p2, end, t),
            Self::Parametrized { f, t0, t1 } => f(t0 + t * (t1 - t0)),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CubicBezier { p1, p2 } => f
                .debug_struct("CubicBezier")
                .field("p1", p1)
                .field("p2", p2)
                .finish(),
            Self::Parametrized { t0, t1, .. } => f
                .debug_struct("Parametrized")
                .field("t0", t0)
                .field("t1", t1)
                .finish_non_exhaustive(),
        }
    }
}

/// De Casteljau evaluation. Repeated lerps instead of the Bernstein
/// polynomial so any `Lerp` value type works, without requiring scalar
/// multiplication on `T`.
pub fn cubic_bezier<T: Lerp>(p0: &T, p1: &T, p2: &T, p3: &T, t: f64) -> T {
    let a = T::lerp(p0, p1, t);
    let b = T::lerp(p1, p2, t);
    let c = T::lerp(p2, p3, t);
    let d = T::lerp(&a, &b, t);
    let e = T::lerp(&b, &c, t);
    T::lerp(&d, &e, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;

    #[test]
    fn bezier_hits_both_endpoints() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 2.0, 0.0);
        let p2 = Vec3::new(3.0, 2.0, 0.0);
        let p3 = Vec3::new(4.0, 0.0, 0.0);
        assert_eq!(cubic_bezier(&p0, &p1, &p2, &p3, 0.0), p0);
        assert_eq!(cubic_bezier(&p0, &p1, &p2, &p3, 1.0), p3);
    }

    #[test]
    fn de_casteljau_matches_bernstein_form() {
        let (p0, p1, p2, p3) = (0.0f64, 2.0, 8.0, 10.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let u = 1.0 - t;
            let expected =
                u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3;
            let got = cubic_bezier(&p0, &p1, &p2, &p3, t);
            assert!((got - expected).abs() < 1e-12, "t={t}: {got} vs {expected}");
        }
    }

    #[test]
    fn parametrized_remaps_into_sampling_interval() {
        let f: PathFn<f64> = Arc::new(|t| t * t);
        let path = Path::Parametrized { f, t0: 2.0, t1: 4.0 };
        // start/end are ignored by parametrized paths
        assert_eq!(path.evaluate(&0.0, &0.0, 0.0), 4.0);
        assert_eq!(path.evaluate(&0.0, &0.0, 0.5), 9.0);
        assert_eq!(path.evaluate(&0.0, &0.0, 1.0), 16.0);
    }
}
