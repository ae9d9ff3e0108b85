use crate::core::Vec3;

/// Linear blend between two values. Everything a [`crate::Transition`] can
/// animate goes through this trait; Bezier paths are built from repeated
/// lerps, so implementing it is the only requirement on a value type.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for kurbo::Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        kurbo::Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for kurbo::Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        kurbo::Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Vec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec3::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_endpoints_and_midpoint() {
        assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.0), 2.0);
        assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.5), 4.0);
        assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 1.0), 6.0);
    }

    #[test]
    fn f32_blends_in_f64() {
        let v = <f32 as Lerp>::lerp(&0.0f32, &1.0f32, 0.25);
        assert!((v - 0.25).abs() < 1e-6);
    }

    #[test]
    fn vec3_blends_componentwise() {
        let a = Vec3::new(0.0, 10.0, -2.0);
        let b = Vec3::new(4.0, 20.0, 2.0);
        assert_eq!(Vec3::lerp(&a, &b, 0.5), Vec3::new(2.0, 15.0, 0.0));
    }

    #[test]
    fn point_blends_componentwise() {
        let a = kurbo::Point::new(0.0, 0.0);
        let b = kurbo::Point::new(8.0, 4.0);
        assert_eq!(
            <kurbo::Point as Lerp>::lerp(&a, &b, 0.25),
            kurbo::Point::new(2.0, 1.0)
        );
    }
}
