//! Rectangle geometry for the pan-and-zoom engine.
//!
//! All geometry is `kurbo`; this module only adds the handful of helpers the
//! engine needs on top of [`Rect`]. `Rect::ZERO` doubles as the "bounds not
//! yet known" sentinel, which [`RectExt::is_degenerate`] covers.

pub use kurbo::{Affine, Point, Rect, Vec2};

pub trait RectExt {
    /// Return `true` when the rect has no usable area (width or height <= 0).
    fn is_degenerate(&self) -> bool;

    /// Return `true` when `other` lies entirely inside `self` (edges may touch).
    fn encloses(&self, other: &Rect) -> bool;

    /// Width over height.
    fn aspect(&self) -> f64;
}

impl RectExt for Rect {
    fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    fn encloses(&self, other: &Rect) -> bool {
        self.x0 <= other.x0 && other.x1 <= self.x1 && self.y0 <= other.y0 && other.y1 <= self.y1
    }

    fn aspect(&self) -> f64 {
        self.width() / self.height()
    }
}

/// Linear interpolation between two scalars at parameter `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Edgewise linear interpolation between two rects at parameter `t`.
pub fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::new(
        lerp(a.x0, b.x0, t),
        lerp(a.y0, b.y0, t),
        lerp(a.x1, b.x1, t),
        lerp(a.y1, b.y1, t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rect_is_degenerate() {
        assert!(Rect::ZERO.is_degenerate());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn encloses_allows_touching_edges() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(outer.encloses(&outer));
        assert!(outer.encloses(&Rect::new(10.0, 5.0, 90.0, 45.0)));
        assert!(outer.encloses(&Rect::new(0.0, 0.0, 100.0, 25.0)));
        assert!(!outer.encloses(&Rect::new(-1.0, 0.0, 50.0, 25.0)));
        assert!(!outer.encloses(&Rect::new(50.0, 25.0, 101.0, 50.0)));
    }

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(Rect::new(0.0, 0.0, 400.0, 300.0).aspect(), 4.0 / 3.0);
    }

    #[test]
    fn lerp_rect_endpoints_and_midpoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 40.0, 30.0, 50.0);
        assert_eq!(lerp_rect(a, b, 0.0), a);
        assert_eq!(lerp_rect(a, b, 1.0), b);
        assert_eq!(lerp_rect(a, b, 0.5), Rect::new(10.0, 20.0, 20.0, 30.0));
    }
}
