//! Crop-fit solver: maps the current interpolated crop onto the viewport.
//!
//! The formula is the visual contract of the classic pan-and-zoom widget and
//! must not drift: both scale factors take the *smaller* axis ratio so the
//! crop is fully contained, never overshooting either dimension.

use crate::geom::{Affine, Rect, Vec2};

/// Solved per-frame fit of a crop rect between image and viewport space.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct CropFit {
    /// Factor that would scale the crop up to fill the image bounds.
    pub scale_to_image: f64,
    /// Factor that would scale the crop to fill the viewport.
    pub scale_to_viewport: f64,
    /// Product of the two, applied uniformly.
    pub total_scale: f64,
    /// Post-scale shift aligning the crop with the viewport origin.
    pub translate: Vec2,
}

impl CropFit {
    /// Compose the frame transform, applied in order: center the image at the
    /// origin, scale uniformly, then shift into place.
    pub fn to_affine(&self, image: Rect) -> Affine {
        Affine::translate(self.translate)
            * Affine::scale(self.total_scale)
            * Affine::translate(Vec2::new(-image.width() / 2.0, -image.height() / 2.0))
    }
}

/// Solve the fit of `crop` between `image` and `viewport`.
///
/// The caller guarantees `crop` is non-degenerate (the animator only passes
/// rects interpolated from validated transitions).
pub fn fit_crop(image: Rect, viewport: Rect, crop: Rect) -> CropFit {
    let scale_to_image = (image.width() / crop.width()).min(image.height() / crop.height());
    let scale_to_viewport =
        (viewport.width() / crop.width()).min(viewport.height() / crop.height());
    let total_scale = scale_to_image * scale_to_viewport;

    let translate = Vec2::new(
        total_scale * (image.center().x - crop.x0),
        total_scale * (image.center().y - crop.y0),
    );

    CropFit {
        scale_to_image,
        scale_to_viewport,
        total_scale,
        translate,
    }
}

/// One-call wrapper: solve the fit and compose the frame transform.
pub fn compute_transform(image: Rect, viewport: Rect, crop: Rect) -> Affine {
    fit_crop(image, viewport, crop).to_affine(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-4;

    fn assert_close(actual: f64, expected: f64, what: &str) {
        assert!(
            (actual - expected).abs() < TOL,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn wide_image_square_viewport() {
        let image = Rect::new(0.0, 0.0, 1000.0, 500.0);
        let viewport = Rect::new(0.0, 0.0, 300.0, 300.0);
        let crop = Rect::new(0.0, 0.0, 500.0, 500.0);

        let fit = fit_crop(image, viewport, crop);
        assert_close(fit.scale_to_image, 1.0, "scale_to_image");
        assert_close(fit.scale_to_viewport, 0.6, "scale_to_viewport");
        assert_close(fit.total_scale, 0.6, "total_scale");
        assert_close(fit.translate.x, 300.0, "translate.x");
        assert_close(fit.translate.y, 150.0, "translate.y");
    }

    #[test]
    fn centered_crop_at_half_zoom() {
        let image = Rect::new(0.0, 0.0, 800.0, 600.0);
        let viewport = Rect::new(0.0, 0.0, 400.0, 300.0);
        let crop = Rect::new(100.0, 50.0, 500.0, 350.0);

        let fit = fit_crop(image, viewport, crop);
        assert_close(fit.scale_to_image, 2.0, "scale_to_image");
        assert_close(fit.scale_to_viewport, 1.0, "scale_to_viewport");
        assert_close(fit.total_scale, 2.0, "total_scale");
        assert_close(fit.translate.x, 600.0, "translate.x");
        assert_close(fit.translate.y, 500.0, "translate.y");
    }

    #[test]
    fn square_crop_in_landscape_image() {
        let image = Rect::new(0.0, 0.0, 640.0, 480.0);
        let viewport = Rect::new(0.0, 0.0, 320.0, 320.0);
        let crop = Rect::new(64.0, 48.0, 384.0, 368.0);

        let fit = fit_crop(image, viewport, crop);
        assert_close(fit.scale_to_image, 1.5, "scale_to_image");
        assert_close(fit.scale_to_viewport, 1.0, "scale_to_viewport");
        assert_close(fit.total_scale, 1.5, "total_scale");
        assert_close(fit.translate.x, 384.0, "translate.x");
        assert_close(fit.translate.y, 288.0, "translate.y");

        let coeffs = fit.to_affine(image).as_coeffs();
        assert_close(coeffs[0], 1.5, "affine a");
        assert_close(coeffs[1], 0.0, "affine b");
        assert_close(coeffs[2], 0.0, "affine c");
        assert_close(coeffs[3], 1.5, "affine d");
        assert_close(coeffs[4], -96.0, "affine e");
        assert_close(coeffs[5], -72.0, "affine f");
    }

    #[test]
    fn crop_top_left_maps_to_viewport_origin() {
        let image = Rect::new(0.0, 0.0, 1024.0, 768.0);
        let viewport = Rect::new(0.0, 0.0, 512.0, 384.0);
        for crop in [
            Rect::new(0.0, 0.0, 512.0, 384.0),
            Rect::new(256.0, 192.0, 768.0, 576.0),
            Rect::new(100.0, 300.0, 740.0, 700.0),
        ] {
            let transform = compute_transform(image, viewport, crop);
            let mapped = transform * kurbo::Point::new(crop.x0, crop.y0);
            assert_close(mapped.x, 0.0, "mapped origin x");
            assert_close(mapped.y, 0.0, "mapped origin y");
        }
    }
}
