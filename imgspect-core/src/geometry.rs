use crate::types::Size;

/// Layout derived from the image size, zoom factor and viewport size.
/// Recomputed on demand; nothing here is stored between events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    pub original: Size,
    pub draw: Size,
    pub viewport: Size,
    pub navigator: Size,
    /// Size of the drag handle on the navigator.
    pub handle: Size,
}

impl ViewportGeometry {
    pub fn compute(original: Size, zoom: f64, viewport: Size, navigator: Size) -> Self {
        let draw = original.scaled(zoom);
        // Fraction of the draw surface visible through the viewport, per axis
        let w_ratio = visible_ratio(viewport.width, draw.width);
        let h_ratio = visible_ratio(viewport.height, draw.height);
        Self {
            original,
            draw,
            viewport,
            navigator,
            handle: Size::new(navigator.width * w_ratio, navigator.height * h_ratio),
        }
    }
}

fn visible_ratio(view: f64, draw: f64) -> f64 {
    if draw <= 0.0 {
        return 1.0;
    }
    (view / draw).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_surface_scales_with_zoom() {
        let g = ViewportGeometry::compute(
            Size::new(400.0, 300.0),
            1.5,
            Size::new(200.0, 150.0),
            Size::new(400.0, 300.0),
        );
        assert_eq!(g.draw, Size::new(600.0, 450.0));
        // 200/600 and 150/450 of the navigator
        assert!((g.handle.width - 400.0 / 3.0).abs() < 1e-9);
        assert!((g.handle.height - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_handle_capped_at_navigator() {
        // Viewport bigger than the draw surface on one axis
        let g = ViewportGeometry::compute(
            Size::new(100.0, 400.0),
            1.0,
            Size::new(300.0, 200.0),
            Size::new(100.0, 400.0),
        );
        assert_eq!(g.handle.width, 100.0);
        assert_eq!(g.handle.height, 200.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let args = (Size::new(320.0, 240.0), 2.0, Size::new(300.0, 200.0), Size::new(320.0, 240.0));
        let a = ViewportGeometry::compute(args.0, args.1, args.2, args.3);
        let b = ViewportGeometry::compute(args.0, args.1, args.2, args.3);
        assert_eq!(a, b);
    }
}
