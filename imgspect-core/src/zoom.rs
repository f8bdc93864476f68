use crate::config::DEFAULT_ZOOM_UNIT;

/// Smallest zoom factor: the draw surface never gets smaller than the image.
pub const MIN_ZOOM: f64 = 1.0;

/// Owns the zoom factor. Only moves in `zoom_unit` steps, and never below
/// [`MIN_ZOOM`]. No upper bound.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomController {
    factor: f64,
    unit: f64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_UNIT)
    }
}

impl ZoomController {
    pub fn new(unit: f64) -> Self {
        Self {
            factor: MIN_ZOOM,
            unit,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns true if the factor changed.
    pub fn zoom_in(&mut self) -> bool {
        let before = self.factor;
        self.factor += self.unit;
        self.factor != before
    }

    /// Returns true if the factor changed; false when already at the floor.
    pub fn zoom_out(&mut self) -> bool {
        let before = self.factor;
        self.factor = (self.factor - self.unit).max(MIN_ZOOM);
        self.factor != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::approx_eq;

    #[test]
    fn test_starts_at_one() {
        let zoom = ZoomController::default();
        assert_eq!(zoom.factor(), 1.0);
        assert_eq!(zoom.unit, DEFAULT_ZOOM_UNIT);
    }

    #[test]
    fn test_zoom_out_at_floor_is_noop() {
        let mut zoom = ZoomController::default();
        assert!(!zoom.zoom_out());
        assert_eq!(zoom.factor(), 1.0);
    }

    #[test]
    fn test_three_steps_in() {
        let mut zoom = ZoomController::new(0.1);
        for _ in 0..3 {
            assert!(zoom.zoom_in());
        }
        assert!(approx_eq(zoom.factor(), 1.3));
    }

    #[test]
    fn test_zoom_out_clamps_partial_step() {
        // 1.0 + 0.3 - 0.4 would undershoot; the floor catches it
        let mut zoom = ZoomController::new(0.3);
        zoom.zoom_in();
        zoom.unit = 0.4;
        assert!(zoom.zoom_out());
        assert_eq!(zoom.factor(), MIN_ZOOM);
    }

    #[test]
    fn test_never_below_floor() {
        let mut zoom = ZoomController::new(0.25);
        // Deterministic but irregular in/out pattern
        let pattern = [true, false, false, true, true, false, true, false, false, false, true];
        for _ in 0..20 {
            for &zoom_in in &pattern {
                if zoom_in {
                    zoom.zoom_in();
                } else {
                    zoom.zoom_out();
                }
                assert!(zoom.factor() >= MIN_ZOOM);
            }
        }
    }

    #[test]
    fn test_no_upper_bound() {
        let mut zoom = ZoomController::new(1.0);
        for _ in 0..1000 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.factor(), 1001.0);
    }
}
