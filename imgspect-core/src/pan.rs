use crate::types::{PanOffset, Point, Size};

/// Turns drag-handle movement on the navigator into a pan offset for the
/// draw surface.
///
/// The navigator shows the image at original size, so one navigator pixel is
/// `zoom` draw-surface pixels. The sign is inverted: moving the handle right
/// moves the surface left, bringing the right-hand part of the image into
/// view.
#[derive(Clone, Debug, Default)]
pub struct PanController {
    /// Handle position relative to the navigator origin, navigator pixels.
    handle_offset: Point,
    offset: PanOffset,
}

impl PanController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle moved to `handle_position`. Both positions are in the same
    /// screen space; the host has already clamped the handle to the
    /// navigator.
    pub fn on_drag_move(&mut self, handle_position: Point, navigator_origin: Point, zoom: f64) -> PanOffset {
        let d = navigator_origin.relative_to(handle_position);
        self.handle_offset = handle_position.relative_to(navigator_origin);
        self.offset = PanOffset {
            left: d.x * zoom,
            top: d.y * zoom,
        };
        self.offset
    }

    /// Recompute the pan for a new zoom factor, keeping the handle where it
    /// is unless the (now smaller or larger) handle would stick out of the
    /// navigator, in which case it is pulled back in.
    pub fn rezoom(&mut self, zoom: f64, navigator: Size, handle: Size) -> PanOffset {
        self.handle_offset = clamp_handle(self.handle_offset, navigator, handle);
        self.offset = PanOffset {
            left: -self.handle_offset.x * zoom,
            top: -self.handle_offset.y * zoom,
        };
        self.offset
    }

    pub fn offset(&self) -> PanOffset {
        self.offset
    }

    pub fn handle_offset(&self) -> Point {
        self.handle_offset
    }
}

/// Keep a handle of size `handle` fully inside a navigator of size
/// `navigator`. `offset` is the handle's top-left relative to the navigator.
pub fn clamp_handle(offset: Point, navigator: Size, handle: Size) -> Point {
    let max_x = (navigator.width - handle.width).max(0.0);
    let max_y = (navigator.height - handle.height).max(0.0);
    Point::new(offset.x.clamp(0.0, max_x), offset.y.clamp(0.0, max_y))
}
