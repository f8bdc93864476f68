//! Conversions between original-image space, the zoomed draw surface and the
//! viewport the draw surface is seen through.
//!
//! Original and draw space differ only by the zoom factor. The viewport shows
//! the draw surface shifted by the current pan offset.

use crate::error::{ImgspectError, Result};
use crate::types::{Point, Rect, Region};

pub fn to_draw_space(point: Point, zoom: f64) -> Point {
    Point::new(point.x * zoom, point.y * zoom)
}

pub fn to_original_space(point: Point, zoom: f64) -> Result<Point> {
    if zoom == 0.0 {
        return Err(ImgspectError::DivideByZero { zoom });
    }
    Ok(Point::new(point.x / zoom, point.y / zoom))
}

/// Where a stored region lands on the draw surface at `zoom`.
pub fn project_region(region: &Region, zoom: f64) -> Rect {
    let top_left = to_draw_space(Point::new(region.x1, region.y1), zoom);
    let bottom_right = to_draw_space(Point::new(region.x2, region.y2), zoom);
    Rect::new(
        top_left.x,
        top_left.y,
        bottom_right.x - top_left.x,
        bottom_right.y - top_left.y,
    )
}

/// Inverse of [`project_region`]. The caller is responsible for rejecting
/// degenerate rects; this only does the math.
pub fn unproject_rect(rect: &Rect, zoom: f64) -> Result<Region> {
    let top_left = to_original_space(rect.top_left(), zoom)?;
    let bottom_right = to_original_space(rect.bottom_right(), zoom)?;
    Ok(Region {
        x1: top_left.x,
        y1: top_left.y,
        x2: bottom_right.x,
        y2: bottom_right.y,
    })
}

/// Raw pointer position → position inside the viewport.
pub fn viewport_to_draw_offset(pointer: Point, viewport_origin: Point) -> Point {
    pointer.relative_to(viewport_origin)
}

/// Viewport-relative position → draw-surface position, given that the draw
/// surface sits at `pan` inside the viewport.
pub fn viewport_to_draw_space(viewport_point: Point, pan: Point) -> Point {
    viewport_point.relative_to(pan)
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
