use imgspect_core::{PanOffset, Point, Rect, Size};

pub const VIEW_STYLE: &str = "position: relative; float: left; overflow: hidden; width: 480px; \
    height: 360px; margin-left: 12px; background: #111; cursor: crosshair; touch-action: none;";
pub const NAV_STYLE: &str = "position: relative; float: left; line-height: 0; user-select: none;";
pub const HANDLE_STYLE: &str = "position: absolute; box-sizing: border-box; cursor: move; \
    border: 1px solid rgba(80, 180, 130, 0.9); background: rgba(80, 180, 130, 0.15); touch-action: none;";
pub const LITE_STYLE: &str = "position: absolute; box-sizing: border-box; pointer-events: none; \
    border: 1px solid rgba(255, 200, 50, 0.9); background: rgba(255, 200, 50, 0.3);";
pub const DRAFT_STYLE: &str = "position: absolute; box-sizing: border-box; pointer-events: none; \
    border: 1px dashed rgba(255, 200, 50, 0.9);";

/// Absolute-position style for a lite, draft or any other rect.
pub fn rect_style(rect: &Rect) -> String {
    format!(
        "left: {:.2}px; top: {:.2}px; width: {:.2}px; height: {:.2}px;",
        rect.left, rect.top, rect.width, rect.height
    )
}

/// The draw surface: the full image stretched to the zoomed size, placed at
/// the pan offset inside the viewport.
pub fn draw_surface_style(src: &str, draw: Size, pan: PanOffset) -> String {
    format!(
        "position: absolute; left: {:.2}px; top: {:.2}px; width: {:.2}px; height: {:.2}px; \
         background-image: {}; background-size: {:.2}px {:.2}px; background-repeat: no-repeat;",
        pan.left,
        pan.top,
        draw.width,
        draw.height,
        css_url(src),
        draw.width,
        draw.height,
    )
}

pub fn handle_style(offset: Point, size: Size) -> String {
    rect_style(&Rect::new(offset.x, offset.y, size.width, size.height))
}

pub fn size_style(size: Size) -> String {
    format!("width: {:.0}px; height: {:.0}px;", size.width, size.height)
}

/// `url("…")` with the characters that would end the string escaped.
pub fn css_url(src: &str) -> String {
    let escaped = src
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "");
    format!("url(\"{escaped}\")")
}

pub fn zoom_label(factor: f64) -> String {
    format!("{:.0}%", factor * 100.0)
}
