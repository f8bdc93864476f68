use crate::types::{PanOffset, Point, Rect, Region};

/// What changed in an [`Imgspect`](crate::Imgspect) instance. Renderers
/// subscribe to these instead of reaching into the model.
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// Zoom factor moved. Draw surface, drag handle and every projected
    /// region need re-laying out.
    Zoomed { factor: f64 },
    /// New pan offset, with the drag-handle position on the navigator that
    /// produced it.
    Panned { offset: PanOffset, handle: Point },
    /// Viewport was measured or resized by the host.
    ViewportResized,
    /// The in-progress region, in draw-surface pixels. `None` once the
    /// gesture ends.
    Draft(Option<Rect>),
    RegionCommitted { index: usize, region: Region },
}

pub type Observer = Box<dyn FnMut(&Change)>;
