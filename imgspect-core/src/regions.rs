use crate::error::{ImgspectError, Result};
use crate::mapper;
use crate::types::{Point, Rect, Region};

/// A region still being dragged out, in draw-surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Draft {
    anchor: Point,
    current: Point,
}

impl Draft {
    fn rect(&self) -> Rect {
        Rect::from_corners(self.anchor, self.current)
    }
}

/// Append-only list of committed regions plus at most one draft.
#[derive(Clone, Debug, Default)]
pub struct RegionStore {
    regions: Vec<Region>,
    draft: Option<Draft>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft at `start` (draw space). Fails if a draft already
    /// exists; the existing draft is left untouched.
    pub fn begin_region(&mut self, start: Point) -> Result<()> {
        if self.draft.is_some() {
            return Err(ImgspectError::RegionInProgress);
        }
        self.draft = Some(Draft {
            anchor: start,
            current: start,
        });
        Ok(())
    }

    /// Stretch the draft to `current`. Returns the new draft rect, or `None`
    /// when nothing is being drawn.
    pub fn update_region(&mut self, current: Point) -> Option<Rect> {
        let draft = self.draft.as_mut()?;
        draft.current = current;
        Some(draft.rect())
    }

    /// Convert the draft to original space and append it.
    ///
    /// Returns `Ok(None)` when there is no draft, or when the draft has zero
    /// width or height. Degenerate drafts are dropped, not stored.
    pub fn commit_region(&mut self, zoom: f64) -> Result<Option<Region>> {
        let Some(draft) = self.draft else {
            return Ok(None);
        };
        let rect = draft.rect();
        if rect.is_degenerate() {
            self.draft = None;
            log::debug!("Discarded degenerate region at ({}, {})", rect.left, rect.top);
            return Ok(None);
        }
        // Leave the draft in place if the math fails so the caller can retry
        // or cancel.
        let region = mapper::unproject_rect(&rect, zoom)?;
        self.draft = None;
        self.regions.push(region);
        Ok(Some(region))
    }

    /// Scale the draft by `ratio` (new zoom / old zoom) so it stays over the
    /// same image pixels after a zoom change. Returns the rescaled draft.
    pub fn rezoom(&mut self, ratio: f64) -> Option<Rect> {
        let draft = self.draft.as_mut()?;
        draft.anchor = Point::new(draft.anchor.x * ratio, draft.anchor.y * ratio);
        draft.current = Point::new(draft.current.x * ratio, draft.current.y * ratio);
        Some(draft.rect())
    }

    /// Drop the draft without storing anything.
    pub fn cancel_region(&mut self) -> bool {
        self.draft.take().is_some()
    }

    pub fn draft(&self) -> Option<Rect> {
        self.draft.map(|d| d.rect())
    }

    pub fn is_drawing(&self) -> bool {
        self.draft.is_some()
    }

    /// Committed regions in insertion order. The iterator is cheap to clone,
    /// so callers can walk it more than once.
    pub fn all_regions(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Every committed region as it lays out on the draw surface at `zoom`.
    pub fn projected(&self, zoom: f64) -> impl Iterator<Item = Rect> + Clone + '_ {
        self.regions
            .iter()
            .map(move |r| mapper::project_region(r, zoom))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
