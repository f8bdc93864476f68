use crate::error::Result;
use crate::mapper;
use crate::regions::RegionStore;
use crate::types::{PanOffset, Point, Rect, Region};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Drawing,
}

/// Pointer gesture state machine for drawing regions over the viewport.
///
/// Pointer positions arrive in the host's screen space. They are made
/// relative to the viewport origin and then to the panned draw surface before
/// reaching the region store. Positions outside the viewport are accepted;
/// with pointer capture the host keeps delivering them mid-drag.
#[derive(Clone, Debug, Default)]
pub struct InteractionSession {
    state: SessionState,
    viewport_origin: Point,
}

impl InteractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn set_viewport_origin(&mut self, origin: Point) {
        self.viewport_origin = origin;
    }

    fn to_draw(&self, pos: Point, pan: PanOffset) -> Point {
        let in_view = mapper::viewport_to_draw_offset(pos, self.viewport_origin);
        mapper::viewport_to_draw_space(in_view, pan.as_point())
    }

    pub fn pointer_down(&mut self, pos: Point, pan: PanOffset, store: &mut RegionStore) -> Result<()> {
        let start = self.to_draw(pos, pan);
        store.begin_region(start)?;
        self.state = SessionState::Drawing;
        Ok(())
    }

    /// Returns the updated draft, or `None` while idle.
    pub fn pointer_move(&mut self, pos: Point, pan: PanOffset, store: &mut RegionStore) -> Option<Rect> {
        if self.state != SessionState::Drawing {
            return None;
        }
        store.update_region(self.to_draw(pos, pan))
    }

    /// Ends the gesture. `Ok(None)` when idle or when the drawn region was
    /// degenerate.
    pub fn pointer_up(&mut self, zoom: f64, store: &mut RegionStore) -> Result<Option<Region>> {
        if self.state != SessionState::Drawing {
            return Ok(None);
        }
        let committed = store.commit_region(zoom)?;
        self.state = SessionState::Idle;
        Ok(committed)
    }

    /// Abandon the gesture, e.g. when the browser cancels the pointer.
    pub fn pointer_cancel(&mut self, store: &mut RegionStore) -> bool {
        self.state = SessionState::Idle;
        store.cancel_region()
    }
}
