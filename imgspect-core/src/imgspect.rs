use std::fmt;

use crate::config::ImgspectConfig;
use crate::error::{ImgspectError, Result};
use crate::events::{Change, Observer};
use crate::geometry::ViewportGeometry;
use crate::mapper;
use crate::pan::PanController;
use crate::regions::RegionStore;
use crate::session::{InteractionSession, SessionState};
use crate::types::{PanOffset, Point, Rect, Region, Size};
use crate::zoom::ZoomController;

/// One inspector widget's state: zoom, pan, regions and the drawing gesture.
///
/// Every mutation goes through a method here and is announced to subscribers
/// as a [`Change`], in the order it happened.
pub struct Imgspect {
    image: Size,
    viewport: Size,
    zoom: ZoomController,
    pan: PanController,
    regions: RegionStore,
    session: InteractionSession,
    observers: Vec<Observer>,
}

impl fmt::Debug for Imgspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Imgspect")
            .field("image", &self.image)
            .field("viewport", &self.viewport)
            .field("zoom", &self.zoom)
            .field("pan", &self.pan)
            .field("regions", &self.regions)
            .field("session", &self.session)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Imgspect {
    /// `image` is the original pixel size. The navigator shows the image at
    /// that size too. `viewport` may be empty until the host has measured it.
    pub fn new(config: ImgspectConfig, image: Size, viewport: Size) -> Result<Self> {
        config.validate()?;
        if image.is_empty() || !image.width.is_finite() || !image.height.is_finite() {
            return Err(ImgspectError::InvalidDimensions {
                width: image.width,
                height: image.height,
            });
        }
        log::debug!(
            "imgspect: {}x{} image, zoom unit {}",
            image.width,
            image.height,
            config.zoom_unit
        );
        Ok(Self {
            image,
            viewport,
            zoom: ZoomController::new(config.zoom_unit),
            pan: PanController::new(),
            regions: RegionStore::new(),
            session: InteractionSession::new(),
            observers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Change) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, change: Change) {
        for observer in self.observers.iter_mut() {
            observer(&change);
        }
    }

    // ── Zoom ──────────────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) -> f64 {
        let previous = self.zoom.factor();
        self.zoom.zoom_in();
        self.relayout(previous);
        self.zoom.factor()
    }

    pub fn zoom_out(&mut self) -> f64 {
        let previous = self.zoom.factor();
        self.zoom.zoom_out();
        self.relayout(previous);
        self.zoom.factor()
    }

    /// Re-derive the pan, and any open draft, for the current zoom. Running
    /// it twice at the same zoom yields the same layout, so only real changes
    /// are announced.
    fn relayout(&mut self, previous_zoom: f64) {
        let zoom = self.zoom.factor();
        let geometry = self.geometry();
        let before = self.pan.offset();
        let after = self.pan.rezoom(zoom, geometry.navigator, geometry.handle);
        if zoom != previous_zoom {
            log::debug!("Zoom {:.2}", zoom);
            self.emit(Change::Zoomed { factor: zoom });
            // The draft is in draw space; keep it over the same image pixels
            if let Some(draft) = self.regions.rezoom(zoom / previous_zoom) {
                self.emit(Change::Draft(Some(draft)));
            }
        }
        if after != before {
            self.emit_panned();
        }
    }

    fn emit_panned(&mut self) {
        let change = Change::Panned {
            offset: self.pan.offset(),
            handle: self.pan.handle_offset(),
        };
        self.emit(change);
    }

    pub fn current_zoom_factor(&self) -> f64 {
        self.zoom.factor()
    }

    // ── Pan ───────────────────────────────────────────────────────────────

    /// The drag handle moved to `drag_pos` on a navigator whose origin is at
    /// `nav_pos`, both in the same screen space.
    pub fn on_drag_move(&mut self, nav_pos: Point, drag_pos: Point) -> PanOffset {
        let offset = self.pan.on_drag_move(drag_pos, nav_pos, self.zoom.factor());
        self.emit_panned();
        offset
    }

    pub fn current_pan_offset(&self) -> PanOffset {
        self.pan.offset()
    }

    /// Top-left of the drag handle relative to the navigator.
    pub fn handle_offset(&self) -> Point {
        self.pan.handle_offset()
    }

    // ── Drawing ───────────────────────────────────────────────────────────

    pub fn on_pointer_down(&mut self, pos: Point) -> Result<()> {
        let pan = self.pan.offset();
        self.session.pointer_down(pos, pan, &mut self.regions)?;
        let draft = self.regions.draft();
        self.emit(Change::Draft(draft));
        Ok(())
    }

    pub fn on_pointer_move(&mut self, pos: Point) {
        let pan = self.pan.offset();
        if let Some(draft) = self.session.pointer_move(pos, pan, &mut self.regions) {
            self.emit(Change::Draft(Some(draft)));
        }
    }

    /// Finish the gesture. Returns the stored region, if one was stored.
    pub fn on_pointer_up(&mut self) -> Result<Option<Region>> {
        if self.session.state() != SessionState::Drawing {
            return Ok(None);
        }
        let committed = self.session.pointer_up(self.zoom.factor(), &mut self.regions)?;
        self.emit(Change::Draft(None));
        if let Some(region) = committed {
            let index = self.regions.len() - 1;
            log::debug!(
                "Region {index}: ({:.1}, {:.1}) - ({:.1}, {:.1})",
                region.x1,
                region.y1,
                region.x2,
                region.y2
            );
            self.emit(Change::RegionCommitted { index, region });
        }
        Ok(committed)
    }

    pub fn on_pointer_cancel(&mut self) {
        if self.session.pointer_cancel(&mut self.regions) {
            self.emit(Change::Draft(None));
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.session.state() == SessionState::Drawing
    }

    pub fn draft(&self) -> Option<Rect> {
        self.regions.draft()
    }

    pub fn all_regions(&self) -> std::slice::Iter<'_, Region> {
        self.regions.all_regions()
    }

    /// Committed regions laid out on the draw surface at the current zoom.
    pub fn projected_regions(&self) -> impl Iterator<Item = Rect> + Clone + '_ {
        self.regions.projected(self.zoom.factor())
    }

    pub fn project(&self, region: &Region) -> Rect {
        mapper::project_region(region, self.zoom.factor())
    }

    // ── Layout ────────────────────────────────────────────────────────────

    pub fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry::compute(self.image, self.zoom.factor(), self.viewport, self.image)
    }

    pub fn set_viewport_origin(&mut self, origin: Point) {
        self.session.set_viewport_origin(origin);
    }

    pub fn set_viewport_size(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.emit(Change::ViewportResized);
        self.relayout(self.zoom.factor());
    }
}
