use leptos::prelude::*;
use imgspect_core::{
    Change, Imgspect, ImgspectConfig, PanOffset, Point, Rect, Region, Size, ViewportGeometry,
};

/// Reactive mirror of one widget's [`Imgspect`] model.
///
/// The model itself lives in a local `StoredValue`; components never read it
/// directly. It publishes [`Change`]s and the subscription below copies them
/// into signals, which is what the views track.
#[derive(Clone, Copy)]
pub struct WidgetState {
    inspector: StoredValue<Option<Imgspect>, LocalStorage>,
    pub config: StoredValue<ImgspectConfig>,
    /// Original image size, known once the navigator image has loaded.
    pub image: RwSignal<Option<Size>>,
    pub viewport: RwSignal<Size>,
    pub zoom: RwSignal<f64>,
    pub pan: RwSignal<PanOffset>,
    /// Drag-handle top-left relative to the navigator, as the model holds it.
    pub handle: RwSignal<Point>,
    pub draft: RwSignal<Option<Rect>>,
    pub regions: RwSignal<Vec<Region>>,
}

impl WidgetState {
    pub fn new(config: ImgspectConfig) -> Self {
        Self {
            inspector: StoredValue::new_local(None),
            config: StoredValue::new(config),
            image: RwSignal::new(None),
            viewport: RwSignal::new(Size::default()),
            zoom: RwSignal::new(imgspect_core::zoom::MIN_ZOOM),
            pan: RwSignal::new(PanOffset::default()),
            handle: RwSignal::new(Point::ORIGIN),
            draft: RwSignal::new(None),
            regions: RwSignal::new(Vec::new()),
        }
    }

    /// Build the model for an image of the given size. Called again if the
    /// image source reloads; previous regions are dropped with the old model.
    pub fn attach_image(&self, image: Size) {
        let config = self.config.get_value();
        let viewport = self.viewport.get_untracked();
        let mut inspector = match Imgspect::new(config, image, viewport) {
            Ok(inspector) => inspector,
            Err(e) => {
                log::error!("Cannot inspect image: {e}");
                return;
            }
        };

        let (zoom, pan, handle) = (self.zoom, self.pan, self.handle);
        let (draft, regions) = (self.draft, self.regions);
        inspector.subscribe(move |change| match change {
            Change::Zoomed { factor } => zoom.set(*factor),
            Change::Panned { offset, handle: at } => {
                pan.set(*offset);
                handle.set(*at);
            }
            Change::Draft(rect) => draft.set(*rect),
            Change::RegionCommitted { region, .. } => regions.update(|r| r.push(*region)),
            Change::ViewportResized => {}
        });

        self.zoom.set(inspector.current_zoom_factor());
        self.pan.set(inspector.current_pan_offset());
        self.handle.set(inspector.handle_offset());
        self.draft.set(None);
        self.regions.set(Vec::new());
        self.image.set(Some(image));
        self.inspector.set_value(Some(inspector));
    }

    /// Run `f` against the model. `None` until an image is attached.
    pub fn with_inspector<U>(&self, f: impl FnOnce(&mut Imgspect) -> U) -> Option<U> {
        self.inspector
            .try_update_value(|slot| slot.as_mut().map(f))
            .flatten()
    }

    pub fn geometry(&self) -> Option<ViewportGeometry> {
        let image = self.image.get()?;
        Some(layout_for(image, self.zoom.get(), self.viewport.get()))
    }

    pub fn geometry_untracked(&self) -> Option<ViewportGeometry> {
        let image = self.image.get_untracked()?;
        Some(layout_for(image, self.zoom.get_untracked(), self.viewport.get_untracked()))
    }

    pub fn handle_offset(&self) -> Point {
        self.handle.get()
    }

    pub fn handle_offset_untracked(&self) -> Point {
        self.handle.get_untracked()
    }

    pub fn set_viewport(&self, viewport: Size, origin: Point) {
        self.viewport.set(viewport);
        self.with_inspector(|insp| {
            insp.set_viewport_size(viewport);
            insp.set_viewport_origin(origin);
        });
    }

    pub fn zoom_in(&self) {
        self.with_inspector(|insp| insp.zoom_in());
    }

    pub fn zoom_out(&self) {
        self.with_inspector(|insp| insp.zoom_out());
    }
}

// Navigator shows the image at original size
fn layout_for(image: Size, zoom: f64, viewport: Size) -> ViewportGeometry {
    ViewportGeometry::compute(image, zoom, viewport, image)
}
