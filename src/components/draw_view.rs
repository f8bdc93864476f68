use leptos::prelude::*;
use web_sys::PointerEvent;
use imgspect_core::{mapper, Point, Size};
use crate::layout::{draw_surface_style, rect_style, DRAFT_STYLE, LITE_STYLE, VIEW_STYLE};
use crate::state::WidgetState;

fn client_point(ev: &PointerEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Only the pointer that started a gesture may move or finish it.
fn owns_gesture(active: Option<i32>, pointer_id: i32) -> bool {
    active == Some(pointer_id)
}

/// The viewport onto the zoomed draw surface. Lites are drawn here by
/// dragging; committed ones are re-projected whenever the zoom changes.
#[component]
pub fn DrawView(src: String) -> impl IntoView {
    let state = expect_context::<WidgetState>();
    let view_ref = NodeRef::<leptos::html::Div>::new();
    // Pointer drawing the current draft, if any
    let active_pointer = RwSignal::new(None::<i32>);

    // Measure the viewport once mounted, and again when a new image attaches
    Effect::new(move || {
        let _ = state.image.get();
        let Some(el) = view_ref.get() else { return };
        let rect = el.get_bounding_client_rect();
        state.set_viewport(
            Size::new(rect.width(), rect.height()),
            Point::new(rect.left(), rect.top()),
        );
    });

    let on_pointerdown = move |ev: PointerEvent| {
        if ev.button() != 0 { return; }
        ev.prevent_default();
        let Some(el) = view_ref.get_untracked() else { return };
        // Page may have scrolled since the last measurement
        let rect = el.get_bounding_client_rect();
        let origin = Point::new(rect.left(), rect.top());
        let pos = client_point(&ev);
        let result = state.with_inspector(|insp| {
            insp.set_viewport_origin(origin);
            insp.on_pointer_down(pos)
        });
        match result {
            Some(Ok(())) => {
                active_pointer.set(Some(ev.pointer_id()));
                // Keep receiving moves after the pointer leaves the viewport
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
            Some(Err(e)) => log::warn!("Pointer down ignored: {e}"),
            None => {}
        }
    };

    let on_pointermove = move |ev: PointerEvent| {
        if !owns_gesture(active_pointer.get_untracked(), ev.pointer_id()) { return; }
        let pos = client_point(&ev);
        state.with_inspector(|insp| insp.on_pointer_move(pos));
    };

    let on_pointerup = move |ev: PointerEvent| {
        if !owns_gesture(active_pointer.get_untracked(), ev.pointer_id()) { return; }
        active_pointer.set(None);
        if let Some(Err(e)) = state.with_inspector(|insp| insp.on_pointer_up()) {
            log::warn!("Region not stored: {e}");
        }
        if let Some(el) = view_ref.get_untracked() {
            let _ = el.release_pointer_capture(ev.pointer_id());
        }
    };

    let on_pointercancel = move |ev: PointerEvent| {
        if !owns_gesture(active_pointer.get_untracked(), ev.pointer_id()) { return; }
        active_pointer.set(None);
        state.with_inspector(|insp| insp.on_pointer_cancel());
    };

    let surface_css = move || match state.geometry() {
        Some(g) => draw_surface_style(&src, g.draw, state.pan.get()),
        None => "display: none;".to_string(),
    };

    view! {
        <div
            class="view"
            node_ref=view_ref
            style=VIEW_STYLE
            on:pointerdown=on_pointerdown
            on:pointermove=on_pointermove
            on:pointerup=on_pointerup
            on:pointercancel=on_pointercancel
        >
            <div class="draw" style=surface_css>
                {move || {
                    let zoom = state.zoom.get();
                    state.regions.get().iter().map(move |region| {
                        let rect = mapper::project_region(region, zoom);
                        let style = format!("{LITE_STYLE} {}", rect_style(&rect));
                        view! { <div class="lite" style=style></div> }
                    }).collect_view()
                }}
                {move || state.draft.get().map(|rect| {
                    let style = format!("{DRAFT_STYLE} {}", rect_style(&rect));
                    view! { <div class="lite draft" style=style></div> }
                })}
            </div>
        </div>
    }
}
