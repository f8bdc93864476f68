use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, PointerEvent};
use imgspect_core::pan::clamp_handle;
use imgspect_core::{Point, Size};
use crate::layout::{handle_style, rect_style, HANDLE_STYLE, LITE_STYLE, NAV_STYLE};
use crate::state::WidgetState;

fn client_point(ev: &PointerEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn event_element(ev: &PointerEvent) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// Thumbnail of the whole image at original size, with the committed lites
/// and a drag handle marking the part of the image shown in the viewport.
#[component]
pub fn Navigator(src: String) -> impl IntoView {
    let state = expect_context::<WidgetState>();
    let nav_ref = NodeRef::<leptos::html::Div>::new();
    let img_ref = NodeRef::<leptos::html::Img>::new();

    // Pointer position inside the handle when the drag started
    let grab: RwSignal<Option<Point>> = RwSignal::new(None);

    let on_handle_down = move |ev: PointerEvent| {
        if ev.button() != 0 { return; }
        ev.prevent_default();
        ev.stop_propagation();
        let Some(nav) = nav_ref.get_untracked() else { return };
        let rect = nav.get_bounding_client_rect();
        let handle_at = Point::new(rect.left(), rect.top())
            .offset_by(state.handle_offset_untracked());
        grab.set(Some(client_point(&ev).relative_to(handle_at)));
        if let Some(el) = event_element(&ev) {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
    };

    let on_handle_move = move |ev: PointerEvent| {
        let Some(grab_at) = grab.get_untracked() else { return };
        let Some(nav) = nav_ref.get_untracked() else { return };
        let Some(geometry) = state.geometry_untracked() else { return };
        let rect = nav.get_bounding_client_rect();
        let nav_origin = Point::new(rect.left(), rect.top());

        // Constrain to the navigator here; the model takes the position as given
        let wanted = client_point(&ev).relative_to(nav_origin).relative_to(grab_at);
        let clamped = clamp_handle(wanted, geometry.navigator, geometry.handle);
        state.with_inspector(|insp| insp.on_drag_move(nav_origin, nav_origin.offset_by(clamped)));
    };

    let on_handle_up = move |ev: PointerEvent| {
        if grab.get_untracked().is_none() { return; }
        grab.set(None);
        if let Some(el) = event_element(&ev) {
            let _ = el.release_pointer_capture(ev.pointer_id());
        }
    };

    let handle_css = move || match state.geometry() {
        Some(g) => format!("{HANDLE_STYLE} {}", handle_style(state.handle_offset(), g.handle)),
        None => "display: none;".to_string(),
    };

    view! {
        <div class="nav" node_ref=nav_ref style=NAV_STYLE>
            <img
                node_ref=img_ref
                src=src
                draggable="false"
                on:load=move |_| {
                    let Some(img) = img_ref.get_untracked() else { return };
                    let size = Size::new(img.natural_width() as f64, img.natural_height() as f64);
                    log::info!("Image loaded: {}x{}", size.width, size.height);
                    state.attach_image(size);
                }
            />
            {move || {
                state.regions.get().iter().map(|region| {
                    let style = format!("{LITE_STYLE} {}", rect_style(&region.as_rect()));
                    view! { <div class="lite" style=style></div> }
                }).collect_view()
            }}
            <div
                class="drag"
                style=handle_css
                on:pointerdown=on_handle_down
                on:pointermove=on_handle_move
                on:pointerup=on_handle_up
                on:pointercancel=on_handle_up
            ></div>
        </div>
    }
}
