use leptos::prelude::*;
use imgspect_core::zoom::MIN_ZOOM;
use crate::layout::zoom_label;
use crate::state::WidgetState;

#[component]
pub fn Toolbar() -> impl IntoView {
    let state = expect_context::<WidgetState>();
    let no_image = move || state.image.get().is_none();

    view! {
        <div class="tools" style="clear: both; padding-top: 6px; display: flex; gap: 4px; align-items: center;">
            <button
                class="zoom in"
                disabled=no_image
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    state.zoom_in();
                }
                title="Zoom in"
            >"+"</button>
            <button
                class="zoom out"
                disabled=move || no_image() || state.zoom.get() <= MIN_ZOOM
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    state.zoom_out();
                }
                title="Zoom out"
            >"-"</button>
            <span class="zoom-level" style="color: #999; font-size: 11px;">
                {move || zoom_label(state.zoom.get())}
            </span>
            <span class="lite-count" style="color: #666; font-size: 11px; margin-left: auto;">
                {move || match state.regions.get().len() {
                    0 => String::new(),
                    1 => "1 region".to_string(),
                    n => format!("{n} regions"),
                }}
            </span>
        </div>
    }
}
