use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use imgspect_core::ImgspectConfig;

pub mod components;
pub mod layout;
pub mod state;

pub use components::app::ImgspectWidget;

/// Mount an inspector for the image at `src` into the element with id
/// `container_id`. `options_json` is an optional JSON object, e.g.
/// `{"zoom_unit": 0.25}`.
#[wasm_bindgen]
pub fn imgspect(container_id: &str, src: &str, options_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Already initialised when a second widget is mounted on the page
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ImgspectConfig::from_json(options_json.as_deref().unwrap_or(""))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{container_id}'")))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| JsValue::from_str("imgspect container must be an HTML element"))?;

    log::info!("Mounting imgspect on #{container_id} (zoom unit {})", config.zoom_unit);
    let src = src.to_string();
    leptos::mount::mount_to(container, move || view! { <ImgspectWidget src=src config=config /> })
        .forget();
    Ok(())
}
