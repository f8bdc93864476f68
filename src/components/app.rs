use leptos::prelude::*;
use imgspect_core::ImgspectConfig;
use crate::components::draw_view::DrawView;
use crate::components::navigator::Navigator;
use crate::components::toolbar::Toolbar;
use crate::state::WidgetState;

/// One inspector: navigator on the left, zoomed viewport on the right and
/// the zoom toolbar underneath. Each instance owns its own model.
#[component]
pub fn ImgspectWidget(
    src: String,
    #[prop(optional)] config: ImgspectConfig,
) -> impl IntoView {
    let state = WidgetState::new(config);
    provide_context(state);

    view! {
        <div class="imgspect">
            <Navigator src=src.clone() />
            <DrawView src=src />
            <Toolbar />
        </div>
    }
}
