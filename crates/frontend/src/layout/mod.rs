pub mod header;
pub mod left;

use contracts::shell::UiLayoutState;
use leptos::prelude::*;

/// Portal frame.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content             |
/// |  (Left)   |          (Center)             |
/// +------------------------------------------+
/// ```
///
/// Sidebar width and content offset follow `collapsed`.
#[component]
pub fn Shell<H, L, C>(
    #[prop(into)] collapsed: Signal<bool>,
    header: H,
    left: L,
    center: C,
) -> impl IntoView
where
    H: Fn() -> AnyView + 'static + Send,
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let layout = move || UiLayoutState {
        sidebar_collapsed: collapsed.get(),
    };

    view! {
        <div class="app-layout">
            {header()}

            <div class="app-body">
                <aside
                    data-zone="left"
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || collapsed.get()
                    style:width=move || format!("{}px", layout().sidebar_width_px())
                >
                    {left()}
                </aside>

                <main
                    data-zone="center"
                    class="app-main"
                    style:margin-left=move || format!("{}px", layout().content_offset_px())
                >
                    {center()}
                </main>
            </div>
        </div>
    }
}
