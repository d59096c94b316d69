//! Sidebar rendered from the menu tree.
//!
//! Sections expand and collapse locally; the sidebar as a whole is collapsed
//! by the portal shell, which owns that state.

use crate::shared::icons::icon;
use contracts::shell::routes::normalize_path;
use contracts::shell::{MenuNode, MenuTree};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Copy)]
struct SidebarCtx {
    menu: StoredValue<MenuTree>,
    expanded: RwSignal<HashSet<String>>,
    active_path: Signal<String>,
    collapsed: Signal<bool>,
    on_toggle: Callback<()>,
}

impl SidebarCtx {
    fn on_active_trail(&self, id: &str) -> bool {
        let path = self.active_path.get();
        self.menu
            .with_value(|menu| menu.trail_to(&path).iter().any(|x| x == id))
    }

    fn toggle_section(&self, id: &str) {
        // A collapsed sidebar has no room for children: open it first.
        if self.collapsed.get_untracked() {
            self.on_toggle.run(());
            self.expanded.update(|set| {
                set.insert(id.to_string());
            });
            return;
        }
        self.expanded.update(|set| {
            if !set.remove(id) {
                set.insert(id.to_string());
            }
        });
    }
}

#[component]
pub fn Sidebar(
    menu: MenuTree,
    #[prop(into)] active_path: Signal<String>,
    #[prop(into)] collapsed: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let ctx = SidebarCtx {
        menu: StoredValue::new(menu),
        expanded: RwSignal::new(HashSet::new()),
        active_path,
        collapsed,
        on_toggle,
    };

    // Keep the section of the current page open.
    Effect::new(move |_| {
        let path = active_path.get();
        let trail = ctx.menu.with_value(|menu| menu.trail_to(&path));
        if trail.len() > 1 {
            ctx.expanded.update(|set| set.extend(trail[..trail.len() - 1].iter().cloned()));
        }
    });

    let roots = ctx.menu.with_value(|menu| menu.roots().to_vec());

    view! {
        <nav
            class="app-sidebar__content"
            class:app-sidebar__content--collapsed=move || collapsed.get()
        >
            {menu_items(&roots, 0, ctx)}
        </nav>
    }
}

fn menu_items(nodes: &[MenuNode], depth: usize, ctx: SidebarCtx) -> AnyView {
    let indent = format!("{}px", 12 + depth * 14);

    nodes
        .iter()
        .map(|node| match node {
            MenuNode::Leaf {
                label,
                icon: icon_name,
                path: Some(path),
                ..
            } => {
                let path_for_active = normalize_path(path);
                view! {
                    <a
                        href=path.clone()
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || {
                            ctx.active_path.get() == path_for_active
                        }
                        style:padding-left=indent.clone()
                        title=label.clone()
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span class="app-sidebar__label">{label.clone()}</span>
                        </div>
                    </a>
                }
                .into_any()
            }
            // Nothing to navigate to: shown, but inert.
            MenuNode::Leaf {
                label,
                icon: icon_name,
                path: None,
                ..
            } => view! {
                <div class="app-sidebar__item app-sidebar__item--inert" style:padding-left=indent.clone()>
                    <div class="app-sidebar__item-content">
                        {icon(icon_name)}
                        <span class="app-sidebar__label">{label.clone()}</span>
                    </div>
                </div>
            }
            .into_any(),
            MenuNode::Branch {
                id,
                label,
                icon: icon_name,
                children,
            } => {
                let id = StoredValue::new(id.clone());
                let children = StoredValue::new(children.clone());
                let is_open = move || {
                    !ctx.collapsed.get() && id.with_value(|id| ctx.expanded.get().contains(id))
                };

                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--on-trail=move || id.with_value(|id| ctx.on_active_trail(id))
                            style:padding-left=indent.clone()
                            title=label.clone()
                            on:click=move |_| id.with_value(|id| ctx.toggle_section(id))
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span class="app-sidebar__label">{label.clone()}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_open
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_open>
                            <div class="app-sidebar__children">
                                {move || children.with_value(|c| menu_items(c, depth + 1, ctx))}
                            </div>
                        </Show>
                    </div>
                }
                .into_any()
            }
        })
        .collect_view()
        .into_any()
}
