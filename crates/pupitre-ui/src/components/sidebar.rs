//! Collapsible navigation sidebar.
//!
//! Renders the static navigation tree from `pupitre-core` with per-group
//! expand/collapse and an icon-only collapsed layout. Every state mutation
//! goes through the [`SidebarState`] reducers; rendering is a function of
//! `(tree, state, current path)`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use pupitre_core::menu::{self, MenuGroup, MenuItem};
use pupitre_core::{Glyph, LinkState, SidebarState};

use crate::components::Icon;

/// Collapsible sidebar rendering the static navigation tree.
///
/// Owns its [`SidebarState`]: created on mount with the sidebar expanded and
/// every group closed, discarded on unmount. Collapsing switches the layout
/// to icon-only widths via the `collapsed` class; open-group membership
/// survives the collapse so re-expanding restores the previous layout.
#[component]

pub fn Sidebar() -> impl IntoView {
    let state = RwSignal::new(SidebarState::new());
    let location = use_location();
    let current = Signal::derive(move || location.pathname.get());

    let on_collapse_toggle = move |_| {
        state.update(SidebarState::toggle_sidebar);
        leptos::logging::log!(
            "Sidebar collapsed: {}",
            state.with_untracked(|s| s.collapsed)
        );
    };

    view! {
        <aside class="sidebar" class:collapsed=move || state.get().collapsed>
            <button
                class="sidebar-toggle"
                on:click=on_collapse_toggle
                aria-label="Réduire la navigation"
                aria-expanded=move || (!state.get().collapsed).to_string()
            >
                // Chevron points left while expanded, right while collapsed
                <span class="sidebar-toggle-chevron" class:flipped=move || !state.get().collapsed>
                    <Icon glyph=Glyph::ChevronRight size="16" />
                </span>
            </button>
            <nav class="sidebar-nav">
                {menu::MENU
                    .iter()
                    .map(|group| view! { <SidebarGroup group=group state=state current=current /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// One top-level group: a header row plus conditionally rendered sub-items.
#[component]
fn SidebarGroup(
    /// The group to render.
    group: &'static MenuGroup,
    /// Shared sidebar interaction state.
    state: RwSignal<SidebarState>,
    /// Current route path.
    current: Signal<String>,
) -> impl IntoView {
    let title = group.title;

    // Groups without sub-items link straight to their destination.
    if !group.has_children() {
        let destination = group.destination.unwrap_or("/");
        let link_state = move || LinkState::for_path(&current.get(), destination);
        return view! {
            <div class="sidebar-group">
                <A
                    href={destination}
                    {..}
                    attr:class="sidebar-group-header"
                    class:active=move || link_state().is_active()
                    aria-current=move || link_state().is_active().then_some("page")
                >
                    <span class="sidebar-group-label">
                        <Icon glyph=group.glyph size="20" />
                        <Show when=move || !state.get().collapsed>
                            <span class="sidebar-group-title">{title}</span>
                        </Show>
                    </span>
                </A>
            </div>
        }
        .into_any();
    }

    let on_group_toggle = move |_| {
        state.update(|s| s.toggle_group(title));
        leptos::logging::log!(
            "Group \"{}\" open: {}",
            title,
            state.with_untracked(|s| s.is_group_open(title))
        );
    };

    view! {
        <div class="sidebar-group">
            <button
                class="sidebar-group-header"
                on:click=on_group_toggle
                aria-expanded=move || state.get().shows_children(title).to_string()
            >
                <span class="sidebar-group-label">
                    <Icon glyph=group.glyph size="20" />
                    <Show when=move || !state.get().collapsed>
                        <span class="sidebar-group-title">{title}</span>
                    </Show>
                </span>
                // Expand indicator is hidden in the icon-only layout
                <Show when=move || !state.get().collapsed>
                    <span
                        class="sidebar-group-chevron"
                        class:open=move || state.get().is_group_open(title)
                    >
                        <Icon glyph=Glyph::ChevronDown size="16" />
                    </span>
                </Show>
            </button>
            <Show when=move || state.get().shows_children(title)>
                <div class="sidebar-group-items">
                    {group
                        .items
                        .iter()
                        .map(|item| view! { <SidebarLink item=item current=current /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

/// One sub-item link with exact-match active highlighting.
#[component]
fn SidebarLink(
    /// The sub-item to render.
    item: &'static MenuItem,
    /// Current route path.
    current: Signal<String>,
) -> impl IntoView {
    let destination = item.destination;
    let link_state = move || LinkState::for_path(&current.get(), destination);

    view! {
        <A
            href={destination}
            {..}
            attr:class="sidebar-item"
            class:active=move || link_state().is_active()
            aria-current=move || link_state().is_active().then_some("page")
        >
            <Icon glyph=item.glyph size="16" />
            <span class="sidebar-item-title">{item.title}</span>
        </A>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_sidebar_compiles() {
        // Interaction behavior is covered by pupitre-core's state tests;
        // rendering is exercised in the browser
    }
}
