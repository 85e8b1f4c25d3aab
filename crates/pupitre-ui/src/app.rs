//! Main application component.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pupitre_core::menu;

use crate::components::{ContentSection, Layout, LayoutMain, Sidebar};
use crate::theme::generate_css_variables;

/// Main application component.
///
/// Injects the theme variables and stylesheet, then mounts the router with
/// one route per destination in the static navigation tree.
#[component]

pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Router>
            <Layout>
                <Sidebar />
                <LayoutMain>
                    <Routes fallback=NotFoundPage>
                        <Route path=path!("/") view=DashboardPage />
                        <Route
                            path=path!("/programmes/apps")
                            view=|| view! { <DestinationPage destination="/programmes/apps" /> }
                        />
                        <Route
                            path=path!("/programmes/users")
                            view=|| view! { <DestinationPage destination="/programmes/users" /> }
                        />
                        <Route
                            path=path!("/programmes/notifications")
                            view=|| {
                                view! { <DestinationPage destination="/programmes/notifications" /> }
                            }
                        />
                        <Route
                            path=path!("/configuration/system")
                            view=|| view! { <DestinationPage destination="/configuration/system" /> }
                        />
                        <Route
                            path=path!("/configuration/integrations")
                            view=|| {
                                view! { <DestinationPage destination="/configuration/integrations" /> }
                            }
                        />
                        <Route
                            path=path!("/customisation/themes")
                            view=|| view! { <DestinationPage destination="/customisation/themes" /> }
                        />
                        <Route
                            path=path!("/customisation/styles")
                            view=|| view! { <DestinationPage destination="/customisation/styles" /> }
                        />
                        <Route
                            path=path!("/settings/profile")
                            view=|| view! { <DestinationPage destination="/settings/profile" /> }
                        />
                        <Route
                            path=path!("/settings/preferences")
                            view=|| view! { <DestinationPage destination="/settings/preferences" /> }
                        />
                    </Routes>
                </LayoutMain>
            </Layout>
        </Router>
    }
}

/// Landing page shown at the root path.
#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <ContentSection title="Tableau de bord">
            <p class="page-placeholder">
                "Sélectionnez une entrée dans la navigation pour commencer."
            </p>
        </ContentSection>
    }
}

/// Placeholder page for a navigation destination.
///
/// The heading comes from the menu entry bound to the destination, so pages
/// and sidebar labels cannot drift apart.
#[component]
fn DestinationPage(
    /// Destination path of this page.
    destination: &'static str,
) -> impl IntoView {
    let title = menu::item_for(destination).map_or("Page", |item| item.title);

    view! {
        <ContentSection title=title.to_string()>
            <p class="page-placeholder">{format!("Contenu « {title} » à venir.")}</p>
        </ContentSection>
    }
}

/// Fallback page for unknown routes. No sidebar entry is highlighted.
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <ContentSection title="Page introuvable">
            <p class="page-placeholder">"Cette page n'existe pas."</p>
        </ContentSection>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use pupitre_core::menu;

    // Keep this list in sync with the <Route> declarations above.
    const ROUTED_DESTINATIONS: &[&str] = &[
        "/programmes/apps",
        "/programmes/users",
        "/programmes/notifications",
        "/configuration/system",
        "/configuration/integrations",
        "/customisation/themes",
        "/customisation/styles",
        "/settings/profile",
        "/settings/preferences",
    ];

    #[test]
    fn test_every_menu_destination_has_a_route() {
        for group in menu::MENU {
            for item in group.items {
                assert!(
                    ROUTED_DESTINATIONS.contains(&item.destination),
                    "no route declared for {}",
                    item.destination
                );
            }
        }
    }

    #[test]
    fn test_every_route_has_a_menu_entry() {
        for destination in ROUTED_DESTINATIONS {
            assert!(
                menu::item_for(destination).is_some(),
                "route {destination} has no menu entry"
            );
        }
    }
}
