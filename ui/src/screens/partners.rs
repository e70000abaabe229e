//=============================================================================
// File: src/screens/partners.rs
//=============================================================================
use api::category::ALL;
use api::loader::LoadPhase;
use api::BrowseView;
use api::CatalogClient;
use api::CategoryScope;
use api::CategorySelection;
use api::FilterState;
use api::Listing;
use api::Nonprofit;
use api::PartnerCategory;
use api::PAGE_SIZE;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::action_link::ActionLink;
use crate::components::catalog_toolbar::CatalogToolbar;
use crate::components::empty_state::EmptyState;
use crate::components::load_error::LoadErrorBanner;
use crate::components::pagination::scroll_to_top;
use crate::components::pagination::PaginationControls;
use crate::components::pico::SelectOption;
use crate::hooks::use_catalog::use_catalog;
use crate::hooks::use_catalog::CatalogHandle;
use crate::Screen;

fn load_partners(
    catalog: CatalogHandle<Nonprofit>,
    client: CatalogClient,
    category: CategorySelection,
) {
    catalog.load(async move { client.fetch_nonprofits(&category).await });
}

fn category_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL, "All Categories"))
        .chain(PartnerCategory::iter().map(|c| SelectOption::new(c.slug(), c.label())))
        .collect()
}

#[component]
fn PartnerTile(nonprofit: Nonprofit) -> Element {
    rsx! {
        article {
            class: "listing-card",
            div {
                class: "listing-media",
                if let Some(image) = nonprofit.hero_image() {
                    img { src: "{image}", alt: "{nonprofit.name}" }
                } else {
                    span { class: "listing-placeholder", "♡" }
                }
            }
            h3 { "{nonprofit.name}" }
            if let Some(category) = nonprofit.category.as_deref().filter(|c| !c.is_empty()) {
                mark { "{category}" }
            }
            if let Some(description) = nonprofit.description.as_deref() {
                p { "{description}" }
            }
            if let Some(address) = nonprofit.location_address.as_deref() {
                small { "{address}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PartnersScreen() -> Element {
    let client = use_context::<CatalogClient>();
    let catalog = use_catalog::<Nonprofit>();
    let mut filter = use_signal(FilterState::default);

    // Only changes when the category does, not on every keystroke.
    let category = use_memo(move || filter.read().selected_category().clone());

    // Refetch on mount and whenever the category changes.
    use_effect({
        let client = client.clone();
        move || load_partners(catalog, client.clone(), category())
    });

    let state = catalog.state();
    let state = state.read();
    let current = filter.read().clone();

    rsx! {
        section {
            CatalogToolbar {
                title: "Social Impact Partners",
                subtitle: "Discover hundreds of verified nonprofits making a real difference",
                search_placeholder: "Search nonprofits...",
                query: current.search_query().to_string(),
                on_search: move |query: String| filter.write().set_search_query(query),
                select_label: "Category",
                options: category_options(),
                selected: current.selected_category().to_string(),
                on_select: move |value: String| {
                    let selection = value.parse::<CategorySelection>().unwrap_or_default();
                    filter.write().set_category(selection);
                },
            }

            match state.phase() {
                LoadPhase::Idle | LoadPhase::Loading => rsx! {
                    p { "Loading partners..." }
                    progress {}
                },
                LoadPhase::Failed(error) => rsx! {
                    LoadErrorBanner {
                        error: error.clone(),
                        on_retry: move |_| load_partners(catalog, client.clone(), category()),
                    }
                },
                LoadPhase::Ready(nonprofits) => {
                    // The directory narrows by cause, so only search is applied locally.
                    let scope = CategoryScope::Upstream;
                    let view = BrowseView::compute(nonprofits, &current, scope, PAGE_SIZE);
                    let total_pages = view.window.total_pages;
                    let on_page = move |page: usize| {
                        filter.write().go_to_page(page, total_pages);
                        scroll_to_top();
                    };

                    rsx! {
                        if view.show_pagination() {
                            PaginationControls {
                                current_page: view.window.current_page,
                                total_pages,
                                on_select: on_page,
                            }
                        }
                        p {
                            class: "listing-count",
                            "Showing {view.items.len()} of {view.filtered_count} partner organizations"
                        }
                        div {
                            class: "listing-grid",
                            for nonprofit in view.items.iter() {
                                PartnerTile {
                                    key: "{nonprofit.listing_key()}",
                                    nonprofit: (*nonprofit).clone(),
                                }
                            }
                        }
                        if view.is_empty() {
                            EmptyState {
                                title: "No partners found".to_string(),
                                description: Some(
                                    "Try adjusting your search or filter".to_string(),
                                ),
                                icon: rsx! { "♡" },
                                primary_action: rsx! {
                                    ActionLink {
                                        to: Screen::Marketplace,
                                        as_button: true,
                                        "Browse Gift Cards"
                                    }
                                },
                            }
                        }
                        if view.show_pagination() {
                            PaginationControls {
                                current_page: view.window.current_page,
                                total_pages,
                                on_select: on_page,
                            }
                        }
                    }
                }
            }
        }
    }
}
