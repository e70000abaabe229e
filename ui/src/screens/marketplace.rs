//=============================================================================
// File: src/screens/marketplace.rs
//=============================================================================
use api::category::countries_from_products;
use api::category::ALL;
use api::loader::LoadPhase;
use api::BrowseView;
use api::CatalogClient;
use api::CategoryScope;
use api::CategorySelection;
use api::FilterState;
use api::Listing;
use api::Product;
use api::PAGE_SIZE;
use dioxus::prelude::*;

use crate::components::catalog_toolbar::CatalogToolbar;
use crate::components::empty_state::EmptyState;
use crate::components::load_error::LoadErrorBanner;
use crate::components::pagination::scroll_to_top;
use crate::components::pagination::PaginationControls;
use crate::components::pico::SelectOption;
use crate::hooks::use_catalog::use_catalog;
use crate::hooks::use_catalog::CatalogHandle;

fn load_products(catalog: CatalogHandle<Product>, client: CatalogClient) {
    catalog.load(async move { client.fetch_products().await });
}

/// One gift card in the grid.
#[component]
fn GiftCardTile(product: Product) -> Element {
    rsx! {
        article {
            class: "listing-card",
            div {
                class: "listing-media",
                if let Some(logo) = product.primary_logo() {
                    img { src: "{logo}", alt: "{product.product_name}" }
                } else {
                    span { class: "listing-placeholder", "🎁" }
                }
            }
            header {
                h3 { "{product.brand.brand_name}" }
                if let Some(code) = product.country_code() {
                    mark { "{code}" }
                }
            }
            if let Some(price) = product.starting_price() {
                p { "From {price}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn MarketplaceScreen() -> Element {
    let client = use_context::<CatalogClient>();
    let catalog = use_catalog::<Product>();
    let mut filter = use_signal(FilterState::default);

    use_effect({
        let client = client.clone();
        move || load_products(catalog, client.clone())
    });

    let state = catalog.state();
    let state = state.read();
    let current = filter.read().clone();

    let mut options = vec![SelectOption::new(ALL, "All Countries")];
    options.extend(
        countries_from_products(state.items())
            .into_iter()
            .map(|country| SelectOption::new(country.code, country.name)),
    );

    rsx! {
        section {
            CatalogToolbar {
                title: "Gift Card Marketplace",
                subtitle: "Discover amazing gift cards while making a positive impact",
                search_placeholder: "Search brands like Starbucks, Amazon...",
                query: current.search_query().to_string(),
                on_search: move |query: String| filter.write().set_search_query(query),
                select_label: "Country",
                options,
                selected: current.selected_category().to_string(),
                on_select: move |value: String| {
                    let selection = value.parse::<CategorySelection>().unwrap_or_default();
                    filter.write().set_category(selection);
                },
            }

            match state.phase() {
                LoadPhase::Idle | LoadPhase::Loading => rsx! {
                    p { "Loading gift cards..." }
                    progress {}
                },
                LoadPhase::Failed(error) => rsx! {
                    LoadErrorBanner {
                        error: error.clone(),
                        on_retry: move |_| load_products(catalog, client.clone()),
                    }
                },
                LoadPhase::Ready(products) => {
                    let view =
                        BrowseView::compute(products, &current, CategoryScope::InMemory, PAGE_SIZE);
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
                            "Showing {view.items.len()} of {view.filtered_count} gift cards"
                        }
                        div {
                            class: "listing-grid",
                            for product in view.items.iter() {
                                GiftCardTile {
                                    key: "{product.listing_key()}",
                                    product: (*product).clone(),
                                }
                            }
                        }
                        if view.is_empty() {
                            EmptyState {
                                title: "No gift cards found".to_string(),
                                description: Some(
                                    "Try adjusting your search or filter".to_string(),
                                ),
                                icon: rsx! { "🎁" },
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
