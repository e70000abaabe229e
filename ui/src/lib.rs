// The client-side Dioxus application logic.

use api::CatalogClient;
use api::ClientConfig;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;

mod components;
pub mod hooks;
mod screens;

use components::pico::Card;
use components::pico::Container;
use screens::marketplace::MarketplaceScreen;
use screens::partners::PartnersScreen;

/// The top-level tabs.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub enum Screen {
    #[default]
    Marketplace,
    Partners,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Marketplace => "Gift Cards",
            Screen::Partners => "Partners",
        }
    }
}

const ALL_SCREENS: [Screen; 2] = [Screen::Marketplace, Screen::Partners];

#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen {
                                "page"
                            } else {
                                "false"
                            },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    header.app-header {
        position: sticky;
        top: 0;
        z-index: 10;
        background-color: var(--pico-background-color);
        border-bottom: 1px solid var(--pico-muted-border-color);
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-radius: 10px 10px 0 0;
        border-bottom: 3px solid var(--pico-primary);
        background: linear-gradient(
            to bottom,
            color-mix(in srgb, var(--pico-primary), transparent 94%),
            transparent
        );
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- TOOLBAR --- */
    .catalog-toolbar { max-width: 48rem; }
    .catalog-toolbar select { max-width: 16rem; }

    /* --- LISTING GRID --- */
    .listing-count { color: var(--pico-muted-color); }
    .listing-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
        gap: 1.5rem;
    }
    .listing-card { margin: 0; padding: 0; overflow: hidden; }
    .listing-card > :not(.listing-media) { padding: 0 1.25rem; }
    .listing-card header {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        gap: 0.75rem;
        margin: 0;
        background: none;
        border: none;
    }
    .listing-card h3 { font-size: 1.15rem; margin: 1rem 0 0.5rem 0; }
    .listing-card p {
        display: -webkit-box;
        -webkit-line-clamp: 3;
        -webkit-box-orient: vertical;
        overflow: hidden;
    }
    .listing-media {
        aspect-ratio: 16 / 10;
        display: flex;
        align-items: center;
        justify-content: center;
        background-color: var(--pico-card-sectioning-background-color);
    }
    .listing-media img { width: 100%; height: 100%; object-fit: cover; }
    .listing-placeholder { font-size: 4rem; opacity: 0.3; }

    /* --- PAGINATION --- */
    .pagination {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        align-items: center;
        gap: 0.5rem;
        margin: 2rem 0;
    }
    .pagination button { min-width: 2.75rem; padding: 0.4rem 0.8rem; }
    .pagination-gap { color: var(--pico-muted-color); }

    /* --- EMPTY & ERROR PANELS --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 3rem 2rem;
        margin: 1rem 0;
        text-align: center;
        color: var(--pico-muted-color);
        border: 2px dashed var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-sectioning-background-color);
    }
    .empty-state-icon { font-size: 4rem; margin-bottom: 1rem; opacity: 0.6; }
    .empty-state p { max-width: 400px; margin: 0 auto 1.5rem auto; }
    .load-error { max-width: 36rem; margin: 3rem auto; text-align: center; }
    .setup-steps { text-align: left; font-size: 0.9rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Built once; every screen shares this client.
    let client = use_hook(|| {
        ClientConfig::from_env()
            .and_then(CatalogClient::new)
            .inspect(|client| info!("catalog API at {}", client.config().base_url))
            .inspect_err(|e| error!("invalid client configuration: {e}"))
    });

    match client {
        Ok(client) => rsx! {
            LoadedApp {
                client,
            }
        },
        Err(e) => rsx! {
            Container {
                Card {
                    h3 { "Configuration Error" }
                    p { "{e}" }
                }
            }
        },
    }
}

/// The tabbed shell, rendered once a client exists.
#[component]
fn LoadedApp(client: CatalogClient) -> Element {
    use_context_provider(|| client.clone());

    let active_screen = use_signal(Screen::default);
    // ActionLink switches tabs through this.
    use_context_provider(|| active_screen);

    rsx! {
        header {
            class: "app-header",
            Container {
                nav {
                    ul {
                        li {
                            strong { "Impactly" }
                        }
                    }
                    ul {
                        li {
                            Tabs {
                                active_screen,
                            }
                        }
                    }
                }
            }
        }
        Container {
            match active_screen() {
                Screen::Marketplace => rsx! {
                    MarketplaceScreen {}
                },
                Screen::Partners => rsx! {
                    PartnersScreen {}
                },
            }
        }
    }
}
