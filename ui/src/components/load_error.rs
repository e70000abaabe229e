use api::CatalogError;
use api::CatalogKind;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;

/// Steps an administrator follows to fill an empty partner cache.
const CACHE_SETUP_STEPS: [&str; 5] = [
    "Log in to the admin dashboard",
    "Navigate to the Nonprofit Sync section",
    "Click \"Start Full Sync\" to populate organizations",
    "Wait for sync to complete",
    "Return here and refresh the page",
];

fn banner_title(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::GiftCards => "Unable to Load Gift Cards",
        CatalogKind::Partners => "Unable to Load Partners",
    }
}

/// Error banner with a retry button for a failed catalog load.
#[component]
pub fn LoadErrorBanner(error: CatalogError, on_retry: EventHandler<()>) -> Element {
    let title = banner_title(error.kind());
    let message = error.banner_message();

    rsx! {
        div {
            class: "load-error",
            Card {
                h3 { "⚠ {title}" }
                p { "{message}" }
                if error.needs_setup() {
                    aside {
                        class: "setup-steps",
                        h4 { "Setup Required:" }
                        ol {
                            for step in CACHE_SETUP_STEPS {
                                li { "{step}" }
                            }
                        }
                    }
                }
                Button {
                    on_click: move |_| on_retry.call(()),
                    "Try Again"
                }
            }
        }
    }
}
