use api::pagination::PageLink;
use api::pagination::PaginationStrip;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Scrolls the page back to the top after a page change.
pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

/// Previous/Next buttons around a windowed strip of page numbers.
///
/// `on_select` receives the requested page number.
#[component]
pub fn PaginationControls(
    current_page: usize,
    total_pages: usize,
    on_select: EventHandler<usize>,
) -> Element {
    let strip = PaginationStrip::new(current_page, total_pages);
    let previous = strip.previous();
    let next = strip.next();

    rsx! {
        nav {
            class: "pagination",
            "aria-label": "Pagination",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                disabled: previous.is_none(),
                on_click: move |_| {
                    if let Some(page) = previous {
                        on_select.call(page);
                    }
                },
                "‹ Previous"
            }
            for (slot, link) in strip.links.into_iter().enumerate() {
                match link {
                    PageLink::Page { number, current } => rsx! {
                        Button {
                            key: "{slot}-{number}",
                            button_type: if current {
                                ButtonType::Contrast
                            } else {
                                ButtonType::Secondary
                            },
                            outline: !current,
                            current,
                            on_click: move |_| on_select.call(number),
                            "{number}"
                        }
                    },
                    PageLink::Ellipsis => rsx! {
                        span { key: "{slot}-gap", class: "pagination-gap", "…" }
                    },
                }
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                disabled: next.is_none(),
                on_click: move |_| {
                    if let Some(page) = next {
                        on_select.call(page);
                    }
                },
                "Next ›"
            }
        }
    }
}
