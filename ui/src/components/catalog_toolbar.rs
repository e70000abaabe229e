use dioxus::prelude::*;

use crate::components::pico::SearchInput;
use crate::components::pico::Select;
use crate::components::pico::SelectOption;

/// Title block plus the search box and category select above a listing grid.
#[component]
pub fn CatalogToolbar(
    title: &'static str,
    subtitle: &'static str,
    search_placeholder: &'static str,
    query: String,
    on_search: EventHandler<String>,
    select_label: &'static str,
    options: Vec<SelectOption>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        hgroup {
            h1 { "{title}" }
            p { "{subtitle}" }
        }
        div {
            class: "catalog-toolbar",
            role: "group",
            SearchInput {
                value: query,
                placeholder: search_placeholder.to_string(),
                on_input: on_search,
            }
            Select {
                label: select_label.to_string(),
                options,
                selected,
                on_change: on_select,
            }
        }
    }
}
