use dioxus::prelude::*;

use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Tab to switch to when clicked.
    pub to: Screen,

    /// Render as a Pico button instead of an inline link.
    #[props(default = false)]
    pub as_button: bool,

    pub children: Element,
}

/// In-app navigation between the top-level tabs.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let to = props.to;

    rsx! {
        a {
            href: "#",
            role: if props.as_button { "button" } else { "link" },
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                active_screen.set(to);
            },
            {props.children}
        }
    }
}
