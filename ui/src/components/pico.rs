//! Lifetime-free Dioxus wrappers around the Pico.css elements the browsing
//! screens use. Pico must be linked by the app shell.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn class(&self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonType::Primary, false) => "",
            (ButtonType::Primary, true) => "outline",
            (ButtonType::Secondary, false) => "secondary",
            (ButtonType::Secondary, true) => "secondary outline",
            (ButtonType::Contrast, false) => "contrast",
            (ButtonType::Contrast, true) => "contrast outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Marks the button as the current item of a set, e.g. a page number.
    #[props(default = false)]
    current: bool,
}

pub fn Button(props: ButtonProps) -> Element {
    let class_str = props.button_type.class(props.outline);
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            "aria-current": if props.current { "page" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
}

/// A `type="search"` input reporting every keystroke.
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        input {
            r#type: "search",
            name: "search",
            "aria-label": "{props.placeholder}",
            placeholder: "{props.placeholder}",
            value: "{props.value}",
            oninput: move |evt| props.on_input.call(evt.value()),
        }
    }
}

/// One `<option>` of a [`Select`].
#[derive(PartialEq, Clone, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectProps {
    label: String,
    options: Vec<SelectOption>,
    selected: String,
    on_change: EventHandler<String>,
}

pub fn Select(props: SelectProps) -> Element {
    rsx! {
        select {
            "aria-label": "{props.label}",
            value: "{props.selected}",
            onchange: move |evt| props.on_change.call(evt.value()),
            for choice in props.options.iter() {
                option {
                    key: "{choice.value}",
                    value: "{choice.value}",
                    selected: choice.value == props.selected,
                    "{choice.label}"
                }
            }
        }
    }
}
