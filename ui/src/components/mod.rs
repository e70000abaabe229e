//! Shared building blocks for the browsing screens: Pico wrappers, the
//! toolbar, pagination, and the empty and error panels.
pub mod action_link;
pub mod catalog_toolbar;
pub mod empty_state;
pub mod load_error;
pub mod pagination;
pub mod pico;
