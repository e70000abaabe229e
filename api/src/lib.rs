//! This crate contains the platform-neutral catalog browsing core shared by
//! the web and desktop front ends.
//!
//! It knows how to talk to the storefront's listing endpoints, how to filter
//! and page the in-memory catalog, and how to lay out the pagination strip.
//! Nothing in here depends on a renderer.

pub mod browse;
pub mod category;
pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod loader;
pub mod pagination;

pub use browse::BrowseView;
pub use browse::CategoryScope;
pub use browse::FilterState;
pub use category::CategorySelection;
pub use category::PartnerCategory;
pub use client::CatalogClient;
pub use config::ClientConfig;
pub use error::CatalogError;
pub use error::CatalogKind;
pub use error::ConfigError;
pub use listing::Listing;
pub use listing::Nonprofit;
pub use listing::Product;
pub use loader::CatalogState;
pub use loader::LoadTicket;

/// Number of listing cards shown per page on both browsing screens.
pub const PAGE_SIZE: usize = 24;
