//! HTTP client for the storefront's listing endpoints.
//!
//! One [`CatalogClient`] is built at startup from a [`ClientConfig`] and
//! shared by every screen. Response bodies are interpreted by the pure
//! `parse_*` functions so the status/body rules can be tested without a
//! network.

use std::sync::Arc;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use reqwest::Url;
use serde::Deserialize;

use crate::category::CategorySelection;
use crate::category::PartnerCategory;
use crate::config::ClientConfig;
use crate::error::CatalogError;
use crate::error::CatalogKind;
use crate::error::ConfigError;
use crate::listing::Nonprofit;
use crate::listing::Product;

pub const PRODUCTS_PATH: &str = "api/reloadly/products";
pub const NONPROFITS_PATH: &str = "api/nonprofits";

#[derive(Deserialize, Debug)]
struct ProductsBody {
    #[serde(default)]
    products: Option<Vec<Product>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct NonprofitsBody {
    #[serde(default)]
    nonprofits: Option<Vec<Nonprofit>>,
    #[serde(default)]
    live_api: bool,
    #[serde(default)]
    cache_empty: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    suggestion: Option<String>,
}

/// Where the directory proxy got its list from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ListingSource {
    Live,
    Cache,
}

/// A successful partner listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NonprofitListing {
    pub nonprofits: Vec<Nonprofit>,
    pub source: ListingSource,
    /// Informational note from the proxy, if any.
    pub message: Option<String>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turns a non-2xx response into a [`CatalogError`].
fn status_error(kind: CatalogKind, status: u16, body: &str) -> CatalogError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => {
            if let Some(suggestion) = &err.suggestion {
                error!("{kind} endpoint suggestion: {suggestion}");
            }
            CatalogError::Status {
                kind,
                status,
                message: err.error,
            }
        }
        Err(e) => CatalogError::Decode {
            kind,
            reason: format!("HTTP {status} with unreadable body: {e}"),
        },
    }
}

/// Interprets a response from the product listing endpoint.
pub fn parse_products(status: u16, body: &str) -> Result<Vec<Product>, CatalogError> {
    let kind = CatalogKind::GiftCards;
    if !is_success(status) {
        return Err(status_error(kind, status, body));
    }
    let parsed: ProductsBody = serde_json::from_str(body).map_err(|e| CatalogError::Decode {
        kind,
        reason: e.to_string(),
    })?;
    let products = parsed.products.unwrap_or_default();
    if products.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(products)
}

/// Interprets a response from the partner listing endpoint.
///
/// A live result is always accepted. Otherwise the proxy served its cache,
/// and a `cacheEmpty` flag means nobody has synced it yet.
pub fn parse_nonprofits(status: u16, body: &str) -> Result<NonprofitListing, CatalogError> {
    let kind = CatalogKind::Partners;
    if !is_success(status) {
        return Err(status_error(kind, status, body));
    }
    let parsed: NonprofitsBody = serde_json::from_str(body).map_err(|e| CatalogError::Decode {
        kind,
        reason: e.to_string(),
    })?;

    let source = if parsed.live_api {
        ListingSource::Live
    } else if parsed.cache_empty {
        return Err(CatalogError::CacheEmpty);
    } else {
        ListingSource::Cache
    };

    Ok(NonprofitListing {
        nonprofits: parsed.nonprofits.unwrap_or_default(),
        source,
        message: parsed.message.filter(|m| !m.is_empty()),
    })
}

/// Client for the product and partner listing endpoints.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

/// Clients compare by configuration.
impl PartialEq for CatalogClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, kind: CatalogKind, path: &str) -> Result<Url, CatalogError> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| CatalogError::Transport {
                kind,
                reason: e.to_string(),
            })
    }

    /// GETs `url` and returns the status code and body text.
    async fn get(
        &self,
        kind: CatalogKind,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<(u16, String), CatalogError> {
        let transport = |e: reqwest::Error| CatalogError::Transport {
            kind,
            reason: e.to_string(),
        };

        debug!("GET {url} {query:?}");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok((status, body))
    }

    /// Loads the whole gift card catalog.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let kind = CatalogKind::GiftCards;
        let url = self.endpoint(kind, PRODUCTS_PATH)?;
        let query = [("size", self.config.product_fetch_size.to_string())];

        let result = self
            .get(kind, url, &query)
            .await
            .and_then(|(status, body)| parse_products(status, &body));

        match &result {
            Ok(products) => info!("loaded {} gift cards", products.len()),
            Err(CatalogError::Empty) => error!("no products in catalog response"),
            Err(e) => error!("failed to fetch products: {e}"),
        }
        result
    }

    /// Loads every partner in `category`; `All` loads the whole directory.
    pub async fn fetch_nonprofits(
        &self,
        category: &CategorySelection,
    ) -> Result<Vec<Nonprofit>, CatalogError> {
        let kind = CatalogKind::Partners;
        let url = self.endpoint(kind, NONPROFITS_PATH)?;
        let query = [
            ("perPage", self.config.partner_fetch_size.to_string()),
            ("cause", PartnerCategory::cause_for(category).to_string()),
            ("page", "1".to_string()),
        ];

        let result = self
            .get(kind, url, &query)
            .await
            .and_then(|(status, body)| parse_nonprofits(status, &body));

        match result {
            Ok(listing) => {
                info!(
                    "loaded {} organizations from {}",
                    listing.nonprofits.len(),
                    listing.source
                );
                if let Some(message) = &listing.message {
                    info!("{message}");
                }
                Ok(listing.nonprofits)
            }
            Err(CatalogError::CacheEmpty) => {
                warn!("partner cache is empty; organizations need to be synced");
                Err(CatalogError::CacheEmpty)
            }
            Err(e) => {
                error!("failed to fetch nonprofits: {e}");
                Err(e)
            }
        }
    }
}
