//! Startup configuration for the catalog client.

use reqwest::Url;

use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "IMPACTLY_API_BASE_URL";
pub const PRODUCT_FETCH_SIZE_VAR: &str = "IMPACTLY_PRODUCT_FETCH_SIZE";
pub const PARTNER_FETCH_SIZE_VAR: &str = "IMPACTLY_PARTNER_FETCH_SIZE";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Gift card listings are capped at this many products per load.
pub const DEFAULT_PRODUCT_FETCH_SIZE: usize = 1_000;
/// Large enough to pull the whole partner directory in one page.
pub const DEFAULT_PARTNER_FETCH_SIZE: usize = 100_000;

/// Where the storefront's proxy endpoints live and how much to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub product_fetch_size: usize,
    pub partner_fetch_size: usize,
}

impl ClientConfig {
    /// Config for `base_url` with the default fetch sizes.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            product_fetch_size: DEFAULT_PRODUCT_FETCH_SIZE,
            partner_fetch_size: DEFAULT_PARTNER_FETCH_SIZE,
        })
    }

    /// Reads the config from the environment, falling back to the in-code
    /// defaults.
    ///
    /// # Environment Variables
    /// - `IMPACTLY_API_BASE_URL`: origin serving `/api/...`; http or https.
    /// - `IMPACTLY_PRODUCT_FETCH_SIZE`: `size` sent to the product listing.
    /// - `IMPACTLY_PARTNER_FETCH_SIZE`: `perPage` sent to the partner listing.
    ///
    /// Browsers have no process environment, so wasm builds read the same
    /// variables at compile time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(lookup_var)
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Some(value) = lookup(PRODUCT_FETCH_SIZE_VAR) {
            config.product_fetch_size = parse_fetch_size(PRODUCT_FETCH_SIZE_VAR, &value)?;
        }
        if let Some(value) = lookup(PARTNER_FETCH_SIZE_VAR) {
            config.partner_fetch_size = parse_fetch_size(PARTNER_FETCH_SIZE_VAR, &value)?;
        }
        Ok(config)
    }
}

/// Parses the base URL, making sure its path ends in `/`.
///
/// Endpoint paths are joined relative to the base, and `Url::join` drops a
/// last segment without a trailing slash.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_fetch_size(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidFetchSize {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_var(name: &'static str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| compile_time_var(name))
}

#[cfg(target_arch = "wasm32")]
fn lookup_var(name: &'static str) -> Option<String> {
    compile_time_var(name)
}

fn compile_time_var(name: &'static str) -> Option<String> {
    let value = match name {
        BASE_URL_VAR => option_env!("IMPACTLY_API_BASE_URL"),
        PRODUCT_FETCH_SIZE_VAR => option_env!("IMPACTLY_PRODUCT_FETCH_SIZE"),
        PARTNER_FETCH_SIZE_VAR => option_env!("IMPACTLY_PARTNER_FETCH_SIZE"),
        _ => None,
    };
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
