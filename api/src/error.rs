//! Error types for catalog loading and client configuration.

use thiserror::Error;

/// Which browsing catalog a request or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum CatalogKind {
    #[strum(to_string = "gift card")]
    GiftCards,
    #[strum(to_string = "partner")]
    Partners,
}

impl CatalogKind {
    fn unreachable_message(&self) -> &'static str {
        match self {
            Self::GiftCards => "Unable to connect to gift card service. Please configure API credentials in admin settings.",
            Self::Partners => "Unable to connect to partners service. Please try again later.",
        }
    }

    fn failed_message(&self) -> &'static str {
        match self {
            Self::GiftCards => "Failed to load gift cards. Please configure API credentials in admin settings.",
            Self::Partners => "Failed to load partners",
        }
    }
}

/// A failed catalog load.
///
/// Every variant ends up as the same error banner; the variants only decide
/// which text the banner shows. Stored in UI state, hence `Clone`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The request never produced a readable response.
    #[error("{kind} service unreachable: {reason}")]
    Transport { kind: CatalogKind, reason: String },

    /// The endpoint answered with a non-2xx status.
    #[error("{kind} endpoint returned HTTP {status}")]
    Status {
        kind: CatalogKind,
        status: u16,
        message: Option<String>,
    },

    /// The body did not have the expected shape.
    #[error("malformed {kind} response: {reason}")]
    Decode { kind: CatalogKind, reason: String },

    /// The gift card catalog came back with no products.
    #[error("gift card catalog is empty")]
    Empty,

    /// The directory proxy has not been synced yet.
    #[error("partner cache is empty")]
    CacheEmpty,
}

impl CatalogError {
    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Transport { kind, .. }
            | Self::Status { kind, .. }
            | Self::Decode { kind, .. } => *kind,
            Self::Empty => CatalogKind::GiftCards,
            Self::CacheEmpty => CatalogKind::Partners,
        }
    }

    /// Text for the error banner.
    pub fn banner_message(&self) -> String {
        match self {
            Self::Transport { kind, .. } | Self::Decode { kind, .. } => {
                kind.unreachable_message().to_string()
            }
            Self::Status { kind, message, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(kind.failed_message())
                .to_string(),
            Self::Empty => {
                "No gift cards available. Please configure the gift card provider in admin settings."
                    .to_string()
            }
            Self::CacheEmpty => {
                "No organizations in cache. Please contact administrator to run sync from admin dashboard."
                    .to_string()
            }
        }
    }

    /// True when the partners banner should walk an administrator through
    /// syncing the directory cache: whenever its text mentions the cache,
    /// whether that is the empty-cache message or an endpoint error.
    pub fn needs_setup(&self) -> bool {
        self.kind() == CatalogKind::Partners && self.banner_message().contains("cache")
    }
}

/// Invalid client configuration, reported once at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("API base URL {0:?} must use http:// or https://")]
    UnsupportedScheme(String),

    #[error("{var} must be a positive number, got {value:?}")]
    InvalidFetchSize { var: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_banner_prefers_endpoint_message() {
        let err = CatalogError::Status {
            kind: CatalogKind::Partners,
            status: 500,
            message: Some("Every.org API key missing".into()),
        };
        assert_eq!(err.banner_message(), "Every.org API key missing");
        assert_eq!(err.to_string(), "partner endpoint returned HTTP 500");
    }

    #[test]
    fn status_banner_falls_back_per_catalog() {
        let err = CatalogError::Status {
            kind: CatalogKind::GiftCards,
            status: 502,
            message: None,
        };
        assert_eq!(
            err.banner_message(),
            "Failed to load gift cards. Please configure API credentials in admin settings."
        );

        let err = CatalogError::Status {
            kind: CatalogKind::Partners,
            status: 502,
            message: Some(String::new()),
        };
        assert_eq!(err.banner_message(), "Failed to load partners");
    }

    #[test]
    fn transport_and_decode_share_connect_message() {
        let transport = CatalogError::Transport {
            kind: CatalogKind::Partners,
            reason: "connection refused".into(),
        };
        let decode = CatalogError::Decode {
            kind: CatalogKind::Partners,
            reason: "expected value".into(),
        };
        assert_eq!(transport.banner_message(), decode.banner_message());
        assert!(transport.banner_message().starts_with("Unable to connect to partners"));
    }

    #[test]
    fn setup_steps_follow_partner_cache_messages() {
        assert!(CatalogError::CacheEmpty.needs_setup());
        assert_eq!(CatalogError::CacheEmpty.kind(), CatalogKind::Partners);
        assert!(!CatalogError::Empty.needs_setup());
        assert_eq!(CatalogError::Empty.kind(), CatalogKind::GiftCards);

        let stale_cache = CatalogError::Status {
            kind: CatalogKind::Partners,
            status: 503,
            message: Some("Nonprofit cache unavailable, run a sync".into()),
        };
        assert!(stale_cache.needs_setup());

        let unrelated = CatalogError::Status {
            kind: CatalogKind::Partners,
            status: 500,
            message: Some("Directory API key missing".into()),
        };
        assert!(!unrelated.needs_setup());

        let gift_cards = CatalogError::Status {
            kind: CatalogKind::GiftCards,
            status: 500,
            message: Some("Product cache is cold".into()),
        };
        assert!(!gift_cards.needs_setup());
    }
}
