//! Listing records as returned by the catalog and directory endpoints.

use serde::Deserialize;
use serde::Serialize;

/// Anything a browsing screen can search, classify and key.
pub trait Listing {
    /// Stable identity of the record within one fetch.
    fn listing_key(&self) -> String;

    /// Text fields the search box matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against the selected category, if the record has one.
    fn classification(&self) -> Option<&str>;
}

/// Whether a gift card is sold at fixed face values or any value in a range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIs,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum DenominationType {
    #[default]
    Fixed,
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default)]
    pub iso_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(default)]
    pub brand_id: u64,
    #[serde(default)]
    pub brand_name: String,
}

/// A gift card product from the catalog provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: u64,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub denomination_type: DenominationType,
    #[serde(default)]
    pub recipient_currency_code: String,
    #[serde(default)]
    pub fixed_recipient_denominations: Vec<f64>,
    #[serde(default)]
    pub logo_urls: Vec<String>,
    #[serde(default)]
    pub brand: Brand,
}

impl Product {
    pub fn country_code(&self) -> Option<&str> {
        self.country.as_ref()?.iso_name.as_deref()
    }

    pub fn primary_logo(&self) -> Option<&str> {
        self.logo_urls.first().map(String::as_str)
    }

    /// "From" price label, only meaningful for fixed-denomination cards.
    ///
    /// ```
    /// # use api::listing::Product;
    /// # let mut p: Product = serde_json::from_str(r#"{"productId":1}"#).unwrap();
    /// p.recipient_currency_code = "USD".into();
    /// p.fixed_recipient_denominations = vec![25.0, 50.0];
    /// assert_eq!(p.starting_price().as_deref(), Some("USD 25"));
    /// ```
    pub fn starting_price(&self) -> Option<String> {
        if !self.denomination_type.is_fixed() {
            return None;
        }
        let first = self.fixed_recipient_denominations.first()?;
        Some(format!(
            "{} {}",
            self.recipient_currency_code,
            format_denomination(*first)
        ))
    }
}

/// Shortest form of the amount: `25`, `25.5`, `19.99`.
fn format_denomination(value: f64) -> String {
    format!("{value}")
}

impl Listing for Product {
    fn listing_key(&self) -> String {
        self.product_id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_name.as_str(), self.brand.brand_name.as_str()]
    }

    fn classification(&self) -> Option<&str> {
        self.country_code()
    }
}

/// A nonprofit partner from the directory provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nonprofit {
    pub nonprofit_slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location_address: Option<String>,
}

impl Nonprofit {
    /// Cover image if there is one, else the logo.
    pub fn hero_image(&self) -> Option<&str> {
        non_empty(&self.cover_image_url).or_else(|| non_empty(&self.logo_url))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl Listing for Nonprofit {
    fn listing_key(&self) -> String {
        self.nonprofit_slug.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = self.description.as_deref() {
            fields.push(description);
        }
        fields
    }

    fn classification(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "productId": 42,
        "productName": "Amazon US",
        "country": { "isoName": "US", "name": "United States" },
        "denominationType": "FIXED",
        "recipientCurrencyCode": "USD",
        "fixedRecipientDenominations": [10, 25.5],
        "logoUrls": ["https://cdn.example/amazon.png"],
        "brand": { "brandId": 7, "brandName": "Amazon" },
        "somethingNew": true
    }"#;

    #[test]
    fn product_deserializes_from_camel_case() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.product_id, 42);
        assert_eq!(product.brand.brand_name, "Amazon");
        assert_eq!(product.country_code(), Some("US"));
        assert_eq!(product.primary_logo(), Some("https://cdn.example/amazon.png"));
        assert_eq!(product.listing_key(), "42");
        assert_eq!(product.search_fields(), vec!["Amazon US", "Amazon"]);
    }

    #[test]
    fn starting_price_only_for_fixed_denominations() {
        let mut product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.starting_price().as_deref(), Some("USD 10"));

        product.fixed_recipient_denominations = vec![25.5];
        assert_eq!(product.starting_price().as_deref(), Some("USD 25.5"));

        product.fixed_recipient_denominations = vec![19.99, 50.0];
        assert_eq!(product.starting_price().as_deref(), Some("USD 19.99"));

        product.denomination_type = DenominationType::Range;
        assert_eq!(product.starting_price(), None);

        product.denomination_type = DenominationType::Fixed;
        product.fixed_recipient_denominations.clear();
        assert_eq!(product.starting_price(), None);
    }

    #[test]
    fn sparse_product_uses_defaults() {
        let product: Product = serde_json::from_str(r#"{"productId": 1}"#).unwrap();
        assert_eq!(product.country_code(), None);
        assert_eq!(product.classification(), None);
        assert!(product.denomination_type.is_fixed());
        assert_eq!(product.primary_logo(), None);
    }

    #[test]
    fn nonprofit_hero_image_prefers_cover() {
        let mut nonprofit: Nonprofit = serde_json::from_str(
            r#"{"nonprofitSlug":"ocean","name":"Ocean Fund","logoUrl":"logo.png","coverImageUrl":"cover.png"}"#,
        )
        .unwrap();
        assert_eq!(nonprofit.hero_image(), Some("cover.png"));

        nonprofit.cover_image_url = Some(String::new());
        assert_eq!(nonprofit.hero_image(), Some("logo.png"));

        nonprofit.logo_url = None;
        assert_eq!(nonprofit.hero_image(), None);
    }

    #[test]
    fn nonprofit_search_fields_skip_missing_description() {
        let nonprofit: Nonprofit =
            serde_json::from_str(r#"{"nonprofitSlug":"ocean","name":"Ocean Fund"}"#).unwrap();
        assert_eq!(nonprofit.search_fields(), vec!["Ocean Fund"]);
        assert_eq!(nonprofit.listing_key(), "ocean");
    }
}
