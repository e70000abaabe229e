//! Category and country selections for the browsing screens.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::listing::Product;

/// Select value that disables category filtering.
pub const ALL: &str = "all";

/// The category (or country) a browsing screen is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    /// True if `classification` passes this selection.
    ///
    /// `All` lets everything through, including records without a
    /// classification. `Only` is exact string equality.
    pub fn admits(&self, classification: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => classification == Some(wanted.as_str()),
        }
    }

    /// The value used for `<select>` options.
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }
}

impl FromStr for CategorySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Cause categories offered on the partners screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PartnerCategory {
    Animals,
    Arts,
    Education,
    Environment,
    Health,
    Humans,
    Research,
}

impl PartnerCategory {
    /// Slug used for the select value.
    pub fn slug(&self) -> &'static str {
        self.into()
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Animals => "Animals",
            Self::Arts => "Arts",
            Self::Education => "Education",
            Self::Environment => "Environment",
            Self::Health => "Health",
            Self::Humans => "Humans",
            Self::Research => "Research",
        }
    }

    /// The directory's name for this cause. Only arts differs.
    pub fn cause(&self) -> &'static str {
        match self {
            Self::Arts => "culture",
            other => other.slug(),
        }
    }

    /// `cause` query value for a selection; empty for `All` or an unknown slug.
    pub fn cause_for(selection: &CategorySelection) -> &'static str {
        match selection {
            CategorySelection::All => "",
            CategorySelection::Only(slug) => PartnerCategory::from_str(slug)
                .map(|category| category.cause())
                .unwrap_or(""),
        }
    }
}

/// One entry of the marketplace's country select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    pub code: String,
    pub name: String,
}

/// Distinct countries present in `products`, sorted by display name.
///
/// Products missing either the ISO code or the name are skipped. When two
/// products disagree on the name for a code, the last one seen wins.
pub fn countries_from_products(products: &[Product]) -> Vec<CountryOption> {
    products
        .iter()
        .filter_map(|product| {
            let country = product.country.as_ref()?;
            Some((country.iso_name.clone()?, country.name.clone()?))
        })
        .rev()
        .unique_by(|(code, _)| code.clone())
        .map(|(code, name)| CountryOption { code, name })
        .sorted_by_cached_key(|country| (collation_key(&country.name), country.name.clone()))
        .collect()
}

/// Sort key that ignores case and Latin diacritics, so "Åland Islands"
/// sorts next to "Albania" rather than after "Zimbabwe".
fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' | 'ı' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ț' => 't',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn product(id: u64, country: Option<(&str, &str)>) -> Product {
        let country = match country {
            Some((code, name)) => format!(r#","country":{{"isoName":"{code}","name":"{name}"}}"#),
            None => String::new(),
        };
        serde_json::from_str(&format!(r#"{{"productId":{id}{country}}}"#)).unwrap()
    }

    #[test]
    fn all_selection_parses_and_admits_everything() {
        let all: CategorySelection = "all".parse().unwrap();
        assert_eq!(all, CategorySelection::All);
        assert_eq!("".parse::<CategorySelection>().unwrap(), CategorySelection::All);
        assert!(all.admits(None));
        assert!(all.admits(Some("US")));
        assert_eq!(all.to_string(), "all");
    }

    #[test]
    fn only_selection_is_exact_match() {
        let us: CategorySelection = "US".parse().unwrap();
        assert!(us.admits(Some("US")));
        assert!(!us.admits(Some("us")));
        assert!(!us.admits(Some("USA")));
        assert!(!us.admits(None));
    }

    #[test]
    fn partner_categories_keep_menu_order() {
        let slugs: Vec<_> = PartnerCategory::iter().map(|c| c.slug()).collect();
        assert_eq!(
            slugs,
            vec!["animals", "arts", "education", "environment", "health", "humans", "research"]
        );
    }

    #[test]
    fn arts_maps_to_culture_cause() {
        assert_eq!(PartnerCategory::Arts.cause(), "culture");
        assert_eq!(PartnerCategory::Health.cause(), "health");
        assert_eq!(PartnerCategory::cause_for(&CategorySelection::All), "");
        assert_eq!(
            PartnerCategory::cause_for(&CategorySelection::Only("arts".into())),
            "culture"
        );
        assert_eq!(
            PartnerCategory::cause_for(&CategorySelection::Only("bogus".into())),
            ""
        );
    }

    #[test]
    fn countries_are_distinct_and_sorted_by_name() {
        let products = vec![
            product(1, Some(("US", "United States"))),
            product(2, Some(("DE", "Germany"))),
            product(3, None),
            product(4, Some(("US", "United States"))),
            product(5, Some(("BR", "Brazil"))),
        ];
        let countries = countries_from_products(&products);
        let codes: Vec<_> = countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["BR", "DE", "US"]);
        assert_eq!(countries[2].name, "United States");
    }

    #[test]
    fn accented_and_lowercase_names_sort_alphabetically() {
        let products = vec![
            product(1, Some(("ZW", "Zimbabwe"))),
            product(2, Some(("AX", "Åland Islands"))),
            product(3, Some(("CI", "Côte d'Ivoire"))),
            product(4, Some(("AL", "Albania"))),
            product(5, Some(("CO", "Colombia"))),
            product(6, Some(("TR", "Türkiye"))),
            product(7, Some(("XX", "eSwatini"))),
        ];
        let names: Vec<_> = countries_from_products(&products)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Åland Islands",
                "Albania",
                "Colombia",
                "Côte d'Ivoire",
                "eSwatini",
                "Türkiye",
                "Zimbabwe",
            ]
        );
    }
}
