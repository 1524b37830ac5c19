use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Food,
    Product,
    Nature,
    Architecture,
}

impl Category {
    /// Every category in declared order, as offered by the gallery tabs.
    pub const TABS: [Category; 5] = [
        Category::All,
        Category::Food,
        Category::Product,
        Category::Nature,
        Category::Architecture,
    ];

    /// The categories that own images. `All` is their union.
    pub const CONCRETE: [Category; 4] = [
        Category::Food,
        Category::Product,
        Category::Nature,
        Category::Architecture,
    ];

    pub const DEFAULT: Category = Category::Food;

    /// Resolves an external token into a category, substituting the default
    /// for anything absent or unrecognised.
    pub fn resolve(token: Option<&str>) -> Self {
        token
            .and_then(|value| value.parse().ok())
            .unwrap_or(Self::DEFAULT)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Food => "food",
            Self::Product => "product",
            Self::Nature => "nature",
            Self::Architecture => "architecture",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Food => "FOOD",
            Self::Product => "PRODUCT",
            Self::Nature => "NATURE",
            Self::Architecture => "ARCHITECTURE",
        }
    }

    pub fn is_synthetic(self) -> bool {
        matches!(self, Self::All)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Accepts exactly the five lower-case names; no trimming or case folding.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::TABS
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| DomainError::UnknownCategory(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_resolves_to_food() {
        assert_eq!(Category::resolve(Some("sculpture")), Category::Food);
    }

    #[test]
    fn missing_or_blank_token_resolves_to_food() {
        assert_eq!(Category::resolve(None), Category::Food);
        assert_eq!(Category::resolve(Some("")), Category::Food);
        assert_eq!(Category::resolve(Some("   ")), Category::Food);
    }

    #[test]
    fn known_tokens_resolve_to_themselves() {
        for category in Category::TABS {
            assert_eq!(Category::resolve(Some(category.as_str())), category);
        }
    }

    #[test]
    fn tokens_outside_the_closed_set_resolve_to_food() {
        for token in ["NATURE", " nature ", "All", "Product\n", "Architecture"] {
            assert_eq!(Category::resolve(Some(token)), Category::Food, "{token:?}");
        }
    }

    #[test]
    fn strict_parse_reports_unknown_token() {
        assert!(matches!(
            "sculpture".parse::<Category>(),
            Err(DomainError::UnknownCategory(token)) if token == "sculpture"
        ));
    }

    #[test]
    fn only_all_is_synthetic() {
        assert!(Category::All.is_synthetic());
        assert!(Category::CONCRETE
            .iter()
            .all(|category| !category.is_synthetic()));
    }
}
