//! Vendor categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not one of the known vendor categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown vendor category: {0:?}")]
pub struct CategoryError(pub String);

/// The kind of business a vendor runs.
///
/// Serialized as the lowercase literal (`"restaurant"`, `"supermarket"`,
/// `"grocery"`). Food items carry their category as a free string; only items
/// whose category parses into one of these variants appear in the grouped
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorCategory {
    Restaurant,
    Supermarket,
    Grocery,
}

impl VendorCategory {
    /// Every category, in the order the grouped catalog lists them.
    pub const ALL: [Self; 3] = [Self::Restaurant, Self::Supermarket, Self::Grocery];

    /// Returns the wire literal for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Supermarket => "supermarket",
            Self::Grocery => "grocery",
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VendorCategory {
    type Err = CategoryError;

    /// Parses the exact lowercase literal. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}
