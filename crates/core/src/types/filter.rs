//! Product and game grid filter selection.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which cards of a product grid are visible.
///
/// The storefront's filter buttons send either the wildcard `todos` or a
/// concrete category/platform value.
///
/// ```
/// use game_mania_core::FilterSelection;
///
/// assert_eq!(FilterSelection::parse("todos"), FilterSelection::All);
/// assert!(FilterSelection::parse("xbox").admits("xbox"));
/// assert!(!FilterSelection::parse("xbox").admits("playstation"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterSelection {
    /// Show every card.
    #[default]
    All,
    /// Show only cards whose attribute equals this value exactly.
    Only(String),
}

impl FilterSelection {
    /// Wire value selecting every card.
    pub const ALL: &'static str = "todos";

    /// Parse a filter button value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    /// Whether a card carrying `attribute` is visible under this selection.
    #[must_use]
    pub fn admits(&self, attribute: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == attribute,
        }
    }
}

impl From<String> for FilterSelection {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FilterSelection> for String {
    fn from(selection: FilterSelection) -> Self {
        selection.to_string()
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(value) => f.write_str(value),
        }
    }
}
