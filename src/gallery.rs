//! Gallery categories
//!
//! Items carry an optional category key-value attached at submission.
//! Filtering never reorders items.

use crate::error::{Error, Result};
use crate::types::PinnedItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A gallery category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Pseudo-category matching every item
    #[default]
    All,
    Art,
    Music,
    Collectibles,
    Gaming,
    Sports,
    VirtualRealEstate,
    DomainNames,
    Memes,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 9] = [
        Category::All,
        Category::Art,
        Category::Music,
        Category::Collectibles,
        Category::Gaming,
        Category::Sports,
        Category::VirtualRealEstate,
        Category::DomainNames,
        Category::Memes,
    ];

    /// Key stored in pin metadata
    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Art => "art",
            Category::Music => "music",
            Category::Collectibles => "collectibles",
            Category::Gaming => "gaming",
            Category::Sports => "sports",
            Category::VirtualRealEstate => "virtualRealEstate",
            Category::DomainNames => "domainNames",
            Category::Memes => "memes",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Art => "Art",
            Category::Music => "Music",
            Category::Collectibles => "Collectibles",
            Category::Gaming => "Gaming",
            Category::Sports => "Sports",
            Category::VirtualRealEstate => "Virtual Real Estate",
            Category::DomainNames => "Domain Names",
            Category::Memes => "Memes",
        }
    }

    /// Whether an item's stored category falls under this one
    pub fn includes(self, item_category: Option<&str>) -> bool {
        match self {
            Category::All => true,
            other => item_category.is_some_and(|c| c.eq_ignore_ascii_case(other.key())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts either the metadata key or the label, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::validation(format!("unknown category '{wanted}'")))
    }
}

/// Items belonging to `category`, in their original order
pub fn filter_by_category(items: &[PinnedItem], category: Category) -> Vec<PinnedItem> {
    items
        .iter()
        .filter(|item| category.includes(item.category.as_deref()))
        .cloned()
        .collect()
}
