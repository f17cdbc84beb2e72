//! Broad filter categories.
//!
//! Raw resource tags are free-form; the filter bar only ever shows the closed
//! set of labels defined here. Declaration order is the curated display order,
//! so `Ord` (and therefore any `BTreeSet<Category>`) iterates in the order the
//! buttons appear.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Label of the synthetic selection that shows every card.
pub const SHOW_ALL_LABEL: &str = "Show All";

/// One of the fixed broad labels a resource can be filtered by.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Recommended,
    Programming,
    CProgramming,
    Java,
    Algorithms,
    Systems,
    Security,
    Databases,
    Math,
    Beginner,
    Web,
    MachineLearning,
    Tools,
    Interviews,
    Projects,
    Video,
    Book,
    Free,
    Freemium,
}

impl Category {
    /// Every category in master display order.
    pub const ALL: [Category; 19] = [
        Category::Recommended,
        Category::Programming,
        Category::CProgramming,
        Category::Java,
        Category::Algorithms,
        Category::Systems,
        Category::Security,
        Category::Databases,
        Category::Math,
        Category::Beginner,
        Category::Web,
        Category::MachineLearning,
        Category::Tools,
        Category::Interviews,
        Category::Projects,
        Category::Video,
        Category::Book,
        Category::Free,
        Category::Freemium,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Recommended => "Recommended",
            Category::Programming => "Programming",
            Category::CProgramming => "C Programming",
            Category::Java => "Java",
            Category::Algorithms => "Algorithms",
            Category::Systems => "Systems",
            Category::Security => "Security",
            Category::Databases => "Databases",
            Category::Math => "Math",
            Category::Beginner => "Beginner",
            Category::Web => "Web",
            Category::MachineLearning => "Machine Learning",
            Category::Tools => "Tools",
            Category::Interviews => "Interviews",
            Category::Projects => "Projects",
            Category::Video => "Video",
            Category::Book => "Book",
            Category::Free => "Free",
            Category::Freemium => "Freemium",
        }
    }

    /// Parse a display label, ignoring case and surrounding whitespace.
    pub fn from_label(value: &str) -> Option<Self> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_label(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category '{value}'")))
    }
}

/// A filter-bar selection: either the "Show All" sentinel or one category.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FilterSelection {
    #[default]
    ShowAll,
    Only(Category),
}

impl FilterSelection {
    pub fn label(self) -> &'static str {
        match self {
            FilterSelection::ShowAll => SHOW_ALL_LABEL,
            FilterSelection::Only(category) => category.label(),
        }
    }

    /// Parse a button label; accepts "Show All" or any category label.
    pub fn from_label(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case(SHOW_ALL_LABEL) {
            return Some(FilterSelection::ShowAll);
        }
        Category::from_label(value).map(FilterSelection::Only)
    }

    /// Whether a card classified into `categories` passes this selection.
    pub fn admits(self, categories: &BTreeSet<Category>) -> bool {
        match self {
            FilterSelection::ShowAll => true,
            FilterSelection::Only(category) => categories.contains(&category),
        }
    }
}

impl From<Category> for FilterSelection {
    fn from(category: Category) -> Self {
        FilterSelection::Only(category)
    }
}

impl Serialize for FilterSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn labels_parse_back_case_insensitively() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
            assert_eq!(
                Category::from_label(&category.label().to_uppercase()),
                Some(category)
            );
        }
        assert_eq!(
            Category::from_label("  machine learning "),
            Some(Category::MachineLearning)
        );
        assert_eq!(Category::from_label("Theory"), None);
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&Category::CProgramming).unwrap();
        assert_eq!(json, "\"C Programming\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::CProgramming);

        let err = serde_json::from_str::<Category>("\"Certificate\"").unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn selection_labels_and_admission() {
        assert_eq!(
            FilterSelection::from_label("show all"),
            Some(FilterSelection::ShowAll)
        );
        assert_eq!(
            FilterSelection::from_label("Web"),
            Some(FilterSelection::Only(Category::Web))
        );
        assert_eq!(FilterSelection::from_label("nope"), None);
        assert_eq!(FilterSelection::default().label(), "Show All");

        let set = BTreeSet::from([Category::Web, Category::Free]);
        assert!(FilterSelection::ShowAll.admits(&BTreeSet::new()));
        assert!(FilterSelection::Only(Category::Web).admits(&set));
        assert!(!FilterSelection::Only(Category::Book).admits(&set));
    }
}
