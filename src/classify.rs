//! Raw tag to broad category classification.
//!
//! Each raw tag is normalized (trimmed, lowercased) and matched by exact
//! membership against a fixed table. Recommended and Free are additive and
//! tested for every tag. The remaining rules form a priority chain: the first
//! matching rule wins for that tag, and the chain is skipped entirely for a
//! tag that already matched Free.
//!
//! Priority: Free > Machine Learning > Databases > Beginner > Web >
//! Algorithms > Math > Security > Systems > Tools > Interviews > Projects >
//! Video > Book > Freemium > C Programming > Java > Programming.

use crate::category::Category;
use std::collections::BTreeSet;

/// One row of the classification table.
#[derive(Debug)]
pub struct TagRule {
    pub category: Category,
    pub matches: &'static [&'static str],
}

const RECOMMENDED: TagRule = TagRule {
    category: Category::Recommended,
    matches: &["recommended"],
};

const FREE: TagRule = TagRule {
    category: Category::Free,
    matches: &["free", "free to audit"],
};

/// Priority chain consulted after Free; order is significant.
pub const PRIORITY_RULES: &[TagRule] = &[
    TagRule {
        category: Category::MachineLearning,
        matches: &["ai", "machine learning"],
    },
    TagRule {
        category: Category::Databases,
        matches: &["sql", "database", "databases"],
    },
    TagRule {
        category: Category::Beginner,
        matches: &["beginner"],
    },
    TagRule {
        category: Category::Web,
        matches: &[
            "web",
            "html",
            "css",
            "javascript",
            "frontend",
            "backend",
            "full-stack",
        ],
    },
    TagRule {
        category: Category::Algorithms,
        matches: &["algorithms", "data structures"],
    },
    TagRule {
        category: Category::Math,
        matches: &["theory", "discrete math", "math", "calculus"],
    },
    TagRule {
        category: Category::Security,
        matches: &["security", "cybersecurity"],
    },
    TagRule {
        category: Category::Systems,
        matches: &["systems", "operating systems", "hardware"],
    },
    TagRule {
        category: Category::Tools,
        matches: &["tools", "command line", "git", "github", "version control"],
    },
    TagRule {
        category: Category::Interviews,
        matches: &["interviews", "system design"],
    },
    TagRule {
        category: Category::Projects,
        matches: &["projects", "project-based", "practice"],
    },
    TagRule {
        category: Category::Video,
        matches: &["video", "youtube", "playlist", "channel", "course"],
    },
    TagRule {
        category: Category::Book,
        matches: &["book"],
    },
    TagRule {
        category: Category::Freemium,
        matches: &["freemium"],
    },
    TagRule {
        category: Category::CProgramming,
        matches: &["c programming"],
    },
    TagRule {
        category: Category::Java,
        matches: &["java"],
    },
    TagRule {
        category: Category::Programming,
        matches: &["programming", "oop", "languages", "functional"],
    },
];

impl TagRule {
    fn accepts(&self, normalized: &str) -> bool {
        self.matches.iter().any(|entry| *entry == normalized)
    }
}

pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Categories contributed by a single raw tag.
fn classify_tag(raw: &str, out: &mut BTreeSet<Category>) {
    let tag = normalize_tag(raw);
    if RECOMMENDED.accepts(&tag) {
        out.insert(RECOMMENDED.category);
    }
    if FREE.accepts(&tag) {
        out.insert(FREE.category);
        return;
    }
    if let Some(rule) = PRIORITY_RULES.iter().find(|rule| rule.accepts(&tag)) {
        out.insert(rule.category);
    }
}

/// Map a resource's raw tags onto the set of broad categories.
///
/// Unrecognized tags contribute nothing. The result is a set, so several raw
/// tags landing on the same category count once.
pub fn classify<S: AsRef<str>>(raw_tags: &[S]) -> BTreeSet<Category> {
    let mut categories = BTreeSet::new();
    for tag in raw_tags {
        classify_tag(tag.as_ref(), &mut categories);
    }
    categories
}
