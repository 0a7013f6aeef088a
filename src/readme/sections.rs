//! Heading classification.
//!
//! A heading lands in at most one of five buckets. The matchers run in a
//! fixed priority order and the first hit wins, so an ambiguous heading
//! like "Setup Requirements" is prerequisites, never environment setup.
//! That ordering is a contract, which is why this is an ordered slice and
//! not a map.

/// The five section buckets of a setup guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Prerequisites,
    EnvironmentSetup,
    DatabaseSetup,
    RunningInstructions,
    IdeSetup,
}

/// Keyword matcher for one category.
struct CategoryMatcher {
    category: Category,
    keywords: &'static [&'static str],
}

/// Priority-ordered matchers. Do not reorder: classification depends on it.
const MATCHERS: &[CategoryMatcher] = &[
    CategoryMatcher {
        category: Category::Prerequisites,
        keywords: &["prerequisite", "requirement", "depend", "tool", "software"],
    },
    CategoryMatcher {
        category: Category::EnvironmentSetup,
        keywords: &["setup", "install", "configur", "environ"],
    },
    CategoryMatcher {
        category: Category::DatabaseSetup,
        keywords: &["database", "db", "data"],
    },
    CategoryMatcher {
        category: Category::RunningInstructions,
        keywords: &["run", "start", "execute"],
    },
    CategoryMatcher {
        category: Category::IdeSetup,
        keywords: &["ide", "intellij", "eclipse", "vscode", "editor"],
    },
];

/// Classify a heading by its text, or `None` if it matches no category.
///
/// An unmatched heading is not an error; it and its content are simply
/// ignored by the extractor.
pub fn classify(heading_text: &str) -> Option<Category> {
    let lowered = heading_text.to_lowercase();
    MATCHERS
        .iter()
        .find(|m| m.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|m| m.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_category() {
        assert_eq!(classify("Prerequisites"), Some(Category::Prerequisites));
        assert_eq!(classify("Environment Setup"), Some(Category::EnvironmentSetup));
        assert_eq!(classify("Database"), Some(Category::DatabaseSetup));
        assert_eq!(classify("Running the service"), Some(Category::RunningInstructions));
        assert_eq!(classify("IDE configuration"), Some(Category::EnvironmentSetup));
        assert_eq!(classify("Editor plugins"), Some(Category::IdeSetup));
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("PREREQUISITES"), Some(Category::Prerequisites));
        assert_eq!(classify("SeTuP"), Some(Category::EnvironmentSetup));
    }

    #[test]
    fn first_matching_category_wins() {
        // "requirement" (prerequisites) outranks "setup" (environment)
        assert_eq!(classify("Setup Requirements"), Some(Category::Prerequisites));
        // "setup" outranks "database"
        assert_eq!(classify("Database Setup"), Some(Category::EnvironmentSetup));
        // "run" outranks "ide" ("Running in IntelliJ")
        assert_eq!(
            classify("Running in IntelliJ"),
            Some(Category::RunningInstructions)
        );
    }

    #[test]
    fn substring_containment_not_whole_word() {
        // "Dependencies" contains "depend"
        assert_eq!(classify("Dependencies"), Some(Category::Prerequisites));
        // "Data Model" contains "data"
        assert_eq!(classify("Data Model"), Some(Category::DatabaseSetup));
    }

    #[test]
    fn unrelated_heading_is_unclassified() {
        assert_eq!(classify("License"), None);
        assert_eq!(classify("Contributing"), None);
        assert_eq!(classify("Acknowledgements"), None);
    }
}
