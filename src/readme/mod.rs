//! README interpretation.
//!
//! Turns a loosely structured README into a [`SetupInfo`]: five ordered
//! instruction buckets keyed by heading classification, plus the set of
//! tools mentioned anywhere in the document.
//!
//! Capture rule: a classified heading owns every following block up to the
//! next heading of *any* level. The extractor does not distinguish a
//! sub-heading of the current section from a sibling section; both end the
//! capture. Content before the first heading is never captured.

pub mod markdown;
pub mod sections;

use crate::tools::detector;
use markdown::Block;
use sections::Category;
use std::collections::BTreeSet;

/// The structured result of interpreting one project's README.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupInfo {
    /// Entries under prerequisites/requirements/dependencies headings.
    pub prerequisites: Vec<String>,
    /// Entries under setup/install/configuration headings.
    pub environment_setup: Vec<String>,
    /// Entries under database/data headings.
    pub database_setup: Vec<String>,
    /// Entries under run/start/execute headings.
    pub running_instructions: Vec<String>,
    /// Entries under IDE/editor headings.
    pub ide_setup: Vec<String>,
    /// Tools detected anywhere in the raw document text.
    pub detected_tools: BTreeSet<String>,
}

impl SetupInfo {
    /// Whether no section content was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.prerequisites.is_empty()
            && self.environment_setup.is_empty()
            && self.database_setup.is_empty()
            && self.running_instructions.is_empty()
            && self.ide_setup.is_empty()
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Prerequisites => &mut self.prerequisites,
            Category::EnvironmentSetup => &mut self.environment_setup,
            Category::DatabaseSetup => &mut self.database_setup,
            Category::RunningInstructions => &mut self.running_instructions,
            Category::IdeSetup => &mut self.ide_setup,
        }
    }
}

/// Extract setup information from README markdown.
///
/// Entries accumulate in document order; two "Setup" sections both append
/// to `environment_setup`, never overwrite it. Tool detection runs over
/// the entire raw text, independent of heading classification.
pub fn extract(markdown_text: &str) -> SetupInfo {
    let blocks = markdown::parse_blocks(markdown_text);
    let mut info = SetupInfo::default();

    let mut idx = 0;
    while idx < blocks.len() {
        let Block::Heading { text, .. } = &blocks[idx] else {
            idx += 1;
            continue;
        };

        let Some(category) = sections::classify(text) else {
            // Unrecognized heading: silently ignored, by policy
            idx += 1;
            continue;
        };

        idx += 1;
        let bucket = info.bucket_mut(category);
        while idx < blocks.len() {
            match &blocks[idx] {
                Block::Heading { .. } => break,
                Block::Paragraph(text) | Block::CodeBlock(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        bucket.push(trimmed.to_string());
                    }
                }
                Block::List(items) => {
                    bucket.extend(
                        items
                            .iter()
                            .map(|i| i.trim().to_string())
                            .filter(|i| !i.is_empty()),
                    );
                }
            }
            idx += 1;
        }
    }

    info.detected_tools = detector::detect(markdown_text);
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "\
# Payment Service

Handles card payments.

## Prerequisites

- Docker 20+
- Java 17

## Setup

- Copy .env.example to .env
- Run mvn package

## Run

- docker-compose up
- Visit localhost:8080
";

    #[test]
    fn extracts_three_sections_with_two_items_each() {
        let info = extract(BASIC);
        assert_eq!(info.prerequisites, vec!["Docker 20+", "Java 17"]);
        assert_eq!(
            info.environment_setup,
            vec!["Copy .env.example to .env", "Run mvn package"]
        );
        assert_eq!(
            info.running_instructions,
            vec!["docker-compose up", "Visit localhost:8080"]
        );
        assert!(info.database_setup.is_empty());
        assert!(info.ide_setup.is_empty());
    }

    #[test]
    fn content_before_first_heading_is_never_captured() {
        let info = extract("orphan intro text\n\n## Setup\n\n- step one\n");
        assert_eq!(info.environment_setup, vec!["step one"]);
        assert!(info.prerequisites.is_empty());
    }

    #[test]
    fn intro_paragraph_under_title_heading_is_not_captured() {
        // "# Payment Service" classifies into no category, so the
        // description below it lands nowhere
        let info = extract(BASIC);
        assert!(!info
            .environment_setup
            .iter()
            .any(|e| e.contains("Handles card payments")));
    }

    #[test]
    fn unmatched_heading_contributes_nothing() {
        let info = extract("## License\n\nMIT, do whatever.\n");
        assert!(info.is_empty());
    }

    #[test]
    fn same_category_headings_accumulate_in_order() {
        let md = "## Setup\n\n- first\n\n## Additional Setup\n\n- second\n";
        let info = extract(md);
        assert_eq!(info.environment_setup, vec!["first", "second"]);
    }

    #[test]
    fn nested_subheading_terminates_capture() {
        let md = "## Setup\n\n- captured\n\n### Notes on setup internals\n\n- also captured, separate heading\n\n## Other\n";
        let info = extract(md);
        // "### Notes on setup internals" contains "setup" so it re-opens
        // the bucket, but the point is the first capture stopped there
        assert_eq!(
            info.environment_setup,
            vec!["captured", "also captured, separate heading"]
        );
    }

    #[test]
    fn subheading_of_any_level_stops_capture() {
        let md = "## Run\n\n- go\n\n### History\n\n- not captured\n";
        let info = extract(md);
        assert_eq!(info.running_instructions, vec!["go"]);
    }

    #[test]
    fn code_blocks_are_captured_verbatim() {
        let md = "## Setup\n\n```sh\nnpm install\nnpm run build\n```\n";
        let info = extract(md);
        assert_eq!(info.environment_setup, vec!["npm install\nnpm run build"]);
    }

    #[test]
    fn paragraphs_and_lists_mix_in_document_order() {
        let md = "## Setup\n\nFirst, clone the repo.\n\n- install deps\n\nThen build.\n";
        let info = extract(md);
        assert_eq!(
            info.environment_setup,
            vec!["First, clone the repo.", "install deps", "Then build."]
        );
    }

    #[test]
    fn detected_tools_scan_the_whole_document() {
        // redis appears outside any classified section
        let md = "# Intro\n\nWe cache in Redis.\n\n## Setup\n\n- install java\n";
        let info = extract(md);
        assert!(info.detected_tools.contains("redis"));
        assert!(info.detected_tools.contains("java"));
    }

    #[test]
    fn ambiguous_heading_uses_priority_order() {
        let md = "## Setup Requirements\n\n- a tool\n";
        let info = extract(md);
        assert_eq!(info.prerequisites, vec!["a tool"]);
        assert!(info.environment_setup.is_empty());
    }

    #[test]
    fn database_setup_heading_goes_to_environment_bucket() {
        // "setup" outranks "database" in the priority order; this is the
        // documented contract, not an accident
        let md = "## Database Setup\n\n- createdb app\n";
        let info = extract(md);
        assert_eq!(info.environment_setup, vec!["createdb app"]);
        assert!(info.database_setup.is_empty());
    }

    #[test]
    fn database_heading_without_setup_keyword_goes_to_database_bucket() {
        let md = "## Database\n\n- createdb app\n";
        let info = extract(md);
        assert_eq!(info.database_setup, vec!["createdb app"]);
    }

    #[test]
    fn empty_document_extracts_nothing() {
        let info = extract("");
        assert!(info.is_empty());
        assert!(info.detected_tools.is_empty());
    }

    #[test]
    fn setext_headings_classify_like_atx() {
        let md = "Setup\n-----\n\n- step\n";
        let info = extract(md);
        assert_eq!(info.environment_setup, vec!["step"]);
    }
}
