//! Tool detection by keyword matching.
//!
//! Scans free text for mentions of known tools using a fixed table of
//! case-insensitive, word-boundary patterns. The scan covers the whole
//! document, not just classified setup sections, and does not understand
//! negation: "we do NOT use Docker" still detects docker. Both are
//! documented limitations of the heuristic, preserved on purpose.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// One entry in the detection table: tool identifier plus its pattern.
struct ToolPattern {
    tool: &'static str,
    pattern: Regex,
}

static TOOL_PATTERNS: LazyLock<Vec<ToolPattern>> = LazyLock::new(|| {
    let table: &[(&str, &str)] = &[
        ("java", r"\bjava\b|\bjdk\b|\bjre\b"),
        ("maven", r"\bmaven\b|\bmvn\b"),
        ("gradle", r"\bgradle\b"),
        ("node", r"\bnode(?:js)?\b"),
        ("npm", r"\bnpm\b"),
        ("python3", r"\bpython(?:3)?\b|\bpip(?:3)?\b"),
        ("docker", r"\bdocker\b"),
        ("docker-compose", r"\bdocker[ -]compose\b"),
        ("git", r"\bgit\b"),
        ("mongodb", r"\bmongo(?:db)?\b"),
        ("postgresql", r"\bpostgre(?:s|sql)?\b"),
        ("mysql", r"\bmysql\b"),
        ("redis", r"\bredis\b"),
        ("vscode", r"\bvs ?code\b|\bvisual studio code\b"),
        ("intellij-idea", r"\bintellij\b|\bidea\b"),
    ];

    table
        .iter()
        .map(|(tool, pattern)| ToolPattern {
            tool,
            pattern: Regex::new(&format!("(?i){}", pattern))
                .unwrap_or_else(|e| panic!("invalid pattern for {}: {}", tool, e)),
        })
        .collect()
});

/// Detect known tools mentioned anywhere in `text`.
///
/// The result is a set: evaluation order never affects the output, and a
/// tool mentioned ten times is detected once.
pub fn detect(text: &str) -> BTreeSet<String> {
    TOOL_PATTERNS
        .iter()
        .filter(|tp| tp.pattern.is_match(text))
        .map(|tp| tp.tool.to_string())
        .collect()
}
