//! Tool usage aggregation across projects.

use crate::readme::SetupInfo;
use std::collections::BTreeMap;

/// Usage of one tool across all discovered projects.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolUsage {
    /// Tool identifier.
    pub tool: String,
    /// Number of projects whose README mentions the tool.
    pub count: usize,
    /// Share of projects using the tool, 0-100.
    pub percent: f64,
}

/// Aggregate detected tools over every project's parsed README.
///
/// Sorted by usage count descending; ties break alphabetically so the
/// listing is stable run to run.
pub fn aggregate_usage(infos: &[SetupInfo], total_projects: usize) -> Vec<ToolUsage> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for info in infos {
        for tool in &info.detected_tools {
            *counts.entry(tool.as_str()).or_default() += 1;
        }
    }

    let mut usage: Vec<ToolUsage> = counts
        .into_iter()
        .map(|(tool, count)| ToolUsage {
            tool: tool.to_string(),
            count,
            percent: if total_projects == 0 {
                0.0
            } else {
                (count as f64 / total_projects as f64) * 100.0
            },
        })
        .collect();

    usage.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tool.cmp(&b.tool)));
    usage
}
