use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RepoSummary {
    pub repo: String,
    pub path: String,
    // Root as passed on CLI (e.g., "~/src")
    #[serde(skip)]
    pub root_display: String,
    pub head: Option<String>,
    pub dirty: Option<bool>,
    pub latest_tag: Option<String>,
    pub dev_distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ReportData {
    pub tool_available: bool,
    #[serde(skip)]
    pub multi_root: bool,
    pub repos: Vec<RepoSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub roots: Vec<PathBuf>,
    pub depth: usize,
    pub tag_pattern: Option<String>,
    pub base_version: Option<String>,
}
