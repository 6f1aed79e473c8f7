use std::path::Path;

use log::warn;

use crate::error::VcsError;
use crate::git::{VcsQuery, format_dev_version};
use crate::types::RepoSummary;

pub(crate) fn summarize_repo(
    query: &VcsQuery<'_>,
    repo: &Path,
    root_display: &str,
    base_version: Option<&str>,
) -> RepoSummary {
    let name = repo
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| repo.display().to_string());

    let mut summary = RepoSummary {
        repo: name,
        path: repo.display().to_string(),
        root_display: root_display.to_string(),
        ..RepoSummary::default()
    };
    let mut first_error: Option<VcsError> = None;

    summary.head = keep(query.head_revision(repo), repo, &mut first_error);
    summary.dirty = keep(query.is_dirty(repo), repo, &mut first_error);
    // Distance is measured from the tag shown in the row; a failed listing leaves both empty.
    if let Some(tag) = keep(query.latest_version_tag(repo), repo, &mut first_error) {
        summary.dev_distance = keep(
            query.distance_since(repo, tag.as_deref()),
            repo,
            &mut first_error,
        );
        summary.latest_tag = tag;
    }

    // No label unless both head and dirty state are known.
    if let (Some(base), Some(head), Some(dirty)) = (base_version, &summary.head, summary.dirty) {
        summary.version = Some(format_dev_version(base, head, dirty));
    }

    summary.error = first_error.map(|e| e.to_string());
    summary
}

fn keep<T>(result: Result<T, VcsError>, repo: &Path, first_error: &mut Option<VcsError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{}: {err}", repo.display());
            if first_error.is_none() {
                *first_error = Some(err);
            }
            None
        }
    }
}
