use std::env;
use std::path::PathBuf;

use log::debug;

use crate::git::{GitRunner, VcsQuery};
use crate::scan::find_repos;
use crate::system::FsOps;
use crate::types::{Options, ReportData};

use super::repository::summarize_repo;

#[must_use]
pub fn collect_report_data(opts: &Options, fs: &dyn FsOps, git: &dyn GitRunner) -> ReportData {
    let roots: Vec<PathBuf> = if opts.roots.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        opts.roots.clone()
    };

    let mut query = VcsQuery::new(git);
    if let Some(pattern) = &opts.tag_pattern {
        query = query.with_tag_pattern(pattern.clone());
    }

    let mut data = ReportData {
        tool_available: query.is_tool_available(),
        multi_root: roots.len() > 1,
        ..ReportData::default()
    };
    if !data.tool_available {
        return data;
    }

    for root in &roots {
        let root_display = root.to_string_lossy().to_string();
        let expanded = fs.expand_tilde(root);
        let root_full = if expanded.is_absolute() {
            expanded
        } else {
            match env::current_dir() {
                Ok(cwd) => cwd.join(expanded),
                Err(_) => expanded,
            }
        };

        let repos = find_repos(fs, std::slice::from_ref(&root_full), opts.depth);
        debug!(
            "root_display={} root_full={} depth={} repos_found={}",
            root_display,
            root_full.display(),
            opts.depth,
            repos.len()
        );

        for repo in repos {
            data.repos.push(summarize_repo(
                &query,
                &repo,
                &root_display,
                opts.base_version.as_deref(),
            ));
        }
    }

    data
}
