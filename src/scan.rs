use std::collections::HashSet;
use std::path::PathBuf;

use log::debug;
use walkdir::WalkDir;

use crate::system::FsOps;

/// Working trees at or below `roots`, at most `depth` directory levels down.
#[must_use]
pub fn find_repos(fs: &dyn FsOps, roots: &[PathBuf], depth: usize) -> Vec<PathBuf> {
    let mut repos = HashSet::<PathBuf>::new();

    for root in roots {
        let root = fs.expand_tilde(root);
        if !root.exists() {
            debug!("root missing: {}", root.display());
            continue;
        }

        if fs.is_repo(&root) {
            debug!("repo: {}", root.display());
            repos.insert(root.clone());
            continue;
        }

        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(depth)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git")
            .filter_map(Result::ok)
        {
            let p = entry.path();
            if entry.file_type().is_dir() && fs.is_repo(p) {
                debug!("repo: {}", p.display());
                repos.insert(p.to_path_buf());
            }
        }
    }

    let mut v: Vec<_> = repos.into_iter().collect();
    v.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
    v
}
