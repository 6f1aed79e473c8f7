use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Panel, object::Columns},
};

use crate::types::{RepoSummary, ReportData};

use super::{TabStyle, style::apply_style};

const SHORT_HASH_LEN: usize = 12;
const TITLE: &str = "Repositories";

pub(crate) fn render(data: &ReportData, style: TabStyle) -> String {
    if data.repos.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["(none)"]);
        let mut table = builder.build();
        apply_style(&mut table, style);
        table.with(Panel::header(TITLE));
        return table.to_string();
    }

    let show_root = data.multi_root;
    let show_version = data.repos.iter().any(|r| r.version.is_some());
    let show_error = data.repos.iter().any(|r| r.error.is_some());

    let mut header = vec!["Repo"];
    if show_root {
        header.push("Root");
    }
    header.extend(["Head", "Dirty", "Tag", "Distance"]);
    if show_version {
        header.push("Version");
    }
    if show_error {
        header.push("Error");
    }
    let distance_col = header.iter().position(|h| *h == "Distance").unwrap_or(0);

    let mut builder = Builder::default();
    builder.push_record(header);
    for entry in &data.repos {
        builder.push_record(row(entry, show_root, show_version, show_error));
    }

    let mut table = builder.build();
    apply_style(&mut table, style);
    table.with(Modify::new(Columns::new(distance_col..=distance_col)).with(Alignment::right()));
    table.with(Panel::header(TITLE));
    table.to_string()
}

fn row(entry: &RepoSummary, show_root: bool, show_version: bool, show_error: bool) -> Vec<String> {
    let mut cells = vec![entry.repo.clone()];
    if show_root {
        cells.push(entry.root_display.clone());
    }
    cells.push(
        entry
            .head
            .as_deref()
            .map_or_else(|| "n/a".to_string(), short_hash),
    );
    cells.push(
        match entry.dirty {
            Some(true) => "yes",
            Some(false) => "no",
            None => "n/a",
        }
        .to_string(),
    );
    cells.push(entry.latest_tag.clone().unwrap_or_else(|| "-".to_string()));
    cells.push(
        entry
            .dev_distance
            .map_or_else(|| "n/a".to_string(), |d| d.to_string()),
    );
    if show_version {
        cells.push(entry.version.clone().unwrap_or_default());
    }
    if show_error {
        cells.push(entry.error.clone().unwrap_or_default());
    }
    cells
}

fn short_hash(head: &str) -> String {
    head.chars().take(SHORT_HASH_LEN).collect()
}
