mod repos;
mod style;

pub use style::TabStyle;

use crate::ReportData;

#[must_use]
pub fn format_tab(data: &ReportData, style: TabStyle) -> String {
    repos::render(data, style)
}
