use crate::ReportData;

/// Pretty-printed JSON for `data`.
///
/// # Errors
/// Returns the `serde_json` error if serialization fails.
pub fn to_json(data: &ReportData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}
