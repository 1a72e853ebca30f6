/// Strips invisible marker characters and collapses runs of whitespace.
pub(crate) fn clean_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans an optional field, treating blank values as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| clean_text(&raw))
        .filter(|cleaned| !cleaned.is_empty())
}
