use std::collections::HashSet;
use std::fs;

/// Pick the driving language from the precomputed frequency ranking, a
/// whitespace-separated list of codes sorted by per-language sentence
/// count. The list is scanned in its given order and the last code that
/// belongs to the requested set wins; the ranking's sort direction decides
/// which end of the frequency range that is. The rule is tied to how the
/// ranking file is generated, so it must stay "last match wins" even if
/// the sort direction is ever revisited.
pub fn pick_driving_language(
    file_path: &str,
    lang_set: &HashSet<String>,
) -> Result<Option<String>, String> {
    let contents = fs::read_to_string(file_path)
        .map_err(|e| format!("Failed to read frequency ranking {}: {}", file_path, e))?;

    let mut driving: Option<String> = None;
    for code in contents.split_whitespace() {
        if lang_set.contains(code) {
            driving = Some(code.to_string());
        }
    }
    Ok(driving)
}
