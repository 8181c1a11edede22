use std::collections::{HashMap, HashSet};
use std::fs;

/// Bijective mapping between ISO 639-3 codes and (macro-)language names,
/// e.g. by_code = {"eng": "English", ...}; by_name = {"English": "eng", ...}.
/// Loaded once per run from a two-column tab-separated table.
#[derive(Debug, Clone, Default)]
pub struct LangCodes {
    pub by_code: HashMap<String, String>,
    pub by_name: HashMap<String, String>,
}

impl LangCodes {
    /// Name shown in progress messages; falls back to the code itself for
    /// codes outside the ISO table (user-supplied literals, see `normalize`).
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        match self.by_code.get(code) {
            Some(name) => name.as_str(),
            None => code,
        }
    }

    /// Label for the "Looking for intersection of ..." line: "English (eng)"
    /// for codes in the table, the bare token for literal codes kept by
    /// `normalize`.
    pub fn describe(&self, code: &str) -> String {
        match self.by_code.get(code) {
            Some(name) => format!("{} ({})", name, code),
            None => code.to_string(),
        }
    }

    /// Normalize user-supplied language names/codes to codes (eg. English to eng).
    /// A token that is neither a known code nor a known name is kept as a
    /// literal code after a warning, matching the original tool's behavior.
    pub fn normalize(&self, tokens: &[String]) -> HashSet<String> {
        let mut lang_set = HashSet::new();
        for token in tokens {
            if self.by_code.contains_key(token) {
                lang_set.insert(token.clone());
            } else if let Some(code) = self.by_name.get(token) {
                lang_set.insert(code.clone());
            } else {
                eprintln!(
                    "Warning: \"{}\" is neither an ISO 639-3 code nor ISO 639-3 (macro-)language name.  I'll try anyways.",
                    token
                );
                lang_set.insert(token.clone());
            }
        }
        lang_set
    }
}

pub fn parse_lang_codes(file_path: &str) -> Result<LangCodes, String> {
    let contents = fs::read_to_string(file_path)
        .map_err(|e| format!("Failed to read language code table {}: {}", file_path, e))?;

    let mut table = LangCodes::default();
    for (line_no, line) in contents.lines().enumerate() {
        let mut fields = line.trim_end_matches(['\r', '\n']).splitn(2, '\t');
        match (fields.next(), fields.next()) {
            (Some(code), Some(name)) if !code.is_empty() => {
                table.by_code.insert(code.to_string(), name.to_string());
                table.by_name.insert(name.to_string(), code.to_string());
            }
            _ => {
                return Err(format!(
                    "Malformed line {} in language code table {}: expected 'code<TAB>name'",
                    line_no + 1,
                    file_path
                ));
            }
        }
    }
    Ok(table)
}
