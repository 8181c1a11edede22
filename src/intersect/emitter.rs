use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::intersect::membership::AlignmentTable;

#[derive(Debug, Default)]
pub struct EmitOutcome {
    /// Alignment groups written, one line per language per group.
    pub emitted_groups: u64,
    /// Complete groups that could not be written because some language's
    /// output destination failed to open.
    pub skipped_groups: u64,
    /// Names of the destinations that did open (empty files included).
    pub output_files: Vec<String>,
}

/// Opens `prefix + code` for every requested language, then walks the
/// alignment groups in creation order and writes every group whose
/// language set is exactly the requested set: the Kth emitted group
/// occupies line K of every output file. Destinations that fail to open
/// are logged and left out; groups needing them are counted as skipped
/// rather than aborting the run. Every opened file exists afterwards even
/// when zero groups are emitted.
pub fn emit_complete_groups(
    table: &AlignmentTable,
    lang_set: &HashSet<String>,
    corpus_prefix: &str,
) -> Result<EmitOutcome, String> {
    let mut files: HashMap<&str, BufWriter<File>> = HashMap::new();
    let mut output_files = Vec::new();
    let mut sorted_langs: Vec<&str> = lang_set.iter().map(|s| s.as_str()).collect();
    sorted_langs.sort_unstable();

    for &lang in &sorted_langs {
        let filename = format!("{}{}", corpus_prefix, lang);
        match File::create(&filename) {
            Ok(file) => {
                files.insert(lang, BufWriter::new(file));
                output_files.push(filename);
            }
            Err(e) => {
                eprintln!("Failed to open output file {}: {}", filename, e);
            }
        }
    }

    let all_destinations_open = files.len() == sorted_langs.len();
    let mut outcome = EmitOutcome {
        output_files,
        ..EmitOutcome::default()
    };

    for driving_id in &table.driving_order {
        let group = &table.by_driving_id[driving_id];
        if group.len() != lang_set.len() || !group.keys().all(|lang| lang_set.contains(lang)) {
            continue;
        }
        if !all_destinations_open {
            outcome.skipped_groups += 1;
            continue;
        }
        for lang in &sorted_langs {
            if let Some(file) = files.get_mut(lang) {
                writeln!(file, "{}", group[*lang])
                    .map_err(|e| format!("Failed to write {}{}: {}", corpus_prefix, lang, e))?;
            }
        }
        outcome.emitted_groups += 1;
    }

    for (lang, file) in files.iter_mut() {
        file.flush()
            .map_err(|e| format!("Failed to flush {}{}: {}", corpus_prefix, lang, e))?;
    }

    Ok(outcome)
}
