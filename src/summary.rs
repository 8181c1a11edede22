use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::intersect::RunOutcome;

/// Machine-readable counterpart of the final stderr summary line,
/// written as JSON when the caller asks for it.
#[derive(Serialize, Debug, Clone)]
pub struct RunSummary {
    pub languages: Vec<String>,
    pub driving_language: String,
    pub driving_entries: usize,
    pub duplicate_driving_ids: u64,
    pub attached_translations: u64,
    pub dropped_conflicts: u64,
    pub emitted_groups: u64,
    pub skipped_groups: u64,
    pub output_files: Vec<String>,
}

impl RunSummary {
    pub fn from_outcome(outcome: &RunOutcome, mut languages: Vec<String>, driving: &str) -> Self {
        languages.sort_unstable();
        RunSummary {
            languages,
            driving_language: driving.to_string(),
            driving_entries: outcome.driving_entries,
            duplicate_driving_ids: outcome.duplicate_driving_ids,
            attached_translations: outcome.attached_translations,
            dropped_conflicts: outcome.dropped_conflicts,
            emitted_groups: outcome.emitted_groups,
            skipped_groups: outcome.skipped_groups,
            output_files: outcome.output_files.clone(),
        }
    }
}

pub fn save_run_summary(summary: &RunSummary, file_path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create summary file at {:?}: {}", file_path, e))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary)
        .map_err(|e| format!("Failed to serialize summary to {:?}: {}", file_path, e))?;

    Ok(())
}
