use std::collections::HashSet;

use crate::intersect::link_filter::Adjacency;
use crate::intersect::membership::AlignmentTable;
use crate::relation::SentenceRecord;

#[derive(Debug, Default, Clone, Copy)]
pub struct AttachStats {
    /// Translations attached to some alignment group.
    pub attached: u64,
    /// Translations dropped because their language slot was already filled
    /// for that group (an earlier sentence in file order won).
    pub dropped_conflicts: u64,
}

/// Second pass over the sentence relation. For each requested-language,
/// non-driving sentence, follow its links; every linked driving-language id
/// that owns an alignment group gains this sentence's text under its
/// language, unless that language is already present in the group. The
/// first translation encountered in file order wins; later ones for the
/// same (group, language) pair are ignored.
pub fn attach_translations<I>(
    records: I,
    lang_set: &HashSet<String>,
    driving_lang: &str,
    adjacency: &Adjacency,
    table: &mut AlignmentTable,
) -> Result<AttachStats, String>
where
    I: Iterator<Item = Result<SentenceRecord, String>>,
{
    let mut stats = AttachStats::default();

    for record in records {
        let record = record?;
        if record.lang == driving_lang || !lang_set.contains(&record.lang) {
            continue;
        }
        let Some(neighbors) = adjacency.get(&record.id) else {
            continue;
        };
        for neighbor_id in neighbors {
            // Only driving-language ids have groups; other neighbors are
            // cross-links between non-driving languages.
            let Some(group) = table.by_driving_id.get_mut(neighbor_id) else {
                continue;
            };
            if group.contains_key(&record.lang) {
                stats.dropped_conflicts += 1;
            } else {
                group.insert(record.lang.clone(), record.text.clone());
                stats.attached += 1;
            }
        }
    }

    Ok(stats)
}
