use std::collections::{HashMap, HashSet};

use crate::relation::SentenceRecord;

/// Per-language sentence id sets plus their union, gathered in the first
/// pass over the sentence relation. The union set is what the link filter
/// checks edge endpoints against.
#[derive(Debug, Default)]
pub struct MembershipIndex {
    pub all_ids: HashSet<u64>,
    pub per_lang_ids: HashMap<String, HashSet<u64>>,
    pub duplicate_driving_ids: u64,
}

/// Alignment groups keyed by driving-language sentence id. Each value maps
/// a language code to the sentence text attached for that language, seeded
/// with the driving language's own text at creation. `driving_order`
/// remembers creation order (sentence-file order) so emission is
/// deterministic run to run.
#[derive(Debug, Default)]
pub struct AlignmentTable {
    pub by_driving_id: HashMap<u64, HashMap<String, String>>,
    pub driving_order: Vec<u64>,
}

/// First pass over the sentence relation. Storing every candidate
/// translation would be memory-hungry, so we trade space for time: this
/// pass keeps only ids for the requested languages, plus full text for the
/// driving (smallest) language; a later pass attaches the other languages'
/// text to the groups created here.
pub fn build_membership_index<I>(
    records: I,
    lang_set: &HashSet<String>,
    driving_lang: &str,
) -> Result<(MembershipIndex, AlignmentTable), String>
where
    I: Iterator<Item = Result<SentenceRecord, String>>,
{
    let mut index = MembershipIndex::default();
    for lang in lang_set {
        index.per_lang_ids.insert(lang.clone(), HashSet::new());
    }
    let mut table = AlignmentTable::default();

    for record in records {
        let record = record?;
        if let Some(ids) = index.per_lang_ids.get_mut(&record.lang) {
            ids.insert(record.id);
            index.all_ids.insert(record.id);
        }
        if record.lang == driving_lang {
            if table.by_driving_id.contains_key(&record.id) {
                // First occurrence wins; the export should not repeat ids.
                eprintln!(
                    "Warning: duplicate sentence id {} for language {}, keeping the first one",
                    record.id, driving_lang
                );
                index.duplicate_driving_ids += 1;
            } else {
                let mut group = HashMap::new();
                group.insert(driving_lang.to_string(), record.text);
                table.by_driving_id.insert(record.id, group);
                table.driving_order.push(record.id);
            }
        }
    }

    Ok((index, table))
}
