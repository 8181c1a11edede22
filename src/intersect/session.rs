use std::collections::HashSet;

use crate::intersect::attacher::attach_translations;
use crate::intersect::emitter::emit_complete_groups;
use crate::intersect::link_filter::filter_links;
use crate::intersect::membership::build_membership_index;
use crate::lang_codes::LangCodes;
use crate::relation::{LinkRelation, SentenceRelation};

/// One intersection run: the requested languages, the chosen driving
/// language, and the input/output locations. All intermediate state
/// (membership sets, adjacency, alignment groups) lives inside `run` and
/// is dropped when it returns, so independent sessions never share state.
#[derive(Debug)]
pub struct IntersectSession {
    lang_set: HashSet<String>,
    driving_lang: String,
    sentences: SentenceRelation,
    links: LinkRelation,
    corpus_prefix: String,
}

/// What a finished run reports: counters for the summary line plus
/// everything the optional JSON summary needs.
#[derive(Debug)]
pub struct RunOutcome {
    pub driving_entries: usize,
    pub duplicate_driving_ids: u64,
    pub attached_translations: u64,
    pub dropped_conflicts: u64,
    pub emitted_groups: u64,
    pub skipped_groups: u64,
    pub output_files: Vec<String>,
}

impl IntersectSession {
    /// Fails when fewer than two distinct languages remain after
    /// normalization (eg. a code and its own name were both supplied), as
    /// an intersection of one language would just copy the driving corpus.
    pub fn new(
        lang_set: HashSet<String>,
        driving_lang: String,
        sentences: SentenceRelation,
        links: LinkRelation,
        corpus_prefix: String,
    ) -> Result<Self, String> {
        if lang_set.len() < 2 {
            return Err(format!(
                "At least two distinct languages are required, got {}",
                lang_set.len()
            ));
        }
        Ok(IntersectSession {
            lang_set,
            driving_lang,
            sentences,
            links,
            corpus_prefix,
        })
    }

    pub fn driving_lang(&self) -> &str {
        &self.driving_lang
    }

    pub fn lang_set(&self) -> &HashSet<String> {
        &self.lang_set
    }

    /// Runs the four phases strictly in order: membership indexing over the
    /// sentence relation, link filtering, a second sentence pass attaching
    /// the other languages, then emission of complete groups. Each phase
    /// consumes its input stream to exhaustion before the next begins.
    pub fn run(&self, codes: &LangCodes) -> Result<RunOutcome, String> {
        eprint!(
            "Processing sentences of smallest language, {} ... ",
            codes.display_name(&self.driving_lang)
        );
        let (index, mut table) = build_membership_index(
            self.sentences.iter()?,
            &self.lang_set,
            &self.driving_lang,
        )?;
        eprintln!("{} entries", table.by_driving_id.len());

        eprintln!("Processing links ...");
        let adjacency = filter_links(self.links.iter()?, &index.all_ids)?;

        eprintln!("Processing sentences from the other specified languages ...");
        let attach_stats = attach_translations(
            self.sentences.iter()?,
            &self.lang_set,
            &self.driving_lang,
            &adjacency,
            &mut table,
        )?;

        let emit_outcome = emit_complete_groups(&table, &self.lang_set, &self.corpus_prefix)?;

        Ok(RunOutcome {
            driving_entries: table.by_driving_id.len(),
            duplicate_driving_ids: index.duplicate_driving_ids,
            attached_translations: attach_stats.attached,
            dropped_conflicts: attach_stats.dropped_conflicts,
            emitted_groups: emit_outcome.emitted_groups,
            skipped_groups: emit_outcome.skipped_groups,
            output_files: emit_outcome.output_files,
        })
    }
}
