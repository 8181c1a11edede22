use std::collections::HashSet;
use std::fs;

use corpus_intersect::frequency::pick_driving_language;
use corpus_intersect::intersect::IntersectSession;
use corpus_intersect::lang_codes::parse_lang_codes;
use corpus_intersect::relation::{LinkRelation, SentenceRelation};

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new(sentences: &str, links: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sentences.csv"), sentences).unwrap();
        fs::write(dir.path().join("links.csv"), links).unwrap();
        fs::write(
            dir.path().join("codes.tsv"),
            "eng\tEnglish\nspa\tSpanish\nfra\tFrench\n",
        )
        .unwrap();
        // Rarest first; the last requested match in this order drives.
        fs::write(dir.path().join("freq.tsv"), "fra spa eng\n").unwrap();
        Fixture { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_str().unwrap().to_string()
    }

    fn run(&self, langs: &[&str], prefix: &str) -> corpus_intersect::RunOutcome {
        let codes = parse_lang_codes(&self.path("codes.tsv")).unwrap();
        let tokens: Vec<String> = langs.iter().map(|l| l.to_string()).collect();
        let lang_set: HashSet<String> = codes.normalize(&tokens);
        let driving = pick_driving_language(&self.path("freq.tsv"), &lang_set)
            .unwrap()
            .unwrap();
        let session = IntersectSession::new(
            lang_set,
            driving,
            SentenceRelation::new(self.path("sentences.csv")),
            LinkRelation::new(self.path("links.csv")),
            self.path(prefix),
        )
        .unwrap();
        session.run(&codes).unwrap()
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}

const THREE_WAY_SENTENCES: &str = "1\teng\tHi\n2\tspa\tHola\n3\tfra\tSalut\n4\teng\tBye\n";

#[test]
fn three_way_intersection_emits_one_group() {
    let fixture = Fixture::new(THREE_WAY_SENTENCES, "1\t2\n1\t3\n");
    let outcome = fixture.run(&["eng", "spa", "fra"], "corpus.");

    assert_eq!(outcome.emitted_groups, 1);
    assert_eq!(fixture.read("corpus.eng"), "Hi\n");
    assert_eq!(fixture.read("corpus.spa"), "Hola\n");
    assert_eq!(fixture.read("corpus.fra"), "Salut\n");
    // Id 4 has no links, so "Bye" must not appear anywhere.
    for file in ["corpus.eng", "corpus.spa", "corpus.fra"] {
        assert!(!fixture.read(file).contains("Bye"));
    }
}

#[test]
fn driving_language_is_the_last_ranking_match() {
    let fixture = Fixture::new(THREE_WAY_SENTENCES, "1\t2\n1\t3\n");
    let codes = parse_lang_codes(&fixture.path("codes.tsv")).unwrap();
    let tokens = vec!["eng".to_string(), "spa".to_string(), "fra".to_string()];
    let lang_set = codes.normalize(&tokens);
    let driving = pick_driving_language(&fixture.path("freq.tsv"), &lang_set)
        .unwrap()
        .unwrap();
    // freq.tsv reads "fra spa eng"; eng is the last match, so eng drives.
    assert_eq!(driving, "eng");
}

#[test]
fn language_names_work_as_request_tokens() {
    let fixture = Fixture::new(THREE_WAY_SENTENCES, "1\t2\n1\t3\n");
    let outcome = fixture.run(&["English", "Spanish", "French"], "corpus.");
    assert_eq!(outcome.emitted_groups, 1);
    assert_eq!(fixture.read("corpus.spa"), "Hola\n");
}

#[test]
fn partial_groups_are_never_emitted() {
    // spa links to eng, but no fra translation exists for id 1.
    let fixture = Fixture::new("1\teng\tHi\n2\tspa\tHola\n", "1\t2\n");
    let outcome = fixture.run(&["eng", "spa", "fra"], "corpus.");
    assert_eq!(outcome.emitted_groups, 0);
    assert_eq!(fixture.read("corpus.eng"), "");
    assert_eq!(fixture.read("corpus.spa"), "");
    assert_eq!(fixture.read("corpus.fra"), "");
}

#[test]
fn first_translation_per_language_wins() {
    // Ids 2 and 5 are both spa translations linked to driving-language
    // id 1; id 2 comes first in file order and keeps the slot.
    let sentences = "1\teng\tHi\n2\tspa\tHola\n3\tfra\tSalut\n5\tspa\tBuenas\n";
    let fixture = Fixture::new(sentences, "1\t2\n1\t3\n1\t5\n");
    let outcome = fixture.run(&["eng", "spa", "fra"], "corpus.");
    assert_eq!(outcome.emitted_groups, 1);
    assert_eq!(outcome.dropped_conflicts, 1);
    assert_eq!(fixture.read("corpus.spa"), "Hola\n");
}

#[test]
fn all_outputs_have_the_emitted_line_count() {
    let sentences = "\
1\teng\tOne
2\tspa\tUno
3\tfra\tUn
10\teng\tTwo
20\tspa\tDos
30\tfra\tDeux
";
    let links = "1\t2\n1\t3\n10\t20\n10\t30\n";
    let fixture = Fixture::new(sentences, links);
    let outcome = fixture.run(&["eng", "spa", "fra"], "corpus.");
    assert_eq!(outcome.emitted_groups, 2);
    for file in ["corpus.eng", "corpus.spa", "corpus.fra"] {
        assert_eq!(
            fixture.read(file).lines().count() as u64,
            outcome.emitted_groups,
            "line count mismatch in {}",
            file
        );
    }
    // Line K is the same group in every file.
    assert_eq!(fixture.read("corpus.eng"), "One\nTwo\n");
    assert_eq!(fixture.read("corpus.spa"), "Uno\nDos\n");
    assert_eq!(fixture.read("corpus.fra"), "Un\nDeux\n");
}

#[test]
fn reruns_produce_byte_identical_outputs() {
    let sentences = "\
1\teng\tOne
2\tspa\tUno
3\tfra\tUn
10\teng\tTwo
20\tspa\tDos
30\tfra\tDeux
";
    let links = "1\t2\n1\t3\n10\t20\n10\t30\n";
    let fixture = Fixture::new(sentences, links);

    fixture.run(&["eng", "spa", "fra"], "first.");
    fixture.run(&["eng", "spa", "fra"], "second.");
    for lang in ["eng", "spa", "fra"] {
        assert_eq!(
            fixture.read(&format!("first.{}", lang)),
            fixture.read(&format!("second.{}", lang)),
            "outputs differ between runs for {}",
            lang
        );
    }
}

#[test]
fn reordering_independent_link_edges_changes_nothing() {
    let sentences = "\
1\teng\tOne
2\tspa\tUno
3\tfra\tUn
10\teng\tTwo
20\tspa\tDos
30\tfra\tDeux
";
    let fixture_a = Fixture::new(sentences, "1\t2\n1\t3\n10\t20\n10\t30\n");
    let fixture_b = Fixture::new(sentences, "10\t20\n10\t30\n1\t2\n1\t3\n");
    fixture_a.run(&["eng", "spa", "fra"], "corpus.");
    fixture_b.run(&["eng", "spa", "fra"], "corpus.");
    for lang in ["eng", "spa", "fra"] {
        assert_eq!(
            fixture_a.read(&format!("corpus.{}", lang)),
            fixture_b.read(&format!("corpus.{}", lang))
        );
    }
}

#[test]
fn link_direction_does_not_matter() {
    // Same pairs as the three-way scenario, written from the other side.
    let fixture = Fixture::new(THREE_WAY_SENTENCES, "2\t1\n3\t1\n");
    let outcome = fixture.run(&["eng", "spa", "fra"], "corpus.");
    assert_eq!(outcome.emitted_groups, 1);
    assert_eq!(fixture.read("corpus.fra"), "Salut\n");
}

#[test]
fn malformed_sentence_line_aborts_the_run() {
    let fixture = Fixture::new("1\teng\tHi\nbroken line\n", "1\t2\n");
    let codes = parse_lang_codes(&fixture.path("codes.tsv")).unwrap();
    let tokens = vec!["eng".to_string(), "spa".to_string()];
    let lang_set = codes.normalize(&tokens);
    let session = IntersectSession::new(
        lang_set,
        "spa".to_string(),
        SentenceRelation::new(fixture.path("sentences.csv")),
        LinkRelation::new(fixture.path("links.csv")),
        fixture.path("corpus."),
    )
    .unwrap();
    let err = session.run(&codes).unwrap_err();
    assert!(err.contains("Malformed line 2"), "unexpected error: {}", err);
}

#[test]
fn extra_field_sentence_line_aborts_the_run() {
    let fixture = Fixture::new("1\teng\tHi\tthere\n2\tspa\tHola\n", "1\t2\n");
    let codes = parse_lang_codes(&fixture.path("codes.tsv")).unwrap();
    let tokens = vec!["eng".to_string(), "spa".to_string()];
    let lang_set = codes.normalize(&tokens);
    let session = IntersectSession::new(
        lang_set,
        "spa".to_string(),
        SentenceRelation::new(fixture.path("sentences.csv")),
        LinkRelation::new(fixture.path("links.csv")),
        fixture.path("corpus."),
    )
    .unwrap();
    let err = session.run(&codes).unwrap_err();
    assert!(err.contains("Malformed line 1"), "unexpected error: {}", err);
}

#[test]
fn unknown_token_is_treated_as_literal_code() {
    // "xzq" is not in the code table; the run proceeds with it as a code,
    // finds no sentences for it, and emits nothing.
    let fixture = Fixture::new(THREE_WAY_SENTENCES, "1\t2\n1\t3\n");
    fs::write(fixture.dir.path().join("freq.tsv"), "fra spa eng xzq\n").unwrap();
    let outcome = fixture.run(&["eng", "xzq"], "corpus.");
    assert_eq!(outcome.emitted_groups, 0);
    assert_eq!(fixture.read("corpus.xzq"), "");
    assert_eq!(fixture.read("corpus.eng"), "");
}
