use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use corpus_intersect::config::{load_config_from_file, Config};
use corpus_intersect::frequency::pick_driving_language;
use corpus_intersect::intersect::IntersectSession;
use corpus_intersect::lang_codes::parse_lang_codes;
use corpus_intersect::relation::{LinkRelation, SentenceRelation};
use corpus_intersect::summary::{save_run_summary, RunSummary};

/// Builds an n-way multilingual corpus: finds the sentences with a mutual
/// translation in every requested language and writes one aligned file per
/// language, line K of each file being the same translation group.
#[derive(Parser, Debug)]
#[command(name = "corpus-intersect", version)]
struct Cli {
    /// Languages to intersect: ISO 639-3 codes or (macro-)language names
    #[arg(required = true, num_args = 2..)]
    langs: Vec<String>,

    /// TOML config file with input paths and the output prefix
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Sentence relation file (id<TAB>lang<TAB>text per line)
    #[arg(long, value_name = "FILE")]
    sentences: Option<String>,

    /// Link relation file (idA<TAB>idB per line)
    #[arg(long, value_name = "FILE")]
    links: Option<String>,

    /// ISO 639-3 code/name table (code<TAB>name per line)
    #[arg(long, value_name = "FILE")]
    codes: Option<String>,

    /// Language codes sorted by corpus frequency, whitespace-separated
    #[arg(long, value_name = "FILE")]
    freq: Option<String>,

    /// Prefix for per-language output files (eg. corpus. gives corpus.eng)
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Also write a JSON run summary to this path
    #[arg(long, value_name = "FILE")]
    summary_json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_file(path)?,
        None => Config::default(),
    };
    if let Some(path) = cli.sentences {
        config.sentences_file = path;
    }
    if let Some(path) = cli.links {
        config.links_file = path;
    }
    if let Some(path) = cli.codes {
        config.lang_codes_file = path;
    }
    if let Some(path) = cli.freq {
        config.lang_freq_file = path;
    }
    if let Some(prefix) = cli.prefix {
        config.corpus_prefix = prefix;
    }

    let codes = parse_lang_codes(&config.lang_codes_file)?;
    let lang_set = codes.normalize(&cli.langs);

    let driving_lang = pick_driving_language(&config.lang_freq_file, &lang_set)?
        .ok_or_else(|| {
            format!(
                "None of the requested languages appear in the frequency ranking {}",
                config.lang_freq_file
            )
        })?;

    let mut lang_list_formatted: Vec<String> =
        lang_set.iter().map(|code| codes.describe(code)).collect();
    lang_list_formatted.sort_unstable();
    eprintln!(
        "Looking for intersection of {}",
        lang_list_formatted.join(", ")
    );

    let session = IntersectSession::new(
        lang_set.clone(),
        driving_lang.clone(),
        SentenceRelation::new(&config.sentences_file),
        LinkRelation::new(&config.links_file),
        config.corpus_prefix.clone(),
    )?;
    let outcome = session.run(&codes)?;

    let mut corpus_suffixes: Vec<&str> = lang_set.iter().map(|s| s.as_str()).collect();
    corpus_suffixes.sort_unstable();
    eprintln!(
        "Output {} lines to:  {}{{{}}}",
        outcome.emitted_groups,
        config.corpus_prefix,
        corpus_suffixes.join(",")
    );
    if outcome.skipped_groups > 0 {
        eprintln!(
            "Skipped {} complete groups because some output files could not be opened",
            outcome.skipped_groups
        );
    }

    if let Some(path) = &cli.summary_json {
        let summary = RunSummary::from_outcome(
            &outcome,
            lang_set.iter().cloned().collect(),
            &driving_lang,
        );
        save_run_summary(&summary, path)?;
    }

    Ok(())
}
