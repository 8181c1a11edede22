use serde::Deserialize;
use std::fs;

fn default_sentences_file() -> String {
    "sentences.csv".to_string()
}
fn default_links_file() -> String {
    "links.csv".to_string()
}
fn default_lang_codes_file() -> String {
    "data/lang_codes_iso-639-3.tsv".to_string()
}
fn default_lang_freq_file() -> String {
    "data/lang_codes_iso-639-3_freq.tsv".to_string()
}
fn default_corpus_prefix() -> String {
    "corpus.".to_string()
}

/// Paths to the Tatoeba export files plus the output prefix.
/// Every field has a default matching the layout the download scripts
/// produce, so a config file is optional.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_sentences_file")]
    pub sentences_file: String,
    #[serde(default = "default_links_file")]
    pub links_file: String,
    #[serde(default = "default_lang_codes_file")]
    pub lang_codes_file: String,
    #[serde(default = "default_lang_freq_file")]
    pub lang_freq_file: String,
    #[serde(default = "default_corpus_prefix")]
    pub corpus_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sentences_file: default_sentences_file(),
            links_file: default_links_file(),
            lang_codes_file: default_lang_codes_file(),
            lang_freq_file: default_lang_freq_file(),
            corpus_prefix: default_corpus_prefix(),
        }
    }
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, String> {
    match fs::read_to_string(file_path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(loaded_config) => Ok(loaded_config),
            Err(e) => Err(format!("Failed to parse {}: {}", file_path, e)),
        },
        Err(e) => Err(format!(
            "Failed to read {}: {}. Please ensure it exists.",
            file_path, e
        )),
    }
}
