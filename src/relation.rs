use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// One row of the sentence relation: `id \t code \t text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    pub id: u64,
    pub lang: String,
    pub text: String,
}

/// One row of the link relation: `idA \t idB`. The pair is unordered; the
/// source file may carry either or both directions for the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEdge {
    pub a: u64,
    pub b: u64,
}

/// The sentence relation is scanned twice per run (membership pass, then
/// attachment pass), so it is held as a path and re-opened per pass rather
/// than materialized in memory.
#[derive(Debug, Clone)]
pub struct SentenceRelation {
    path: PathBuf,
}

impl SentenceRelation {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        SentenceRelation { path: path.into() }
    }

    pub fn iter(&self) -> Result<SentenceIter, String> {
        Ok(SentenceIter {
            lines: open_lines(&self.path)?,
            path: self.path.clone(),
            line_no: 0,
        })
    }
}

pub struct SentenceIter {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    line_no: u64,
}

impl Iterator for SentenceIter {
    type Item = Result<SentenceRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => {
                return Some(Err(format!(
                    "Failed to read {} at line {}: {}",
                    self.path.display(),
                    self.line_no + 1,
                    e
                )));
            }
        };
        self.line_no += 1;
        Some(parse_sentence_line(&line, &self.path, self.line_no))
    }
}

fn parse_sentence_line(line: &str, path: &Path, line_no: u64) -> Result<SentenceRecord, String> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = trimmed.split('\t').collect();
    // Exactly three fields; the relation's integrity cannot be locally
    // verified, so any other arity aborts the stream.
    match fields.as_slice() {
        [id, lang, text] => {
            let id = id.parse::<u64>().map_err(|_| {
                format!(
                    "Malformed line {} in {}: sentence id \"{}\" is not an integer",
                    line_no,
                    path.display(),
                    id
                )
            })?;
            Ok(SentenceRecord {
                id,
                lang: lang.to_string(),
                text: text.to_string(),
            })
        }
        _ => Err(format!(
            "Malformed line {} in {}: expected 'id<TAB>lang<TAB>text'",
            line_no,
            path.display()
        )),
    }
}

/// The link relation is scanned once but shares the re-openable shape of
/// `SentenceRelation`.
#[derive(Debug, Clone)]
pub struct LinkRelation {
    path: PathBuf,
}

impl LinkRelation {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        LinkRelation { path: path.into() }
    }

    pub fn iter(&self) -> Result<LinkIter, String> {
        Ok(LinkIter {
            lines: open_lines(&self.path)?,
            path: self.path.clone(),
            line_no: 0,
        })
    }
}

pub struct LinkIter {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    line_no: u64,
}

impl Iterator for LinkIter {
    type Item = Result<LinkEdge, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => {
                return Some(Err(format!(
                    "Failed to read {} at line {}: {}",
                    self.path.display(),
                    self.line_no + 1,
                    e
                )));
            }
        };
        self.line_no += 1;
        Some(parse_link_line(&line, &self.path, self.line_no))
    }
}

fn parse_link_line(line: &str, path: &Path, line_no: u64) -> Result<LinkEdge, String> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = trimmed.split('\t').collect();
    match fields.as_slice() {
        [a, b] => {
            let parse = |field: &str| {
                field.parse::<u64>().map_err(|_| {
                    format!(
                        "Malformed line {} in {}: link id \"{}\" is not an integer",
                        line_no,
                        path.display(),
                        field
                    )
                })
            };
            Ok(LinkEdge {
                a: parse(a)?,
                b: parse(b.trim_end())?,
            })
        }
        _ => Err(format!(
            "Malformed line {} in {}: expected 'idA<TAB>idB'",
            line_no,
            path.display()
        )),
    }
}

fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>, String> {
    let file =
        File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    Ok(BufReader::new(file).lines())
}
