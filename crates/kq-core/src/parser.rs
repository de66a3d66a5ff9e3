use std::fmt;

use crate::alternatives::Alternatives;
use crate::format::{Field, Format, Step, Terminator};

/// Why a line produced no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Blank, comment or non-matching line
    Skipped,
    /// Some but not all mandatory fields were found
    Malformed { recognized: usize },
}

impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOutcome::Skipped => f.write_str("skipped"),
            ParseOutcome::Malformed { recognized } => {
                write!(f, "malformed ({recognized} of 4 fields recognized)")
            }
        }
    }
}

/// One fully parsed vocab line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub reading: Alternatives,
    pub logograph: Alternatives,
    pub mnemonic: Alternatives,
    pub english: String,
    /// Empty when the line carried none
    pub distinguisher: String,
}

impl VocabularyEntry {
    pub fn distinguisher(&self) -> Option<&str> {
        (!self.distinguisher.is_empty()).then_some(self.distinguisher.as_str())
    }

    /// Number of mandatory fields holding text
    fn recognized(&self) -> usize {
        [
            self.reading.is_empty(),
            self.logograph.is_empty(),
            self.mnemonic.is_empty(),
            self.english.is_empty(),
        ]
        .into_iter()
        .filter(|empty| !empty)
        .count()
    }

    fn field_mut(&mut self, field: Field) -> &mut Alternatives {
        match field {
            Field::Reading => &mut self.reading,
            Field::Logograph => &mut self.logograph,
            Field::Mnemonic => &mut self.mnemonic,
        }
    }
}

impl Format {
    /// Extract an entry from one line of a vocab file
    pub fn parse(&self, line: &str) -> Result<VocabularyEntry, ParseOutcome> {
        let line = strip_line_ending(line);
        if line.is_empty() {
            return Err(ParseOutcome::Skipped);
        }
        if let Some(prefix) = self.comment_prefix() {
            if line.starts_with(prefix) {
                return Err(ParseOutcome::Skipped);
            }
        }

        let capacity = self.capacity();
        let mut entry = VocabularyEntry::default();
        let mut rest = line;
        let mut optional_taken = false;

        for step in self.steps() {
            if rest.is_empty() {
                break;
            }

            match step {
                Step::Literal(literal) => {
                    let matched = common_prefix_len(rest, literal);
                    rest = &rest[matched..];
                    if matched < literal.len() {
                        break;
                    }
                }
                Step::Ignore(delim) => {
                    rest = split_at_delimiter(rest, *delim).1;
                }
                Step::Field {
                    field,
                    terminator,
                    alternative,
                } => {
                    let (text, remainder, optional) = split_field(rest, *terminator);
                    *entry.field_mut(*field) = Alternatives::new(truncate(text, capacity), *alternative);
                    optional_taken = optional;
                    rest = remainder;
                }
                Step::Distinguisher { fallback } => {
                    if optional_taken {
                        let (text, remainder) = split_at_delimiter(rest, *fallback);
                        entry.distinguisher = truncate(text, capacity);
                        rest = remainder;
                    }
                    optional_taken = false;
                }
                Step::English => {
                    entry.english = truncate(rest, capacity);
                    rest = "";
                }
            }
        }

        match entry.recognized() {
            4 => Ok(entry),
            0 => Err(ParseOutcome::Skipped),
            recognized => Err(ParseOutcome::Malformed { recognized }),
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Byte length of the longest common prefix of `line` and `literal`
fn common_prefix_len(line: &str, literal: &str) -> usize {
    line.chars()
        .zip(literal.chars())
        .take_while(|(a, b)| a == b)
        .map(|(ch, _)| ch.len_utf8())
        .sum()
}

/// Text before `delim` and text after it; the whole line and nothing if it is absent
fn split_at_delimiter(line: &str, delim: char) -> (&str, &str) {
    line.split_once(delim).unwrap_or((line, ""))
}

/// Field text, remainder after the consumed terminator, and whether the optional path was taken
fn split_field(line: &str, terminator: Terminator) -> (&str, &str, bool) {
    match terminator {
        Terminator::Literal(delim) => {
            let (text, rest) = split_at_delimiter(line, delim);
            (text, rest, false)
        }
        Terminator::Either { optional, fallback } => {
            match (line.find(optional), line.find(fallback)) {
                (Some(opt), Some(fb)) if opt <= fb => {
                    (&line[..opt], &line[opt + optional.len_utf8()..], true)
                }
                (Some(opt), None) => (&line[..opt], &line[opt + optional.len_utf8()..], true),
                (_, Some(fb)) => (&line[..fb], &line[fb + fallback.len_utf8()..], false),
                (None, None) => (line, "", false),
            }
        }
    }
}

/// First `capacity` characters of `text`
fn truncate(text: &str, capacity: usize) -> String {
    text.chars().take(capacity).collect()
}
