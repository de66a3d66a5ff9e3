use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;

use crate::error::{LoadError, QuizError};
use crate::format::Format;
use crate::parser::{ParseOutcome, VocabularyEntry};
use crate::quiz::SelectedQuiz;

/// Line counts gathered while loading vocab files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub files: usize,
    pub lines: usize,
    pub entries: usize,
    pub skipped: usize,
    pub malformed: usize,
}

/// Parsed entries in file-then-line order
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<VocabularyEntry>,
    report: LoadReport,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every file in order; the first open or read failure aborts the whole load
    pub fn load_files<P: AsRef<Path>>(
        paths: impl IntoIterator<Item = P>,
        format: &Format,
    ) -> Result<Self, LoadError> {
        let mut store = Self::new();

        for path in paths {
            let path = path.as_ref();
            tracing::debug!("Loading vocab file: {}", path.display());

            let file = File::open(path).map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            store.load_reader(&path.display().to_string(), BufReader::new(file), format)?;
        }

        let report = store.report;
        tracing::info!(
            "Loaded {} vocab entries from {} file(s) ({} lines, {} skipped, {} malformed)",
            report.entries,
            report.files,
            report.lines,
            report.skipped,
            report.malformed
        );

        Ok(store)
    }

    /// Parse every line of `reader`, appending valid entries
    pub fn load_reader<R: BufRead>(
        &mut self,
        name: &str,
        reader: R,
        format: &Format,
    ) -> Result<(), LoadError> {
        self.report.files += 1;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| LoadError::Read {
                name: name.to_string(),
                line: line_number,
                source,
            })?;
            self.report.lines += 1;

            match format.parse(&line) {
                Ok(entry) => self.push(entry),
                Err(ParseOutcome::Skipped) => self.report.skipped += 1,
                Err(ParseOutcome::Malformed { recognized }) => {
                    self.report.malformed += 1;
                    tracing::warn!(
                        "{name}:{line_number}: malformed vocab line ({recognized} of 4 fields): {line}"
                    );
                }
            }
        }

        Ok(())
    }

    pub fn push(&mut self, entry: VocabularyEntry) {
        self.entries.push(entry);
        self.report.entries += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Draw one entry and one alternative uniformly at random.
    /// Consumes the store; nothing but the selected quiz outlives it.
    pub fn select<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<SelectedQuiz, QuizError> {
        if self.entries.is_empty() {
            return Err(QuizError::EmptyStore);
        }

        let index = rng.gen_range(0..self.entries.len());
        let entry = self.entries.swap_remove(index);
        let alternative = rng.gen_range(0..entry.logograph.count());
        tracing::debug!(
            "Selected entry {index} of {}, alternative {alternative}",
            self.entries.len() + 1
        );

        Ok(SelectedQuiz::from_entry(&entry, alternative))
    }
}

impl FromIterator<VocabularyEntry> for EntryStore {
    fn from_iter<I: IntoIterator<Item = VocabularyEntry>>(iter: I) -> Self {
        let mut store = Self::new();
        for entry in iter {
            store.push(entry);
        }
        store
    }
}
