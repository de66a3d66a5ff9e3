use kq_types::{QuizCommand, Script};

use crate::parser::VocabularyEntry;

pub const DEFAULT_TITLE: &str = "漢字探求";

/// The one entry handed to the renderer, reduced to a single alternative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedQuiz {
    reading: String,
    logograph: String,
    mnemonic: String,
    english: String,
    distinguisher: String,
    title: String,
    current: Script,
}

impl SelectedQuiz {
    /// Materialize `entry` with alternative `index`; each field wraps the index to its own count
    pub fn from_entry(entry: &VocabularyEntry, index: usize) -> Self {
        Self {
            reading: entry.reading.select(index).to_string(),
            logograph: entry.logograph.select(index).to_string(),
            mnemonic: entry.mnemonic.select(index).to_string(),
            english: entry.english.clone(),
            distinguisher: entry.distinguisher.clone(),
            title: DEFAULT_TITLE.to_string(),
            current: Script::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn starting_at(mut self, script: Script) -> Self {
        self.current = script;
        self
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn logograph(&self) -> &str {
        &self.logograph
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn distinguisher(&self) -> Option<&str> {
        (!self.distinguisher.is_empty()).then_some(self.distinguisher.as_str())
    }

    pub fn current(&self) -> Script {
        self.current
    }

    pub fn field(&self, script: Script) -> &str {
        match script {
            Script::Reading => &self.reading,
            Script::Logograph => &self.logograph,
            Script::Mnemonic => &self.mnemonic,
            Script::English => &self.english,
        }
    }

    /// Text of the currently displayed script
    pub fn display(&self) -> &str {
        self.field(self.current)
    }

    /// Window title, with the distinguisher appended when the entry has one
    pub fn title(&self) -> String {
        match self.distinguisher() {
            Some(distinguisher) => format!("{} ({distinguisher})", self.title),
            None => self.title.clone(),
        }
    }

    pub fn show(&mut self, script: Script) {
        self.current = script;
    }

    pub fn cycle(&mut self) {
        self.current = self.current.next();
    }

    /// Apply a driver command; returns false once the quiz should close
    pub fn apply(&mut self, command: QuizCommand) -> bool {
        match command {
            QuizCommand::Show(script) => self.show(script),
            QuizCommand::Cycle => self.cycle(),
            QuizCommand::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alternatives::Alternatives;

    fn honya() -> VocabularyEntry {
        VocabularyEntry {
            reading: Alternatives::new("ほんや/しょてん", Some('/')),
            logograph: Alternatives::new("本屋/書店", Some('/')),
            mnemonic: Alternatives::new("book+shop/write+shop", Some('/')),
            english: "bookstore".to_string(),
            distinguisher: String::new(),
        }
    }

    #[test]
    fn materializes_chosen_alternative() {
        let quiz = SelectedQuiz::from_entry(&honya(), 1);

        assert_eq!(quiz.reading(), "しょてん");
        assert_eq!(quiz.logograph(), "書店");
        assert_eq!(quiz.mnemonic(), "write+shop");
        assert_eq!(quiz.english(), "bookstore");
    }

    #[test]
    fn mismatched_alternative_counts_wrap() {
        let mut entry = honya();
        entry.reading = Alternatives::new("ほんや", Some('/'));
        let quiz = SelectedQuiz::from_entry(&entry, 1);

        assert_eq!(quiz.reading(), "ほんや");
        assert_eq!(quiz.logograph(), "書店");
    }

    #[test]
    fn starts_on_logograph() {
        let quiz = SelectedQuiz::from_entry(&honya(), 0);
        assert_eq!(quiz.current(), Script::Logograph);
        assert_eq!(quiz.display(), "本屋");
    }

    #[test]
    fn commands_switch_display() {
        let mut quiz = SelectedQuiz::from_entry(&honya(), 0).starting_at(Script::English);
        assert_eq!(quiz.display(), "bookstore");

        assert!(quiz.apply(QuizCommand::Show(Script::Reading)));
        assert_eq!(quiz.display(), "ほんや");

        assert!(quiz.apply(QuizCommand::Cycle));
        assert_eq!(quiz.display(), "本屋");

        assert!(!quiz.apply(QuizCommand::Quit));
    }

    #[test]
    fn title_shows_distinguisher() {
        let mut entry = honya();
        assert_eq!(SelectedQuiz::from_entry(&entry, 0).title(), DEFAULT_TITLE);

        entry.distinguisher = "transitive".to_string();
        let quiz = SelectedQuiz::from_entry(&entry, 0).with_title("Kanji Quest");
        assert_eq!(quiz.title(), "Kanji Quest (transitive)");
    }
}
