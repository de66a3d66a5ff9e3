pub mod alternatives;
pub mod error;
pub mod format;
pub mod parser;
pub mod quiz;
pub mod store;

pub use alternatives::{Alternatives, count_alternatives, select_alternative};
pub use error::{FormatError, LoadError, QuizError};
pub use format::{DEFAULT_FIELD_CAPACITY, DEFAULT_FORMAT, Field, Format, FormatWarning, Step, Terminator};
pub use parser::{ParseOutcome, VocabularyEntry};
pub use quiz::{DEFAULT_TITLE, SelectedQuiz};
pub use store::{EntryStore, LoadReport};
