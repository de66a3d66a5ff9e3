pub mod types;

pub use types::{QuizCommand, Script};
