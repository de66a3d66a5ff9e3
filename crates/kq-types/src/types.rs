use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Representation of a vocabulary entry shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Phonetic reading (kana)
    Reading,
    /// Logographic form (kanji)
    #[default]
    Logograph,
    /// Mnemonic breakdown
    Mnemonic,
    /// Translation
    English,
}

impl Script {
    pub const ALL: [Script; 4] = [
        Script::Reading,
        Script::Logograph,
        Script::Mnemonic,
        Script::English,
    ];

    /// Next script in key order, wrapping after english
    pub fn next(self) -> Self {
        match self {
            Script::Reading => Script::Logograph,
            Script::Logograph => Script::Mnemonic,
            Script::Mnemonic => Script::English,
            Script::English => Script::Reading,
        }
    }

    /// Key that switches to this script
    pub fn key(self) -> char {
        match self {
            Script::Reading => '1',
            Script::Logograph => '2',
            Script::Mnemonic => '3',
            Script::English => '4',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Reading => "reading",
            Script::Logograph => "logograph",
            Script::Mnemonic => "mnemonic",
            Script::English => "english",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reading" | "kana" | "1" => Ok(Script::Reading),
            "logograph" | "kanji" | "2" => Ok(Script::Logograph),
            "mnemonic" | "heisig" | "3" => Ok(Script::Mnemonic),
            "english" | "en" | "4" => Ok(Script::English),
            other => Err(format!(
                "unknown script '{other}' (expected reading, logograph, mnemonic or english)"
            )),
        }
    }
}

/// Commands the interactive driver feeds to a selected quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    Show(Script),
    Cycle,
    Quit,
}

impl QuizCommand {
    /// Map one line of terminal input to a command
    pub fn from_key(input: &str) -> Option<Self> {
        let input = input.trim_end_matches(['\n', '\r']);
        match input {
            "" | " " | "q" | "Q" => return Some(QuizCommand::Quit),
            "\t" => return Some(QuizCommand::Cycle),
            _ => {}
        }

        match input.trim() {
            "n" | "tab" => Some(QuizCommand::Cycle),
            key => Script::ALL
                .into_iter()
                .find(|script| key.len() == 1 && key.starts_with(script.key()))
                .map(QuizCommand::Show),
        }
    }
}
