use std::io::BufRead;

use anyhow::Context;
use kq_core::SelectedQuiz;
use kq_types::QuizCommand;

use crate::render::Renderer;

pub const KEY_HELP: &str = "[1] reading  [2] logograph  [3] mnemonic  [4] english  [n] next  [q] quit";

/// Show the quiz and, when interactive, switch scripts on key input until quit or end of input
pub fn run_session<I, R>(
    quiz: &mut SelectedQuiz,
    input: I,
    renderer: &mut R,
    interactive: bool,
) -> anyhow::Result<()>
where
    I: BufRead,
    R: Renderer,
{
    renderer.render(&quiz.title(), quiz.display())?;
    if !interactive {
        return Ok(());
    }

    for line in input.lines() {
        let line = line.context("failed to read key input")?;
        let Some(command) = QuizCommand::from_key(&line) else {
            tracing::debug!("Ignoring key input {line:?}");
            continue;
        };

        if !quiz.apply(command) {
            tracing::debug!("Quit requested");
            break;
        }
        renderer.render(&quiz.title(), quiz.display())?;
    }

    Ok(())
}
