use std::io::Cursor;

use kq_core::{Format, SelectedQuiz};
use kq_types::Script;

use crate::render::Renderer;
use crate::session::run_session;

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(String, String)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, title: &str, text: &str) -> anyhow::Result<()> {
        self.frames.push((title.to_string(), text.to_string()));
        Ok(())
    }
}

fn ageru() -> SelectedQuiz {
    let entry = Format::compile(kq_core::DEFAULT_FORMAT)
        .expect("default format compiles")
        .parse("ageru^あげる^上げる^above+げる^transitive|to give")
        .expect("line parses");
    SelectedQuiz::from_entry(&entry, 0)
}

fn texts(renderer: &RecordingRenderer) -> Vec<&str> {
    renderer.frames.iter().map(|(_, text)| text.as_str()).collect()
}

#[test]
fn non_interactive_renders_once() {
    let mut quiz = ageru();
    let mut renderer = RecordingRenderer::default();

    run_session(&mut quiz, Cursor::new("1\n2\n"), &mut renderer, false).expect("session runs");

    assert_eq!(texts(&renderer), vec!["上げる"]);
    assert_eq!(renderer.frames[0].0, "漢字探求 (transitive)");
}

#[test]
fn keys_switch_scripts_until_quit() {
    let mut quiz = ageru();
    let mut renderer = RecordingRenderer::default();

    run_session(
        &mut quiz,
        Cursor::new("1\n3\nx\n4\nq\n2\n"),
        &mut renderer,
        true,
    )
    .expect("session runs");

    assert_eq!(
        texts(&renderer),
        vec!["上げる", "あげる", "above+げる", "to give"]
    );
    assert_eq!(quiz.current(), Script::English);
}

#[test]
fn end_of_input_ends_session() {
    let mut quiz = ageru().starting_at(Script::Reading);
    let mut renderer = RecordingRenderer::default();

    run_session(&mut quiz, Cursor::new("n\n"), &mut renderer, true).expect("session runs");

    assert_eq!(texts(&renderer), vec!["あげる", "上げる"]);
}

#[test]
fn empty_line_quits() {
    let mut quiz = ageru();
    let mut renderer = RecordingRenderer::default();

    run_session(&mut quiz, Cursor::new("\n1\n"), &mut renderer, true).expect("session runs");

    assert_eq!(renderer.frames.len(), 1);
}
