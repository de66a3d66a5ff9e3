use std::io::Write;

use clap::Parser;
use kq_config::Config;
use kq_types::Script;
use tempfile::NamedTempFile;

use crate::cli::Cli;
use crate::error::{
    AppError, EXIT_CONFIG, EXIT_EMPTY, EXIT_FILE_OPEN, EXIT_FILE_READ, EXIT_MALFORMED_FORMAT,
};
use crate::{load_store, select_quiz};

fn vocab_file(lines: &[&[u8]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    for line in lines {
        file.write_all(line).expect("write");
        file.write_all(b"\n").expect("write");
    }
    file
}

fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("kanjiquest").chain(args.iter().copied()))
        .expect("arguments parse")
}

fn load(cli: &Cli) -> Result<kq_core::EntryStore, AppError> {
    let config = cli.resolve_config()?;
    load_store(cli, &config)
}

#[test]
fn loads_and_selects_from_files() {
    let file = vocab_file(&[
        "# comment".as_bytes(),
        "shougo^しょうご^正午^correct+noon|noon".as_bytes(),
    ]);
    let path = file.path().to_str().expect("utf-8 path");
    let cli = parse_cli(&["--once", "-s", "english", "--seed", "3", path]);

    let config = cli.resolve_config().expect("config resolves");
    let store = load_store(&cli, &config).expect("store loads");
    assert_eq!(store.len(), 1);

    let quiz = select_quiz(store, cli.seed, &config).expect("quiz selected");
    assert_eq!(quiz.current(), Script::English);
    assert_eq!(quiz.display(), "noon");
    assert_eq!(quiz.title(), Config::default().ui.title);
}

#[test]
fn custom_format_from_flag() {
    let file = vocab_file(&["しょうご,正午,correct+noon,noon".as_bytes()]);
    let path = file.path().to_str().expect("utf-8 path");
    let cli = parse_cli(&["-v", "%h,%k,%r,%e", path]);

    let store = load(&cli).expect("store loads");
    assert_eq!(store.entries()[0].mnemonic.raw(), "correct+noon");
}

#[test]
fn malformed_format_exits_before_opening_files() {
    let cli = parse_cli(&["-v", "%h%k^%r^%e", "/nonexistent/vocab.txt"]);

    let err = load(&cli).expect_err("format is malformed");
    assert_eq!(err.exit_code(), EXIT_MALFORMED_FORMAT);
}

#[test]
fn missing_file_exit_code() {
    let cli = parse_cli(&["/nonexistent/vocab.txt"]);

    let err = load(&cli).expect_err("file is missing");
    assert_eq!(err.exit_code(), EXIT_FILE_OPEN);
}

#[test]
fn unreadable_file_exit_code() {
    let file = vocab_file(&[b"shougo^\xff^x^y|z"]);
    let path = file.path().to_str().expect("utf-8 path");
    let cli = parse_cli(&[path]);

    let err = load(&cli).expect_err("file is not utf-8");
    assert_eq!(err.exit_code(), EXIT_FILE_READ);
}

#[test]
fn no_matching_lines_exit_code() {
    let file = vocab_file(&["# only a comment".as_bytes(), b"", "shougo^しょうご".as_bytes()]);
    let path = file.path().to_str().expect("utf-8 path");
    let cli = parse_cli(&[path]);

    let config = cli.resolve_config().expect("config resolves");
    let store = load_store(&cli, &config).expect("store loads");
    assert_eq!(store.report().malformed, 1);

    let err = select_quiz(store, Some(1), &config).expect_err("nothing to pick");
    assert_eq!(err.exit_code(), EXIT_EMPTY);
    assert_eq!(err.to_string(), "no vocab matches format");
}

#[test]
fn invalid_config_exit_code() {
    let cli = parse_cli(&["--capacity", "0", "vocab.txt"]);

    let err = load(&cli).expect_err("capacity is invalid");
    assert_eq!(err.exit_code(), EXIT_CONFIG);
}

#[test]
fn files_are_required() {
    assert!(Cli::try_parse_from(["kanjiquest", "--once"]).is_err());
}

#[test]
fn unknown_script_is_a_usage_error() {
    assert!(Cli::try_parse_from(["kanjiquest", "-s", "romaji", "vocab.txt"]).is_err());
}
