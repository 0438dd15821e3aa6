use bookbinder::record::ParseError;
use bookbinder::{BindError, Binder, Config, RunSummary};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn binder_into(dir: &TempDir) -> Binder {
    Binder::new(Config {
        delimiter: '|',
        output_dir: Some(dir.path().to_path_buf()),
    })
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn round_trip_sorts_body_and_reports_stats() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ttl.txt", "hello|2\nworld|1\nhella|3\n");

    let output = binder_into(&dir).bind(&input).unwrap();

    assert_eq!(output, dir.path().join("TTL_book.txt"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "TTL\nLongest line (3): hella\nAverage length: 5\nworld\nhello\nhella\n"
    );
}

#[test]
fn short_stem_pads_the_file_name_only() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ab.txt", "only line|1\n");

    let output = binder_into(&dir).bind(&input).unwrap();

    assert_eq!(output, dir.path().join("ABX_book.txt"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "AB\nLongest line (1): only line\nAverage length: 9\nonly line\n"
    );
}

#[test]
fn missing_input_reports_and_later_files_still_bind() {
    let dir = TempDir::new().unwrap();
    let binder = binder_into(&dir);
    let good = write_input(&dir, "woo.txt", "steady|1\n");

    let mut summary = RunSummary::default();
    for path in [Path::new("no-such-library.txt"), good.as_path()] {
        summary.record(&binder.bind(path));
    }

    assert_eq!(summary.missing, 1);
    assert_eq!(summary.written, 1);
    assert!(dir.path().join("WOO_book.txt").exists());
}

#[test]
fn missing_input_is_a_missing_file_error() {
    let dir = TempDir::new().unwrap();
    let outcome = binder_into(&dir).bind(Path::new("no-such-library.txt"));

    assert!(matches!(outcome, Err(BindError::MissingFile { .. })));
}

#[test]
fn empty_file_is_an_empty_input_error_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ttl.txt", "");

    let outcome = binder_into(&dir).bind(&input);

    assert!(matches!(outcome, Err(BindError::EmptyInput { .. })));
    assert!(!dir.path().join("TTL_book.txt").exists());
}

#[test]
fn malformed_line_fails_only_that_file() {
    let dir = TempDir::new().unwrap();
    let binder = binder_into(&dir);
    let bad = write_input(&dir, "bad.txt", "fine|1\nno delimiter here\n");
    let good = write_input(&dir, "woo.txt", "steady|1\n");

    let mut summary = RunSummary::default();
    for path in [bad.as_path(), good.as_path()] {
        summary.record(&binder.bind(path));
    }

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.written, 1);
    assert!(!dir.path().join("BAD_book.txt").exists());
    assert!(dir.path().join("WOO_book.txt").exists());
}

#[test]
fn malformed_line_error_names_the_line() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.txt", "fine|1\nhello|two\n");

    match binder_into(&dir).bind(&input) {
        Err(BindError::MalformedLine { source, .. }) => {
            assert_eq!(
                source,
                ParseError::BadSequence {
                    line: 2,
                    field: "two".to_string()
                }
            );
        }
        other => panic!("expected MalformedLine, got {:?}", other.map(|p| p.display().to_string())),
    }
}

#[test]
fn equal_sequence_numbers_keep_file_order_in_the_body() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ttl.txt", "b|2\na|1\nc|2\n");

    let output = binder_into(&dir).bind(&input).unwrap();
    let content = fs::read_to_string(&output).unwrap();
    let body: Vec<&str> = content.lines().skip(3).collect();

    assert_eq!(body, ["a", "b", "c"]);
}

#[test]
fn custom_delimiter_from_config_is_honored() {
    let dir = TempDir::new().unwrap();
    let binder = Binder::new(Config {
        delimiter: ';',
        output_dir: Some(dir.path().to_path_buf()),
    });
    let input = write_input(&dir, "ttl.txt", "hello;1\n");

    let output = binder.bind(&input).unwrap();

    assert!(fs::read_to_string(&output).unwrap().contains("hello"));
}
