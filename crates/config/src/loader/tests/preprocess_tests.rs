//! Preprocessor tests: comment stripping, trimming, and file reading.

use crate::loader::error::ConfigError;
use crate::loader::preprocess::{
    CleanLine, clean_lines, preprocess, preprocess_file, read_config_text, strip_comment,
};

use super::{SAMPLE_CONFIG, write_config};

#[test]
fn test_trailing_comment_is_removed() {
    assert_eq!(
        strip_comment("keyA = valueA ; trailing comment"),
        "keyA = valueA"
    );
    assert_eq!(strip_comment("keyA = valueA # other style"), "keyA = valueA");
}

#[test]
fn test_first_marker_wins() {
    assert_eq!(strip_comment("a = b # c ; d"), "a = b");
    assert_eq!(strip_comment("a = b ; c # d"), "a = b");
}

#[test]
fn test_markers_inside_quotes_are_stripped() {
    assert_eq!(strip_comment(r#"url = "http://x/#anchor""#), r#"url = "http://x/"#);
}

#[test]
fn test_comment_only_and_blank_lines_are_dropped() {
    let lines = clean_lines("; comment\n\n   \n# another\n[a]\n");
    assert_eq!(
        lines,
        vec![CleanLine {
            number: 5,
            text: "[a]"
        }]
    );
}

#[test]
fn test_clean_lines_keep_original_numbers() {
    let numbers: Vec<usize> = clean_lines(SAMPLE_CONFIG)
        .iter()
        .map(|line| line.number)
        .collect();
    assert_eq!(numbers, vec![2, 3, 4, 6, 7, 8, 13, 14, 15]);
}

#[test]
fn test_preprocess_sample() {
    let expected = "[profile1]\nkey1 = value1\nkey2 = value2\n[profile2]\nkeyA = valueA\nkeyB = valueB\n[profile3]\nkeyX = valueX\nkeyY = valueY";
    assert_eq!(preprocess(SAMPLE_CONFIG), expected);
}

#[test]
fn test_preprocess_handles_crlf_and_indentation() {
    assert_eq!(preprocess("  [a]\r\n\tk = v  \r\n"), "[a]\nk = v");
}

#[test]
fn test_bare_carriage_returns_end_lines() {
    assert_eq!(preprocess("[a]\rk = v\r[b]\rx = y"), "[a]\nk = v\n[b]\nx = y");
}

#[test]
fn test_mixed_line_endings_keep_line_numbers() {
    let lines = clean_lines("[a]\r\nk = v\r\r\nx = y\n");
    assert_eq!(
        lines.iter().map(|line| line.number).collect::<Vec<_>>(),
        vec![1, 2, 4]
    );
    assert_eq!(lines[2].text, "x = y");
}

#[test]
fn test_preprocess_empty_input() {
    assert_eq!(preprocess(""), "");
    assert_eq!(preprocess("; only a comment"), "");
}

#[test]
fn test_preprocess_file_reads_from_disk() {
    let (_dir, path) = write_config("[a] ; header\nk = v\n");
    assert_eq!(preprocess_file(&path).unwrap(), "[a]\nk = v");
}

#[test]
fn test_missing_file_is_not_found() {
    let (dir, _path) = write_config("");
    let missing = dir.path().join("nope.ini");

    let result = read_config_text(&missing);
    assert!(matches!(result, Err(ConfigError::FileNotFound { path }) if path == missing));
}

#[test]
fn test_invalid_utf8_is_read_error() {
    let (dir, _path) = write_config("");
    let path = dir.path().join("binary.ini");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let result = read_config_text(&path);
    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}
