// tests/export.rs
//
// Delimited output: quoting convention, round-trip, truncate semantics and
// output-path resolution.
//
use std::fs;
use std::path::PathBuf;

use tabjoin::csv::{self, Delim};
use tabjoin::file;

fn tmp(path: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(path);
    p
}

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn plain_fields_written_bare() {
    let out = csv::rows_to_string(&rows(&[&["Industry Codes", "51", "Finance"]]), ',');
    assert_eq!(out, "Industry Codes,51,Finance\n");
}

#[test]
fn fields_with_separator_quote_or_newline_are_quoted() {
    let out = csv::rows_to_string(
        &rows(&[&["a,b", "say \"hi\"", "line1\nline2", "plain"]]),
        ',',
    );
    assert_eq!(out, "\"a,b\",\"say \"\"hi\"\"\",\"line1\nline2\",plain\n");
}

#[test]
fn tsv_quotes_on_tab_not_comma() {
    let out = csv::rows_to_string(&rows(&[&["a,b", "c\td"]]), Delim::Tsv.sep());
    assert_eq!(out, "a,b\t\"c\td\"\n");
}

#[test]
fn round_trip_preserves_awkward_fields() {
    let original = rows(&[
        &["Table 1", "a,b", "say \"hi\""],
        &["Table 1", "line1\r\nline2", ""],
        &["Appendix", "plain", "51"],
    ]);
    let text = csv::rows_to_string(&original, ',');
    let parsed = csv::parse_rows(&text, ',');
    assert_eq!(parsed, original);
}

#[test]
fn write_rows_truncates_previous_content() {
    let p = tmp("tabjoin_truncate.csv");
    let first = rows(&[&["A", "1"], &["A", "2"], &["A", "3"]]);
    let second = rows(&[&["B", "9"]]);

    file::write_rows(&p, &first, ',').unwrap();
    file::write_rows(&p, &second, ',').unwrap();
    assert_eq!(fs::read_to_string(&p).unwrap(), "B,9\n");
}

#[test]
fn rewrite_with_same_input_is_byte_identical() {
    let p = tmp("tabjoin_idempotent.csv");
    let data = rows(&[&["T", "x,y", "z"]]);

    file::write_rows(&p, &data, ',').unwrap();
    let a = fs::read(&p).unwrap();
    file::write_rows(&p, &data, ',').unwrap();
    let b = fs::read(&p).unwrap();
    assert_eq!(a, b);
}

#[test]
fn write_failure_reports_the_path() {
    let p = tmp("tabjoin_target_is_dir");
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    // Target is an existing directory: File::create must fail.
    let err = file::write_rows(&p, &rows(&[&["a"]]), ',').unwrap_err();
    assert!(err.to_string().contains("tabjoin_target_is_dir"));
}

#[test]
fn empty_out_hint_uses_default_filename() {
    let p = file::resolve_out_path("", "tables.csv").unwrap();
    assert_eq!(p, PathBuf::from("tables.csv"));
}

#[test]
fn directory_hint_gets_default_filename_appended() {
    let dir = tmp("tabjoin_outdir");
    let _ = fs::remove_dir_all(&dir);
    let hint = format!("{}/", dir.display());
    let p = file::resolve_out_path(&hint, "tables.csv").unwrap();
    assert!(p.ends_with("tables.csv"));
    assert!(dir.is_dir()); // created on resolve
}

#[test]
fn file_hint_is_used_verbatim() {
    let p = file::resolve_out_path("out/custom.csv", "tables.csv").unwrap();
    assert_eq!(p, PathBuf::from("out/custom.csv"));
}
