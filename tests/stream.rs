//! End-to-end runs of the stream driver against in-memory sinks.

use canon_date::{Summary, process_lines};

struct Run {
    out: String,
    diag: String,
    summary: Summary,
}

fn run(input: &str) -> Run {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let summary = process_lines(input.as_bytes(), &mut out, &mut diag).unwrap();
    Run {
        out: String::from_utf8(out).unwrap(),
        diag: String::from_utf8(diag).unwrap(),
        summary,
    }
}

/// Runs a single line and returns `(stdout, stderr)` without trailing newlines.
fn one(line: &str) -> (String, String) {
    let run = run(&format!("{line}\n"));
    assert_eq!(run.summary.lines, 1);
    (
        run.out.trim_end_matches('\n').to_owned(),
        run.diag.trim_end_matches('\n').to_owned(),
    )
}

fn accepted(line: &str, expected: &str) {
    let (out, diag) = one(line);
    assert_eq!(out, expected, "line {line:?}");
    assert!(diag.is_empty(), "line {line:?} produced diagnostic {diag:?}");
}

fn unrecognised(line: &str) {
    let (out, diag) = one(line);
    assert!(out.is_empty(), "line {line:?} produced output {out:?}");
    assert_eq!(diag, format!("{line} - Format not recognised."));
}

fn not_valid(line: &str) {
    let (out, diag) = one(line);
    assert!(out.is_empty(), "line {line:?} produced output {out:?}");
    assert_eq!(diag, format!("{line} - Date not valid."));
}

#[test]
fn two_digit_year_window() {
    accepted("01/02/49", "01 Feb 2049");
    accepted("01/02/50", "01 Feb 1950");
    accepted("01/02/99", "01 Feb 1999");
    accepted("01/02/00", "01 Feb 2000");
}

#[test]
fn separators_must_match() {
    unrecognised("1-2/1999");
    unrecognised("1/2-1999");
    unrecognised("1 2/1999");
    accepted("1-2-1999", "01 Feb 1999");
    accepted("1 2 1999", "01 Feb 1999");
}

#[test]
fn leap_years() {
    accepted("29 02 2000", "29 Feb 2000");
    not_valid("29 02 1900");
    accepted("29 02 2004", "29 Feb 2004");
    not_valid("29 02 2001");
    not_valid("30 02 2000");
}

#[test]
fn month_casing() {
    accepted("1 JAN 2000", "01 Jan 2000");
    accepted("1 jan 2000", "01 Jan 2000");
    accepted("1 Jan 2000", "01 Jan 2000");
    unrecognised("1 JaN 2000");
    unrecognised("1 jAN 2000");
}

#[test]
fn unknown_month_name_is_not_valid() {
    not_valid("1 xyz 2000");
    not_valid("1 ABC 2000");
}

#[test]
fn year_bounds() {
    not_valid("1 1 1752");
    accepted("1 1 1753", "01 Jan 1753");
    accepted("31 12 3000", "31 Dec 3000");
    not_valid("1 1 3001");
    not_valid("1 1 0012");
}

#[test]
fn days_per_month() {
    not_valid("31 04 2000");
    accepted("30 04 2000", "30 Apr 2000");
    accepted("31-aug-2000", "31 Aug 2000");
    not_valid("32 01 2000");
    not_valid("00 01 2000");
    not_valid("1 13 2000");
    not_valid("1 0 2000");
}

#[test]
fn malformed_shapes() {
    unrecognised("123/4/2000");
    unrecognised("1/113/2000");
    unrecognised("");
    unrecognised("1 2 2000 ");
    unrecognised(" 1 2 2000");
    unrecognised("1/4/200");
    unrecognised("1.2.2000");
    unrecognised("1\t2\t2000");
    unrecognised("January 1 2000");
}

#[test]
fn mixed_stream_keeps_order_per_sink() {
    let run = run("1/2/1999\nnope\n31 04 2000\n3-MAR-03\r\n4 apr 2004");
    assert_eq!(run.out, "01 Feb 1999\n03 Mar 2003\n04 Apr 2004\n");
    assert_eq!(
        run.diag,
        "nope - Format not recognised.\n31 04 2000 - Date not valid.\n"
    );
    assert_eq!(
        run.summary,
        Summary {
            lines: 5,
            accepted: 3,
            unrecognised: 1,
            invalid: 1,
        }
    );
}
