use std::io::Cursor;

use assert_matches::assert_matches;
use rstest::rstest;
use starmatch::Strategy;

use super::*;

fn app(pattern: &str, mode: OutputMode) -> App {
    App::new(
        Pattern::new(pattern).unwrap(),
        Options {
            mode,
            ..Default::default()
        },
    )
}

fn run(app: &App, inputs: &[&str]) -> (Summary, String) {
    let mut output = Vec::new();
    let summary = app.run(inputs.iter().map(Ok), &mut output).unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn test_verdict() {
    let (summary, output) = run(&app("c*a*b", OutputMode::Verdict), &["aab", "abc", "b"]);
    assert_eq!(output, "true\nfalse\ntrue\n");
    assert_eq!(summary, Summary { inputs: 3, matched: 2 });
}

#[test]
fn test_filter() {
    let (summary, output) = run(&app("a.*", OutputMode::Filter), &["abc", "bac", "a", ""]);
    assert_eq!(output, "abc\na\n");
    assert_eq!(summary, Summary { inputs: 4, matched: 2 });
}

#[test]
fn test_count() {
    let (summary, output) = run(&app("a*", OutputMode::Count), &["", "a", "ab", "aaa"]);
    assert_eq!(output, "3\n");
    assert_eq!(summary.matched, 3);
}

#[test]
fn test_count_without_inputs() {
    let (summary, output) = run(&app("a*", OutputMode::Count), &[]);
    assert_eq!(output, "0\n");
    assert_eq!(summary, Summary::default());
}

#[rstest]
#[case(Strategy::Table, true)]
#[case(Strategy::Table, false)]
#[case(Strategy::Memo, true)]
#[case(Strategy::Memo, false)]
fn test_matching_options(#[case] strategy: Strategy, #[case] prefilter: bool) {
    let app = App::new(
        Pattern::new("mis*is*p*.").unwrap(),
        Options {
            matching: MatchOptions { strategy, prefilter },
            mode: OutputMode::Verdict,
        },
    );
    let (_, output) = run(&app, &["mississippi", "missisp!"]);
    assert_eq!(output, "false\ntrue\n");
}

#[test]
fn test_run_lines() {
    let app = app("a.c", OutputMode::Verdict);
    let mut output = Vec::new();
    let summary = app.run_lines(Cursor::new("abc\r\nabd\naxc"), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "true\nfalse\ntrue\n");
    assert_eq!(summary, Summary { inputs: 3, matched: 2 });
}

#[test]
fn test_run_lines_invalid_utf8() {
    let app = app(".*", OutputMode::Verdict);
    let mut output = Vec::new();
    let result = app.run_lines(Cursor::new(b"ok\n\xff\xfe\n".to_vec()), &mut output);
    assert_matches!(result, Err(Error::Io(_)));
    assert_eq!(String::from_utf8(output).unwrap(), "true\n");
}

#[test]
fn test_exit_code() {
    assert_eq!(Summary { inputs: 2, matched: 1 }.exit_code(), 0);
    assert_eq!(Summary { inputs: 2, matched: 0 }.exit_code(), 1);
    assert_eq!(Summary::default().exit_code(), 1);
}
