use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("dotstar").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_pattern_and_texts() {
    let opt = parse(&["c*a*b", "aab", "b"]);
    assert_eq!(opt.pattern.as_deref(), Some("c*a*b"));
    assert_eq!(opt.texts, vec!["aab", "b"]);
    assert!(!opt.no_prefilter);
}

#[test]
fn test_pattern_required() {
    assert!(Opt::try_parse_from(["dotstar"]).is_err());
    let opt = Opt::try_parse_from(["dotstar", "--shell-completions", "bash"]).unwrap();
    assert_eq!(opt.shell_completions, Some(Shell::Bash));
    assert_eq!(opt.pattern, None);
}

#[test]
fn test_options() {
    let opt = parse(&["--strategy", "memo", "-o", "count", "--no-prefilter", "a*"]);
    assert_eq!(opt.strategy, Some(StrategyOption::Memo));
    assert_eq!(opt.output, Some(OutputOption::Count));
    assert!(opt.no_prefilter);

    let opt = parse(&["-s", "memo", "-s", "table", "a*"]);
    assert_eq!(opt.strategy, Some(StrategyOption::Table));

    assert!(Opt::try_parse_from(["dotstar", "--strategy", "greedy", "a*"]).is_err());
}

#[test]
fn test_config_files() {
    let opt = parse(&["a*"]);
    assert_eq!(opt.config_files(), (&[][..], false));

    let opt = parse(&["--config", "a.toml", "--config", "b.toml", "a*"]);
    assert_eq!(opt.config_files(), (&["a.toml".to_owned(), "b.toml".to_owned()][..], false));

    let opt = parse(&["--config", "a.toml", "--config", "-", "--config", "b.toml", "a*"]);
    assert_eq!(opt.config_files(), (&["b.toml".to_owned()][..], true));

    let opt = parse(&["--config", "a.toml", "--config", "", "a*"]);
    assert_eq!(opt.config_files(), (&[][..], true));
}

#[test]
fn test_option_conversion() {
    assert_eq!(MatchStrategy::from(StrategyOption::Table), MatchStrategy::Table);
    assert_eq!(MatchStrategy::from(StrategyOption::Memo), MatchStrategy::Memo);
    assert_eq!(OutputMode::from(OutputOption::Verdict), OutputMode::Verdict);
    assert_eq!(OutputMode::from(OutputOption::Filter), OutputMode::Filter);
    assert_eq!(OutputMode::from(OutputOption::Count), OutputMode::Count);
}

#[test]
fn test_hyphen_after_separator() {
    let opt = parse(&["--", "-a*", "-aaa", "--x"]);
    assert_eq!(opt.pattern.as_deref(), Some("-a*"));
    assert_eq!(opt.texts, vec!["-aaa", "--x"]);

    assert!(Opt::try_parse_from(["dotstar", "-a*", "-aaa"]).is_err());
}

#[test]
fn test_pattern_present_without_completions() {
    for args in [&["a*"][..], &["a*", "x"][..], &["-s", "memo", "a*"][..]] {
        let opt = parse(args);
        assert!(opt.shell_completions.is_none());
        assert!(opt.pattern.is_some());
    }
}
