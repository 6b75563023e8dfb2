use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["topicscout"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_score_with_defaults() {
    let cli = Cli::try_parse_from(["topicscout", "score"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            file: None,
            mode: None,
            json: false,
            top: None,
            max_concurrent: None,
        })
    ));
}

#[test]
fn parses_score_with_all_flags() {
    let cli = Cli::try_parse_from([
        "topicscout",
        "score",
        "--file",
        "topics.json",
        "--mode",
        "three_source",
        "--json",
        "--top",
        "5",
        "--max-concurrent",
        "8",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Score {
            file,
            mode,
            json,
            top,
            max_concurrent,
        }) => {
            assert_eq!(file, Some(PathBuf::from("topics.json")));
            assert_eq!(mode, Some(ScoringMode::ThreeSource));
            assert!(json);
            assert_eq!(top, Some(5));
            assert_eq!(max_concurrent, Some(8));
        }
        other => panic!("expected score command, got: {other:?}"),
    }
}

#[test]
fn rejects_unknown_mode() {
    let result = Cli::try_parse_from(["topicscout", "score", "--mode", "four_source"]);
    assert!(result.is_err());
}

#[test]
fn rejects_non_numeric_top() {
    let result = Cli::try_parse_from(["topicscout", "score", "--top", "many"]);
    assert!(result.is_err());
}

#[test]
fn parses_check_with_file() {
    let cli = Cli::try_parse_from(["topicscout", "check", "--file", "t.yaml"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Check { file: Some(ref f) }) if f == &PathBuf::from("t.yaml")
    ));
}
