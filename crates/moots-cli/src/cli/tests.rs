//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_files_only() {
    let cli = parse(&["moots", "followers.json", "more.json"]);
    assert!(cli.folder.is_none());
    assert_eq!(
        cli.files,
        [Path::new("followers.json"), Path::new("more.json")]
    );
}

#[test]
fn cli_parse_folder_flag() {
    let cli = parse(&["moots", "--folder", "pics", "followers.json"]);
    assert_eq!(cli.folder.as_deref(), Some(Path::new("pics")));
    assert_eq!(cli.files, [Path::new("followers.json")]);
}

#[test]
fn cli_parse_zero_files_is_accepted() {
    // Zero files is not a parse error; the runner prints usage and does no
    // work instead of exiting with a failure status.
    let cli = parse(&["moots"]);
    assert!(cli.folder.is_none());
    assert!(cli.files.is_empty());
}

#[test]
fn cli_parse_folder_after_files() {
    let cli = parse(&["moots", "followers.json", "--folder", "out"]);
    assert_eq!(cli.folder.as_deref(), Some(Path::new("out")));
    assert_eq!(cli.files, [Path::new("followers.json")]);
}
