//! Argument parsing for the discography binary

use clap::error::ErrorKind;
use clap::Parser;
use discography::cli::{Cli, Commands, ConfigCommands};
use rstest::rstest;

#[rstest]
fn given_lineage_args_when_parsing_then_positions_captured() {
    let cli = Cli::try_parse_from(["discography", "-vv", "lineage", "0", "1"]).unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Commands::Lineage { album: 0, song: 1 }));
}

#[rstest]
fn given_config_flag_after_subcommand_when_parsing_then_global() {
    let cli = Cli::try_parse_from(["discography", "config", "show", "--config", "x.toml"]).unwrap();

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Show
        }
    ));
}

#[rstest]
#[case(&["discography", "songs"])]
#[case(&["discography", "songs", "-1"])]
#[case(&["discography", "lineage", "0"])]
fn given_bad_positions_when_parsing_then_rejected(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
#[case(&["discography"], ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand)]
#[case(&["discography", "-v"], ErrorKind::MissingSubcommand)]
#[case(&["discography", "-c", "x.toml"], ErrorKind::MissingSubcommand)]
fn given_no_subcommand_when_parsing_then_rejected(#[case] args: &[&str], #[case] kind: ErrorKind) {
    let err = Cli::try_parse_from(args).unwrap_err();

    assert_eq!(err.kind(), kind);
}
