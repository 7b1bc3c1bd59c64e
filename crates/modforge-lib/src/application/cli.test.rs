use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("modforge").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_command() {
    let cli = parse(&[]);
    assert!(cli.command.is_none());
}

#[test]
fn test_generate_with_output() {
    let cli = parse(&["generate", "-o", "project.json"]);
    assert_eq!(
        cli.command,
        Some(Commands::Generate {
            output: Some(PathBuf::from("project.json"))
        })
    );
}

#[test]
fn test_check_requires_output() {
    assert!(Cli::try_parse_from(["modforge", "check"]).is_err());
    let cli = parse(&["check", "--output", "project.json"]);
    assert_eq!(
        cli.command,
        Some(Commands::Check {
            output: PathBuf::from("project.json")
        })
    );
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = parse(&["resolve", "Feature", "--manifest", "shop.toml", "--log-level", "2"]);
    assert_eq!(
        cli.command,
        Some(Commands::Resolve {
            module: "Feature".to_string()
        })
    );
    assert_eq!(cli.config.manifest, PathBuf::from("shop.toml"));
    assert_eq!(cli.config.log_level, 2);
}

#[test]
fn test_cli_config_from_cli() {
    let config = CliConfig::from(parse(&["validate"]));
    assert_eq!(config.command, Some(Commands::Validate));
    assert_eq!(config.app_config.manifest, PathBuf::from("modforge.yml"));
}
