use super::*;
use crate::primitives::{ColorIntent, OutputFormat};
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("depsort").chain(args.iter().copied()))
        .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", args, e))
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_parse_order_command() {
    let cli = parse(&["order", "web"]);
    assert_eq!(
        cli.command,
        Some(Commands::Order {
            package: "web".to_string()
        })
    );
}

#[test]
fn test_parse_to_install_positional_order() {
    let cli = parse(&["to-install", "A", "B"]);
    assert_eq!(
        cli.command,
        Some(Commands::ToInstall {
            new: "A".to_string(),
            installed: "B".to_string()
        })
    );
}

#[test]
fn test_parse_deps_transitive_flag() {
    let cli = parse(&["deps", "A", "--transitive"]);
    assert_eq!(
        cli.command,
        Some(Commands::Deps {
            package: "A".to_string(),
            transitive: true
        })
    );

    let cli = parse(&["deps", "A"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Deps {
            transitive: false,
            ..
        })
    ));
}

#[test]
fn test_parse_global_options() {
    let cli = parse(&[
        "--manifest",
        "deps.toml",
        "--format",
        "json",
        "--color",
        "never",
        "--log-level",
        "3",
        "order-all",
    ]);

    assert_eq!(cli.config.manifest, std::path::PathBuf::from("deps.toml"));
    assert_eq!(cli.config.format, OutputFormat::Json);
    assert_eq!(cli.config.color, ColorIntent::Never);
    assert_eq!(cli.config.log_level, 3);
    assert_eq!(cli.command, Some(Commands::OrderAll));
}

#[test]
fn test_log_level_out_of_range_is_rejected() {
    let result = Cli::try_parse_from(["depsort", "--log-level", "9", "packages"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_positional_is_rejected() {
    assert!(Cli::try_parse_from(["depsort", "to-install", "A"]).is_err());
    assert!(Cli::try_parse_from(["depsort", "order"]).is_err());
}

#[test]
fn test_no_subcommand_is_allowed() {
    let cli = parse(&[]);
    assert!(cli.command.is_none());
}

#[test]
fn test_requires_manifest() {
    assert!(!Commands::Version.requires_manifest());
    assert!(Commands::Packages.requires_manifest());
    assert!(Commands::MaxDeps.requires_manifest());
    assert!(
        Commands::Order {
            package: "x".to_string()
        }
        .requires_manifest()
    );
}
