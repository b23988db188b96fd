use clap::Parser;
use clap::error::ErrorKind;
use graph_search_cli::cli::commands::search::{
    ExternalConnectionAddArgs, ExternalConnectionSubcommands, SearchSubcommands,
};
use graph_search_cli::cli::{Cli, Commands};

fn parse_add(args: &[&str]) -> (Cli, ExternalConnectionAddArgs) {
    let mut argv = vec!["graph-search-cli", "search", "externalconnection", "add"];
    argv.extend_from_slice(args);

    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    let add = match &cli.command {
        Commands::Search(search) => match &search.command {
            SearchSubcommands::ExternalConnection { command } => match command {
                ExternalConnectionSubcommands::Add(add) => add.clone(),
            },
        },
        _ => panic!("expected the search command"),
    };
    (cli, add)
}

#[test]
fn test_short_options() {
    let (_, add) = parse_add(&["-i", "ContosoHR", "-n", "Contoso HR", "-d", "HR data"]);

    assert_eq!(add.id, "ContosoHR");
    assert_eq!(add.name, "Contoso HR");
    assert_eq!(add.description, "HR data");
    assert_eq!(add.authorized_app_ids, None);
}

#[test]
fn test_long_options_and_authorized_app_ids() {
    let (_, add) = parse_add(&[
        "--id",
        "ContosoHR",
        "--name",
        "Contoso HR",
        "--description",
        "HR data",
        "--authorizedAppIds",
        "app1,app2",
    ]);

    assert_eq!(add.authorized_app_ids.as_deref(), Some("app1,app2"));
}

#[test]
fn test_bare_authorized_app_ids_flag_is_empty() {
    let (_, add) = parse_add(&["-i", "ContosoHR", "-n", "N", "-d", "D", "--authorizedAppIds"]);

    assert_eq!(add.authorized_app_ids.as_deref(), Some(""));
}

#[test]
fn test_missing_required_option() {
    let err = Cli::try_parse_from([
        "graph-search-cli",
        "search",
        "externalconnection",
        "add",
        "-i",
        "ContosoHR",
        "-d",
        "HR data",
    ])
    .err()
    .expect("--name is required");

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_global_flags_after_subcommand() {
    let (cli, _) = parse_add(&[
        "-i", "ContosoHR", "-n", "N", "-d", "D", "--env", "prod", "--debug",
    ]);

    assert_eq!(cli.env.as_deref(), Some("prod"));
    assert_eq!(cli.log_level(), Some(log::LevelFilter::Debug));
}

#[test]
fn test_auth_remove_parses() {
    let cli = Cli::try_parse_from(["graph-search-cli", "auth", "remove", "prod", "--force"])
        .expect("arguments should parse");

    assert!(matches!(cli.command, Commands::Auth(_)));
    assert_eq!(cli.log_level(), None);
}
