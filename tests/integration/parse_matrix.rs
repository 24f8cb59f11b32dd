use clap::{CommandFactory, Parser};
use innkeep::tooling::cli::{Cli, Commands, HotelCommands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["innkeep", "seed"],
        vec!["innkeep", "config", "show"],
        vec!["innkeep", "hotel", "create", "Hotel A", "--location", "City A"],
        vec![
            "innkeep", "hotel", "create", "Hotel A", "--location", "City A", "--room", "101",
            "--room", "102",
        ],
        vec!["innkeep", "hotel", "delete", "Hotel A"],
        vec!["innkeep", "hotel", "modify", "Hotel A", "--location", "City B"],
        vec!["innkeep", "hotel", "list", "--format", "json"],
        vec!["innkeep", "hotel", "show", "Hotel A"],
        vec![
            "innkeep", "customer", "create", "John Doe", "--email", "john@example.com", "--phone",
            "123",
        ],
        vec!["innkeep", "customer", "modify", "john@example.com", "--phone", "456"],
        vec!["innkeep", "customer", "delete", "john@example.com"],
        vec!["innkeep", "customer", "list"],
        vec![
            "innkeep", "reservation", "create", "--email", "john@example.com", "--hotel",
            "Hotel A", "--room", "101",
        ],
        vec![
            "innkeep", "reservation", "cancel", "--email", "john@example.com", "--hotel",
            "Hotel A", "--room", "101",
        ],
        vec!["innkeep", "--data-dir", "/tmp/innkeep", "reservation", "list"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_incomplete_commands() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["innkeep", "hotel", "create", "Hotel A"],
        vec!["innkeep", "customer", "create", "John Doe", "--email", "john@example.com"],
        vec!["innkeep", "reservation", "cancel", "--email", "john@example.com"],
        vec!["innkeep", "hotel", "list", "--format", "yaml"],
    ];

    for args in cases {
        assert!(
            Cli::try_parse_from(args.clone()).is_err(),
            "expected parse failure for args: {args:?}"
        );
    }
}

#[test]
fn repeated_room_flags_collect_in_order() {
    let cli = Cli::try_parse_from([
        "innkeep", "hotel", "create", "Hotel A", "--location", "City A", "--room", "102", "--room",
        "101",
    ])
    .unwrap();

    match cli.command {
        Commands::Hotel {
            command: HotelCommands::Create { rooms, .. },
        } => assert_eq!(rooms, vec!["102".to_string(), "101".to_string()]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
