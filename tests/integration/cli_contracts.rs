use std::fs;

use innkeep::tooling::cli::{
    CliContext, Commands, ConfigCommands, CustomerCommands, HotelCommands, ReservationCommands,
};
use tempfile::TempDir;

use crate::integration::support::{cli_in, with_innkeep_env};

fn hotel_list_json() -> Commands {
    Commands::Hotel {
        command: HotelCommands::List {
            format: "json".to_string(),
        },
    }
}

#[test]
fn hotel_list_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let cli = cli_in(&temp_dir);

    let output = cli.execute(&hotel_list_json()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("exists").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(0));

    cli.execute(&Commands::Hotel {
        command: HotelCommands::Create {
            name: "Hotel A".to_string(),
            location: "City A".to_string(),
            rooms: vec!["101".to_string()],
        },
    })
    .unwrap();

    let output = cli.execute(&hotel_list_json()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("exists").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(1));
    assert!(parsed.get("path").and_then(|v| v.as_str()).is_some());
    let hotels = parsed
        .get("hotels")
        .and_then(|v| v.as_array())
        .expect("hotels array should exist");
    assert_eq!(hotels[0]["name"], "Hotel A");
    assert_eq!(hotels[0]["rooms"], serde_json::json!(["101"]));
}

#[test]
fn duplicate_create_reports_existing_record() {
    let temp_dir = TempDir::new().unwrap();
    let cli = cli_in(&temp_dir);
    let create = Commands::Customer {
        command: CustomerCommands::Create {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "123".to_string(),
        },
    };

    cli.execute(&create).unwrap();
    let output = cli.execute(&create).unwrap();
    assert_eq!(output, "Customer with email john@example.com already exists.");
}

#[test]
fn customer_show_json_is_the_stored_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let cli = cli_in(&temp_dir);
    cli.execute(&Commands::Seed).unwrap();

    let output = cli
        .execute(&Commands::Customer {
            command: CustomerCommands::Show {
                email: "john@example.com".to_string(),
                format: "json".to_string(),
            },
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "123-456-7890"
        })
    );
}

#[test]
fn reservation_for_missing_hotel_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let cli = cli_in(&temp_dir);
    cli.execute(&Commands::Seed).unwrap();

    let err = cli
        .execute(&Commands::Reservation {
            command: ReservationCommands::Create {
                email: "john@example.com".to_string(),
                hotel: "Hotel Nowhere".to_string(),
                room: "1".to_string(),
            },
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "hotel not found: Hotel Nowhere");
}

#[test]
fn reservation_list_text_shows_seeded_booking() {
    let temp_dir = TempDir::new().unwrap();
    let cli = cli_in(&temp_dir);
    cli.execute(&Commands::Seed).unwrap();

    let output = cli
        .execute(&Commands::Reservation {
            command: ReservationCommands::List {
                format: "text".to_string(),
            },
        })
        .unwrap();
    assert!(output.contains("John Doe"));
    assert!(output.contains("Hotel XYZ"));
    assert!(output.contains("Total: 1 reservations"));
}

#[test]
fn config_file_sets_collection_file_names() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[storage]\ndata_dir = {:?}\nhotels_file = \"inns.json\"\n",
            data_dir.display().to_string()
        ),
    )
    .unwrap();

    with_innkeep_env(&[], || {
        let cli = CliContext::new(None, Some(config_path.clone())).unwrap();
        assert_eq!(cli.paths().hotels, data_dir.join("inns.json"));
        assert_eq!(cli.paths().customers, data_dir.join("customers.json"));

        let output = cli
            .execute(&Commands::Config {
                command: ConfigCommands::Show,
            })
            .unwrap();
        let shown: toml::Value = toml::from_str(&output).unwrap();
        assert_eq!(shown["storage"]["hotels_file"].as_str(), Some("inns.json"));
    });
}

#[test]
fn data_dir_from_environment_reads_its_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("innkeep.toml"),
        "[storage]\nhotels_file = \"inns.json\"\n",
    )
    .unwrap();
    let data_dir = temp_dir.path().display().to_string();

    with_innkeep_env(&[("INNKEEP__STORAGE__DATA_DIR", data_dir.as_str())], || {
        let cli = CliContext::new(None, None).unwrap();
        assert_eq!(cli.data_dir(), temp_dir.path());
        assert_eq!(cli.paths().hotels, temp_dir.path().join("inns.json"));
        assert_eq!(
            cli.paths().reservations,
            temp_dir.path().join("reservations.json")
        );
    });
}

#[test]
fn missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = CliContext::new(None, Some(temp_dir.path().join("absent.toml")));
    assert!(result.is_err());
}
