//! CLI Tooling
//!
//! Command-line interface for hotel, customer and reservation records. Every
//! command maps to one command-service call against the configured
//! collection files.

use crate::commands::{
    CustomerCommandService, HotelCommandService, ReservationCommandService, SeedCommandService,
};
use crate::config::{CollectionPaths, ConfigLoader, InnkeepConfig};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::model::{CustomerUpdate, HotelUpdate};
use crate::repository::RecordRepository;
use crate::tooling::format::{
    format_create_result, format_delete_result, format_list_json, format_list_text,
    format_modify_result, format_seed_result, to_pretty_json,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Innkeep CLI - hotel, customer and reservation records
#[derive(Parser, Debug)]
#[command(name = "innkeep")]
#[command(about = "Keep hotel, customer and reservation records in JSON files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding hotels.json, customers.json and reservations.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage hotels
    Hotel {
        #[command(subcommand)]
        command: HotelCommands,
    },
    /// Manage customers
    Customer {
        #[command(subcommand)]
        command: CustomerCommands,
    },
    /// Manage reservations
    Reservation {
        #[command(subcommand)]
        command: ReservationCommands,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Insert a sample hotel, customer and reservation
    Seed,
}

#[derive(Subcommand, Debug, Clone)]
pub enum HotelCommands {
    /// Add a hotel (skipped if the name is taken)
    Create {
        /// Hotel name (unique)
        name: String,
        /// Hotel location
        #[arg(long)]
        location: String,
        /// Room identifier; repeat for several rooms
        #[arg(long = "room")]
        rooms: Vec<String>,
    },
    /// Remove a hotel by name
    Delete {
        name: String,
    },
    /// Change a hotel's location and/or rooms
    Modify {
        name: String,
        /// New location
        #[arg(long)]
        location: Option<String>,
        /// Replacement room list; repeat for several rooms
        #[arg(long = "room")]
        rooms: Vec<String>,
    },
    /// List hotels
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show one hotel
    Show {
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CustomerCommands {
    /// Add a customer (skipped if the email is taken)
    Create {
        /// Customer name
        name: String,
        /// Email address (unique)
        #[arg(long)]
        email: String,
        /// Phone number
        #[arg(long)]
        phone: String,
    },
    /// Remove a customer by email
    Delete {
        email: String,
    },
    /// Change a customer's name and/or phone
    Modify {
        email: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// List customers
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show one customer
    Show {
        email: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ReservationCommands {
    /// Reserve a room for a stored customer at a stored hotel
    Create {
        /// Customer email
        #[arg(long)]
        email: String,
        /// Hotel name
        #[arg(long)]
        hotel: String,
        /// Room identifier
        #[arg(long)]
        room: String,
    },
    /// Cancel the reservation matching email, hotel and room
    Cancel {
        /// Customer email
        #[arg(long)]
        email: String,
        /// Hotel name
        #[arg(long)]
        hotel: String,
        /// Room identifier
        #[arg(long)]
        room: String,
    },
    /// List reservations
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

impl Cli {
    /// Fold the logging flags over the configured logging settings.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// CLI context: resolved configuration and collection paths.
pub struct CliContext {
    repo: RecordRepository,
    config: InnkeepConfig,
    data_dir: PathBuf,
    paths: CollectionPaths,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from the standard sources
    /// or from `config_path` when given.
    pub fn new(data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = Self::load_config(data_dir.as_deref(), config_path.as_deref())?;
        Self::with_config(config, data_dir)
    }

    /// Load configuration without building a context.
    pub fn load_config(
        data_dir: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<InnkeepConfig, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(data_dir)?,
        };
        Ok(config)
    }

    /// Build a context from an already loaded configuration.
    pub fn with_config(config: InnkeepConfig, data_dir: Option<PathBuf>) -> Result<Self, ApiError> {
        let data_dir = config.storage.resolve_data_dir(data_dir.as_deref())?;
        let paths = config.storage.resolve_paths(Some(&data_dir))?;
        tracing::debug!(
            hotels = %paths.hotels.display(),
            customers = %paths.customers.display(),
            reservations = %paths.reservations.display(),
            "Resolved collection paths"
        );
        Ok(Self {
            repo: RecordRepository::json(),
            config,
            data_dir,
            paths,
        })
    }

    pub fn paths(&self) -> &CollectionPaths {
        &self.paths
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &InnkeepConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::debug!(command = command_name(command), elapsed_ms, "Command finished"),
            Err(e) => tracing::warn!(
                command = command_name(command),
                elapsed_ms,
                error = %e,
                "Command failed"
            ),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Hotel { command } => self.handle_hotel_command(command),
            Commands::Customer { command } => self.handle_customer_command(command),
            Commands::Reservation { command } => self.handle_reservation_command(command),
            Commands::Config { command } => match command {
                ConfigCommands::Show => self.handle_config_show(),
            },
            Commands::Seed => {
                let result = SeedCommandService::run(&self.repo, &self.paths)?;
                Ok(format_seed_result(&result))
            }
        }
    }

    fn handle_hotel_command(&self, command: &HotelCommands) -> Result<String, ApiError> {
        match command {
            HotelCommands::Create {
                name,
                location,
                rooms,
            } => {
                let result = HotelCommandService::create(
                    &self.repo,
                    &self.paths,
                    name,
                    location,
                    rooms.clone(),
                )?;
                Ok(format_create_result(
                    &result,
                    &format!("Hotel with name {} already exists.", name),
                ))
            }
            HotelCommands::Delete { name } => {
                let result = HotelCommandService::delete(&self.repo, &self.paths, name)?;
                Ok(format_delete_result("hotel", &result))
            }
            HotelCommands::Modify {
                name,
                location,
                rooms,
            } => {
                let update = HotelUpdate {
                    name: None,
                    location: location.clone(),
                    rooms: (!rooms.is_empty()).then(|| rooms.clone()),
                };
                let result = HotelCommandService::modify(&self.repo, &self.paths, name, &update)?;
                Ok(format_modify_result(&result, |hotel| hotel.display_info()))
            }
            HotelCommands::List { format } => {
                let result = HotelCommandService::list(&self.repo, &self.paths)?;
                if format == "json" {
                    format_list_json(&result)
                } else {
                    Ok(format_list_text(&result))
                }
            }
            HotelCommands::Show { name, format } => {
                let hotel = HotelCommandService::show(&self.repo, &self.paths, name)?;
                if format == "json" {
                    to_pretty_json(&hotel)
                } else {
                    Ok(hotel.display_info())
                }
            }
        }
    }

    fn handle_customer_command(&self, command: &CustomerCommands) -> Result<String, ApiError> {
        match command {
            CustomerCommands::Create { name, email, phone } => {
                let result =
                    CustomerCommandService::create(&self.repo, &self.paths, name, email, phone)?;
                Ok(format_create_result(
                    &result,
                    &format!("Customer with email {} already exists.", email),
                ))
            }
            CustomerCommands::Delete { email } => {
                let result = CustomerCommandService::delete(&self.repo, &self.paths, email)?;
                Ok(format_delete_result("customer", &result))
            }
            CustomerCommands::Modify { email, name, phone } => {
                let update = CustomerUpdate {
                    name: name.clone(),
                    email: None,
                    phone: phone.clone(),
                };
                let result =
                    CustomerCommandService::modify(&self.repo, &self.paths, email, &update)?;
                Ok(format_modify_result(&result, |customer| customer.display_info()))
            }
            CustomerCommands::List { format } => {
                let result = CustomerCommandService::list(&self.repo, &self.paths)?;
                if format == "json" {
                    format_list_json(&result)
                } else {
                    Ok(format_list_text(&result))
                }
            }
            CustomerCommands::Show { email, format } => {
                let customer = CustomerCommandService::show(&self.repo, &self.paths, email)?;
                if format == "json" {
                    to_pretty_json(&customer)
                } else {
                    Ok(customer.display_info())
                }
            }
        }
    }

    fn handle_reservation_command(
        &self,
        command: &ReservationCommands,
    ) -> Result<String, ApiError> {
        match command {
            ReservationCommands::Create { email, hotel, room } => {
                let result =
                    ReservationCommandService::create(&self.repo, &self.paths, email, hotel, room)?;
                let mut out = format_create_result(&result, "Reservation already exists.");
                if result.outcome == crate::repository::CreateOutcome::Created {
                    out.push('\n');
                    out.push_str(&result.record.display_info());
                }
                Ok(out)
            }
            ReservationCommands::Cancel { email, hotel, room } => {
                let result =
                    ReservationCommandService::cancel(&self.repo, &self.paths, email, hotel, room)?;
                Ok(format_delete_result("reservation", &result))
            }
            ReservationCommands::List { format } => {
                let result = ReservationCommandService::list(&self.repo, &self.paths)?;
                if format == "json" {
                    format_list_json(&result)
                } else {
                    Ok(format_list_text(&result))
                }
            }
        }
    }

    fn handle_config_show(&self) -> Result<String, ApiError> {
        let mut effective = self.config.clone();
        effective.storage.data_dir = Some(self.data_dir.clone());
        toml::to_string_pretty(&effective)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Hotel { command } => match command {
            HotelCommands::Create { .. } => "hotel.create",
            HotelCommands::Delete { .. } => "hotel.delete",
            HotelCommands::Modify { .. } => "hotel.modify",
            HotelCommands::List { .. } => "hotel.list",
            HotelCommands::Show { .. } => "hotel.show",
        },
        Commands::Customer { command } => match command {
            CustomerCommands::Create { .. } => "customer.create",
            CustomerCommands::Delete { .. } => "customer.delete",
            CustomerCommands::Modify { .. } => "customer.modify",
            CustomerCommands::List { .. } => "customer.list",
            CustomerCommands::Show { .. } => "customer.show",
        },
        Commands::Reservation { command } => match command {
            ReservationCommands::Create { .. } => "reservation.create",
            ReservationCommands::Cancel { .. } => "reservation.cancel",
            ReservationCommands::List { .. } => "reservation.list",
        },
        Commands::Config { .. } => "config.show",
        Commands::Seed => "seed",
    }
}
