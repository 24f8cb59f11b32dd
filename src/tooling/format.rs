//! Text and JSON rendering of command results.

use crate::commands::{CreateResult, DeleteResult, ListResult, ModifyResult, SeedResult};
use crate::error::{ApiError, StorageError};
use crate::model::{Customer, Entity, Hotel, Reservation};
use crate::repository::{CreateOutcome, DeleteOutcome, ModifyOutcome};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

/// An entity that can be listed as a table.
pub trait Tabular: Entity {
    /// Collection name used in headings and JSON keys.
    const PLURAL: &'static str;

    fn header() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

impl Tabular for Hotel {
    const PLURAL: &'static str = "hotels";

    fn header() -> Vec<&'static str> {
        vec!["Name", "Location", "Rooms"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.location.clone(), self.rooms.join(", ")]
    }
}

impl Tabular for Customer {
    const PLURAL: &'static str = "customers";

    fn header() -> Vec<&'static str> {
        vec!["Name", "Email", "Phone"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone(), self.phone.clone()]
    }
}

impl Tabular for Reservation {
    const PLURAL: &'static str = "reservations";

    fn header() -> Vec<&'static str> {
        vec!["Customer", "Email", "Hotel", "Room"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.customer.name.clone(),
            self.customer.email.clone(),
            self.hotel.name.clone(),
            self.room_number.clone(),
        ]
    }
}

/// Section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn capitalized(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a list result as a table.
pub fn format_list_text<E: Tabular>(result: &ListResult<E>) -> String {
    let records = match &result.records {
        Some(records) => records,
        None => {
            return format!(
                "No {} recorded ({} does not exist).",
                E::PLURAL,
                result.path.display()
            )
        }
    };
    if records.is_empty() {
        return format!("No {} recorded.", E::PLURAL);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(E::header());
    for record in records {
        table.add_row(record.row());
    }
    format!(
        "{}\n{}\n\nTotal: {} {}",
        format_section_heading(&capitalized(E::PLURAL)),
        table,
        records.len(),
        E::PLURAL
    )
}

/// Format a list result as JSON.
pub fn format_list_json<E: Tabular>(result: &ListResult<E>) -> Result<String, ApiError> {
    let records = serde_json::to_value(result.records.as_deref().unwrap_or_default())
        .map_err(serialization_error)?;
    let mut out = serde_json::Map::new();
    out.insert(E::PLURAL.to_string(), records);
    out.insert("total".to_string(), json!(result.len()));
    out.insert("exists".to_string(), json!(result.records.is_some()));
    out.insert("path".to_string(), json!(result.path.display().to_string()));
    to_pretty_json(&out)
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(serialization_error)
}

fn serialization_error(err: serde_json::Error) -> ApiError {
    StorageError::Serialization(err.to_string()).into()
}

/// Format a create result. `exists_message` is shown for a skipped create.
pub fn format_create_result<E: Entity>(result: &CreateResult<E>, exists_message: &str) -> String {
    match result.outcome {
        CreateOutcome::Created => format!(
            "Created {} '{}' in {}",
            E::KIND,
            result.record.key(),
            result.path.display()
        ),
        CreateOutcome::AlreadyExists => exists_message.to_string(),
    }
}

pub fn format_delete_result(kind: &str, result: &DeleteResult) -> String {
    match result.outcome {
        DeleteOutcome::Deleted { count } => format!(
            "Deleted {} '{}' ({} record{})",
            kind,
            result.key,
            count,
            if count == 1 { "" } else { "s" }
        ),
        DeleteOutcome::NotFound => format!("No {} matching '{}'; nothing deleted.", kind, result.key),
        DeleteOutcome::CollectionMissing => format!(
            "No {} collection at {}; nothing deleted.",
            kind,
            result.path.display()
        ),
    }
}

pub fn format_modify_result<E: Entity>(
    result: &ModifyResult<E>,
    describe: impl Fn(&E) -> String,
) -> String {
    match result.outcome {
        ModifyOutcome::Updated => {
            let mut out = format!("Updated {} '{}'\n", E::KIND, result.key);
            if let Some(record) = &result.record {
                out.push('\n');
                out.push_str(&describe(record));
            }
            out
        }
        ModifyOutcome::NotFound => {
            format!("No {} matching '{}'; nothing modified.", E::KIND, result.key)
        }
        ModifyOutcome::CollectionMissing => format!(
            "No {} collection at {}; nothing modified.",
            E::KIND,
            result.path.display()
        ),
    }
}

pub fn format_seed_result(result: &SeedResult) -> String {
    let describe = |outcome: CreateOutcome| match outcome {
        CreateOutcome::Created => "created",
        CreateOutcome::AlreadyExists => "already exists",
    };
    format!(
        "{}\n  hotel:       {}\n  customer:    {}\n  reservation: {}",
        format_section_heading("Sample data"),
        describe(result.hotel),
        describe(result.customer),
        describe(result.reservation)
    )
}
