//! Integration tests for innkeep record collections and the CLI

mod cli_contracts;
mod customer_operations;
mod parse_matrix;
mod reservation_scenarios;
mod support;
