// Library root
// -----------
// The `whatphone` binary is a thin wrapper around these modules.
//
// Module responsibilities:
// - `fields`: the data points a lookup can request and their wire tokens.
// - `api`: the blocking HTTP client that performs the lookup.
// - `models`: the decoded response, one `Option` per data point.
// - `report`: turns a decoded response into the text report.
// - `config`: credentials and the JSON file they are stored in.
// - `cli` / `commands`: argument definitions and the command handlers.
// - `ui`: logging, spinner and prompts (all on stderr).
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod models;
pub mod report;
pub mod ui;

pub use error::{Error, Result};
