//! TransX CLI - Console front-end for the TransX ledger
//!
//! - `app`: the menu loop
//! - `config`: TOML configuration
//! - `input`: parsing and validation of typed input
//! - `ui`: banners, menu and cards

pub mod app;
pub mod config;
pub mod input;
pub mod ui;

pub use app::{App, MenuChoice};
pub use config::{AppConfig, ConfigError};
