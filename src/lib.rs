pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::printer::{JsonPrinter, LinePrinter};
pub use crate::config::{toml_config::RosterConfig, OutputFormat};
pub use crate::adapters::printer::print_report;
pub use crate::core::{container::OrderedContainer, roster::Roster};
pub use crate::domain::model::{Average, Course, Grade, Student, StudentId};
pub use crate::domain::ports::{Element, StudentPrinter};
pub use crate::utils::error::{Result, RosterError};
