pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "python")]
mod python;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{MemorySink, StdoutSink, WriterSink};
pub use config::AppConfig;
pub use core::printer::{print_number, NumberPrinter};
pub use domain::model::{NonNegativeNumber, EXAMPLE_LIBRARY};
pub use domain::ports::OutputSink;
pub use utils::error::{PrinterError, Result};
