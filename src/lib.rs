//! tracefront - argument parsing and configuration resolution for a
//! dynamic-analysis instrumentation launcher
//!
//! This library turns a flat command line into a validated
//! [`settings::FrontEndArgs`], the typed configuration consumed by the
//! instrumentation engine, the value-capture visitor and the trace printer.

pub mod cli;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod flags;
pub mod parser;
pub mod report;
pub mod settings;
pub mod side_files;
pub mod table;
pub mod target;
pub mod transforms;
pub mod visibility;

pub use error::{ArgsError, Result};
pub use settings::FrontEndArgs;
