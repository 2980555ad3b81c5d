//! The gdx driver.
//!
//! The `gdx` binary is a thin argument dispatcher over this library:
//! [`Session`] scans sources and reports problems, [`commands`] implements
//! each subcommand against caller-supplied readers and writers so the whole
//! driver can be exercised in memory.

pub mod commands;
mod error;
pub mod options;
pub mod problem;
mod session;
mod tracing_setup;

pub use error::{exit_code, Error};
pub use options::CliOptions;
pub use session::Session;
pub use tracing_setup::init_tracing;
