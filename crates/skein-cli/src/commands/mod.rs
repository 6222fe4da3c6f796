//! Command implementations for the skein CLI.
//!
//! - [`check`] - Configuration validation
//! - [`print`] - Resolved configuration output
//! - [`init`] - Configuration scaffolding
//! - [`schema`] - JSON Schema output
//!
//! Each command is implemented in its own module and provides an `execute`
//! function that takes the parsed command arguments and returns a Result.

pub mod check;
pub mod init;
pub mod print;
pub mod schema;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use print::execute as print_execute;
pub use schema::execute as schema_execute;
