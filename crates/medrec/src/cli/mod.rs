//! CLI functionality for the medrec tool
//!
//! One module per subcommand plus shared output formatting and input
//! validation helpers.

pub mod add;
pub mod edit;
pub mod list;
pub mod output;
pub mod record;
pub mod remove;
pub mod show;
pub mod validate;
