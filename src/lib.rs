pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod finding;
pub mod output;
pub mod pack;
pub mod php;
pub mod scanner;
pub mod validator;

pub use error::{LangpackGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
