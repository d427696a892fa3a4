//! Command-line interface definitions

pub mod args;

pub use args::{Args, Command};
