//! Configuration: named defaults and runtime settings

pub mod defaults;
pub mod settings;

pub use settings::{CompressSettings, ConvertSettings, ValidationMode};
