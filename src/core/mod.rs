// src/core/mod.rs
pub mod config;
pub mod requirements;

pub use config::Config;
pub use requirements::{RequirementEditor, RequirementError};
