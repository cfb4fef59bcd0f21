// src/lib.rs
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod store;
pub mod utils;

pub use crate::generators::{Derivation, DeriveError, PasswordGenerator, RequirementPolicy};
pub use crate::models::TargetProfile;
