// src/generators/mod.rs
pub mod password;

pub use password::{
    CharClass, Derivation, DeriveError, PasswordGenerator, RequirementCounters, RequirementPolicy,
};
