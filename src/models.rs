// src/models.rs
use serde::{Serialize, Deserialize};

/// A named target (URL or file label) and the composition rules its
/// derived password must follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub name: String,
    pub min_uppers: usize,
    pub min_lowers: usize,
    pub min_digits: usize,
    pub length: usize,
}

impl TargetProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_uppers: 0,
            min_lowers: 0,
            min_digits: 0,
            length: 0,
        }
    }
}
