// src/core/requirements.rs
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::core::config::Config;
use crate::models::TargetProfile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequirementError {
    #[error("{field} must be between 0 and {max}, got {value}")]
    CountOutOfRange { field: &'static str, value: usize, max: usize },

    #[error("Length must be between {min} and {max}, got {value}")]
    LengthOutOfRange { value: usize, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, RequirementError>;

/// Edits a profile's counters while keeping `length` at least as large as
/// the sum of the per-class minimums.
pub struct RequirementEditor<'a> {
    profile: &'a mut TargetProfile,
    max_class_count: usize,
    max_length: usize,
}

impl<'a> RequirementEditor<'a> {
    pub fn new(profile: &'a mut TargetProfile, max_class_count: usize, max_length: usize) -> Self {
        Self { profile, max_class_count, max_length }
    }

    pub fn with_config(profile: &'a mut TargetProfile, config: &Config) -> Self {
        Self::new(profile, config.max_class_count, config.max_password_length)
    }

    pub fn profile(&self) -> &TargetProfile {
        self.profile
    }

    pub fn minimum_length(&self) -> usize {
        self.profile
            .min_uppers
            .saturating_add(self.profile.min_lowers)
            .saturating_add(self.profile.min_digits)
    }

    pub fn count_options(&self) -> RangeInclusive<usize> {
        0..=self.max_class_count
    }

    /// Lengths the profile may currently take. Empty when the minimums
    /// already exceed the maximum length.
    pub fn length_options(&self) -> RangeInclusive<usize> {
        self.minimum_length()..=self.max_length
    }

    pub fn set_min_uppers(&mut self, value: usize) -> Result<()> {
        self.check_count("min_uppers", value)?;
        self.profile.min_uppers = value;
        self.raise_length();
        Ok(())
    }

    pub fn set_min_lowers(&mut self, value: usize) -> Result<()> {
        self.check_count("min_lowers", value)?;
        self.profile.min_lowers = value;
        self.raise_length();
        Ok(())
    }

    pub fn set_min_digits(&mut self, value: usize) -> Result<()> {
        self.check_count("min_digits", value)?;
        self.profile.min_digits = value;
        self.raise_length();
        Ok(())
    }

    pub fn set_length(&mut self, value: usize) -> Result<()> {
        let min = self.minimum_length();
        if value < min || value > self.max_length {
            return Err(RequirementError::LengthOutOfRange { value, min, max: self.max_length });
        }
        self.profile.length = value;
        Ok(())
    }

    fn check_count(&self, field: &'static str, value: usize) -> Result<()> {
        if value > self.max_class_count {
            return Err(RequirementError::CountOutOfRange { field, value, max: self.max_class_count });
        }
        Ok(())
    }

    fn raise_length(&mut self) {
        let min = self.minimum_length();
        if self.profile.length < min {
            log::debug!("Raising length of '{}' from {} to {}", self.profile.name, self.profile.length, min);
            self.profile.length = min;
        }
    }
}
