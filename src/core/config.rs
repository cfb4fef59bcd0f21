// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::password::DIGEST_HEX_LEN;
use crate::generators::RequirementPolicy;

// Configuration for the password deriver and its target store
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_file: PathBuf,

    // Derivation
    pub requirement_policy: RequirementPolicy,

    // Requirement editing
    pub max_class_count: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Storage
            data_file: PathBuf::from("data.json"),

            // Derivation
            requirement_policy: RequirementPolicy::Lenient,

            // Requirement editing
            max_class_count: 9,
            max_password_length: 29,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables.
    // Problems are returned rather than logged, since the logger is
    // configured from the result.
    pub fn load() -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        match crate::utils::get_app_config_dir() {
            Some(dir) => config.data_file = dir.join("data.json"),
            None => warnings.push("Could not determine config directory, using ./data.json".to_string()),
        }

        warnings.extend(config.apply_vars(|name| env::var(name).ok()));
        (config, warnings)
    }

    // Override settings from `lookup`, returning a warning per bad value
    pub fn apply_vars<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        // Storage
        if let Some(path) = lookup("HASHPASS_DATA") {
            if !path.trim().is_empty() {
                self.data_file = PathBuf::from(path);
            }
        }

        // Derivation
        if let Some(policy) = lookup("REQUIREMENT_POLICY") {
            match parse_policy(&policy) {
                Some(policy) => self.requirement_policy = policy,
                None => warnings.push(format!("Unknown requirement policy '{}', using lenient", policy)),
            }
        }

        // Requirement editing
        if let Some(val) = lookup("MAX_CLASS_COUNT") {
            match val.parse() {
                Ok(max) => self.max_class_count = max,
                Err(_) => warnings.push(format!("Ignoring invalid MAX_CLASS_COUNT '{}'", val)),
            }
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(max) => self.max_password_length = max.min(DIGEST_HEX_LEN),
                Err(_) => warnings.push(format!("Ignoring invalid MAX_PASSWORD_LENGTH '{}'", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Some(level) => self.log_level = level,
                None => warnings.push(format!("Unknown log level '{}'", level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                self.log_file = Some(PathBuf::from(file));
            }
        }

        warnings
    }
}

pub fn parse_policy(value: &str) -> Option<RequirementPolicy> {
    match value.trim().to_lowercase().as_str() {
        "lenient" => Some(RequirementPolicy::Lenient),
        "strict" => Some(RequirementPolicy::Strict),
        _ => None,
    }
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_requirement_window() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.max_class_count, 9);
        assert_eq!(config.max_password_length, 29);
        assert_eq!(config.requirement_policy, RequirementPolicy::Lenient);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn bad_values_are_reported_and_ignored() {
        let mut config = Config::default();
        let warnings = config.apply_vars(|name| match name {
            "REQUIREMENT_POLICY" => Some("loose".to_string()),
            "MAX_CLASS_COUNT" => Some("nine".to_string()),
            "MAX_PASSWORD_LENGTH" => Some("500".to_string()),
            "LOG_LEVEL" => Some("verbose".to_string()),
            _ => None,
        });

        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("loose"));
        assert!(warnings[1].contains("MAX_CLASS_COUNT"));
        assert!(warnings[2].contains("verbose"));
        assert_eq!(config.requirement_policy, RequirementPolicy::Lenient);
        assert_eq!(config.max_class_count, 9);
        assert_eq!(config.max_password_length, DIGEST_HEX_LEN);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn good_values_are_applied() {
        let mut config = Config::default();
        let warnings = config.apply_vars(|name| match name {
            "HASHPASS_DATA" => Some("/tmp/targets.json".to_string()),
            "REQUIREMENT_POLICY" => Some("strict".to_string()),
            "LOG_FILE" => Some("hashpass.log".to_string()),
            _ => None,
        });

        assert!(warnings.is_empty());
        assert_eq!(config.data_file, PathBuf::from("/tmp/targets.json"));
        assert_eq!(config.requirement_policy, RequirementPolicy::Strict);
        assert_eq!(config.log_file, Some(PathBuf::from("hashpass.log")));
    }

    #[test]
    fn policy_parsing() {
        assert_eq!(parse_policy("Strict"), Some(RequirementPolicy::Strict));
        assert_eq!(parse_policy(" lenient "), Some(RequirementPolicy::Lenient));
        assert_eq!(parse_policy("loose"), None);
    }

    #[test]
    fn level_parsing() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("verbose"), None);
    }
}
