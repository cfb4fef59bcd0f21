// src/cli/handlers.rs
use std::error::Error;
use serde::Serialize;

use crate::core::config::Config;
use crate::core::requirements::RequirementEditor;
use crate::generators::{PasswordGenerator, RequirementCounters};
use crate::models::TargetProfile;
use crate::store::TargetStore;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("no url or file name")]
    MissingTarget,

    #[error("no hash key")]
    MissingKey,
}

/// Everything a command needs: settings, the target file and the deriver.
pub struct AppContext {
    pub config: Config,
    pub store: TargetStore,
    pub generator: PasswordGenerator,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        let store = TargetStore::open(&config.data_file)?;
        let generator = PasswordGenerator::new(config.requirement_policy);
        Ok(Self { config, store, generator })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    pub target: String,
    pub password: String,
    pub unmet: RequirementCounters,
}

/// Requirement changes requested on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementUpdate {
    pub uppers: Option<usize>,
    pub lowers: Option<usize>,
    pub digits: Option<usize>,
    pub length: Option<usize>,
}

impl RequirementUpdate {
    pub fn is_empty(&self) -> bool {
        self.uppers.is_none() && self.lowers.is_none() && self.digits.is_none() && self.length.is_none()
    }
}

/// The name is used exactly as typed; only an empty one is rejected.
pub fn validate_target(target: &str) -> Result<&str, CliError> {
    if target.is_empty() {
        return Err(CliError::MissingTarget);
    }
    Ok(target)
}

pub fn validate_key(key: &str) -> Result<(), CliError> {
    if key.is_empty() {
        return Err(CliError::MissingKey);
    }
    Ok(())
}

/// Load a target, or start a fresh zeroed profile when it is unknown.
/// The boolean is true for a fresh profile.
pub fn load_or_new(ctx: &AppContext, target: &str) -> Result<(TargetProfile, bool), Box<dyn Error>> {
    if ctx.store.contains(target)? {
        Ok((ctx.store.load(target)?, false))
    } else {
        Ok((TargetProfile::new(target), true))
    }
}

/// Derive the password for `target`.
///
/// An unknown target is first handed to `register` so its requirements can
/// be filled in, then saved, then derived.
pub fn handle_generate<F>(
    ctx: &AppContext,
    target: &str,
    key: &str,
    register: F,
) -> Result<GeneratedPassword, Box<dyn Error>>
where
    F: FnOnce(&mut RequirementEditor<'_>) -> Result<(), Box<dyn Error>>,
{
    let target = validate_target(target)?;
    validate_key(key)?;

    let (mut profile, is_new) = load_or_new(ctx, target)?;
    if is_new {
        log::info!("Registering new target '{}'", target);
        {
            let mut editor = RequirementEditor::with_config(&mut profile, &ctx.config);
            register(&mut editor)?;
        }
        ctx.store.add(&profile)?;
    }

    let derivation = ctx.generator.derive(&profile, key)?;
    Ok(GeneratedPassword {
        target: profile.name,
        password: derivation.password,
        unmet: derivation.unmet,
    })
}

/// Apply `update` to `target`, creating the target if needed, and save it.
pub fn handle_update(
    ctx: &AppContext,
    target: &str,
    update: RequirementUpdate,
) -> Result<TargetProfile, Box<dyn Error>> {
    let target = validate_target(target)?;
    let (mut profile, is_new) = load_or_new(ctx, target)?;

    {
        let mut editor = RequirementEditor::with_config(&mut profile, &ctx.config);
        if let Some(uppers) = update.uppers {
            editor.set_min_uppers(uppers)?;
        }
        if let Some(lowers) = update.lowers {
            editor.set_min_lowers(lowers)?;
        }
        if let Some(digits) = update.digits {
            editor.set_min_digits(digits)?;
        }
        if let Some(length) = update.length {
            editor.set_length(length)?;
        }
    }

    save_profile(ctx, &profile, is_new)?;
    Ok(profile)
}

pub fn save_profile(ctx: &AppContext, profile: &TargetProfile, is_new: bool) -> Result<(), Box<dyn Error>> {
    if is_new {
        ctx.store.add(profile)?;
    } else {
        ctx.store.update(profile)?;
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext, target: &str) -> Result<TargetProfile, Box<dyn Error>> {
    let target = validate_target(target)?;
    Ok(ctx.store.load(target)?)
}

pub fn handle_list(ctx: &AppContext) -> Result<Vec<TargetProfile>, Box<dyn Error>> {
    Ok(ctx.store.list()?)
}

pub fn handle_delete(ctx: &AppContext, target: &str) -> Result<bool, Box<dyn Error>> {
    let target = validate_target(target)?;
    Ok(ctx.store.delete(target)?)
}
