// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, Select, Text};
use std::error::Error;

use crate::cli::handlers::{self, AppContext};
use crate::cli::output;
use crate::core::requirements::{RequirementEditor, RequirementError};

const GENERATE: &str = "🔐  Generate password";
const UPDATE: &str = "🛠️  Update requirements";
const LIST: &str = "📋  List targets";
const DELETE: &str = "🗑️  Delete target";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(ctx: &AppContext) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 HASHPASS GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let options = vec![GENERATE, UPDATE, LIST, DELETE, EXIT];
        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to exit.")
            .prompt_skippable();

        let selection = match selection {
            Ok(Some(selection)) => selection,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        let result = match selection {
            GENERATE => generate_interactive(ctx),
            UPDATE => update_interactive(ctx),
            LIST => handlers::handle_list(ctx).map(|targets| output::print_targets(&targets)),
            DELETE => delete_interactive(ctx),
            _ => break,
        };

        match result {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<InquireError>() {
                Some(InquireError::OperationInterrupted) => break,
                Some(InquireError::OperationCanceled) => continue,
                _ => {
                    log::error!("Menu action failed: {}", e);
                    println!("❌ {}", e);
                }
            },
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

/// Ask for the hash key without echoing it.
pub fn prompt_key() -> Result<String, InquireError> {
    Password::new("Hash key:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
}

fn prompt_target() -> Result<String, InquireError> {
    Text::new("URL or file name:").prompt()
}

fn generate_interactive(ctx: &AppContext) -> Result<(), Box<dyn Error>> {
    let target = prompt_target()?;
    handlers::validate_target(&target)?;
    let key = prompt_key()?;

    let generated = handlers::handle_generate(ctx, &target, &key, |editor| {
        println!("🆕 '{}' is a new target, set its requirements first.", editor.profile().name);
        edit_requirements(editor)
    })?;
    output::print_generated(&generated);
    Ok(())
}

fn update_interactive(ctx: &AppContext) -> Result<(), Box<dyn Error>> {
    let target = prompt_target()?;
    update_from_prompts(ctx, &target)
}

fn delete_interactive(ctx: &AppContext) -> Result<(), Box<dyn Error>> {
    let targets = handlers::handle_list(ctx)?;
    if targets.is_empty() {
        println!("❗ No targets stored yet.");
        return Ok(());
    }

    let names: Vec<String> = targets.into_iter().map(|t| t.name).collect();
    let target = Select::new("Select a target to delete:", names)
        .with_page_size(20)
        .prompt()?;

    let confirmed = Confirm::new(&format!("Delete '{}'?", target))
        .with_default(false)
        .prompt()?;
    if confirmed && handlers::handle_delete(ctx, &target)? {
        println!("✅ Deleted '{}'", target);
    }
    Ok(())
}

/// Walk the user through the four requirement fields, one selection each.
pub fn edit_requirements(editor: &mut RequirementEditor<'_>) -> Result<(), Box<dyn Error>> {
    let uppers = select_count("Minimum number of upper-case letters:", editor, editor.profile().min_uppers)?;
    editor.set_min_uppers(uppers)?;

    let lowers = select_count("Minimum number of lower-case letters:", editor, editor.profile().min_lowers)?;
    editor.set_min_lowers(lowers)?;

    let digits = select_count("Minimum number of digits:", editor, editor.profile().min_digits)?;
    editor.set_min_digits(digits)?;

    let lengths: Vec<usize> = editor.length_options().collect();
    let Some(first) = lengths.first().copied() else {
        return Err(Box::new(RequirementError::LengthOutOfRange {
            value: editor.profile().length,
            min: editor.minimum_length(),
            max: *editor.length_options().end(),
        }));
    };
    let cursor = editor.profile().length.saturating_sub(first).min(lengths.len() - 1);
    let length = Select::new("Required length of password:", lengths)
        .with_starting_cursor(cursor)
        .with_page_size(10)
        .prompt()?;
    editor.set_length(length)?;

    Ok(())
}

fn select_count(message: &str, editor: &RequirementEditor<'_>, current: usize) -> Result<usize, InquireError> {
    let counts: Vec<usize> = editor.count_options().collect();
    let cursor = current.min(counts.len().saturating_sub(1));
    Select::new(message, counts)
        .with_starting_cursor(cursor)
        .prompt()
}

/// Prompt for every requirement of `target` and save the result.
pub fn update_from_prompts(ctx: &AppContext, target: &str) -> Result<(), Box<dyn Error>> {
    let target = handlers::validate_target(target)?;
    let (mut profile, is_new) = handlers::load_or_new(ctx, target)?;
    {
        let mut editor = RequirementEditor::with_config(&mut profile, &ctx.config);
        edit_requirements(&mut editor)?;
    }
    handlers::save_profile(ctx, &profile, is_new)?;
    println!("✅ Requirements saved");
    output::print_profile(&profile);
    Ok(())
}
