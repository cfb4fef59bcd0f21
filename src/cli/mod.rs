// src/cli/mod.rs
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod output;

pub use commands::CliCommand;
use handlers::{AppContext, RequirementUpdate};

#[derive(Parser, Debug)]
#[command(author, version, about = "Deterministic per-target password generator", long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long)]
    pub json: bool,

    /// Target requirements file
    #[arg(long, short, env = "HASHPASS_DATA")]
    pub data: Option<PathBuf>,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

pub fn run(args: Args, ctx: &AppContext) -> Result<(), Box<dyn Error>> {
    let Some(command) = args.command else {
        return menu::run_cli_menu(ctx);
    };

    match command {
        CliCommand::Generate { target, key } => {
            handlers::validate_target(&target)?;
            let key = match key {
                Some(key) => key,
                None => menu::prompt_key()?,
            };
            let generated = handlers::handle_generate(ctx, &target, &key, |editor| {
                if args.json {
                    return Err(format!(
                        "unknown target '{}', set its requirements with `hashpass update` first",
                        editor.profile().name
                    )
                    .into());
                }
                println!("🆕 '{}' is a new target, set its requirements first.", editor.profile().name);
                menu::edit_requirements(editor)
            })?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&generated)?);
            } else {
                output::print_generated(&generated);
            }
        }
        CliCommand::Update { target, uppers, lowers, digits, length } => {
            let update = RequirementUpdate { uppers, lowers, digits, length };
            if update.is_empty() && !args.json {
                menu::update_from_prompts(ctx, &target)?;
            } else {
                let profile = handlers::handle_update(ctx, &target, update)?;
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&profile)?);
                } else {
                    println!("✅ Requirements saved");
                    output::print_profile(&profile);
                }
            }
        }
        CliCommand::Show { target } => {
            let profile = handlers::handle_show(ctx, &target)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                output::print_profile(&profile);
            }
        }
        CliCommand::List => {
            let targets = handlers::handle_list(ctx)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&targets)?);
            } else {
                output::print_targets(&targets);
            }
        }
        CliCommand::Delete { target } => {
            let deleted = handlers::handle_delete(ctx, &target)?;
            if args.json {
                println!("{}", serde_json::json!({ "target": target, "deleted": deleted }));
            } else if deleted {
                println!("✅ Deleted '{}'", target);
            } else {
                println!("❗ No target named '{}'", target);
            }
        }
    }

    Ok(())
}
