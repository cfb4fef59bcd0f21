// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Derive the password for a target
    Generate {
        /// URL or file name
        #[arg(required = true)]
        target: String,

        /// Hash key (prompted for when omitted)
        #[arg(long, short, env = "HASHPASS_KEY", hide_env_values = true)]
        key: Option<String>,
    },

    /// Set the password requirements of a target
    Update {
        /// URL or file name
        #[arg(required = true)]
        target: String,

        /// Minimum number of upper-case letters
        #[arg(long)]
        uppers: Option<usize>,

        /// Minimum number of lower-case letters
        #[arg(long)]
        lowers: Option<usize>,

        /// Minimum number of digits
        #[arg(long)]
        digits: Option<usize>,

        /// Exact password length
        #[arg(long)]
        length: Option<usize>,
    },

    /// Show the requirements of a target
    Show {
        #[arg(required = true)]
        target: String,
    },

    /// List all known targets
    List,

    /// Forget a target
    Delete {
        #[arg(required = true)]
        target: String,
    },
}
