//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build configuration (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    invites::InvitesCommand, messages::MessagesCommand, pools::PoolsCommand, rooms::RoomsCommand,
};

#[derive(Parser)]
#[command(name = "santa-cli")]
#[command(about = "Mini Santa CLI - Organize gift exchanges from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  santa-cli login elf\n  santa-cli pools list\n  santa-cli pools create 'Office 2026' --min-price 10 --max-price 30\n  santa-cli join 3 --account-id 7 --wishlist 'warm socks'\n  santa-cli logout --everywhere\n"
)]
pub struct Cli {
    /// Base URL of the Mini Santa server (e.g., http://localhost:8080)
    #[arg(short, long, global = true, env = "SANTA_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SANTA_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Where the session is stored (defaults to the platform data directory)
    #[arg(long, global = true, env = "SANTA_SESSION_PATH", value_name = "FILE")]
    pub session_path: Option<PathBuf>,

    /// Log request flow at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with a username and password
    Login {
        /// Account login
        username: String,

        /// Password (prompted for if omitted)
        #[arg(short, long, env = "SANTA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout {
        /// Also revoke every other session of the account on the server
        #[arg(long)]
        everywhere: bool,
    },

    /// Register a new account
    Signup {
        /// Account login
        login: String,

        /// Display name shown to other pool members
        #[arg(long)]
        nickname: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Password (prompted for, with confirmation, if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show whether a session is stored and when it expires
    Status,

    /// Show the account id and nickname of the logged-in user
    Whoami,

    /// List and manage gift-exchange pools
    Pools {
        #[command(subcommand)]
        command: PoolsCommand,
    },

    /// Join a pool
    Join {
        /// Pool to join
        pool_id: String,

        /// Account joining the pool
        #[arg(long)]
        account_id: String,

        /// Gift ideas for your Secret Santa
        #[arg(long)]
        wishlist: Option<String>,
    },

    /// Leave a pool
    Leave {
        /// Membership to remove
        member_id: String,
    },

    /// Browse pool chat rooms
    Rooms {
        #[command(subcommand)]
        command: RoomsCommand,
    },

    /// Read and post chat messages
    Messages {
        #[command(subcommand)]
        command: MessagesCommand,
    },

    /// Manage invite codes
    Invites {
        #[command(subcommand)]
        command: InvitesCommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_logout_everywhere() {
        let cli = Cli::try_parse_from(["santa-cli", "logout", "--everywhere"]).unwrap();
        assert!(matches!(cli.command, Commands::Logout { everywhere: true }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "santa-cli",
            "status",
            "--base-url",
            "http://santa.test",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://santa.test"));
        assert!(cli.verbose);
    }
}
