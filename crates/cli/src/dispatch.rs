//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use santa_config::Config;

use crate::args::Commands;
use crate::commands;

/// Dispatch a parsed subcommand to its handler.
pub(crate) async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Login { username, password } => {
            commands::session::run_login(&config, &username, password).await
        }
        Commands::Logout { everywhere } => commands::session::run_logout(&config, everywhere).await,
        Commands::Signup {
            login,
            nickname,
            email,
            password,
        } => commands::session::run_signup(&config, login, nickname, email, password).await,
        Commands::Status => commands::session::run_status(&config),
        Commands::Whoami => commands::session::run_whoami(&config).await,
        Commands::Pools { command } => commands::pools::run(&config, command).await,
        Commands::Join {
            pool_id,
            account_id,
            wishlist,
        } => commands::members::run_join(&config, pool_id, account_id, wishlist).await,
        Commands::Leave { member_id } => commands::members::run_leave(&config, &member_id).await,
        Commands::Rooms { command } => commands::rooms::run(&config, command).await,
        Commands::Messages { command } => commands::messages::run(&config, command).await,
        Commands::Invites { command } => commands::invites::run(&config, command).await,
    }
}
