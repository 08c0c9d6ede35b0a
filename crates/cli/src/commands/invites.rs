//! Invites command implementation.

use anyhow::Result;
use clap::Subcommand;
use santa_client::CreateInviteParams;
use santa_config::Config;

use crate::commands::{build_client, print_reply};

#[derive(Debug, Subcommand)]
pub enum InvitesCommand {
    /// List your invites
    List,
    /// Create an invite
    Create {
        /// Invite code (generated by the server if omitted)
        #[arg(long)]
        code: Option<String>,
        /// Invalidate the invite after its first use
        #[arg(long)]
        one_use: bool,
    },
    /// Delete an invite
    Delete {
        /// Invite id
        id: String,
    },
}

pub async fn run(config: &Config, command: InvitesCommand) -> Result<()> {
    let client = build_client(config)?;
    let reply = match command {
        InvitesCommand::List => client.list_invites().await,
        InvitesCommand::Create { code, one_use } => {
            let params = CreateInviteParams {
                invite_code: code,
                one_use: one_use.then_some(true),
            };
            client.create_invite(&params).await
        }
        InvitesCommand::Delete { id } => client.delete_invite(&id).await,
    };
    print_reply(&client, reply)
}
