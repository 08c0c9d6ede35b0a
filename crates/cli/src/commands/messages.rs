//! Messages command implementation.

use anyhow::{Result, bail};
use clap::Subcommand;
use santa_client::SendMessageParams;
use santa_config::Config;

use crate::commands::{build_client, print_reply};

#[derive(Debug, Subcommand)]
pub enum MessagesCommand {
    /// List messages
    List,
    /// Post a message into a room
    Send {
        /// Room id
        room_id: String,
        /// Message text
        text: String,
        /// Sending account
        #[arg(long)]
        account_id: String,
    },
}

pub async fn run(config: &Config, command: MessagesCommand) -> Result<()> {
    let client = build_client(config)?;
    let reply = match command {
        MessagesCommand::List => client.list_messages().await,
        MessagesCommand::Send {
            room_id,
            text,
            account_id,
        } => {
            if text.trim().is_empty() {
                bail!("Message text must not be empty");
            }
            let params = SendMessageParams {
                room_id,
                account_id,
                text_content: text,
            };
            client.send_message(&params).await
        }
    };
    print_reply(&client, reply)
}
